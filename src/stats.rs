//! Descriptive statistics over a sample of numbers.
//!
//! Every function takes the sample as a slice and never mutates it; the
//! order statistics sort a private copy. For the variadic call shape see the
//! [`range_of!`](crate::range_of), [`mean!`](crate::mean),
//! [`median!`](crate::median) and [`quartiles!`](crate::quartiles) macros.
//!
//! The formulas are translated directly, with no compensated summation.

use crate::error::{Error, Result};
use itertools::{Itertools, MinMaxResult};
use std::f64::consts::PI;

/// Returns the spread of the sample, `max - min`.
///
/// # Errors
/// - [`Error::Empty`] for an empty sample.
/// - [`Error::TypeMismatch`] if the sample holds a NaN.
///
/// # Examples
/// ```
/// use statr::stats::range_of;
/// assert_eq!(range_of(&[1.0, 3.0, 7.0, 2.0]).unwrap(), 6.0);
/// ```
pub fn range_of(data: &[f64]) -> Result<f64> {
    ensure_ordered(data)?;

    match data.iter().minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => Err(Error::Empty),
        MinMaxResult::OneElement(x) => Ok(x - x),
        MinMaxResult::MinMax(min, max) => Ok(max - min),
    }
}

/// Returns the arithmetic mean, sum divided by count.
///
/// # Examples
/// ```
/// use statr::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    match data.len() {
        0 => Err(Error::Empty),
        count => Ok(data.iter().sum::<f64>() / count as f64),
    }
}

/// Returns the median.
///
/// An odd-sized sample yields its middle element; an even-sized one yields
/// the mean of the two central elements.
///
/// # Errors
/// - [`Error::Empty`] for an empty sample.
/// - [`Error::TypeMismatch`] if the sample holds a NaN.
///
/// # Examples
/// ```
/// use statr::stats::median;
/// assert_eq!(median(&[5.0, 1.0, 3.0, 2.0, 4.0]).unwrap(), 3.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median(data: &[f64]) -> Result<f64> {
    middle(&sorted(data)?)
}

/// Returns the lower quartile, the median and the upper quartile.
///
/// The sorted sample is cut in two halves and each half's median becomes a
/// quartile. For an odd count the middle element belongs to neither half.
///
/// # Errors
/// - [`Error::Empty`] when a half is empty, i.e. for fewer than two values.
/// - [`Error::TypeMismatch`] if the sample holds a NaN.
///
/// # Examples
/// ```
/// use statr::stats::quartiles;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
/// assert_eq!(quartiles(&data).unwrap(), (2.0, 4.0, 6.0));
/// ```
pub fn quartiles(data: &[f64]) -> Result<(f64, f64, f64)> {
    let sorted = sorted(data)?;
    let half = sorted.len() / 2;

    let (low, high) = if sorted.len() % 2 == 1 {
        (&sorted[..half], &sorted[half + 1..])
    } else {
        (&sorted[..half], &sorted[half..])
    };

    Ok((middle(low)?, middle(&sorted)?, middle(high)?))
}

/// Returns the standard deviation.
///
/// With `sample_correction` off the sample is taken as the whole population
/// and the squared deviations are divided by `n`. With it on, Bessel's
/// correction divides by `n - 1`.
///
/// Unlike the other statistics there is no variadic form: the caller passes
/// a concrete collection.
///
/// # Errors
/// [`Error::DivisionByZero`] when the divisor is zero: an empty sample, or
/// a single value with `sample_correction`.
///
/// # Examples
/// ```
/// use statr::stats::stddev;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(stddev(&v, false).unwrap(), 2.0);
/// assert!((stddev(&v, true).unwrap() - 2.138089935299395).abs() < 1e-12);
/// ```
pub fn stddev(data: &[f64], sample_correction: bool) -> Result<f64> {
    let divisor = match sample_correction {
        true => data.len().saturating_sub(1),
        false => data.len(),
    };
    if divisor == 0 {
        return Err(Error::DivisionByZero);
    }

    let data_mean = mean(data)?;
    let squares = data
        .iter()
        .map(|value| {
            let diff = value - data_mean;

            diff * diff
        })
        .sum::<f64>();

    Ok((squares / divisor as f64).sqrt())
}

/// Density of the normal distribution N(`mean`, `stddev`) at `x`.
///
/// `(1 / (σ√(2π))) · e^(−(x−μ)² / (2σ²))`
///
/// # Errors
/// [`Error::DivisionByZero`] when `stddev` is zero.
///
/// # Examples
/// ```
/// use statr::stats::normal_density;
/// let peak = normal_density(0.0, 0.0, 1.0).unwrap();
/// assert!((peak - 0.398942).abs() < 1e-6);
/// ```
pub fn normal_density(x: f64, mean: f64, stddev: f64) -> Result<f64> {
    if stddev == 0.0 {
        return Err(Error::DivisionByZero);
    }

    let coefficient = 1.0 / (stddev * (2.0 * PI).sqrt());
    let exponent = -((x - mean).powi(2) / (2.0 * stddev.powi(2)));

    Ok(coefficient * exponent.exp())
}

// NaN has no place in an ordering
fn ensure_ordered(data: &[f64]) -> Result<()> {
    match data.iter().find(|x| x.is_nan()) {
        Some(nan) => Err(Error::TypeMismatch {
            value: nan.to_string(),
        }),
        None => Ok(()),
    }
}

fn sorted(data: &[f64]) -> Result<Vec<f64>> {
    ensure_ordered(data)?;

    Ok(data
        .iter()
        .copied()
        .sorted_by(|a, b| a.total_cmp(b))
        .collect())
}

/// Median of an already sorted slice.
fn middle(sorted: &[f64]) -> Result<f64> {
    let count = sorted.len();

    match count {
        0 => Err(Error::Empty),
        even if even % 2 == 0 => mean(&[sorted[count / 2], sorted[count / 2 - 1]]),
        _ => Ok(sorted[count / 2]),
    }
}
