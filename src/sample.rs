use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{ops::Deref, str::FromStr};

/// an ordered run of numbers handed to a statistic
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample(Vec<f64>);

impl Sample {
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Sample {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for Sample {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parses numbers separated by whitespace and/or commas.
impl FromStr for Sample {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(parse_value)
            .collect()
    }
}

pub(crate) fn parse_value(token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| Error::TypeMismatch {
        value: token.to_string(),
    })
}

/// Realizes `values` into a [`Sample`] and hands it to `stat`.
///
/// This is the one place where the collection and the variadic call shapes
/// meet: the iterator is drained exactly once, so lazy sources are fine.
///
/// ```
/// use statr::{sample::normalize, stats};
/// let doubled = (1..=4).map(|x| f64::from(x) * 2.0);
/// assert_eq!(normalize(doubled, stats::mean).unwrap(), 5.0);
/// ```
pub fn normalize<I, F, R>(values: I, stat: F) -> Result<R>
where
    I: IntoIterator,
    I::Item: Into<f64>,
    F: FnOnce(&[f64]) -> Result<R>,
{
    let sample: Sample = values.into_iter().map(Into::into).collect();
    stat(&sample)
}

/// Builds a [`Sample`] from scalar expressions.
#[macro_export]
macro_rules! sample {
    ($($x:expr),+ $(,)?) => {
        $crate::sample::Sample::from(vec![$($x as f64),+])
    };
}

/// `range_of!(1, 3, 7, 2)`, the variadic form of [`stats::range_of`](crate::stats::range_of)
#[macro_export]
macro_rules! range_of {
    ($($x:expr),+ $(,)?) => {
        $crate::sample::normalize([$($x as f64),+], $crate::stats::range_of)
    };
}

/// `mean!(1, 2, 3, 4)`, the variadic form of [`stats::mean`](crate::stats::mean)
#[macro_export]
macro_rules! mean {
    ($($x:expr),+ $(,)?) => {
        $crate::sample::normalize([$($x as f64),+], $crate::stats::mean)
    };
}

/// `median!(5, 1, 3)`, the variadic form of [`stats::median`](crate::stats::median)
#[macro_export]
macro_rules! median {
    ($($x:expr),+ $(,)?) => {
        $crate::sample::normalize([$($x as f64),+], $crate::stats::median)
    };
}

/// `quartiles!(1, 2, 3, 4, 5, 6, 7)`, the variadic form of
/// [`stats::quartiles`](crate::stats::quartiles)
#[macro_export]
macro_rules! quartiles {
    ($($x:expr),+ $(,)?) => {
        $crate::sample::normalize([$($x as f64),+], $crate::stats::quartiles)
    };
}
