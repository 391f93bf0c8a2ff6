use crate::{
    error::{Error, Result},
    stats::mean,
};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Least-squares line through paired samples, `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient
    pub r_value: f64,
    /// two-sided p-value for the hypothesis that the slope is zero
    pub p_value: f64,
    /// standard error of the slope
    pub stderr: f64,
    /// standard error of the intercept
    pub intercept_stderr: f64,
}

impl LinearFit {
    /// Fits `y` against `x`. The two samples are matched index by index.
    ///
    /// # Errors
    /// - [`Error::LengthMismatch`] when `x` and `y` differ in length.
    /// - [`Error::Empty`] when there are no points.
    /// - [`Error::DivisionByZero`] when every x is the same, a single point included.
    ///
    /// # Examples
    /// ```
    /// use statr::regression::LinearFit;
    /// let fit = LinearFit::new(&[1.0, 2.0, 3.0, 4.0], &[3.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert!((fit.slope - 2.0).abs() < 1e-12);
    /// assert!((fit.intercept - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }

        let (mean_x, mean_y) = (mean(x)?, mean(y)?);

        let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
        for (xi, yi) in x.iter().zip(y) {
            let (dx, dy) = (xi - mean_x, yi - mean_y);
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        if sxx == 0.0 {
            return Err(Error::DivisionByZero);
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;

        let r_value = if syy == 0.0 {
            0.0
        } else {
            (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
        };

        let n = x.len() as f64;
        let degrees_of_freedom = n - 2.0;
        let stderr = if degrees_of_freedom > 0.0 {
            ((1.0 - r_value * r_value) * syy / sxx / degrees_of_freedom).sqrt()
        } else {
            0.0
        };
        let sum_x_squared = x.iter().map(|xi| xi * xi).sum::<f64>();
        let intercept_stderr = stderr * (sum_x_squared / n).sqrt();

        Ok(Self {
            slope,
            intercept,
            r_value,
            p_value: slope_p_value(r_value, degrees_of_freedom)?,
            stderr,
            intercept_stderr,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// the fitted line evaluated at each of `xs`
    pub fn line(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }
}

/// Two-sided t-test of a zero slope, `t = r·sqrt(df / (1 − r²))`.
fn slope_p_value(r_value: f64, degrees_of_freedom: f64) -> Result<f64> {
    // two points always lie on a line
    if degrees_of_freedom <= 0.0 {
        return Ok(if r_value == 0.0 { 1.0 } else { 0.0 });
    }
    if r_value.abs() >= 1.0 {
        return Ok(0.0);
    }

    let t = r_value * (degrees_of_freedom / (1.0 - r_value * r_value)).sqrt();
    let distribution = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .map_err(|err| Error::Distribution(err.to_string()))?;

    Ok(2.0 * (1.0 - distribution.cdf(t.abs())))
}
