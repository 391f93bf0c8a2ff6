//! # statr
//!
//! Descriptive statistics over samples of numbers, least-squares line
//! fitting, and x/y charts drawn in the terminal.
//!
//! Each statistic in [`stats`] takes its sample as a slice. Most also come
//! as a variadic macro that collects its arguments first:
//!
//! ```
//! use statr::{mean, stats};
//! assert_eq!(stats::mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
//! assert_eq!(mean!(1, 2, 3, 4).unwrap(), 2.5);
//! ```

pub mod error;
pub mod input;
pub mod plot;
pub mod regression;
pub mod sample;
pub mod stats;
pub mod summary;
pub mod ui;

pub use error::{Error, Result};
pub use sample::Sample;
