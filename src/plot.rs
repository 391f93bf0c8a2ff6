use crate::{
    error::{Error, Result},
    regression::LinearFit,
};
use itertools::{Itertools, MinMaxResult};
use std::str::FromStr;
use tui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Line,
    Scatter,
}

/// Color and shape of a series, written as a short token such as `"r"`,
/// `"go"` or `"k-"`.
///
/// The first letter picks the color (`b g r c m y k w`), then `-` draws a
/// line and `o` or `.` draws the bare points. A token without a shape draws
/// a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub color: Color,
    pub shape: Shape,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::Blue,
            shape: Shape::Line,
        }
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let unknown = || Error::UnknownStyle {
            token: token.to_string(),
        };

        let mut style = Style::default();
        let mut chars = token.chars().peekable();

        if let Some(color) = chars.peek().and_then(|&c| color_of(c)) {
            style.color = color;
            chars.next();
        }

        match (chars.next(), chars.next()) {
            (None, _) => {}
            (Some('-'), None) => style.shape = Shape::Line,
            (Some('o' | '.'), None) => style.shape = Shape::Scatter,
            _ => return Err(unknown()),
        }

        Ok(style)
    }
}

fn color_of(c: char) -> Option<Color> {
    match c {
        'b' => Some(Color::Blue),
        'g' => Some(Color::Green),
        'r' => Some(Color::Red),
        'c' => Some(Color::Cyan),
        'm' => Some(Color::Magenta),
        'y' => Some(Color::Yellow),
        'k' => Some(Color::Black),
        'w' => Some(Color::White),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
    pub style: Style,
}

impl Series {
    pub fn new<S: Into<String>>(name: S, points: Vec<(f64, f64)>, style: Style) -> Self {
        Self {
            name: name.into(),
            points,
            style,
        }
    }
}

/// a chart of one or more series, drawn by [`crate::ui`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Plot {
    pub title: String,
    pub series: Vec<Series>,
}

impl Plot {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            series: vec![],
        }
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        bounds(self.points().map(|p| p.0))
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        bounds(self.points().map(|p| p.1))
    }

    fn points(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.series.iter().flat_map(|s| s.points.iter())
    }
}

fn bounds<I: Iterator<Item = f64>>(values: I) -> [f64; 2] {
    match values.filter(|v| v.is_finite()).minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => [0.0, 1.0],
        MinMaxResult::OneElement(v) => [v - 0.5, v + 0.5],
        MinMaxResult::MinMax(lo, hi) if lo == hi => [lo - 0.5, hi + 0.5],
        MinMaxResult::MinMax(lo, hi) => [lo, hi],
    }
}

/// Fits a line through `x`/`y` and charts the raw points in `style` next to
/// the fitted line, which is evaluated at the same x-coordinates.
pub fn regression_plot(x: &[f64], y: &[f64], style: Style) -> Result<(LinearFit, Plot)> {
    let fit = LinearFit::new(x, y)?;

    let raw = x.iter().copied().zip(y.iter().copied()).collect();
    let fitted = x.iter().copied().zip(fit.line(x)).collect();

    let plot = Plot::new(format!(
        "y = {:.4}x + {:.4}   r = {:.4}",
        fit.slope, fit.intercept, fit.r_value
    ))
    .series(Series::new("data", raw, style))
    .series(Series::new("fit", fitted, Style::default()));

    Ok((fit, plot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_tokens() {
        assert_eq!("".parse::<Style>().unwrap(), Style::default());
        assert_eq!(
            "r".parse::<Style>().unwrap(),
            Style {
                color: Color::Red,
                shape: Shape::Line
            }
        );
        assert_eq!(
            "go".parse::<Style>().unwrap(),
            Style {
                color: Color::Green,
                shape: Shape::Scatter
            }
        );
        assert_eq!(
            ".".parse::<Style>().unwrap(),
            Style {
                color: Color::Blue,
                shape: Shape::Scatter
            }
        );
        assert_eq!("k-".parse::<Style>().unwrap().color, Color::Black);
    }

    #[test]
    fn test_style_unknown() {
        for token in ["z", "r--", "ro-", "-r"] {
            let err = token.parse::<Style>().unwrap_err();
            assert!(matches!(err, Error::UnknownStyle { token: t } if t == token));
        }
    }

    #[test]
    fn test_bounds() {
        let plot = Plot::new("p")
            .series(Series::new("a", vec![(1., 5.), (3., -2.)], Style::default()))
            .series(Series::new("b", vec![(-4., 0.)], Style::default()));
        assert_eq!(plot.x_bounds(), [-4., 3.]);
        assert_eq!(plot.y_bounds(), [-2., 5.]);
    }

    #[test]
    fn test_degenerate_bounds() {
        assert_eq!(Plot::new("empty").x_bounds(), [0., 1.]);

        let flat = Plot::new("flat").series(Series::new(
            "a",
            vec![(2., 7.), (2., 7.)],
            Style::default(),
        ));
        assert_eq!(flat.x_bounds(), [1.5, 2.5]);
        assert_eq!(flat.y_bounds(), [6.5, 7.5]);
    }

    #[test]
    fn test_regression_plot() {
        let x = [1., 2., 3., 4.];
        let y = [3., 5., 7., 9.];
        let (fit, plot) = regression_plot(&x, &y, "ro".parse().unwrap()).unwrap();

        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert_eq!(plot.series.len(), 2);
        assert_eq!(plot.series[0].points, vec![(1., 3.), (2., 5.), (3., 7.), (4., 9.)]);
        assert_eq!(plot.series[0].style.shape, Shape::Scatter);
        assert_eq!(plot.series[1].style, Style::default());

        let fitted_x = plot.series[1].points.iter().map(|p| p.0).collect::<Vec<f64>>();
        assert_eq!(fitted_x, x.to_vec());
        assert!(plot.title.starts_with("y = 2.0000x + 1.0000"));
    }

    #[test]
    fn test_regression_plot_mismatch() {
        assert!(matches!(
            regression_plot(&[1., 2.], &[1.], Style::default()),
            Err(Error::LengthMismatch { x: 2, y: 1 })
        ));
    }
}
