use crate::{
    error::{Error, Result},
    stats,
};
use chrono::prelude::*;
use directories::ProjectDirs;
use log::info;
use serde::Serialize;
use std::{
    fmt,
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};
use unicode_width::UnicodeWidthStr;

const LABEL_GAP: usize = 3;

/// every statistic of a single sample
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub range: f64,
    pub mean: f64,
    pub median: f64,
    /// absent for samples too small to split
    pub quartiles: Option<(f64, f64, f64)>,
    pub stddev: f64,
    /// absent for a single value
    pub sample_stddev: Option<f64>,
}

impl Summary {
    pub fn new(data: &[f64]) -> Result<Self> {
        Ok(Self {
            count: data.len(),
            range: stats::range_of(data)?,
            mean: stats::mean(data)?,
            median: stats::median(data)?,
            quartiles: optional(stats::quartiles(data))?,
            stddev: stats::stddev(data, false)?,
            sample_stddev: optional(stats::stddev(data, true))?,
        })
    }

    /// Appends this summary as a row of the csv at `path`.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        // If the log file doesn't exist, we need to emit a header
        let needs_header = !path.exists();

        let mut log_file = OpenOptions::new().append(true).create(true).open(path)?;

        if needs_header {
            writeln!(
                log_file,
                "date,count,range,mean,median,q1,q2,q3,stddev,sample_stddev"
            )?;
        }

        let (q1, q2, q3) = match self.quartiles {
            Some((q1, q2, q3)) => (q1.to_string(), q2.to_string(), q3.to_string()),
            None => Default::default(),
        };

        writeln!(
            log_file,
            "{},{},{},{},{},{},{},{},{},{}",
            Local::now().format("%c"),
            self.count,
            self.range,
            self.mean,
            self.median,
            q1,
            q2,
            q3,
            self.stddev,
            self.sample_stddev.map_or(String::new(), |s| s.to_string()),
        )?;

        info!("appended summary of {} values to {:?}", self.count, path);

        Ok(())
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("n", self.count.to_string()),
            ("range", self.range.to_string()),
            ("mean", self.mean.to_string()),
            ("median", self.median.to_string()),
            (
                "Q₁ Q₂ Q₃",
                self.quartiles
                    .map_or(String::from("-"), |(q1, q2, q3)| format!("{q1}  {q2}  {q3}")),
            ),
            ("σ", self.stddev.to_string()),
            (
                "s",
                self.sample_stddev
                    .map_or(String::from("-"), |s| s.to_string()),
            ),
        ]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let label_width = rows
            .iter()
            .map(|(label, _)| label.width())
            .max()
            .unwrap_or(0);

        for (label, value) in rows {
            let padding = label_width - label.width() + LABEL_GAP;
            writeln!(f, "{}{}{}", label, " ".repeat(padding), value)?;
        }

        Ok(())
    }
}

/// where `--save` appends summaries
pub fn history_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "statr").map(|dirs| dirs.config_dir().join("log.csv"))
}

// a statistic the sample is too small for is left out rather than failing the summary
fn optional<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::Empty | Error::DivisionByZero) => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let summary = Summary::new(&[1., 3., 7., 2.]).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.range, 6.0);
        assert_eq!(summary.mean, 3.25);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.quartiles, Some((1.5, 2.5, 5.0)));
        assert!(summary.sample_stddev.unwrap() > summary.stddev);
    }

    #[test]
    fn test_summary_single_value() {
        let summary = Summary::new(&[5.]).unwrap();
        assert_eq!(summary.range, 0.0);
        assert_eq!(summary.quartiles, None);
        assert_eq!(summary.stddev, 0.0);
        assert_eq!(summary.sample_stddev, None);
    }

    #[test]
    fn test_summary_errors() {
        assert!(matches!(Summary::new(&[]), Err(Error::Empty)));
        assert!(matches!(
            Summary::new(&[1., f64::NAN]),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_display_aligns_values() {
        let text = Summary::new(&[1., 2., 3., 4.]).unwrap().to_string();
        let lines = text.lines().collect::<Vec<&str>>();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[2], "mean       2.5");
        assert_eq!(lines[4], "Q₁ Q₂ Q₃   1.5  2.5  3.5");

        // every value starts in the same display column
        let columns = lines
            .iter()
            .map(|line| {
                let label_end = line.find("   ").unwrap();
                let value_start = label_end + line[label_end..].find(|c: char| c != ' ').unwrap();
                line[..value_start].width()
            })
            .collect::<Vec<usize>>();
        assert!(columns.iter().all(|&c| c == columns[0]));
    }

    #[test]
    fn test_display_missing_values() {
        let text = Summary::new(&[7.]).unwrap().to_string();
        assert!(text.contains("Q₁ Q₂ Q₃   -"));
        assert!(text.ends_with("s          -\n"));
    }

    #[test]
    fn test_json() {
        let json = serde_json::to_value(Summary::new(&[1., 2., 3.]).unwrap()).unwrap();
        assert_eq!(json["median"], 2.0);
        assert_eq!(json["quartiles"], serde_json::json!([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_save_appends_rows() {
        let path = std::env::temp_dir()
            .join(format!("statr-history-{}", std::process::id()))
            .join("log.csv");
        let _ = std::fs::remove_file(&path);

        Summary::new(&[1., 2., 3.]).unwrap().save(&path).unwrap();
        Summary::new(&[9.]).unwrap().save(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines = contents.lines().collect::<Vec<&str>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("date,count"));
        assert!(lines[1].ends_with(",3,2,2,2,1,2,3,0.816496580927726,1"));
        assert!(lines[2].ends_with(",1,0,9,9,,,,0,"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
