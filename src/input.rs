use crate::{
    error::{Error, Result},
    sample::{parse_value, Sample},
};
use log::debug;
use serde::Deserialize;
use serde_json::from_reader;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// x and y values matched index by index
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Paired {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Paired {
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

/// Reads a sample: a JSON array from `.json` files, whitespace or comma
/// separated numbers from anything else.
pub fn read_sample<P: AsRef<Path>>(path: P) -> Result<Sample> {
    let path = path.as_ref();
    debug!("reading sample from {:?}", path);

    if is_json(path) {
        let reader = BufReader::new(File::open(path)?);
        return Ok(from_reader(reader)?);
    }

    fs::read_to_string(path)?.parse()
}

/// Reads paired samples: `{"x": [..], "y": [..]}` from `.json` files, one
/// `x y` pair per line from anything else.
pub fn read_pairs<P: AsRef<Path>>(path: P) -> Result<Paired> {
    let path = path.as_ref();
    debug!("reading pairs from {:?}", path);

    if is_json(path) {
        let reader = BufReader::new(File::open(path)?);
        return Ok(from_reader(reader)?);
    }

    parse_pairs(&fs::read_to_string(path)?)
}

pub fn parse_pairs(text: &str) -> Result<Paired> {
    let mut paired = Paired::default();

    for (idx, line) in text.lines().enumerate() {
        let tokens = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect::<Vec<&str>>();

        match tokens[..] {
            [] => continue,
            [x, y] => {
                paired.x.push(parse_value(x)?);
                paired.y.push(parse_value(y)?);
            }
            _ => return Err(Error::MalformedPair { line: idx + 1 }),
        }
    }

    Ok(paired)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}
