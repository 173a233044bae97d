//! Reading of scenarios from JSON files.

use std::fs::File;
use std::io;
use std::path::Path;

use bigdecimal::BigDecimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::from_reader;

use crate::parse::{parse_probabilities, ParseError};

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, io::Error> {
    let file = File::open(path)?;
    Ok(from_reader(file)?)
}

pub trait FromJsonFile<D> {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, io::Error>;
}

impl<D: DeserializeOwned> FromJsonFile<D> for D {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, io::Error> {
        read_json(path)
    }
}

/// A threshold together with the probabilities of its events. Probabilities are kept as decimal
/// literals so that nothing is lost to binary floating point on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub threshold: i64,
    pub probabilities: Vec<String>,
}
impl Scenario {
    pub fn parse_probabilities(&self) -> Result<Vec<BigDecimal>, ParseError> {
        parse_probabilities(&self.probabilities[..])
    }
}
