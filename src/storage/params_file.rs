use crate::core::data::parameter_set::{ParamValue, ParameterSet};
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug)]
pub enum ParamsFileError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ParamsFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "parameter file I/O failed: {}", err),
            Self::Json(err) => write!(f, "parameter file is not a JSON object: {}", err),
        }
    }
}

impl Error for ParamsFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ParamsFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ParamsFileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Reads a JSON object of scalar values, e.g. `{"x": -0.5, "n": 200, "h": true}`.
///
/// Only a file that is not a JSON object at all is an error. Entries holding
/// strings, nulls, arrays or objects are dropped, so the view falls back to
/// the default for those keys alone.
pub fn read_parameter_set(path: impl AsRef<Path>) -> Result<ParameterSet, ParamsFileError> {
    let contents = fs::read_to_string(path)?;
    let entries: BTreeMap<String, Value> = serde_json::from_str(&contents)?;

    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| match scalar(&value) {
            Some(param) => Some((key, param)),
            None => {
                warn!(key = %key, value = %value, "ignoring non-scalar parameter");
                None
            }
        })
        .collect())
}

fn scalar(value: &Value) -> Option<ParamValue> {
    match value {
        Value::Bool(flag) => Some(ParamValue::Bool(*flag)),
        Value::Number(number) => number
            .as_i64()
            .map(ParamValue::Int)
            .or_else(|| number.as_f64().map(ParamValue::Float)),
        _ => None,
    }
}

pub fn write_parameter_set(
    params: &ParameterSet,
    path: impl AsRef<Path>,
) -> Result<(), ParamsFileError> {
    let json = serde_json::to_string_pretty(params)?;
    fs::write(path, json)?;
    Ok(())
}
