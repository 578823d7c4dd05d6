//! Flat key/value form of a [`ViewState`], used for query strings and files.
//!
//! Decoding never fails: each field whose key is missing, has the wrong
//! shape, or holds a value the view state would reject falls back to the
//! documented default, independently of the other fields.

use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::data::complex::Complex;
use crate::core::data::view_state::{
    DEFAULT_CENTER, DEFAULT_ESCAPE_RADIUS, DEFAULT_JULIA_CONSTANT, DEFAULT_MAX_ITERATIONS,
    DEFAULT_SCALE, ViewState,
};
use crate::core::fractals::fractal_kinds::FractalKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

pub const KEY_CENTER_REAL: &str = "x";
pub const KEY_CENTER_IMAG: &str = "y";
pub const KEY_SCALE: &str = "s";
pub const KEY_MAX_ITERATIONS: &str = "n";
pub const KEY_ESCAPE_RADIUS: &str = "r";
pub const KEY_JULIA: &str = "j";
pub const KEY_JULIA_REAL: &str = "jx";
pub const KEY_JULIA_IMAG: &str = "jy";
pub const KEY_HUE: &str = "h";

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// Types a raw string by its shape; anything that is not a boolean,
    /// integer or float literal yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "true" => Some(Self::Bool(true)),
            "false" => Some(Self::Bool(false)),
            _ => raw
                .parse::<i64>()
                .map(Self::Int)
                .or_else(|_| raw.parse::<f64>().map(Self::Float))
                .ok(),
        }
    }

    fn as_f64(self) -> Option<f64> {
        match self {
            Self::Float(value) if value.is_finite() => Some(value),
            Self::Int(value) => Some(value as f64),
            _ => None,
        }
    }

    fn as_u32(self) -> Option<u32> {
        match self {
            Self::Int(value) => u32::try_from(value).ok(),
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                if (0.0..=f64::from(u32::MAX)).contains(&value) {
                    Some(value as u32)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(value),
            Self::Int(0) => Some(false),
            Self::Int(1) => Some(true),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            // `{:?}` keeps a trailing `.0` so integral floats stay floats
            Self::Float(value) => write!(f, "{:?}", value),
            Self::Bool(value) => write!(f, "{}", value),
        }
    }
}

pub type ParameterSet = BTreeMap<String, ParamValue>;

#[must_use]
pub fn to_parameter_set(state: &ViewState) -> ParameterSet {
    let center = state.center();
    let julia = state.julia_constant();

    [
        (KEY_CENTER_REAL, ParamValue::Float(center.real)),
        (KEY_CENTER_IMAG, ParamValue::Float(center.imag)),
        (KEY_SCALE, ParamValue::Float(state.scale())),
        (
            KEY_MAX_ITERATIONS,
            ParamValue::Int(i64::from(state.max_iterations())),
        ),
        (KEY_ESCAPE_RADIUS, ParamValue::Float(state.escape_radius())),
        (KEY_JULIA, ParamValue::Bool(state.mode().is_julia())),
        (KEY_JULIA_REAL, ParamValue::Float(julia.real)),
        (KEY_JULIA_IMAG, ParamValue::Float(julia.imag)),
        (
            KEY_HUE,
            ParamValue::Bool(state.colour_mode() == ColourMode::Hue),
        ),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_owned(), value))
    .collect()
}

#[must_use]
pub fn from_parameter_set(params: &ParameterSet) -> ViewState {
    let defaults = ViewState::default();

    let center = Complex::new(
        read(params, KEY_CENTER_REAL, ParamValue::as_f64).unwrap_or(DEFAULT_CENTER.real),
        read(params, KEY_CENTER_IMAG, ParamValue::as_f64).unwrap_or(DEFAULT_CENTER.imag),
    );
    let julia_constant = Complex::new(
        read(params, KEY_JULIA_REAL, ParamValue::as_f64).unwrap_or(DEFAULT_JULIA_CONSTANT.real),
        read(params, KEY_JULIA_IMAG, ParamValue::as_f64).unwrap_or(DEFAULT_JULIA_CONSTANT.imag),
    );
    let scale = read(params, KEY_SCALE, |v| v.as_f64().filter(|s| *s > 0.0));
    let max_iterations = read(params, KEY_MAX_ITERATIONS, |v| v.as_u32().filter(|n| *n >= 1));
    let escape_radius = read(params, KEY_ESCAPE_RADIUS, |v| v.as_f64().filter(|r| *r > 0.0));
    let julia = read(params, KEY_JULIA, ParamValue::as_bool).unwrap_or(false);
    let hue = read(params, KEY_HUE, ParamValue::as_bool).unwrap_or(false);

    let state = defaults
        .with_mode(FractalKind::from_julia_flag(julia))
        .with_colour_mode(if hue {
            ColourMode::Hue
        } else {
            ColourMode::Grayscale
        });

    // each setter re-validates; a rejection keeps the default already in place
    let state = state.with_center(center).unwrap_or(state);
    let state = state.with_julia_constant(julia_constant).unwrap_or(state);
    let state = state
        .with_scale(scale.unwrap_or(DEFAULT_SCALE))
        .unwrap_or(state);
    let state = state
        .with_max_iterations(max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS))
        .unwrap_or(state);

    state
        .with_escape_radius(escape_radius.unwrap_or(DEFAULT_ESCAPE_RADIUS))
        .unwrap_or(state)
}

/// Returns `true` when the set names a scale, i.e. the caller chose the zoom level.
#[must_use]
pub fn has_scale(params: &ParameterSet) -> bool {
    params.contains_key(KEY_SCALE)
}

fn read<T>(
    params: &ParameterSet,
    key: &str,
    convert: impl Fn(ParamValue) -> Option<T>,
) -> Option<T> {
    let value = *params.get(key)?;
    let converted = convert(value);

    if converted.is_none() {
        warn!(key, %value, "rejected view parameter, using default");
    }

    converted
}

#[must_use]
pub fn to_query_string(params: &ParameterSet) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

#[must_use]
pub fn parse_query_string(query: &str) -> ParameterSet {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter_map(|(key, raw)| {
            let key = key.trim();
            if key.is_empty() {
                return None;
            }

            ParamValue::parse(raw.trim()).map(|value| (key.to_owned(), value))
        })
        .collect()
}
