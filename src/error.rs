//! Error Types Module
//!
//! Distinguishes invalid configuration from numeric-domain failures so that
//! callers see an explicit error instead of a silent NaN.

use thiserror::Error;

/// Main error type for pvday operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {name} = {value} ({reason})")]
    InvalidConfig { name: &'static str, value: String, reason: String },

    /// The azimuth bearing is geometrically undefined: the denominator
    /// cos(altitude)·cos(latitude) vanishes when the sun is at the zenith
    /// or nadir, or the observer stands at a pole.
    #[error(
        "solar azimuth undefined at altitude {altitude_deg:.3}°, latitude {latitude_deg:.3}° \
         (sun at zenith/nadir or polar observer)"
    )]
    AzimuthUndefined { altitude_deg: f64, latitude_deg: f64 },

    #[error("chart rendering failed: {0}")]
    Plot(String),
}

impl Error {
    /// Shorthand for configuration violations.
    pub fn invalid_config(
        name: &'static str,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidConfig { name, value: value.to_string(), reason: reason.into() }
    }
}

/// Result type alias for pvday operations
pub type Result<T> = std::result::Result<T, Error>;
