//! Sky Model Module
//!
//! Clear-sky irradiance from the sun's altitude, and a deterministic cloud
//! attenuation policy expressed as an explicit hour-band lookup table. The
//! table form exists so a data-driven policy can replace the built-in bands
//! without touching the power formula.

use crate::error::{Error, Result};

// ===================== CONSTANTS =====================

/// Default clear-sky reference irradiance in W/m²
pub const DEFAULT_REFERENCE_IRRADIANCE: f64 = 900.0;

/// Diffuse irradiance as a fraction of the direct component
pub const DIFFUSE_FRACTION: f64 = 0.3;

// ===================== IRRADIANCE =====================

/// Direct and diffuse irradiance on a horizontal surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrradianceReading {
    /// Direct component (W/m²)
    pub direct: f64,
    /// Diffuse component (W/m²)
    pub diffuse: f64,
    /// Sum of direct and diffuse (W/m²)
    pub total: f64,
}

impl IrradianceReading {
    /// Reading with the sun below the horizon.
    pub const DARK: IrradianceReading =
        IrradianceReading { direct: 0.0, diffuse: 0.0, total: 0.0 };
}

/// Clear-sky irradiance for a given sun altitude.
///
/// Direct irradiance scales the reference value by `sin(altitude)`; the
/// diffuse component is a fixed 30% of the direct. Both are zero when the
/// sun is at or below the horizon.
///
/// # Arguments
/// * `altitude_rad` - Sun altitude in radians (negative = below horizon)
/// * `reference_w_m2` - Clear-sky reference irradiance in W/m²
pub fn irradiance(altitude_rad: f64, reference_w_m2: f64) -> IrradianceReading {
    if altitude_rad <= 0.0 {
        return IrradianceReading::DARK;
    }
    let direct = reference_w_m2 * altitude_rad.sin();
    let diffuse = DIFFUSE_FRACTION * direct;
    IrradianceReading { direct, diffuse, total: direct + diffuse }
}

// ===================== CLOUD ATTENUATION =====================

/// One contiguous range of hours with a fixed transmission factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudBand {
    /// First hour of day covered (0-23, inclusive)
    pub start_hour: u32,
    /// Last hour of day covered (0-23, inclusive)
    pub end_hour: u32,
    /// Multiplicative transmission factor (0.0 = opaque, 1.0 = clear)
    pub factor: f64,
}

/// Hour-band lookup table mapping hour-of-day to a transmission factor.
///
/// Hours not covered by any band transmit fully (factor 1.0). The default
/// policy is a fixed step function: midday haze over hours 11-14 at 0.7
/// and a lighter late-afternoon band over 16-17 at 0.9.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudPolicy {
    bands: Vec<CloudBand>,
}

impl Default for CloudPolicy {
    fn default() -> Self {
        CloudPolicy {
            bands: vec![
                CloudBand { start_hour: 11, end_hour: 14, factor: 0.7 },
                CloudBand { start_hour: 16, end_hour: 17, factor: 0.9 },
            ],
        }
    }
}

impl CloudPolicy {
    /// Build a policy from explicit bands, validating each at construction.
    ///
    /// # Errors
    /// `Error::InvalidConfig` if a band's hours exceed 23, its range is
    /// inverted, or its factor leaves [0, 1].
    pub fn new(bands: Vec<CloudBand>) -> Result<Self> {
        for band in &bands {
            if band.start_hour > 23 || band.end_hour > 23 {
                return Err(Error::invalid_config(
                    "cloud_band",
                    format!("{}-{}", band.start_hour, band.end_hour),
                    "hours must be within 0-23",
                ));
            }
            if band.start_hour > band.end_hour {
                return Err(Error::invalid_config(
                    "cloud_band",
                    format!("{}-{}", band.start_hour, band.end_hour),
                    "start hour must not exceed end hour",
                ));
            }
            if !(0.0..=1.0).contains(&band.factor) {
                return Err(Error::invalid_config(
                    "cloud_band.factor",
                    band.factor,
                    "must be between 0.0 and 1.0",
                ));
            }
        }
        Ok(CloudPolicy { bands })
    }

    /// Policy with no attenuation anywhere (clear sky all day).
    pub fn clear() -> Self {
        CloudPolicy { bands: Vec::new() }
    }

    /// Transmission factor for an integer hour of day (0-23).
    ///
    /// The first matching band wins; uncovered hours return 1.0.
    pub fn factor(&self, hour_of_day: u32) -> f64 {
        self.bands
            .iter()
            .find(|b| b.start_hour <= hour_of_day && hour_of_day <= b.end_hour)
            .map(|b| b.factor)
            .unwrap_or(1.0)
    }
}

// ===================== TESTS =====================
