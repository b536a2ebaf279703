//! Simulation Configuration Module
//!
//! One validated record gathers every tunable of the run: location, date,
//! panel, temperature, sampling interval, reference irradiance, and cloud
//! policy all live here and are checked at construction.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::panel::PanelConfig;
use crate::sky::{CloudPolicy, DEFAULT_REFERENCE_IRRADIANCE};

/// Minutes in a simulated day; the sampling interval must divide it evenly
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Validated inputs for one day simulation
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Observer latitude in decimal degrees (-90 to 90)
    pub latitude_deg: f64,
    /// Calendar date of the simulated day
    pub date: NaiveDate,
    /// Panel parameters
    pub panel: PanelConfig,
    /// Fixed ambient temperature in °C for the whole day
    pub ambient_temp_c: f64,
    /// Sampling interval in minutes
    pub interval_minutes: u32,
    /// Clear-sky reference irradiance in W/m²
    pub reference_irradiance: f64,
    /// Cloud attenuation policy
    pub clouds: CloudPolicy,
}

impl SimConfig {
    /// Build a configuration, rejecting out-of-range values.
    ///
    /// # Errors
    /// `Error::InvalidConfig` when the latitude leaves [-90, 90], the panel
    /// area is not positive, the efficiency or system loss leave (0, 1], the
    /// temperature coefficient is negative, or the interval does not divide
    /// a day evenly.
    pub fn new(
        latitude_deg: f64,
        date: NaiveDate,
        panel: PanelConfig,
        ambient_temp_c: f64,
        interval_minutes: u32,
    ) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude_deg) || !latitude_deg.is_finite() {
            return Err(Error::invalid_config(
                "latitude",
                latitude_deg,
                "must be between -90 and 90 degrees",
            ));
        }
        if !(panel.area_m2 > 0.0) || !panel.area_m2.is_finite() {
            return Err(Error::invalid_config("panel.area_m2", panel.area_m2, "must be positive"));
        }
        if !(panel.efficiency > 0.0 && panel.efficiency <= 1.0) {
            return Err(Error::invalid_config(
                "panel.efficiency",
                panel.efficiency,
                "must be within (0, 1]",
            ));
        }
        if !(panel.system_loss > 0.0 && panel.system_loss <= 1.0) {
            return Err(Error::invalid_config(
                "panel.system_loss",
                panel.system_loss,
                "must be within (0, 1]",
            ));
        }
        if !(panel.temp_coefficient >= 0.0) {
            return Err(Error::invalid_config(
                "panel.temp_coefficient",
                panel.temp_coefficient,
                "must not be negative",
            ));
        }
        if !ambient_temp_c.is_finite() {
            return Err(Error::invalid_config("temperature", ambient_temp_c, "must be finite"));
        }
        if interval_minutes == 0
            || interval_minutes > MINUTES_PER_DAY
            || MINUTES_PER_DAY % interval_minutes != 0
        {
            return Err(Error::invalid_config(
                "interval_minutes",
                interval_minutes,
                "must be within 1-1440 and divide a day evenly",
            ));
        }

        Ok(SimConfig {
            latitude_deg,
            date,
            panel,
            ambient_temp_c,
            interval_minutes,
            reference_irradiance: DEFAULT_REFERENCE_IRRADIANCE,
            clouds: CloudPolicy::default(),
        })
    }

    /// Override the clear-sky reference irradiance.
    pub fn with_reference_irradiance(mut self, w_m2: f64) -> Result<Self> {
        if !(w_m2 > 0.0) || !w_m2.is_finite() {
            return Err(Error::invalid_config("reference_irradiance", w_m2, "must be positive"));
        }
        self.reference_irradiance = w_m2;
        Ok(self)
    }

    /// Swap in a different cloud policy (validated on its own construction).
    pub fn with_cloud_policy(mut self, clouds: CloudPolicy) -> Self {
        self.clouds = clouds;
        self
    }

    /// Latitude in radians, as the geometry functions consume it.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Number of samples in the day, endpoints inclusive.
    pub fn sample_count(&self) -> u32 {
        MINUTES_PER_DAY / self.interval_minutes + 1
    }
}

// ===================== TESTS =====================
