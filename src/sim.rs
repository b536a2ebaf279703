//! Time-Series Driver Module
//!
//! Sweeps one calendar day at a fixed interval, feeding solar geometry into
//! the sky and panel models per sample, and folds the samples into an
//! immutable [`DayResult`]. No I/O happens inside the sweep; reporting and
//! plotting consume the finished result.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

use crate::config::SimConfig;
use crate::sky::{self, IrradianceReading};
use crate::solar::{self, SolarPosition};

// ===================== TYPES =====================

/// Everything computed for one timestamp
#[derive(Debug, Clone, Copy)]
pub struct DaySample {
    /// Timestamp within the simulated day
    pub time: NaiveDateTime,
    /// Hours elapsed since the start of the simulation (0-24)
    pub elapsed_hours: f64,
    /// Decimal hour of the timestamp's own calendar day (0-24)
    pub decimal_hour: f64,
    /// Sun position at this moment
    pub position: SolarPosition,
    /// Horizontal irradiance before cloud attenuation
    pub irradiance: IrradianceReading,
    /// Cloud transmission factor applied for this hour
    pub cloud_factor: f64,
    /// Instantaneous electrical power (W, never negative)
    pub power_w: f64,
    /// Energy contribution of this sample (Wh)
    pub energy_wh: f64,
}

/// Immutable outcome of one day simulation.
///
/// The total always equals the sum of the per-sample energies; the peak
/// index points at the sample with the highest power, if any power was
/// produced at all.
#[derive(Debug, Clone)]
pub struct DayResult {
    /// All samples in ascending time order, endpoints inclusive
    pub samples: Vec<DaySample>,
    /// Total energy over the day (Wh)
    pub total_energy_wh: f64,
    peak_index: Option<usize>,
}

impl DayResult {
    /// The sample with the highest instantaneous power, if the day
    /// produced any power at all.
    pub fn peak(&self) -> Option<&DaySample> {
        self.peak_index.map(|i| &self.samples[i])
    }

    /// Peak instantaneous power in watts (0.0 for an all-dark day).
    pub fn peak_power_w(&self) -> f64 {
        self.peak().map(|s| s.power_w).unwrap_or(0.0)
    }
}

// ===================== TIMESTAMP SEQUENCE =====================

/// Lazy ascending sequence of timestamps spanning the configured day,
/// inclusive of both midnights (145 samples at 10-minute resolution).
///
/// The closing midnight belongs to the next calendar day; its day-of-year
/// and decimal hour are derived from the timestamp itself.
pub fn sample_times(config: &SimConfig) -> impl Iterator<Item = NaiveDateTime> + '_ {
    // 00:00:00 is valid on every calendar day
    let start = config.date.and_hms_opt(0, 0, 0).unwrap();
    let interval = i64::from(config.interval_minutes);
    (0..config.sample_count()).map(move |i| start + Duration::minutes(i64::from(i) * interval))
}

// ===================== SIMULATION =====================

/// Compute one sample of the pipeline: geometry, sky, panel.
fn sample_at(config: &SimConfig, time: NaiveDateTime, elapsed_hours: f64) -> DaySample {
    let day_of_year = time.ordinal();
    let decimal_hour = f64::from(time.hour()) + f64::from(time.minute()) / 60.0;

    let position = solar::position(day_of_year, decimal_hour, config.latitude_rad());
    let irradiance = sky::irradiance(position.altitude, config.reference_irradiance);
    let cloud_factor = config.clouds.factor(time.hour());
    let power_w = config.panel.power(irradiance.total, config.ambient_temp_c, cloud_factor);
    let energy_wh = power_w * f64::from(config.interval_minutes) / 60.0;

    DaySample {
        time,
        elapsed_hours,
        decimal_hour,
        position,
        irradiance,
        cloud_factor,
        power_w,
        energy_wh,
    }
}

/// Run the full day simulation.
///
/// A pure fold over the timestamp sequence: each step appends one sample,
/// adds its energy to the running total, and tracks the peak. The result
/// is the only state that leaves this function.
pub fn run(config: &SimConfig) -> DayResult {
    let interval = f64::from(config.interval_minutes);

    sample_times(config).enumerate().fold(
        DayResult {
            samples: Vec::with_capacity(config.sample_count() as usize),
            total_energy_wh: 0.0,
            peak_index: None,
        },
        |mut acc, (i, time)| {
            // Multiply in whole minutes before dividing so round hours
            // (12.0, 24.0) come out exact.
            let sample = sample_at(config, time, i as f64 * interval / 60.0);
            acc.total_energy_wh += sample.energy_wh;
            let beats_peak = match acc.peak_index {
                Some(p) => sample.power_w > acc.samples[p].power_w,
                None => sample.power_w > 0.0,
            };
            if beats_peak {
                acc.peak_index = Some(acc.samples.len());
            }
            acc.samples.push(sample);
            acc
        },
    )
}

// ===================== TESTS =====================
