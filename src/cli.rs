//! Command-Line Interface Module
//!
//! Argument parsing and validation for the pvday estimator. Every numeric
//! flag carries a range-checked value parser and a `PVDAY_*` environment
//! fallback; defaults reproduce the reference run (Bogotá, 2025-04-02,
//! 15 m² panel at 18%).

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

// ===================== CLI =====================

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Observer latitude in decimal degrees (-90 to 90)
    #[arg(long, default_value_t = 4.711, allow_hyphen_values = true, value_parser = parse_latitude, env = "PVDAY_LATITUDE")]
    pub latitude: f64,

    /// Date of the simulated day (YYYY-MM-DD)
    #[arg(long, default_value = "2025-04-02", value_parser = parse_date, env = "PVDAY_DATE")]
    pub date: NaiveDate,

    /// Panel area in square meters
    #[arg(long, default_value_t = 15.0, value_parser = parse_positive_f64, env = "PVDAY_PANEL_AREA")]
    pub panel_area: f64,

    /// Panel efficiency (0.0-1.0, typical ~0.18-0.22 for silicon)
    #[arg(long, default_value_t = 0.18, value_parser = parse_fraction, env = "PVDAY_EFFICIENCY")]
    pub efficiency: f64,

    /// Whole-system loss factor (wiring, inverter, soiling; 0.0-1.0)
    #[arg(long, default_value_t = 0.85, value_parser = parse_fraction, env = "PVDAY_LOSS_FACTOR")]
    pub loss_factor: f64,

    /// Fixed ambient temperature in °C for the whole day
    #[arg(long, default_value_t = 22.0, allow_hyphen_values = true, value_parser = parse_temperature, env = "PVDAY_TEMPERATURE")]
    pub temperature: f64,

    /// Sampling interval in minutes (must divide a day evenly)
    #[arg(long, default_value_t = 10, value_parser = parse_interval, env = "PVDAY_INTERVAL_MINUTES")]
    pub interval_minutes: u32,

    /// Clear-sky reference irradiance in W/m²
    #[arg(long, default_value_t = 900.0, value_parser = parse_positive_f64, env = "PVDAY_REFERENCE_IRRADIANCE")]
    pub reference_irradiance: f64,

    /// Ignore the built-in cloud bands and simulate a fully clear day
    #[arg(long)]
    pub clear_sky: bool,

    /// Directory the SVG charts are written into
    #[arg(long, default_value = ".", env = "PVDAY_PLOT_DIR")]
    pub plot_dir: PathBuf,

    /// Skip chart rendering entirely
    #[arg(long)]
    pub no_plot: bool,
}

// ===================== CLI VALUE PARSERS =====================

fn parse_latitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-90.0..=90.0).contains(&v) {
        return Err(format!("Latitude must be between -90 and 90, got {}", v));
    }
    Ok(v)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

fn parse_positive_f64(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if v <= 0.0 || !v.is_finite() {
        return Err(format!("Value must be positive, got {}", v));
    }
    Ok(v)
}

fn parse_fraction(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(v > 0.0 && v <= 1.0) {
        return Err(format!("Value must be within (0.0, 1.0], got {}", v));
    }
    Ok(v)
}

fn parse_temperature(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-90.0..=60.0).contains(&v) {
        return Err(format!("Temperature must be between -90 and 60 °C, got {}", v));
    }
    Ok(v)
}

fn parse_interval(s: &str) -> Result<u32, String> {
    let v: u32 = s.parse().map_err(|_| format!("Invalid integer: {}", s))?;
    if v == 0 || v > 1440 || 1440 % v != 0 {
        return Err(format!("Interval must be within 1-1440 minutes and divide a day evenly, got {}", v));
    }
    Ok(v)
}

// ===================== TESTS =====================
