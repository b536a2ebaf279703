//! Output Formatting Module
//!
//! Terminal reporting for a finished day simulation.

use crate::config::SimConfig;
use crate::panel;
use crate::sim::DayResult;

/// Print the run header: location, date, panel, and sampling setup.
pub fn print_header(config: &SimConfig) {
    println!("Location : lat={:.3}°", config.latitude_deg);
    println!("Date     : {}", config.date);
    println!(
        "Panel    : {:.2} m² @ {:.1}% efficiency, {:.0}% system loss",
        config.panel.area_m2,
        config.panel.efficiency * 100.0,
        config.panel.system_loss * 100.0
    );
    println!(
        "Sampling : every {} min ({} samples), ambient {:.1} °C",
        config.interval_minutes,
        config.sample_count(),
        config.ambient_temp_c
    );
    println!();
}

/// Print the two headline numbers and the peak-time detail.
pub fn print_summary(result: &DayResult) {
    println!(
        "Total daily energy : {:.2} Wh{}",
        result.total_energy_wh,
        kilo_hint(result.total_energy_wh, panel::format_energy)
    );
    println!(
        "Peak power         : {:.2} W{}",
        result.peak_power_w(),
        kilo_hint(result.peak_power_w(), panel::format_power)
    );

    match result.peak() {
        Some(peak) => {
            print!(
                "Peak time          : {} (sun altitude {:.1}°",
                peak.time.format("%H:%M"),
                peak.position.altitude.to_degrees()
            );
            // The bearing can be geometrically undefined (sun at zenith)
            if let Some(az) = peak.position.azimuth {
                print!(", azimuth {:.1}°", az.to_degrees());
            }
            println!(")");
            println!(
                "Peak irradiance    : {} ({} direct, {} diffuse)",
                panel::format_irradiance(peak.irradiance.total),
                panel::format_irradiance(peak.irradiance.direct),
                panel::format_irradiance(peak.irradiance.diffuse)
            );
        }
        None => println!("The sun never cleared the horizon; no power was produced."),
    }
}

/// Human-readable kilo suffix for values past 1 kW / 1 kWh.
fn kilo_hint(value: f64, fmt: fn(f64) -> String) -> String {
    if value >= 1000.0 { format!(" ({})", fmt(value)) } else { String::new() }
}
