//! Chart Rendering Module
//!
//! Renders the two day-profile charts (power and irradiance against hours
//! since midnight) as SVG files.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::sim::DayResult;

// ===================== STYLE =====================

const CHART_SIZE: (u32, u32) = (1000, 500);
const POWER_COLOR: RGBColor = RGBColor(255, 140, 0);
const IRRADIANCE_COLOR: RGBColor = BLUE;

// ===================== RENDERING =====================

/// Render both charts into `dir`, returning the written file paths.
///
/// # Errors
/// `Error::Plot` when the directory cannot be created or a chart fails to
/// draw.
pub fn render_charts(dir: &Path, result: &DayResult) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::Plot(format!("cannot create {}: {}", dir.display(), e)))?;

    let power_path = dir.join("power.svg");
    let power_points: Vec<(f64, f64)> =
        result.samples.iter().map(|s| (s.elapsed_hours, s.power_w)).collect();
    line_chart(
        &power_path,
        "PV power over the day (simple model)",
        "Power (W)",
        "Power (W)",
        POWER_COLOR,
        &power_points,
    )?;

    let irradiance_path = dir.join("irradiance.svg");
    let irradiance_points: Vec<(f64, f64)> =
        result.samples.iter().map(|s| (s.elapsed_hours, s.irradiance.total)).collect();
    line_chart(
        &irradiance_path,
        "Horizontal surface irradiance (simplified)",
        "W/m²",
        "Irradiance (W/m²)",
        IRRADIANCE_COLOR,
        &irradiance_points,
    )?;

    Ok((power_path, irradiance_path))
}

/// Draw a single day-profile line chart with title, axis labels, legend,
/// and mesh grid.
fn line_chart(
    path: &Path,
    title: &str,
    y_label: &str,
    series_label: &str,
    color: RGBColor,
    points: &[(f64, f64)],
) -> Result<()> {
    let plot = || -> std::result::Result<(), Box<dyn std::error::Error>> {
        let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        // Headroom above the curve; an all-dark day still gets a visible axis
        let y_max = points.iter().map(|&(_, y)| y).fold(0.0_f64, f64::max).max(1.0) * 1.1;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..24.0_f64, 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Hour of day")
            .y_desc(y_label)
            .x_labels(13)
            .draw()?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(series_label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    };

    plot().map_err(|e| Error::Plot(format!("{}: {}", path.display(), e)))
}

// ===================== TESTS =====================
