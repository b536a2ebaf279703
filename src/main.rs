use clap::Parser;

mod cli;
mod config;
mod error;
mod output;
mod panel;
mod plot;
mod sim;
mod sky;
mod solar;

use cli::Args;
use config::SimConfig;
use panel::PanelConfig;
use sky::CloudPolicy;

// ===================== MAIN =====================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let panel = PanelConfig::new(args.panel_area, args.efficiency)
        .with_system_loss(args.loss_factor);

    let mut config = SimConfig::new(
        args.latitude,
        args.date,
        panel,
        args.temperature,
        args.interval_minutes,
    )?
    .with_reference_irradiance(args.reference_irradiance)?;

    if args.clear_sky {
        config = config.with_cloud_policy(CloudPolicy::clear());
    }

    let result = sim::run(&config);

    output::print_header(&config);
    output::print_summary(&result);

    if !args.no_plot {
        let (power_path, irradiance_path) = plot::render_charts(&args.plot_dir, &result)?;
        println!();
        println!("Charts   : {}", power_path.display());
        println!("           {}", irradiance_path.display());
    }

    Ok(())
}
