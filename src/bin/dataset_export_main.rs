use clap::Parser;
use std::path::PathBuf;
use traffic_flow_analysis::config::AppConfig;
use traffic_flow_analysis::error::Result;
use traffic_flow_analysis::global_variables::DEFAULT_EXPORT_FILE;
use traffic_flow_analysis::simulation_engine::dataset_loader::{load_data, write_dataset_csv};
use traffic_flow_analysis::simulation_engine::preprocessing::preprocess_data;

/// Writes a traffic dataset as CSV in the format the app can load back.
#[derive(Parser, Debug)]
#[command(name = "dataset_export_main")]
struct Args {
    /// Output CSV path
    #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
    output: PathBuf,

    /// Read and preprocess this CSV instead of generating data
    #[arg(long)]
    input: Option<PathBuf>,

    /// Seed for the volume column (defaults to the configured seed)
    #[arg(long)]
    volume_seed: Option<u64>,

    /// Seed for road condition and weather (defaults to the configured seed, if any)
    #[arg(long)]
    category_seed: Option<u64>,
}

fn run(args: Args) -> Result<()> {
    let config = AppConfig::load()?;
    let input = args.input.or(config.data_file);
    let dataset = load_data(
        input.as_deref(),
        args.volume_seed.unwrap_or(config.volume_seed),
        args.category_seed.or(config.category_seed),
    )?;
    let dataset = preprocess_data(dataset)?;
    write_dataset_csv(&dataset, &args.output)?;
    println!(
        "Exported {} hourly records to {}",
        dataset.len(),
        args.output.display()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Args::parse()) {
        eprintln!("Export error: {}", e);
        std::process::exit(1);
    }
}
