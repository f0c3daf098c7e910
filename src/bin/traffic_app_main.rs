use traffic_flow_analysis::config::AppConfig;
use traffic_flow_analysis::error::Result;
use traffic_flow_analysis::monitoring::traffic_dashboard::{run_cli, TrafficApp};

fn run() -> Result<()> {
    let config = AppConfig::load()?;
    let mut app = TrafficApp::start(config)?;
    run_cli(&mut app)
}

fn main() {
    env_logger::init();
    println!("Starting Smart Traffic Flow Analysis...");
    if let Err(e) = run() {
        eprintln!("Traffic app error: {}", e);
        std::process::exit(1);
    }
}
