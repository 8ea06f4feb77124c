use clap::Parser;
use reachable_transit::app::ReachableTransitApp;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ReachableTransitApp::parse();
    match args.run() {
        Ok(summary) => log::info!("finished. {summary}"),
        Err(e) => {
            log::error!("failed running reachable_transit: {e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
