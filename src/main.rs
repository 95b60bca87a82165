use clap::Parser;
use log::{debug, info};

use cluster_capacity::{ClusterCapacityConfig, ClusterCapacityOptions};

/// Scheduler the ingested pods are handed to unless they name their own.
const SCHEDULER_NAME: &str = "cluster-capacity";

fn main() {
    let options = ClusterCapacityOptions::parse();

    // --verbose raises the default filter; RUST_LOG still wins when set
    let default_filter = if options.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
    debug!("{:?}", options);

    let mut config = ClusterCapacityConfig::new(options);
    if let Err(err) = config.parse_api_spec(SCHEDULER_NAME) {
        eprintln!("{}", err);
        std::process::exit(1);
    }

    for pod in &config.pods {
        info!("pod {} ready for scheduling by {}", pod.key(), pod.spec.scheduler_name);
    }
}
