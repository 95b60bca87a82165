use clap::Parser;
use std::time::Duration;

use crate::models::pod::Pod;
use crate::utils::error::Error;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

const OUTPUT_FORMATS: &[&str] = &["json", "yaml"];

/// Options of a cluster capacity run.
///
/// Only the pod spec sources and the fetch timeout are read while ingesting;
/// the rest is carried for the simulator and the result printer.
#[derive(Parser, Debug, Clone)]
#[command(name = "cluster-capacity")]
pub struct ClusterCapacityOptions {
    /// Path to the kubeconfig file to use for the analysis.
    #[arg(long, default_value = "")]
    pub kubeconfig: String,

    /// Path to JSON or YAML file containing scheduler configuration.
    #[arg(long = "default-config", default_value = "")]
    pub default_scheduler_config_file: String,

    /// Number of instances of pod to be scheduled after which analysis stops. By default unlimited.
    #[arg(long = "max-limit", default_value_t = 0)]
    pub max_limit: usize,

    /// Verbose mode
    #[arg(long)]
    pub verbose: bool,

    /// Path or URL to JSON or YAML file containing pod definition.
    #[arg(long = "podspec", default_value = "")]
    pub pod_spec_file: String,

    /// Path or URL to JSON or YAML file containing pod definitions.
    #[arg(long = "podspeclist", default_value = "")]
    pub pod_list_spec_file: String,

    /// Output format. One of: json|yaml
    #[arg(short = 'o', long = "output", default_value = "")]
    pub output_format: String,

    /// Seconds to wait for a pod spec URL to answer.
    #[arg(long = "fetch-timeout", default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub fetch_timeout_secs: u64,
}

impl Default for ClusterCapacityOptions {
    fn default() -> Self {
        ClusterCapacityOptions {
            kubeconfig: String::new(),
            default_scheduler_config_file: String::new(),
            max_limit: 0,
            verbose: false,
            pod_spec_file: String::new(),
            pod_list_spec_file: String::new(),
            output_format: String::new(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

/// Where the pods to simulate come from. A single pod spec always wins over a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    Single(String),
    List(String),
}

impl SpecSource {
    pub fn location(&self) -> &str {
        match self {
            SpecSource::Single(location) | SpecSource::List(location) => location,
        }
    }
}

impl ClusterCapacityOptions {
    pub fn spec_source(&self) -> Result<SpecSource, Error> {
        if !self.pod_spec_file.is_empty() {
            Ok(SpecSource::Single(self.pod_spec_file.clone()))
        } else if !self.pod_list_spec_file.is_empty() {
            Ok(SpecSource::List(self.pod_list_spec_file.clone()))
        } else {
            Err(Error::UserInputError(
                "one of --podspec or --podspeclist must be set".to_owned(),
            ))
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.output_format.is_empty() && !OUTPUT_FORMATS.contains(&self.output_format.as_str()) {
            return Err(Error::UserInputError(format!(
                "output format {:?} not recognized, expected one of: {}",
                self.output_format,
                OUTPUT_FORMATS.join("|")
            )));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(Error::UserInputError(
                "--fetch-timeout must be at least one second".to_owned(),
            ));
        }

        self.spec_source().map(|_| ())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Options of a run together with the pods ingested for it.
#[derive(Debug, Default)]
pub struct ClusterCapacityConfig {
    pub pods: Vec<Pod>,
    pub options: ClusterCapacityOptions,
}

impl ClusterCapacityConfig {
    pub fn new(options: ClusterCapacityOptions) -> Self {
        ClusterCapacityConfig {
            pods: Vec::new(),
            options,
        }
    }
}
