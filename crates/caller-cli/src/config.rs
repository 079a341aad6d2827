//! Worker configuration: command-line flags, falling back to the environment.

use clap::Parser;

/// Queue consumer demo: routes topics to typed handlers.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "caller-cli")]
pub struct Config {
    /// Number of consumer tasks sharing the queue
    #[arg(
        long,
        env = "CALLER_WORKERS",
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub workers: u16,

    /// Capacity of the in-memory queue
    #[arg(
        long,
        env = "CALLER_QUEUE_CAPACITY",
        default_value_t = 64,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub queue_capacity: u16,
}
