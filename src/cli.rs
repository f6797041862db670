use clap::{ArgAction, Parser};
use log::LevelFilter;
use mm_mult::app::RunConfig;
use mm_mult::fill::{MAX_VALUE, SEED};

#[derive(Parser, Debug)]
#[command(
    name = "mm_mult_serial",
    version = env!("CARGO_PKG_VERSION"),
    about = "Serial dense matrix multiplication C = A x B, timed."
)]
pub struct Cli {
    /// `D` for D×D square matrices, or `L M N` for A:L×M, B:M×N
    #[arg(value_name = "DIM", allow_negative_numbers = true)]
    pub dims: Vec<String>,

    /// Print the A, B and C matrices
    #[arg(short, long, env = "MM_MULT_DEBUG")]
    pub debug: bool,

    /// Random number seed for the A and B fill
    #[arg(long, env = "MM_MULT_SEED", default_value_t = SEED)]
    pub seed: u64,

    /// Exclusive upper bound of generated elements
    #[arg(long, value_name = "VALUE", default_value_t = MAX_VALUE)]
    pub max_value: f32,

    // verbosity (-v, -vv, etc.)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            seed: self.seed,
            max_value: self.max_value,
            debug: self.debug,
        }
    }
}

/// Map `-v` count to a log level; `RUST_LOG` still wins when set.
pub fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
