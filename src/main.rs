//! `mm_mult_serial [l_dimension] <m_dimension n_dimension>`
//!
//! Fills A and B with seeded random values, multiplies them and prints how
//! long the multiply took.

mod cli;

use crate::cli::Cli;
use clap::Parser;
use log::debug;
use mm_mult::{Dims, app};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::setup_logging(cli.verbose);
    debug!("args: {:?}", cli);

    // Dims are validated before anything is allocated.
    let result = Dims::from_args(&cli.dims)
        .and_then(|dims| app::run(dims, &cli.run_config(), &mut io::stdout().lock()));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
