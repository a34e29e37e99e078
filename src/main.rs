//! satorb CLI - interactive satellite-orbit simulator
//!
//! Command-line interface for orbit computation, classification and the
//! web dashboard. The animated front ends live in the `orbit_view` and
//! `control_panel` binaries.

use std::process::ExitCode;

use satorb::cli::{args::Args, commands};

fn main() -> ExitCode {
    let args = Args::parse();
    commands::execute(&args.command)
}
