use std::process;

use clap::Parser;

use sealog_import::cli::CruiseRecordsCli;

fn main() {
    if let Err(e) = CruiseRecordsCli::parse().run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
