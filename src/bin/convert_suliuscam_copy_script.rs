use std::process;

use clap::Parser;

use sealog_import::cli::SuliusCamCopyScriptCli;

fn main() {
    if let Err(e) = SuliusCamCopyScriptCli::parse().run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
