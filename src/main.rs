use clap::Parser;
use std::process;
use tidal_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(_report) => {
            // Success - the report has already been printed by the command
        }
        Err(error) => {
            eprintln!("Error: {}", error);

            // Walk the source chain so file/line context is not lost
            let mut source = std::error::Error::source(&error);
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            process::exit(1);
        }
    }
}
