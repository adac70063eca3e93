use clap::Parser;
use log::error;
use nlstpath_core::cli::{run, Cli};
use nlstpath_core::TextReport;
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(summary) => {
            let (mode, _) = cli.mode();
            println!("{}", TextReport::new(&summary, mode));
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
