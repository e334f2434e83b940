use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};

use cidr_tool::cli;

fn main() {
    // Keep main() thin, it cannot carry tests
    let args = cli::Args::parse();
    init_logging(args.verbose);

    if let Err(e) = cli::run(&args) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Log to stderr so piped stdout stays clean; `-v` raises the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .expect("Error building log4rs config");
    log4rs::init_config(config).expect("Error initializing log4rs");
}
