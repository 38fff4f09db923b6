//! beanstalk-cleaner - terminate swapped-out Elastic Beanstalk environments

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use beanstalk_cleaner::cli::Cli;
use beanstalk_cleaner::output::json::format_error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    if let Err(e) = cli.run().await {
        let message = format!("{e:#}");
        match format_error(&message, "COMMAND_FAILED") {
            Ok(body) if json => println!("{body}"),
            _ => eprintln!("Error: {message}"),
        }
        std::process::exit(1);
    }
}
