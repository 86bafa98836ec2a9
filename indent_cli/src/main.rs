//! # Indent CLI
//!
//! Computes production indents from the command line and exports them to
//! Excel, PDF or Word.
//!
//! ```text
//! indent plate --length 3 --breadth 2 --unit feet -q 250 -e xlsx
//! indent cuplock --kind ledger --length 1.2 --wall 3.2
//! indent run order.indent.json -e pdf -o out/
//! ```

mod cli;
mod commands;
mod output;

use clap::Parser;
use env_logger::Env;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
