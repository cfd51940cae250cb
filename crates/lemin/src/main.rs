mod cli;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli.run() {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
