use clap::Parser;
use zt_selector::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
