use std::process::ExitCode;

fn main() -> ExitCode {
    portfolio_builder::cli::run()
}
