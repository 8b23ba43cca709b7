use std::process::ExitCode;

fn main() -> ExitCode {
    // Run the CLI
    inkpress::cli::run()
}
