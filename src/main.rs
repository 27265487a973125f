//! `domcheck` binary: prints a selector -> presence JSON report for an HTML
//! file or URL. Bad input is reported on stdout with status 1, fetch and
//! parse failures on stderr.

use clap::Parser;

mod cli;

use cli::exit_codes;

fn main() {
    let args = cli::CliArgs::parse();
    let code = match cli::run(args) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            if err.is_validation() {
                println!("{err}");
            } else {
                eprintln!("Error: {err}");
            }
            err.exit_code()
        }
    };
    std::process::exit(code);
}
