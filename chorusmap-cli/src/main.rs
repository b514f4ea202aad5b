//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = chorusmap_cli::run() {
        eprintln!("chorusmap: {err}");
        std::process::exit(1);
    }
}
