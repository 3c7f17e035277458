//! # todomvc terminal client
//!
//! The binary is intentionally thin: the host lives in `cli/`, and this file only invokes
//! `cli::run()` and handles process termination.
//!
//! The host plays the part a browser view layer would play for the same core: it reads one
//! gesture per line, turns it into actions, executes any effect the store hands back, and
//! renders the projection through templates.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
