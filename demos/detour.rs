//! Finds a route across a grid map and prints it.
//!
//! Run: cargo run --bin detour -- [CONFIG.json] [--seed N] [--density D] [--speed N]

use skirmish_demos::{Options, run};

fn main() {
    let result = Options::parse(std::env::args().skip(1)).and_then(|opts| run(&opts));
    match result {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
