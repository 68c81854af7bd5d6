mod cli;
mod config;
mod error;
mod tui;

use shadow_rs::shadow;

use self::{cli::Cli, error::Error};

shadow!(shadow);

fn main() {
    if let Err(err) = Cli::default().run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
