//! main.rs
//! Entry point for peek

use peek::app;
use peek::ui::theme;
use peek::utils::cli::{CliAction, handle_args};

fn main() {
    match handle_args() {
        CliAction::Exit => {}
        CliAction::Run(opts) => {
            if let Err(err) = app::run(&opts) {
                eprintln!("{}", theme::error(&format!("error: {}", err)));
                std::process::exit(1);
            }
        }
    }
}
