mod app;
mod error;
mod input;
mod paths;
mod render;
mod screens;
mod terminal;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::terminal::Terminal;

fn init_logging() {
    paths::rotate_logs();
    let path = paths::log_file();
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

fn run() -> error::Result<()> {
    let mut terminal = Terminal::new(app::TITLE)?;
    App::new().run(&mut terminal)
}

fn main() {
    init_logging();
    log::info!("Starting registration form");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
