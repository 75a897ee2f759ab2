//! # basilisk
//!
//! The playable terminal binary: menu loop around game sessions.

use std::path::Path;
use std::process::ExitCode;

use basilisk::config::GameConfig;
use basilisk::error::GameResult;
use basilisk::input::KeyStream;
use basilisk::menu::{self, MenuChoice};
use basilisk::session;
use basilisk::term::{self, RawMode, Screen, ScreenMode};

/// Config file looked up in the working directory.
const CONFIG_PATH: &str = "basilisk.toml";

fn main() -> ExitCode {
    // Restore the terminal and bail immediately on Ctrl-C / TERM.
    term::raw::install_signal_handlers();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // The raw-mode guard has already been dropped here, so the
            // diagnostic lands on a working terminal.
            eprintln!("basilisk: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> GameResult<()> {
    let config = GameConfig::load(Path::new(CONFIG_PATH))?;

    let raw = RawMode::enable()?;
    let keys = KeyStream::spawn_pump()?;
    let mut screen = Screen::new(ScreenMode::Interactive);

    loop {
        match menu::run_menu(&mut screen, &keys)? {
            MenuChoice::NewGame => {
                let outcome = session::run(&config, &keys, ScreenMode::Interactive)?;
                menu::show_outcome(&mut screen, &config, &keys, outcome)?;
            }
            MenuChoice::Help => menu::show_help(&mut screen, &config, &keys)?,
            MenuChoice::Exit => break,
        }
    }

    menu::show_goodbye(&mut screen, &config, &keys)?;
    screen.clear()?;
    drop(raw);

    Ok(())
}
