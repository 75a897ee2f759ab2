//! # Menu & Modal Boxes
//!
//! The start menu and the modal message boxes around a session. All
//! single-threaded: the menu owns the screen and the key stream while
//! no session is running.

use basilisk_shared::constants::{KEY_CONFIRM, KEY_DOWN, KEY_UP};
use basilisk_shared::{Cell, Outcome};

use crate::config::GameConfig;
use crate::error::GameResult;
use crate::input::KeyStream;
use crate::term::Screen;

/// What the player picked on the start menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start a session.
    NewGame,
    /// Show the help box.
    Help,
    /// Leave the game.
    Exit,
}

/// Menu entries, top to bottom.
const OPTIONS: [(MenuChoice, &str); 3] = [
    (MenuChoice::NewGame, "  New Game  "),
    (MenuChoice::Help, "    Help    "),
    (MenuChoice::Exit, "    Exit    "),
];

/// Row of the first menu entry.
const FIRST_OPTION_ROW: i16 = 10;

/// Column where menu entries start.
const OPTION_COL: i16 = 27;

/// Title screen, drawn once per menu visit.
const BANNER: &str = "\
+---------------------------------------------------------------+\n\
|                                                               |\n\
|                         B A S I L I S K                       |\n\
|                                                               |\n\
|       #                                                       |\n\
|       #                                         #             |\n\
|       ##########@        $                      #             |\n\
|                                                 #             |\n\
|                                                 #             |\n\
|                                          @#######             |\n\
|                                                               |\n\
|        $                                              $       |\n\
|                                                               |\n\
|                Use w and s to move up and down                |\n\
|                     Press SPACE to select                     |\n\
+---------------------------------------------------------------+";

/// Runs the start menu until the player confirms an entry.
///
/// # Errors
///
/// Fails when the terminal cannot be drawn to or the keyboard pump
/// is gone.
pub fn run_menu(screen: &mut Screen, keys: &KeyStream) -> GameResult<MenuChoice> {
    screen.clear()?;
    screen.move_to(Cell::new(1, 1))?;
    for (i, line) in BANNER.lines().enumerate() {
        screen.move_to(Cell::new(1 + i as i16, 1))?;
        screen.write_str(line)?;
    }

    let mut selected = 0usize;
    draw_option(screen, selected, true)?;
    for i in 1..OPTIONS.len() {
        draw_option(screen, i, false)?;
    }
    screen.flush()?;

    loop {
        let key = keys.wait()?;
        let next = match key {
            k if k == KEY_UP && selected > 0 => selected - 1,
            k if k == KEY_DOWN && selected + 1 < OPTIONS.len() => selected + 1,
            k if k == KEY_CONFIRM => return Ok(OPTIONS[selected].0),
            _ => continue,
        };

        draw_option(screen, selected, false)?;
        draw_option(screen, next, true)?;
        screen.flush()?;
        selected = next;
    }
}

/// Draws one menu entry, highlighted or plain.
fn draw_option(screen: &mut Screen, index: usize, highlighted: bool) -> GameResult<()> {
    screen.move_to(Cell::new(FIRST_OPTION_ROW + index as i16, OPTION_COL))?;
    if highlighted {
        screen.highlight()?;
    }
    screen.write_str(OPTIONS[index].1)?;
    if highlighted {
        screen.normal()?;
    }
    Ok(())
}

/// Shows a modal box and blocks until the confirm key.
fn modal(
    screen: &mut Screen,
    config: &GameConfig,
    keys: &KeyStream,
    lines: &[&str],
) -> GameResult<()> {
    screen.message_box(config.board_width, config.board_height, lines)?;
    keys.wait_for(KEY_CONFIRM)
}

/// The help box.
pub fn show_help(
    screen: &mut Screen,
    config: &GameConfig,
    keys: &KeyStream,
) -> GameResult<()> {
    modal(
        screen,
        config,
        keys,
        &[
            "Steer with w, a, s and d.      ",
            "-------------------------------",
            "Eat $ to grow, avoid the walls ",
            "and your own tail.             ",
            "    Press SPACE to continue    ",
        ],
    )
}

/// The end-of-session box for `outcome`.
pub fn show_outcome(
    screen: &mut Screen,
    config: &GameConfig,
    keys: &KeyStream,
    outcome: Outcome,
) -> GameResult<()> {
    let lines: [&str; 5] = match outcome {
        Outcome::Victory => [
            "            You Win            ",
            "-------------------------------",
            "Wow, are you the snake master?!",
            "                               ",
            "    Press SPACE to continue    ",
        ],
        Outcome::Defeat => [
            "           Game Over           ",
            "-------------------------------",
            "The snake died miserably (x_x) ",
            "                               ",
            "    Press SPACE to continue    ",
        ],
    };
    modal(screen, config, keys, &lines)
}

/// The farewell box shown before the process exits.
pub fn show_goodbye(
    screen: &mut Screen,
    config: &GameConfig,
    keys: &KeyStream,
) -> GameResult<()> {
    modal(
        screen,
        config,
        keys,
        &[
            "           Goodbye          ",
            "----------------------------",
            "Thanks for playing the game!",
            "Have a nice day (^v^)       ",
            "                            ",
            "  Press SPACE to continue   ",
        ],
    )
}
