use crate::controllers::plot::command::Command;
use crate::input::keys::{KeySteps, command_for_key};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a terminal key press to a plot command. Ctrl-C always quits.
#[must_use]
pub fn command_for_key_event(event: &KeyEvent, steps: &KeySteps) -> Option<Command> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Left => command_for_key('h', steps),
        KeyCode::Down => command_for_key('j', steps),
        KeyCode::Up => command_for_key('k', steps),
        KeyCode::Right => command_for_key('l', steps),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) => command_for_key(c, steps),
        _ => None,
    }
}
