pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::Frame;

use crate::app::{AppState, Screen};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    match state.screen {
        Screen::List => screens::list::render(frame, area, state),
        Screen::Entry => screens::entry::render(frame, area, state),
    }
    components::toast::render(frame, area, state.toast.as_ref());
}
