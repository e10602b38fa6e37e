//! Terminal event handling.
//!
//! Key presses are translated into explicit [`Action`]s that the main
//! loop applies to the [`App`](crate::app::App); range selection carries
//! the chosen hours value rather than relying on any ambient event state.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};

use crate::app::RANGE_PRESETS;

/// An input action requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Run one manual refresh cycle (current + history).
    Refresh,
    /// Select a history range preset, in hours.
    SelectRange(u32),
    /// Step to the previous preset.
    RangePrev,
    /// Step to the next preset.
    RangeNext,
    /// Toggle the help overlay.
    ToggleHelp,
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Map a key event to an action, if it is bound to one.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::RangePrev),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::RangeNext),
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            Some(Action::SelectRange(RANGE_PRESETS[index]))
        }
        _ => None,
    }
}

/// The preset adjacent to `current`, saturating at the ends.
///
/// A custom (non-preset) range steps to the nearest preset in the
/// requested direction.
pub fn adjacent_preset(current: u32, forward: bool) -> u32 {
    if forward {
        RANGE_PRESETS
            .iter()
            .copied()
            .find(|&p| p > current)
            .unwrap_or(RANGE_PRESETS[RANGE_PRESETS.len() - 1])
    } else {
        RANGE_PRESETS
            .iter()
            .rev()
            .copied()
            .find(|&p| p < current)
            .unwrap_or(RANGE_PRESETS[0])
    }
}
