use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Keys currently held, used to turn raw key events into press edges.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an event and records it, plus any press edge, in `frame`.
    pub(crate) fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            // Releases are not delivered while unfocused.
            InputEvent::Focused(false) => self.keys_down.clear(),
            InputEvent::Focused(true) | InputEvent::PointerMoved(_) => {}

            InputEvent::Key { key, state, repeat } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) && !*repeat {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },
        }

        frame.push_event(ev);
    }
}
