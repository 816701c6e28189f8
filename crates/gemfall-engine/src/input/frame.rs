use std::collections::HashSet;

use super::types::{InputEvent, Key};

/// Per-frame input deltas.
///
/// What happened since the last rendered frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys that went down this frame (repeats excluded).
    pub keys_pressed: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Pointer positions reported this frame, oldest first.
    pub fn pointer_moves(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            InputEvent::PointerMoved(m) => Some((m.x, m.y)),
            _ => None,
        })
    }
}
