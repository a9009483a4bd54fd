//! Input intent channel
//!
//! Keyboard events arrive asynchronously relative to the tick and only ever
//! write to this held-key set; the tick reads and drains it. Keydown/keyup are
//! idempotent add/remove, so last-writer-wins membership is all the
//! coordination needed.
//!
//! Recognized keys are consumed when handled: a held arrow key moves one lane
//! per physical press, not continuously, and Escape needs a fresh
//! press-release cycle before it toggles pause again.

/// A key the simulation recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    /// Move one lane toward lane 0
    Left,
    /// Move one lane toward lane 4
    Right,
    /// Toggle playing/paused
    Pause,
}

impl GameKey {
    /// Map a DOM `KeyboardEvent.key` value; unrecognized keys have no behavior
    pub fn from_dom_key(key: &str) -> Option<GameKey> {
        match key {
            "ArrowLeft" => Some(GameKey::Left),
            "ArrowRight" => Some(GameKey::Right),
            "Escape" => Some(GameKey::Pause),
            _ => None,
        }
    }
}

/// Set of currently-held recognized keys
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKeys {
    left: bool,
    right: bool,
    pause: bool,
}

impl HeldKeys {
    /// Record a key-down event
    pub fn press(&mut self, key: GameKey) {
        *self.slot(key) = true;
    }

    /// Record a key-up event
    pub fn release(&mut self, key: GameKey) {
        *self.slot(key) = false;
    }

    /// Whether a key is currently held
    pub fn is_held(&self, key: GameKey) -> bool {
        match key {
            GameKey::Left => self.left,
            GameKey::Right => self.right,
            GameKey::Pause => self.pause,
        }
    }

    /// Consume a key: returns whether it was held and removes it from the set
    pub fn take(&mut self, key: GameKey) -> bool {
        let slot = self.slot(key);
        std::mem::take(slot)
    }

    fn slot(&mut self, key: GameKey) -> &mut bool {
        match key {
            GameKey::Left => &mut self.left,
            GameKey::Right => &mut self.right,
            GameKey::Pause => &mut self.pause,
        }
    }
}
