//! Keyboard sequence detector for the hidden celebration.
//!
//! Matching is strict: a wrong key throws the progress away entirely and the
//! wrong key itself is consumed, not retried as a new first step. Keys are
//! expected pre-normalized (single letters lowercased) by the caller.

/// The classic ten-step code.
pub const SECRET_SEQUENCE: [&str; 10] = [
    "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
    "ArrowRight", "b", "a",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceStep {
    /// Key matched, sequence not finished yet.
    Advanced,
    /// Key mismatched, progress discarded.
    Reset,
    /// Final key matched. Progress resets so the code can be entered again.
    Completed,
}

#[derive(Clone, Debug, Default)]
pub struct SequenceDetector {
    cursor: usize,
}

impl SequenceDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps matched so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn feed(&mut self, key: &str) -> SequenceStep {
        if key == SECRET_SEQUENCE[self.cursor] {
            self.cursor += 1;
            if self.cursor == SECRET_SEQUENCE.len() {
                self.cursor = 0;
                SequenceStep::Completed
            } else {
                SequenceStep::Advanced
            }
        } else {
            self.cursor = 0;
            SequenceStep::Reset
        }
    }
}
