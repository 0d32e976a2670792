//! Per-die display state

use super::DieKind;

/// Visual state of a die on the tray
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FaceState {
    #[default]
    Idle,
    /// Flickering through random values while a roll is in flight
    Rolling,
    /// Showing the result of the last completed roll
    Settled,
}

/// What one die currently shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DieFace {
    pub kind: DieKind,
    pub text: String,
    pub state: FaceState,
}

impl DieFace {
    pub fn new(kind: DieKind) -> Self {
        Self {
            kind,
            text: kind.default_face().to_string(),
            state: FaceState::Idle,
        }
    }

    pub fn show(&mut self, value: u32) {
        self.text = self.kind.format(value);
    }

    pub fn restore_default(&mut self) {
        *self = Self::new(self.kind);
    }
}
