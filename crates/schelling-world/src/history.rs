//! Recorded grid snapshots across relocation passes.

use serde::{Deserialize, Serialize};

/// One numeric grid snapshot: rows of cell encodings (0=empty, 1=A, 2=B)
pub type Frame = Vec<Vec<u8>>;

/// Ordered sequence of grid snapshots.
///
/// Frame 0 is the initial state; frame i is the state after i relocation
/// passes. Consumable by any rendering or analysis layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    frames: Vec<Frame>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn initial(&self) -> Option<&Frame> {
        self.frames.first()
    }

    pub fn latest(&self) -> Option<&Frame> {
        self.frames.last()
    }
}
