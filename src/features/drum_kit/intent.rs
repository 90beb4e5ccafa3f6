use crate::flow::Intent;

/// Intents dispatched to the drum kit reducer.
#[derive(Debug, Clone)]
pub enum DrumKitIntent {
    /// A key was struck. Keys without a pad are absorbed as no-ops.
    Strike { key: char },

    /// The pad's highlight transition finished.
    Decay { key: char },
}

impl Intent for DrumKitIntent {}
