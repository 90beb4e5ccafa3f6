use crate::flow::Intent;

/// Intents dispatched to the sticky nav reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum StickyNavIntent {
    /// The page scrolled to `offset` rows. Negative offsets clamp to zero.
    Scrolled { offset: f64 },
}

impl Intent for StickyNavIntent {}
