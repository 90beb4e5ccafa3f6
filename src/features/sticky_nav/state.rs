use crate::flow::FeatureState;

/// Pinning state of the navigation bar within the scrolled page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StickyNavState {
    /// Rows from the top of the page to the nav (the hero header height).
    pub nav_top: u16,
    pub nav_height: u16,
    /// Current scroll offset in rows.
    pub offset: u16,
    /// Nav is pinned to the top of the viewport.
    pub fixed: bool,
    /// Padding inserted where the nav left the flow, so content below does
    /// not jump when the nav pins.
    pub padding_top: u16,
}

impl FeatureState for StickyNavState {}

impl StickyNavState {
    pub fn with_geometry(nav_top: u16, nav_height: u16) -> Self {
        Self {
            nav_top,
            nav_height,
            ..Self::default()
        }
    }
}
