//! Local UI chrome state (sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state
//! (`conversations`, `chat`) so layout controls can evolve independently of
//! protocol data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the conversation sidebar.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    /// Whether the sidebar is open. Defaults closed for small viewports;
    /// wide layouts keep it visible via styling alone.
    pub sidebar_open: bool,
}

impl UiState {
    /// Flip the sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
