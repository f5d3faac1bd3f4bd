//! Responsive sidebar open/close state.
//!
//! On narrow viewports the sidebar overlays the page, so a click anywhere
//! outside it (and outside its toggle button) closes it again.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Where a document-level click landed, as far as the sidebar cares.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickContext {
    pub viewport_width: f64,
    pub inside_sidebar: bool,
    pub on_toggle: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarState {
    open: bool,
    breakpoint_px: f64,
}

impl SidebarState {
    /// Closed sidebar that auto-closes at or below `breakpoint_px`.
    pub fn new(breakpoint_px: f64) -> Self {
        Self { open: false, breakpoint_px }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Apply a document click. Returns `true` if the sidebar closed.
    pub fn handle_click(&mut self, click: ClickContext) -> bool {
        let narrow = click.viewport_width <= self.breakpoint_px;
        if self.open && narrow && !click.inside_sidebar && !click.on_toggle {
            self.open = false;
            return true;
        }
        false
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SIDEBAR_BREAKPOINT_PX)
    }
}
