//! View Coordinator
//!
//! Visibility of the two overlays. They are independent: toggling one never
//! touches the other.

use crate::detail::DetailInspector;

/// Overlay visibility.
///
/// Detail visibility is read against the inspector and is false whenever
/// the inspector has no subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewCoordinator {
    directory_visible: bool,
    detail_visible: bool,
}

impl ViewCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn directory_visible(&self) -> bool {
        self.directory_visible
    }

    pub const fn detail_visible(&self, inspector: &DetailInspector) -> bool {
        self.detail_visible && inspector.is_open()
    }

    pub fn open_directory(&mut self) {
        self.directory_visible = true;
    }

    pub fn close_directory(&mut self) {
        self.directory_visible = false;
    }

    /// Show the detail panel. Refused while the inspector has no subject.
    pub fn open_detail(&mut self, inspector: &DetailInspector) -> bool {
        self.detail_visible = inspector.is_open();
        self.detail_visible
    }

    pub fn close_detail(&mut self) {
        self.detail_visible = false;
    }
}
