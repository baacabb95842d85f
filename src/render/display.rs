//! Display descriptor handed to the tray on every refresh

use serde::Serialize;

/// Which tray icon to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "minutes", rename_all = "snake_case")]
pub enum IconSelector {
    /// Application icon, shown while idle
    Default,
    /// Numbered icon for the given minutes remaining
    Minutes(u32),
    /// Alternate icon for the finished heartbeat
    Blink,
}

/// Text and enabled-ness of one menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
    pub text: String,
    pub enabled: bool,
}

impl ActionDescriptor {
    pub fn new(text: impl Into<String>, enabled: bool) -> Self {
        Self {
            text: text.into(),
            enabled,
        }
    }
}

/// Everything the tray needs to render one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayDescriptor {
    pub label: String,
    pub icon: IconSelector,
    pub primary_action: ActionDescriptor,
    pub secondary_action: ActionDescriptor,
}
