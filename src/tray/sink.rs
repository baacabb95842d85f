//! Display sinks: where descriptors end up

use tracing::{debug, error, info};

use super::icons::IconTable;
use crate::render::DisplayDescriptor;

pub const TRAY_TITLE: &str = "Pomodoro";

/// Host-side renderer for display descriptors
pub trait DisplaySink: Send {
    /// Draw a descriptor, updating only what changed
    fn apply(&mut self, descriptor: &DisplayDescriptor);

    /// Surface an error to the user
    fn show_error(&mut self, title: &str, message: &str);

    /// Hide the tray and release its resources
    fn teardown(&mut self);
}

/// Headless tray that renders into the log
#[derive(Debug)]
pub struct TracingSink {
    icons: IconTable,
    applied: Option<DisplayDescriptor>,
    widget_writes: u64,
    visible: bool,
}

impl TracingSink {
    pub fn new(icons: IconTable) -> Self {
        info!("{} tray visible ({} numbered icons)", TRAY_TITLE, icons.len());
        Self {
            icons,
            applied: None,
            widget_writes: 0,
            visible: true,
        }
    }

    /// Total individual widget updates performed so far
    pub fn widget_writes(&self) -> u64 {
        self.widget_writes
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Icon asset currently shown, if anything was drawn yet
    pub fn current_icon(&self) -> Option<&str> {
        self.applied.as_ref().map(|d| self.icons.resolve(d.icon))
    }
}

impl DisplaySink for TracingSink {
    fn apply(&mut self, descriptor: &DisplayDescriptor) {
        if !self.visible {
            return;
        }

        let previous = self.applied.as_ref();

        if previous.map(|p| p.icon) != Some(descriptor.icon) {
            debug!("Tray icon: {}", self.icons.resolve(descriptor.icon));
            self.widget_writes += 1;
        }
        if previous.map(|p| &p.label) != Some(&descriptor.label) {
            debug!("Time label: {}", descriptor.label);
            self.widget_writes += 1;
        }
        if previous.map(|p| &p.primary_action) != Some(&descriptor.primary_action) {
            debug!(
                "Start item: {} (enabled={})",
                descriptor.primary_action.text, descriptor.primary_action.enabled
            );
            self.widget_writes += 1;
        }
        if previous.map(|p| &p.secondary_action) != Some(&descriptor.secondary_action) {
            debug!(
                "Stop item: {} (enabled={})",
                descriptor.secondary_action.text, descriptor.secondary_action.enabled
            );
            self.widget_writes += 1;
        }

        self.applied = Some(descriptor.clone());
    }

    fn show_error(&mut self, title: &str, message: &str) {
        error!("{}: {}", title, message);
    }

    fn teardown(&mut self) {
        if self.visible {
            self.visible = false;
            info!("{} tray hidden", TRAY_TITLE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ActionDescriptor, IconSelector};

    fn descriptor(label: &str, minutes: u32) -> DisplayDescriptor {
        DisplayDescriptor {
            label: label.to_string(),
            icon: IconSelector::Minutes(minutes),
            primary_action: ActionDescriptor::new("Pause", true),
            secondary_action: ActionDescriptor::new("Stop", true),
        }
    }

    #[test]
    fn test_first_apply_writes_every_widget() {
        let mut sink = TracingSink::new(IconTable::new(90));
        sink.apply(&descriptor("24:59", 25));
        assert_eq!(sink.widget_writes(), 4);
        assert_eq!(sink.current_icon(), Some("number25"));
    }

    #[test]
    fn test_only_changed_widgets_are_written() {
        let mut sink = TracingSink::new(IconTable::new(90));
        sink.apply(&descriptor("24:59", 25));
        sink.apply(&descriptor("24:59", 25));
        assert_eq!(sink.widget_writes(), 4);

        sink.apply(&descriptor("24:58", 25));
        assert_eq!(sink.widget_writes(), 5);

        sink.apply(&descriptor("23:59", 24));
        assert_eq!(sink.widget_writes(), 7);
        assert_eq!(sink.current_icon(), Some("number24"));
    }

    #[test]
    fn test_teardown_stops_drawing() {
        let mut sink = TracingSink::new(IconTable::new(90));
        sink.teardown();
        assert!(!sink.is_visible());
        sink.apply(&descriptor("24:59", 25));
        assert_eq!(sink.widget_writes(), 0);
    }
}
