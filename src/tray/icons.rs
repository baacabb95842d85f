//! Icon lookup table, built once at startup

use crate::render::IconSelector;

pub const DEFAULT_ICON: &str = "pomodoro";
pub const BLINK_ICON: &str = "number00blink";

/// Resolves an [`IconSelector`] to an icon asset name by plain index
#[derive(Debug, Clone)]
pub struct IconTable {
    default: String,
    blink: String,
    minutes: Vec<String>,
}

impl IconTable {
    /// One numbered icon for every minute from 0 to `max_minutes`
    pub fn new(max_minutes: u32) -> Self {
        Self {
            default: DEFAULT_ICON.to_string(),
            blink: BLINK_ICON.to_string(),
            minutes: (0..=max_minutes).map(|m| format!("number{:02}", m)).collect(),
        }
    }

    pub fn resolve(&self, selector: IconSelector) -> &str {
        match selector {
            IconSelector::Default => &self.default,
            IconSelector::Blink => &self.blink,
            IconSelector::Minutes(m) => {
                let last = self.minutes.len() - 1;
                &self.minutes[(m as usize).min(last)]
            }
        }
    }

    /// Number of numbered icons
    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_minute() {
        let table = IconTable::new(90);
        assert_eq!(table.len(), 91);
        assert_eq!(table.resolve(IconSelector::Minutes(0)), "number00");
        assert_eq!(table.resolve(IconSelector::Minutes(7)), "number07");
        assert_eq!(table.resolve(IconSelector::Minutes(90)), "number90");
    }

    #[test]
    fn test_fixed_icons() {
        let table = IconTable::new(90);
        assert_eq!(table.resolve(IconSelector::Default), "pomodoro");
        assert_eq!(table.resolve(IconSelector::Blink), "number00blink");
    }

    #[test]
    fn test_out_of_range_minutes_clamp_to_last_icon() {
        let table = IconTable::new(5);
        assert_eq!(table.resolve(IconSelector::Minutes(60)), "number05");
    }
}
