//! Scroll-spy tracking for the section legend.
//!
//! The browser reports visibility changes and scroll positions as
//! [`SpyEvent`]s; [`ScrollSpy`] turns them into the active section.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Height of the sticky header, subtracted from scroll targets.
pub const NAV_OFFSET_PX: f64 = 80.0;

/// Fraction of the viewport used by the scroll fallback.
pub const FALLBACK_VIEWPORT_FRACTION: f64 = 0.3;

pub const OBSERVER_ROOT_MARGIN: &str = "-20% 0px -50% 0px";
pub const OBSERVER_THRESHOLDS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEntry {
    pub id: String,
    pub intersecting: bool,
    pub ratio: f64,
}

/// Absolute document offset of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionTop {
    pub id: String,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    #[serde(default)]
    pub tops: Vec<SectionTop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpyEvent {
    Visibility { entries: Vec<VisibilityEntry> },
    Scroll(ScrollMetrics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendState {
    Active,
    Past,
    Upcoming,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    sections: Vec<String>,
    /// Visible ratios keyed by page position.
    ratios: BTreeMap<usize, f64>,
    active: Option<usize>,
}

impl ScrollSpy {
    /// `sections` in page order.
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            ratios: BTreeMap::new(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|index| self.sections[index].as_str())
    }

    /// Returns `true` when the active section changed.
    pub fn apply(&mut self, event: &SpyEvent) -> bool {
        match event {
            SpyEvent::Visibility { entries } => self.observe(entries),
            SpyEvent::Scroll(metrics) => self.on_scroll(metrics),
        }
    }

    /// Record visibility changes and pick the most visible section.
    pub fn observe(&mut self, entries: &[VisibilityEntry]) -> bool {
        for entry in entries {
            let Some(index) = self.position(&entry.id) else {
                tracing::debug!(id = %entry.id, "Ignoring visibility for unknown section");
                continue;
            };
            if entry.intersecting {
                self.ratios.insert(index, entry.ratio);
            } else {
                self.ratios.remove(&index);
            }
        }

        match self.most_visible() {
            Some(index) => self.set_active(index),
            None => false,
        }
    }

    /// Fallback used while no section reports as intersecting.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) -> bool {
        if !self.ratios.is_empty() {
            return false;
        }

        let reference_line = metrics
            .viewport_height
            .mul_add(FALLBACK_VIEWPORT_FRACTION, metrics.scroll_y);

        let found = self.sections.iter().enumerate().rev().find_map(|(index, id)| {
            metrics
                .tops
                .iter()
                .find(|section| &section.id == id)
                .filter(|section| reference_line >= section.top)
                .map(|_| index)
        });

        found.is_some_and(|index| self.set_active(index))
    }

    pub fn legend_state(&self, id: &str) -> LegendState {
        let position = self.position(id);
        match (position, self.active) {
            (Some(index), Some(active)) if index == active => LegendState::Active,
            (Some(index), Some(active)) if index < active => LegendState::Past,
            _ => LegendState::Upcoming,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section == id)
    }

    fn most_visible(&self) -> Option<usize> {
        let max = self
            .ratios
            .values()
            .copied()
            .filter(|ratio| *ratio > 0.0)
            .fold(None, |best: Option<f64>, ratio| {
                Some(best.map_or(ratio, |best| best.max(ratio)))
            })?;

        let mut tied = self
            .ratios
            .iter()
            .filter(|(_, ratio)| (**ratio - max).abs() <= f64::EPSILON)
            .map(|(index, _)| *index);

        match self.active {
            Some(active) if self.ratios.get(&active).is_some_and(|r| (*r - max).abs() <= f64::EPSILON) => {
                Some(active)
            }
            _ => tied.next(),
        }
    }

    fn set_active(&mut self, index: usize) -> bool {
        if self.active == Some(index) {
            return false;
        }
        tracing::trace!(section = %self.sections[index], "Active section changed");
        self.active = Some(index);
        true
    }
}

/// Scroll position that puts a section just below the sticky header.
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - NAV_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn spy() -> ScrollSpy {
        ScrollSpy::new(["home", "services", "about", "contact"])
    }

    fn visible(id: &str, ratio: f64) -> VisibilityEntry {
        VisibilityEntry {
            id: id.to_string(),
            intersecting: true,
            ratio,
        }
    }

    fn hidden(id: &str) -> VisibilityEntry {
        VisibilityEntry {
            id: id.to_string(),
            intersecting: false,
            ratio: 0.0,
        }
    }

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            viewport_height: 1000.0,
            tops: vec![
                SectionTop { id: "home".into(), top: 0.0 },
                SectionTop { id: "services".into(), top: 900.0 },
                SectionTop { id: "about".into(), top: 1800.0 },
                SectionTop { id: "contact".into(), top: 2700.0 },
            ],
        }
    }

    #[test]
    fn most_visible_section_wins() {
        let mut spy = spy();

        assert!(spy.observe(&[visible("services", 0.6), visible("about", 0.9)]));
        assert_eq!(spy.active(), Some("about"));
    }

    #[test]
    fn hidden_sections_drop_out() {
        let mut spy = spy();
        spy.observe(&[visible("services", 0.6), visible("about", 0.9)]);

        assert!(spy.observe(&[hidden("about")]));
        assert_eq!(spy.active(), Some("services"));
    }

    #[test]
    fn tie_keeps_current_active_section() {
        let mut spy = spy();
        spy.observe(&[visible("about", 0.5)]);

        assert!(!spy.observe(&[visible("services", 0.5)]));
        assert_eq!(spy.active(), Some("about"));
    }

    #[test]
    fn tie_without_current_picks_first_in_page_order() {
        let mut spy = spy();

        spy.observe(&[visible("contact", 0.75), visible("services", 0.75)]);
        assert_eq!(spy.active(), Some("services"));
    }

    #[test]
    fn zero_ratios_do_not_activate() {
        let mut spy = spy();

        assert!(!spy.observe(&[visible("services", 0.0)]));
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let mut spy = spy();

        assert!(!spy.observe(&[visible("gallery", 1.0)]));
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn scroll_fallback_picks_last_section_above_reference_line() {
        let mut spy = spy();

        assert!(spy.on_scroll(&metrics(0.0)));
        assert_eq!(spy.active(), Some("home"));

        // 1600 + 300 passes about's top at 1800.
        assert!(spy.on_scroll(&metrics(1600.0)));
        assert_eq!(spy.active(), Some("about"));
    }

    #[test]
    fn scroll_fallback_is_skipped_while_sections_are_visible() {
        let mut spy = spy();
        spy.observe(&[visible("services", 0.4)]);

        assert!(!spy.on_scroll(&metrics(2600.0)));
        assert_eq!(spy.active(), Some("services"));
    }

    #[test]
    fn legend_states_follow_active_position() {
        let mut spy = spy();
        spy.observe(&[visible("about", 1.0)]);

        assert_eq!(spy.legend_state("home"), LegendState::Past);
        assert_eq!(spy.legend_state("services"), LegendState::Past);
        assert_eq!(spy.legend_state("about"), LegendState::Active);
        assert_eq!(spy.legend_state("contact"), LegendState::Upcoming);
    }

    #[test]
    fn nothing_active_means_everything_upcoming() {
        let spy = spy();
        assert_eq!(spy.legend_state("home"), LegendState::Upcoming);
    }

    #[test]
    fn events_deserialize_from_browser_payloads() {
        let visibility: SpyEvent = serde_json::from_str(
            r#"{"kind":"visibility","entries":[{"id":"about","intersecting":true,"ratio":0.5}]}"#,
        )
        .unwrap();
        let scroll: SpyEvent = serde_json::from_str(
            r#"{"kind":"scroll","scroll_y":120.5,"viewport_height":800,"tops":[{"id":"home","top":0}]}"#,
        )
        .unwrap();

        assert_eq!(
            visibility,
            SpyEvent::Visibility {
                entries: vec![visible("about", 0.5)]
            }
        );
        assert!(matches!(scroll, SpyEvent::Scroll(ref m) if m.tops.len() == 1));

        let mut spy = spy();
        assert!(spy.apply(&visibility));
        assert_eq!(spy.active(), Some("about"));
    }

    #[test]
    fn scroll_target_clears_header() {
        assert!((scroll_target(900.0) - 820.0).abs() < f64::EPSILON);
    }
}
