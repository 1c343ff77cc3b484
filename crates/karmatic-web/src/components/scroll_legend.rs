use dioxus::prelude::*;

use karmatic_core::scroll_spy::{LegendState, ScrollSpy};

use crate::content::{section_ids, SECTIONS};
use crate::services::{scroll_to_section, stop_section_watch, watch_sections};

/// Fixed side legend highlighting the section currently in view.
#[component]
pub fn ScrollLegend() -> Element {
    let mut spy = use_signal(|| ScrollSpy::new(section_ids()));
    let mut hovered = use_signal(|| false);

    use_future(move || async move {
        let ids: Vec<&str> = section_ids().collect();
        let mut tracker = ScrollSpy::new(ids.iter().copied());
        watch_sections(&ids, move |event| {
            if tracker.apply(&event) {
                spy.set(tracker.clone());
            }
        })
        .await;
    });

    use_drop(stop_section_watch);

    rsx! {
        nav {
            class: if hovered() { "scroll-legend expanded" } else { "scroll-legend" },
            aria_label: "Page sections",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            for section in SECTIONS {
                div {
                    key: "{section.id}",
                    class: match spy.read().legend_state(section.id) {
                        LegendState::Active => "legend-item active",
                        LegendState::Past => "legend-item past",
                        LegendState::Upcoming => "legend-item",
                    },
                    role: "button",
                    tabindex: 0,
                    aria_label: format!("Navigate to {}", section.label),
                    onclick: move |_| {
                        spawn(async move {
                            scroll_to_section(section.id).await;
                        });
                    },
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if matches!(evt.key(), Key::Enter) || evt.key() == Key::Character(" ".to_string()) {
                            evt.prevent_default();
                            spawn(async move {
                                scroll_to_section(section.id).await;
                            });
                        }
                    },
                    span { class: "legend-bar" }
                    span {
                        class: "legend-label",
                        span { class: "legend-icon", "{section.glyph}" }
                        "{section.label}"
                    }
                }
            }
        }
    }
}
