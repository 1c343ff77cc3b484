use std::time::Duration;

use dioxus::prelude::*;

use karmatic_core::carousel::entrance_delay;

use crate::content::SLIDES;
use crate::services::sleep;

/// Expanding gallery of the service slides.
///
/// Wide layouts show every option with the active one expanded; narrow
/// layouts show only the active option.
#[component]
pub(super) fn InteractiveSelector(active_index: usize, on_select: EventHandler<usize>) -> Element {
    let mut revealed = use_signal(|| 0_usize);

    use_future(move || async move {
        let mut elapsed = Duration::ZERO;
        for index in 0..SLIDES.len() {
            let delay = entrance_delay(index);
            sleep(delay.saturating_sub(elapsed)).await;
            elapsed = delay;
            revealed.set(index + 1);
        }
    });

    let active = SLIDES.get(active_index).unwrap_or(&SLIDES[0]);

    rsx! {
        div {
            class: "selector",
            div {
                class: "selector-options",
                for (index, slide) in SLIDES.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if index == active_index { "selector-option active" } else { "selector-option" },
                        class: if index < revealed() { "revealed" },
                        style: "background-image: url('{slide.image}');",
                        onclick: move |_| {
                            if index != active_index {
                                on_select.call(index);
                            }
                        },
                        div { class: "selector-shade" }
                        div {
                            class: "selector-label",
                            span { class: "selector-icon", "{slide.glyph}" }
                            div {
                                class: "selector-info",
                                div { class: "selector-title", "{slide.title}" }
                                div { class: "selector-subtitle", "{slide.description}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "selector-mobile",
                img { src: active.image, alt: active.title }
                div { class: "selector-mobile-shade" }
                div {
                    class: "selector-mobile-info",
                    span { class: "selector-icon", "{active.glyph}" }
                    div {
                        h3 { "{active.title}" }
                        p { "{active.description}" }
                    }
                }
            }
        }
    }
}
