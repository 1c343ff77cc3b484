use dioxus::prelude::*;

use crate::content::{
    ABOUT_HEADING, ABOUT_PARAGRAPHS, ABOUT_POINTS, PROMISE_HEADING, PROMISE_PARAGRAPHS,
};

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section {
            id: "about",
            class: "about",
            div {
                class: "about-grid",
                div {
                    h2 { "{ABOUT_HEADING}" }
                    for paragraph in ABOUT_PARAGRAPHS {
                        p { class: "about-text", "{paragraph}" }
                    }
                    ul {
                        class: "about-points",
                        for point in ABOUT_POINTS {
                            li {
                                span { class: "check", "✓" }
                                span { "{point}" }
                            }
                        }
                    }
                }
                div {
                    class: "promise",
                    h3 { "{PROMISE_HEADING}" }
                    for paragraph in PROMISE_PARAGRAPHS {
                        p { "{paragraph}" }
                    }
                }
            }
        }
    }
}
