use dioxus::prelude::*;

use crate::content::{SERVICES, SERVICES_SUBTITLE};

#[component]
pub fn ServicesSection() -> Element {
    let mut selected = use_signal(|| 0_usize);
    let service = SERVICES.get(selected()).unwrap_or(&SERVICES[0]);

    rsx! {
        section {
            id: "services",
            class: "services",
            div {
                class: "section-heading",
                h2 { "Our Services" }
                p { "{SERVICES_SUBTITLE}" }
            }

            div {
                class: "tabs",
                div {
                    class: "tab-list",
                    role: "tablist",
                    for (index, tab) in SERVICES.iter().enumerate() {
                        button {
                            key: "service-{index}",
                            class: if index == selected() { "tab active" } else { "tab" },
                            r#type: "button",
                            role: "tab",
                            aria_selected: index == selected(),
                            onclick: move |_| selected.set(index),
                            "{tab.title}"
                        }
                    }
                }

                div {
                    class: "tab-panel",
                    role: "tabpanel",
                    div {
                        class: "service-image",
                        img { src: service.image, alt: service.title }
                    }
                    div {
                        class: "service-copy",
                        h3 { "{service.title}" }
                        p { "{service.description}" }
                    }
                }
            }
        }
    }
}
