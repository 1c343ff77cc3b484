use dioxus::prelude::*;

use crate::content::{BUSINESS_NAME, LOGO_PATH, SECTIONS};
use crate::services::scroll_to_section;
use crate::state::SiteState;

/// Scroll to a section and collapse the mobile menu.
pub(crate) fn navigate_to(section_id: &'static str, mut menu_open: Signal<bool>) {
    menu_open.set(false);
    spawn(async move {
        scroll_to_section(section_id).await;
    });
}

#[component]
pub fn Header() -> Element {
    let state = use_context::<SiteState>();
    let mut menu_open = state.mobile_menu_open;

    rsx! {
        header {
            class: "site-header",
            nav {
                class: "site-nav",
                img { class: "site-logo", src: LOGO_PATH, alt: BUSINESS_NAME }

                div {
                    class: "nav-links",
                    for section in SECTIONS {
                        a {
                            key: "{section.id}",
                            class: "nav-link",
                            href: "#{section.id}",
                            onclick: move |evt: Event<MouseData>| {
                                evt.prevent_default();
                                navigate_to(section.id, menu_open);
                            },
                            "{section.label}"
                        }
                    }
                }

                button {
                    class: "menu-toggle",
                    r#type: "button",
                    aria_label: if menu_open() { "Close menu" } else { "Open menu" },
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            if menu_open() {
                div {
                    class: "mobile-menu",
                    for section in SECTIONS {
                        a {
                            key: "{section.id}",
                            class: "mobile-menu-link",
                            href: "#{section.id}",
                            onclick: move |evt: Event<MouseData>| {
                                evt.prevent_default();
                                navigate_to(section.id, menu_open);
                            },
                            "{section.label}"
                        }
                    }
                }
            }
        }
    }
}
