use dioxus::prelude::*;

use karmatic_core::carousel::{Carousel, SwipeDirection, SwipeTracker, ANIMATION_LOCK};

use super::header::navigate_to;
use super::interactive_selector::InteractiveSelector;
use crate::content::{PHONE_DISPLAY, PHONE_HREF, SERVICE_AREA};
use crate::services::sleep;
use crate::state::SiteState;

#[component]
pub fn HeroSection() -> Element {
    let state = use_context::<SiteState>();
    let mut carousel = use_signal(Carousel::default);
    let mut swipe = use_signal(SwipeTracker::new);

    let mut step = move |direction: SwipeDirection| {
        let locked = match direction {
            SwipeDirection::Next => carousel.write().next(),
            SwipeDirection::Prev => carousel.write().prev(),
        };
        if locked {
            spawn(async move {
                sleep(ANIMATION_LOCK).await;
                carousel.write().release_lock();
            });
        }
    };

    let current = carousel.read().current();
    let animating = carousel.read().is_animating();
    let total = carousel.read().total();

    rsx! {
        section {
            id: "home",
            class: "hero",
            div {
                class: "hero-grid",
                div {
                    class: "hero-copy",
                    div { class: "hero-badge", "Servicing {SERVICE_AREA}" }
                    h1 { "Professional Painting Services Done Right" }
                    div {
                        class: "hero-actions",
                        a {
                            class: "cta cta-primary",
                            href: PHONE_HREF,
                            span { class: "cta-title", "Call Now" }
                            span { class: "cta-detail", "{PHONE_DISPLAY}" }
                        }
                        a {
                            class: "cta cta-secondary",
                            href: "#contact",
                            onclick: move |evt: Event<MouseData>| {
                                evt.prevent_default();
                                navigate_to("contact", state.mobile_menu_open);
                            },
                            span { class: "cta-title", "Schedule Service" }
                            span { class: "cta-detail", "Talk To Me" }
                        }
                    }
                }

                div {
                    class: "hero-gallery",
                    ontouchstart: move |evt: Event<TouchData>| {
                        if let Some(touch) = evt.touches().first() {
                            swipe.write().touch_start(touch.client_coordinates().x);
                        }
                    },
                    ontouchmove: move |evt: Event<TouchData>| {
                        if let Some(touch) = evt.touches().first() {
                            swipe.write().touch_move(touch.client_coordinates().x);
                        }
                    },
                    ontouchend: move |_| {
                        let direction = swipe.write().touch_end();
                        if let Some(direction) = direction {
                            step(direction);
                        }
                    },
                    InteractiveSelector {
                        active_index: current,
                        on_select: move |index: usize| {
                            carousel.write().go_to(index);
                        },
                    }
                }
            }

            div {
                class: "carousel-controls",
                button {
                    class: "carousel-button",
                    r#type: "button",
                    disabled: animating,
                    onclick: move |_| step(SwipeDirection::Prev),
                    "‹ "
                    span { class: "carousel-button-label", "Previous" }
                }
                button {
                    class: "carousel-button",
                    r#type: "button",
                    disabled: animating,
                    onclick: move |_| step(SwipeDirection::Next),
                    span { class: "carousel-button-label", "Next" }
                    " ›"
                }
            }

            div {
                class: "carousel-indicators",
                for index in 0..total {
                    button {
                        key: "{index}",
                        class: if index == current { "indicator active" } else { "indicator" },
                        r#type: "button",
                        aria_label: format!("Go to slide {}", index + 1),
                        onclick: move |_| {
                            carousel.write().go_to(index);
                        },
                    }
                }
            }
        }
    }
}
