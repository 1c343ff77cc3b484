use dioxus::prelude::*;

use karmatic_core::form::FormStatus;

#[component]
pub(super) fn StatusBanner(status: FormStatus, on_dismiss: EventHandler<()>) -> Element {
    let (class, message) = match &status {
        FormStatus::Success(message) => ("status-banner success", message.clone()),
        FormStatus::Error(message) => ("status-banner error", message.clone()),
        FormStatus::Idle | FormStatus::Submitting => return rsx! {},
    };

    rsx! {
        div {
            class,
            role: "status",
            span { "{message}" }
            button {
                class: "status-dismiss",
                r#type: "button",
                aria_label: "Dismiss message",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    }
}
