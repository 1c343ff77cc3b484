use chrono::{Datelike, Local};
use dioxus::prelude::*;

use crate::content::{copyright_notice, BUSINESS_NAME, FOOTER_TAGLINE, LOGO_PATH};

#[component]
pub fn Footer() -> Element {
    let notice = copyright_notice(Local::now().year());

    rsx! {
        footer {
            class: "site-footer",
            img { class: "footer-logo", src: LOGO_PATH, alt: BUSINESS_NAME }
            p { class: "footer-tagline", "{FOOTER_TAGLINE}" }
            p { class: "footer-copyright", "{notice}" }
        }
    }
}
