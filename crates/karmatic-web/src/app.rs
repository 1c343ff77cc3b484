//! Root application component

use std::rc::Rc;

use dioxus::prelude::*;

use crate::bootstrap_config::{load_bootstrap_config, resolve_site_config};
use crate::components::{
    AboutSection, ContactSection, Footer, Header, HeroSection, ScrollLegend, ServicesSection,
};
use crate::services::build_pipeline;
use crate::state::SiteState;

#[component]
pub fn App() -> Element {
    let pipeline = use_signal(|| {
        let config = resolve_site_config(load_bootstrap_config());
        build_pipeline(config.as_ref()).map(Rc::new)
    });
    let mobile_menu_open = use_signal(|| false);

    use_context_provider(|| SiteState {
        pipeline,
        mobile_menu_open,
    });

    rsx! {
        document::Title { "Karmatic Painting" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        div {
            class: "site",
            ScrollLegend {}
            Header {}
            main {
                class: "site-main",
                HeroSection {}
                ServicesSection {}
                AboutSection {}
                ContactSection {}
            }
            Footer {}
        }
    }
}
