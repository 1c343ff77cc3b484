//! Site-wide state shared through the Dioxus context.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::services::SitePipeline;

#[derive(Clone, Copy)]
pub struct SiteState {
    /// Submission pipeline, absent when the backend is not configured.
    pub pipeline: Signal<Option<Rc<SitePipeline>>>,
    /// Whether the mobile navigation menu is expanded.
    pub mobile_menu_open: Signal<bool>,
}

impl SiteState {
    pub fn pipeline(&self) -> Option<Rc<SitePipeline>> {
        self.pipeline.read().clone()
    }
}
