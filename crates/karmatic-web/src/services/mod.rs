//! Browser-side services used by the components.

mod browser;
mod timers;

use karmatic_core::backend::SupabaseClient;
use karmatic_core::config::SiteConfig;
use karmatic_core::submission::{SubmissionPipeline, SubmissionTarget};

pub use browser::{
    clear_file_input, dropped_files, picked_files, scroll_to_section, stop_section_watch,
    watch_sections, BrowserObjectUrls,
};
pub use timers::sleep;

pub type SitePipeline = SubmissionPipeline<SupabaseClient>;

/// Build the submission pipeline when a backend is configured.
pub fn build_pipeline(config: Option<&SiteConfig>) -> Option<SitePipeline> {
    let config = config?;
    match SupabaseClient::from_config(config) {
        Ok(client) => Some(SubmissionPipeline::new(
            client,
            SubmissionTarget::from_config(config),
        )),
        Err(error) => {
            tracing::error!("Failed to create Supabase client: {}", error);
            None
        }
    }
}
