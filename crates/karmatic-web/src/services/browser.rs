//! DOM helpers: object URLs, smooth scrolling and the section observer bridge.

use dioxus::document;
use dioxus::prelude::{DragData, Event, FormData};
use dioxus::web::WebEventExt;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, HtmlInputElement, Url};

use karmatic_core::attachments::ObjectUrls;
use karmatic_core::scroll_spy::{scroll_target, SpyEvent, OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLDS};

/// Object URLs backed by `URL.createObjectURL`, pointing straight at the
/// picked `File`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserObjectUrls;

impl ObjectUrls for BrowserObjectUrls {
    type Source = File;

    fn create(&mut self, file: &File) -> Option<String> {
        Url::create_object_url_with_blob(file)
            .map_err(|error| {
                tracing::warn!("Failed to create object URL for {}: {:?}", file.name(), error);
            })
            .ok()
    }

    fn revoke(&mut self, url: &str) {
        if let Err(error) = Url::revoke_object_url(url) {
            tracing::warn!("Failed to revoke object URL: {:?}", error);
        }
    }
}

/// `File` handles behind a file input's change event, in selection order.
pub fn picked_files(evt: &Event<FormData>) -> Vec<File> {
    evt.data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .map(file_list)
        .unwrap_or_default()
}

/// `File` handles carried by a drop event, in drop order.
pub fn dropped_files(evt: &Event<DragData>) -> Vec<File> {
    evt.data()
        .try_as_web_event()
        .and_then(|event| event.data_transfer())
        .and_then(|transfer| transfer.files())
        .map(file_list)
        .unwrap_or_default()
}

fn file_list(list: FileList) -> Vec<File> {
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}

#[derive(Debug, Deserialize)]
struct SectionOffset {
    #[serde(default)]
    top: Option<f64>,
}

/// Smooth-scroll so the section starts just below the sticky header.
pub async fn scroll_to_section(id: &str) {
    let Ok(id_literal) = serde_json::to_string(id) else {
        return;
    };
    let script = format!(
        r"
        const el = document.getElementById({id_literal});
        dioxus.send({{ top: el ? el.getBoundingClientRect().top + window.pageYOffset : null }});
        "
    );

    let mut lookup = document::eval(&script);
    let offset = match lookup.recv::<SectionOffset>().await {
        Ok(offset) => offset,
        Err(error) => {
            tracing::warn!("Failed to locate section {}: {}", id, error);
            return;
        }
    };
    let Some(top) = offset.top else {
        tracing::debug!(%id, "Section not found");
        return;
    };

    let target = scroll_target(top);
    let _ = document::eval(&format!(
        "window.scrollTo({{ top: {target}, behavior: 'smooth' }});"
    ));
}

/// Reset a file input so the same file can be picked again.
pub fn clear_file_input(id: &str) {
    let Ok(id_literal) = serde_json::to_string(id) else {
        return;
    };
    let _ = document::eval(&format!(
        "const el = document.getElementById({id_literal}); if (el) {{ el.value = ''; }}"
    ));
}

const WATCH_SECTIONS_SCRIPT: &str = r"
const ids = __IDS__;
const previous = window.__karmaticSectionWatch;
if (previous) {
    previous.stop();
}

const sections = ids.map((id) => document.getElementById(id)).filter(Boolean);
const sendScroll = () => {
    dioxus.send({
        kind: 'scroll',
        scroll_y: window.scrollY,
        viewport_height: window.innerHeight,
        tops: sections.map((section) => ({
            id: section.id,
            top: window.scrollY + section.getBoundingClientRect().top,
        })),
    });
};

const observer = new IntersectionObserver((entries) => {
    dioxus.send({
        kind: 'visibility',
        entries: entries.map((entry) => ({
            id: entry.target.id,
            intersecting: entry.isIntersecting,
            ratio: entry.intersectionRatio,
        })),
    });
}, { root: null, rootMargin: __ROOT_MARGIN__, threshold: __THRESHOLDS__ });

sections.forEach((section) => observer.observe(section));
window.addEventListener('scroll', sendScroll, { passive: true });
sendScroll();

window.__karmaticSectionWatch = {
    stop: () => {
        observer.disconnect();
        window.removeEventListener('scroll', sendScroll);
        window.__karmaticSectionWatch = null;
    },
};
";

/// Observe the given sections and forward visibility and scroll events.
///
/// Runs until the owning task is dropped; call [`stop_section_watch`] on
/// unmount to detach the browser listeners.
pub async fn watch_sections(ids: &[&str], mut on_event: impl FnMut(SpyEvent)) {
    let script = match build_watch_script(ids) {
        Ok(script) => script,
        Err(error) => {
            tracing::error!("Failed to build section watch script: {}", error);
            return;
        }
    };

    let mut watch = document::eval(&script);
    loop {
        match watch.recv::<SpyEvent>().await {
            Ok(event) => on_event(event),
            Err(error) => {
                tracing::warn!("Section watch stopped: {}", error);
                return;
            }
        }
    }
}

pub fn stop_section_watch() {
    let _ = document::eval(
        "if (window.__karmaticSectionWatch) { window.__karmaticSectionWatch.stop(); }",
    );
}

fn build_watch_script(ids: &[&str]) -> serde_json::Result<String> {
    Ok(WATCH_SECTIONS_SCRIPT
        .replace("__IDS__", &serde_json::to_string(ids)?)
        .replace("__ROOT_MARGIN__", &serde_json::to_string(OBSERVER_ROOT_MARGIN)?)
        .replace("__THRESHOLDS__", &serde_json::to_string(&OBSERVER_THRESHOLDS)?))
}
