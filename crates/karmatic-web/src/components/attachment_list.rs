use dioxus::prelude::*;

use karmatic_core::attachments::{format_size_mb, AttachmentEntry, AttachmentKind, Preview};

#[component]
pub(super) fn AttachmentList(entries: Vec<AttachmentEntry>, on_remove: EventHandler<usize>) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "attachment-list",
            for (index, entry) in entries.into_iter().enumerate() {
                AttachmentRow {
                    key: "{entry.key}",
                    entry,
                    on_remove: move |()| on_remove.call(index),
                }
            }
        }
    }
}

#[component]
fn AttachmentRow(entry: AttachmentEntry, on_remove: EventHandler<()>) -> Element {
    let size = entry
        .size_bytes()
        .map_or_else(|| "Reading...".to_string(), format_size_mb);
    let remove_label = format!("Remove {}", entry.name);

    rsx! {
        div {
            class: "attachment-item",
            AttachmentThumbnail { kind: entry.kind(), preview: entry.preview.clone() }
            div {
                class: "attachment-meta",
                p { class: "attachment-name", "{entry.name}" }
                p { class: "attachment-size", "{size}" }
            }
            button {
                class: "attachment-remove",
                r#type: "button",
                aria_label: remove_label,
                onclick: move |_| on_remove.call(()),
                "✕"
            }
        }
    }
}

#[component]
fn AttachmentThumbnail(kind: AttachmentKind, preview: Preview) -> Element {
    match (kind, preview.source()) {
        (AttachmentKind::Image, Some(source)) => rsx! {
            img { class: "attachment-thumb", src: "{source}", alt: "Preview" }
        },
        (AttachmentKind::Video, Some(source)) => rsx! {
            video { class: "attachment-thumb", src: "{source}", muted: true, preload: "metadata" }
        },
        (kind, _) => rsx! {
            div {
                class: "attachment-thumb placeholder",
                title: kind.label(),
                "📄"
            }
        },
    }
}
