use std::time::Duration;

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use web_sys::File;

use karmatic_core::attachments::{AttachmentKey, AttachmentPicker, ACCEPTED_ATTACHMENT_TYPES};
use karmatic_core::form::{FormFields, FormState, STATUS_REVERT_DELAY};
use karmatic_core::submission::{apply_outcome, SubmissionError};

use super::attachment_list::AttachmentList;
use super::status_banner::StatusBanner;
use crate::content::{CONTACT_CARDS, CONTACT_SUBTITLE};
use crate::services::{
    clear_file_input, dropped_files, picked_files, sleep, BrowserObjectUrls,
};
use crate::state::SiteState;

const FILE_INPUT_ID: &str = "attachment-file-input";
const READ_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section {
            id: "contact",
            class: "contact",
            div {
                class: "section-heading",
                h2 { "Get In Touch" }
                p { "{CONTACT_SUBTITLE}" }
            }
            ContactForm {}
            div {
                class: "contact-cards",
                for card in CONTACT_CARDS {
                    if let Some(href) = card.href {
                        a {
                            key: "{card.title}",
                            class: "contact-card",
                            href,
                            span { class: "contact-icon", "{card.glyph}" }
                            h3 { "{card.title}" }
                            p { "{card.value}" }
                        }
                    } else {
                        div {
                            key: "{card.title}",
                            class: "contact-card",
                            span { class: "contact-icon", "{card.glyph}" }
                            h3 { "{card.title}" }
                            p { "{card.value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let state = use_context::<SiteState>();
    let mut fields = use_signal(FormFields::default);
    let mut form = use_signal(FormState::new);
    let mut picker = use_signal(AttachmentPicker::new);
    let mut revert_task = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Ok(mut picker) = picker.try_write() {
            picker.clear(&mut BrowserObjectUrls);
        }
    });

    let on_pick_files = move |evt: Event<FormData>| {
        if !form.read().status().is_submitting() {
            stage_attachments(evt.files(), &picked_files(&evt), picker);
        }
        clear_file_input(FILE_INPUT_ID);
    };

    let on_drop_files = move |evt: Event<DragData>| {
        evt.prevent_default();
        if !form.read().status().is_submitting() {
            stage_attachments(evt.files(), &dropped_files(&evt), picker);
        }
    };

    let mut cancel_revert = move || {
        let pending = revert_task.write().take();
        if let Some(task) = pending {
            task.cancel();
        }
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if !form.write().begin_submit() {
            return;
        }
        cancel_revert();

        let pipeline = state.pipeline();
        let submitted = fields.read().clone();

        spawn(async move {
            let files = loop {
                if let Some(files) = picker.read().snapshot() {
                    break files;
                }
                sleep(READ_POLL_INTERVAL).await;
            };

            let outcome = match pipeline {
                Some(pipeline) => pipeline.submit(&submitted, &files).await,
                None => Err(SubmissionError::without_backend(&submitted)),
            };

            let ticket = apply_outcome(
                &mut form.write(),
                &mut fields.write(),
                &mut picker.write(),
                &mut BrowserObjectUrls,
                &outcome,
            );

            let task = spawn(async move {
                sleep(STATUS_REVERT_DELAY).await;
                form.write().revert(ticket);
            });
            revert_task.set(Some(task));
        });
    };

    let on_dismiss = move |()| {
        cancel_revert();
        form.write().dismiss();
    };

    let status = form.read().status().clone();
    let submitting = status.is_submitting();
    let entries = picker.read().entries().to_vec();
    let current = fields.read().clone();

    rsx! {
        div {
            class: "contact-panel",
            h3 { "Send Me a Message of What You Need Done" }
            form {
                class: "contact-form",
                onsubmit: on_submit,

                div {
                    class: "form-field",
                    label { r#for: "firstName", "First Name" }
                    input {
                        id: "firstName",
                        name: "firstName",
                        r#type: "text",
                        placeholder: "Enter your first name",
                        required: true,
                        value: "{current.first_name}",
                        oninput: move |evt: Event<FormData>| fields.write().first_name = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "phoneNumber", "Phone Number" }
                    input {
                        id: "phoneNumber",
                        name: "phoneNumber",
                        r#type: "tel",
                        placeholder: "Enter your phone number",
                        required: true,
                        value: "{current.phone_number}",
                        oninput: move |evt: Event<FormData>| fields.write().phone_number = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "message", "What You Need Done" }
                    textarea {
                        id: "message",
                        name: "message",
                        rows: 5,
                        placeholder: "Tell us about your project...",
                        required: true,
                        value: "{current.message}",
                        oninput: move |evt: Event<FormData>| fields.write().message = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    span { class: "field-label", "Attachments (Optional)" }
                    label {
                        class: "dropzone",
                        r#for: FILE_INPUT_ID,
                        ondragover: move |evt: Event<DragData>| evt.prevent_default(),
                        ondrop: on_drop_files,
                        p {
                            strong { "Click to upload" }
                            " or drag and drop"
                        }
                        p { class: "dropzone-hint", "Images, videos, or documents" }
                        input {
                            id: FILE_INPUT_ID,
                            class: "visually-hidden",
                            r#type: "file",
                            accept: ACCEPTED_ATTACHMENT_TYPES,
                            multiple: true,
                            disabled: submitting,
                            onchange: on_pick_files,
                        }
                    }
                    AttachmentList {
                        entries,
                        on_remove: move |index: usize| {
                            picker.write().remove(index, &mut BrowserObjectUrls);
                        },
                    }
                }

                StatusBanner { status, on_dismiss }

                button {
                    class: "submit-button",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Sending..." } else { "Send Message" }
                }
            }
        }
    }
}

/// List picked or dropped files right away and read their contents in the
/// background. `handles` are the matching browser `File`s, used for video
/// previews.
fn stage_attachments(files: Vec<FileData>, handles: &[File], mut picker: Signal<AttachmentPicker>) {
    for (index, file) in files.into_iter().enumerate() {
        let key = picker.write().stage(
            file.name(),
            file.content_type().as_deref(),
            handles.get(index),
            &mut BrowserObjectUrls,
        );
        spawn(read_attachment(key, file, picker));
    }
}

async fn read_attachment(key: AttachmentKey, file: FileData, mut picker: Signal<AttachmentPicker>) {
    let name = file.name();
    match file.read_bytes().await {
        Ok(bytes) => {
            let job = picker.write().finish_read(key, bytes);
            if let Some(job) = job {
                let data_uri = job.render();
                picker.write().complete_preview(job.key, data_uri);
            }
        }
        Err(error) => {
            tracing::warn!("Failed to read selected file {}: {}", name, error);
            picker.write().abandon_read(key, &mut BrowserObjectUrls);
        }
    }
}
