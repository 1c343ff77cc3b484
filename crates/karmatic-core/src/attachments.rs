//! Attachment picker for the contact form.
//!
//! Entries are stored as a single list of `{ key, name, bytes, preview }` so
//! the file list and the preview list can never drift out of alignment. A
//! picked file is listed at once through [`AttachmentPicker::stage`], before
//! its contents are read. The host later hands the bytes over with
//! [`AttachmentPicker::finish_read`], which returns a [`PreviewJob`] for
//! images; the rendered preview comes back through
//! [`AttachmentPicker::complete_preview`]. Everything is addressed by a stable
//! [`AttachmentKey`] rather than by position, so results for an entry that was
//! removed in the meantime are ignored.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use bytes::Bytes;

/// Value for the file input's `accept` attribute.
pub const ACCEPTED_ATTACHMENT_TYPES: &str = "image/*,video/*,.pdf,.doc,.docx";

/// Images above this size are listed without an inline preview.
pub const MAX_IMAGE_PREVIEW_BYTES: usize = 8 * 1024 * 1024;

const MIB_BYTES: f64 = 1024.0 * 1024.0;

/// Stable identifier of a picker entry, unique for the picker's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentKey(u64);

impl fmt::Display for AttachmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attachment-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Video,
    File,
}

impl AttachmentKind {
    pub fn from_mime_type(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            Self::Image
        } else if mime_type.starts_with("video/") {
            Self::Video
        } else {
            Self::File
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::File => "file",
        }
    }
}

/// A file chosen by the visitor, fully read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name.
    pub name: String,
    /// Content MIME type (reported by the browser or inferred from the name).
    pub mime_type: String,
    /// File contents.
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: Option<&str>, bytes: impl Into<Bytes>) -> Self {
        let name = name.into();
        let mime_type = infer_attachment_mime_type(content_type, &name);
        Self {
            name,
            mime_type,
            bytes: bytes.into(),
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn kind(&self) -> AttachmentKind {
        AttachmentKind::from_mime_type(&self.mime_type)
    }
}

/// Locally renderable representation of an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preview {
    #[default]
    None,
    /// Image preview is being produced.
    Pending,
    ImageDataUri(String),
    VideoObjectUrl(String),
}

impl Preview {
    /// Source usable in an `img`/`video` element, if any.
    pub fn source(&self) -> Option<&str> {
        match self {
            Self::ImageDataUri(uri) => Some(uri),
            Self::VideoObjectUrl(url) => Some(url),
            Self::None | Self::Pending => None,
        }
    }
}

/// Host capability for transient object URLs (video previews).
pub trait ObjectUrls {
    /// Host handle a URL is created from, e.g. the browser's `File`.
    type Source: ?Sized;

    /// Create a transient URL referencing the source's contents.
    fn create(&mut self, source: &Self::Source) -> Option<String>;

    /// Release a URL created by [`ObjectUrls::create`].
    fn revoke(&mut self, url: &str);
}

/// Image preview work handed to the host.
#[derive(Debug, Clone)]
pub struct PreviewJob {
    pub key: AttachmentKey,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl PreviewJob {
    /// Encode the image as a data URI, or `None` when it is too large.
    pub fn render(&self) -> Option<String> {
        encode_image_preview(&self.mime_type, &self.bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentEntry {
    pub key: AttachmentKey,
    pub name: String,
    pub mime_type: String,
    /// File contents, `None` while the host is still reading them.
    pub bytes: Option<Bytes>,
    pub preview: Preview,
}

impl AttachmentEntry {
    pub fn kind(&self) -> AttachmentKind {
        AttachmentKind::from_mime_type(&self.mime_type)
    }

    pub const fn is_reading(&self) -> bool {
        self.bytes.is_none()
    }

    pub fn size_bytes(&self) -> Option<usize> {
        self.bytes.as_ref().map(Bytes::len)
    }

    /// The entry as an uploadable file, once its contents are in.
    pub fn file(&self) -> Option<SelectedFile> {
        self.bytes.as_ref().map(|bytes| SelectedFile {
            name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            bytes: bytes.clone(),
        })
    }
}

/// Ordered list of selected attachments with their previews.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttachmentPicker {
    entries: Vec<AttachmentEntry>,
    next_key: u64,
}

impl AttachmentPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// List a picked file before its contents are read.
    ///
    /// Images get a pending preview, videos get an object URL created from
    /// `source` right away, other files get no preview.
    pub fn stage<U: ObjectUrls>(
        &mut self,
        name: impl Into<String>,
        content_type: Option<&str>,
        source: Option<&U::Source>,
        urls: &mut U,
    ) -> AttachmentKey {
        let name = name.into();
        let mime_type = infer_attachment_mime_type(content_type, &name);
        let key = AttachmentKey(self.next_key);
        self.next_key += 1;

        let preview = match AttachmentKind::from_mime_type(&mime_type) {
            AttachmentKind::Image => Preview::Pending,
            AttachmentKind::Video => source
                .and_then(|source| urls.create(source))
                .map_or(Preview::None, Preview::VideoObjectUrl),
            AttachmentKind::File => Preview::None,
        };

        tracing::debug!(%key, %name, %mime_type, "Attachment selected");
        self.entries.push(AttachmentEntry {
            key,
            name,
            mime_type,
            bytes: None,
            preview,
        });
        key
    }

    /// Store the contents read for `key`.
    ///
    /// Returns the preview job for an image still waiting on its preview.
    /// Contents for a removed entry are dropped.
    pub fn finish_read(&mut self, key: AttachmentKey, bytes: impl Into<Bytes>) -> Option<PreviewJob> {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) else {
            tracing::debug!(%key, "Discarding contents of removed attachment");
            return None;
        };
        if !entry.is_reading() {
            return None;
        }

        let bytes = bytes.into();
        entry.bytes = Some(bytes.clone());

        (entry.kind() == AttachmentKind::Image && entry.preview == Preview::Pending).then(|| {
            PreviewJob {
                key,
                mime_type: entry.mime_type.clone(),
                bytes,
            }
        })
    }

    /// Drop an entry whose contents could not be read.
    pub fn abandon_read(&mut self, key: AttachmentKey, urls: &mut impl ObjectUrls) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.key == key && entry.is_reading())
        else {
            return false;
        };

        self.remove(index, urls).is_some()
    }

    /// Apply a finished image preview. Returns `false` when the entry is gone
    /// or no longer waiting for a preview.
    pub fn complete_preview(&mut self, key: AttachmentKey, data_uri: Option<String>) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) else {
            tracing::debug!(%key, "Discarding preview for removed attachment");
            return false;
        };
        if entry.preview != Preview::Pending {
            return false;
        }

        entry.preview = data_uri.map_or(Preview::None, Preview::ImageDataUri);
        true
    }

    /// Remove the entry at `index`, releasing its transient URL.
    pub fn remove(&mut self, index: usize, urls: &mut impl ObjectUrls) -> Option<AttachmentEntry> {
        if index >= self.entries.len() {
            return None;
        }

        let entry = self.entries.remove(index);
        release_preview(&entry.preview, urls);
        Some(entry)
    }

    /// Remove every entry, releasing all transient URLs.
    pub fn clear(&mut self, urls: &mut impl ObjectUrls) {
        for entry in self.entries.drain(..) {
            release_preview(&entry.preview, urls);
        }
    }

    pub fn entries(&self) -> &[AttachmentEntry] {
        &self.entries
    }

    /// Number of entries whose contents are still being read.
    pub fn pending_reads(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_reading()).count()
    }

    /// Every selected file in order, or `None` while any read is outstanding.
    pub fn snapshot(&self) -> Option<Vec<SelectedFile>> {
        self.entries.iter().map(AttachmentEntry::file).collect()
    }

    pub fn previews(&self) -> impl Iterator<Item = &Preview> {
        self.entries.iter().map(|entry| &entry.preview)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn release_preview(preview: &Preview, urls: &mut impl ObjectUrls) {
    if let Preview::VideoObjectUrl(url) = preview {
        urls.revoke(url);
    }
}

/// Encode image bytes as a `data:` URI for inline display.
pub fn encode_image_preview(mime_type: &str, bytes: &[u8]) -> Option<String> {
    if bytes.len() > MAX_IMAGE_PREVIEW_BYTES {
        return None;
    }

    let encoded = BASE64_STANDARD.encode(bytes);
    Some(format!("data:{mime_type};base64,{encoded}"))
}

/// Resolve a MIME type from the browser-reported content type, falling back
/// to the file extension when the reported type is missing or generic.
pub fn infer_attachment_mime_type(content_type: Option<&str>, file_name: &str) -> String {
    let extension_guess = mime_guess::from_path(file_name)
        .first_raw()
        .map(str::to_string);

    if let Some(content_type) = content_type {
        let trimmed = content_type.trim();
        if !trimmed.is_empty() {
            let normalized = trimmed.to_ascii_lowercase();

            if normalized != "application/octet-stream"
                && !(normalized.starts_with("text/")
                    && extension_guess.as_deref().is_some_and(is_media_mime_type))
            {
                return trimmed.to_string();
            }
        }
    }

    extension_guess.unwrap_or_else(|| {
        mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    })
}

fn is_media_mime_type(mime_type: &str) -> bool {
    mime_type.starts_with("image/") || mime_type.starts_with("video/")
}

/// Human readable size in megabytes with two decimals, e.g. `1.50 MB`.
#[allow(clippy::cast_precision_loss)]
pub fn format_size_mb(size_bytes: usize) -> String {
    format!("{:.2} MB", size_bytes as f64 / MIB_BYTES)
}
