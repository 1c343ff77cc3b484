//! Supabase Storage / PostgREST client.

use std::fmt;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;

use super::{ObjectUpload, StoreOptions, SubmissionBackend};
use crate::config::{normalize_supabase_url, SiteConfig};
use crate::error::{Error, Result};
use crate::models::SubmissionRecord;
use crate::util::compact_text;

/// HTTP client for the public (anon key) Supabase APIs used by the site.
#[derive(Clone)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    client: Client,
}

impl fmt::Debug for SupabaseClient {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .field("anon_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl SupabaseClient {
    pub fn new(url: impl AsRef<str>, anon_key: impl Into<String>) -> Result<Self> {
        let base_url = normalize_supabase_url(url.as_ref())?;
        let anon_key = anon_key.into().trim().to_string();
        if anon_key.is_empty() {
            return Err(Error::Config(
                "Supabase anon key must not be empty".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            anon_key,
            client: Client::builder().build()?,
        })
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        Self::new(&config.supabase_url, config.supabase_anon_key.clone())
    }

    fn object_path(bucket: &str, key: &str) -> String {
        let key = key
            .trim_matches('/')
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/{key}", urlencoding::encode(bucket))
    }

    fn public_request(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
    }

    fn store_request(&self, upload: &ObjectUpload<'_>, options: StoreOptions) -> RequestBuilder {
        let url = format!(
            "{}/storage/v1/object/{}",
            self.base_url,
            Self::object_path(upload.bucket, upload.key)
        );
        self.public_request(
            self.client
                .post(url)
                .header(
                    "cache-control",
                    format!("max-age={}", options.cache_control_secs),
                )
                .header("x-upsert", if options.upsert { "true" } else { "false" })
                .header(reqwest::header::CONTENT_TYPE, upload.content_type)
                .body(upload.bytes.clone()),
        )
    }

    fn insert_request(&self, table: &str, record: &SubmissionRecord) -> RequestBuilder {
        // PostgREST takes a JSON array of rows.
        self.public_request(
            self.client
                .post(format!("{}/rest/v1/{table}", self.base_url))
                .header("Prefer", "return=minimal")
                .json(std::slice::from_ref(record)),
        )
    }
}

impl SubmissionBackend for SupabaseClient {
    async fn store_object(&self, upload: ObjectUpload<'_>, options: StoreOptions) -> Result<()> {
        let request = self.store_request(&upload, options);

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Storage(format!(
                "upload of {}/{} failed: {}",
                upload.bucket,
                upload.key,
                parse_api_error(status, &body)
            )));
        }
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}",
            self.base_url,
            Self::object_path(bucket, key)
        )
    }

    async fn insert_record(&self, table: &str, record: &SubmissionRecord) -> Result<()> {
        let request = self.insert_request(table, record);

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Database(format!(
                "insert into {table} failed: {}",
                parse_api_error(status, &body)
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SupabaseErrorResponse {
    error: Option<String>,
    message: Option<String>,
    msg: Option<String>,
    details: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<SupabaseErrorResponse>(body) {
        if let Some(message) = payload
            .message
            .or(payload.msg)
            .or(payload.error)
            .or(payload.details)
        {
            return format!("{} ({})", compact_text(&message), status.as_u16());
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use reqwest::{Method, Request};

    use super::*;
    use crate::models::UploadedAttachment;

    fn client() -> SupabaseClient {
        SupabaseClient::new("https://demo.supabase.co/", "anon-key").unwrap()
    }

    fn header<'a>(request: &'a Request, name: &str) -> &'a str {
        request.headers()[name].to_str().unwrap()
    }

    fn body(request: &Request) -> &[u8] {
        request.body().and_then(|body| body.as_bytes()).unwrap()
    }

    #[test]
    fn store_request_never_overwrites() {
        let upload = ObjectUpload {
            bucket: "form-attachments",
            key: "1700000000000-abc123.JPG",
            content_type: "image/jpeg",
            bytes: Bytes::from_static(b"jpeg-bytes"),
        };

        let request = client()
            .store_request(&upload, StoreOptions::default())
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://demo.supabase.co/storage/v1/object/form-attachments/1700000000000-abc123.JPG"
        );
        assert_eq!(header(&request, "x-upsert"), "false");
        assert_eq!(header(&request, "cache-control"), "max-age=3600");
        assert_eq!(header(&request, "content-type"), "image/jpeg");
        assert_eq!(header(&request, "apikey"), "anon-key");
        assert_eq!(header(&request, "authorization"), "Bearer anon-key");
        assert_eq!(body(&request), b"jpeg-bytes");
    }

    #[test]
    fn store_request_follows_options() {
        let upload = ObjectUpload {
            bucket: "quotes",
            key: "a.pdf",
            content_type: "application/pdf",
            bytes: Bytes::new(),
        };
        let options = StoreOptions {
            cache_control_secs: 60,
            upsert: true,
        };

        let request = client().store_request(&upload, options).build().unwrap();

        assert_eq!(header(&request, "x-upsert"), "true");
        assert_eq!(header(&request, "cache-control"), "max-age=60");
    }

    #[test]
    fn insert_request_posts_single_row_array() {
        let record = SubmissionRecord {
            first_name: "Kevin".to_string(),
            phone_number: "403-542-7553".to_string(),
            message: "Deck stain".to_string(),
            attachments: vec![UploadedAttachment::new(
                "https://demo.supabase.co/storage/v1/object/public/form-attachments/1-a.png",
                "deck.png",
                "image/png",
            )
            .unwrap()],
        };

        let request = client()
            .insert_request("form_submissions", &record)
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://demo.supabase.co/rest/v1/form_submissions"
        );
        assert_eq!(header(&request, "prefer"), "return=minimal");
        assert_eq!(header(&request, "content-type"), "application/json");
        assert_eq!(header(&request, "apikey"), "anon-key");
        assert_eq!(header(&request, "authorization"), "Bearer anon-key");

        let rows: serde_json::Value = serde_json::from_slice(body(&request)).unwrap();
        assert_eq!(
            rows,
            serde_json::json!([{
                "first_name": "Kevin",
                "phone_number": "403-542-7553",
                "message": "Deck stain",
                "attachments": [{
                    "url": "https://demo.supabase.co/storage/v1/object/public/form-attachments/1-a.png",
                    "name": "deck.png",
                    "type": "image/png",
                }],
            }])
        );
    }

    #[test]
    fn new_rejects_invalid_configuration() {
        assert!(SupabaseClient::new("demo.supabase.co", "anon").is_err());
        assert!(SupabaseClient::new("https://demo.supabase.co", "  ").is_err());
    }

    #[test]
    fn public_url_points_at_public_object_route() {
        assert_eq!(
            client().public_url("form-attachments", "1700000000000-abc123.png"),
            "https://demo.supabase.co/storage/v1/object/public/form-attachments/1700000000000-abc123.png"
        );
    }

    #[test]
    fn object_path_encodes_segments() {
        assert_eq!(
            SupabaseClient::object_path("form-attachments", "/quotes/my file.pdf"),
            "form-attachments/quotes/my%20file.pdf"
        );
    }

    #[test]
    fn debug_redacts_anon_key() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("anon-key"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn parse_api_error_prefers_message_field() {
        assert_eq!(
            parse_api_error(
                StatusCode::CONFLICT,
                r#"{"statusCode":"409","error":"Duplicate","message":"The resource already exists"}"#
            ),
            "The resource already exists (409)"
        );
        assert_eq!(
            parse_api_error(StatusCode::BAD_GATEWAY, "   "),
            "HTTP 502"
        );
        assert_eq!(
            parse_api_error(StatusCode::BAD_REQUEST, "plain failure"),
            "plain failure (400)"
        );
    }
}
