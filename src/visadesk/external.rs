//! Ports to the external collaborators: the mail delivery provider, the
//! AI answer provider, and the image bucket. Each call is a single
//! best-effort request; callers decide whether a failure is fatal (FAQ) or
//! merely a warning (contact notification). The real providers live outside
//! this crate — these traits are the seam, and the bundled implementations
//! are the unconfigured fallbacks.

use crate::error::{Result, VisadeskError};

/// Payload for the operator notification sent on a contact-form submission.
#[derive(Debug, Clone)]
pub struct ContactNotice {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub trait Mailer {
    fn send(&self, notice: &ContactNotice) -> Result<()>;
}

/// Used when no delivery provider is wired up.
pub struct NoopMailer;

impl Mailer for NoopMailer {
    fn send(&self, _notice: &ContactNotice) -> Result<()> {
        Err(VisadeskError::Api(
            "No mail provider is configured; notification was not sent".to_string(),
        ))
    }
}

pub trait FaqAssistant {
    fn answer(&self, question: &str) -> Result<String>;
}

pub struct UnconfiguredAssistant;

impl FaqAssistant for UnconfiguredAssistant {
    fn answer(&self, _question: &str) -> Result<String> {
        Err(VisadeskError::Api(
            "No AI provider is configured".to_string(),
        ))
    }
}

pub trait ImageHost {
    /// Upload a data URI, returning the hosted URL.
    fn host(&self, data_uri: &str, name_hint: &str) -> Result<String>;
}

/// Fallback when no bucket is configured: the data URI is stored inline,
/// unchanged.
pub struct InlineImageHost;

impl ImageHost for InlineImageHost {
    fn host(&self, data_uri: &str, _name_hint: &str) -> Result<String> {
        Ok(data_uri.to_string())
    }
}

/// Run an image reference through the host. Plain URLs pass through; data
/// URIs are offered for upload, and an upload failure falls back to the
/// original URI rather than failing the surrounding operation.
pub fn resolve_image(host: &dyn ImageHost, image: &str, name_hint: &str) -> String {
    if !image.starts_with("data:") {
        return image.to_string();
    }
    match host.host(image, name_hint) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Warning: image upload failed ({}); keeping inline data", e);
            image.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHost;

    impl ImageHost for FixedHost {
        fn host(&self, _data_uri: &str, name_hint: &str) -> Result<String> {
            Ok(format!("https://img.example/{}", name_hint))
        }
    }

    #[test]
    fn plain_urls_bypass_the_host() {
        let url = resolve_image(&FixedHost, "https://cdn.example/a.png", "hero");
        assert_eq!(url, "https://cdn.example/a.png");
    }

    #[test]
    fn data_uris_are_uploaded() {
        let url = resolve_image(&FixedHost, "data:image/png;base64,AAAA", "hero");
        assert_eq!(url, "https://img.example/hero");
    }

    #[test]
    fn inline_fallback_returns_uri_unchanged() {
        let url = resolve_image(&InlineImageHost, "data:image/png;base64,AAAA", "hero");
        assert_eq!(url, "data:image/png;base64,AAAA");
    }
}
