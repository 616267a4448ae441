//! Image Encoding
//!
//! Uploaded images travel inside the JSON body as `data:` URLs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode file bytes as a `data:<mime>;base64,...` URL.
///
/// The declared MIME type (from the browser `File`) wins; otherwise the
/// type is sniffed from the bytes.
pub fn encode_data_url(bytes: &[u8], declared_mime: Option<&str>) -> String {
    let mime = declared_mime
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .or_else(|| infer::get(bytes).map(|t| t.mime_type()))
        .unwrap_or(FALLBACK_MIME);

    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// MIME type of a data URL, if it is one
pub fn data_url_mime(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("data:")?;
    let (meta, _) = rest.split_once(',')?;
    let mime = meta.split(';').next().unwrap_or_default();
    if mime.is_empty() {
        None
    } else {
        Some(mime)
    }
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Sniff whether raw bytes are an image
pub fn is_image_bytes(bytes: &[u8]) -> bool {
    infer::is_image(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_declared_mime_wins() {
        let url = encode_data_url(b"abc", Some("image/webp"));
        assert_eq!(url, "data:image/webp;base64,YWJj");
    }

    #[test]
    fn test_sniffed_mime() {
        let url = encode_data_url(&PNG_HEADER, None);
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(data_url_mime(&url), Some("image/png"));
        assert!(is_image_bytes(&PNG_HEADER));
    }

    #[test]
    fn test_unknown_bytes() {
        let url = encode_data_url(b"plain text", Some("  "));
        assert_eq!(data_url_mime(&url), Some(FALLBACK_MIME));
        assert!(!is_image_bytes(b"plain text"));
    }

    #[test]
    fn test_non_data_urls() {
        assert_eq!(data_url_mime("https://cdn.example/a.png"), None);
        assert_eq!(data_url_mime("data:,hello"), None);
        assert!(is_image_mime("IMAGE/JPEG"));
        assert!(!is_image_mime("text/plain"));
    }
}
