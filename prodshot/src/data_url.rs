//! Encoded image strings (`data:image/<format>;base64,<payload>`).
//!
//! The upload side turns user-selected files into self-contained encoded
//! strings; the request builder strips the scheme back off to place raw
//! bytes in a request part.

use std::fmt;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};

/// A decoded data URL: MIME type plus raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl DataUrl {
    /// Build from raw bytes and a MIME type.
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Build a PNG data URL, the display form for all generated results.
    #[must_use]
    pub fn png(data: Vec<u8>) -> Self {
        Self::new(data, "image/png")
    }

    /// Parse an encoded image string.
    ///
    /// # Errors
    /// Returns `Error::Parse` when the scheme, MIME type, or base64 payload
    /// is malformed. Only base64-encoded data URLs are accepted.
    pub fn parse(input: &str) -> Result<Self> {
        let rest = input.strip_prefix("data:").ok_or_else(|| Error::Parse {
            message: "not a data URL".into(),
        })?;
        let (meta, payload) = rest.split_once(',').ok_or_else(|| Error::Parse {
            message: "data URL has no payload separator".into(),
        })?;
        let mime_type = meta.strip_suffix(";base64").ok_or_else(|| Error::Parse {
            message: "only base64 data URLs are supported".into(),
        })?;
        if mime_type.is_empty() {
            return Err(Error::Parse {
                message: "data URL has no MIME type".into(),
            });
        }
        let data = STANDARD.decode(payload).map_err(|err| Error::Parse {
            message: format!("invalid base64 payload: {err}"),
        })?;
        Ok(Self {
            mime_type: mime_type.to_string(),
            data,
        })
    }

    /// Read a file and encode it, guessing the MIME type from the path.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(Self { mime_type, data })
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "data:{};base64,{}",
            self.mime_type,
            STANDARD.encode(&self.data)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_png_url() {
        let url = DataUrl::parse("data:image/png;base64,AAEC").unwrap();
        assert_eq!(url.mime_type, "image/png");
        assert_eq!(url.data, vec![0, 1, 2]);
    }

    #[test]
    fn display_roundtrips() {
        let url = DataUrl::new(vec![0, 1, 2], "image/jpeg");
        let rendered = url.to_string();
        assert_eq!(rendered, "data:image/jpeg;base64,AAEC");
        assert_eq!(DataUrl::parse(&rendered).unwrap(), url);
    }

    #[test]
    fn png_constructor_uses_png_prefix() {
        let url = DataUrl::png(vec![1]);
        assert!(url.to_string().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn rejects_missing_scheme() {
        let err = DataUrl::parse("image/png;base64,AAEC").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn rejects_non_base64_encoding() {
        let err = DataUrl::parse("data:image/png,rawbytes").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn rejects_invalid_payload() {
        let err = DataUrl::parse("data:image/png;base64,!!!").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[tokio::test]
    async fn from_file_guesses_mime_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product.png");
        tokio::fs::write(&path, [137u8, 80, 78, 71]).await.unwrap();
        let url = DataUrl::from_file(&path).await.unwrap();
        assert_eq!(url.mime_type, "image/png");
        assert_eq!(url.data, vec![137u8, 80, 78, 71]);
    }

    #[tokio::test]
    async fn from_file_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = DataUrl::from_file(dir.path().join("missing.png")).await;
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
