//! Repository contents payload and transport decoding

use crate::error::DependabotError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

/// Body of a `GET /repos/{owner}/{repo}/contents/{path}` response
///
/// Only file responses carry `content`; directory listings and other shapes
/// land in `Other`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentPayload {
    /// A single file
    File(FileContent),
    /// Anything without a string `content` field
    Other(serde_json::Value),
}

/// Encoded file content
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileContent {
    /// Encoded content (base64 wrapped at 60 columns by GitHub)
    pub content: String,
    /// Declared encoding, `base64` for regular files
    #[serde(default)]
    pub encoding: Option<String>,
}

impl FileContent {
    /// Wrap plain text as a base64 file payload
    pub fn from_text(text: &str) -> Self {
        Self {
            content: STANDARD.encode(text.as_bytes()),
            encoding: Some("base64".to_string()),
        }
    }

    /// Decode the transport encoding to UTF-8 text
    pub fn decode(&self) -> Result<String, DependabotError> {
        match self.encoding.as_deref() {
            None | Some("base64") => {}
            Some(other) => {
                return Err(DependabotError::UnsupportedEncoding {
                    encoding: other.to_string(),
                })
            }
        }

        let compact: String = self
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| DependabotError::Decode {
                message: e.to_string(),
            })?;
        String::from_utf8(bytes).map_err(|e| DependabotError::Decode {
            message: e.to_string(),
        })
    }
}

impl ContentPayload {
    /// The file content, or `InvalidContent` for non-file responses
    pub fn into_file(self) -> Result<FileContent, DependabotError> {
        match self {
            ContentPayload::File(file) => Ok(file),
            ContentPayload::Other(_) => Err(DependabotError::InvalidContent),
        }
    }
}
