use crate::shared::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
}

impl ContentEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// A single file as returned by the hosting API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub path: String,
    /// Base64 payload, possibly wrapped across several lines
    pub content: String,
}

impl FileContent {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Decodes the base64 payload into UTF-8 text
    ///
    /// # Errors
    /// Returns an error if the payload is not valid base64 or the decoded
    /// bytes are not UTF-8.
    pub fn decode_text(&self) -> Result<String> {
        let compact: String = self
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = STANDARD
            .decode(compact)
            .map_err(|e| anyhow::anyhow!("invalid base64 content: {}", e))?;
        String::from_utf8(bytes).map_err(|e| anyhow::anyhow!("content is not valid UTF-8: {}", e))
    }
}

/// Contents at a repository path: a directory listing or a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryContents {
    Directory(Vec<ContentEntry>),
    File(FileContent),
}
