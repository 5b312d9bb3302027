use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Characters used for note identifiers and edit codes.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of identifiers and edit codes.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// A random string of `len` characters from [`ALPHABET`], drawn from v4 UUID
/// bytes.
pub fn random_code(len: usize) -> String {
    let mut code = String::with_capacity(len);
    while code.len() < len {
        let uuid = Uuid::new_v4();
        for byte in uuid.as_bytes().iter().take(len - code.len()) {
            code.push(ALPHABET[usize::from(*byte) % ALPHABET.len()] as char);
        }
    }
    code
}

/// Whether `code` could have come from [`random_code`].
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| ALPHABET.contains(&b))
}

/// Seconds since the Unix epoch.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// A shared note: markdown content plus the secret needed to change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
    pub edit_code: String,
    pub created_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
}

impl Note {
    pub fn new(id: String, content: impl Into<String>, edit_code: String) -> Self {
        Self {
            id,
            content: content.into(),
            edit_code,
            created_at: unix_now(),
            updated_at: None,
        }
    }

    pub fn accepts(&self, edit_code: &str) -> bool {
        self.edit_code == edit_code
    }

    /// Replaces the content and stamps `updated_at`.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = Some(unix_now());
    }

    /// The content rendered to HTML.
    pub fn html(&self) -> String {
        crate::render::render(&self.content)
    }
}
