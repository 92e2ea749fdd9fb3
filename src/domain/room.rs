use chrono::{DateTime, Utc};
use serde_json::Value;

use super::RoomId;

const MAX_SLUG_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub slug: String,
    pub is_public: bool,
    pub configuration: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Returns `None` when the name yields an empty slug.
    pub fn new(name: String, is_public: bool, configuration: Option<Value>) -> Option<Self> {
        let slug = slugify(&name)?;
        let now = Utc::now();
        Some(Self {
            id: RoomId::new(),
            name,
            slug,
            is_public,
            configuration: configuration.unwrap_or_else(|| Value::Object(Default::default())),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single `-`.
pub fn slugify(name: &str) -> Option<String> {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.len() > MAX_SLUG_LENGTH {
        slug.truncate(MAX_SLUG_LENGTH);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    if slug.is_empty() { None } else { Some(slug) }
}
