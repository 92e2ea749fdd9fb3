use chrono::{DateTime, Utc};

use super::{Language, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub sub: Option<String>,
    pub email: String,
    pub full_name: Option<String>,
    pub language: Language,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, full_name: Option<String>, language: Option<Language>) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            sub: None,
            email,
            full_name,
            language: language.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_sub(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }
}
