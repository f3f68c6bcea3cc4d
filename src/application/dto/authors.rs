use crate::domain::author::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.to_string(),
            first_name: author.full_name.first_name().to_string(),
            last_name: author.full_name.last_name().to_string(),
            full_name: author.full_name.full_name(),
            email: author.email.into(),
            created_at: author.created_at,
            updated_at: author.updated_at,
        }
    }
}
