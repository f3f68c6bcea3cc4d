// src/domain/author/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(Uuid);

impl AuthorId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid author id '{value}'")))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for AuthorId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

const NAME_PART_MAX: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    first_name: String,
    last_name: String,
}

impl FullName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> DomainResult<Self> {
        let first_name = first_name.into().trim().to_string();
        let last_name = last_name.into().trim().to_string();
        Self::validate_part(&first_name, "First name")?;
        Self::validate_part(&last_name, "Last name")?;
        Ok(Self {
            first_name,
            last_name,
        })
    }

    fn validate_part(part: &str, label: &str) -> DomainResult<()> {
        if part.is_empty() {
            return Err(DomainError::Validation(format!("{label} cannot be empty")));
        }
        if part.chars().count() > NAME_PART_MAX {
            return Err(DomainError::Validation(format!(
                "{label} cannot exceed {NAME_PART_MAX} characters"
            )));
        }
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
