// src/domain/shared.rs
//
// Value objects used by more than one aggregate. `Email` is the unique
// business key for both authors and users.
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Normalizes to trimmed lower-case before storing.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("Email cannot be empty".into()));
        }
        if !Self::is_well_formed(value.trim()) {
            return Err(DomainError::Validation("Email format is invalid".into()));
        }
        Ok(Self(value.trim().to_lowercase()))
    }

    // local-part '@' domain '.' tld, none of which may contain whitespace or
    // a second '@' (mirror of the usual /^[^\s@]+@[^\s@]+\.[^\s@]+$/ check)
    fn is_well_formed(value: &str) -> bool {
        let mut parts = value.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return false;
        };
        if local.is_empty() || local.chars().any(char::is_whitespace) {
            return false;
        }
        let Some(dot) = domain.rfind('.') else {
            return false;
        };
        let (host, tld) = (&domain[..dot], &domain[dot + 1..]);
        !host.is_empty() && !tld.is_empty() && !domain.chars().any(char::is_whitespace)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}
