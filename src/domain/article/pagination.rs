// src/domain/article/pagination.rs
use crate::domain::author::AuthorId;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

pub const MIN_PAGE: u32 = 1;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value.to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(DomainError::Validation(format!(
                "sortOrder must be ASC or DESC, got '{other}'"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Title,
    PublishedAt,
}

impl SortField {
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            "title" => Ok(Self::Title),
            "publishedAt" => Ok(Self::PublishedAt),
            other => Err(DomainError::Validation(format!(
                "sortBy must be one of createdAt, updatedAt, title, publishedAt, got '{other}'"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::Title => "title",
            Self::PublishedAt => "publishedAt",
        }
    }
}

/// Validated listing options. Construction rejects out-of-range page/limit,
/// so every instance maps to a well-formed query and cache key.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationOptions {
    pub page: u32,
    pub limit: u32,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub search: Option<String>,
    pub author_id: Option<AuthorId>,
    pub published: Option<bool>,
}

impl PaginationOptions {
    pub fn new(page: u32, limit: u32) -> DomainResult<Self> {
        if page < MIN_PAGE {
            return Err(DomainError::Validation(format!(
                "page must be at least {MIN_PAGE}"
            )));
        }
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(DomainError::Validation(format!(
                "limit must be between {MIN_LIMIT} and {MAX_LIMIT}"
            )));
        }
        Ok(Self {
            page,
            limit,
            sort_by: SortField::CreatedAt,
            sort_order: SortOrder::Desc,
            search: None,
            author_id: None,
            published: None,
        })
    }

    pub fn with_sort(mut self, sort_by: SortField, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_author(mut self, author_id: AuthorId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// One page of results plus the total row count, so clients can derive the
/// page count themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> PageResult<T> {
    pub fn new(data: Vec<T>, total: u64, options: &PaginationOptions) -> Self {
        Self {
            data,
            total,
            page: options.page,
            limit: options.limit,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}
