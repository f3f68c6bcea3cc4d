// src/application/commands/authors/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::author::AuthorRepository};

pub struct AuthorCommandHandlers {
    pub(super) authors: Arc<dyn AuthorRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AuthorCommandHandlers {
    pub fn new(authors: Arc<dyn AuthorRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { authors, clock }
    }
}
