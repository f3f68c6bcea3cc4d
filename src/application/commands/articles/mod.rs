// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod publish;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use publish::{PublishArticleCommand, UnpublishArticleCommand};
pub use service::ArticleCommandHandlers;
pub use update::UpdateArticleCommand;
