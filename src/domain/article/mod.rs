pub mod entity;
pub mod pagination;
pub mod repository;
pub mod value_objects;

pub use entity::Article;
pub use pagination::{PageResult, PaginationOptions, SortField, SortOrder};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
