mod articles;

pub use articles::{ArticleRestPresenter, presented};
