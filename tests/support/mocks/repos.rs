// tests/support/mocks/repos.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use inkpress::domain::article::{
    Article, ArticleId, ArticleRepository, PageResult, PaginationOptions, SortField, SortOrder,
};
use inkpress::domain::author::{Author, AuthorId, AuthorRepository};
use inkpress::domain::errors::{DomainError, DomainResult};
use inkpress::domain::otp::{Otp, OtpCode, OtpRepository};
use inkpress::domain::shared::Email;
use inkpress::domain::user::{User, UserId, UserRepository};

/* -------------------------------- ArticleRepository -------------------------------- */

/// In-memory article store that also counts repository hits, so cache tests
/// can tell a cache hit from a recomputation.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
    pub find_all_calls: AtomicUsize,
    pub find_page_calls: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, article: Article) {
        self.articles.lock().unwrap().push(article);
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    pub fn get(&self, id: ArticleId) -> Option<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    fn matches(article: &Article, options: &PaginationOptions) -> bool {
        if let Some(published) = options.published {
            if article.is_published != published {
                return false;
            }
        }
        if let Some(author_id) = options.author_id {
            if article.author.id != author_id {
                return false;
            }
        }
        if let Some(search) = options.search.as_deref() {
            let needle = search.to_lowercase();
            let hit = article.title.as_str().to_lowercase().contains(&needle)
                || article.content.as_str().to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn save(&self, article: &Article) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if let Some(existing) = articles.iter_mut().find(|a| a.id == article.id) {
            *existing = article.clone();
        } else {
            articles.push(article.clone());
        }
        Ok(article.clone())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        let mut articles = self.articles.lock().unwrap().clone();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }

    async fn find_page(&self, options: &PaginationOptions) -> DomainResult<PageResult<Article>> {
        self.find_page_calls.fetch_add(1, Ordering::SeqCst);
        let mut matching: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| Self::matches(a, options))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            let ordering = match options.sort_by {
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                SortField::Title => a.title.as_str().cmp(b.title.as_str()),
                SortField::PublishedAt => a.published_at.cmp(&b.published_at),
            };
            match options.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = matching.len() as u64;
        let page: Vec<Article> = matching
            .into_iter()
            .skip(options.offset() as usize)
            .take(options.limit as usize)
            .collect();

        Ok(PageResult::new(page, total, options))
    }

    async fn find_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<Article>> {
        let mut articles: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.author.id == author_id)
            .cloned()
            .collect();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

/* -------------------------------- AuthorRepository -------------------------------- */

#[derive(Default)]
pub struct InMemoryAuthorRepo {
    authors: Mutex<Vec<Author>>,
}

impl InMemoryAuthorRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, author: Author) {
        self.authors.lock().unwrap().push(author);
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepo {
    async fn save(&self, author: &Author) -> DomainResult<Author> {
        let mut authors = self.authors.lock().unwrap();
        if authors
            .iter()
            .any(|a| a.email == author.email && a.id != author.id)
        {
            return Err(DomainError::Conflict("author email already exists".into()));
        }
        if let Some(existing) = authors.iter_mut().find(|a| a.id == author.id) {
            *existing = author.clone();
        } else {
            authors.push(author.clone());
        }
        Ok(author.clone())
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        Ok(self
            .authors
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Author>> {
        Ok(self
            .authors
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == *email)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Author>> {
        Ok(self.authors.lock().unwrap().clone())
    }
}

/* -------------------------------- UserRepository -------------------------------- */

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn save(&self, user: &User) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(DomainError::Conflict("user email already exists".into()));
        }
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }
}

/* -------------------------------- OtpRepository -------------------------------- */

/// Mirrors the Redis layout: one outstanding code per user.
#[derive(Default)]
pub struct InMemoryOtpRepo {
    otps: Mutex<HashMap<UserId, Otp>>,
}

impl InMemoryOtpRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_for(&self, user_id: UserId) -> Option<Otp> {
        self.otps.lock().unwrap().get(&user_id).cloned()
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtpRepo {
    async fn save(&self, otp: &Otp) -> DomainResult<()> {
        self.otps.lock().unwrap().insert(otp.user_id, otp.clone());
        Ok(())
    }

    async fn find_by_user_and_code(
        &self,
        user_id: UserId,
        code: &OtpCode,
    ) -> DomainResult<Option<Otp>> {
        Ok(self
            .otps
            .lock()
            .unwrap()
            .get(&user_id)
            .filter(|otp| otp.code == *code)
            .cloned())
    }
}
