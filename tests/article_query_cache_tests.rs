// tests/article_query_cache_tests.rs
mod support;

use std::sync::atomic::Ordering;

use inkpress::application::commands::articles::DeleteArticleCommand;
use inkpress::application::dto::ArticleListDto;
use inkpress::application::ports::cache::generate_key;
use inkpress::application::queries::articles::{
    GetAllArticlesQuery, GetArticleQuery, GetArticlesByAuthorQuery,
};
use inkpress::domain::article::{PaginationOptions, SortField, SortOrder};
use support::ArticleFixture;
use support::mocks::presenters::{Presented, RecordingPresenter};

fn options(page: u32, limit: u32) -> PaginationOptions {
    PaginationOptions::new(page, limit).unwrap()
}

#[test]
fn cache_key_ignores_parameter_order() {
    let a = generate_key(
        "articles",
        &[("page", Some("1".into())), ("limit", Some("10".into()))],
    );
    let b = generate_key(
        "articles",
        &[("limit", Some("10".into())), ("page", Some("1".into()))],
    );
    assert_eq!(a, b);
}

#[test]
fn equal_option_sets_share_one_cache_key() {
    use inkpress::application::queries::articles::ArticleQueryHandlers;

    let plain = options(1, 10);
    let decorated = options(1, 10).with_sort(SortField::CreatedAt, SortOrder::Desc);
    assert_eq!(
        ArticleQueryHandlers::cache_key(&plain),
        ArticleQueryHandlers::cache_key(&decorated)
    );

    let searched = options(1, 10).with_search("rust");
    assert_ne!(
        ArticleQueryHandlers::cache_key(&plain),
        ArticleQueryHandlers::cache_key(&searched)
    );
}

#[tokio::test]
async fn paginated_listing_hits_the_cache_on_the_second_call() {
    let fixture = ArticleFixture::new();
    let author = fixture.seed_author("Ada", "Lovelace", "ada@example.com");
    fixture.seed_article(&author, "First", "Content one");
    fixture.seed_article(&author, "Second", "Content two");

    let presenter = RecordingPresenter::new();
    fixture
        .queries
        .get_all_articles(
            GetAllArticlesQuery {
                options: Some(options(1, 10)),
            },
            &presenter,
        )
        .await;

    let first = match presenter.expect_list() {
        ArticleListDto::Paginated(page) => page,
        other => panic!("expected paginated payload, got {other:?}"),
    };
    assert_eq!(first.total, 2);
    assert_eq!(fixture.articles.find_page_calls.load(Ordering::SeqCst), 1);

    let presenter = RecordingPresenter::new();
    fixture
        .queries
        .get_all_articles(
            GetAllArticlesQuery {
                options: Some(options(1, 10)),
            },
            &presenter,
        )
        .await;

    let second = match presenter.expect_list() {
        ArticleListDto::Paginated(page) => page,
        other => panic!("expected paginated payload, got {other:?}"),
    };
    assert_eq!(second.total, 2);
    assert_eq!(second.data.len(), first.data.len());
    // served from cache, not recomputed
    assert_eq!(fixture.articles.find_page_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn different_pages_do_not_share_cache_entries() {
    let fixture = ArticleFixture::new();
    let author = fixture.seed_author("Ada", "Lovelace", "ada@example.com");
    for i in 0..3 {
        fixture.seed_article(&author, &format!("Article {i}"), "body");
    }

    for page in [1, 2] {
        let presenter = RecordingPresenter::new();
        fixture
            .queries
            .get_all_articles(
                GetAllArticlesQuery {
                    options: Some(options(page, 2)),
                },
                &presenter,
            )
            .await;
        presenter.expect_list();
    }

    assert_eq!(fixture.articles.find_page_calls.load(Ordering::SeqCst), 2);
    assert_eq!(fixture.cache.len(), 2);
}

#[tokio::test]
async fn legacy_listing_without_options_bypasses_the_cache() {
    let fixture = ArticleFixture::new();
    let author = fixture.seed_author("Ada", "Lovelace", "ada@example.com");
    fixture.seed_article(&author, "Only", "Content");

    for _ in 0..2 {
        let presenter = RecordingPresenter::new();
        fixture
            .queries
            .get_all_articles(GetAllArticlesQuery { options: None }, &presenter)
            .await;
        match presenter.expect_list() {
            ArticleListDto::Full(articles) => assert_eq!(articles.len(), 1),
            other => panic!("expected full payload, got {other:?}"),
        }
    }

    // both calls went to the repository and nothing was cached
    assert_eq!(fixture.articles.find_all_calls.load(Ordering::SeqCst), 2);
    assert_eq!(fixture.cache.len(), 0);
}

#[tokio::test]
async fn deleting_an_article_invalidates_the_paginated_cache() {
    let fixture = ArticleFixture::new();
    let author = fixture.seed_author("Ada", "Lovelace", "ada@example.com");
    let article = fixture.seed_article(&author, "Doomed", "Content");

    let presenter = RecordingPresenter::new();
    fixture
        .queries
        .get_all_articles(
            GetAllArticlesQuery {
                options: Some(options(1, 10)),
            },
            &presenter,
        )
        .await;
    presenter.expect_list();
    assert_eq!(fixture.articles.find_page_calls.load(Ordering::SeqCst), 1);

    let presenter = RecordingPresenter::new();
    fixture
        .commands
        .delete_article(
            DeleteArticleCommand {
                id: article.id.to_string(),
            },
            &presenter,
        )
        .await;
    presenter.expect_deleted();

    let presenter = RecordingPresenter::new();
    fixture
        .queries
        .get_all_articles(
            GetAllArticlesQuery {
                options: Some(options(1, 10)),
            },
            &presenter,
        )
        .await;
    let page = match presenter.expect_list() {
        ArticleListDto::Paginated(page) => page,
        other => panic!("expected paginated payload, got {other:?}"),
    };

    // recomputed from the repository rather than served stale
    assert_eq!(fixture.articles.find_page_calls.load(Ordering::SeqCst), 2);
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn filters_are_applied_by_the_paginated_query() {
    let fixture = ArticleFixture::new();
    let ada = fixture.seed_author("Ada", "Lovelace", "ada@example.com");
    let grace = fixture.seed_author("Grace", "Hopper", "grace@example.com");
    fixture.seed_article(&ada, "Engines", "analytical notes");
    fixture.seed_article(&grace, "Compilers", "flow-matic notes");

    let presenter = RecordingPresenter::new();
    fixture
        .queries
        .get_all_articles(
            GetAllArticlesQuery {
                options: Some(options(1, 10).with_author(ada.id)),
            },
            &presenter,
        )
        .await;

    let page = match presenter.expect_list() {
        ArticleListDto::Paginated(page) => page,
        other => panic!("expected paginated payload, got {other:?}"),
    };
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].title, "Engines");
}

#[tokio::test]
async fn get_article_returns_not_found_for_unknown_id() {
    let fixture = ArticleFixture::new();

    let presenter = RecordingPresenter::new();
    fixture
        .queries
        .get_article(
            GetArticleQuery {
                id: uuid::Uuid::new_v4().to_string(),
            },
            &presenter,
        )
        .await;

    assert_eq!(presenter.expect_not_found(), "Article not found");
}

#[tokio::test]
async fn listing_by_author_is_scoped_and_uncached() {
    let fixture = ArticleFixture::new();
    let ada = fixture.seed_author("Ada", "Lovelace", "ada@example.com");
    let grace = fixture.seed_author("Grace", "Hopper", "grace@example.com");
    fixture.seed_article(&ada, "Engines", "notes");
    fixture.seed_article(&grace, "Compilers", "notes");

    let presenter = RecordingPresenter::new();
    fixture
        .queries
        .get_articles_by_author(
            GetArticlesByAuthorQuery {
                author_id: ada.id.to_string(),
            },
            &presenter,
        )
        .await;

    match presenter.outcome() {
        Presented::Articles(articles) => {
            assert_eq!(articles.len(), 1);
            assert_eq!(articles[0].author_name, "Ada Lovelace");
        }
        other => panic!("expected author-scoped list, got {other:?}"),
    }
    assert_eq!(fixture.cache.len(), 0);
}
