//! Integration tests for the repository layer
//!
//! These tests verify that the SQLite implementations correctly interact
//! with the database, including CRUD operations, filters and counts.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use trivia_api::domain::question::NewQuestion;
use trivia_api::domain::repositories::{
    CategoryRepository, QuestionRepository, RepositoryError,
};
use trivia_api::infrastructure::repositories::{
    SqliteCategoryRepository, SqliteQuestionRepository,
};

/// Set up an isolated in-memory database with the schema applied.
///
/// Pinned to a single permanent connection: every new connection to
/// `sqlite::memory:` would otherwise open its own empty database.
async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Seed a pair of categories for questions to reference.
async fn seed_categories(pool: &SqlitePool) {
    sqlx::query("INSERT INTO categories (id, type) VALUES (1, 'Science'), (2, 'History')")
        .execute(pool)
        .await
        .expect("Failed to seed categories");
}

fn new_question(text: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: "42".to_string(),
        category,
        difficulty: 3,
    }
}

#[tokio::test]
async fn test_create_assigns_an_id_and_stores_the_fields() {
    let pool = setup_test_db().await;
    seed_categories(&pool).await;
    let repo = SqliteQuestionRepository::new(pool);

    let created = repo
        .create(new_question("What is the speed of light?", 1))
        .await
        .expect("Failed to create question");

    assert!(created.id > 0);
    assert_eq!(created.question, "What is the speed of light?");
    assert_eq!(created.answer, "42");
    assert_eq!(created.category, 1);
    assert_eq!(created.difficulty, 3);

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to find question")
        .expect("Question should exist");
    assert_eq!(found.question, created.question);
}

#[tokio::test]
async fn test_find_by_id_on_a_missing_row_is_none() {
    let pool = setup_test_db().await;
    let repo = SqliteQuestionRepository::new(pool);

    let found = repo.find_by_id(99).await.expect("Failed to query");

    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_all_is_ordered_by_id() {
    let pool = setup_test_db().await;
    seed_categories(&pool).await;
    let repo = SqliteQuestionRepository::new(pool);

    for text in ["first?", "second?", "third?"] {
        repo.create(new_question(text, 1))
            .await
            .expect("Failed to create question");
    }

    let all = repo.find_all().await.expect("Failed to list questions");

    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_find_by_category_only_returns_that_category() {
    let pool = setup_test_db().await;
    seed_categories(&pool).await;
    let repo = SqliteQuestionRepository::new(pool);

    repo.create(new_question("about atoms?", 1))
        .await
        .expect("Failed to create question");
    repo.create(new_question("about kings?", 2))
        .await
        .expect("Failed to create question");
    repo.create(new_question("about stars?", 1))
        .await
        .expect("Failed to create question");

    let science = repo
        .find_by_category(1)
        .await
        .expect("Failed to list questions");

    assert_eq!(science.len(), 2);
    assert!(science.iter().all(|q| q.category == 1));
}

#[tokio::test]
async fn test_search_matches_substrings_case_insensitively() {
    let pool = setup_test_db().await;
    seed_categories(&pool).await;
    let repo = SqliteQuestionRepository::new(pool);

    repo.create(new_question("Who painted the Mona Lisa?", 2))
        .await
        .expect("Failed to create question");
    repo.create(new_question("Where is the Louvre?", 2))
        .await
        .expect("Failed to create question");

    let hits = repo.search("mona").await.expect("Failed to search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].question, "Who painted the Mona Lisa?");

    let misses = repo.search("sphinx").await.expect("Failed to search");
    assert!(misses.is_empty());
}

#[tokio::test]
async fn test_delete_removes_the_row() {
    let pool = setup_test_db().await;
    seed_categories(&pool).await;
    let repo = SqliteQuestionRepository::new(pool);

    let created = repo
        .create(new_question("temporary?", 1))
        .await
        .expect("Failed to create question");

    repo.delete(created.id).await.expect("Failed to delete");

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to query");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_delete_of_a_missing_row_reports_row_not_found() {
    let pool = setup_test_db().await;
    let repo = SqliteQuestionRepository::new(pool);

    let result = repo.delete(77).await;

    assert!(matches!(result, Err(RepositoryError::RowNotFound(77))));
}

#[tokio::test]
async fn test_counts_track_totals_and_categories() {
    let pool = setup_test_db().await;
    seed_categories(&pool).await;
    let repo = SqliteQuestionRepository::new(pool);

    repo.create(new_question("one?", 1))
        .await
        .expect("Failed to create question");
    repo.create(new_question("two?", 1))
        .await
        .expect("Failed to create question");
    repo.create(new_question("three?", 2))
        .await
        .expect("Failed to create question");

    assert_eq!(repo.count().await.expect("Failed to count"), 3);
    assert_eq!(
        repo.count_by_category(1).await.expect("Failed to count"),
        2
    );
    assert_eq!(
        repo.count_by_category(2).await.expect("Failed to count"),
        1
    );
}

#[tokio::test]
async fn test_category_lookups() {
    let pool = setup_test_db().await;
    seed_categories(&pool).await;
    let repo = SqliteCategoryRepository::new(pool);

    let all = repo.find_all().await.expect("Failed to list categories");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, 1);
    assert_eq!(all[0].kind, "Science");

    let by_id = repo
        .find_by_id(2)
        .await
        .expect("Failed to query")
        .expect("Category should exist");
    assert_eq!(by_id.kind, "History");

    let by_name = repo
        .find_by_name("Science")
        .await
        .expect("Failed to query")
        .expect("Category should exist");
    assert_eq!(by_name.id, 1);

    let missing = repo
        .find_by_name("Cooking")
        .await
        .expect("Failed to query");
    assert!(missing.is_none());
}
