// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod sqlite_category_repository;
pub mod sqlite_question_repository;

pub use sqlite_category_repository::SqliteCategoryRepository;
pub use sqlite_question_repository::SqliteQuestionRepository;
