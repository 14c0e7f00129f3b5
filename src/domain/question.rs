use serde::{Deserialize, Serialize};

/// A single quiz item.
///
/// Maps one-to-one onto a `questions` row; the wire format of a formatted
/// question is exactly these five fields.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Insert payload for a new question; the id is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}
