use serde::Serialize;

/// A named grouping of questions.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    /// Display name; the schema calls the column `type`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}
