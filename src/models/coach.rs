use serde::{ Deserialize, Serialize };

/// Coach record from the `coaches` table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct Coach {
    #[sqlx(rename = "coach_id")]
    pub id: i64,
    pub name: String,
}

impl Coach {
    pub fn new(name: &str) -> Self {
        Self { id: 0, name: name.to_string() }
    }
}
