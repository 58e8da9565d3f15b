use serde::{ Deserialize, Serialize };

/// Hall record from the `halls` table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct Hall {
    #[sqlx(rename = "hall_id")]
    pub id: i64,
    pub number: i64,
}

impl Hall {
    pub fn new(number: i64) -> Self {
        Self { id: 0, number }
    }
}
