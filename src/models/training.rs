use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };

/// Scheduled training from the `trainings` table
///
/// `available_places_num` starts equal to `places_num` when the training is
/// created and is only changed through the repository's increase/reduce calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Training {
    #[sqlx(rename = "training_id")]
    pub id: i64,
    pub coach_id: i64,
    pub hall_id: i64,
    pub name: String,
    pub date_time: DateTime<Utc>,
    pub places_num: i32,
    pub available_places_num: i32,
}

impl Training {
    /// Build a training that has not been persisted yet
    pub fn new(
        coach_id: i64,
        hall_id: i64,
        name: &str,
        date_time: DateTime<Utc>,
        places_num: i32
    ) -> Self {
        Self {
            id: 0,
            coach_id,
            hall_id,
            name: name.to_string(),
            date_time,
            places_num,
            available_places_num: places_num,
        }
    }
}
