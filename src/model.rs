use serde::{Serialize, Deserialize};
use sqlx::FromRow;

// Values extracted from one MAT recording. Intermediate only, never persisted
// as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFile {
    pub samples: Vec<f64>,
    pub speed: i64,
}

// One row of the companion app's `history` table. `data` holds the samples as
// a JSON array string, truncated before insertion.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[sqlx(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub device_id: String,
    pub data_time: i64,
    pub sampling_rate: f64,
    pub rotation_speed: i64,
    pub data: String,
    pub created_at: i64,
}
