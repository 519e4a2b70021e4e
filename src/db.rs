use sqlx::{SqliteConnection, Connection};
use chrono::Utc;
use crate::error::MatsinkError;
use crate::model::{DecodedFile, HistoryRecord};

// The companion app only renders the head of each recording, so the stored
// payload is capped unconditionally.
const MAX_STORED_SAMPLES: usize = 100;

// Connect to DB and return connection
pub async fn connect_db(dbpath: &str) -> Result<SqliteConnection, MatsinkError> {
    match SqliteConnection::connect(dbpath).await {
        Ok(c) => Ok(c),
        Err(e) => Err(MatsinkError::SQLError(e)),
    }
}

/// Inserts one `history` row carrying the decoded recording and its metadata.
/// The table itself belongs to the companion app and must already exist.
pub async fn save_history(
    dbpath: &str,
    device_id: &str,
    decoded: &DecodedFile,
    sampling_rate: f64,
) -> Result<(), MatsinkError> {

    let mut conn = connect_db(dbpath).await?;

    let now = Utc::now().timestamp();
    let stored = &decoded.samples[..decoded.samples.len().min(MAX_STORED_SAMPLES)];
    let record = HistoryRecord {
        device_id: device_id.to_owned(),
        data_time: now,
        sampling_rate,
        rotation_speed: decoded.speed,
        data: serde_json::to_string(stored)?,
        created_at: now,
    };

    // Release the connection on the failure path as well
    let inserted = insert_history(&mut conn, &record).await;
    conn.close().await?;
    inserted

}

async fn insert_history(
    conn: &mut SqliteConnection,
    record: &HistoryRecord,
) -> Result<(), MatsinkError> {
    sqlx::query(
        "INSERT INTO history (deviceId, dataTime, samplingRate, rotationSpeed, data, createdAt)
         VALUES (?, ?, ?, ?, ?, ?)"
    )
    .bind(&record.device_id)
    .bind(record.data_time)
    .bind(record.sampling_rate)
    .bind(record.rotation_speed)
    .bind(&record.data)
    .bind(record.created_at)
    .execute(conn)
    .await?;
    Ok(())
}
