use chrono::{DateTime, Utc};

/// Write-time clock for audit rows.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
