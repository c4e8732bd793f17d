use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::attendance::AttendanceStatus;

// Request para marcar asistencia
#[derive(Debug, Deserialize)]
pub struct MarkAttendanceRequest {
    pub driver_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}
