use chrono::NaiveDate;
use derive_more::Display;
use serde::Serialize;

/// Queue-assigned handle for a pending request
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceRequest {
    pub id: RequestId,
    pub student_id: u64,
    pub date: NaiveDate,
    pub approved: bool,
}

impl AttendanceRequest {
    pub fn new(id: RequestId, student_id: u64, date: NaiveDate) -> Self {
        Self {
            id,
            student_id,
            date,
            approved: false,
        }
    }
}
