use chrono::NaiveDate;
use serde::Serialize;

use crate::model::attendance_request::AttendanceRequest;

#[derive(Debug, Clone, Serialize)]
pub struct PendingApproval {
    pub request: AttendanceRequest,
    pub owner_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub id: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct AttendanceEntry {
    pub date: NaiveDate,
    pub present: bool,
}

impl From<(NaiveDate, bool)> for AttendanceEntry {
    fn from((date, present): (NaiveDate, bool)) -> Self {
        Self { date, present }
    }
}
