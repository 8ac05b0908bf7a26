use chrono::NaiveDate;

use crate::model::attendance_request::{AttendanceRequest, RequestId};

/// Pending attendance requests in arrival order.
///
/// Duplicate `(student, date)` submissions are kept as separate entries.
#[derive(Debug, Default)]
pub struct RequestQueue {
    pending: Vec<AttendanceRequest>,
    next_id: u64,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new unapproved request and returns its id.
    pub fn enqueue(&mut self, student_id: u64, date: NaiveDate) -> RequestId {
        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.pending.push(AttendanceRequest::new(id, student_id, date));
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttendanceRequest> {
        self.pending.iter()
    }

    pub fn get(&self, id: RequestId) -> Option<&AttendanceRequest> {
        self.pending.iter().find(|r| r.id == id)
    }

    pub fn remove(&mut self, id: RequestId) -> Option<AttendanceRequest> {
        let pos = self.pending.iter().position(|r| r.id == id)?;
        Some(self.pending.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
