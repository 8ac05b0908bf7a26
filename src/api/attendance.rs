use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::auth::auth::AuthUser;
use crate::auth::directory::Directory;
use crate::error::AppError;
use crate::model::attendance::AttendanceRecord;
use crate::model::attendance_request::{AttendanceRequest, RequestId};
use crate::model::user::Identity;
use crate::models::{AttendanceEntry, PendingApproval, StudentSummary};
use crate::queue::RequestQueue;

/// Outcome of a single approval decision.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Presence recorded and the request left the queue.
    Approved(AttendanceRequest),
    /// Anything but an approval keeps the request pending.
    LeftPending,
}

/// Request/approval workflow over the directory's students.
#[derive(Debug)]
pub struct AttendanceService {
    directory: Directory,
    queue: RequestQueue,
}

impl AttendanceService {
    pub fn new(seed_teacher: Identity) -> Self {
        Self {
            directory: Directory::with_teacher(seed_teacher),
            queue: RequestQueue::new(),
        }
    }

    #[instrument(name = "login", skip(self, password))]
    pub fn login(&self, id: u64, password: &str) -> Option<AuthUser> {
        let user = self.directory.authenticate(id, password);
        match &user {
            Some(u) => info!(role = %u.role, "Login successful"),
            None => info!("Invalid credentials"),
        }
        user
    }

    pub fn add_student(&mut self, id: u64, name: &str, password: &str) {
        self.directory.add_student(id, name, password);
    }

    /// Queues a request without checking that the student exists or that
    /// the date is already pending or recorded.
    pub fn submit_request(&mut self, student_id: u64, date: NaiveDate) -> RequestId {
        let id = self.queue.enqueue(student_id, date);
        info!(request_id = %id, student_id, %date, "Attendance request submitted");
        id
    }

    /// Pending requests whose owner resolves, in queue order. Orphaned
    /// requests are skipped but stay queued.
    pub fn list_pending_approvals(&self) -> Vec<PendingApproval> {
        self.queue
            .iter()
            .filter_map(|request| match self.directory.find_student(request.student_id) {
                Some(student) => Some(PendingApproval {
                    request: request.clone(),
                    owner_name: student.name().to_string(),
                }),
                None => {
                    warn!(request_id = %request.id, student_id = request.student_id, "Skipping request for unknown student");
                    None
                }
            })
            .collect()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn resolve_approval(
        &mut self,
        request_id: RequestId,
        approve: bool,
    ) -> Result<Resolution, AppError> {
        let request = self
            .queue
            .get(request_id)
            .ok_or_else(|| AppError::request_not_found(request_id.0))?;

        if !approve {
            info!(request_id = %request_id, "Request left pending");
            return Ok(Resolution::LeftPending);
        }

        let student = self
            .directory
            .find_student_mut(request.student_id)
            .ok_or_else(|| AppError::student_not_found(request.student_id))?;
        student.record.record_presence(request.date);

        let mut request = self
            .queue
            .remove(request_id)
            .ok_or_else(|| AppError::request_not_found(request_id.0))?;
        request.approved = true;

        info!(request_id = %request_id, student_id = request.student_id, date = %request.date, "Request approved");
        Ok(Resolution::Approved(request))
    }

    /// `(name, id, percentage)` for every student in registration order.
    pub fn student_summary(&self) -> Vec<StudentSummary> {
        self.directory
            .students()
            .map(|s| StudentSummary {
                name: s.name().to_string(),
                id: s.id(),
                percentage: s.record.percentage(),
            })
            .collect()
    }

    /// The record owned by the student who logged in, even when another
    /// student shares the same id.
    pub fn record_of(&self, user: &AuthUser) -> Option<&AttendanceRecord> {
        user.student
            .and_then(|index| self.directory.student_at(index))
            .map(|s| &s.record)
    }

    pub fn record_detail(&self, student_id: u64) -> Option<impl Iterator<Item = AttendanceEntry> + '_> {
        self.directory
            .find_student(student_id)
            .map(|s| s.record.detail().map(AttendanceEntry::from))
    }
}
