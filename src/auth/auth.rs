use crate::auth::directory::StudentIndex;
use crate::error::AppError;
use crate::model::role::Role;
use crate::model::user::Account;

/// The actor behind a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub user_id: u64,
    pub name: String,
    pub role: Role,

    /// Present only for students; points at the exact account that logged in
    pub student: Option<StudentIndex>,
}

impl AuthUser {
    pub fn from_account<A: Account>(account: &A, student: Option<StudentIndex>) -> Self {
        let identity = account.identity();
        Self {
            user_id: identity.id,
            name: identity.name.clone(),
            role: account.role(),
            student,
        }
    }

    pub fn require_teacher(&self) -> Result<(), AppError> {
        if self.role == Role::Teacher {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!("{} is not a teacher", self.name)))
        }
    }

    /// Returns true if the user is a student
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}
