use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum AppError {
    #[display(fmt = "{} {} not found", kind, id)]
    NotFound { kind: &'static str, id: u64 },

    /// Actor lacks the role an operation needs
    #[display(fmt = "Forbidden: {}", _0)]
    Forbidden(String),

    /// Malformed input at the console boundary
    #[display(fmt = "Invalid input: {}", _0)]
    InvalidInput(String),
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn student_not_found(id: u64) -> Self {
        AppError::NotFound { kind: "student", id }
    }

    pub fn request_not_found(id: u64) -> Self {
        AppError::NotFound { kind: "request", id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_thing() {
        assert_eq!(AppError::student_not_found(7).to_string(), "student 7 not found");
        assert_eq!(
            AppError::InvalidInput("abc".into()).to_string(),
            "Invalid input: abc"
        );
        assert_eq!(
            AppError::Forbidden("teacher only".into()).to_string(),
            "Forbidden: teacher only"
        );
    }
}
