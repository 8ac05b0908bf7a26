use tracing::{debug, info, warn};

use crate::auth::auth::AuthUser;
use crate::model::user::{Identity, Student, Teacher};

/// Position of a student in registration order. Students are never
/// removed, so an index stays valid for the directory's lifetime.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StudentIndex(usize);

/// Registry of every student and teacher.
///
/// Students are kept in registration order. Id uniqueness across the two
/// groups is not enforced; a collision is only logged.
#[derive(Debug, Default)]
pub struct Directory {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
}

impl Directory {
    /// A directory holding only the seeded teacher.
    pub fn with_teacher(seed: Identity) -> Self {
        Self {
            students: Vec::new(),
            teachers: vec![Teacher::new(seed)],
        }
    }

    pub fn add_student(&mut self, id: u64, name: &str, password: &str) {
        if self.id_taken(id) {
            warn!(id, "Student id already in use; adding anyway");
        }

        self.students.push(Student::new(Identity::new(id, name, password)));
        info!(id, name, "Student added");
    }

    pub fn find_student(&self, id: u64) -> Option<&Student> {
        let found = self.students.iter().find(|s| s.id() == id);
        debug!(id, found = found.is_some(), "Student lookup");
        found
    }

    pub fn find_student_mut(&mut self, id: u64) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id() == id)
    }

    /// Teachers are checked before students, first exact match wins.
    pub fn authenticate(&self, id: u64, password: &str) -> Option<AuthUser> {
        if let Some(teacher) = self.teachers.iter().find(|t| t.identity.matches(id, password)) {
            return Some(AuthUser::from_account(teacher, None));
        }

        self.students
            .iter()
            .enumerate()
            .find(|(_, s)| s.identity.matches(id, password))
            .map(|(i, s)| AuthUser::from_account(s, Some(StudentIndex(i))))
    }

    pub fn student_at(&self, index: StudentIndex) -> Option<&Student> {
        self.students.get(index.0)
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    fn id_taken(&self, id: u64) -> bool {
        self.teachers.iter().any(|t| t.identity.id == id)
            || self.students.iter().any(|s| s.id() == id)
    }
}
