use super::attendance::AttendanceRecord;
use super::role::Role;

/// Login-capable actor. The password is an opaque plaintext credential.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: u64,
    pub name: String,
    pub password: String,
}

impl Identity {
    pub fn new(id: u64, name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, id: u64, password: &str) -> bool {
        self.id == id && self.password == password
    }
}

#[derive(Debug, Clone)]
pub struct Student {
    pub identity: Identity,
    pub record: AttendanceRecord,
}

impl Student {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            record: AttendanceRecord::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.identity.id
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }
}

#[derive(Debug, Clone)]
pub struct Teacher {
    pub identity: Identity,
}

impl Teacher {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

pub trait Account {
    fn identity(&self) -> &Identity;
    fn role(&self) -> Role;
}

impl Account for Student {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn role(&self) -> Role {
        Role::Student
    }
}

impl Account for Teacher {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn role(&self) -> Role {
        Role::Teacher
    }
}
