pub mod console;
pub mod student;
pub mod teacher;

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use strum::IntoEnumIterator;
use tracing::info;

use crate::api::attendance::AttendanceService;
use crate::auth::auth::AuthUser;
use crate::config::Config;
use console::Console;

pub struct CliOptions {
    pub low_attendance_threshold: f64,
    /// Source of "today" for new requests
    pub clock: fn() -> NaiveDate,
}

impl CliOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            low_attendance_threshold: config.low_attendance_threshold,
            clock: local_today,
        }
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Role-specific menu for a logged-in user.
pub enum Dashboard {
    Student(AuthUser),
    Teacher(AuthUser),
}

impl Dashboard {
    pub fn for_user(user: AuthUser) -> Self {
        if user.is_student() {
            Dashboard::Student(user)
        } else {
            Dashboard::Teacher(user)
        }
    }

    pub fn run_menu<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        service: &mut AttendanceService,
        options: &CliOptions,
    ) -> Result<()> {
        match self {
            Dashboard::Student(user) => student::run_menu(user, console, service, options),
            Dashboard::Teacher(user) => teacher::run_menu(user, console, service),
        }
    }
}

/// Login loop. Exits on id 0 or end of input.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &mut AttendanceService,
    options: &CliOptions,
) -> Result<()> {
    console.say("Welcome to Smart Attendance System")?;

    loop {
        let id = match console.prompt_number("\nEnter ID (or 0 to exit): ")? {
            None | Some(0) => break,
            Some(id) => id,
        };
        let Some(password) = console.prompt("Enter Password: ")? else {
            break;
        };

        match service.login(id, &password) {
            Some(user) => Dashboard::for_user(user).run_menu(console, service, options)?,
            None => console.say("Invalid login")?,
        }
    }

    info!("Session ended");
    Ok(())
}

/// Prints a numbered menu and reads a choice. Out-of-range numbers and end
/// of input both yield `None`, which callers treat as logout.
fn choose<A, R, W>(console: &mut Console<R, W>, heading: &str) -> io::Result<Option<A>>
where
    A: IntoEnumIterator + Display,
    R: BufRead,
    W: Write,
{
    console.say(heading)?;
    for (n, action) in A::iter().enumerate() {
        console.say(format!("{}. {}", n + 1, action))?;
    }

    let choice = console.prompt_number("Choice: ")?;
    Ok(choice
        .and_then(|n| usize::try_from(n).ok())
        .and_then(|n| n.checked_sub(1))
        .and_then(|n| A::iter().nth(n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::Identity;
    use std::io::Cursor;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn options() -> CliOptions {
        CliOptions {
            low_attendance_threshold: 75.0,
            clock: fixed_day,
        }
    }

    fn service() -> AttendanceService {
        AttendanceService::new(Identity::new(999, "Admin", "admin123"))
    }

    fn drive(service: &mut AttendanceService, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        run(&mut console, service, &options()).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn bad_login_is_reported() {
        let mut svc = service();
        let out = drive(&mut svc, "999\nwrong\n0\n");
        assert!(out.contains("Invalid login"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut svc = service();
        let out = drive(&mut svc, "999\nadmin123\n");
        assert!(out.contains("Welcome, Admin (Teacher)"));
    }

    #[test]
    fn full_request_and_approval_round() {
        let mut svc = service();
        let script = [
            // teacher adds Alice
            "999", "admin123", "3", "1", "Alice", "a", "9",
            // Alice requests today
            "1", "a", "3", "4",
            // teacher approves
            "999", "admin123", "1", "Y", "2", "6",
            // Alice checks her percentage
            "1", "a", "1", "2", "4",
            "0",
        ]
        .join("\n");

        let out = drive(&mut svc, &script);

        assert!(out.contains("Student added."));
        assert!(out.contains("Attendance request submitted for today."));
        assert!(out.contains("Approve attendance for Alice (1) on 2024-01-01? (y/n): "));
        assert!(out.contains("Approved."));
        assert!(out.contains("Alice (1): 100.00%"));
        assert!(out.contains("Your attendance: 100.00%"));
        assert!(out.contains("2024-01-01: Present"));
        assert_eq!(svc.pending_count(), 0);
    }

    #[test]
    fn menu_numbers_follow_declaration_order() {
        let mut console = Console::new(Cursor::new("2\n"), Vec::new());
        let choice: Option<student::StudentAction> = choose(&mut console, "Menu").unwrap();
        assert_eq!(choice, Some(student::StudentAction::ViewDetail));

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("1. View Attendance %"));
        assert!(out.contains("4. Logout"));
    }

    #[test]
    fn out_of_range_choice_is_none() {
        let mut console = Console::new(Cursor::new("0\n"), Vec::new());
        let choice: Option<student::StudentAction> = choose(&mut console, "Menu").unwrap();
        assert_eq!(choice, None);
    }
}
