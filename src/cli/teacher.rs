use std::io::{BufRead, Write};

use anyhow::Result;
use strum_macros::{Display, EnumIter};

use super::choose;
use super::console::Console;
use super::student::format_entry;
use crate::api::attendance::{AttendanceService, Resolution};
use crate::auth::auth::AuthUser;
use crate::error::AppError;
use crate::models::AttendanceEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum TeacherAction {
    #[strum(to_string = "Approve Attendance Requests")]
    ApproveRequests,
    #[strum(to_string = "View All Students Attendance")]
    ViewAll,
    #[strum(to_string = "Add Student")]
    AddStudent,
    #[strum(to_string = "View Student Detailed Attendance")]
    ViewStudentDetail,
    #[strum(to_string = "Export Attendance Summary (JSON)")]
    ExportSummary,
    #[strum(to_string = "Logout")]
    Logout,
}

pub fn run_menu<R: BufRead, W: Write>(
    user: &AuthUser,
    console: &mut Console<R, W>,
    service: &mut AttendanceService,
) -> Result<()> {
    user.require_teacher()?;
    let heading = format!("\nWelcome, {} ({})", user.name, user.role);

    loop {
        match choose(console, &heading)? {
            Some(TeacherAction::ApproveRequests) => approve_requests(console, service)?,
            Some(TeacherAction::ViewAll) => {
                for row in service.student_summary() {
                    console.say(format!("{} ({}): {:.2}%", row.name, row.id, row.percentage))?;
                }
            }
            Some(TeacherAction::AddStudent) => {
                if !add_student(console, service)? {
                    break;
                }
            }
            Some(TeacherAction::ViewStudentDetail) => {
                let Some(id) = console.prompt_number("Enter student ID: ")? else {
                    break;
                };
                match service.record_detail(id) {
                    Some(detail) => {
                        let mut entries: Vec<AttendanceEntry> = detail.collect();
                        entries.sort();
                        console.say("Date-wise Attendance:")?;
                        for entry in entries {
                            console.say(format_entry(&entry))?;
                        }
                    }
                    None => console.say(AppError::student_not_found(id))?,
                }
            }
            Some(TeacherAction::ExportSummary) => {
                let json = serde_json::to_string_pretty(&service.student_summary())?;
                console.say(json)?;
            }
            Some(TeacherAction::Logout) | None => break,
        }
    }

    Ok(())
}

/// Offers each pending request once, in queue order. Only an answer of
/// `y` (any case) approves; anything else leaves the request pending. End of
/// input ends the session early.
fn approve_requests<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &mut AttendanceService,
) -> Result<()> {
    let pending = service.list_pending_approvals();
    if pending.is_empty() {
        console.say("No pending requests.")?;
        return Ok(());
    }

    for item in pending {
        let question = format!(
            "Approve attendance for {} ({}) on {}? (y/n): ",
            item.owner_name, item.request.student_id, item.request.date
        );
        let Some(answer) = console.prompt(&question)? else {
            break;
        };

        match service.resolve_approval(item.request.id, answer.eq_ignore_ascii_case("y")) {
            Ok(Resolution::Approved(_)) => console.say("Approved.")?,
            Ok(Resolution::LeftPending) => {}
            Err(e) => console.say(e)?,
        }
    }

    Ok(())
}

/// Returns `false` if input ran out midway.
fn add_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &mut AttendanceService,
) -> Result<bool> {
    let Some(id) = console.prompt_number("Enter new student ID: ")? else {
        return Ok(false);
    };
    let Some(name) = console.prompt("Enter name: ")? else {
        return Ok(false);
    };
    let Some(password) = console.prompt("Enter password: ")? else {
        return Ok(false);
    };

    service.add_student(id, &name, &password);
    console.say("Student added.")?;
    Ok(true)
}
