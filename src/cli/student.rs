use std::io::{BufRead, Write};

use anyhow::Result;
use strum_macros::{Display, EnumIter};

use super::console::Console;
use super::{CliOptions, choose};
use crate::api::attendance::AttendanceService;
use crate::auth::auth::AuthUser;
use crate::error::AppError;
use crate::models::AttendanceEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum StudentAction {
    #[strum(to_string = "View Attendance %")]
    ViewPercentage,
    #[strum(to_string = "View Detailed Attendance")]
    ViewDetail,
    #[strum(to_string = "Request Attendance for Today")]
    RequestToday,
    #[strum(to_string = "Logout")]
    Logout,
}

pub fn run_menu<R: BufRead, W: Write>(
    user: &AuthUser,
    console: &mut Console<R, W>,
    service: &mut AttendanceService,
    options: &CliOptions,
) -> Result<()> {
    let heading = format!("\nWelcome, {} ({})", user.name, user.role);

    loop {
        match choose(console, &heading)? {
            Some(StudentAction::ViewPercentage) => {
                let percentage = service
                    .record_of(user)
                    .ok_or_else(|| AppError::student_not_found(user.user_id))?
                    .percentage();
                console.say(format!("Your attendance: {:.2}%", percentage))?;
                if percentage < options.low_attendance_threshold {
                    console.say(format!(
                        "Warning: Attendance below {}%!",
                        options.low_attendance_threshold
                    ))?;
                }
            }
            Some(StudentAction::ViewDetail) => {
                let mut entries: Vec<AttendanceEntry> = service
                    .record_of(user)
                    .ok_or_else(|| AppError::student_not_found(user.user_id))?
                    .detail()
                    .map(AttendanceEntry::from)
                    .collect();
                entries.sort();

                console.say("Date-wise Attendance:")?;
                for entry in entries {
                    console.say(format_entry(&entry))?;
                }
            }
            Some(StudentAction::RequestToday) => {
                service.submit_request(user.user_id, (options.clock)());
                console.say("Attendance request submitted for today.")?;
            }
            Some(StudentAction::Logout) | None => break,
        }
    }

    Ok(())
}

pub(super) fn format_entry(entry: &AttendanceEntry) -> String {
    let status = if entry.present { "Present" } else { "Absent" };
    format!("{}: {}", entry.date, status)
}
