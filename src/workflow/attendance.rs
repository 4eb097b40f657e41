//! Punch (clock in/out) and read-only attendance listing.

use scraper::Html;

use crate::errors::{AppError, AppResult};
use crate::net::{ADIT_PATH, ATTENDANCE_PATH, EMPLOYEE_PATH, Transport};
use crate::scrape::{self, AttendanceTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchMode {
    Start,
    End,
}

impl PunchMode {
    /// Value of the `adit_item` form field the server expects.
    pub fn adit_item(&self) -> &'static str {
        match self {
            PunchMode::Start => "work_start",
            PunchMode::End => "work_end",
        }
    }
}

/// Record a clock-in or clock-out punch.
///
/// Fetches the employee landing page for the current CSRF token and
/// default group, then posts the punch. Whatever token the page carries
/// is passed through unchanged; the server is the authority on rejecting
/// a stale or empty one.
pub fn punch<T: Transport>(t: &mut T, mode: PunchMode) -> AppResult<()> {
    let page = t.get(EMPLOYEE_PATH)?;
    if !page.ok() {
        return Err(AppError::Fetch {
            path: EMPLOYEE_PATH.to_string(),
            status: page.status,
        });
    }

    let doc = Html::parse_document(&page.body);
    let (token, group_id) = scrape::punch_form(&doc);

    let form = [
        ("is_yakin", "0".to_string()),
        ("adit_item", mode.adit_item().to_string()),
        ("notice", String::new()),
        ("token", token),
        ("adit_groupID", group_id),
    ];
    let res = t.post_form(ADIT_PATH, &form)?;
    if !res.ok() {
        return Err(AppError::Post {
            path: ADIT_PATH.to_string(),
            status: res.status,
        });
    }
    Ok(())
}

/// Fetch the monthly attendance report. Read-only; consumes no token.
pub fn list_attendance<T: Transport>(t: &mut T) -> AppResult<AttendanceTable> {
    let page = t.get(ATTENDANCE_PATH)?;
    if !page.ok() {
        return Err(AppError::Fetch {
            path: ATTENDANCE_PATH.to_string(),
            status: page.status,
        });
    }
    let doc = Html::parse_document(&page.body);
    Ok(scrape::attendance_table(&doc))
}
