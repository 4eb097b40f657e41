//! HTTP layer: the `Transport` seam and the cookie-backed `Session`.
//!
//! The remote endpoints are a fixed external surface; the paths and form
//! field names must match the server byte for byte.

pub mod session;

pub use session::Session;

use crate::errors::AppResult;

/// Origin of the attendance service. All paths below are relative to it.
pub const ORIGIN: &str = "https://ssl.jobcan.jp";

/// Employee landing page (punch form lives here).
pub const EMPLOYEE_PATH: &str = "/employee";
/// Monthly attendance report.
pub const ATTENDANCE_PATH: &str = "/employee/attendance";
/// Punch (clock in/out) submit endpoint.
pub const ADIT_PATH: &str = "/employee/index/adit";
/// Per-day modification page, takes year/month/day query parameters.
pub const MODIFY_PATH: &str = "/employee/adit/modify";
/// Correction submit endpoint. The trailing slash matters to the server.
pub const INSERT_PATH: &str = "/employee/adit/insert/";
/// Direct employee login.
pub const EMPLOYEE_LOGIN_PATH: &str = "/login/pc-employee";
/// Administrator (client) login.
pub const CLIENT_LOGIN_PATH: &str = "/login/client";
/// Administrator landing page (impersonation menu lives here).
pub const CLIENT_PATH: &str = "/client";
/// Impersonation endpoint, takes a `code` query parameter.
pub const IMPERSONATE_PATH: &str = "/login/pc-employee/try";

/// A fetched page: the HTTP status and the body text.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn ok(&self) -> bool {
        self.status == 200
    }
}

/// The unit of authenticated HTTP state.
///
/// `Session` is the production implementation; tests substitute a scripted
/// transport to count and inspect requests without a network.
pub trait Transport {
    /// GET `path` (origin-relative, query string included) and return the page.
    fn get(&mut self, path: &str) -> AppResult<Page>;

    /// POST `form` to `path` as `application/x-www-form-urlencoded`.
    fn post_form(&mut self, path: &str, form: &[(&str, String)]) -> AppResult<Page>;
}
