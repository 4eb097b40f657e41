//! Authenticator: turns credentials into an authenticated session.
//!
//! Two protocols exist. Staff accounts log in with a single POST. Admin
//! accounts go through three requests: client login, scraping the employee
//! impersonation code from the admin landing page, and the impersonation
//! GET that layers the employee identity under the administrator cookies.

use scraper::Html;

use crate::config::{AccountType, Credentials};
use crate::errors::{AppError, AppResult, AuthPhase};
use crate::net::{
    CLIENT_LOGIN_PATH, CLIENT_PATH, EMPLOYEE_LOGIN_PATH, IMPERSONATE_PATH, ORIGIN, Session,
    Transport,
};
use crate::scrape;

/// Build a fresh [`Session`] and run the login protocol for the account
/// mode in `creds`. The returned session carries the employee identity in
/// its cookie jar and is reused unchanged for every later request.
pub fn establish(creds: &Credentials) -> AppResult<Session> {
    let mut session = Session::new()?;
    login(&mut session, creds)?;
    Ok(session)
}

/// Run the login protocol over an existing transport.
pub fn login<T: Transport>(t: &mut T, creds: &Credentials) -> AppResult<()> {
    match creds.account_type {
        AccountType::Staff => staff_login(t, creds),
        AccountType::Admin => admin_login(t, creds),
    }
}

fn staff_login<T: Transport>(t: &mut T, creds: &Credentials) -> AppResult<()> {
    let form = [
        ("client_id", creds.client_id.clone()),
        ("email", creds.login_id.clone()),
        ("password", creds.password.clone()),
        ("login_type", "1".to_string()),
        ("url", "/employee".to_string()),
    ];
    let page = t.post_form(EMPLOYEE_LOGIN_PATH, &form)?;
    if !page.ok() {
        return Err(AppError::Auth {
            phase: AuthPhase::EmployeeLogin,
            status: page.status,
        });
    }
    Ok(())
}

fn admin_login<T: Transport>(t: &mut T, creds: &Credentials) -> AppResult<()> {
    let form = [
        ("client_login_id", creds.client_id.clone()),
        ("client_manager_login_id", creds.login_id.clone()),
        ("client_login_password", creds.password.clone()),
        ("login_type", "2".to_string()),
        ("url", format!("{ORIGIN}/client/")),
    ];
    let page = t.post_form(CLIENT_LOGIN_PATH, &form)?;
    if !page.ok() {
        return Err(AppError::Auth {
            phase: AuthPhase::ClientLogin,
            status: page.status,
        });
    }

    let code = fetch_employee_code(t)?;

    let page = t.get(&format!("{IMPERSONATE_PATH}?code={code}"))?;
    if !page.ok() {
        return Err(AppError::Auth {
            phase: AuthPhase::Impersonate,
            status: page.status,
        });
    }
    Ok(())
}

/// Read the impersonation code off the admin landing page. The code is
/// used exactly once and discarded.
fn fetch_employee_code<T: Transport>(t: &mut T) -> AppResult<String> {
    let page = t.get(CLIENT_PATH)?;
    if !page.ok() {
        return Err(AppError::Auth {
            phase: AuthPhase::EmployeeCode,
            status: page.status,
        });
    }

    let doc = Html::parse_document(&page.body);
    scrape::employee_code(&doc).ok_or(AppError::Auth {
        phase: AuthPhase::EmployeeCode,
        status: page.status,
    })
}
