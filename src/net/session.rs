//! Cookie-persistent HTTP session.

use reqwest::blocking::Client;

use crate::errors::AppResult;
use crate::net::{ORIGIN, Page, Transport};

/// A cookie-persistent HTTP client bound to one origin.
///
/// One `Session` represents one authenticated identity. It is constructed
/// per invocation, passed explicitly to every workflow call, and dropped at
/// process exit; there is no process-wide client and no persistence across
/// runs. Callers wanting several identities create several sessions.
pub struct Session {
    client: Client,
    origin: String,
}

impl Session {
    pub fn new() -> AppResult<Self> {
        Self::with_origin(ORIGIN)
    }

    pub fn with_origin(origin: &str) -> AppResult<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}

impl Transport for Session {
    fn get(&mut self, path: &str) -> AppResult<Page> {
        let res = self.client.get(self.url(path)).send()?;
        let status = res.status().as_u16();
        let body = res.text()?;
        Ok(Page { status, body })
    }

    fn post_form(&mut self, path: &str, form: &[(&str, String)]) -> AppResult<Page> {
        let res = self.client.post(self.url(path)).form(form).send()?;
        let status = res.status().as_u16();
        let body = res.text()?;
        Ok(Page { status, body })
    }
}
