//! Session credentials
//!
//! Two opaque cookie values copied out of an authenticated browser session.
//! Read once at startup and passed into every client; never re-read.

use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub(crate) struct Credentials {
    sid: String,
    csid: String,
}

impl Credentials {
    pub(crate) fn new(sid: impl Into<String>, csid: impl Into<String>) -> Self {
        Self {
            sid: sid.into(),
            csid: csid.into(),
        }
    }

    /// Read `cookie_sid` and `cookie_csid` from the environment.
    /// Missing or empty values refuse to proceed before any network activity.
    pub(crate) fn from_env() -> Result<Self, AppError> {
        let sid = env::var("cookie_sid").ok().filter(|v| !v.is_empty());
        let csid = env::var("cookie_csid").ok().filter(|v| !v.is_empty());
        match (sid, csid) {
            (Some(sid), Some(csid)) => Ok(Self { sid, csid }),
            _ => Err(AppError::MissingCredentials),
        }
    }

    /// Value for the `Cookie` request header.
    pub(crate) fn cookie_header(&self) -> String {
        format!("sid={}; csid={}", self.sid, self.csid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_header_format() {
        let creds = Credentials::new("abc123", "xyz789");
        assert_eq!(creds.cookie_header(), "sid=abc123; csid=xyz789");
    }
}
