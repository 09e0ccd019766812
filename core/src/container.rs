//! Header container seam.
//!
//! The facade only needs to read the request `Cookie` header and append
//! `Set-Cookie` entries in call order. Anything that can do both can host
//! the codec; `http::HeaderMap` is supported out of the box.

use http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::types::CookieError;

pub trait HeaderContainer {
    /// Current value of `name`, if any.
    fn header(&self, name: &str) -> Option<String>;

    /// Add a value for `name` after any existing ones. Never replaces.
    fn append_header(&mut self, name: &str, value: String) -> Result<(), CookieError>;
}

impl HeaderContainer for HeaderMap {
    /// Multiple lines are joined with `; ` (HTTP/2 may split `Cookie`).
    /// Lines that are not visible ASCII are skipped.
    fn header(&self, name: &str) -> Option<String> {
        let lines: Vec<&str> = self
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("; "))
        }
    }

    fn append_header(&mut self, name: &str, value: String) -> Result<(), CookieError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| CookieError::InvalidHeaderValue {
                name: name.to_owned(),
                reason: e.to_string(),
            })?;
        let header_value =
            HeaderValue::try_from(value).map_err(|e| CookieError::InvalidHeaderValue {
                name: name.to_owned(),
                reason: e.to_string(),
            })?;
        self.append(header_name, header_value);
        Ok(())
    }
}
