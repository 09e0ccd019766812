// ## 📂 File: `src/cookie/decode.rs`
//! src/cookie/decode.rs
//!
//! `Cookie` header parsing.
//!
//! Design notes:
//! - Never fails. Pairs that do not parse or fail a character class are
//!   left out of the result.
//! - Names: RFC 6265 token characters.
//! - Values: printable ASCII except `"`, `;` and `\`. Space and comma are
//!   accepted on purpose; real clients send them.

use crate::cookie::types::Cookies;
use crate::utils::percent_decode;

/// `[A-Za-z0-9_!#$%&'*.^`|~+-]`
#[inline]
fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'_' | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'.' | b'^' | b'`' | b'|'
                | b'~' | b'+' | b'-'
        )
}

/// 0x20..=0x7E minus `"` (0x22), `;` (0x3B), `\` (0x5C).
#[inline]
fn is_value_char(b: u8) -> bool {
    (0x20..=0x7E).contains(&b) && !matches!(b, b'"' | b';' | b'\\')
}

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_name_char)
}

pub fn is_valid_value(value: &str) -> bool {
    value.bytes().all(is_value_char)
}

/// Strip one pair of surrounding double quotes.
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Parse a `Cookie` header into name -> decoded value.
///
/// With `name` set, only that cookie is kept. Later pairs overwrite earlier
/// ones with the same name.
pub fn parse(header: &str, name: Option<&str>) -> Cookies {
    let mut cookies = Cookies::new();

    if let Some(wanted) = name {
        if !header.contains(wanted) {
            return cookies;
        }
    }

    for pair in header.trim().split(';') {
        let pair = pair.trim();
        let Some((raw_name, raw_value)) = pair.split_once('=') else {
            continue;
        };

        let cookie_name = raw_name.trim();
        if name.is_some_and(|wanted| wanted != cookie_name) {
            continue;
        }
        if !is_valid_name(cookie_name) {
            log::debug!("cookie pair dropped: invalid name");
            continue;
        }

        let value = unquote(raw_value.trim());
        if !is_valid_value(value) {
            log::debug!("cookie {cookie_name} dropped: invalid value characters");
            continue;
        }

        cookies.insert(cookie_name.to_owned(), percent_decode(value).into_owned());
    }

    cookies
}
