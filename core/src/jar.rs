// ## 📂 File: `src/jar.rs`

//! jar.rs
//! Cookie get/set/delete against a header container.
//!
//! Write path: prefix policy -> checks -> (sign | seal)? -> percent-encode -> attributes -> append.
//! Read path:  `Cookie` header -> parse -> (verify | unseal)? -> caller.
//!
//! Design notes:
//! - Every `set_*` appends a new `Set-Cookie` entry; repeated calls for the
//!   same name produce repeated entries, in call order.
//! - `path` defaults to `/` when the caller leaves it unset.
//! - Single-cookie and all-cookie reads are separate functions.
//! - Signed/sealed reads: malformed entries are absent, entries that fail
//!   authentication are `Verified::Invalid`.

use crate::constants::{COOKIE_HEADER, DEFAULT_PATH, SET_COOKIE_HEADER};
use crate::container::HeaderContainer;
use crate::cookie::{
    apply_prefix, parse, physical_name, serialize, validate_options, CookieOptions, CookiePrefix,
    Cookies, VerifiedCookies,
};
use crate::crypto::{format_signed, parse_and_verify, seal, unseal, CryptoError, SealParams, Verified};
use crate::types::CookieError;

fn request_cookies<H>(headers: &H, name: Option<&str>) -> Cookies
where
    H: HeaderContainer + ?Sized,
{
    match headers.header(COOKIE_HEADER) {
        Some(header) => parse(&header, name),
        None => Cookies::new(),
    }
}

/// Default the path, apply the prefix policy, run the attribute checks.
fn prepare(name: &str, opts: &CookieOptions) -> Result<(String, CookieOptions), CookieError> {
    let mut defaulted = opts.clone();
    if defaulted.path.is_none() {
        defaulted.path = Some(DEFAULT_PATH.to_owned());
    }
    let (physical, effective) = apply_prefix(name, &defaulted);
    validate_options(&physical, &effective)?;
    Ok((physical, effective))
}

fn append_set_cookie<H>(headers: &mut H, name: &str, cookie: String) -> Result<(), CookieError>
where
    H: HeaderContainer + ?Sized,
{
    log::trace!("appending Set-Cookie for {name}");
    headers.append_header(SET_COOKIE_HEADER, cookie)
}

// -----------------------------------------------------------------------------
// Plain
// -----------------------------------------------------------------------------

/// Value of one request cookie. `prefix` is prepended to `name` before lookup.
pub fn get_cookie<H>(headers: &H, name: &str, prefix: Option<CookiePrefix>) -> Option<String>
where
    H: HeaderContainer + ?Sized,
{
    let key = physical_name(name, prefix);
    request_cookies(headers, Some(&*key)).remove(&*key)
}

/// Every request cookie. Empty when there is no `Cookie` header.
pub fn get_all_cookies<H>(headers: &H) -> Cookies
where
    H: HeaderContainer + ?Sized,
{
    request_cookies(headers, None)
}

/// The `Set-Cookie` value [`set_cookie`] would append.
pub fn generate_cookie(name: &str, value: &str, opts: &CookieOptions) -> Result<String, CookieError> {
    let (physical, effective) = prepare(name, opts)?;
    Ok(serialize(&physical, value, &effective))
}

pub fn set_cookie<H>(
    headers: &mut H,
    name: &str,
    value: &str,
    opts: &CookieOptions,
) -> Result<(), CookieError>
where
    H: HeaderContainer + ?Sized,
{
    let cookie = generate_cookie(name, value, opts)?;
    append_set_cookie(headers, name, cookie)
}

/// Expire a cookie: same as setting `""` with `Max-Age=0`.
/// Returns the value the request carried for it, if any.
pub fn delete_cookie<H>(
    headers: &mut H,
    name: &str,
    opts: &CookieOptions,
) -> Result<Option<String>, CookieError>
where
    H: HeaderContainer + ?Sized,
{
    let previous = get_cookie(&*headers, name, opts.prefix);
    let expired = CookieOptions {
        max_age: Some(0),
        ..opts.clone()
    };
    set_cookie(headers, name, "", &expired)?;
    Ok(previous)
}

// -----------------------------------------------------------------------------
// Signed
// -----------------------------------------------------------------------------

fn verify_all(cookies: Cookies, secret: &str) -> VerifiedCookies {
    cookies
        .into_iter()
        .filter_map(|(name, stored)| parse_and_verify(&stored, secret).map(|v| (name, v)))
        .collect()
}

pub fn get_signed_cookie<H>(
    headers: &H,
    secret: &str,
    name: &str,
    prefix: Option<CookiePrefix>,
) -> Option<Verified>
where
    H: HeaderContainer + ?Sized,
{
    let key = physical_name(name, prefix);
    verify_all(request_cookies(headers, Some(&*key)), secret).remove(&*key)
}

pub fn get_all_signed_cookies<H>(headers: &H, secret: &str) -> VerifiedCookies
where
    H: HeaderContainer + ?Sized,
{
    verify_all(request_cookies(headers, None), secret)
}

pub fn generate_signed_cookie(
    name: &str,
    value: &str,
    secret: &str,
    opts: &CookieOptions,
) -> Result<String, CookieError> {
    let (physical, effective) = prepare(name, opts)?;
    let signed = format_signed(value, secret)?;
    Ok(serialize(&physical, &signed, &effective))
}

pub fn set_signed_cookie<H>(
    headers: &mut H,
    name: &str,
    value: &str,
    secret: &str,
    opts: &CookieOptions,
) -> Result<(), CookieError>
where
    H: HeaderContainer + ?Sized,
{
    let cookie = generate_signed_cookie(name, value, secret, opts)?;
    append_set_cookie(headers, name, cookie)
}

// -----------------------------------------------------------------------------
// Sealed
// -----------------------------------------------------------------------------

fn unseal_all(cookies: Cookies, password: &str) -> Result<VerifiedCookies, CookieError> {
    if password.is_empty() {
        return Err(CryptoError::EmptyPassword.into());
    }

    let mut out = VerifiedCookies::new();
    for (name, stored) in cookies {
        match unseal(&stored, password, &SealParams::IRON) {
            Ok(value) => {
                out.insert(name, Verified::Valid(value));
            }
            Err(CryptoError::MalformedSeal { fields }) => {
                log::debug!("sealed cookie {name} dropped: {fields} fields");
            }
            Err(e) => {
                log::warn!("sealed cookie {name} rejected: {e}");
                out.insert(name, Verified::Invalid);
            }
        }
    }
    Ok(out)
}

/// Errors only on an empty password; bad cookies never error.
pub fn get_sealed_cookie<H>(
    headers: &H,
    password: &str,
    name: &str,
    prefix: Option<CookiePrefix>,
) -> Result<Option<Verified>, CookieError>
where
    H: HeaderContainer + ?Sized,
{
    let key = physical_name(name, prefix);
    let mut all = unseal_all(request_cookies(headers, Some(&*key)), password)?;
    Ok(all.remove(&*key))
}

pub fn get_all_sealed_cookies<H>(headers: &H, password: &str) -> Result<VerifiedCookies, CookieError>
where
    H: HeaderContainer + ?Sized,
{
    unseal_all(request_cookies(headers, None), password)
}

pub fn generate_sealed_cookie(
    name: &str,
    value: &str,
    password: &str,
    opts: &CookieOptions,
) -> Result<String, CookieError> {
    let (physical, effective) = prepare(name, opts)?;
    let sealed = seal(value, password, &SealParams::IRON)?;
    Ok(serialize(&physical, &sealed, &effective))
}

pub fn set_sealed_cookie<H>(
    headers: &mut H,
    name: &str,
    value: &str,
    password: &str,
    opts: &CookieOptions,
) -> Result<(), CookieError>
where
    H: HeaderContainer + ?Sized,
{
    let cookie = generate_sealed_cookie(name, value, password, opts)?;
    append_set_cookie(headers, name, cookie)
}
