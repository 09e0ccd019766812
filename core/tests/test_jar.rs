// # Facade suite

// End-to-end over `http::HeaderMap`: what a handler reads from `Cookie`
// and what it appends to `Set-Cookie`.

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use cookie_core::crypto::CryptoError;
    use cookie_core::prelude::*;
    use http::header::{COOKIE, SET_COOKIE};
    use http::{HeaderMap, HeaderValue};

    const SECRET: &str = "secret lucky charm";
    const PASSWORD: &str = "a-very-secret-password-for-sealing";

    fn request(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    fn set_cookies(headers: &HeaderMap) -> Vec<String> {
        headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_owned())
            .collect()
    }

    /// `name=value` part of a Set-Cookie, as a browser would send it back.
    fn echo(set_cookie: &str) -> String {
        set_cookie.split("; ").next().unwrap().to_owned()
    }

// ## 1️⃣ Plain cookies

    #[test]
    fn get_single_and_all() {
        let headers = request("yummy_cookie=choco; tasty_cookie=strawberry");
        assert_eq!(get_cookie(&headers, "yummy_cookie", None).as_deref(), Some("choco"));
        assert_eq!(get_cookie(&headers, "missing", None), None);

        let all = get_all_cookies(&headers);
        assert_eq!(all.len(), 2);
        assert_eq!(all["tasty_cookie"], "strawberry");
    }

    #[test]
    fn no_cookie_header_means_empty() {
        let headers = HeaderMap::new();
        assert!(get_all_cookies(&headers).is_empty());
        assert_eq!(get_cookie(&headers, "a", None), None);
    }

    #[test]
    fn split_cookie_headers_are_joined() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("b=2"));
        let all = get_all_cookies(&headers);
        assert_eq!(all["a"], "1");
        assert_eq!(all["b"], "2");
    }

    #[test]
    fn get_with_prefix_reads_physical_name() {
        let headers = request("__Secure-c=s; __Host-c=h; c=plain");
        assert_eq!(get_cookie(&headers, "c", Some(CookiePrefix::Secure)).as_deref(), Some("s"));
        assert_eq!(get_cookie(&headers, "c", Some(CookiePrefix::Host)).as_deref(), Some("h"));
        assert_eq!(get_cookie(&headers, "c", None).as_deref(), Some("plain"));
    }

    #[test]
    fn set_cookie_full_attribute_set() {
        let mut headers = HeaderMap::new();
        let expires = Utc.with_ymd_and_hms(2000, 12, 24, 10, 30, 59).unwrap()
            + Duration::milliseconds(900);
        let opts = CookieOptions::new()
            .with_path("/")
            .with_secure(true)
            .with_domain("example.com")
            .with_http_only(true)
            .with_max_age(1000)
            .with_expires(expires)
            .with_same_site(SameSite::Strict);

        set_cookie(&mut headers, "great_cookie", "banana", &opts).unwrap();

        assert_eq!(
            set_cookies(&headers),
            vec!["great_cookie=banana; Max-Age=1000; Domain=example.com; Path=/; \
                  Expires=Sun, 24 Dec 2000 10:30:59 GMT; HttpOnly; Secure; SameSite=Strict"]
        );
    }

    #[test]
    fn set_cookie_defaults_path() {
        let mut headers = HeaderMap::new();
        set_cookie(&mut headers, "c", "v", &CookieOptions::default()).unwrap();
        assert_eq!(set_cookies(&headers), vec!["c=v; Path=/"]);
    }

    #[test]
    fn repeated_sets_append_in_call_order() {
        let mut headers = HeaderMap::new();
        set_cookie(&mut headers, "c", "first", &CookieOptions::default()).unwrap();
        set_cookie(&mut headers, "c", "second", &CookieOptions::default()).unwrap();
        assert_eq!(
            set_cookies(&headers),
            vec!["c=first; Path=/", "c=second; Path=/"]
        );
    }

    #[test]
    fn host_prefix_ignores_domain_path_and_secure_override() {
        let mut headers = HeaderMap::new();
        let opts = CookieOptions::new()
            .with_prefix(CookiePrefix::Host)
            .with_domain("example.com")
            .with_path("/foo")
            .with_secure(false);
        set_cookie(&mut headers, "c", "v", &opts).unwrap();
        assert_eq!(set_cookies(&headers), vec!["__Host-c=v; Path=/; Secure"]);
    }

    #[test]
    fn secure_prefix_forces_secure() {
        let mut headers = HeaderMap::new();
        let opts = CookieOptions::new().with_prefix(CookiePrefix::Secure);
        set_cookie(&mut headers, "c", "v", &opts).unwrap();
        assert_eq!(set_cookies(&headers), vec!["__Secure-c=v; Path=/; Secure"]);
    }

    #[test]
    fn value_is_percent_encoded_and_read_back() {
        let mut headers = HeaderMap::new();
        set_cookie(&mut headers, "c", "a value; with \"specials\"", &CookieOptions::default())
            .unwrap();
        let sent = set_cookies(&headers).remove(0);
        assert_eq!(sent, "c=a%20value%3B%20with%20%22specials%22; Path=/");

        let back = request(&echo(&sent));
        assert_eq!(
            get_cookie(&back, "c", None).as_deref(),
            Some("a value; with \"specials\"")
        );
    }

    #[test]
    fn generate_matches_set() {
        let mut headers = HeaderMap::new();
        let opts = CookieOptions::new().with_http_only(true);
        set_cookie(&mut headers, "c", "v", &opts).unwrap();
        assert_eq!(set_cookies(&headers), vec![generate_cookie("c", "v", &opts).unwrap()]);
    }

// ## 2️⃣ Delete

    #[test]
    fn delete_expires_cookie() {
        let mut headers = HeaderMap::new();
        let previous = delete_cookie(&mut headers, "c", &CookieOptions::default()).unwrap();
        assert_eq!(previous, None);
        assert_eq!(set_cookies(&headers), vec!["c=; Max-Age=0; Path=/"]);
    }

    #[test]
    fn delete_returns_previous_value() {
        let mut headers = request("c=old");
        let previous = delete_cookie(&mut headers, "c", &CookieOptions::default()).unwrap();
        assert_eq!(previous.as_deref(), Some("old"));
    }

    #[test]
    fn delete_with_prefix() {
        let mut headers = request("__Host-c=old");
        let opts = CookieOptions::new().with_prefix(CookiePrefix::Host);
        let previous = delete_cookie(&mut headers, "c", &opts).unwrap();
        assert_eq!(previous.as_deref(), Some("old"));
        assert_eq!(set_cookies(&headers), vec!["__Host-c=; Max-Age=0; Path=/; Secure"]);
    }

// ## 3️⃣ Attribute checks

    #[test]
    fn spelled_out_prefixes_are_checked() {
        let err = generate_cookie("__Secure-x", "v", &CookieOptions::default()).unwrap_err();
        assert!(matches!(err, CookieError::SecurePrefixRequiresSecure));

        let err = generate_cookie("__Host-x", "v", &CookieOptions::default()).unwrap_err();
        assert!(matches!(err, CookieError::HostPrefixRequiresSecure));

        let opts = CookieOptions::new().with_secure(true).with_path("/foo");
        let err = generate_cookie("__Host-x", "v", &opts).unwrap_err();
        assert!(matches!(err, CookieError::HostPrefixRequiresRootPath));

        let opts = CookieOptions::new().with_secure(true).with_domain("example.com");
        let err = generate_cookie("__Host-x", "v", &opts).unwrap_err();
        assert!(matches!(err, CookieError::HostPrefixForbidsDomain));

        let opts = CookieOptions::new().with_secure(true);
        assert_eq!(generate_cookie("__Host-x", "v", &opts).unwrap(), "__Host-x=v; Path=/; Secure");
    }

    #[test]
    fn partitioned_requires_secure() {
        let opts = CookieOptions::new().with_partitioned(true);
        let err = generate_cookie("c", "v", &opts).unwrap_err();
        assert!(matches!(err, CookieError::PartitionedRequiresSecure));

        let opts = opts.with_prefix(CookiePrefix::Secure);
        assert_eq!(
            generate_cookie("c", "v", &opts).unwrap(),
            "__Secure-c=v; Path=/; Secure; Partitioned"
        );
    }

    #[test]
    fn max_age_ceiling_is_400_days() {
        let limit = 400 * 24 * 60 * 60;
        assert!(generate_cookie("c", "v", &CookieOptions::new().with_max_age(limit)).is_ok());
        let err = generate_cookie("c", "v", &CookieOptions::new().with_max_age(limit + 1)).unwrap_err();
        assert!(matches!(err, CookieError::MaxAgeTooLong { max_age } if max_age == limit + 1));
    }

    #[test]
    fn expires_ceiling_is_400_days_from_now() {
        let soon = Utc::now() + Duration::days(399);
        assert!(generate_cookie("c", "v", &CookieOptions::new().with_expires(soon)).is_ok());

        let far = Utc::now() + Duration::days(401);
        let err = generate_cookie("c", "v", &CookieOptions::new().with_expires(far)).unwrap_err();
        assert!(matches!(err, CookieError::ExpiresTooFar { .. }));
    }

    #[test]
    fn container_rejects_control_characters() {
        let mut headers = HeaderMap::new();
        let opts = CookieOptions::new().with_domain("exa\nmple.com");
        let err = set_cookie(&mut headers, "c", "v", &opts).unwrap_err();
        assert!(matches!(err, CookieError::InvalidHeaderValue { .. }));
        assert!(set_cookies(&headers).is_empty());
    }

// ## 4️⃣ Signed cookies

    #[test]
    fn signed_round_trip() {
        let mut headers = HeaderMap::new();
        set_signed_cookie(&mut headers, "fortune", "cookie", SECRET, &CookieOptions::default())
            .unwrap();
        let sent = set_cookies(&headers).remove(0);
        assert!(sent.ends_with("; Path=/"));

        let back = request(&echo(&sent));
        assert_eq!(
            get_signed_cookie(&back, SECRET, "fortune", None),
            Some(Verified::Valid("cookie".into()))
        );
    }

    #[test]
    fn signed_wire_value_is_percent_encoded() {
        let cookie =
            generate_signed_cookie("fortune", "fortune cookie", SECRET, &CookieOptions::default())
                .unwrap();
        assert_eq!(
            cookie,
            "fortune=fortune%20cookie.rVHikjVg8%2B5dp4x0PrSO0U8e4OpmkgHhcMNmqQI0xNU%3D; Path=/"
        );
    }

    #[test]
    fn signed_wrong_secret_is_invalid() {
        let cookie =
            generate_signed_cookie("fortune", "cookie", SECRET, &CookieOptions::default()).unwrap();
        let back = request(&echo(&cookie));
        assert_eq!(
            get_signed_cookie(&back, "another secret", "fortune", None),
            Some(Verified::Invalid)
        );
    }

    #[test]
    fn signed_malformed_entries_are_absent() {
        let forged = format!("v.{}=", "A".repeat(43));
        let headers = request(&format!(
            "plain=value; short=v.abc=; nopad=v.{}; forged={forged}",
            "A".repeat(44)
        ));

        let all = get_all_signed_cookies(&headers, SECRET);
        assert_eq!(all.len(), 1);
        assert_eq!(all["forged"], Verified::Invalid);
        assert_eq!(get_signed_cookie(&headers, SECRET, "plain", None), None);
        assert_eq!(get_signed_cookie(&headers, SECRET, "short", None), None);
    }

    #[test]
    fn signed_with_prefix() {
        let opts = CookieOptions::new().with_prefix(CookiePrefix::Host);
        let cookie = generate_signed_cookie("s", "v", SECRET, &opts).unwrap();
        assert!(cookie.starts_with("__Host-s="));
        assert!(cookie.ends_with("; Path=/; Secure"));

        let back = request(&echo(&cookie));
        assert_eq!(
            get_signed_cookie(&back, SECRET, "s", Some(CookiePrefix::Host)),
            Some(Verified::Valid("v".into()))
        );
        assert_eq!(get_signed_cookie(&back, SECRET, "s", None), None);
    }

// ## 5️⃣ Sealed cookies

    #[test]
    fn sealed_round_trip() {
        let mut headers = HeaderMap::new();
        set_sealed_cookie(&mut headers, "session", "user=42", PASSWORD, &CookieOptions::default())
            .unwrap();
        let sent = set_cookies(&headers).remove(0);
        assert!(!sent.contains("user=42"));

        let back = request(&echo(&sent));
        assert_eq!(
            get_sealed_cookie(&back, PASSWORD, "session", None).unwrap(),
            Some(Verified::Valid("user=42".into()))
        );
    }

    #[test]
    fn sealed_wrong_password_is_invalid() {
        let cookie =
            generate_sealed_cookie("session", "v", PASSWORD, &CookieOptions::default()).unwrap();
        let back = request(&echo(&cookie));
        assert_eq!(
            get_sealed_cookie(&back, "not-the-password", "session", None).unwrap(),
            Some(Verified::Invalid)
        );
    }

    #[test]
    fn sealed_malformed_entries_are_absent() {
        let headers = request("nostar=value; three=a*b*c; garbage=a*b*c*d*e");
        let all = get_all_sealed_cookies(&headers, PASSWORD).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all["garbage"], Verified::Invalid);
        assert_eq!(get_sealed_cookie(&headers, PASSWORD, "nostar", None).unwrap(), None);
    }

    #[test]
    fn sealed_authentic_but_undecryptable_is_invalid() {
        // Correct HMAC over an 8-byte IV.
        let sealed =
            "aa*AAECAwQFBgc*AAAAAAAAAAAAAAAAAAAAAA*bb*lnRPRHuMdmqhfs99_VeuL2aEl5i3U2QxwYh0oEFwfZU";
        let headers = request(&format!("session={sealed}"));
        assert_eq!(
            get_sealed_cookie(&headers, PASSWORD, "session", None).unwrap(),
            Some(Verified::Invalid)
        );
        assert_eq!(
            get_all_sealed_cookies(&headers, PASSWORD).unwrap()["session"],
            Verified::Invalid
        );
    }

    #[test]
    fn sealed_empty_password_is_an_error() {
        let headers = request("session=a*b*c*d*e");
        let err = get_sealed_cookie(&headers, "", "session", None).unwrap_err();
        assert!(matches!(err, CookieError::Crypto(CryptoError::EmptyPassword)));

        let err = generate_sealed_cookie("session", "v", "", &CookieOptions::default()).unwrap_err();
        assert!(matches!(err, CookieError::Crypto(CryptoError::EmptyPassword)));
    }

    #[test]
    fn sealed_cookies_differ_per_call() {
        let a = generate_sealed_cookie("s", "v", PASSWORD, &CookieOptions::default()).unwrap();
        let b = generate_sealed_cookie("s", "v", PASSWORD, &CookieOptions::default()).unwrap();
        assert_ne!(a, b);
    }
}
