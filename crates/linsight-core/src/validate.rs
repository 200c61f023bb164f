use crate::error::CoreError;

/// Every accepted profile identifier starts with this literal prefix.
pub const PROFILE_URL_PREFIX: &str = "https://www.linkedin.com/in/";

/// Checks that `url` is a `LinkedIn` profile URL.
///
/// The check is a plain prefix match: no normalization, no percent-decoding,
/// no length limit.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] if `url` does not start with
/// [`PROFILE_URL_PREFIX`].
pub fn validate_profile_url(url: &str) -> Result<(), CoreError> {
    if url.starts_with(PROFILE_URL_PREFIX) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput {
            url: url.to_owned(),
            expected_prefix: PROFILE_URL_PREFIX,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_profile_url() {
        assert!(validate_profile_url("https://www.linkedin.com/in/ada-lovelace/").is_ok());
    }

    #[test]
    fn accepts_bare_prefix() {
        assert!(validate_profile_url(PROFILE_URL_PREFIX).is_ok());
    }

    #[test]
    fn rejects_other_hosts_and_schemes() {
        for url in [
            "",
            "ada-lovelace",
            "http://www.linkedin.com/in/ada",
            "https://linkedin.com/in/ada",
            "https://www.linkedin.com/company/acme",
            " https://www.linkedin.com/in/ada",
            "HTTPS://WWW.LINKEDIN.COM/IN/ada",
        ] {
            let err = validate_profile_url(url).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidInput { url: ref u, .. } if u == url),
                "expected InvalidInput for {url:?}, got: {err:?}"
            );
        }
    }

    #[test]
    fn error_message_names_expected_prefix() {
        let msg = validate_profile_url("nope").unwrap_err().to_string();
        assert!(msg.contains(PROFILE_URL_PREFIX), "got: {msg}");
    }
}
