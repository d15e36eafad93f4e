//! Local input validation. Runs before any network access.

use url::Url;

use crate::error::{ShortenError, ShortenResult};

pub(crate) const ALIAS_MIN_LEN: usize = 5;
pub(crate) const ALIAS_MAX_LEN: usize = 30;

/// Checks that `url` is present and an absolute http(s) URL.
pub(crate) fn target_url(url: &str) -> ShortenResult<()> {
    if url.trim().is_empty() {
        return Err(ShortenError::invalid_argument(
            "url",
            "url must not be empty",
        ));
    }

    let parsed = Url::parse(url).map_err(|e| {
        ShortenError::invalid_argument("url", format!("url is not an absolute URL: {e}"))
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ShortenError::invalid_argument(
            "url",
            format!("unsupported scheme `{other}`, expected http or https"),
        )),
    }
}

/// Normalizes and validates the alias.
///
/// An absent, empty, or whitespace-only alias means "no alias" and is never
/// rejected. Anything else must satisfy [`is_valid_alias`].
pub(crate) fn normalize_alias(alias: Option<&str>) -> ShortenResult<Option<&str>> {
    let Some(alias) = alias else {
        return Ok(None);
    };

    if alias.trim().is_empty() {
        return Ok(None);
    }

    if !is_valid_alias(alias) {
        return Err(ShortenError::invalid_argument(
            "alias",
            format!(
                "alias must be {ALIAS_MIN_LEN}-{ALIAS_MAX_LEN} ASCII letters, digits, hyphens, or underscores"
            ),
        ));
    }

    Ok(Some(alias))
}

fn is_valid_alias(alias: &str) -> bool {
    (ALIAS_MIN_LEN..=ALIAS_MAX_LEN).contains(&alias.len())
        && alias
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::plain("https://www.example.com")]
    #[case::http("http://example.com")]
    #[case::with_path_and_query("https://example.com/a/b?c=d&e=f")]
    #[case::with_port("http://example.com:8080/")]
    fn accepts_absolute_http_urls(#[case] url: &str) {
        assert!(target_url(url).is_ok());
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    #[case::relative("not-a-url")]
    #[case::host_only("www.example.com")]
    #[case::ftp("ftp://example.com/file")]
    #[case::file("file:///etc/hosts")]
    #[case::javascript("javascript:alert('xss')")]
    fn rejects_missing_or_malformed_urls(#[case] url: &str) {
        let err = target_url(url).unwrap_err();
        assert_eq!(err.param(), Some("url"));
    }

    #[rstest]
    #[case::absent(None)]
    #[case::empty(Some(""))]
    #[case::whitespace(Some("  \t"))]
    fn blank_alias_normalizes_to_none(#[case] alias: Option<&str>) {
        assert_eq!(normalize_alias(alias).unwrap(), None);
    }

    #[rstest]
    #[case::min_length("abcde")]
    #[case::max_length("a23456789012345678901234567890")]
    #[case::mixed("my-alias_01")]
    fn accepts_valid_aliases(#[case] alias: &str) {
        assert_eq!(normalize_alias(Some(alias)).unwrap(), Some(alias));
    }

    #[rstest]
    #[case::too_short("abcd")]
    #[case::too_long("this-is-a-very-long-alias-that-exceeds-thirty-characters")]
    #[case::at_sign("bad@alias")]
    #[case::inner_space("bad alias")]
    #[case::period("bad.alias")]
    #[case::non_ascii("caffè")]
    #[case::padded(" myalias ")]
    fn rejects_invalid_aliases(#[case] alias: &str) {
        let err = normalize_alias(Some(alias)).unwrap_err();
        assert_eq!(err.param(), Some("alias"));
    }
}
