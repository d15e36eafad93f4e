//! Plain-text response classification.
//!
//! The shortening service has no structured error envelope: failures arrive
//! as free text, and a successful HTTP status does not guarantee a successful
//! shortening. Every textual heuristic lives here and nowhere else.

/// Canonical host prefix every short link starts with.
pub(crate) const SHORT_URL_PREFIX: &str = "https://tinyurl.com/";

/// Outcome of classifying a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Classified {
    /// The trimmed body is the short link.
    Success(String),
    /// The body signals a service-side failure; carries the error message.
    Failure(String),
}

/// Classifies the plain-text body of an HTTP-successful response.
///
/// A body is flagged as a failure when it starts with the literal token
/// `Error` (ASCII case-insensitive), contains the substring `Invalid`, or
/// does not start with [`SHORT_URL_PREFIX`].
pub(crate) fn classify(body: &str) -> Classified {
    let trimmed = body.trim();

    if trimmed.is_empty() {
        return Classified::Failure("service returned an empty response".to_string());
    }

    let flagged = starts_with_error(trimmed)
        || trimmed.contains("Invalid")
        || !trimmed.starts_with(SHORT_URL_PREFIX);

    if flagged {
        Classified::Failure(format!("service returned an error: {trimmed}"))
    } else {
        Classified::Success(trimmed.to_string())
    }
}

fn starts_with_error(body: &str) -> bool {
    body.get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("Error"))
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::plain("https://tinyurl.com/abc123")]
    #[case::alias("https://tinyurl.com/myalias")]
    fn short_links_classify_as_success(#[case] body: &str) {
        assert_eq!(classify(body), Classified::Success(body.to_string()));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            classify("  https://tinyurl.com/abc123\n"),
            Classified::Success("https://tinyurl.com/abc123".to_string())
        );
    }

    #[rstest]
    #[case::error_token("Error: Alias already taken")]
    #[case::error_lowercase("error: nope")]
    #[case::error_uppercase("ERROR")]
    #[case::contains_invalid("Invalid URL supplied")]
    #[case::foreign_host("https://example.com/abc123")]
    #[case::plain_http("http://tinyurl.com/abc123")]
    #[case::truncated("Err")]
    #[case::multibyte_prefix("Érror: boom")]
    fn flagged_bodies_classify_as_failure(#[case] body: &str) {
        assert_eq!(
            classify(body),
            Classified::Failure(format!("service returned an error: {}", body.trim()))
        );
    }

    // The heuristic is substring-based on purpose: a short link whose suffix
    // happens to contain "Invalid" is reported as a service error. This
    // mirrors the unstructured upstream contract.
    #[test]
    fn short_link_containing_invalid_is_flagged() {
        let body = "https://tinyurl.com/InvalidName";
        assert_eq!(
            classify(body),
            Classified::Failure(format!("service returned an error: {body}"))
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   \n\t")]
    fn empty_bodies_classify_as_failure(#[case] body: &str) {
        assert_eq!(
            classify(body),
            Classified::Failure("service returned an empty response".to_string())
        );
    }
}
