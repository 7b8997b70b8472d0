//! HTTP method tags.
//!
//! Dispatch works over a closed set of six methods. Rather than indexing a
//! table by free-form strings, the raw token is folded into an enum up
//! front: one variant per supported method, plus an explicit
//! [`Method::Unrecognized`] catch-all that feeds the fallback path.

use crate::error::UnknownMethod;
use std::fmt;
use std::str::FromStr;

/// A tag identifying which dispatch slot an incoming request targets.
///
/// The six named variants are the closed set of supported methods; anything
/// else a transport produces — including tokens with surrounding whitespace,
/// since no trimming is applied — is [`Method::Unrecognized`] and routes to
/// fallback handling. An unsupported method is therefore never an error at
/// the dispatch layer.
///
/// # Case Handling
///
/// Method tokens are matched case-insensitively (`GET`, `get`, and `gEt`
/// all tag as [`Method::Get`]); the lowercase form is the canonical lookup
/// key, available via [`Method::as_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// HTTP `GET`.
    Get,
    /// HTTP `POST`.
    Post,
    /// HTTP `PATCH`.
    Patch,
    /// HTTP `PUT`.
    Put,
    /// HTTP `DELETE`.
    Delete,
    /// HTTP `OPTIONS`.
    Options,
    /// A present-but-unsupported method token.
    ///
    /// Always routes to fallback handling; it has no dispatch slot and no
    /// canonical token.
    Unrecognized,
}

impl Method {
    /// The six supported methods, in declaration order.
    pub const KNOWN: [Method; 6] = [
        Method::Get,
        Method::Post,
        Method::Patch,
        Method::Put,
        Method::Delete,
        Method::Options,
    ];

    /// Tag a raw method token from a request.
    ///
    /// Matching is ASCII case-insensitive and total: any token outside the
    /// closed set folds into [`Method::Unrecognized`] instead of failing.
    /// No trimming or other normalization is applied.
    #[must_use]
    pub fn from_token(token: &str) -> Method {
        Self::KNOWN
            .into_iter()
            .find(|m| {
                m.as_token()
                    .is_some_and(|key| token.eq_ignore_ascii_case(key))
            })
            .unwrap_or(Method::Unrecognized)
    }

    /// The canonical lowercase lookup key, or `None` for
    /// [`Method::Unrecognized`].
    #[must_use]
    pub const fn as_token(&self) -> Option<&'static str> {
        match self {
            Method::Get => Some("get"),
            Method::Post => Some("post"),
            Method::Patch => Some("patch"),
            Method::Put => Some("put"),
            Method::Delete => Some("delete"),
            Method::Options => Some("options"),
            Method::Unrecognized => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token().unwrap_or("unrecognized"))
    }
}

/// Strict parser for callers that want an unsupported token surfaced as an
/// error instead of folded into the catch-all.
impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Method::from_token(s) {
            Method::Unrecognized => Err(UnknownMethod(s.to_string())),
            method => Ok(method),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Method, UnknownMethod};

    #[test]
    fn test_from_token_is_case_insensitive() {
        for token in ["GET", "get", "Get", "gEt"] {
            assert_eq!(Method::from_token(token), Method::Get);
        }
        assert_eq!(Method::from_token("dElEtE"), Method::Delete);
    }

    #[test]
    fn test_from_token_covers_the_closed_set() {
        for method in Method::KNOWN {
            let token = method.as_token().unwrap();
            assert_eq!(Method::from_token(token), method);
            assert_eq!(Method::from_token(&token.to_uppercase()), method);
        }
    }

    #[test]
    fn test_unsupported_tokens_are_unrecognized() {
        assert_eq!(Method::from_token("trace"), Method::Unrecognized);
        assert_eq!(Method::from_token("HEAD"), Method::Unrecognized);
        assert_eq!(Method::from_token(""), Method::Unrecognized);
        // The user fallback slot name is not a method token
        assert_eq!(Method::from_token("fallback"), Method::Unrecognized);
    }

    #[test]
    fn test_no_trimming_is_applied() {
        assert_eq!(Method::from_token(" get"), Method::Unrecognized);
        assert_eq!(Method::from_token("get "), Method::Unrecognized);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("PUT".parse::<Method>(), Ok(Method::Put));
        assert_eq!(
            "brew".parse::<Method>(),
            Err(UnknownMethod("brew".to_string()))
        );
    }

    #[test]
    fn test_display_uses_canonical_token() {
        assert_eq!(Method::Options.to_string(), "options");
        assert_eq!(Method::Unrecognized.to_string(), "unrecognized");
    }
}
