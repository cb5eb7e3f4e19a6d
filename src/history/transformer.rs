use url::Url;

use crate::error::HistoryError;

const RESOLVE_BASE: &str = "http://localhost/";

/// The parts of a browser location the history cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Path component, starting with `/`.
    pub pathname: String,
    /// Query string including its leading `?`, or empty.
    pub search: String,
    /// Fragment including its leading `#`, or empty.
    pub hash: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
            hash: String::new(),
        }
    }

    /// Parses an absolute URL.
    ///
    /// ```
    /// use ruler::history::Location;
    ///
    /// let loc = Location::parse("https://example.com/app/workspace?page=2#grid").unwrap();
    /// assert_eq!(loc.pathname, "/app/workspace");
    /// assert_eq!(loc.search, "?page=2");
    /// assert_eq!(loc.hash, "#grid");
    /// ```
    pub fn parse(input: &str) -> Result<Self, HistoryError> {
        Ok(Self::from_url(&Url::parse(input)?))
    }

    /// Resolves a relative reference such as `/app/view?x=1#top`.
    ///
    /// The reference is resolved against the site root, so the result is
    /// normalised the way a browser would: dot segments collapse and
    /// characters outside the URL grammar are percent-encoded.
    ///
    /// ```
    /// use ruler::history::Location;
    ///
    /// let loc = Location::from_path("/app/./view?x=1#top").unwrap();
    /// assert_eq!(loc.pathname, "/app/view");
    /// assert_eq!(loc.search, "?x=1");
    /// assert_eq!(loc.hash, "#top");
    /// ```
    pub fn from_path(path: &str) -> Result<Self, HistoryError> {
        let base = Url::parse(RESOLVE_BASE)?;
        Ok(Self::from_url(&base.join(path)?))
    }

    fn from_url(url: &Url) -> Self {
        // An empty query or fragment reads back as "", not "?" or "#".
        let prefixed = |sigil: char, part: Option<&str>| match part {
            Some(p) if !p.is_empty() => format!("{sigil}{p}"),
            _ => String::new(),
        };
        Self {
            pathname: url.path().to_string(),
            search: prefixed('?', url.query()),
            hash: prefixed('#', url.fragment()),
        }
    }

    /// The fragment without its leading `#`.
    pub fn fragment(&self) -> &str {
        self.hash.strip_prefix('#').unwrap_or(&self.hash)
    }

    /// Path, query and fragment joined back into a relative reference.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// Converts between locations and navigation tokens.
pub trait TokenTransformer {
    /// Extracts the token that `location` represents.
    fn retrieve_token(&self, path_prefix: &str, location: &Location) -> String;

    /// Builds the path that represents `token`.
    fn create_url(&self, token: &str, path_prefix: &str, location: &Location) -> String;
}

/// Token = the path after a fixed prefix, followed by the query string.
///
/// ```
/// use ruler::history::{Location, PrefixTokenTransformer, TokenTransformer};
///
/// let loc = Location::new("/app/workspace/1", "?page=2");
/// let token = PrefixTokenTransformer.retrieve_token("/app", &loc);
/// assert_eq!(token, "/workspace/1?page=2");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixTokenTransformer;

impl TokenTransformer for PrefixTokenTransformer {
    fn retrieve_token(&self, path_prefix: &str, location: &Location) -> String {
        // Drops as many UTF-16 code units as the prefix has, whether or not
        // they match. A surrogate pair split by the cut decodes to U+FFFD.
        let skip = path_prefix.encode_utf16().count();
        let rest: Vec<u16> = location.pathname.encode_utf16().skip(skip).collect();
        let mut token = String::from_utf16_lossy(&rest);
        token.push_str(&location.search);
        token
    }

    fn create_url(&self, token: &str, path_prefix: &str, _location: &Location) -> String {
        format!("{path_prefix}{token}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieve_token_strips_prefix_and_keeps_query() {
        let loc = Location::new("/app/workspace/1", "?page=2");
        assert_eq!(
            PrefixTokenTransformer.retrieve_token("/app", &loc),
            "/workspace/1?page=2"
        );
    }

    #[test]
    fn test_retrieve_token_without_query() {
        let loc = Location::new("/dashboard", "");
        assert_eq!(PrefixTokenTransformer.retrieve_token("/", &loc), "dashboard");
    }

    #[test]
    fn test_retrieve_token_short_path() {
        let loc = Location::new("/a", "?q=1");
        assert_eq!(PrefixTokenTransformer.retrieve_token("/app/", &loc), "?q=1");
    }

    #[test]
    fn test_create_url_prepends_prefix() {
        let url = PrefixTokenTransformer.create_url("projects", "/app/", &Location::default());
        assert_eq!(url, "/app/projects");
    }

    #[test]
    fn test_retrieve_token_counts_utf16_units() {
        // "/\u{1F600}" is three UTF-16 units but two chars
        let loc = Location::new("/abc/d", "");
        assert_eq!(PrefixTokenTransformer.retrieve_token("/\u{1F600}", &loc), "c/d");

        let loc = Location::new("/\u{1F600}/x", "?y");
        assert_eq!(PrefixTokenTransformer.retrieve_token("/\u{1F600}", &loc), "/x?y");
    }

    #[test]
    fn test_retrieve_token_splitting_surrogate_pair() {
        let loc = Location::new("/\u{1F600}rest", "");
        assert_eq!(PrefixTokenTransformer.retrieve_token("//", &loc), "\u{FFFD}rest");
    }

    #[test]
    fn test_from_path_splits_parts() {
        let loc = Location::from_path("/app/view?x=1#top").unwrap();
        assert_eq!(loc.pathname, "/app/view");
        assert_eq!(loc.search, "?x=1");
        assert_eq!(loc.hash, "#top");
        assert_eq!(loc.fragment(), "top");
        assert_eq!(loc.href(), "/app/view?x=1#top");
    }

    #[test]
    fn test_from_path_fragment_may_contain_question_mark() {
        let loc = Location::from_path("/p#a?b").unwrap();
        assert_eq!(loc.pathname, "/p");
        assert_eq!(loc.search, "");
        assert_eq!(loc.hash, "#a?b");
    }

    #[test]
    fn test_from_path_normalises_like_a_browser() {
        let loc = Location::from_path("/app/../docs/a b?#").unwrap();
        assert_eq!(loc.pathname, "/docs/a%20b");
        assert_eq!(loc.search, "");
        assert_eq!(loc.hash, "");

        let loc = Location::from_path("relative/page").unwrap();
        assert_eq!(loc.pathname, "/relative/page");
    }

    #[test]
    fn test_parse_rejects_relative_urls() {
        assert!(matches!(
            Location::parse("/relative/only"),
            Err(HistoryError::InvalidUrl(_))
        ));
    }
}
