//! Base URL handling for history-mode navigation.
//!
//! The application may be deployed under a prefix (for example `/app/`). Route
//! paths never carry that prefix: it is stripped from browser locations before
//! resolving and added back when building URLs.

use std::fmt;

/// Normalized deployment prefix.
///
/// Always starts with `/` and never ends with one; the root base is stored as
/// the empty string so that joining never produces `//`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base(String);

impl Base {
    /// Normalizes `raw` into a base.
    ///
    /// `""`, `"/"` and `"app/"` become `""`, `""` and `"/app"`.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Self::default();
        }

        let mut base = String::with_capacity(trimmed.len() + 1);

        if !trimmed.starts_with('/') {
            base.push('/');
        }

        base.push_str(trimmed);

        Self(base.trim_end_matches('/').to_owned())
    }

    /// The normalized prefix, empty for the root base.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Removes the base from a browser location.
    ///
    /// The prefix comparison ignores ASCII case. Locations outside the base are
    /// returned unchanged, and a location equal to the base maps to `/`.
    pub fn strip(&self, location: &str) -> String {
        let base = self.0.as_str();

        let rest = match location.get(..base.len()) {
            Some(prefix) if !base.is_empty() && prefix.eq_ignore_ascii_case(base) => {
                &location[base.len()..]
            }
            _ => return location.to_owned(),
        };

        // "/application" must not be treated as "/app" + "lication"
        match rest.chars().next() {
            None => "/".to_owned(),
            Some('/') => rest.to_owned(),
            Some('?' | '#') => format!("/{rest}"),
            Some(_) => location.to_owned(),
        }
    }

    /// Prepends the base to a route path.
    pub fn href(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.0)
        } else {
            format!("{}/{path}", self.0)
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("/")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(Base::new("").as_str(), "");
        assert_eq!(Base::new("/").as_str(), "");
        assert_eq!(Base::new("/app/").as_str(), "/app");
        assert_eq!(Base::new("app").as_str(), "/app");
        assert_eq!(Base::new(" /nested/app// ").as_str(), "/nested/app");
    }

    #[test]
    fn test_strip() {
        let root = Base::new("/");
        assert_eq!(root.strip("/cube"), "/cube");
        assert_eq!(root.strip("/"), "/");

        let app = Base::new("/app/");
        assert_eq!(app.strip("/app"), "/");
        assert_eq!(app.strip("/app/"), "/");
        assert_eq!(app.strip("/app/cube"), "/cube");
        assert_eq!(app.strip("/APP/cube"), "/cube");
        assert_eq!(app.strip("/app?x=1"), "/?x=1");
        assert_eq!(app.strip("/application"), "/application");
        assert_eq!(app.strip("/other"), "/other");
    }

    #[test]
    fn test_href() {
        assert_eq!(Base::new("/").href("/"), "/");
        assert_eq!(Base::new("/").href("/cube"), "/cube");
        assert_eq!(Base::new("/app").href("/"), "/app/");
        assert_eq!(Base::new("/app").href("/cube"), "/app/cube");
        assert_eq!(Base::new("/app").href("cube"), "/app/cube");
    }

    #[test]
    fn test_display() {
        assert_eq!(Base::new("").to_string(), "/");
        assert_eq!(Base::new("/app/").to_string(), "/app");
    }
}
