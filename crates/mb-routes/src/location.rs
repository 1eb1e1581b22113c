//! Current navigation location.

/// Location supplied by the host on every navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pathname: String,
}

impl Location {
    /// Create a location from a bare pathname.
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }

    /// Create a location from a URL path that may carry a query or fragment.
    ///
    /// Everything from the first `?` or `#` onwards is dropped.
    #[must_use]
    pub fn parse(url_path: &str) -> Self {
        let end = url_path.find(['?', '#']).unwrap_or(url_path.len());
        Self::new(&url_path[..end])
    }

    /// Path component of the location (e.g., "/projects/42").
    #[must_use]
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Non-empty `/`-separated parts of the pathname.
    #[must_use]
    pub fn parts(&self) -> Vec<&str> {
        self.pathname.split('/').filter(|p| !p.is_empty()).collect()
    }
}

impl From<&str> for Location {
    fn from(url_path: &str) -> Self {
        Self::parse(url_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_skip_empty_segments() {
        let location = Location::new("//projects///42/");

        assert_eq!(location.parts(), vec!["projects", "42"]);
    }

    #[test]
    fn test_parts_of_root_are_empty() {
        assert!(Location::new("/").parts().is_empty());
        assert!(Location::new("").parts().is_empty());
    }

    #[test]
    fn test_parse_drops_query_and_fragment() {
        assert_eq!(Location::parse("/projects?page=2").pathname(), "/projects");
        assert_eq!(Location::parse("/help#top").pathname(), "/help");
        assert_eq!(Location::parse("/a/b#x?y").pathname(), "/a/b");
    }

    #[test]
    fn test_new_keeps_pathname_verbatim() {
        assert_eq!(Location::new("/a?b").pathname(), "/a?b");
    }
}
