//! Path segment matching.
//!
//! A [`Segment`] is the data-only replacement for a per-route breadcrumb
//! closure. Each variant has a fixed matching rule and a fixed way of turning
//! the matched text into [`Breadcrumb`]s.
//!
//! # Source Form
//!
//! Route tables spell segments as strings:
//!
//! - `"projects"` or `"/projects"` - literal (leading slash is stripped)
//! - `"/"` - empty literal, the home route
//! - `":projectID"` - parameter capturing one non-empty part
//! - `"*"` or `"/*"` - catch-all for the remaining path

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Source form of the catch-all segment.
pub const CATCH_ALL: &str = "*";

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Absolute link target path (always starts with `/`).
    pub path: String,
    /// Display title.
    pub title: String,
}

impl Breadcrumb {
    /// Create a breadcrumb one level below `previous`.
    ///
    /// Without a previous breadcrumb the path is rooted at `/`.
    fn below(previous: Option<&Breadcrumb>, part: &str, title: impl Into<String>) -> Self {
        let base = previous.map_or("", |crumb| crumb.path.as_str());
        Self {
            path: format!("{base}/{part}"),
            title: title.into(),
        }
    }
}

/// How a route node matches a URL path part.
///
/// Serialized in its source form (see module docs).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Segment {
    /// Exact match against a fixed text. Empty text is the home route.
    Literal(String),
    /// Any single non-empty part, captured under the given name.
    Param(String),
    /// The whole remaining path, one breadcrumb per part.
    CatchAll,
}

impl Segment {
    /// Whether this segment consumes the remainder of the path.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll)
    }

    /// Literal text, if this is a literal segment.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            Self::Param(_) | Self::CatchAll => None,
        }
    }

    /// Test `text` against this segment and build the breadcrumbs it contributes.
    ///
    /// For [`Segment::CatchAll`] `text` is the joined remainder of the path;
    /// for the other variants it is a single part.
    ///
    /// # Arguments
    ///
    /// * `text` - Path text to test
    /// * `crumb_title` - Title override for literal segments
    /// * `previous` - The breadcrumb immediately before this one, if any
    ///
    /// # Returns
    ///
    /// `None` if the text does not identify this segment.
    #[must_use]
    pub fn breadcrumbs(
        &self,
        text: &str,
        crumb_title: Option<&str>,
        previous: Option<&Breadcrumb>,
    ) -> Option<Vec<Breadcrumb>> {
        match self {
            Self::Literal(expected) => (!expected.is_empty() && expected == text).then(|| {
                vec![Breadcrumb::below(previous, text, crumb_title.unwrap_or(text))]
            }),
            Self::Param(_) => {
                (!text.is_empty()).then(|| vec![Breadcrumb::below(previous, text, text)])
            }
            Self::CatchAll => {
                let mut crumbs: Vec<Breadcrumb> = Vec::new();
                for part in text.split('/').filter(|p| !p.is_empty()) {
                    let crumb = Breadcrumb::below(crumbs.last().or(previous), part, part);
                    crumbs.push(crumb);
                }
                (!crumbs.is_empty()).then_some(crumbs)
            }
        }
    }
}

impl FromStr for Segment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('/').unwrap_or(s);
        Ok(if s == CATCH_ALL {
            Self::CatchAll
        } else if let Some(name) = s.strip_prefix(':') {
            Self::Param(name.to_owned())
        } else {
            Self::Literal(s.to_owned())
        })
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        let Ok(segment) = s.parse::<Self>();
        segment
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Segment> for String {
    fn from(segment: Segment) -> Self {
        segment.to_string()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Param(name) => write!(f, ":{name}"),
            Self::CatchAll => f.write_str(CATCH_ALL),
        }
    }
}
