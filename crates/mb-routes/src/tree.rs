//! Validated route tree and breadcrumb resolution.
//!
//! [`RouteTree`] is built once and never mutated. Every query is a pure
//! function of the tree and a [`Location`].
//!
//! # Resolution
//!
//! Path parts are consumed one per tree level. At each level children are
//! tried in declaration order:
//!
//! - A catch-all child receives the whole remaining path and always ends
//!   resolution, whether it matched or not.
//! - Any other child receives the current part. On a match its breadcrumbs
//!   are appended and resolution continues in its children.
//! - When no child matches, the trail collected so far is returned.
//!
//! Unmatched trailing parts are dropped silently; the trail is best effort.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::location::Location;
use crate::route::RouteNode;
use crate::segment::{Breadcrumb, Segment};

/// Name used for the top level in validation errors.
const ROOT_LEVEL: &str = "<root>";

/// Error returned when a route table is malformed.
#[derive(Debug, thiserror::Error)]
pub enum RouteTreeError {
    /// More than one catch-all route in one children list.
    #[error("Multiple catch-all routes under {0}")]
    MultipleCatchAll(String),
    /// Catch-all route followed by siblings that could never match.
    #[error("Catch-all route {0} must be the last of its siblings")]
    CatchAllNotLast(String),
    /// Catch-all route with children that could never match.
    #[error("Catch-all route {0} cannot have children")]
    CatchAllWithChildren(String),
    /// Route without a name.
    #[error("Route with segment '{0}' has an empty name")]
    EmptyName(String),
    /// Route name used more than once.
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),
    /// Child route name not nested under its parent's name.
    #[error("Route name {name} must start with '{parent}.'")]
    NamePrefix {
        /// Offending child name.
        name: String,
        /// Parent route name.
        parent: String,
    },
    /// Segment that no single path part can match.
    #[error("Route {name} has invalid segment '{segment}': {reason}")]
    InvalidSegment {
        /// Offending route name.
        name: String,
        /// Segment in source form.
        segment: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// Home route (empty literal) below the top level.
    #[error("Route {0} has an empty segment but is not a top-level route")]
    NestedHome(String),
    /// Route table file not found.
    #[error("Route table not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading a route table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Route table as stored on disk.
#[derive(Debug, Deserialize)]
struct RouteTable {
    #[serde(default)]
    routes: Vec<RouteNode>,
}

/// Validated, immutable route hierarchy.
#[derive(Clone, Debug)]
pub struct RouteTree {
    routes: Vec<RouteNode>,
}

impl RouteTree {
    /// Validate top-level routes and build the tree.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteTreeError`] describing the first violation found:
    /// misplaced or repeated catch-all routes, catch-all routes with
    /// children, empty, duplicate or badly nested names, or a home route
    /// below the top level.
    pub fn new(routes: Vec<RouteNode>) -> Result<Self, RouteTreeError> {
        let mut names = HashSet::new();
        validate_level(&routes, None, &mut names)?;

        tracing::debug!(routes = names.len(), "Route tree built");

        Ok(Self { routes })
    }

    /// Parse and validate a TOML route table.
    ///
    /// The table is a list of `[[routes]]` with nested `[[routes.children]]`.
    ///
    /// # Errors
    ///
    /// Returns `RouteTreeError::Parse` for invalid TOML and the validation
    /// errors of [`RouteTree::new`].
    pub fn from_toml_str(content: &str) -> Result<Self, RouteTreeError> {
        let table: RouteTable = toml::from_str(content)?;
        Self::new(table.routes)
    }

    /// Load and validate a TOML route table from a file.
    ///
    /// # Errors
    ///
    /// Returns `RouteTreeError::NotFound` if the file does not exist, and the
    /// errors of [`RouteTree::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, RouteTreeError> {
        if !path.exists() {
            return Err(RouteTreeError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading route table");
        Self::from_toml_str(&content)
    }

    /// Top-level routes in declaration order.
    #[must_use]
    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    /// Find a route by its dotted name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&RouteNode> {
        fn find_in<'a>(nodes: &'a [RouteNode], name: &str) -> Option<&'a RouteNode> {
            nodes.iter().find_map(|node| {
                if node.name == name {
                    Some(node)
                } else {
                    find_in(&node.children, name)
                }
            })
        }

        find_in(&self.routes, name)
    }

    /// Build the breadcrumb trail for a location.
    ///
    /// A location without path parts (e.g., "/") yields an empty trail.
    ///
    /// # Arguments
    ///
    /// * `location` - Current location
    ///
    /// # Returns
    ///
    /// Breadcrumbs from the top-level route down to the deepest match.
    #[must_use]
    pub fn resolve_breadcrumbs(&self, location: &Location) -> Vec<Breadcrumb> {
        let parts = location.parts();
        let mut trail = Vec::new();
        collect_breadcrumbs(&self.routes, &parts, 0, &mut trail);
        trail
    }

    /// Name of the top-level route the location belongs to.
    ///
    /// See [`find_active_top_level_route`].
    #[must_use]
    pub fn active_top_level(&self, location: &Location) -> Option<&str> {
        find_active_top_level_route(&self.routes, location)
    }
}

/// Name of the top-level route whose literal segment equals the first path part.
///
/// One leading `/` is stripped before splitting, so `"/"` selects the home
/// route (empty literal). Parameter and catch-all routes never match.
#[must_use]
pub fn find_active_top_level_route<'a>(
    routes: &'a [RouteNode],
    location: &Location,
) -> Option<&'a str> {
    let pathname = location.pathname();
    let trimmed = pathname.strip_prefix('/').unwrap_or(pathname);
    let first = trimmed.split('/').next().unwrap_or_default();

    routes
        .iter()
        .find(|route| route.segment.literal() == Some(first))
        .map(|route| route.name.as_str())
}

/// Walk one tree level, consuming `parts[offset]`.
fn collect_breadcrumbs(
    nodes: &[RouteNode],
    parts: &[&str],
    offset: usize,
    trail: &mut Vec<Breadcrumb>,
) {
    let Some(&part) = parts.get(offset) else {
        return;
    };

    for node in nodes {
        if node.segment.is_catch_all() {
            let remainder = parts[offset..].join("/");
            if let Some(crumbs) = node.breadcrumbs(&remainder, trail.last()) {
                trail.extend(crumbs);
            }
            return;
        }

        if let Some(crumbs) = node.breadcrumbs(part, trail.last()) {
            trail.extend(crumbs);
            collect_breadcrumbs(&node.children, parts, offset + 1, trail);
            return;
        }
    }
}

/// Validate one children list and recurse into each child.
fn validate_level(
    nodes: &[RouteNode],
    parent: Option<&str>,
    names: &mut HashSet<String>,
) -> Result<(), RouteTreeError> {
    let level = parent.unwrap_or(ROOT_LEVEL);

    let catch_alls = nodes.iter().filter(|n| n.segment.is_catch_all()).count();
    if catch_alls > 1 {
        return Err(RouteTreeError::MultipleCatchAll(level.to_owned()));
    }

    for (i, node) in nodes.iter().enumerate() {
        let is_last = i + 1 == nodes.len();

        if node.name.is_empty() {
            return Err(RouteTreeError::EmptyName(node.segment.to_string()));
        }
        if !names.insert(node.name.clone()) {
            return Err(RouteTreeError::DuplicateName(node.name.clone()));
        }
        if let Some(parent) = parent {
            let nested = node
                .name
                .strip_prefix(parent)
                .is_some_and(|rest| rest.len() > 1 && rest.starts_with('.'));
            if !nested {
                return Err(RouteTreeError::NamePrefix {
                    name: node.name.clone(),
                    parent: parent.to_owned(),
                });
            }
            if node.segment.literal() == Some("") {
                return Err(RouteTreeError::NestedHome(node.name.clone()));
            }
        }

        let invalid = |reason| RouteTreeError::InvalidSegment {
            name: node.name.clone(),
            segment: node.segment.to_string(),
            reason,
        };
        match &node.segment {
            Segment::Literal(text) if text.contains('/') => {
                return Err(invalid("literal segments cannot contain '/'"));
            }
            Segment::Param(param) if param.is_empty() => {
                return Err(invalid("parameter name cannot be empty"));
            }
            Segment::Param(param) if param.contains('/') => {
                return Err(invalid("parameter name cannot contain '/'"));
            }
            Segment::CatchAll => {
                if !is_last {
                    return Err(RouteTreeError::CatchAllNotLast(node.name.clone()));
                }
                if !node.children.is_empty() {
                    return Err(RouteTreeError::CatchAllWithChildren(node.name.clone()));
                }
            }
            Segment::Param(param) if !is_last => {
                tracing::warn!(
                    route = %node.name,
                    param = %param,
                    "Parameter route shadows the siblings declared after it"
                );
            }
            Segment::Param(_) | Segment::Literal(_) => {}
        }

        validate_level(&node.children, Some(&node.name), names)?;
    }

    Ok(())
}
