//! Route definitions.

use serde::{Deserialize, Serialize};

use crate::segment::{Breadcrumb, Segment};

/// One node in the navigation hierarchy.
///
/// Nodes own their children exclusively. A tree of nodes only becomes usable
/// for resolution once it has been validated by [`RouteTree::new`](crate::RouteTree::new).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Segment matched against the URL path.
    pub segment: Segment,
    /// Hierarchical dotted identifier (e.g., "projects.view.docs").
    pub name: String,
    /// Label shown in menus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Breadcrumb title for literal segments. Defaults to the matched part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crumb_title: Option<String>,
    /// Opaque icon reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether this node is listed under its parent in the menu.
    #[serde(default)]
    pub visible_in_menu: bool,
    /// Child routes, in evaluation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// Create a route with no label, icon or children.
    ///
    /// # Arguments
    ///
    /// * `segment` - Segment in source form (e.g., "/projects", ":projectID", "*")
    /// * `name` - Dotted route name
    #[must_use]
    pub fn new(segment: &str, name: &str) -> Self {
        Self {
            segment: Segment::from(segment),
            name: name.to_owned(),
            label: None,
            crumb_title: None,
            icon: None,
            visible_in_menu: false,
            children: Vec::new(),
        }
    }

    /// Set the menu label.
    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    /// Set the breadcrumb title.
    #[must_use]
    pub fn with_crumb_title(mut self, title: &str) -> Self {
        self.crumb_title = Some(title.to_owned());
        self
    }

    /// Set the icon reference.
    #[must_use]
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_owned());
        self
    }

    /// List this node in its parent's menu.
    #[must_use]
    pub fn in_menu(mut self) -> Self {
        self.visible_in_menu = true;
        self
    }

    /// Append a child route.
    #[must_use]
    pub fn with_child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }

    /// Test path text against this node.
    ///
    /// Returns the breadcrumbs this node contributes, or `None` on no match.
    #[must_use]
    pub fn breadcrumbs(
        &self,
        text: &str,
        previous: Option<&Breadcrumb>,
    ) -> Option<Vec<Breadcrumb>> {
        self.segment.breadcrumbs(text, self.crumb_title.as_deref(), previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parses_segment() {
        let node = RouteNode::new("/projects", "projects");

        assert_eq!(node.segment, Segment::Literal("projects".to_owned()));
        assert_eq!(node.name, "projects");
        assert!(!node.visible_in_menu);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_builder_sets_fields() {
        let node = RouteNode::new("add", "projects.add")
            .with_label("+ Add")
            .with_crumb_title("+ Add")
            .with_icon("plus")
            .in_menu();

        assert_eq!(node.label.as_deref(), Some("+ Add"));
        assert_eq!(node.crumb_title.as_deref(), Some("+ Add"));
        assert_eq!(node.icon.as_deref(), Some("plus"));
        assert!(node.visible_in_menu);
    }

    #[test]
    fn test_breadcrumbs_uses_crumb_title() {
        let node = RouteNode::new("/settings", "settings").with_crumb_title("Settings");

        let crumbs = node.breadcrumbs("settings", None).unwrap();

        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].path, "/settings");
        assert_eq!(crumbs[0].title, "Settings");
    }

    #[test]
    fn test_serialization_uses_source_form() {
        let node = RouteNode::new(":projectID", "projects.view");

        let json = serde_json::to_string(&node).unwrap();

        assert_eq!(
            json,
            r#"{"segment":":projectID","name":"projects.view","visible_in_menu":false}"#
        );
    }

    #[test]
    fn test_deserialization_defaults() {
        let json = r#"{"segment":"*","name":"docs.page"}"#;

        let node: RouteNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.segment, Segment::CatchAll);
        assert!(node.label.is_none());
        assert!(!node.visible_in_menu);
        assert!(node.children.is_empty());
    }
}
