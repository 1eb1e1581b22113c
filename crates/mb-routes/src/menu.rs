//! Navigation menu model.
//!
//! The menu lists every top-level route. Children are listed only when marked
//! [`visible_in_menu`](crate::RouteNode::visible_in_menu), which keeps dynamic
//! detail pages (project views, documentation pages) out of primary
//! navigation. The top-level section of the current location is expanded.

use serde::Serialize;

use crate::location::Location;
use crate::route::RouteNode;
use crate::tree::RouteTree;

/// Title used for routes without a label.
const UNKNOWN_TITLE: &str = "unknown";

/// Menu entry with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Route name.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Link target path.
    pub path: String,
    /// Icon reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the children of this item are shown expanded.
    pub expanded: bool,
    /// Child menu items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    fn from_route(route: &RouteNode, path: String, expanded: bool) -> Self {
        let children = route
            .children
            .iter()
            .filter(|child| child.visible_in_menu)
            .map(|child| Self::from_route(child, format!("{path}/{}", child.segment), false))
            .collect();

        Self {
            name: route.name.clone(),
            title: route
                .label
                .clone()
                .unwrap_or_else(|| UNKNOWN_TITLE.to_owned()),
            path,
            icon: route.icon.clone(),
            expanded,
            children,
        }
    }
}

impl RouteTree {
    /// Build the menu for a location.
    ///
    /// # Arguments
    ///
    /// * `location` - Current location, used to expand the active section
    #[must_use]
    pub fn menu(&self, location: &Location) -> Vec<MenuItem> {
        let active = self.active_top_level(location);

        self.routes()
            .iter()
            .map(|route| {
                let expanded = active == Some(route.name.as_str());
                MenuItem::from_route(route, format!("/{}", route.segment), expanded)
            })
            .collect()
    }
}
