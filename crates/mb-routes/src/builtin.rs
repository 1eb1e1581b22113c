//! Built-in application route table.

use crate::route::RouteNode;
use crate::tree::{RouteTree, RouteTreeError};

/// Route table of the management application.
///
/// # Errors
///
/// Returns a [`RouteTreeError`] if the table is malformed.
pub fn app_routes() -> Result<RouteTree, RouteTreeError> {
    RouteTree::new(vec![
        RouteNode::new("/", "home")
            .with_label("Home")
            .with_icon("home"),
        RouteNode::new("/projects", "projects")
            .with_label("Projects")
            .with_crumb_title("Projects")
            .with_icon("diagram-project")
            .with_child(
                RouteNode::new("add", "projects.add")
                    .with_label("+ Add")
                    .with_crumb_title("+ Add")
                    .in_menu(),
            )
            .with_child(
                RouteNode::new(":projectID", "projects.view").with_child(
                    RouteNode::new("docs", "projects.view.docs")
                        .with_crumb_title("Docs")
                        .with_child(RouteNode::new("*", "projects.view.docs.page")),
                ),
            ),
        RouteNode::new("/integrations", "integrations")
            .with_label("Integrations")
            .with_crumb_title("Integrations")
            .with_icon("code-branch")
            .with_child(
                RouteNode::new("add", "integrations.add")
                    .with_label("+ Add")
                    .with_crumb_title("+ Add")
                    .in_menu(),
            ),
        RouteNode::new("/settings", "settings")
            .with_label("Settings")
            .with_crumb_title("Settings")
            .with_icon("cog"),
        RouteNode::new("/help", "help")
            .with_label("Help?")
            .with_crumb_title("Help")
            .with_icon("question")
            .with_child(
                RouteNode::new("openapi", "help.openapi")
                    .with_label("OpenAPI Spec")
                    .in_menu(),
            ),
    ])
}
