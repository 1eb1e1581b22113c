//! `mb routes` command implementation.

use clap::Args;
use mb_routes::RouteNode;

use super::{CommonArgs, load_routes};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Dotted name of the route to list (default: the whole tree).
    name: Option<String>,

    /// Print the tree as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl RoutesArgs {
    /// Execute the routes command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the route table fails to load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config()?;
        let tree = load_routes(&config)?;

        let routes = match &self.name {
            Some(name) => std::slice::from_ref(
                tree.find(name)
                    .ok_or_else(|| CliError::UnknownRoute(name.clone()))?,
            ),
            None => tree.routes(),
        };

        if self.json {
            output.result(&serde_json::to_string_pretty(routes)?)?;
            return Ok(());
        }

        output.highlight(&format!("{} routes", routes.len()));
        for line in render_routes(routes) {
            output.result(&line)?;
        }

        Ok(())
    }
}

/// One line per route: pattern, then dotted name.
///
/// Patterns are relative to the listed routes, so a subtree listing starts at
/// its own segment.
fn render_routes(routes: &[RouteNode]) -> Vec<String> {
    fn walk(nodes: &[RouteNode], parent: &str, depth: usize, lines: &mut Vec<String>) {
        for node in nodes {
            let pattern = if parent.is_empty() && node.segment.literal() == Some("") {
                "/".to_owned()
            } else {
                format!("{parent}/{}", node.segment)
            };
            let menu = if node.visible_in_menu { " [menu]" } else { "" };
            lines.push(format!(
                "{:indent$}{pattern:<32} {}{menu}",
                "",
                node.name,
                indent = depth * 2
            ));
            walk(&node.children, &pattern, depth + 1, lines);
        }
    }

    let mut lines = Vec::new();
    walk(routes, "", 0, &mut lines);
    lines
}

#[cfg(test)]
mod tests {
    use mb_routes::{RouteTree, app_routes};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_tree_patterns() {
        let tree = RouteTree::new(vec![
            RouteNode::new("/", "home"),
            RouteNode::new("/projects", "projects").with_child(
                RouteNode::new(":projectID", "projects.view")
                    .with_child(RouteNode::new("*", "projects.view.page")),
            ),
        ])
        .unwrap();

        let lines: Vec<String> = render_routes(tree.routes())
            .iter()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();

        assert_eq!(
            lines,
            vec![
                "/ home",
                "/projects projects",
                "/projects/:projectID projects.view",
                "/projects/:projectID/* projects.view.page",
            ]
        );
    }

    #[test]
    fn test_render_tree_marks_menu_children() {
        let lines = render_routes(app_routes().unwrap().routes());

        let openapi = lines
            .iter()
            .find(|line| line.contains("help.openapi"))
            .unwrap();
        assert!(openapi.starts_with("  /help/openapi"));
        assert!(openapi.ends_with("[menu]"));
    }

    #[test]
    fn test_render_subtree() {
        let tree = app_routes().unwrap();
        let docs = tree.find("projects.view.docs").unwrap();

        let lines: Vec<String> = render_routes(std::slice::from_ref(docs))
            .iter()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();

        assert_eq!(
            lines,
            vec!["/docs projects.view.docs", "/docs/* projects.view.docs.page"]
        );
    }
}
