//! `mb breadcrumbs` command implementation.

use clap::Args;
use mb_routes::{Breadcrumb, Location};

use super::{CommonArgs, load_routes};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the breadcrumbs command.
#[derive(Args)]
pub(crate) struct BreadcrumbsArgs {
    /// URL path to resolve (e.g., "/projects/42/docs/intro").
    path: String,

    /// Print the trail as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl BreadcrumbsArgs {
    /// Execute the breadcrumbs command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the route table fails to load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config()?;
        let tree = load_routes(&config)?;

        let trail = tree.resolve_breadcrumbs(&Location::parse(&self.path));

        if self.json {
            output.result(&serde_json::to_string_pretty(&trail)?)?;
        } else if trail.is_empty() {
            output.info(&format!("No breadcrumbs for {}", self.path));
        } else {
            output.result(&format_trail(&trail, &config.breadcrumbs.separator))?;
            if self.common.verbose {
                for crumb in &trail {
                    output.info(&format!("  {:<24} {}", crumb.title, crumb.path));
                }
            }
        }

        Ok(())
    }
}

/// Join breadcrumb titles with a separator.
fn format_trail(trail: &[Breadcrumb], separator: &str) -> String {
    trail
        .iter()
        .map(|crumb| crumb.title.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use mb_routes::app_routes;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_trail() {
        let trail = app_routes()
            .unwrap()
            .resolve_breadcrumbs(&Location::new("/projects/42/docs/intro"));

        assert_eq!(format_trail(&trail, " / "), "Projects / 42 / Docs / intro");
    }

    #[test]
    fn test_format_trail_custom_separator() {
        let trail = app_routes()
            .unwrap()
            .resolve_breadcrumbs(&Location::new("/integrations/add"));

        assert_eq!(format_trail(&trail, " > "), "Integrations > + Add");
    }

    #[test]
    fn test_format_empty_trail() {
        assert_eq!(format_trail(&[], " / "), "");
    }
}
