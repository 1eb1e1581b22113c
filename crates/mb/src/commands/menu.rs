//! `mb menu` and `mb menu-toggle` command implementations.

use clap::Args;
use mb_prefs::MenuPreference;
use mb_routes::{Location, MenuItem};

use super::{CommonArgs, load_routes, open_preferences};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the menu command.
#[derive(Args)]
pub(crate) struct MenuArgs {
    /// Current URL path, used to expand the active section.
    #[arg(short, long, default_value = "/")]
    path: String,

    /// Print the menu as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl MenuArgs {
    /// Execute the menu command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the route table fails to load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config()?;
        let tree = load_routes(&config)?;
        let store = open_preferences(&config);
        let open = MenuPreference::new(store.as_ref()).is_open();

        let items = tree.menu(&Location::parse(&self.path));

        if self.json {
            let value = serde_json::json!({ "open": open, "items": items });
            output.result(&serde_json::to_string_pretty(&value)?)?;
            return Ok(());
        }

        output.highlight(if open { "Menu (open)" } else { "Menu (collapsed)" });
        for line in render_menu(&items, open) {
            output.result(&line)?;
        }

        Ok(())
    }
}

/// Arguments for the menu-toggle command.
#[derive(Args)]
pub(crate) struct MenuToggleArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl MenuToggleArgs {
    /// Execute the menu-toggle command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or the new state
    /// cannot be saved.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config()?;

        if !config.preferences_resolved.enabled {
            output.warning("Preferences are disabled; the menu state will not be saved");
        }

        let store = open_preferences(&config);
        let open = MenuPreference::new(store.as_ref()).toggle()?;

        output.success(if open { "Menu opened" } else { "Menu closed" });
        Ok(())
    }
}

/// Render menu items as text.
///
/// A collapsed menu shows titles only. An open menu adds link paths and
/// lists the children of the expanded section.
fn render_menu(items: &[MenuItem], open: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for item in items {
        let marker = if item.expanded { '*' } else { ' ' };
        if !open {
            lines.push(format!("{marker} {}", item.title));
            continue;
        }

        lines.push(format!("{marker} {:<20} {}", item.title, item.path));
        if item.expanded {
            for child in &item.children {
                lines.push(format!("    {:<18} {}", child.title, child.path));
            }
        }
    }
    lines
}
