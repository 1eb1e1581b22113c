//! Route tree and breadcrumb resolution for the mimisbrunnr UI shell.
//!
//! This crate provides:
//! - [`RouteTree`]: Validated, immutable navigation hierarchy
//! - Breadcrumb trails derived from the current [`Location`]
//! - Menu model with active section expansion
//! - The built-in application route table ([`app_routes`])
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mb_routes::{Location, app_routes};
//!
//! let routes = app_routes()?;
//! let location = Location::parse("/projects/42/docs/intro");
//!
//! let trail = routes.resolve_breadcrumbs(&location);
//! assert_eq!(trail.last().map(|c| c.path.as_str()), Some("/projects/42/docs/intro"));
//!
//! assert_eq!(routes.active_top_level(&location), Some("projects"));
//! # Ok(())
//! # }
//! ```

mod builtin;
mod location;
mod menu;
mod route;
mod segment;
mod tree;

pub use builtin::app_routes;
pub use location::Location;
pub use menu::MenuItem;
pub use route::RouteNode;
pub use segment::{Breadcrumb, CATCH_ALL, Segment};
pub use tree::{RouteTree, RouteTreeError, find_active_top_level_route};
