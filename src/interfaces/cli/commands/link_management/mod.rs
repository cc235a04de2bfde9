//! Short URL views
//!
//! One module per view. Each view renders to any `Write` and reports a
//! [`ViewOutcome`](crate::interfaces::cli::view::ViewOutcome).

mod create;
mod delete;
mod edit;
mod link;
mod list;
mod stats;

pub use create::create_url;
pub use delete::delete_url;
pub use edit::edit_url;
pub use link::print_link;
pub use list::{ListView, list_urls};
pub use stats::show_stats;
