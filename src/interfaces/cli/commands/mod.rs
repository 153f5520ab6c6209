//! CLI command implementations

mod config_gen;
mod copy;
mod list;
mod remove;
mod shorten;
mod stats;

pub use config_gen::config_generate;
pub use copy::copy_short_url;
pub use list::list_links;
pub use remove::remove_link;
pub use shorten::shorten_url;
pub use stats::show_stats;
