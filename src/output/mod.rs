//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON

mod common;
mod contributors;
mod languages;
mod resources;
mod stats;

pub use common::{escape_csv, metric, output_raw};
pub use contributors::output_contributors;
pub use languages::{output_language_infos, output_languages};
pub use resources::output_resources;
pub use stats::{
    output_locale_details, output_locale_stats, output_project_stats, output_resource_stats,
};
