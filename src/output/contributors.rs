//! Contributor output formatters

use comfy_table::{presets::NOTHING, Table};

use crate::cli::OutputFormat;
use crate::tx::ContributorTally;

use super::common::escape_csv;

/// Output the contributor tally in the specified format
///
/// The total comes first, then the per-role counts.
pub fn output_contributors(tally: &ContributorTally, format: &OutputFormat, no_header: bool) {
    let rows: [(&str, usize); 4] = [
        ("Contributors", tally.contributors),
        ("Translators", tally.translators),
        ("Reviewers", tally.reviewers),
        ("Coordinators", tally.coordinators),
    ];

    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["COMPONENT", "COUNT"]);
            }
            for (component, count) in rows {
                table.add_row(vec![component, &count.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("COMPONENT,COUNT");
            }
            for (component, count) in rows {
                println!("{},{}", escape_csv(component), count);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(tally) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        },
    }
}
