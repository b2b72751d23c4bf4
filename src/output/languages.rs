//! Language output formatters

use comfy_table::{presets::NOTHING, Table};

use crate::cli::OutputFormat;
use crate::tx::{AllLanguages, LanguageInfo};

use super::common::escape_csv;

/// Output the project's language roster in the specified format
pub fn output_languages(all: &AllLanguages, format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["LOCALE", "NAME"]);
            }
            for language in &all.languages {
                table.add_row(vec![language.locale.as_str(), &language.name]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("LOCALE,NAME");
            }
            for language in &all.languages {
                println!(
                    "{},{}",
                    escape_csv(language.locale.as_str()),
                    escape_csv(&language.name)
                );
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(all) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        },
    }
}

/// Output language catalogue entries in the specified format
pub fn output_language_infos(infos: &[LanguageInfo], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["CODE", "NAME", "NPLURALS"]);
            }
            for info in infos {
                let nplurals = info.nplurals.map(|n| n.to_string()).unwrap_or_default();
                table.add_row(vec![info.code.as_str(), &info.name, &nplurals]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("CODE,NAME,NPLURALS");
            }
            for info in infos {
                println!(
                    "{},{},{}",
                    escape_csv(info.code.as_str()),
                    escape_csv(&info.name),
                    info.nplurals.map(|n| n.to_string()).unwrap_or_default()
                );
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(infos) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        },
    }
}
