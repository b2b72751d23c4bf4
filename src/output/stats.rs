//! Statistics output formatters

use comfy_table::{presets::NOTHING, Table};

use crate::cli::OutputFormat;
use crate::tx::{LocaleDetails, LocaleStats, ProjectStats, ResourceStats};

use super::common::{escape_csv, metric};

/// Output the whole project's statistics map (resource x locale rows)
pub fn output_project_stats(stats: &ProjectStats, format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["RESOURCE", "LOCALE", "COMPLETED", "TRANSLATED"]);
            }
            for (slug, per_locale) in stats {
                for (locale, payload) in per_locale {
                    table.add_row(vec![
                        slug.as_str(),
                        locale.as_str(),
                        &metric(payload, "completed"),
                        &metric(payload, "translated_entities"),
                    ]);
                }
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("RESOURCE,LOCALE,COMPLETED,TRANSLATED");
            }
            for (slug, per_locale) in stats {
                for (locale, payload) in per_locale {
                    println!(
                        "{},{},{},{}",
                        escape_csv(slug),
                        escape_csv(locale),
                        escape_csv(&metric(payload, "completed")),
                        escape_csv(&metric(payload, "translated_entities"))
                    );
                }
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(stats) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        },
    }
}

/// Output one resource's statistics (locale rows)
pub fn output_resource_stats(stats: &ResourceStats, format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["LOCALE", "COMPLETED", "TRANSLATED"]);
            }
            for (locale, payload) in stats {
                table.add_row(vec![
                    locale.as_str(),
                    &metric(payload, "completed"),
                    &metric(payload, "translated_entities"),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("LOCALE,COMPLETED,TRANSLATED");
            }
            for (locale, payload) in stats {
                println!(
                    "{},{},{}",
                    escape_csv(locale),
                    escape_csv(&metric(payload, "completed")),
                    escape_csv(&metric(payload, "translated_entities"))
                );
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(stats) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        },
    }
}

/// Output one locale's statistics across every resource (resource rows)
pub fn output_locale_stats(stats: &LocaleStats, format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["RESOURCE", "COMPLETED", "TRANSLATED"]);
            }
            for (slug, payload) in stats {
                table.add_row(vec![
                    slug.as_str(),
                    &metric(payload, "completed"),
                    &metric(payload, "translated_entities"),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("RESOURCE,COMPLETED,TRANSLATED");
            }
            for (slug, payload) in stats {
                println!(
                    "{},{},{}",
                    escape_csv(slug),
                    escape_csv(&metric(payload, "completed")),
                    escape_csv(&metric(payload, "translated_entities"))
                );
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(stats) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        },
    }
}

/// Output one locale's translation detail as key/value rows
pub fn output_locale_details(details: &LocaleDetails, format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["FIELD", "VALUE"]);
            }
            let code = details
                .language_code
                .as_ref()
                .map(|c| c.as_str().to_string())
                .unwrap_or_default();
            table.add_row(vec!["locale", &code]);
            table.add_row(vec![
                "translated_segments",
                &details.translated_segments.to_string(),
            ]);
            table.add_row(vec!["total_segments", &details.total_segments.to_string()]);
            table.add_row(vec![
                "completed_percentage",
                &format!("{}%", details.completed_percentage),
            ]);
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("FIELD,VALUE");
            }
            let code = details
                .language_code
                .as_ref()
                .map(|c| c.as_str().to_string())
                .unwrap_or_default();
            println!("locale,{}", escape_csv(&code));
            println!("translated_segments,{}", details.translated_segments);
            println!("total_segments,{}", details.total_segments);
            println!("completed_percentage,{}%", details.completed_percentage);
        }
        OutputFormat::Json => match serde_json::to_string_pretty(details) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::LocaleCode;
    use std::collections::BTreeMap;

    #[test]
    fn test_output_project_stats_does_not_panic() {
        let mut per_locale = BTreeMap::new();
        per_locale.insert(
            "fr".to_string(),
            serde_json::json!({ "completed": "75%", "translated_entities": 30 }),
        );
        let mut stats = ProjectStats::new();
        stats.insert("ui-strings".to_string(), per_locale);

        for format in [OutputFormat::Table, OutputFormat::Csv, OutputFormat::Json] {
            output_project_stats(&stats, &format, false);
        }
    }

    #[test]
    fn test_output_locale_stats_with_null_entry() {
        let mut stats = LocaleStats::new();
        stats.insert("docs".to_string(), serde_json::Value::Null);
        for format in [OutputFormat::Table, OutputFormat::Csv, OutputFormat::Json] {
            output_locale_stats(&stats, &format, true);
        }
    }

    #[test]
    fn test_output_locale_details_does_not_panic() {
        let details = LocaleDetails {
            language_code: Some(LocaleCode::from("fr")),
            translated_segments: 50,
            untranslated_segments: Some(150),
            reviewed_segments: None,
            total_segments: 200,
            translated_words: None,
            coordinators: vec![],
            translators: vec![],
            reviewers: vec![],
            completed_percentage: 25,
        };
        for format in [OutputFormat::Table, OutputFormat::Csv, OutputFormat::Json] {
            output_locale_details(&details, &format, false);
        }
    }
}
