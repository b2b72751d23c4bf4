//! Resource output formatters

use comfy_table::{presets::NOTHING, Table};

use crate::cli::OutputFormat;
use crate::tx::Resource;

use super::common::escape_csv;

/// Output the project's resources in the specified format
pub fn output_resources(resources: &[Resource], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["SLUG", "NAME", "I18N TYPE", "SOURCE LANG"]);
            }
            for resource in resources {
                table.add_row(vec![
                    resource.slug.as_str(),
                    resource.name.as_deref().unwrap_or(""),
                    resource.i18n_type.as_deref().unwrap_or(""),
                    resource
                        .source_language_code
                        .as_ref()
                        .map(|c| c.as_str())
                        .unwrap_or(""),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("SLUG,NAME,I18N_TYPE,SOURCE_LANG");
            }
            for resource in resources {
                println!(
                    "{},{},{},{}",
                    escape_csv(resource.slug.as_str()),
                    escape_csv(resource.name.as_deref().unwrap_or("")),
                    escape_csv(resource.i18n_type.as_deref().unwrap_or("")),
                    escape_csv(
                        resource
                            .source_language_code
                            .as_ref()
                            .map(|c| c.as_str())
                            .unwrap_or("")
                    )
                );
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(resources) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::ResourceSlug;

    #[test]
    fn test_output_resources_does_not_panic() {
        let resources = vec![Resource {
            slug: ResourceSlug::from("ui-strings"),
            name: Some("UI Strings".to_string()),
            i18n_type: Some("PO".to_string()),
            source_language_code: None,
            category: None,
        }];
        for format in [OutputFormat::Table, OutputFormat::Csv, OutputFormat::Json] {
            output_resources(&resources, &format, false);
        }
    }
}
