//! Row transformation.
//!
//! Builds one output row per roster row, ordered by template columns. Each
//! cell comes from the matched upload header when one exists, otherwise
//! from the column's field default, otherwise it is empty; every resolved
//! value then passes through the date normalizer keyed by the column name.

use tracing::debug;

use roster_ingest::RosterTable;
use roster_map::ColumnMapping;
use roster_model::{FieldDefaults, Template};

use crate::dates::format_output_value;

/// Where a template column's values come from for this import.
enum CellSource {
    /// Index of the matched header in the roster table.
    Header(usize),
    /// Caller-supplied default, applied identically to every row.
    Default(String),
    /// No match and no default.
    Empty,
}

fn cell_sources(
    table: &RosterTable,
    mapping: &ColumnMapping,
    defaults: &FieldDefaults,
    template: &Template,
) -> Vec<CellSource> {
    template
        .columns
        .iter()
        .map(|column| {
            if let Some(header) = mapping.header_for(column) {
                match table.header_index(header) {
                    Some(idx) => CellSource::Header(idx),
                    None => CellSource::Empty,
                }
            } else {
                match defaults.value(column) {
                    Some(value) => CellSource::Default(value.trim().to_string()),
                    None => CellSource::Empty,
                }
            }
        })
        .collect()
}

/// Transforms every roster row into an output row in template column order.
///
/// Output row length always equals the template column count; rows are
/// produced fresh and never reordered.
pub fn transform_rows(
    table: &RosterTable,
    mapping: &ColumnMapping,
    defaults: &FieldDefaults,
    template: &Template,
) -> Vec<Vec<String>> {
    let sources = cell_sources(table, mapping, defaults, template);

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            template
                .columns
                .iter()
                .zip(&sources)
                .map(|(column, source)| {
                    let value = match source {
                        CellSource::Header(idx) => row[*idx].trim(),
                        CellSource::Default(value) => value.as_str(),
                        CellSource::Empty => "",
                    };
                    format_output_value(column, value)
                })
                .collect()
        })
        .collect();

    debug!(
        row_count = rows.len(),
        column_count = template.column_count(),
        matched_columns = mapping.matched_count(),
        "rows transformed"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_map::match_columns;

    fn template(columns: &[&str]) -> Template {
        Template {
            id: 1,
            name: "10K Early Bird".to_string(),
            event_name: "City Run".to_string(),
            race_name: "10K".to_string(),
            ticket_name: "Early Bird".to_string(),
            columns: columns.iter().map(|&c| c.to_string()).collect(),
            required_columns: Vec::new(),
        }
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> RosterTable {
        RosterTable {
            headers: headers.iter().map(|&h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|&cell| cell.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn matched_values_win_over_defaults() {
        let template = template(&["#email", "first_name", "last_name", "shirt_size"]);
        let table = table(
            &["First Name", "Last Name", "Email", "Shirt Size"],
            &[&["Avery", "Reed", " avery@example.com ", "L"]],
        );
        let mapping = match_columns(&template, &table.headers).unwrap();
        let mut defaults = FieldDefaults::new();
        defaults.insert("shirt_size", "M");

        let rows = transform_rows(&table, &mapping, &defaults, &template);
        assert_eq!(rows, vec![vec!["avery@example.com", "Avery", "Reed", "L"]]);
    }

    #[test]
    fn defaults_fill_unmatched_columns_in_every_row() {
        let template = template(&["#email", "first_name", "last_name", "wave"]);
        let table = table(
            &["First Name", "Last Name", "Email"],
            &[
                &["Avery", "Reed", "avery@example.com"],
                &["Blair", "Soto", "blair@example.com"],
            ],
        );
        let mapping = match_columns(&template, &table.headers).unwrap();
        let mut defaults = FieldDefaults::new();
        defaults.insert("wave", " A ");

        let rows = transform_rows(&table, &mapping, &defaults, &template);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row[3] == "A"));
    }

    #[test]
    fn unmatched_undefaulted_columns_are_empty() {
        let template = template(&["#email", "first_name", "last_name", "club"]);
        let table = table(
            &["First Name", "Last Name", "Email"],
            &[&["Avery", "Reed", "avery@example.com"]],
        );
        let mapping = match_columns(&template, &table.headers).unwrap();

        let rows = transform_rows(&table, &mapping, &FieldDefaults::new(), &template);
        assert_eq!(rows[0][3], "");
        assert_eq!(rows[0].len(), 4);
    }

    #[test]
    fn date_columns_are_normalized_per_column_name() {
        let template = template(&["#email", "first_name", "last_name", "Date of Birth", "Booked At"]);
        let table = table(
            &["First Name", "Last Name", "Email", "DOB", "Booked At"],
            &[&["Avery", "Reed", "a@example.com", "2001-03-05", "2024-03-05 09:15"]],
        );
        let mapping = match_columns(&template, &table.headers).unwrap();

        let rows = transform_rows(&table, &mapping, &FieldDefaults::new(), &template);
        assert_eq!(rows[0][3], "05/03/2001");
        assert_eq!(rows[0][4], "03/05/2024 09:15");
    }

    #[test]
    fn default_values_also_pass_through_date_normalization() {
        let template = template(&["#email", "first_name", "last_name", "Event Date"]);
        let table = table(
            &["First Name", "Last Name", "Email"],
            &[&["Avery", "Reed", "a@example.com"]],
        );
        let mapping = match_columns(&template, &table.headers).unwrap();
        let mut defaults = FieldDefaults::new();
        defaults.insert("Event Date", "2024-06-01");

        let rows = transform_rows(&table, &mapping, &defaults, &template);
        assert_eq!(rows[0][3], "06/01/2024");
    }
}
