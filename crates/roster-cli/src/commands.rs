use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use tracing::info;

use roster_cli::pipeline::run_import_bytes;
use roster_model::{FieldDefaults, TemplateStore};

use crate::cli::{ImportArgs, TemplatesArgs};
use crate::summary::apply_table_style;
use crate::types::ImportResult;

pub fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let store = TemplateStore::load(&args.templates)
        .with_context(|| format!("load template store {}", args.templates.display()))?;
    let template = store.get(args.template_id)?.clone();
    let defaults = parse_defaults(args.fields.as_deref())?;
    let bytes = fs::read(&args.roster)
        .with_context(|| format!("read roster {}", args.roster.display()))?;

    let outcome = run_import_bytes(&template, &bytes, &defaults)?;

    let output_path = if args.dry_run {
        None
    } else {
        let path = args.output.clone().unwrap_or_else(default_output_path);
        fs::write(&path, &outcome.csv)
            .with_context(|| format!("write output {}", path.display()))?;
        info!(path = %path.display(), rows = outcome.row_count, "output written");
        Some(path)
    };

    Ok(ImportResult {
        template,
        defaults,
        mapping: outcome.mapping,
        row_count: outcome.row_count,
        defaulted_columns: outcome.defaulted_columns,
        output_path,
    })
}

pub fn run_templates(args: &TemplatesArgs) -> Result<()> {
    let store = TemplateStore::load(&args.templates)
        .with_context(|| format!("load template store {}", args.templates.display()))?;
    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Event", "Race", "Ticket", "Columns"]);
    apply_table_style(&mut table);
    for template in store.templates() {
        table.add_row(vec![
            template.id.to_string(),
            template.name.clone(),
            template.event_name.clone(),
            template.race_name.clone(),
            template.ticket_name.clone(),
            template.column_count().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Parse the --fields value: inline JSON object, or @path to a JSON file.
fn parse_defaults(fields: Option<&str>) -> Result<FieldDefaults> {
    let json = match fields {
        None => return Ok(FieldDefaults::default()),
        Some(value) => match value.strip_prefix('@') {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("read defaults file {path}"))?,
            None => value.to_string(),
        },
    };
    let defaults = FieldDefaults::from_json(&json).context("parse --fields JSON")?;
    Ok(defaults)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "import-{}.csv",
        Utc::now().format("%Y-%m-%d-%H-%M-%S")
    ))
}
