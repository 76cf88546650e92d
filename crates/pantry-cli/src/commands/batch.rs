use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_jsonlines::json_lines;

use pantry_core::enums::EntityKind;
use pantry_schema::{FieldError, SchemaRegistry};

use super::Outcome;
use crate::cli::root_commands::BatchArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Validation outcome for one JSONL line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordFailure {
    /// 1-based line number in the input file.
    pub line: usize,
    pub errors: Vec<FieldError>,
}

/// Summary returned by `pantry batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub entity: String,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub failures: Vec<RecordFailure>,
}

/// Handle `pantry batch`.
pub fn handle(
    args: &BatchArgs,
    registry: &SchemaRegistry,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    let schema = registry.get(&args.entity).with_context(|| {
        format!(
            "unknown entity '{}' (known: {})",
            args.entity,
            EntityKind::VALUES.join(", ")
        )
    })?;

    let records: Vec<Value> = json_lines(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?
        .collect::<Result<_, _>>()
        .with_context(|| format!("failed to parse JSONL from {}", args.file.display()))?;

    let progress = make_progress(records.len() as u64, flags.quiet);

    let mut summary = BatchSummary {
        entity: args.entity.clone(),
        total: records.len(),
        valid: 0,
        invalid: 0,
        failures: Vec::new(),
    };

    for (index, record) in records.iter().enumerate() {
        let report = pantry_schema::engine::validate(schema, record, registry.options());
        if report.valid {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
            summary.failures.push(RecordFailure {
                line: index + 1,
                errors: report.errors,
            });
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    print_summary(&summary, flags)?;
    Ok(if summary.invalid == 0 {
        Outcome::Valid
    } else {
        Outcome::Invalid
    })
}

fn make_progress(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} records")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

fn print_summary(summary: &BatchSummary, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            println!(
                "{}: {} total, {} valid, {} invalid",
                summary.entity, summary.total, summary.valid, summary.invalid
            );
            for failure in &summary.failures {
                println!("line {}:", failure.line);
                output::output(&failure.errors, OutputFormat::Table)?;
            }
            Ok(())
        }
        format => output::output(summary, format),
    }
}
