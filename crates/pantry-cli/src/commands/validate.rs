use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use pantry_core::enums::EntityKind;
use pantry_resolver::resolve_known;
use pantry_schema::{SchemaRegistry, ValidationReport};

use super::Outcome;
use crate::cli::root_commands::ValidateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `pantry validate`.
///
/// An invalid record is an outcome, not an operational error: the report is
/// printed and the process exits 1. Operational failures (unreadable file,
/// malformed JSON, unknown entity) propagate as errors.
pub fn handle(
    args: &ValidateArgs,
    registry: &SchemaRegistry,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    let raw = read_record(args.file.as_deref())?;

    let report = registry.validate(&args.entity, &raw).with_context(|| {
        format!(
            "unknown entity '{}' (known: {})",
            args.entity,
            EntityKind::VALUES.join(", ")
        )
    })?;

    if report.valid {
        // Catch schema/record-type drift before the record is handed off.
        resolve_known(registry, &args.entity, &raw)
            .context("validated record did not resolve to its typed form")?;
    }

    print_report(&report, flags)?;
    Ok(if report.valid {
        Outcome::Valid
    } else {
        Outcome::Invalid
    })
}

/// Read one JSON object from a file, or stdin when no file was given.
fn read_record(file: Option<&Path>) -> anyhow::Result<Value> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read record from stdin")?;
            buffer
        }
    };
    serde_json::from_str(&text).context("input is not valid JSON")
}

fn print_report(report: &ValidationReport, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            if report.valid {
                if !flags.quiet {
                    println!("{}: valid", report.entity);
                }
            } else {
                println!("{}: {} error(s)", report.entity, report.errors.len());
                output::output(&report.errors, OutputFormat::Table)?;
            }
            Ok(())
        }
        format => output::output(report, format),
    }
}
