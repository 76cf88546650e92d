use anyhow::Context;

use pantry_core::enums::EntityKind;
use pantry_schema::{SchemaRegistry, export};

use super::Outcome;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaCommands;
use crate::output;

/// Handle `pantry schema`.
pub fn handle(
    action: &SchemaCommands,
    registry: &SchemaRegistry,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    match action {
        SchemaCommands::List => {
            output::output(&registry.list(), flags.format)?;
        }
        SchemaCommands::Show { entity } => {
            let schema = registry
                .get(entity)
                .with_context(|| {
                    format!(
                        "unknown entity '{entity}' (known: {})",
                        EntityKind::VALUES.join(", ")
                    )
                })?;
            let document = export::json_schema(schema, registry.options());
            output::output(&document, flags.format)?;
        }
    }
    Ok(Outcome::Valid)
}
