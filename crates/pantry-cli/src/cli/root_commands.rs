use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Root subcommands for the `pantry` binary.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a single JSON record from a file or stdin
    Validate(ValidateArgs),

    /// Validate every record in a JSONL file
    Batch(BatchArgs),

    /// Inspect the entity schema catalog
    Schema {
        #[command(subcommand)]
        action: SchemaCommands,
    },
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Entity kind: contact, organization, product, opportunity, interaction
    pub entity: String,

    /// Read the record from this file instead of stdin
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Entity kind: contact, organization, product, opportunity, interaction
    pub entity: String,

    /// JSONL file with one record per line
    #[arg(long)]
    pub file: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum SchemaCommands {
    /// List the schema names in the catalog
    List,

    /// Print an entity schema as a JSON Schema document
    Show {
        /// Entity kind to export
        entity: String,
    },
}
