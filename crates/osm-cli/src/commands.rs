use std::path::PathBuf;

use anyhow::{Context, Result};
use osm_cli::pipeline::{ProcessOptions, audit_map, process_map};
use osm_model::RecordKind;
use osm_output::{CsvTables, file_name};
use osm_transform::{ShapeOptions, StreetConfig};
use tracing::{debug, info};

use crate::cli::{AuditArgs, ProcessArgs};
use crate::types::{AuditResult, ProcessResult};

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let config = StreetConfig::resolve(args.mapping.as_deref()).context("load street config")?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let options = ProcessOptions::new(
        ShapeOptions::new().with_abbreviations(config.abbreviations),
    )
    .with_validation(!args.skip_validation);
    if args.skip_validation {
        info!("schema validation disabled");
    }

    let mut tables = CsvTables::create(&output_dir).context("create output tables")?;
    let summary = process_map(&args.input, &mut tables, &options)?;
    tables.into_inner().context("close output tables")?;
    for kind in RecordKind::ALL {
        debug!(
            path = %output_dir.join(file_name(kind)).display(),
            rows = *summary.rows.get(kind),
            "wrote table"
        );
    }

    Ok(ProcessResult {
        input: args.input.clone(),
        output_dir,
        validated: options.validate,
        summary,
    })
}

pub fn run_audit(args: &AuditArgs) -> Result<AuditResult> {
    let config = StreetConfig::resolve(args.mapping.as_deref()).context("load street config")?;
    let audit = audit_map(&args.input, &config.expected)?;
    let rewrites = audit.suggest(&config.abbreviations);
    Ok(AuditResult {
        input: args.input.clone(),
        audit,
        rewrites,
    })
}
