use std::path::PathBuf;

use osm_cli::pipeline::ProcessSummary;
use osm_transform::{Rewrite, StreetTypeAudit};

#[derive(Debug)]
pub struct ProcessResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub validated: bool,
    pub summary: ProcessSummary,
}

#[derive(Debug)]
pub struct AuditResult {
    pub input: PathBuf,
    pub audit: StreetTypeAudit,
    pub rewrites: Vec<Rewrite>,
}
