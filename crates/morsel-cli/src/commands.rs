use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use morsel_output::{RunReport, write_run_report};

use crate::cli::{RunArgs, SynonymsArgs};
use crate::config::{RunConfig, synonyms_from_args};
use crate::pipeline::run_pipeline;
use crate::summary::{apply_table_style, header_cell};
use crate::types::RunResult;

pub fn run_synonyms(args: &SynonymsArgs) -> Result<()> {
    let synonyms = synonyms_from_args(args).context("load synonyms")?;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Accepted columns")]);
    apply_table_style(&mut table);
    for (field, names) in synonyms.iter() {
        table.add_row(vec![field.to_string(), names.join(", ")]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_consolidate(args: &RunArgs) -> Result<RunResult> {
    let config = RunConfig::from_args(args).context("load configuration")?;
    let result = run_pipeline(&config)?;
    if let Some(path) = &config.report_path {
        let report = build_report(&result);
        write_run_report(path, &report).context("write run report")?;
        info!(report = %path.display(), "wrote run report");
    }
    Ok(result)
}

pub fn build_report(result: &RunResult) -> RunReport {
    let report = RunReport::new(&result.input_directory, &result.pattern, result.files.clone());
    match &result.failure {
        Some(failure) => report.with_failure(failure.clone()),
        None => report.with_output(result.output_path.clone()),
    }
}
