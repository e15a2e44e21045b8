use std::path::PathBuf;

use anyhow::Result;
use person_probe_core::{
    load_config, person::reference_registry, CheckOutcome, OutputFormat, ProbeConfig, SuiteReport,
};

/// Command-line overrides for `person-probe check`.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub config: Option<PathBuf>,
    /// Replaces `checks.only` from config when non-empty
    pub only: Vec<String>,
    pub json: bool,
}

impl CheckOptions {
    fn apply(&self, config: ProbeConfig) -> ProbeConfig {
        let config = if self.json {
            ProbeConfig {
                output: OutputFormat::Json,
                ..config
            }
        } else {
            config
        };

        if self.only.is_empty() {
            config
        } else {
            let mut checks = config.checks.clone();
            checks.only.clone_from(&self.only);
            ProbeConfig { checks, ..config }
        }
    }
}

/// Resolve the Person type, run the selected checks and print the report.
///
/// Returns whether every check passed.
pub fn run(options: &CheckOptions) -> Result<bool> {
    let config = options.apply(load_config(options.config.as_deref())?);
    config.validate()?;

    let registry = reference_registry()?;
    let descriptor = config.resolver().resolve(&registry)?;
    let report = config.suite()?.run(&descriptor)?;

    match config.output {
        OutputFormat::Human => print!("{}", render_human(&report)),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(report.all_passed())
}

/// Table of results followed by a summary line.
pub fn render_human(report: &SuiteReport) -> String {
    let rows: String = report
        .results
        .iter()
        .map(|result| match &result.outcome {
            CheckOutcome::Passed => {
                format!("PASS  {:<24}{}\n", result.id.to_string(), result.description)
            }
            CheckOutcome::Failed { reason } => format!(
                "FAIL  {:<24}{}\n      {reason}\n",
                result.id.to_string(),
                result.description
            ),
        })
        .collect();

    format!(
        "Type: {}\n{rows}{} passed, {} failed\n",
        report.type_name,
        report.passed(),
        report.failed()
    )
}
