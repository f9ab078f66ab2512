//! Strategy Mapper CLI
//!
//! Builds a planning session from a YAML seed, exports the action-plan report
//! and prints the top of the roadmap.
//!
//! ```text
//! strategy-mapper <seed.yaml>
//! ```
//!
//! Logs go to stderr; the timeline goes to stdout.

use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info};

use strategy_mapper::adapters::LocalReportFileStorage;
use strategy_mapper::application::{
    ExportReportCommand, ExportReportHandler, ExportReportResult, PlanningSeed,
    ReportHandlerError, SeedError,
};
use strategy_mapper::config::{AppConfig, ConfigError};
use strategy_mapper::domain::foundation::Timestamp;
use strategy_mapper::domain::planning::PlanningSession;

#[derive(Debug, Error)]
enum CliError {
    #[error("usage: strategy-mapper <seed.yaml>")]
    Usage,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Export(#[from] ReportHandlerError),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "strategy-mapper failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    config.logging.init_tracing()?;

    let seed_path = std::env::args().nth(1).ok_or(CliError::Usage)?;
    let today = config.planning.reference_date_or(Utc::now().date_naive());
    info!(seed = %seed_path, reference_date = %today, "Building planning session");

    let seed = PlanningSeed::load(&seed_path).await?;
    let session = seed.build_session(today)?;

    let storage = Arc::new(LocalReportFileStorage::new(
        config.report.output_dir.clone(),
        config.report.max_report_bytes,
    ));
    let handler = ExportReportHandler::new(storage);
    let reference = Timestamp::start_of(today);
    let exported = handler
        .handle(
            &session,
            ExportReportCommand {
                generated_at: Timestamp::now(),
                roadmap_start: reference,
            },
        )
        .await?;

    print_summary(&session, &exported, reference, config.report.timeline_limit);
    Ok(())
}

fn print_summary(
    session: &PlanningSession,
    exported: &ExportReportResult,
    reference: Timestamp,
    timeline_limit: usize,
) {
    let report = &exported.report;
    println!("Report:      {}", exported.path);
    println!("Checksum:    {}", exported.checksum);
    println!(
        "Initiatives: {} ({} high impact)",
        report.total_initiatives, report.high_impact_initiatives
    );
    println!("Investment:  ${:.0}", report.total_investment);
    println!("Average ROI: {:.1}%", report.average_roi);
    if let Some(assessment) = &report.capability_assessment {
        println!(
            "Readiness:   {:.1}% ({})",
            assessment.readiness_score, assessment.tier
        );
    }

    println!();
    println!("Timeline");
    for (rank, initiative) in report.top_initiatives(timeline_limit).iter().enumerate() {
        println!(
            "{:>2}. {:<32} {:<14} {:>6.1}  {} -> {}",
            rank + 1,
            initiative.profile.name,
            initiative.quadrant.label(),
            initiative.priority_score,
            initiative.start_date.date(),
            initiative.end_date.date(),
        );
    }

    let plan = session.action_plan(reference);
    if !plan.quarterly_focus.is_empty() {
        println!();
        println!("Quarterly focus");
        for focus in &plan.quarterly_focus {
            println!("  {}: {} (owner: {})", focus.quarter, focus.initiative, focus.owner);
        }
    }
}
