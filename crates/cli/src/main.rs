//! Triage CLI binary.
//!
//! Usage:
//!   triage demo
//!   triage ingest <file.pdf>
//!   triage list [--search <term>] [--filter <all|status|severity>]
//!   triage assign <id> <approve|reject|modify> [developer]
//!   triage developers
//!   triage analytics
//!
//! # Environment Variables
//!
//! - `TRIAGE_SERVICE_URL` - Base URL of the classification service
//!   (overrides the config file)

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_client::HttpTriageService;
use triage_common::{Advisory, BugReport, TriageAction};
use triage_coordinator::{Document, TriageCoordinator};

fn print_usage() {
    println!("Triage Workflow Coordinator");
    println!();
    println!("Usage: triage [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  demo                                  Load the demo batch (no remote call)");
    println!("  ingest <file.pdf>                     Submit a PDF for classification");
    println!("  list [--search <t>] [--filter <f>]    Show the filtered report view");
    println!("  assign <id> <action> [developer]      Approve, reject, or modify an assignment");
    println!("  developers                            List assignable developers");
    println!("  analytics                             Show summary statistics");
    println!();
    println!("Options:");
    println!("  -c, --config <FILE>   Path to config.toml");
    println!("  -u, --url <URL>       Service base URL (overrides config)");
    println!("  -h, --help            Show this help message");
    println!();
    println!("Environment variables:");
    println!("  TRIAGE_SERVICE_URL    Service base URL (overridden by --url)");
}

fn print_report(report: &BugReport) {
    let sync = if report.sync_pending { " [not synced]" } else { "" };
    println!(
        "#{:<4} {:<9} {:<8} {:<14} {} -> {} ({:.0}%){}",
        report.id,
        report.status.as_str(),
        report.severity.as_str(),
        report.component,
        report.title,
        report.effective_assignee(),
        report.confidence_score * 100.0,
        sync,
    );
}

fn print_advisory(advisory: &Option<Advisory>) {
    if let Some(advisory) = advisory {
        println!("note: {advisory}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut url_flag: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();
    let mut search = String::new();
    let mut filter = "all".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--url" | "-u" => {
                if i + 1 < args.len() {
                    url_flag = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--search" => {
                if i + 1 < args.len() {
                    search = args[i + 1].clone();
                    i += 1;
                }
            }
            "--filter" => {
                if i + 1 < args.len() {
                    filter = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let Some(command) = positional.first().cloned() else {
        print_usage();
        anyhow::bail!("missing command");
    };

    let config = match config_path {
        Some(path) => triage_coordinator::TriageConfig::from_file(&path)?,
        None => triage_coordinator::TriageConfig::default(),
    };
    let base_url = url_flag.unwrap_or_else(|| config.resolve_service_url());

    let service = HttpTriageService::with_timeout(&base_url, config.service.timeout_ms)?;
    let coordinator = TriageCoordinator::new(Arc::new(service));

    match command.as_str() {
        "demo" => {
            let outcome = coordinator.ingest(None).await?;
            print_advisory(&outcome.advisory);
            for report in &outcome.reports {
                print_report(report);
            }
        }
        "ingest" => {
            let Some(path) = positional.get(1) else {
                anyhow::bail!("usage: triage ingest <file.pdf>");
            };
            let document = Document::from_path(path)?;
            let outcome = coordinator.ingest(Some(document)).await?;
            print_advisory(&outcome.advisory);
            println!("Ingested {} report(s)", outcome.reports.len());
            for report in &outcome.reports {
                print_report(report);
            }
        }
        "list" => {
            coordinator.refresh(&[]).await?;
            let reports = coordinator.view(&search, &filter).await;
            if reports.is_empty() {
                println!("No reports match.");
            }
            for report in &reports {
                print_report(report);
            }
        }
        "assign" => {
            let (Some(id), Some(action)) = (positional.get(1), positional.get(2)) else {
                anyhow::bail!("usage: triage assign <id> <approve|reject|modify> [developer]");
            };
            let id: i64 = id
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid report id '{id}'"))?;
            let action: TriageAction = action.parse()?;
            let developer = positional.get(3).map(String::as_str);

            coordinator.refresh(&[]).await?;
            let outcome = coordinator.assign(id, action, developer).await?;
            print_advisory(&outcome.advisory);
            print_report(&outcome.report);
        }
        "developers" => {
            let (roster, advisory) = coordinator.developers().await;
            print_advisory(&advisory);
            for dev in &roster {
                match &dev.specialty {
                    Some(specialty) => println!("{} - {specialty}", dev.name),
                    None => println!("{}", dev.name),
                }
            }
        }
        "analytics" => {
            // Best-effort refresh so a degraded snapshot reflects current
            // remote contents; a failure here already implies degraded mode.
            if let Err(e) = coordinator.refresh(&[]).await {
                tracing::warn!(error = %e, "Could not refresh reports before analytics");
            }
            let (snapshot, advisory) = coordinator.snapshot().await;
            print_advisory(&advisory);
            if snapshot.degraded {
                println!("(degraded: local counts, placeholder average)");
            }
            println!("total reports:    {}", snapshot.total_reports);
            println!("approved reports: {}", snapshot.approved_reports);
            println!("pending reports:  {}", snapshot.pending_reports);
            println!("avg confidence:   {:.2}", snapshot.average_confidence);
            if !snapshot.developer_distribution.is_empty() {
                println!("by developer:");
                for (name, count) in &snapshot.developer_distribution {
                    println!("  {name}: {count}");
                }
            }
            if !snapshot.severity_distribution.is_empty() {
                println!("by severity:");
                for (severity, count) in &snapshot.severity_distribution {
                    println!("  {severity}: {count}");
                }
            }
        }
        other => {
            print_usage();
            anyhow::bail!("unknown command '{other}'");
        }
    }

    Ok(())
}
