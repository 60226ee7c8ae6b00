//! WCAG Roadmap CLI
//!
//! The `wcag-roadmap` command runs the compliance engine over evaluation
//! batches exported by an accessibility test runner.
//!
//! ## Commands
//!
//! - `assess`: Highest conformance level achieved
//! - `gaps`: Prioritized unmet criteria for a target level
//! - `roadmap`: Phased remediation plan with timeline and budget
//! - `certify`: Issue (and optionally seal) a compliance certificate
//! - `verify`: Re-verify a sealed certificate against its digest

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

use wcag_core::{
    merge_batches, read_certificate_artifact, write_certificate_artifact, write_json,
    AssessmentSpan, CertificateRequest, ComplianceLevel, ConformanceLevel, EngineConfig,
    EvaluationBatch, WcagVersion,
};

#[derive(Parser)]
#[command(name = "wcag-roadmap")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "WCAG compliance assessment and remediation roadmap engine", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// Engine configuration file (TOML)
    #[arg(short, long, global = true, env = "WCAG_ROADMAP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the highest conformance level achieved
    Assess {
        /// Evaluation batch files (JSON); all are merged
        #[arg(short, long = "input", required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,
    },

    /// List unmet criteria for a target level, highest priority first
    Gaps {
        /// Evaluation batch files (JSON); all are merged
        #[arg(short, long = "input", required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Target level (default: from config, else AA)
        #[arg(short, long)]
        target: Option<ConformanceLevel>,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a phased remediation roadmap
    Roadmap {
        /// Evaluation batch files (JSON); all are merged
        #[arg(short, long = "input", required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Target level (default: from config, else AA)
        #[arg(short, long)]
        target: Option<ConformanceLevel>,

        /// Schedule start as RFC 3339 (default: now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Issue a compliance certificate
    Certify {
        /// Evaluation batch files (JSON); all are merged
        #[arg(short, long = "input", required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Site, application or document being certified
        #[arg(long)]
        subject: String,

        /// Auditor name
        #[arg(long)]
        auditor: String,

        /// Certifying body
        #[arg(long)]
        body: String,

        /// Level the score is computed against (default: from config, else AA)
        #[arg(short, long)]
        target: Option<ConformanceLevel>,

        /// Certification date as RFC 3339 (default: now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Seal the certificate into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Verify a sealed certificate
    Verify {
        /// Certificate id
        #[arg(long)]
        id: String,

        /// Directory the certificate was sealed into
        #[arg(long)]
        dir: PathBuf,
    },
}

#[derive(Serialize)]
struct AssessOutput {
    wcag_version: WcagVersion,
    compliance_level: ComplianceLevel,
    batches: usize,
    evaluations: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    wcag_core::init_tracing(cli.json, level);

    let config = load_config(cli.config.as_deref())?;
    let engine = config.build_engine().context("Failed to build compliance engine")?;

    match cli.command {
        Commands::Assess { inputs } => {
            let batches = load_batches(&inputs)?;
            let evaluations = merge_batches(&batches);
            let output = AssessOutput {
                wcag_version: engine.hierarchy().version,
                compliance_level: engine.assess_level(&evaluations),
                batches: batches.len(),
                evaluations: evaluations.len(),
            };
            emit(&output, None)?;
        }
        Commands::Gaps {
            inputs,
            target,
            output,
        } => {
            let evaluations = merge_batches(&load_batches(&inputs)?);
            let target = target.unwrap_or(config.target_level);
            let gaps = engine.find_gaps(&evaluations, target);
            emit(&gaps, output.as_deref())?;
        }
        Commands::Roadmap {
            inputs,
            target,
            now,
            output,
        } => {
            let evaluations = merge_batches(&load_batches(&inputs)?);
            let target = target.unwrap_or(config.target_level);
            let now = now.unwrap_or_else(Utc::now);
            let roadmap = engine.build_roadmap(&evaluations, target, now);
            info!(
                "Roadmap: {} gaps in {} phases, estimated total {} (planning estimate only)",
                roadmap.gaps.len(),
                roadmap.phases.len(),
                roadmap.budget.total_estimate
            );
            emit(&roadmap, output.as_deref())?;
        }
        Commands::Certify {
            inputs,
            subject,
            auditor,
            body,
            target,
            now,
            out_dir,
        } => {
            let target = target.unwrap_or(config.target_level);
            let _span = AssessmentSpan::enter(&subject, target);
            let evaluations = merge_batches(&load_batches(&inputs)?);
            let request = CertificateRequest::new(subject, auditor, body).with_target(target);
            let cert =
                engine.generate_certificate(&evaluations, &request, now.unwrap_or_else(Utc::now));
            if let Some(dir) = out_dir {
                let path = write_certificate_artifact(&cert, &dir)
                    .with_context(|| format!("Failed to seal certificate into {:?}", dir))?;
                info!("Sealed certificate {} at {:?}", cert.id, path);
            }
            emit(&cert, None)?;
        }
        Commands::Verify { id, dir } => {
            let cert = read_certificate_artifact(&id, &dir)
                .with_context(|| format!("Certificate {} failed verification", id))?;
            println!(
                "✓ {} verified: {} ({:.1}%), {:?}, expires {}",
                cert.id,
                cert.compliance_level,
                cert.compliance_score,
                cert.status,
                cert.expiration_date.to_rfc3339()
            );
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(p) => EngineConfig::load(p).with_context(|| format!("Invalid config {:?}", p)),
        None => Ok(EngineConfig::default()),
    }
}

/// Read, parse and validate every batch file, in argument order.
fn load_batches(paths: &[PathBuf]) -> Result<Vec<EvaluationBatch>> {
    let mut batches = Vec::new();
    for path in paths {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read evaluation batch {:?}", path))?;
        let file_batches = parse_batch_file(&content)
            .with_context(|| format!("Invalid evaluation batch JSON in {:?}", path))?;
        for batch in &file_batches {
            batch
                .validate()
                .with_context(|| format!("Rejected batch '{}' in {:?}", batch.name, path))?;
        }
        batches.extend(file_batches);
    }
    Ok(batches)
}

/// A batch file holds one batch object or an array of them.
fn parse_batch_file(content: &str) -> serde_json::Result<Vec<EvaluationBatch>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|batch| vec![batch])
    }
}

fn emit<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            write_json(path, value).with_context(|| format!("Failed to write {:?}", path))?;
            info!("Wrote {:?}", path);
        }
        None => println!(
            "{}",
            serde_json::to_string_pretty(value).context("Failed to serialize output")?
        ),
    }
    Ok(())
}
