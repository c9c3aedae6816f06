//! `rcheck check` — parse two rosters, reconcile, report.

use std::path::{Path, PathBuf};

use rostercheck_analysis::{Analyst, TemplateAnalyst};
use rostercheck_core::Origin;
use rostercheck_io::{parse, MarkerConfig};
use rostercheck_recon::{compute_summary, reconcile};

use crate::report::CheckReport;
use crate::session::{Session, SessionEvent};
use crate::{CliError, EXIT_ERROR, EXIT_USAGE};

pub struct CheckArgs {
    pub subset: PathBuf,
    pub master: PathBuf,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub export: Option<PathBuf>,
    pub analyze: bool,
    pub markers: Option<PathBuf>,
}

pub fn cmd_check(args: CheckArgs) -> Result<(), CliError> {
    let markers = load_markers(args.markers.as_deref())?;

    let mut session = Session::new();
    session.apply(SessionEvent::Start).map_err(session_err)?;

    let subset_text = read_input(&args.subset)?;
    let subset = parse(&subset_text, Origin::Subset, &markers);
    session.apply(SessionEvent::FileReceived).map_err(session_err)?;

    let master_text = read_input(&args.master)?;
    let master = parse(&master_text, Origin::Master, &markers);
    session.apply(SessionEvent::FileReceived).map_err(session_err)?;

    let result = reconcile(&subset, &master);
    session.apply(SessionEvent::ReconciliationComplete).map_err(session_err)?;

    // Analysis failures are swallowed: the report simply has none.
    let analysis = if args.analyze {
        TemplateAnalyst.analyze(&result.matched).ok()
    } else {
        None
    };

    let report = CheckReport::new(compute_summary(&result), result, analysis);

    if let Some(path) = &args.export {
        crate::export::write_csv(path, &report.result)?;
        eprintln!("wrote {}", path.display());
    }

    let json_str = serde_json::to_string_pretty(&report)
        .map_err(|e| CliError::new(EXIT_ERROR, format!("JSON serialization error: {e}")))?;

    if let Some(path) = &args.output {
        std::fs::write(path, &json_str)
            .map_err(|e| CliError::new(EXIT_ERROR, format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }
    if args.json {
        println!("{json_str}");
    }

    // Human summary to stderr
    let s = &report.summary;
    let duplicates = if s.master_duplicates > 0 {
        format!(" ({} duplicate master id(s))", s.master_duplicates)
    } else {
        String::new()
    };
    eprintln!(
        "{} checked against {} — {} matched, {} not found{}",
        s.subset_count, s.master_count, s.matched, s.unmatched, duplicates,
    );
    if let Some(ref analysis) = report.analysis {
        eprintln!("{}", analysis.summary);
    }

    Ok(())
}

/// `rcheck parse` — dump one file's parsed records as JSON.
pub fn cmd_parse(
    file: PathBuf,
    as_master: bool,
    markers_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let markers = load_markers(markers_path.as_deref())?;
    let origin = if as_master { Origin::Master } else { Origin::Subset };

    let text = read_input(&file)?;
    let records = parse(&text, origin, &markers);

    let json_str = serde_json::to_string_pretty(&records)
        .map_err(|e| CliError::new(EXIT_ERROR, format!("JSON serialization error: {e}")))?;
    println!("{json_str}");
    eprintln!("{} record(s)", records.len());
    Ok(())
}

fn load_markers(path: Option<&Path>) -> Result<MarkerConfig, CliError> {
    let Some(path) = path else {
        return Ok(MarkerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::new(EXIT_ERROR, format!("cannot read {}: {e}", path.display())))?;
    MarkerConfig::from_toml(&text).map_err(|e| {
        CliError::new(EXIT_USAGE, e.to_string())
            .with_hint("expected optional TOML keys: identifier, name, category (string arrays)")
    })
}

fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::new(EXIT_ERROR, format!("cannot read {}: {e}", path.display())))
}

fn session_err(e: crate::session::InvalidTransition) -> CliError {
    CliError::new(EXIT_ERROR, format!("session error: {e}"))
}
