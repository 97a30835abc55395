use crate::cli::ExploreArgs;
use crate::config::FileConfig;
use crate::error::{CliError, Result};
use crate::ui::StageSpinner;
use chemscope::core::rest::PugClient;
use chemscope::engine::suggestions;
use chemscope::render::{chart, labels, page};
use chemscope::workflows::{self, CompoundReport};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub fn run(args: ExploreArgs, config: &FileConfig, quiet: bool) -> Result<()> {
    let client = config.client()?;
    let page_options = config.page_options();

    let primary = resolve_name(&client, &args.compound, args.select, args.no_suggest, quiet)?;
    let mut reports = vec![explore_one(&client, &primary, "Compound 1", quiet)];

    if let Some(compare) = &args.compare {
        let secondary = resolve_name(&client, compare, args.select_compare, args.no_suggest, quiet)?;
        reports.push(explore_one(&client, &secondary, "Compound 2", quiet));
    }

    let mut sections = Vec::with_capacity(reports.len());
    for (report, label) in reports.iter().zip(["Compound 1", "Compound 2"]) {
        print_report(report, label);
        sections.push(page::compound_section(report, label, &page_options)?);
    }

    let html = page::document("Molecular Data Explorer", &sections);
    fs::write(&args.output, html)?;
    println!("\nReport written to {}", args.output.display());

    if let Some(csv_path) = &args.csv {
        write_dataset_csv(csv_path, &reports)?;
        println!("Chart dataset written to {}", csv_path.display());
    }

    Ok(())
}

/// Resolves the typed text through the suggestion selector.
///
/// The original UI populated a select box from autocomplete candidates and
/// fell back to the raw text when none existed or none was chosen; `--select`
/// is the non-interactive equivalent of choosing one.
fn resolve_name(
    client: &PugClient,
    typed: &str,
    select: Option<usize>,
    no_suggest: bool,
    quiet: bool,
) -> Result<String> {
    if no_suggest || typed.is_empty() {
        return Ok(typed.to_string());
    }

    let spinner = StageSpinner::start(&format!("Looking up suggestions for '{typed}'"), quiet);
    // Failures collapse to "no suggestions", never to a user-facing error.
    let candidates = suggestions::fetch(client, typed).unwrap_or_else(|error| {
        debug!("suggestion lookup for '{typed}' failed: {error}");
        Vec::new()
    });
    spinner.clear();

    if !candidates.is_empty() && select.is_none() && !quiet {
        eprintln!(
            "Suggestions for '{typed}': {} (pass --select N to use one)",
            candidates.join(", ")
        );
    }

    choose_name(typed, &candidates, select)
}

/// Applies the selector-with-fallback rule to a candidate list.
fn choose_name(typed: &str, candidates: &[String], select: Option<usize>) -> Result<String> {
    match select {
        None => Ok(typed.to_string()),
        Some(0) => Err(CliError::Argument(
            "--select is 1-based; use --select 1 for the first suggestion".to_string(),
        )),
        Some(n) => candidates.get(n - 1).cloned().ok_or_else(|| {
            CliError::Argument(format!(
                "--select {} is out of range: {} suggestion(s) for '{}'",
                n,
                candidates.len(),
                typed
            ))
        }),
    }
}

fn explore_one(client: &PugClient, name: &str, label: &str, quiet: bool) -> CompoundReport {
    info!("Exploring '{name}' as {label}.");
    let spinner = StageSpinner::start(&format!("Exploring '{name}'"), quiet);
    let report = workflows::explore(client, name);
    spinner.done();
    report
}

fn print_report(report: &CompoundReport, label: &str) {
    println!();
    let Some(record) = &report.properties else {
        println!("{label} not found.");
        return;
    };

    println!("{}: {}", label, report.display_name());
    for (field_label, value) in labels::display_rows(record) {
        println!("  {field_label:<26} {value}");
    }

    if report.similar.is_empty() {
        println!("  Similar compounds: none found");
    } else {
        println!("  Similar compounds: {}", report.similar.join(", "));
    }
    println!("  Safety: {}", report.safety);

    match &report.structure {
        Some(Ok(structure)) => {
            println!("  3D structure: fetched (CID {})", structure.cid);
        }
        Some(Err(error)) => println!("  3D structure: unavailable ({error})"),
        None => {}
    }
}

/// Writes the charted (compound, property, value) rows as CSV.
fn write_dataset_csv(path: &Path, reports: &[CompoundReport]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Compound", "Property", "Value"])?;
    for report in reports {
        let Some(record) = &report.properties else {
            continue;
        };
        for (category, value) in chart::dataset(record) {
            writer.write_record([report.display_name(), category, &value.to_string()])?;
        }
    }
    writer.flush()?;
    Ok(())
}
