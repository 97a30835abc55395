use super::chart::{self, ChartOptions};
use super::labels;
use super::viewer::{self, ViewerOptions};
use super::{RenderError, escape_html};
use crate::workflows::CompoundReport;
use std::fmt::Write;

/// Presentation settings for a rendered page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    pub viewer: ViewerOptions,
    pub chart: ChartOptions,
}

/// Message shown when the similarity set is empty.
const NO_SIMILAR: &str = "No similar compounds found.";

/// Renders one compound's report as an HTML section.
///
/// A found compound gets the labeled property list, the similarity line, the
/// safety callout, the bar chart, and the 3D viewer panel. A compound that
/// was not found gets a one-line message and nothing else: no chart, no
/// viewer. The 3D panel is the only place a failure detail appears.
///
/// # Errors
///
/// Returns an error if chart drawing fails.
pub fn compound_section(
    report: &CompoundReport,
    label: &str,
    options: &PageOptions,
) -> Result<String, RenderError> {
    let Some(record) = &report.properties else {
        return Ok(format!(
            "<section class=\"compound\">\n<h2>{}</h2>\n<p class=\"not-found\">{} not found.</p>\n</section>",
            escape_html(label),
            escape_html(label),
        ));
    };

    let mut section = String::new();
    // Writing to a String cannot fail; errors below are only from the chart.
    let _ = writeln!(section, "<section class=\"compound\">");
    let _ = writeln!(
        section,
        "<h2>{}: {}</h2>",
        escape_html(label),
        escape_html(report.display_name())
    );

    let _ = writeln!(section, "<dl class=\"properties\">");
    for (field_label, value) in labels::display_rows(record) {
        let _ = writeln!(
            section,
            "<dt>{}</dt><dd>{}</dd>",
            escape_html(field_label),
            escape_html(&value)
        );
    }
    let _ = writeln!(section, "</dl>");

    let _ = writeln!(section, "<h3>Similar Compounds</h3>");
    if report.similar.is_empty() {
        let _ = writeln!(section, "<p>{NO_SIMILAR}</p>");
    } else {
        let joined = report
            .similar
            .iter()
            .map(|title| escape_html(title))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(section, "<p>{joined}</p>");
    }

    let _ = writeln!(section, "<h3>Safety Info</h3>");
    let _ = writeln!(
        section,
        "<div class=\"safety\">{}</div>",
        escape_html(&report.safety)
    );

    let _ = writeln!(section, "<h3>Properties Chart</h3>");
    let svg = chart::property_chart(record, &options.chart)?;
    let _ = writeln!(section, "<figure class=\"chart\">{svg}</figure>");

    let _ = writeln!(section, "<h3>3D Structure</h3>");
    let panel = match &report.structure {
        Some(Ok(structure)) => viewer::embed(structure, &options.viewer),
        Some(Err(error)) => viewer::error_fragment(&error.to_string()),
        None => viewer::error_fragment("structure lookup did not run"),
    };
    let _ = writeln!(section, "<div class=\"viewer\">{panel}</div>");
    let _ = write!(section, "</section>");

    Ok(section)
}

/// Assembles rendered sections into a complete standalone document.
///
/// Sections sit side by side (one column per compound) and share the page
/// header; the caller controls how many there are.
pub fn document(title: &str, sections: &[String]) -> String {
    let mut page = String::new();
    let _ = writeln!(page, "<!DOCTYPE html>");
    let _ = writeln!(page, "<html lang=\"en\">");
    let _ = writeln!(page, "<head>");
    let _ = writeln!(page, "<meta charset=\"utf-8\">");
    let _ = writeln!(page, "<title>{}</title>", escape_html(title));
    let _ = writeln!(
        page,
        "<style>\n\
         body {{ font-family: sans-serif; margin: 2em; }}\n\
         .columns {{ display: flex; gap: 2em; align-items: flex-start; }}\n\
         .compound {{ flex: 1; min-width: 0; }}\n\
         .properties dt {{ font-weight: bold; }}\n\
         .properties dd {{ margin: 0 0 0.5em 0; overflow-wrap: anywhere; }}\n\
         .safety {{ background: #eef6fb; padding: 0.8em; border-radius: 4px; }}\n\
         .not-found {{ color: #b00020; }}\n\
         </style>"
    );
    let _ = writeln!(page, "</head>");
    let _ = writeln!(page, "<body>");
    let _ = writeln!(page, "<h1>{}</h1>", escape_html(title));
    let _ = writeln!(page, "<div class=\"columns\">");
    for section in sections {
        let _ = writeln!(page, "{section}");
    }
    let _ = writeln!(page, "</div>");
    let _ = writeln!(page, "</body>");
    let _ = write!(page, "</html>");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Cid, PropertyRecord, StructureFile};
    use crate::core::rest::RestError;
    use crate::engine::EngineError;

    fn found_report() -> CompoundReport {
        CompoundReport {
            query: "water".to_string(),
            properties: Some(PropertyRecord {
                molecular_formula: Some("H2O".to_string()),
                molecular_weight: Some(18.015),
                title: Some("Water".to_string()),
                ..Default::default()
            }),
            similar: vec!["Ammonia".to_string(), "Methane".to_string()],
            safety: "Non-flammable.".to_string(),
            structure: Some(Ok(StructureFile::new(Cid(962), "sdf\n$$$$\n"))),
        }
    }

    #[test]
    fn found_compound_renders_every_panel() {
        let html = compound_section(&found_report(), "Compound 1", &PageOptions::default()).unwrap();
        assert!(html.contains("Compound 1: Water"));
        assert!(html.contains("<dt>Molecular Formula</dt><dd>H2O</dd>"));
        assert!(html.contains("Ammonia, Methane"));
        assert!(html.contains("Non-flammable."));
        assert!(html.contains("<svg"));
        assert!(html.contains("chemscope-viewer-962"));
    }

    #[test]
    fn absent_fields_render_na_placeholders() {
        let mut report = found_report();
        report.properties = Some(PropertyRecord {
            title: Some("Mystery".to_string()),
            ..Default::default()
        });
        let html = compound_section(&report, "Compound 1", &PageOptions::default()).unwrap();
        assert!(html.contains("<dt>Canonical SMILES</dt><dd>N/A</dd>"));
    }

    #[test]
    fn not_found_compound_renders_only_the_message() {
        let report = CompoundReport {
            query: "zzzqqqxx123".to_string(),
            properties: None,
            similar: Vec::new(),
            safety: String::new(),
            structure: None,
        };
        let html = compound_section(&report, "Compound 2", &PageOptions::default()).unwrap();
        assert!(html.contains("Compound 2 not found."));
        assert!(!html.contains("<svg"));
        assert!(!html.contains("chemscope-viewer"));
        assert!(!html.contains("Safety Info"));
    }

    #[test]
    fn empty_similarity_set_renders_the_none_message() {
        let mut report = found_report();
        report.similar.clear();
        let html = compound_section(&report, "Compound 1", &PageOptions::default()).unwrap();
        assert!(html.contains(NO_SIMILAR));
    }

    #[test]
    fn structure_failure_renders_the_error_fragment() {
        let mut report = found_report();
        report.structure = Some(Err(EngineError::Rest(RestError::Status {
            status: 404,
            url: "http://x/record/SDF".to_string(),
        })));
        let html = compound_section(&report, "Compound 1", &PageOptions::default()).unwrap();
        assert!(html.contains("color:red"));
        assert!(html.contains("404"));
        assert!(!html.contains("chemscope-viewer-"));
    }

    #[test]
    fn document_wraps_sections_side_by_side() {
        let sections = vec!["<section>a</section>".to_string(), "<section>b</section>".to_string()];
        let html = document("Molecular Data Explorer", &sections);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Molecular Data Explorer</h1>"));
        assert!(html.contains("<section>a</section>"));
        assert!(html.contains("<section>b</section>"));
        assert!(html.ends_with("</html>"));
    }
}
