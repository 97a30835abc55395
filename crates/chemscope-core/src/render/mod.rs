//! # Render Module
//!
//! Turns assembled reports into embeddable markup. Nothing here talks to the
//! network: the viewer fragment wraps an already-fetched SDF blob for the
//! 3Dmol.js widget, the chart draws the four numeric properties as an inline
//! SVG, and the page module composes per-compound sections into one document.

pub mod chart;
pub mod labels;
pub mod page;
pub mod viewer;

use thiserror::Error;

/// Errors produced while rendering markup.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The chart backend failed to draw.
    #[error("chart rendering failed: {0}")]
    Chart(String),
}

/// Escapes text for inclusion in HTML element content or attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_neutralizes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escape_html_passes_plain_text_through() {
        assert_eq!(escape_html("Water (H2O)"), "Water (H2O)");
    }
}
