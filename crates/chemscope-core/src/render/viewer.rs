use super::escape_html;
use crate::core::models::StructureFile;

/// Script source for the embeddable molecular viewer widget.
const VIEWER_SCRIPT_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/3Dmol/2.0.4/3Dmol-min.js";

/// Presentation settings for the 3D viewer panel.
#[derive(Debug, Clone, Copy)]
pub struct ViewerOptions {
    /// Panel width in pixels.
    pub width: u32,
    /// Panel height in pixels.
    pub height: u32,
    /// Whether the model spins continuously.
    pub spin: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            spin: true,
        }
    }
}

/// Builds the self-contained viewer markup for a fetched structure.
///
/// The SDF payload is embedded as a JSON string literal (the widget treats it
/// as opaque text), rendered with stick style, camera fit to the model, and
/// optional continuous spin. The fragment is self-contained apart from the
/// widget script itself, which loads from a CDN.
pub fn embed(structure: &StructureFile, options: &ViewerOptions) -> String {
    let container = format!("chemscope-viewer-{}", structure.cid);
    // serde_json string encoding doubles as JS string-literal escaping.
    let sdf_literal = serde_json::to_string(&structure.sdf).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        concat!(
            "<script src=\"{script}\"></script>\n",
            "<div id=\"{id}\" style=\"width: {w}px; height: {h}px; position: relative;\"></div>\n",
            "<script>\n",
            "(function () {{\n",
            "  var element = document.getElementById(\"{id}\");\n",
            "  var viewer = $3Dmol.createViewer(element, {{ backgroundColor: \"white\" }});\n",
            "  viewer.addModel({sdf}, \"sdf\");\n",
            "  viewer.setStyle({{}}, {{ stick: {{}} }});\n",
            "  viewer.zoomTo();\n",
            "  viewer.spin({spin});\n",
            "  viewer.render();\n",
            "}})();\n",
            "</script>"
        ),
        script = VIEWER_SCRIPT_URL,
        id = container,
        w = options.width,
        h = options.height,
        sdf = sdf_literal,
        spin = options.spin,
    )
}

/// Builds the visibly marked failure fragment for the 3D panel.
///
/// This is the one place failure detail reaches the user: the error's display
/// text is embedded (escaped) in the fragment instead of being replaced by a
/// generic message.
pub fn error_fragment(detail: &str) -> String {
    format!(
        "<div style=\"color:red;\">3D structure not available for this compound.<br>\
         <small>{}</small></div>",
        escape_html(detail)
    )
}
