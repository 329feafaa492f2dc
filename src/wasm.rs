//! WebAssembly bindings for the prettifier.
//!
//! Nothing here touches the DOM, so the module can be loaded inside a web
//! worker that formats code off the UI thread.

use wasm_bindgen::prelude::*;

use crate::config::HighlightConfig;
use crate::error::ScanWarning;
use crate::format::{Formatter, HighlightResult};

/// Result of formatting, exposed to JavaScript through getters.
#[wasm_bindgen]
pub struct FormatOutput {
    html: String,
    line_count: usize,
    warnings: Vec<JsValue>,
}

#[wasm_bindgen]
impl FormatOutput {
    #[wasm_bindgen(getter)]
    pub fn html(&self) -> String {
        self.html.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    #[wasm_bindgen(getter)]
    pub fn warnings(&self) -> Vec<JsValue> {
        self.warnings.clone()
    }
}

impl From<HighlightResult> for FormatOutput {
    fn from(result: HighlightResult) -> Self {
        FormatOutput {
            html: result.html,
            line_count: result.line_count,
            warnings: result.warnings.iter().map(format_warning).collect(),
        }
    }
}

/// Format a warning into a `{message, start, end}` object for JS.
fn format_warning(warning: &ScanWarning) -> JsValue {
    let span = warning.span();
    let obj = js_sys::Object::new();
    // Setting plain data properties on a fresh object cannot fail
    let _ = js_sys::Reflect::set(&obj, &"message".into(), &warning.to_string().into());
    let _ = js_sys::Reflect::set(&obj, &"start".into(), &JsValue::from_f64(span.start as f64));
    let _ = js_sys::Reflect::set(&obj, &"end".into(), &JsValue::from_f64(span.end as f64));
    obj.into()
}

/// Initialize the WASM module (call once at startup).
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Format JavaScript source with the default configuration.
#[wasm_bindgen]
pub fn prettify(source: &str) -> FormatOutput {
    Formatter::default().format(source).into()
}

/// Format JavaScript source with a custom indent unit in pixels.
#[wasm_bindgen]
pub fn prettify_with_indent(source: &str, indent_unit: u32) -> FormatOutput {
    Formatter::new(HighlightConfig::default().with_indent_unit(indent_unit))
        .format(source)
        .into()
}
