use localekit::DiagnosticSink;
use wasm_bindgen::JsValue;

/// Routes registry diagnostics to the browser console at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn warn(&self, message: &str) {
        web_sys::console::warn_1(&JsValue::from(message));
    }
}
