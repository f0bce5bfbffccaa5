use console_error_panic_hook::set_once as set_panic_hook;
use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod convert;
pub mod error;
pub mod history;
pub mod registry;

pub use config::ConvertConfig;
pub use error::{ConversionResult, ConvertError};
pub use history::{HistoryDraft, HistoryEntry, HISTORY_LIMIT};
pub use registry::{
    list_by_category, lookup, lookup_or_default, search, transform, transform_with, Category,
    ConversionSpec, DEFAULT_CONVERSION,
};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    set_panic_hook();
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CategoryListing {
    category: Category,
    conversions: Vec<&'static ConversionSpec>,
}

fn listings(groups: Vec<(Category, Vec<&'static ConversionSpec>)>) -> Vec<CategoryListing> {
    groups
        .into_iter()
        .map(|(category, conversions)| CategoryListing {
            category,
            conversions,
        })
        .collect()
}

/// Converts an engine failure into a JS `Error` carrying the classification in `kind`.
fn error_to_js(err: ConvertError) -> JsValue {
    let js_err = js_sys::Error::new(&err.to_string());
    let _ = Reflect::set(
        &js_err,
        &JsValue::from_str("kind"),
        &JsValue::from_str(err.kind()),
    );
    js_err.into()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn config_from_js(value: JsValue) -> Result<ConvertConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ConvertConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub fn transform_snippet(id: &str, input: &str, config: JsValue) -> Result<String, JsValue> {
    let config = config_from_js(config)?;
    transform_with(id, input, &config).map_err(error_to_js)
}

#[wasm_bindgen]
pub fn list_conversions() -> Result<JsValue, JsValue> {
    to_js(&listings(list_by_category()))
}

#[wasm_bindgen]
pub fn search_conversions(query: &str) -> Result<JsValue, JsValue> {
    to_js(&listings(search(query)))
}

#[wasm_bindgen]
pub fn conversion_info(id: &str) -> Result<JsValue, JsValue> {
    let spec = lookup(id).map_err(error_to_js)?;
    to_js(spec)
}

/// Resolves a possibly stale identifier (e.g. from history) to a usable conversion.
#[wasm_bindgen]
pub fn resolve_conversion(id: &str) -> Result<JsValue, JsValue> {
    to_js(lookup_or_default(id))
}

#[wasm_bindgen]
pub fn history_draft(id: &str, input: &str, output: &str) -> Result<JsValue, JsValue> {
    to_js(&HistoryDraft::from_outcome(id, input, &Ok(output.to_string())))
}

#[wasm_bindgen]
pub fn recent_history(entries: JsValue) -> Result<JsValue, JsValue> {
    let entries: Vec<HistoryEntry> =
        serde_wasm_bindgen::from_value(entries).map_err(|err| JsValue::from_str(&err.to_string()))?;
    to_js(&history::recent(entries, HISTORY_LIMIT))
}
