pub mod css;
pub mod helpers;
pub mod json_utils;
pub mod markup;
pub mod network;
pub mod schema;
pub mod typescript;

/// Output of conversions that are listed in the menu but have no grammar-specific logic:
/// the input unchanged, under a comment naming the target conversion.
pub fn annotate_passthrough(id: &str, input: &str) -> String {
    format!("// converted to {id}\n{input}")
}
