//! Static registry of supported conversions and the dispatch entry points.
//!
//! The table is fixed at build time. Categories and entries keep their
//! declaration order, which the editor uses for menu rendering and search.

use serde::Serialize;

use crate::config::ConvertConfig;
use crate::convert::{annotate_passthrough, css, markup, network, schema, typescript};
use crate::error::{ConversionResult, ConvertError};

/// Signature shared by every grammar-specific transformation.
pub type TransformFn = fn(&str, &ConvertConfig) -> ConversionResult;

/// Structural category: conversions sharing an input grammar family.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Svg,
    Html,
    Css,
    Json,
    Network,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 5] = [
        Category::Svg,
        Category::Html,
        Category::Css,
        Category::Json,
        Category::Network,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Svg => "SVG",
            Category::Html => "HTML",
            Category::Css => "CSS",
            Category::Json => "JSON",
            Category::Network => "NETWORK",
        }
    }
}

/// How a conversion produces its output.
#[derive(Clone, Copy)]
pub enum Logic {
    /// Grammar-specific transformation.
    Function(TransformFn),
    /// Menu entry without dedicated logic; echoes the input under a comment.
    Passthrough,
}

impl std::fmt::Debug for Logic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Logic::Function(_) => f.write_str("Function"),
            Logic::Passthrough => f.write_str("Passthrough"),
        }
    }
}

/// Immutable descriptor of one supported conversion.
#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct ConversionSpec {
    pub id: &'static str,
    pub category: Category,
    pub label: &'static str,
    /// Syntax-highlighting tag for the input editor
    pub source_language: &'static str,
    /// Syntax-highlighting tag for the output editor
    pub target_language: &'static str,
    #[serde(skip)]
    pub logic: Logic,
}

impl ConversionSpec {
    /// Runs this conversion on non-blank input.
    pub fn run(&self, input: &str, config: &ConvertConfig) -> ConversionResult {
        match self.logic {
            Logic::Function(transform) => transform(input, config),
            Logic::Passthrough => Ok(annotate_passthrough(self.id, input)),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}

/// Conversion used when a stored identifier no longer resolves.
pub const DEFAULT_CONVERSION: &str = "svg_react";

const fn spec(
    id: &'static str,
    category: Category,
    label: &'static str,
    source_language: &'static str,
    target_language: &'static str,
    logic: Logic,
) -> ConversionSpec {
    ConversionSpec {
        id,
        category,
        label,
        source_language,
        target_language,
        logic,
    }
}

#[rustfmt::skip]
static CONVERSIONS: &[ConversionSpec] = &[
    spec("svg_react", Category::Svg, "SVG to React Component", "xml", "javascript", Logic::Function(markup::svg_to_react)),
    spec("svg_tailwind", Category::Svg, "SVG to React + Tailwind", "xml", "javascript", Logic::Function(markup::svg_to_tailwind)),
    spec("html_jsx", Category::Html, "HTML to JSX", "html", "javascript", Logic::Function(markup::html_to_jsx)),
    spec("html_pug", Category::Html, "HTML to Pug", "html", "pug", Logic::Passthrough),
    spec("css_obj", Category::Css, "CSS to JS Object", "css", "javascript", Logic::Function(css::css_to_object)),
    spec("css_tailwind", Category::Css, "CSS to Tailwind Classes", "css", "plaintext", Logic::Function(css::css_to_tailwind)),
    spec("typescript", Category::Json, "JSON to TypeScript", "json", "typescript", Logic::Function(typescript::json_to_typescript)),
    spec("zod", Category::Json, "JSON to Zod Schema", "json", "typescript", Logic::Function(schema::json_to_zod)),
    spec("typebox", Category::Json, "JSON to TypeBox", "json", "typescript", Logic::Function(schema::json_to_typebox)),
    spec("mongoose", Category::Json, "JSON to Mongoose Schema", "json", "javascript", Logic::Function(schema::json_to_mongoose)),
    spec("sql", Category::Json, "JSON to SQL Schema", "json", "sql", Logic::Function(schema::json_to_sql)),
    spec("json_go", Category::Json, "JSON to Go Struct", "json", "go", Logic::Passthrough),
    spec("curl_fetch", Category::Network, "cURL to Fetch", "shell", "javascript", Logic::Function(network::curl_to_fetch)),
    spec("curl_axios", Category::Network, "cURL to Axios", "shell", "javascript", Logic::Passthrough),
];

/// Every registered conversion in declaration order.
pub fn conversions() -> &'static [ConversionSpec] {
    CONVERSIONS
}

/// Finds the conversion registered under `id`.
pub fn lookup(id: &str) -> Result<&'static ConversionSpec, ConvertError> {
    CONVERSIONS
        .iter()
        .find(|spec| spec.id == id)
        .ok_or_else(|| ConvertError::not_found(id))
}

/// Like [`lookup`], but stale identifiers resolve to [`DEFAULT_CONVERSION`].
pub fn lookup_or_default(id: &str) -> &'static ConversionSpec {
    lookup(id).unwrap_or_else(|_| {
        log::warn!("unknown conversion {id:?}, falling back to {DEFAULT_CONVERSION}");
        &CONVERSIONS[0]
    })
}

/// Conversions grouped by category, preserving declaration order of both.
pub fn list_by_category() -> Vec<(Category, Vec<&'static ConversionSpec>)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let entries: Vec<_> = CONVERSIONS
                .iter()
                .filter(|spec| spec.category == category)
                .collect();
            (category, entries)
        })
        .collect()
}

/// Case-insensitive substring filter over labels and category names.
///
/// Categories without a matching entry are omitted; a blank query returns the full listing.
pub fn search(query: &str) -> Vec<(Category, Vec<&'static ConversionSpec>)> {
    let needle = query.trim().to_lowercase();
    list_by_category()
        .into_iter()
        .map(|(category, entries)| {
            let kept = entries
                .into_iter()
                .filter(|spec| needle.is_empty() || spec.matches(&needle))
                .collect::<Vec<_>>();
            (category, kept)
        })
        .filter(|(_, entries)| !entries.is_empty())
        .collect()
}

/// Runs conversion `id` with the default configuration.
pub fn transform(id: &str, input: &str) -> ConversionResult {
    transform_with(id, input, &ConvertConfig::default())
}

/// Runs conversion `id` over `input`.
///
/// Blank input is reported as [`ConvertError::EmptyInput`] before the identifier is
/// resolved, so it holds for every `id`.
pub fn transform_with(id: &str, input: &str, config: &ConvertConfig) -> ConversionResult {
    if input.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    let spec = lookup(id).inspect_err(|_| log::warn!("unknown conversion {id:?}"))?;
    log::debug!("running {} ({} bytes)", spec.id, input.len());
    spec.run(input, config)
        .inspect_err(|err| log::debug!("{} failed: {err}", spec.id))
}
