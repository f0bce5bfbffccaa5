// Pattern-based SVG/HTML to JSX rewrites. Each pattern rewrites its first match only; there is
// no tree parsing, so malformed markup passes through with whatever the patterns touched.
use regex::{NoExpand, Regex};
use std::sync::OnceLock;

use crate::config::ConvertConfig;
use crate::convert::css::split_declaration;
use crate::convert::helpers::{camel_case, escape_single_quotes, indent, property_key};
use crate::error::{ConversionResult, ConvertError};

const SVG_ATTRIBUTES: [(&str, &str); 3] = [
    ("stroke-width", "strokeWidth"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
];

/// Wraps SVG markup in a React component that spreads `props` onto the `<svg>` element.
///
/// # Example
/// ```
/// use convert_core::ConvertConfig;
/// use convert_core::convert::markup::svg_to_react;
/// let jsx = svg_to_react(r#"<svg stroke-width="2"></svg>"#, &ConvertConfig::default())?;
/// assert!(jsx.contains(r#"<svg {...props} strokeWidth="2"></svg>"#));
/// # Ok::<(), convert_core::ConvertError>(())
/// ```
pub fn svg_to_react(input: &str, config: &ConvertConfig) -> ConversionResult {
    let svg = camelize_svg_attributes(require_svg(input)?);
    let svg = svg.replacen("<svg", "<svg {...props}", 1);
    Ok(component(&config.component_name, "(props)", &svg))
}

/// Wraps SVG markup in a React component styled through a Tailwind `className` prop.
///
/// Explicit `width`/`height` are removed, and `stroke`/`fill` are forced to
/// `currentColor`/`none` so the icon follows the surrounding text color.
pub fn svg_to_tailwind(input: &str, config: &ConvertConfig) -> ConversionResult {
    let mut svg = camelize_svg_attributes(require_svg(input)?);
    svg = regex_width().replacen(&svg, 1, "").into_owned();
    svg = regex_height().replacen(&svg, 1, "").into_owned();
    svg = force_attribute(&svg, regex_stroke(), r#"stroke="currentColor""#);
    svg = force_attribute(&svg, regex_fill(), r#"fill="none""#);
    let svg = svg.replacen("<svg", "<svg className={className}", 1);
    let props = format!(
        "({{ className = {} }})",
        serde_json::Value::String(config.tailwind_class.clone())
    );
    Ok(component(&config.component_name, &props, &svg))
}

/// Rewrites `class`, `for` and inline `style` attributes into their JSX forms.
///
/// # Example
/// ```
/// use convert_core::ConvertConfig;
/// use convert_core::convert::markup::html_to_jsx;
/// let jsx = html_to_jsx(r#"<p style="margin-top: 4px">hi</p>"#, &ConvertConfig::default())?;
/// assert_eq!(jsx, "<p style={{marginTop: '4px'}}>hi</p>");
/// # Ok::<(), convert_core::ConvertError>(())
/// ```
pub fn html_to_jsx(input: &str, _config: &ConvertConfig) -> ConversionResult {
    let mut out = regex_class().replacen(input, 1, "${1}className=").into_owned();
    out = regex_for().replacen(&out, 1, "${1}htmlFor=").into_owned();
    out = regex_style_attr()
        .replacen(&out, 1, |caps: &regex::Captures| {
            format!("{}style={{{{{}}}}}", &caps[1], style_object(&caps[2]))
        })
        .into_owned();
    Ok(out)
}

fn require_svg(input: &str) -> Result<&str, ConvertError> {
    let svg = input.trim();
    if !svg.contains("<svg") {
        return Err(ConvertError::parse("input does not contain an <svg> element"));
    }
    Ok(svg)
}

fn camelize_svg_attributes(svg: &str) -> String {
    SVG_ATTRIBUTES
        .iter()
        .fold(svg.to_string(), |acc, (from, to)| acc.replacen(from, to, 1))
}

fn force_attribute(svg: &str, pattern: &Regex, attribute: &str) -> String {
    if pattern.is_match(svg) {
        pattern.replacen(svg, 1, NoExpand(attribute)).into_owned()
    } else {
        svg.replacen("<svg", &format!("<svg {attribute}"), 1)
    }
}

fn component(name: &str, params: &str, svg: &str) -> String {
    format!(
        "import React from 'react';\n\nconst {name} = {params} => (\n{}\n);\n\nexport default {name};",
        indent(svg, "  ")
    )
}

/// Converts `a: b; c-d: e` into `a: 'b', cD: 'e'`.
fn style_object(style: &str) -> String {
    style
        .split(';')
        .filter_map(split_declaration)
        .map(|(key, value)| {
            format!(
                "{}: '{}'",
                property_key(&camel_case(key)),
                escape_single_quotes(value)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn regex_width() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\s+width=(?:"[^"]*"|'[^']*')"#).unwrap())
}

fn regex_height() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\s+height=(?:"[^"]*"|'[^']*')"#).unwrap())
}

fn regex_stroke() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\bstroke=(?:"[^"]*"|'[^']*')"#).unwrap())
}

fn regex_fill() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\bfill=(?:"[^"]*"|'[^']*')"#).unwrap())
}

fn regex_class() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\s)class=").unwrap())
}

fn regex_for() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\s)for=").unwrap())
}

fn regex_style_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(\s)style="([^"]*)""#).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="red" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
  <path stroke-width="1" d="M5 12h14"/>
</svg>"#;

    #[test]
    fn react_component_spreads_props_and_camelizes_first_match() {
        let jsx = svg_to_react(ICON, &ConvertConfig::default()).unwrap();
        assert!(jsx.starts_with("import React from 'react';\n\nconst SvgComponent = (props) => (\n  <svg {...props} xmlns="));
        assert!(jsx.contains(r#"strokeWidth="2" strokeLinecap="round" strokeLinejoin="round">"#));
        assert!(jsx.contains(r#"<path stroke-width="1""#), "only the first match is rewritten");
        assert!(jsx.ends_with(");\n\nexport default SvgComponent;"));
        assert!(jsx.contains(r#"width="24""#));
    }

    #[test]
    fn tailwind_component_replaces_size_and_colors() {
        let jsx = svg_to_tailwind(ICON, &ConvertConfig::default()).unwrap();
        assert!(jsx.contains(r#"const SvgComponent = ({ className = "w-6 h-6" }) => ("#));
        assert!(jsx.contains(r#"<svg className={className} xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" strokeWidth="2""#));
        assert!(!jsx.contains(r#" width="24""#));
        assert!(!jsx.contains(r#"height="24""#));
    }

    #[test]
    fn tailwind_inserts_missing_stroke_and_fill() {
        let jsx = svg_to_tailwind(r#"<svg viewBox="0 0 1 1"></svg>"#, &ConvertConfig::default())
            .unwrap();
        assert!(jsx.contains(r#"<svg className={className} fill="none" stroke="currentColor" viewBox="0 0 1 1"></svg>"#));
    }

    #[test]
    fn svg_conversions_require_an_svg_tag() {
        let err = svg_to_react("<div></div>", &ConvertConfig::default()).unwrap_err();
        assert_eq!(err.kind(), "ParseError");
        assert!(svg_to_tailwind("hello", &ConvertConfig::default()).is_err());
    }

    #[test]
    fn html_rewrites_attributes() {
        let jsx = html_to_jsx(r#"<div class="a" for="b"></div>"#, &ConvertConfig::default()).unwrap();
        assert_eq!(jsx, r#"<div className="a" htmlFor="b"></div>"#);
    }

    #[test]
    fn html_rewrites_first_match_only() {
        let jsx = html_to_jsx(
            r#"<ul class="list"><li class="item" data-class="x">a</li></ul>"#,
            &ConvertConfig::default(),
        )
        .unwrap();
        assert_eq!(jsx, r#"<ul className="list"><li class="item" data-class="x">a</li></ul>"#);
    }

    #[test]
    fn html_inline_style_becomes_object() {
        let jsx = html_to_jsx(
            r#"<span style="color: red; font-family: 'Inter';">x</span>"#,
            &ConvertConfig::default(),
        )
        .unwrap();
        assert_eq!(jsx, r#"<span style={{color: 'red', fontFamily: '\'Inter\''}}>x</span>"#);
    }
}
