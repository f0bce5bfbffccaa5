// Shared name-shaping and quoting helpers used by multiple converters (TypeScript, CSS, JSX).
use regex::Regex;
use std::sync::OnceLock;

/// Converts an arbitrary key into a PascalCase type name (leading letter, camel-cased).
pub fn type_name(key: &str) -> String {
    let mut out = String::new();
    let mut cap_next = true;
    for ch in key.chars() {
        if ch.is_alphanumeric() {
            if cap_next {
                out.extend(ch.to_uppercase());
                cap_next = false;
            } else {
                out.push(ch);
            }
        } else {
            cap_next = true;
        }
    }
    let trimmed = out.trim_start_matches(|ch: char| !ch.is_alphabetic());
    let mut name = String::new();
    let mut chars = trimmed.chars();
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name
}

/// Naive English singular used to name array element types (`Items` -> `Item`).
pub fn singular(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if name.len() > 1 && name.ends_with('s') && !name.ends_with("ss") {
        return name[..name.len() - 1].to_string();
    }
    name.to_string()
}

/// Converts a kebab-case CSS property into camelCase: each `-x` becomes `X`.
///
/// # Example
/// ```
/// use convert_core::convert::helpers::camel_case;
/// assert_eq!(camel_case("background-color"), "backgroundColor");
/// assert_eq!(camel_case("-webkit-transition"), "WebkitTransition");
/// ```
pub fn camel_case(property: &str) -> String {
    regex_hyphen_lower()
        .replace_all(property, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Escapes single quotes so the value can sit inside a `'...'` JS string literal.
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "\\'")
}

/// Returns true when `key` can be written as a bare JS/TS property name.
pub fn is_identifier(key: &str) -> bool {
    regex_identifier().is_match(key)
}

/// Writes an object key bare when possible, double-quoted otherwise.
pub fn property_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        serde_json::Value::String(key.to_string()).to_string()
    }
}

/// Prefixes every non-empty line with `pad`.
pub fn indent(text: &str, pad: &str) -> String {
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn regex_hyphen_lower() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-([a-z])").unwrap())
}

fn regex_identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap())
}
