// CSS declaration converters: JS style objects and Tailwind utility classes.
use indexmap::IndexMap;

use crate::config::ConvertConfig;
use crate::convert::helpers::{camel_case, escape_single_quotes, property_key};
use crate::error::ConversionResult;

/// Splits one `property: value` fragment on its first colon, dropping a trailing `;`.
///
/// Returns `None` unless both the property and the value are non-empty.
pub fn split_declaration(fragment: &str) -> Option<(&str, &str)> {
    let (key, value) = fragment.split_once(':')?;
    let key = key.trim();
    let value = value.trim();
    let value = value.strip_suffix(';').unwrap_or(value).trim_end();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Converts line-oriented CSS declarations into a JS style object literal.
///
/// Lines without both a property and a value are skipped; a repeated property
/// keeps its first position and takes the last value.
///
/// # Example
/// ```
/// use convert_core::ConvertConfig;
/// use convert_core::convert::css::css_to_object;
/// let js = css_to_object("font-size: 12px;\ncolor: red;", &ConvertConfig::default())?;
/// assert_eq!(js, "{\n  fontSize: '12px',\n  color: 'red'\n}");
/// # Ok::<(), convert_core::ConvertError>(())
/// ```
pub fn css_to_object(input: &str, _config: &ConvertConfig) -> ConversionResult {
    let mut style: IndexMap<String, String> = IndexMap::new();
    for line in input.lines() {
        if let Some((key, value)) = split_declaration(line) {
            style.insert(camel_case(key), escape_single_quotes(value));
        }
    }
    if style.is_empty() {
        return Ok("{}".into());
    }
    let body: Vec<String> = style
        .iter()
        .map(|(key, value)| format!("  {}: '{value}'", property_key(key)))
        .collect();
    Ok(format!("{{\n{}\n}}", body.join(",\n")))
}

/// Maps known CSS declarations onto Tailwind utility classes; unknown ones are dropped.
///
/// Declarations may be separated by newlines or semicolons, and selector braces are ignored.
pub fn css_to_tailwind(input: &str, _config: &ConvertConfig) -> ConversionResult {
    let mut classes: Vec<String> = Vec::new();
    for fragment in input.split(['\n', ';', '{', '}']) {
        let Some((property, value)) = split_declaration(fragment) else {
            continue;
        };
        let property = property.to_ascii_lowercase();
        let value = value.trim_end_matches("!important").trim();
        for class in utility_classes(&property, value) {
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
    }
    Ok(classes.join(" "))
}

fn utility_classes(property: &str, value: &str) -> Vec<String> {
    let lowered = value.to_ascii_lowercase();
    let v = lowered.as_str();
    let single = |class: Option<&str>| class.map(|c| vec![c.to_string()]).unwrap_or_default();
    match property {
        "display" => single(match v {
            "flex" | "inline-flex" | "block" | "inline-block" | "inline" | "grid" => Some(v),
            "none" => Some("hidden"),
            _ => None,
        }),
        "flex-direction" => single(match v {
            "row" => Some("flex-row"),
            "row-reverse" => Some("flex-row-reverse"),
            "column" => Some("flex-col"),
            "column-reverse" => Some("flex-col-reverse"),
            _ => None,
        }),
        "flex-wrap" => single(match v {
            "wrap" => Some("flex-wrap"),
            "nowrap" => Some("flex-nowrap"),
            _ => None,
        }),
        "justify-content" => single(match v {
            "flex-start" | "start" => Some("justify-start"),
            "flex-end" | "end" => Some("justify-end"),
            "center" => Some("justify-center"),
            "space-between" => Some("justify-between"),
            "space-around" => Some("justify-around"),
            "space-evenly" => Some("justify-evenly"),
            _ => None,
        }),
        "align-items" => single(match v {
            "flex-start" | "start" => Some("items-start"),
            "flex-end" | "end" => Some("items-end"),
            "center" => Some("items-center"),
            "baseline" => Some("items-baseline"),
            "stretch" => Some("items-stretch"),
            _ => None,
        }),
        "position" => single(match v {
            "static" | "relative" | "absolute" | "fixed" | "sticky" => Some(v),
            _ => None,
        }),
        "text-align" => match v {
            "left" | "center" | "right" | "justify" => vec![format!("text-{v}")],
            _ => Vec::new(),
        },
        "font-weight" => single(match v {
            "100" => Some("font-thin"),
            "200" => Some("font-extralight"),
            "300" => Some("font-light"),
            "400" | "normal" => Some("font-normal"),
            "500" => Some("font-medium"),
            "600" => Some("font-semibold"),
            "700" | "bold" => Some("font-bold"),
            "800" => Some("font-extrabold"),
            "900" => Some("font-black"),
            _ => None,
        }),
        "font-style" => single((v == "italic").then_some("italic")),
        "text-decoration" | "text-decoration-line" => single(match v {
            "underline" | "line-through" => Some(v),
            "none" => Some("no-underline"),
            _ => None,
        }),
        "text-transform" => single(match v {
            "uppercase" | "lowercase" | "capitalize" => Some(v),
            _ => None,
        }),
        "cursor" => match v {
            "pointer" | "default" | "not-allowed" | "move" | "wait" | "text" => {
                vec![format!("cursor-{v}")]
            }
            _ => Vec::new(),
        },
        "overflow" => match v {
            "hidden" | "auto" | "scroll" | "visible" => vec![format!("overflow-{v}")],
            _ => Vec::new(),
        },
        "width" => single(match v {
            "100%" => Some("w-full"),
            "100vw" => Some("w-screen"),
            _ => None,
        })
        .into_iter()
        .chain(spacing_class("w", v, false))
        .take(1)
        .collect(),
        "height" => single(match v {
            "100%" => Some("h-full"),
            "100vh" => Some("h-screen"),
            _ => None,
        })
        .into_iter()
        .chain(spacing_class("h", v, false))
        .take(1)
        .collect(),
        "gap" => spacing_class("gap", v, false).into_iter().collect(),
        "margin" => box_shorthand("m", v, true),
        "padding" => box_shorthand("p", v, false),
        "border-radius" => single(match v {
            "0" | "0px" => Some("rounded-none"),
            "2px" => Some("rounded-sm"),
            "4px" => Some("rounded"),
            "6px" => Some("rounded-md"),
            "8px" => Some("rounded-lg"),
            "12px" => Some("rounded-xl"),
            "9999px" | "50%" => Some("rounded-full"),
            _ => None,
        }),
        "opacity" => v
            .parse::<f64>()
            .ok()
            .filter(|o| (0.0..=1.0).contains(o))
            .map(|o| (o * 100.0).round() as u32)
            .filter(|pct| pct % 5 == 0)
            .map(|pct| vec![format!("opacity-{pct}")])
            .unwrap_or_default(),
        "color" => color_class("text", v).into_iter().collect(),
        "background-color" | "background" => color_class("bg", v).into_iter().collect(),
        "border-color" => color_class("border", v).into_iter().collect(),
        _ => match side_prefix(property) {
            Some((prefix, negative_ok)) => spacing_class(prefix, v, negative_ok).into_iter().collect(),
            None => Vec::new(),
        },
    }
}

fn side_prefix(property: &str) -> Option<(&'static str, bool)> {
    Some(match property {
        "margin-top" => ("mt", true),
        "margin-right" => ("mr", true),
        "margin-bottom" => ("mb", true),
        "margin-left" => ("ml", true),
        "padding-top" => ("pt", false),
        "padding-right" => ("pr", false),
        "padding-bottom" => ("pb", false),
        "padding-left" => ("pl", false),
        _ => return None,
    })
}

/// Expands `margin`/`padding` shorthands with one to four values.
fn box_shorthand(prefix: &str, value: &str, negative_ok: bool) -> Vec<String> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let sides: Vec<(String, &str)> = match parts.as_slice() {
        [all] => vec![(prefix.to_string(), *all)],
        [y, x] => vec![(format!("{prefix}y"), *y), (format!("{prefix}x"), *x)],
        [t, x, b] => vec![
            (format!("{prefix}t"), *t),
            (format!("{prefix}x"), *x),
            (format!("{prefix}b"), *b),
        ],
        [t, r, b, l] => vec![
            (format!("{prefix}t"), *t),
            (format!("{prefix}r"), *r),
            (format!("{prefix}b"), *b),
            (format!("{prefix}l"), *l),
        ],
        _ => Vec::new(),
    };
    sides
        .into_iter()
        .filter_map(|(side, v)| spacing_class(&side, v, negative_ok))
        .collect()
}

/// Maps a length onto the 4px spacing scale, falling back to an arbitrary-value class.
fn spacing_class(prefix: &str, value: &str, negative_ok: bool) -> Option<String> {
    if value == "auto" {
        return Some(format!("{prefix}-auto"));
    }
    let (negative, magnitude) = match value.strip_prefix('-') {
        Some(rest) if negative_ok => (true, rest),
        Some(_) => return None,
        None => (false, value),
    };
    let px = if magnitude == "0" {
        0.0
    } else if let Some(num) = magnitude.strip_suffix("px") {
        num.parse::<f64>().ok()?
    } else if let Some(num) = magnitude.strip_suffix("rem") {
        num.parse::<f64>().ok()? * 16.0
    } else {
        return None;
    };
    let sign = if negative && px != 0.0 { "-" } else { "" };
    let step = if px == 1.0 {
        "px".to_string()
    } else if px.fract() == 0.0 && (px as u64) % 4 == 0 {
        ((px as u64) / 4).to_string()
    } else {
        return Some(format!("{sign}{prefix}-[{magnitude}]"));
    };
    Some(format!("{sign}{prefix}-{step}"))
}

fn color_class(prefix: &str, value: &str) -> Option<String> {
    let name = match value {
        "white" | "#fff" | "#ffffff" => "white",
        "black" | "#000" | "#000000" => "black",
        "transparent" => "transparent",
        "currentcolor" => "current",
        hex if hex.starts_with('#')
            && matches!(hex.len(), 4 | 7)
            && hex[1..].chars().all(|ch| ch.is_ascii_hexdigit()) =>
        {
            return Some(format!("{prefix}-[{hex}]"));
        }
        _ => return None,
    };
    Some(format!("{prefix}-{name}"))
}
