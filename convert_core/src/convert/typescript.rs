//! JSON to TypeScript interface inference.
//!
//! The parsed document is walked depth-first. Every object becomes an
//! interface named after the key it was found under; the slot for an
//! interface is reserved before its children are visited, so declarations
//! come out in discovery order with the root first. Objects whose fields and
//! field types match an earlier interface reuse that interface instead of
//! emitting a duplicate.
//!
//! # Example
//! ```
//! use convert_core::ConvertConfig;
//! use convert_core::convert::typescript::json_to_typescript;
//!
//! let ts = json_to_typescript(r#"{"id":1,"tags":["a"]}"#, &ConvertConfig::default())?;
//! assert_eq!(ts, "interface RootObject {\n  id: number;\n  tags: string[];\n}");
//! # Ok::<(), convert_core::ConvertError>(())
//! ```
use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use crate::config::ConvertConfig;
use crate::convert::helpers::{property_key, singular, type_name};
use crate::convert::json_utils::parse_json;
use crate::error::ConversionResult;

/// Infers TypeScript interfaces for an arbitrary JSON document.
pub fn json_to_typescript(input: &str, config: &ConvertConfig) -> ConversionResult {
    let value = parse_json(input)?;
    let root = config.root_type_name.as_str();
    let mut builder = InterfaceBuilder::default();
    let mut declarations = Vec::new();
    match &value {
        Value::Object(map) => {
            builder.interface(root, map);
        }
        Value::Array(items) => {
            let element = format!("{root}Item");
            let alias = builder.array_type(items, &element);
            declarations.push(format!("type {root} = {alias};"));
        }
        other => {
            let alias = builder.type_of(other, root);
            declarations.push(format!("type {root} = {alias};"));
        }
    }
    declarations.extend(builder.render());
    Ok(declarations.join("\n\n"))
}

#[derive(Debug)]
struct Interface {
    name: String,
    fields: Vec<(String, String)>,
}

#[derive(Debug, Default)]
struct InterfaceBuilder {
    slots: Vec<Option<Interface>>,
    names: HashSet<String>,
    shapes: HashMap<String, String>,
}

impl InterfaceBuilder {
    /// Registers an interface for `map` and returns the name callers should reference.
    fn interface(&mut self, hint: &str, map: &Map<String, Value>) -> String {
        let name = self.reserve_name(hint);
        let slot = self.slots.len();
        self.slots.push(None);

        let fields: Vec<(String, String)> = map
            .iter()
            .map(|(key, child)| (key.clone(), self.type_of(child, &type_name(key))))
            .collect();
        let signature: String = fields
            .iter()
            .map(|(key, ty)| format!("{key}:{ty};"))
            .collect();

        if let Some(existing) = self.shapes.get(&signature) {
            self.names.remove(&name);
            return existing.clone();
        }
        self.shapes.insert(signature, name.clone());
        self.slots[slot] = Some(Interface {
            name: name.clone(),
            fields,
        });
        name
    }

    fn type_of(&mut self, value: &Value, hint: &str) -> String {
        match value {
            Value::Null => "null".into(),
            Value::Bool(_) => "boolean".into(),
            Value::Number(_) => "number".into(),
            Value::String(_) => "string".into(),
            Value::Array(items) => self.array_type(items, &singular(hint)),
            Value::Object(map) => self.interface(hint, map),
        }
    }

    fn array_type(&mut self, items: &[Value], element_hint: &str) -> String {
        let mut members: Vec<String> = Vec::new();
        for item in items {
            let ty = self.type_of(item, element_hint);
            if !members.contains(&ty) {
                members.push(ty);
            }
        }
        match members.as_slice() {
            [] => "any[]".into(),
            [single] => format!("{single}[]"),
            many => format!("({})[]", many.join(" | ")),
        }
    }

    fn reserve_name(&mut self, hint: &str) -> String {
        let base = if hint.is_empty() { "Nested" } else { hint };
        let mut candidate = base.to_string();
        let mut counter = 2;
        while self.names.contains(&candidate) {
            candidate = format!("{base}{counter}");
            counter += 1;
        }
        self.names.insert(candidate.clone());
        candidate
    }

    fn render(self) -> Vec<String> {
        self.slots
            .into_iter()
            .flatten()
            .map(|iface| {
                let mut out = format!("interface {} {{\n", iface.name);
                for (key, ty) in &iface.fields {
                    out.push_str(&format!("  {}: {ty};\n", property_key(key)));
                }
                out.push('}');
                out
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> String {
        json_to_typescript(input, &ConvertConfig::default()).expect("valid json converts")
    }

    #[test]
    fn nested_objects_follow_discovery_order() {
        let ts = convert(r#"{"user":{"name":"Ada","address":{"city":"X"}},"meta":{"v":1}}"#);
        let user = ts.find("interface User {").expect("user interface");
        let address = ts.find("interface Address {").expect("address interface");
        let meta = ts.find("interface Meta {").expect("meta interface");
        assert!(ts.starts_with("interface RootObject {\n  user: User;\n  meta: Meta;\n}"));
        assert!(user < address && address < meta);
        assert!(ts.contains("\n}\n\ninterface User {"));
    }

    #[test]
    fn identical_shapes_share_one_interface() {
        let ts = convert(r#"{"home":{"city":"A"},"work":{"city":"B"}}"#);
        assert!(ts.contains("home: Home;"));
        assert!(ts.contains("work: Home;"));
        assert_eq!(ts.matches("interface ").count(), 2);
        assert!(!ts.contains("interface Work"));
    }

    #[test]
    fn clashing_names_get_numeric_suffix() {
        let ts = convert(r#"{"item":{"a":1},"items":[{"b":"x"}]}"#);
        assert!(ts.contains("item: Item;"));
        assert!(ts.contains("items: Item2[];"));
        assert!(ts.contains("interface Item2 {\n  b: string;\n}"));
    }

    #[test]
    fn arrays_infer_element_unions() {
        let ts = convert(r#"{"mixed":[1,"a",2],"empty":[],"grid":[[1,2]],"none":null}"#);
        assert!(ts.contains("mixed: (number | string)[];"));
        assert!(ts.contains("empty: any[];"));
        assert!(ts.contains("grid: number[][];"));
        assert!(ts.contains("none: null;"));
    }

    #[test]
    fn non_identifier_keys_are_quoted() {
        let ts = convert(r#"{"first-name":"Ada"}"#);
        assert!(ts.contains("  \"first-name\": string;"));
    }

    #[test]
    fn non_object_roots_become_aliases() {
        assert_eq!(convert("42"), "type RootObject = number;");
        let ts = convert(r#"[{"id":1}]"#);
        assert!(ts.starts_with("type RootObject = RootObjectItem[];\n\ninterface RootObjectItem {"));
    }

    #[test]
    fn root_name_comes_from_config() {
        let config = ConvertConfig {
            root_type_name: "Payload".into(),
            ..ConvertConfig::default()
        };
        let ts = json_to_typescript(r#"{"a":true}"#, &config).unwrap();
        assert_eq!(ts, "interface Payload {\n  a: boolean;\n}");
    }
}
