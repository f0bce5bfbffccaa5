//! Tunable names and templates used by the generators.

use serde::{Deserialize, Serialize};

/// Configuration threaded explicitly into every transformation.
///
/// The defaults reproduce the fixed names the converters have always emitted;
/// the editor UI may pass a partial object to override individual fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertConfig {
    /// Table name used by the SQL `CREATE TABLE` generator (default: `my_table`)
    pub sql_table_name: String,
    /// Name of the top-level TypeScript interface (default: `RootObject`)
    pub root_type_name: String,
    /// Name of the generated React component (default: `SvgComponent`)
    pub component_name: String,
    /// Default `className` of the Tailwind SVG component (default: `w-6 h-6`)
    pub tailwind_class: String,
    /// URL used when a cURL command carries no quoted URL
    pub placeholder_url: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            sql_table_name: "my_table".into(),
            root_type_name: "RootObject".into(),
            component_name: "SvgComponent".into(),
            tailwind_class: "w-6 h-6".into(),
            placeholder_url: "https://api.example.com/data".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: ConvertConfig =
            serde_json::from_str(r#"{"sqlTableName":"users"}"#).expect("config parses");
        assert_eq!(config.sql_table_name, "users");
        assert_eq!(config.root_type_name, "RootObject");
        assert_eq!(config.tailwind_class, "w-6 h-6");
    }
}
