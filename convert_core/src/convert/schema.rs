// Schema declarations (Zod, TypeBox, Mongoose, SQL) generated from a JSON object's top-level keys.
//
// All four targets share the same two-state inference: a numeric runtime value maps to the
// target's number type, anything else (booleans, nulls, nested values) to its string type.
use crate::config::ConvertConfig;
use crate::convert::helpers::property_key;
use crate::convert::json_utils::{FieldKind, classify_fields, parse_object};
use crate::error::ConversionResult;

/// Generates a `z.object({...})` declaration.
///
/// # Example
/// ```
/// use convert_core::ConvertConfig;
/// use convert_core::convert::schema::json_to_zod;
/// let zod = json_to_zod(r#"{"id":1,"name":"Ada"}"#, &ConvertConfig::default())?;
/// assert_eq!(zod, "const schema = z.object({\n  id: z.number(),\n  name: z.string()\n});");
/// # Ok::<(), convert_core::ConvertError>(())
/// ```
pub fn json_to_zod(input: &str, _config: &ConvertConfig) -> ConversionResult {
    object_fields(input, "const schema = z.object({", "});", |key, kind| {
        let ty = match kind {
            FieldKind::Number => "z.number()",
            FieldKind::String => "z.string()",
        };
        format!("{}: {ty}", property_key(key))
    })
}

/// Generates a `Type.Object({...})` TypeBox declaration.
pub fn json_to_typebox(input: &str, _config: &ConvertConfig) -> ConversionResult {
    object_fields(input, "const schema = Type.Object({", "});", |key, kind| {
        let ty = match kind {
            FieldKind::Number => "Type.Number()",
            FieldKind::String => "Type.String()",
        };
        format!("{}: {ty}", property_key(key))
    })
}

/// Generates a `new mongoose.Schema({...})` declaration with `Number`/`String` field types.
pub fn json_to_mongoose(input: &str, _config: &ConvertConfig) -> ConversionResult {
    object_fields(input, "const schema = new mongoose.Schema({", "});", |key, kind| {
        let ty = match kind {
            FieldKind::Number => "Number",
            FieldKind::String => "String",
        };
        format!("{}: {ty}", property_key(key))
    })
}

/// Generates a `CREATE TABLE` statement with one `INT`/`VARCHAR(255)` column per key.
///
/// # Example
/// ```
/// use convert_core::ConvertConfig;
/// use convert_core::convert::schema::json_to_sql;
/// let sql = json_to_sql(r#"{"id":1,"email":"a@b.c"}"#, &ConvertConfig::default())?;
/// assert_eq!(sql, "CREATE TABLE my_table (\n  id INT,\n  email VARCHAR(255)\n);");
/// # Ok::<(), convert_core::ConvertError>(())
/// ```
pub fn json_to_sql(input: &str, config: &ConvertConfig) -> ConversionResult {
    let open = format!("CREATE TABLE {} (", config.sql_table_name);
    object_fields(input, &open, ");", |key, kind| {
        let ty = match kind {
            FieldKind::Number => "INT",
            FieldKind::String => "VARCHAR(255)",
        };
        format!("{key} {ty}")
    })
}

fn object_fields(
    input: &str,
    open: &str,
    close: &str,
    field: impl Fn(&str, FieldKind) -> String,
) -> ConversionResult {
    let map = parse_object(input)?;
    let lines: Vec<String> = classify_fields(&map)
        .into_iter()
        .map(|(key, kind)| format!("  {}", field(key, kind)))
        .collect();
    if lines.is_empty() {
        return Ok(format!("{open}{close}"));
    }
    Ok(format!("{open}\n{}\n{close}", lines.join(",\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"zeta":1.5,"alpha":"a","active":true,"tags":[1],"owner":{"id":2},"gone":null}"#;

    fn config() -> ConvertConfig {
        ConvertConfig::default()
    }

    #[test]
    fn binary_inference_keeps_input_key_order() {
        let zod = json_to_zod(SAMPLE, &config()).unwrap();
        assert_eq!(
            zod,
            "const schema = z.object({\n  zeta: z.number(),\n  alpha: z.string(),\n  active: z.string(),\n  tags: z.string(),\n  owner: z.string(),\n  gone: z.string()\n});"
        );
    }

    #[test]
    fn typebox_and_mongoose_share_classification() {
        let typebox = json_to_typebox(SAMPLE, &config()).unwrap();
        assert!(typebox.starts_with("const schema = Type.Object({\n  zeta: Type.Number(),\n  alpha: Type.String(),"));
        let mongoose = json_to_mongoose(SAMPLE, &config()).unwrap();
        assert!(mongoose.starts_with("const schema = new mongoose.Schema({\n  zeta: Number,\n  alpha: String,"));
        assert!(mongoose.ends_with("  gone: String\n});"));
    }

    #[test]
    fn sql_uses_configured_table_name() {
        let config = ConvertConfig {
            sql_table_name: "people".into(),
            ..ConvertConfig::default()
        };
        let sql = json_to_sql(r#"{"age":30,"name":"Ada"}"#, &config).unwrap();
        assert_eq!(sql, "CREATE TABLE people (\n  age INT,\n  name VARCHAR(255)\n);");
    }

    #[test]
    fn empty_object_emits_empty_declaration() {
        assert_eq!(json_to_zod("{}", &config()).unwrap(), "const schema = z.object({});");
        assert_eq!(json_to_sql("{}", &config()).unwrap(), "CREATE TABLE my_table ();");
    }

    #[test]
    fn non_object_root_is_a_parse_error() {
        let err = json_to_mongoose("[1,2]", &config()).unwrap_err();
        assert_eq!(err.kind(), "ParseError");
        assert!(err.to_string().contains("an array"));
    }
}
