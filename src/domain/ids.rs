use serde_json::Value;

/// Key under which a document's own identifier travels.
pub const ID_FIELD: &str = "_id";

/// Render an identifier as a plain string.
///
/// Accepts strings, numbers and extended-JSON object ids (`{"$oid": "..."}`).
/// Returns `None` for anything that is not recognisably an identifier.
pub fn stringify_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => match map.get("$oid") {
            Some(Value::String(s)) if map.len() == 1 => Some(s.clone()),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn plain_string_is_kept() {
        assert_eq!(stringify_id(&json!("abc")), Some("abc".to_string()));
    }

    #[test]
    fn extended_json_object_id_is_unwrapped() {
        let oid = json!({ "$oid": "65f1c0ffee0000000000beef" });
        assert_eq!(
            stringify_id(&oid),
            Some("65f1c0ffee0000000000beef".to_string())
        );
    }

    #[test]
    fn numbers_are_rendered() {
        assert_eq!(stringify_id(&json!(42)), Some("42".to_string()));
    }

    #[test]
    fn other_shapes_are_not_ids() {
        assert_eq!(stringify_id(&json!(null)), None);
        assert_eq!(stringify_id(&json!({ "$oid": "x", "extra": 1 })), None);
        assert_eq!(stringify_id(&json!([1, 2])), None);
    }
}
