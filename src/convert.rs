use serde::Serialize;

use crate::error::SteadyJsonError;
use crate::model::{JsonArray, JsonObject, JsonValue};
use crate::serializer::render;

/// Convert a `serde_json` value into the serializer's model.
///
/// Object member order is taken as-is from the input map (the
/// `preserve_order` feature keeps document order through parsing). Numbers
/// must fit in `i64`; floats and out-of-range integers are outside the
/// model's closed variant set and are rejected rather than approximated.
pub fn from_value(element: &serde_json::Value) -> Result<JsonValue, SteadyJsonError> {
    match element {
        serde_json::Value::Null => Ok(JsonValue::Null),
        serde_json::Value::Bool(val) => Ok(JsonValue::Bool(*val)),
        serde_json::Value::Number(num) => match num.as_i64() {
            Some(val) => Ok(JsonValue::Number(val)),
            None => Err(SteadyJsonError::UnsupportedValue(format!(
                "number {} does not fit a 64-bit integer",
                num
            ))),
        },
        serde_json::Value::String(val) => Ok(JsonValue::String(val.clone())),
        serde_json::Value::Array(arr) => {
            let items: Result<JsonArray, _> = arr.iter().map(from_value).collect();
            Ok(JsonValue::Array(items?))
        }
        serde_json::Value::Object(map) => {
            let members: Result<JsonObject, _> = map
                .iter()
                .map(|(key, value)| Ok::<_, SteadyJsonError>((key.clone(), from_value(value)?)))
                .collect();
            Ok(JsonValue::Object(members?))
        }
    }
}

/// Render any [`serde::Serialize`] type with the deterministic layout,
/// trailing newline included.
pub fn to_text<T: Serialize>(value: &T) -> Result<String, SteadyJsonError> {
    let tree = serde_json::to_value(value)
        .map_err(|err| SteadyJsonError::UnsupportedValue(err.to_string()))?;
    render(&from_value(&tree)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_keeps_member_order() {
        let parsed: serde_json::Value =
            serde_json::from_str(r#"{"zebra":1,"apple":2,"mango":3}"#).unwrap();
        let converted = from_value(&parsed).unwrap();

        let obj = match converted {
            JsonValue::Object(obj) => obj,
            other => panic!("expected object, got {:?}", other),
        };
        assert_eq!(obj.name(0), "zebra");
        assert_eq!(obj.name(1), "apple");
        assert_eq!(obj.name(2), "mango");
    }

    #[test]
    fn floats_are_rejected() {
        let parsed: serde_json::Value = serde_json::from_str("[1, 2.5]").unwrap();
        let err = from_value(&parsed).unwrap_err();
        assert!(matches!(err, SteadyJsonError::UnsupportedValue(_)));
    }

    #[test]
    fn oversized_integers_are_rejected() {
        let parsed: serde_json::Value =
            serde_json::from_str("18446744073709551615").unwrap();
        assert!(from_value(&parsed).is_err());
    }

    #[test]
    fn serialize_derived_types() {
        #[derive(Serialize)]
        struct Player {
            name: String,
            scores: Vec<i32>,
            active: bool,
        }

        let player = Player {
            name: "Alice".into(),
            scores: vec![95, 87, 92],
            active: true,
        };

        assert_eq!(
            to_text(&player).unwrap(),
            "{\n  \"name\": \"Alice\",\n  \"scores\": [95, 87, 92],\n  \"active\": true\n}\n"
        );
    }
}
