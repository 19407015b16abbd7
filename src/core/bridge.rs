use std::collections::HashMap;

use serde_json::{Map, Value};

/// Ordered map handed across the bridge. Insertion order is preserved when
/// serialized.
pub type OutputMap = Map<String, Value>;

/// Builds the nested `additionalParameters` map.
///
/// The source mapping has no iteration order, so keys are emitted sorted to
/// keep bridge output stable between runs.
pub fn additional_parameters_map(params: &HashMap<String, String>) -> OutputMap {
    let mut entries: Vec<(&String, &String)> = params.iter().collect();
    entries.sort_unstable_by(|left, right| left.0.cmp(right.0));

    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect()
}

pub fn string_or_null(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |value| Value::String(value.to_string()))
}

pub fn string_list(values: Vec<String>) -> Value {
    Value::Array(values.into_iter().map(Value::String).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additional_parameters_keep_every_pair_in_key_order() {
        let params = HashMap::from([
            ("zeta".to_string(), "1".to_string()),
            ("alpha".to_string(), "".to_string()),
            ("mid".to_string(), "value with spaces".to_string()),
        ]);

        let map = additional_parameters_map(&params);

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
        for (key, value) in &params {
            assert_eq!(map.get(key), Some(&Value::String(value.clone())));
        }
    }

    #[test]
    fn empty_parameters_become_empty_map() {
        assert!(additional_parameters_map(&HashMap::new()).is_empty());
    }

    #[test]
    fn string_or_null_maps_absence_to_null() {
        assert_eq!(string_or_null(None), Value::Null);
        assert_eq!(string_or_null(Some("x")), Value::String("x".to_string()));
    }
}
