//! Safe dotted-path lookup into a JSON value.

use serde_json::Value;

/// Resolve a dotted path (`"data.payload"`, `"items.0.id"`) against `root`.
///
/// Object segments index maps; numeric segments index arrays. An empty path
/// or any missing segment yields `None` - this never fails.
#[must_use]
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::lookup;
    use serde_json::json;

    #[test]
    fn resolves_nested_objects() {
        let root = json!({"data": {"payload": [{"id": 1}]}});
        assert_eq!(lookup(&root, "data.payload"), Some(&json!([{"id": 1}])));
    }

    #[test]
    fn resolves_array_indices() {
        let root = json!({"items": [{"id": 1}, {"id": 2}]});
        assert_eq!(lookup(&root, "items.1.id"), Some(&json!(2)));
    }

    #[test]
    fn missing_segment_yields_none() {
        let root = json!({"data": {"payload": 1}});
        assert_eq!(lookup(&root, "data.missing"), None);
        assert_eq!(lookup(&root, "missing.payload"), None);
    }

    #[test]
    fn empty_path_yields_none() {
        let root = json!({"data": 1});
        assert_eq!(lookup(&root, ""), None);
    }

    #[test]
    fn descending_into_a_scalar_yields_none() {
        let root = json!({"data": 7});
        assert_eq!(lookup(&root, "data.payload"), None);
    }

    #[test]
    fn non_numeric_array_segment_yields_none() {
        let root = json!({"items": [1, 2]});
        assert_eq!(lookup(&root, "items.first"), None);
    }
}
