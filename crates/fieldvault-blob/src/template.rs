//! Blob path templates interpolated from request arguments

use crate::{BlobError, Result};
use serde_json::{Map, Value};

/// A blob path template with `{placeholder}` segments filled in from the
/// request argument mapping, e.g. `snippets/{snippetname}.json`.
///
/// The invocation host computes storage paths this way for every bound
/// tool: placeholder names refer to argument fields by exact name.
#[derive(Debug, Clone)]
pub struct BlobTemplate {
    template: String,
}

impl BlobTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Resolve the template against an argument mapping.
    ///
    /// A placeholder whose argument is missing, empty, or not a renderable
    /// scalar leaves the blob unaddressable; that is a storage-layer
    /// failure, not a tool reply.
    pub fn resolve(&self, args: &Map<String, Value>) -> Result<String> {
        let mut path = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after
                .find('}')
                .ok_or_else(|| BlobError::InvalidPath(self.template.clone()))?;

            let key = &after[..end];
            let value = args.get(key).map(render_value).unwrap_or_default();
            if value.is_empty() {
                return Err(BlobError::UnresolvedPlaceholder(key.to_string()));
            }

            path.push_str(&value);
            rest = &after[end + 1..];
        }

        path.push_str(rest);
        Ok(path)
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

/// Render a scalar argument value into a path segment
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_resolve_single_placeholder() {
        let template = BlobTemplate::new("snippets/{snippetname}.json");
        let path = template
            .resolve(&args(json!({"snippetname": "greeting"})))
            .unwrap();

        assert_eq!(path, "snippets/greeting.json");
    }

    #[test]
    fn test_resolve_multiple_placeholders() {
        let template = BlobTemplate::new("simple-sensor-data/{timestamp}-{sensor_id}.json");
        let path = template
            .resolve(&args(
                json!({"timestamp": "2026-01-01", "sensor_id": "s1", "value": 20.5}),
            ))
            .unwrap();

        assert_eq!(path, "simple-sensor-data/2026-01-01-s1.json");
    }

    #[test]
    fn test_numbers_render_as_path_segments() {
        let template = BlobTemplate::new("simple-sensor-data/{timestamp}-{sensor_id}.json");
        let path = template
            .resolve(&args(json!({"timestamp": 1767225600, "sensor_id": "s1"})))
            .unwrap();

        assert_eq!(path, "simple-sensor-data/1767225600-s1.json");
    }

    #[test]
    fn test_missing_placeholder_value_is_an_error() {
        let template = BlobTemplate::new("snippets/{snippetname}.json");

        let result = template.resolve(&args(json!({"other": "x"})));
        assert!(matches!(
            result,
            Err(BlobError::UnresolvedPlaceholder(ref key)) if key == "snippetname"
        ));
    }

    #[test]
    fn test_empty_placeholder_value_is_an_error() {
        let template = BlobTemplate::new("snippets/{snippetname}.json");

        let result = template.resolve(&args(json!({"snippetname": ""})));
        assert!(matches!(result, Err(BlobError::UnresolvedPlaceholder(_))));
    }

    #[test]
    fn test_composite_values_do_not_render() {
        let template = BlobTemplate::new("snippets/{snippetname}.json");

        let result = template.resolve(&args(json!({"snippetname": {"nested": true}})));
        assert!(matches!(result, Err(BlobError::UnresolvedPlaceholder(_))));
    }

    #[test]
    fn test_unterminated_placeholder_is_invalid() {
        let template = BlobTemplate::new("snippets/{snippetname.json");

        let result = template.resolve(&args(json!({"snippetname": "a"})));
        assert!(matches!(result, Err(BlobError::InvalidPath(_))));
    }

    #[test]
    fn test_template_without_placeholders() {
        let template = BlobTemplate::new("snippets/static.json");
        let path = template.resolve(&Map::new()).unwrap();

        assert_eq!(path, "snippets/static.json");
    }
}
