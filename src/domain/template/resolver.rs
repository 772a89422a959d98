// Evaluates compiled paths against concrete parameter values

use serde_json::Value;
use thiserror::Error;

use super::ast::{CompiledPath, FieldPath, UrlPart};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Missing value for path field '{0}'")]
    MissingField(String),
}

/// Look up `path` inside `value`, following object members only.
pub fn lookup<'v>(value: &'v Value, path: &FieldPath) -> Option<&'v Value> {
    path.segments()
        .iter()
        .try_fold(value, |current, segment| current.get(segment.as_str()))
}

/// Remove the field at `path` and return it.
///
/// Absent fields (or a non-object somewhere along the path) leave `value`
/// untouched, so removing the same path twice is harmless.
pub fn remove_field(value: &mut Value, path: &FieldPath) -> Option<Value> {
    let (last, parents) = path.segments().split_last()?;
    let mut current = value;
    for segment in parents {
        current = current.get_mut(segment.as_str())?;
    }
    current.as_object_mut()?.remove(last)
}

/// Build the URL a generated stub would compute for `param`.
pub fn resolve_url(compiled: &CompiledPath, param: &Value) -> Result<String, ResolveError> {
    let mut url = String::new();

    for part in &compiled.parts {
        match part {
            UrlPart::Literal(s) => url.push_str(s),
            UrlPart::Field(path) => match lookup(param, path) {
                None | Some(Value::Null) => {
                    return Err(ResolveError::MissingField(path.to_string()));
                }
                Some(Value::String(s)) => url.push_str(s),
                Some(other) => url.push_str(&other.to_string()),
            },
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::PathCompiler;
    use serde_json::json;

    fn path(raw: &str) -> FieldPath {
        FieldPath::parse(raw).unwrap()
    }

    #[test]
    fn test_lookup_nested() {
        let value = json!({"a": {"b": {"c": 3}}});
        assert_eq!(lookup(&value, &path("a.b.c")), Some(&json!(3)));
        assert_eq!(lookup(&value, &path("a.x")), None);
    }

    #[test]
    fn test_remove_field_twice_is_noop() {
        let mut value = json!({"name": "x", "keep": 1});
        assert_eq!(remove_field(&mut value, &path("name")), Some(json!("x")));
        assert_eq!(remove_field(&mut value, &path("name")), None);
        assert_eq!(value, json!({"keep": 1}));
    }

    #[test]
    fn test_remove_field_through_non_object() {
        let mut value = json!({"a": 5});
        assert_eq!(remove_field(&mut value, &path("a.b")), None);
        assert_eq!(value, json!({"a": 5}));
    }

    #[test]
    fn test_remove_nested_leaves_parent() {
        let mut value = json!({"a": {"b": 1, "c": 2}});
        remove_field(&mut value, &path("a.b"));
        assert_eq!(value, json!({"a": {"c": 2}}));
    }

    #[test]
    fn test_resolve_url_literal_only() {
        let compiled = PathCompiler::compile("/v1/messages", "p").unwrap();
        assert_eq!(resolve_url(&compiled, &json!({})).unwrap(), "/v1/messages");
    }

    #[test]
    fn test_resolve_url_with_fields() {
        let compiled = PathCompiler::compile("/v1/{shelf}/books/{book.id}", "p").unwrap();
        let param = json!({"shelf": "fiction", "book": {"id": 42}});
        assert_eq!(
            resolve_url(&compiled, &param).unwrap(),
            "/v1/fiction/books/42"
        );
    }

    #[test]
    fn test_resolve_url_missing_field() {
        let compiled = PathCompiler::compile("/v1/{shelf}", "p").unwrap();
        assert_eq!(
            resolve_url(&compiled, &json!({"shelf": null})),
            Err(ResolveError::MissingField("shelf".to_string()))
        );
    }
}
