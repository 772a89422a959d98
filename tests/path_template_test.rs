// Tests for path template compilation

use gateway_jsgen::domain::template::{
    field_accessor, resolve_url, FieldPath, PathCompiler, TemplateError, UrlPart,
};
use serde_json::json;

/// Evaluate a literal-only expression of the form `'...'`
fn eval_literal(expr: &str) -> &str {
    expr.strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .expect("Expected a single quoted literal")
}

#[test]
fn test_empty_template_compiles_to_nothing() {
    let compiled = PathCompiler::compile("", "p").unwrap();
    assert_eq!(compiled.url_expr, "");
    assert!(compiled.consumed.is_empty());
}

#[test]
fn test_literal_templates_evaluate_to_themselves() {
    for template in ["/", "/v1/messages", "/v1/rooms/lobby/messages:batchGet", "a.b=c"] {
        let compiled = PathCompiler::compile(template, "p").unwrap();
        assert!(compiled.consumed.is_empty());
        assert_eq!(eval_literal(&compiled.url_expr), template);
        assert_eq!(resolve_url(&compiled, &json!({})).unwrap(), template);
    }
}

#[test]
fn test_consumed_matches_variables_in_order() {
    let cases: &[(&str, &[&str])] = &[
        ("/v1/{a}", &["a"]),
        ("/v1/{a}/x/{b.c}", &["a", "b.c"]),
        ("/{z}/{y=*}/{x=**}/tail", &["z", "y", "x"]),
        ("{first}{second}", &["first", "second"]),
    ];

    for (template, fields) in cases {
        let compiled = PathCompiler::compile(template, "p").unwrap();
        let expected: Vec<String> = fields
            .iter()
            .map(|f| field_accessor("p", &FieldPath::parse(f).unwrap()))
            .collect();
        assert_eq!(compiled.consumed, expected, "template {}", template);
        assert_eq!(compiled.fields().len(), fields.len());
    }
}

#[test]
fn test_trailing_variable_scenario() {
    let compiled = PathCompiler::compile("/v1/messages/{message_id}", "p").unwrap();
    let accessor = field_accessor("p", &FieldPath::parse("message_id").unwrap());
    assert_eq!(compiled.url_expr, format!("'/v1/messages/' + {}", accessor));
    assert_eq!(compiled.consumed, vec![accessor]);
}

#[test]
fn test_nested_pattern_scenario() {
    let compiled = PathCompiler::compile("/v1/{name=messages/*}/detail", "p").unwrap();
    assert_eq!(compiled.url_expr, "'/v1/' + p['name'] + '/detail'");
    assert_eq!(compiled.consumed, vec!["p['name']"]);
    assert!(!compiled.url_expr.contains("messages"));
    assert_eq!(
        compiled.parts,
        vec![
            UrlPart::Literal("/v1/".to_string()),
            UrlPart::Field(FieldPath::parse("name").unwrap()),
            UrlPart::Literal("/detail".to_string()),
        ]
    );
}

#[test]
fn test_resolve_nested_pattern_uses_field_value() {
    let compiled = PathCompiler::compile("/v1/{name=messages/*}/detail", "p").unwrap();
    let url = resolve_url(&compiled, &json!({"name": "messages/42"})).unwrap();
    assert_eq!(url, "/v1/messages/42/detail");
}

#[test]
fn test_custom_method_suffix_is_kept() {
    let compiled = PathCompiler::compile("/v1/{name=operations/**}:cancel", "p").unwrap();
    assert_eq!(compiled.url_expr, "'/v1/' + p['name'] + ':cancel'");
    let url = resolve_url(&compiled, &json!({"name": "operations/7"})).unwrap();
    assert_eq!(url, "/v1/operations/7:cancel");
}

#[test]
fn test_unterminated_variable_is_an_error() {
    for template in ["/v1/{name", "/v1/{name.id", "/v1/{name=messages/*"] {
        let result = PathCompiler::compile(template, "p");
        assert!(
            matches!(result, Err(TemplateError::UnterminatedVariable { position: 4, .. })),
            "template {}",
            template
        );
    }
}

#[test]
fn test_unterminated_error_message() {
    let err = PathCompiler::compile("/x/{id", "p").unwrap_err();
    assert!(err.to_string().contains("'/x/{id'"));
    assert!(err.to_string().contains("position 3"));
}

#[test]
fn test_quote_and_backslash_literals_are_escaped() {
    let compiled = PathCompiler::compile("/v1/it's/{id}", "p").unwrap();
    assert_eq!(compiled.url_expr, r"'/v1/it\'s/' + p['id']");
    let url = resolve_url(&compiled, &json!({"id": "7"})).unwrap();
    assert_eq!(url, "/v1/it's/7");

    let compiled = PathCompiler::compile(r"/v1/a\b", "p").unwrap();
    assert_eq!(compiled.url_expr, r"'/v1/a\\b'");
    assert_eq!(resolve_url(&compiled, &json!({})).unwrap(), r"/v1/a\b");
}
