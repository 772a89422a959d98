// Field accessor compiler: FieldPath -> `p['a']['b']`

use super::ast::FieldPath;

/// Render a property access chain for `path` on the parameter named `param`.
pub fn field_accessor(param: &str, path: &FieldPath) -> String {
    let mut expr = String::from(param);
    for segment in path.segments() {
        expr.push_str("['");
        expr.push_str(segment);
        expr.push_str("']");
    }
    expr
}
