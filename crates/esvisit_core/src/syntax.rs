//! Node type names the engine itself interprets.

/// Node type names with traversal semantics of their own.
///
/// Every other type name is opaque to the engine and only matters as a key in
/// the child-key tables and handler sets.
pub struct Syntax;

impl Syntax {
    /// Effective type of a node without a usable `type` field.
    pub const PROPERTY: &'static str = "Property";

    /// Object literal; typeless `properties` entries are visited as `Property`.
    pub const OBJECT_EXPRESSION: &'static str = "ObjectExpression";

    /// Destructuring pattern; typeless `properties` entries are visited as `Property`.
    pub const OBJECT_PATTERN: &'static str = "ObjectPattern";

    /// Field of object containers that holds their entries.
    pub const PROPERTIES: &'static str = "properties";

    /// Returns true if `key` of a node of `node_type` holds property entries
    /// that must be visited even without a `type`.
    #[inline]
    pub fn is_property_list(node_type: &str, key: &str) -> bool {
        (node_type == Self::OBJECT_EXPRESSION || node_type == Self::OBJECT_PATTERN)
            && key == Self::PROPERTIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::object_expression("ObjectExpression", "properties", true)]
    #[case::object_pattern("ObjectPattern", "properties", true)]
    #[case::other_key("ObjectExpression", "elements", false)]
    #[case::other_type("ArrayExpression", "properties", false)]
    #[case::case_sensitive("objectExpression", "properties", false)]
    fn test_is_property_list(#[case] node_type: &str, #[case] key: &str, #[case] expected: bool) {
        assert_eq!(Syntax::is_property_list(node_type, key), expected);
    }
}
