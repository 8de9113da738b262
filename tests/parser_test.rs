//! Parser tests
//!
//! Fixture annotations and the trees they must produce, plus the
//! named/unnamed parameter disambiguation cases.

#[cfg(test)]
mod tests {
    use annotype::ast::*;
    use annotype::parser::{parse_type_annotation, ParseError, Parser};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    /// Parse and expect success
    fn assert_parse_success(source: &str) -> TypeNode {
        parse_type_annotation(source).expect("Parsing should succeed")
    }

    fn parse_source(source: &str) -> Result<TypeNode, ParseError> {
        let mut parser = Parser::new(source);
        parser.parse()
    }

    fn entity(name: &str) -> TypeNode {
        TypeNode::entity(name)
    }

    #[test_case("a", TypeNode::entity("a") ; "single entity")]
    #[test_case("?a", TypeNode::nullable(TypeNode::entity("a")) ; "nullable entity")]
    #[test_case(
        "union<a, b>",
        TypeNode::Union(vec![TypeNode::entity("a"), TypeNode::entity("b")])
        ; "union of two"
    )]
    #[test_case(
        "(a, ?b) → c",
        TypeNode::function(
            vec![
                FunctionParam::unnamed(TypeNode::entity("a")),
                FunctionParam::unnamed(TypeNode::nullable(TypeNode::entity("b"))),
            ],
            Some(TypeNode::entity("c")),
        )
        ; "function with unnamed params"
    )]
    #[test_case("[a]", TypeNode::array(TypeNode::entity("a")) ; "array")]
    #[test_case(
        "{node: dom.Node, offset: number}",
        TypeNode::Object(vec![
            ObjectMember::new("node", TypeNode::entity("dom.Node")),
            ObjectMember::new("offset", TypeNode::entity("number")),
        ])
        ; "object shape"
    )]
    fn test_fixtures(source: &str, expected: TypeNode) {
        assert_eq!(assert_parse_success(source), expected);
    }

    #[test_case("a" ; "entity")]
    #[test_case("?union<a, \"b\", 3>" ; "nullable union")]
    #[test_case("(a, ?b) → c" ; "function")]
    #[test_case("(x: [*], ...more: {a: b}) → ?(c) → d" ; "nested function")]
    #[test_case("{}" ; "empty object")]
    #[test_case("'it\\'s'" ; "escaped string")]
    fn test_canonical_form_reparses(source: &str) {
        let tree = assert_parse_success(source);
        assert_eq!(assert_parse_success(&tree.to_string()), tree);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = "(node: dom.Node, ...rest: union<a, 'b'>) → [?c]";
        assert_eq!(parse_source(source).unwrap(), parse_source(source).unwrap());
    }

    #[test]
    fn test_entity_dots_make_one_name() {
        assert_eq!(assert_parse_success("a.b.c"), entity("a.b.c"));
        assert_eq!(assert_parse_success("a . b"), entity("a.b"));
    }

    #[test]
    fn test_nullable_wraps_whole_union() {
        assert_eq!(
            assert_parse_success("?union<a>"),
            TypeNode::nullable(TypeNode::Union(vec![entity("a")]))
        );
    }

    #[test]
    fn test_param_disambiguation() {
        assert_eq!(
            assert_parse_success("(a) → b"),
            TypeNode::function(vec![FunctionParam::unnamed(entity("a"))], Some(entity("b")))
        );
        assert_eq!(
            assert_parse_success("(a: b) → c"),
            TypeNode::function(vec![FunctionParam::named("a", entity("b"))], Some(entity("c")))
        );
        assert_eq!(
            assert_parse_success("(a.b) → c"),
            TypeNode::function(vec![FunctionParam::unnamed(entity("a.b"))], Some(entity("c")))
        );
        assert_eq!(
            assert_parse_success("(a.b.c, d: e.f)"),
            TypeNode::function(
                vec![
                    FunctionParam::unnamed(entity("a.b.c")),
                    FunctionParam::named("d", entity("e.f")),
                ],
                None,
            )
        );
    }

    #[test]
    fn test_rest_params_are_named() {
        let tree = assert_parse_success("(first: a, ...others: b)");
        let TypeNode::Function(func) = tree else {
            panic!("Expected function type");
        };
        assert_eq!(func.params.len(), 2);
        assert!(!func.params[0].rest);
        assert!(func.params[1].rest);
        assert_eq!(func.params[1].name.as_deref(), Some("others"));
        assert!(func.return_type.is_none());
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(
            assert_parse_success("()"),
            TypeNode::Function(FunctionType {
                params: vec![],
                return_type: None,
            })
        );
        assert_eq!(assert_parse_success("{}"), TypeNode::Object(vec![]));
        assert_eq!(assert_parse_success("\"\""), TypeNode::StringLiteral(String::new()));
    }

    #[test]
    fn test_return_type_is_a_full_type() {
        assert_eq!(
            assert_parse_success("() → union<a, [b]>"),
            TypeNode::function(
                vec![],
                Some(TypeNode::Union(vec![entity("a"), TypeNode::array(entity("b"))])),
            )
        );
    }

    #[test]
    fn test_literal_members() {
        assert_eq!(
            assert_parse_success("union<'left', \"right\", 0, -1.5>"),
            TypeNode::Union(vec![
                TypeNode::string("left"),
                TypeNode::string("right"),
                TypeNode::number("0"),
                TypeNode::number("-1.5"),
            ])
        );
    }

    #[test]
    fn test_crate_root_entry_point() {
        assert_eq!(annotype::parse("*").unwrap(), TypeNode::Any);
    }

    #[test]
    fn test_json_dump_shape() {
        let tree = assert_parse_success("(a) → ?b");
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Function": {
                    "params": [{ "ty": { "Entity": "a" } }],
                    "return_type": { "Nullable": { "Entity": "b" } }
                }
            })
        );
    }
}
