//! Recursive-descent parser over [`franca_lexer`] tokens, producing a
//! typed [`franca_ast::Node`] tree. See [`parse`] for the entry point.

mod parser;

use franca_ast::Node;
use franca_common::ParseError;
use franca_lexer::Lexer;
use parser::Parser;

/// Parses a complete Franca document. Lexical errors encountered along
/// the way are returned alongside a successful parse (they never abort
/// it); a syntactic error aborts immediately and no AST is returned.
pub fn parse(text: &str) -> (Result<Node, ParseError>, Vec<franca_common::LexError>) {
    let (tokens, lex_errors) = Lexer::tokenize(text);
    let mut parser = Parser::new(tokens);
    (parser.parse_document(), lex_errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(text: &str) -> Node {
        let (result, lex_errors) = parse(text);
        assert!(lex_errors.is_empty(), "unexpected lexical errors: {lex_errors:?}");
        result.unwrap_or_else(|e| panic!("unexpected parse error: {e}"))
    }

    fn parse_err(text: &str) -> ParseError {
        let (result, _) = parse(text);
        result.expect_err("expected a parse error")
    }

    #[test]
    fn s1_minimal_interface() {
        let doc = parse_ok("package p interface I { version { major 1 minor 0 } }");
        insta::assert_snapshot!(doc.show_to_string(true, true, false), @r###"
        Document:
          PackageStatement <package>:
            PackageIdentifier <identifier>: name=p
          Interface <objects>: name=I
            Version <members>: major=1, minor=0
        "###);
    }

    #[test]
    fn s2_enumeration_with_doc_comment() {
        let doc = parse_ok(
            "package p typeCollection T { <** @description: colors **> enumeration Color { RED = 1 GREEN = 2 BLUE } }",
        );
        insta::assert_snapshot!(doc.show_to_string(true, true, false), @r###"
        Document:
          PackageStatement <package>:
            PackageIdentifier <identifier>: name=p
          TypeCollection <objects>: name=T
            Enum <members>: name=Color
              FrancaComment <comment>: text= @description: colors 
              EnumeratorList <enumerators>:
                Enumerator <enumerators>: name=RED
                  IntegerConstant <value>: value=1, radix=dec
                Enumerator <enumerators>: name=GREEN
                  IntegerConstant <value>: value=2, radix=dec
                Enumerator <enumerators>: name=BLUE
        "###);
    }

    #[test]
    fn doc_comment_attaches_to_top_level_interface_and_type_collection() {
        let doc = parse_ok(
            "package p <** first **> interface I { version { major 1 minor 0 } } <** second **> typeCollection T { version { major 0 minor 1 } }",
        );
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        assert_eq!(d.objects.len(), 2);
        let franca_ast::NodeKind::Interface(iface) = &d.objects[0].kind else { unreachable!() };
        assert_eq!(iface.name, "I");
        let franca_ast::NodeKind::FrancaComment(c) = &iface.comment.as_ref().unwrap().kind else { unreachable!() };
        assert_eq!(c.text, " first ");
        let franca_ast::NodeKind::TypeCollection(tc) = &d.objects[1].kind else { unreachable!() };
        assert_eq!(tc.name, "T");
        let franca_ast::NodeKind::FrancaComment(c) = &tc.comment.as_ref().unwrap().kind else { unreachable!() };
        assert_eq!(c.text, " second ");
    }

    #[test]
    fn s3_method_with_both_argument_lists() {
        let doc = parse_ok(
            "package p interface I { method doIt { in { Int32 x String s } out { Boolean ok } } }",
        );
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        let franca_ast::NodeKind::Interface(iface) = &d.objects[0].kind else { unreachable!() };
        let franca_ast::NodeKind::Method(m) = &iface.members[0].kind else { unreachable!() };
        assert_eq!(m.name, "doIt");
        assert!(!m.is_fire_and_forget);
        let franca_ast::NodeKind::MethodBody(body) = &m.body.kind else { unreachable!() };
        let franca_ast::NodeKind::MethodInArguments(in_args) = &body.in_args.as_ref().unwrap().kind else { unreachable!() };
        let franca_ast::NodeKind::MethodArgumentList(args) = &in_args.args.kind else { unreachable!() };
        assert_eq!(args.args.len(), 2);
        let franca_ast::NodeKind::MethodOutArguments(out_args) = &body.out_args.as_ref().unwrap().kind else { unreachable!() };
        let franca_ast::NodeKind::MethodArgumentList(out_list) = &out_args.args.kind else { unreachable!() };
        assert_eq!(out_list.args.len(), 1);
    }

    #[test]
    fn s4_fire_and_forget_rejects_out_args() {
        let err = parse_err(
            "package p interface I { method ping fireAndForget { in { Int32 seq } out { Int32 ack } } }",
        );
        assert_eq!(err.line, Some(1));
        assert_eq!(err.lexeme.as_deref(), Some("out"));
    }

    #[test]
    fn s5_selective_broadcast_with_in_args() {
        let doc = parse_ok(
            "package p interface I { broadcast evt selective { in { String filter } out { Int32 value } } }",
        );
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        let franca_ast::NodeKind::Interface(iface) = &d.objects[0].kind else { unreachable!() };
        let franca_ast::NodeKind::BroadcastMethod(b) = &iface.members[0].kind else { unreachable!() };
        assert_eq!(b.name, "evt");
        assert!(b.is_selective);
        let franca_ast::NodeKind::MethodBody(body) = &b.body.kind else { unreachable!() };
        assert!(body.in_args.is_some());
        assert!(body.out_args.is_some());
    }

    #[test]
    fn s6_imports_with_wildcards_and_dotted_names() {
        let doc = parse_ok(
            r#"package a.b import c.d.* from "f.fidl" interface I { version { major 0 minor 1 } }"#,
        );
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        let franca_ast::NodeKind::PackageStatement(pkg) = &d.package.kind else { unreachable!() };
        let franca_ast::NodeKind::PackageIdentifier(pkg_id) = &pkg.identifier.kind else { unreachable!() };
        assert_eq!(pkg_id.dotted_name, "a.b");
        assert_eq!(d.imports.len(), 1);
        let franca_ast::NodeKind::ImportStatement(import) = &d.imports[0].kind else { unreachable!() };
        assert_eq!(import.source, "f.fidl");
        let franca_ast::NodeKind::ImportIdentifier(import_id) = &import.identifier.kind else { unreachable!() };
        assert_eq!(import_id.dotted_name, "c.d.*");
    }

    #[test]
    fn struct_with_two_members() {
        let doc = parse_ok("package p typeCollection T { struct Point { Int32 x Int32 y } }");
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        let franca_ast::NodeKind::TypeCollection(tc) = &d.objects[0].kind else { unreachable!() };
        let franca_ast::NodeKind::Struct(s) = &tc.members[0].kind else { unreachable!() };
        assert_eq!(s.name, "Point");
        let franca_ast::NodeKind::VariableList(vars) = &s.variables.kind else { unreachable!() };
        assert_eq!(vars.variables.len(), 2);
        let franca_ast::NodeKind::Variable(x) = &vars.variables[0].kind else { unreachable!() };
        assert_eq!(x.name, "x");
    }

    #[test]
    fn union_with_two_members() {
        let doc = parse_ok("package p typeCollection T { union Shape { Int32 radius Int32 side } }");
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        let franca_ast::NodeKind::TypeCollection(tc) = &d.objects[0].kind else { unreachable!() };
        let franca_ast::NodeKind::Union(u) = &tc.members[0].kind else { unreachable!() };
        assert_eq!(u.name, "Shape");
        let franca_ast::NodeKind::VariableList(vars) = &u.variables.kind else { unreachable!() };
        assert_eq!(vars.variables.len(), 2);
    }

    #[test]
    fn map_from_builtin_key_to_builtin_value() {
        let doc = parse_ok("package p typeCollection T { map Scores { UInt16 to String } }");
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        let franca_ast::NodeKind::TypeCollection(tc) = &d.objects[0].kind else { unreachable!() };
        let franca_ast::NodeKind::Map(m) = &tc.members[0].kind else { unreachable!() };
        assert_eq!(m.name, "Scores");
        let franca_ast::NodeKind::Typename(key) = &m.key_type.kind else { unreachable!() };
        assert_eq!(key.form, franca_ast::TypenameForm::Builtin("UInt16".to_string()));
    }

    #[test]
    fn attribute_declares_a_read_only_value() {
        let doc = parse_ok("package p interface I { attribute Int32 level; }");
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        let franca_ast::NodeKind::Interface(iface) = &d.objects[0].kind else { unreachable!() };
        let franca_ast::NodeKind::Attribute(a) = &iface.members[0].kind else { unreachable!() };
        assert_eq!(a.name, "level");
    }

    #[test]
    fn typedef_aliases_a_builtin_type() {
        let doc = parse_ok("package p typeCollection T { typedef Meters is Float; }");
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        let franca_ast::NodeKind::TypeCollection(tc) = &d.objects[0].kind else { unreachable!() };
        let franca_ast::NodeKind::Typedef(t) = &tc.members[0].kind else { unreachable!() };
        assert_eq!(t.name, "Meters");
    }

    #[test]
    fn explicit_array_of_a_builtin_element_type() {
        let doc = parse_ok("package p typeCollection T { array Names of String; }");
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        let franca_ast::NodeKind::TypeCollection(tc) = &d.objects[0].kind else { unreachable!() };
        let franca_ast::NodeKind::ArrayTypeDeclaration(arr) = &tc.members[0].kind else { unreachable!() };
        assert_eq!(arr.name.as_deref(), Some("Names"));
    }

    #[test]
    fn implicit_array_typename_wraps_the_element_type() {
        let doc = parse_ok("package p interface I { attribute Int32[] scores; }");
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        let franca_ast::NodeKind::Interface(iface) = &d.objects[0].kind else { unreachable!() };
        let franca_ast::NodeKind::Attribute(a) = &iface.members[0].kind else { unreachable!() };
        let franca_ast::NodeKind::Typename(t) = &a.type_.kind else { unreachable!() };
        let franca_ast::TypenameForm::ImplicitArray(arr_node) = &t.form else { unreachable!() };
        let franca_ast::NodeKind::ArrayTypeDeclaration(arr) = &arr_node.kind else { unreachable!() };
        assert_eq!(arr.name, None);
        let franca_ast::NodeKind::Typename(elem) = &arr.element_type.kind else { unreachable!() };
        assert_eq!(elem.form, franca_ast::TypenameForm::Builtin("Int32".to_string()));
    }

    #[test]
    fn enumerator_with_a_string_value() {
        let doc = parse_ok(r#"package p typeCollection T { enumeration Color { RED = "r" } }"#);
        let franca_ast::NodeKind::Document(d) = &doc.kind else { unreachable!() };
        let franca_ast::NodeKind::TypeCollection(tc) = &d.objects[0].kind else { unreachable!() };
        let franca_ast::NodeKind::Enum(e) = &tc.members[0].kind else { unreachable!() };
        let franca_ast::NodeKind::EnumeratorList(list) = &e.enumerators.kind else { unreachable!() };
        let franca_ast::NodeKind::Enumerator(enumerator) = &list.enumerators[0].kind else { unreachable!() };
        assert_eq!(enumerator.name, "RED");
        let franca_ast::NodeKind::StringLit(value) = &enumerator.value.as_ref().unwrap().kind else { unreachable!() };
        assert_eq!(value.value, "r");
    }

    #[test]
    fn determinism_of_show_output() {
        let text = "package p interface I { version { major 1 minor 0 } }";
        let first = parse_ok(text).show_to_string(true, true, true);
        let second = parse_ok(text).show_to_string(true, true, true);
        assert_eq!(first, second);
    }

    #[test]
    fn unexpected_eof_is_reported() {
        let err = parse_err("package p interface I {");
        assert_eq!(err.to_string(), "Syntax error: unexpected EOF");
    }

    #[test]
    fn doc_comment_before_attribute_is_rejected() {
        let err = parse_err(
            "package p interface I { <** not allowed **> attribute Int32 level; } }",
        );
        assert_eq!(err.lexeme.as_deref(), Some("attribute"));
    }
}
