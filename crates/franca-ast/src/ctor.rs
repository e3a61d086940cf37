//! Constructors for every node variant, with positional parameters matching
//! the grammar actions that produce them (see franca-parser).

use crate::node::*;
use franca_common::Position;

impl Node {
    pub fn document(package: Node, imports: Vec<Node>, objects: Vec<Node>, pos: Position) -> Node {
        Node::new(
            NodeKind::Document(Document {
                package: Box::new(package),
                imports,
                objects,
            }),
            pos,
        )
    }

    pub fn package_statement(identifier: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::PackageStatement(PackageStatement {
                identifier: Box::new(identifier),
            }),
            pos,
        )
    }

    pub fn package_identifier(dotted_name: impl Into<String>, pos: Position) -> Node {
        Node::new(
            NodeKind::PackageIdentifier(PackageIdentifier {
                dotted_name: dotted_name.into(),
            }),
            pos,
        )
    }

    pub fn import_statement(identifier: Node, source: impl Into<String>, pos: Position) -> Node {
        Node::new(
            NodeKind::ImportStatement(ImportStatement {
                identifier: Box::new(identifier),
                source: source.into(),
            }),
            pos,
        )
    }

    pub fn import_identifier(dotted_name: impl Into<String>, pos: Position) -> Node {
        Node::new(
            NodeKind::ImportIdentifier(ImportIdentifier {
                dotted_name: dotted_name.into(),
            }),
            pos,
        )
    }

    pub fn interface(
        name: impl Into<String>,
        members: Vec<Node>,
        comment: Option<Node>,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::Interface(Interface {
                name: name.into(),
                comment: comment.map(Box::new),
                members,
            }),
            pos,
        )
    }

    pub fn type_collection(
        name: impl Into<String>,
        members: Vec<Node>,
        comment: Option<Node>,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::TypeCollection(TypeCollection {
                name: name.into(),
                comment: comment.map(Box::new),
                members,
            }),
            pos,
        )
    }

    pub fn enum_decl(
        name: impl Into<String>,
        enumerators: Node,
        comment: Option<Node>,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::Enum(Enum {
                name: name.into(),
                comment: comment.map(Box::new),
                enumerators: Box::new(enumerators),
            }),
            pos,
        )
    }

    pub fn struct_decl(
        name: impl Into<String>,
        variables: Node,
        comment: Option<Node>,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::Struct(VariableContainer {
                name: name.into(),
                comment: comment.map(Box::new),
                variables: Box::new(variables),
            }),
            pos,
        )
    }

    pub fn union_decl(
        name: impl Into<String>,
        variables: Node,
        comment: Option<Node>,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::Union(VariableContainer {
                name: name.into(),
                comment: comment.map(Box::new),
                variables: Box::new(variables),
            }),
            pos,
        )
    }

    pub fn map_decl(
        name: impl Into<String>,
        key_type: Node,
        value_type: Node,
        comment: Option<Node>,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::Map(Map {
                name: name.into(),
                comment: comment.map(Box::new),
                key_type: Box::new(key_type),
                value_type: Box::new(value_type),
            }),
            pos,
        )
    }

    pub fn method(
        name: impl Into<String>,
        body: Node,
        is_fire_and_forget: bool,
        comment: Option<Node>,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::Method(Method {
                name: name.into(),
                is_fire_and_forget,
                comment: comment.map(Box::new),
                body: Box::new(body),
            }),
            pos,
        )
    }

    pub fn broadcast_method(
        name: impl Into<String>,
        body: Node,
        is_selective: bool,
        comment: Option<Node>,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::BroadcastMethod(BroadcastMethod {
                name: name.into(),
                is_selective,
                comment: comment.map(Box::new),
                body: Box::new(body),
            }),
            pos,
        )
    }

    pub fn attribute(name: impl Into<String>, type_: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::Attribute(Attribute {
                name: name.into(),
                type_: Box::new(type_),
            }),
            pos,
        )
    }

    pub fn version(major: i64, minor: i64, pos: Position) -> Node {
        Node::new(NodeKind::Version(Version { major, minor }), pos)
    }

    pub fn array_type_declaration(
        name: Option<String>,
        element_type: Node,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::ArrayTypeDeclaration(ArrayTypeDeclaration {
                name,
                element_type: Box::new(element_type),
            }),
            pos,
        )
    }

    pub fn typedef(name: impl Into<String>, target_type: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::Typedef(Typedef {
                name: name.into(),
                target_type: Box::new(target_type),
            }),
            pos,
        )
    }

    pub fn variable_list(variables: Vec<Node>, pos: Position) -> Node {
        Node::new(NodeKind::VariableList(VariableList { variables }), pos)
    }

    pub fn variable(
        type_: Node,
        name: impl Into<String>,
        comment: Option<Node>,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::Variable(Variable {
                name: name.into(),
                comment: comment.map(Box::new),
                type_: Box::new(type_),
            }),
            pos,
        )
    }

    pub fn enumerator_list(enumerators: Vec<Node>, pos: Position) -> Node {
        Node::new(NodeKind::EnumeratorList(EnumeratorList { enumerators }), pos)
    }

    pub fn enumerator(
        name: impl Into<String>,
        value: Option<Node>,
        comment: Option<Node>,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::Enumerator(Enumerator {
                name: name.into(),
                comment: comment.map(Box::new),
                value: value.map(Box::new),
            }),
            pos,
        )
    }

    pub fn method_body(in_args: Option<Node>, out_args: Option<Node>, pos: Position) -> Node {
        Node::new(
            NodeKind::MethodBody(MethodBody {
                in_args: in_args.map(Box::new),
                out_args: out_args.map(Box::new),
            }),
            pos,
        )
    }

    pub fn method_in_arguments(args: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::MethodInArguments(MethodInArguments { args: Box::new(args) }),
            pos,
        )
    }

    pub fn method_out_arguments(args: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::MethodOutArguments(MethodOutArguments { args: Box::new(args) }),
            pos,
        )
    }

    pub fn method_argument_list(args: Vec<Node>, pos: Position) -> Node {
        Node::new(NodeKind::MethodArgumentList(MethodArgumentList { args }), pos)
    }

    pub fn method_argument(
        type_: Node,
        name: impl Into<String>,
        comment: Option<Node>,
        pos: Position,
    ) -> Node {
        Node::new(
            NodeKind::MethodArgument(MethodArgument {
                name: name.into(),
                comment: comment.map(Box::new),
                type_: Box::new(type_),
            }),
            pos,
        )
    }

    pub fn id(name: impl Into<String>, pos: Position) -> Node {
        Node::new(NodeKind::Id(Id { name: name.into() }), pos)
    }

    pub fn typename_builtin(keyword: impl Into<String>, pos: Position) -> Node {
        Node::new(
            NodeKind::Typename(Typename {
                form: TypenameForm::Builtin(keyword.into()),
            }),
            pos,
        )
    }

    pub fn typename_user(id: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::Typename(Typename {
                form: TypenameForm::User(Box::new(id)),
            }),
            pos,
        )
    }

    pub fn typename_implicit_array(array_decl: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::Typename(Typename {
                form: TypenameForm::ImplicitArray(Box::new(array_decl)),
            }),
            pos,
        )
    }

    pub fn integer_constant(text: impl Into<String>, radix: Radix, pos: Position) -> Node {
        let text = text.into();
        let digits = strip_radix_prefix(&text, radix);
        let value = i64::from_str_radix(digits, radix_base(radix)).unwrap_or(0);
        Node::new(NodeKind::IntegerConstant(IntegerConstant { value, radix, text }), pos)
    }

    pub fn string_lit(value: impl Into<String>, pos: Position) -> Node {
        Node::new(NodeKind::StringLit(StringLit { value: value.into() }), pos)
    }

    pub fn franca_comment(text: impl Into<String>, pos: Position) -> Node {
        Node::new(NodeKind::FrancaComment(FrancaComment { text: text.into() }), pos)
    }
}

fn radix_base(radix: Radix) -> u32 {
    match radix {
        Radix::Dec => 10,
        Radix::Oct => 8,
        Radix::Hex => 16,
        Radix::Bin => 2,
    }
}

/// Strips the radix prefix (`0x`/`0X`/`0b`/`0B`/leading `0`) and any trailing
/// integer suffix letters, leaving only the digits `from_str_radix` accepts.
fn strip_radix_prefix(text: &str, radix: Radix) -> &str {
    let digits = match radix {
        Radix::Hex | Radix::Bin => &text[2..],
        Radix::Oct => {
            let stripped = text.trim_start_matches('0');
            if stripped.is_empty() {
                "0"
            } else {
                stripped
            }
        }
        Radix::Dec => text,
    };
    digits.trim_end_matches(['u', 'U', 'l', 'L'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use franca_common::Position;

    fn pos() -> Position {
        Position::new(1, 1)
    }

    #[test]
    fn integer_constant_decodes_per_radix() {
        let n = Node::integer_constant("0x1A", Radix::Hex, pos());
        match n.kind {
            NodeKind::IntegerConstant(ic) => assert_eq!(ic.value, 26),
            _ => panic!("wrong kind"),
        }
        let n = Node::integer_constant("017", Radix::Oct, pos());
        match n.kind {
            NodeKind::IntegerConstant(ic) => assert_eq!(ic.value, 15),
            _ => panic!("wrong kind"),
        }
        let n = Node::integer_constant("0b1011", Radix::Bin, pos());
        match n.kind {
            NodeKind::IntegerConstant(ic) => assert_eq!(ic.value, 11),
            _ => panic!("wrong kind"),
        }
        let n = Node::integer_constant("42", Radix::Dec, pos());
        match n.kind {
            NodeKind::IntegerConstant(ic) => assert_eq!(ic.value, 42),
            _ => panic!("wrong kind"),
        }
    }

    #[test]
    fn integer_constant_strips_suffix() {
        let n = Node::integer_constant("42ULL", Radix::Dec, pos());
        match n.kind {
            NodeKind::IntegerConstant(ic) => assert_eq!(ic.value, 42),
            _ => panic!("wrong kind"),
        }
    }
}
