//! One dispatch over the node tag: kind names, attribute tuples, and
//! child lists. This is the single traversal routine `show` (see
//! [`crate::show`]) walks, and the only place that needs to change when a
//! node variant's shape changes.

use crate::node::{Node, NodeKind, TypenameForm};

impl Node {
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Document(_) => "Document",
            NodeKind::PackageStatement(_) => "PackageStatement",
            NodeKind::PackageIdentifier(_) => "PackageIdentifier",
            NodeKind::ImportStatement(_) => "ImportStatement",
            NodeKind::ImportIdentifier(_) => "ImportIdentifier",
            NodeKind::Interface(_) => "Interface",
            NodeKind::TypeCollection(_) => "TypeCollection",
            NodeKind::Enum(_) => "Enum",
            NodeKind::Struct(_) => "Struct",
            NodeKind::Union(_) => "Union",
            NodeKind::Map(_) => "Map",
            NodeKind::Method(_) => "Method",
            NodeKind::BroadcastMethod(_) => "BroadcastMethod",
            NodeKind::Attribute(_) => "Attribute",
            NodeKind::Version(_) => "Version",
            NodeKind::ArrayTypeDeclaration(_) => "ArrayTypeDeclaration",
            NodeKind::Typedef(_) => "Typedef",
            NodeKind::VariableList(_) => "VariableList",
            NodeKind::Variable(_) => "Variable",
            NodeKind::EnumeratorList(_) => "EnumeratorList",
            NodeKind::Enumerator(_) => "Enumerator",
            NodeKind::MethodBody(_) => "MethodBody",
            NodeKind::MethodInArguments(_) => "MethodInArguments",
            NodeKind::MethodOutArguments(_) => "MethodOutArguments",
            NodeKind::MethodArgumentList(_) => "MethodArgumentList",
            NodeKind::MethodArgument(_) => "MethodArgument",
            NodeKind::Id(_) => "ID",
            NodeKind::Typename(_) => "Typename",
            NodeKind::IntegerConstant(_) => "IntegerConstant",
            NodeKind::StringLit(_) => "String",
            NodeKind::FrancaComment(_) => "FrancaComment",
        }
    }

    /// The node's fixed ordered tuple of scalar attribute names/values.
    pub fn attrs(&self) -> Vec<(&'static str, String)> {
        match &self.kind {
            NodeKind::PackageIdentifier(n) => vec![("name", n.dotted_name.clone())],
            NodeKind::ImportStatement(n) => vec![("source", n.source.clone())],
            NodeKind::ImportIdentifier(n) => vec![("name", n.dotted_name.clone())],
            NodeKind::Interface(n) => vec![("name", n.name.clone())],
            NodeKind::TypeCollection(n) => vec![("name", n.name.clone())],
            NodeKind::Enum(n) => vec![("name", n.name.clone())],
            NodeKind::Struct(n) | NodeKind::Union(n) => vec![("name", n.name.clone())],
            NodeKind::Map(n) => vec![("name", n.name.clone())],
            NodeKind::Method(n) => vec![
                ("name", n.name.clone()),
                ("is_fire_and_forget", n.is_fire_and_forget.to_string()),
            ],
            NodeKind::BroadcastMethod(n) => vec![
                ("name", n.name.clone()),
                ("is_selective", n.is_selective.to_string()),
            ],
            NodeKind::Attribute(n) => vec![("name", n.name.clone())],
            NodeKind::Version(n) => {
                vec![("major", n.major.to_string()), ("minor", n.minor.to_string())]
            }
            NodeKind::ArrayTypeDeclaration(n) => {
                vec![("name", n.name.clone().unwrap_or_else(|| "None".to_string()))]
            }
            NodeKind::Typedef(n) => vec![("name", n.name.clone())],
            NodeKind::Variable(n) => vec![("name", n.name.clone())],
            NodeKind::Enumerator(n) => vec![("name", n.name.clone())],
            NodeKind::MethodArgument(n) => vec![("name", n.name.clone())],
            NodeKind::Id(n) => vec![("name", n.name.clone())],
            NodeKind::Typename(n) => match &n.form {
                TypenameForm::Builtin(kw) => vec![("name", kw.clone())],
                TypenameForm::User(_) | TypenameForm::ImplicitArray(_) => vec![],
            },
            NodeKind::IntegerConstant(n) => vec![
                ("value", n.value.to_string()),
                ("radix", n.radix.as_str().to_string()),
            ],
            NodeKind::StringLit(n) => vec![("value", n.value.clone())],
            NodeKind::FrancaComment(n) => vec![("text", n.text.clone())],
            NodeKind::Document(_)
            | NodeKind::PackageStatement(_)
            | NodeKind::VariableList(_)
            | NodeKind::EnumeratorList(_)
            | NodeKind::MethodBody(_)
            | NodeKind::MethodInArguments(_)
            | NodeKind::MethodOutArguments(_)
            | NodeKind::MethodArgumentList(_) => vec![],
        }
    }

    /// The node's named children in declared (source) order.
    pub fn children(&self) -> Vec<(&'static str, &Node)> {
        match &self.kind {
            NodeKind::Document(n) => {
                let mut out = vec![("package", n.package.as_ref())];
                out.extend(n.imports.iter().map(|i| ("imports", i)));
                out.extend(n.objects.iter().map(|o| ("objects", o)));
                out
            }
            NodeKind::PackageStatement(n) => vec![("identifier", n.identifier.as_ref())],
            NodeKind::ImportStatement(n) => vec![("identifier", n.identifier.as_ref())],
            NodeKind::Interface(n) => with_comment(&n.comment, n.members.iter(), "members"),
            NodeKind::TypeCollection(n) => with_comment(&n.comment, n.members.iter(), "members"),
            NodeKind::Enum(n) => with_comment_and(&n.comment, [("enumerators", n.enumerators.as_ref())]),
            NodeKind::Struct(n) | NodeKind::Union(n) => {
                with_comment_and(&n.comment, [("variables", n.variables.as_ref())])
            }
            NodeKind::Map(n) => with_comment_and(
                &n.comment,
                [("key_type", n.key_type.as_ref()), ("value_type", n.value_type.as_ref())],
            ),
            NodeKind::Method(n) => with_comment_and(&n.comment, [("body", n.body.as_ref())]),
            NodeKind::BroadcastMethod(n) => with_comment_and(&n.comment, [("body", n.body.as_ref())]),
            NodeKind::Attribute(n) => vec![("type", n.type_.as_ref())],
            NodeKind::Version(_) => vec![],
            NodeKind::ArrayTypeDeclaration(n) => vec![("element_type", n.element_type.as_ref())],
            NodeKind::Typedef(n) => vec![("target_type", n.target_type.as_ref())],
            NodeKind::VariableList(n) => n.variables.iter().map(|v| ("variables", v)).collect(),
            NodeKind::Variable(n) => with_comment_and(&n.comment, [("type", n.type_.as_ref())]),
            NodeKind::EnumeratorList(n) => {
                n.enumerators.iter().map(|e| ("enumerators", e)).collect()
            }
            NodeKind::Enumerator(n) => {
                let mut out = with_comment(&n.comment, std::iter::empty(), "");
                if let Some(v) = &n.value {
                    out.push(("value", v.as_ref()));
                }
                out
            }
            NodeKind::MethodBody(n) => {
                let mut out = vec![];
                if let Some(a) = &n.in_args {
                    out.push(("in_args", a.as_ref()));
                }
                if let Some(a) = &n.out_args {
                    out.push(("out_args", a.as_ref()));
                }
                out
            }
            NodeKind::MethodInArguments(n) => vec![("args", n.args.as_ref())],
            NodeKind::MethodOutArguments(n) => vec![("args", n.args.as_ref())],
            NodeKind::MethodArgumentList(n) => n.args.iter().map(|a| ("args", a)).collect(),
            NodeKind::MethodArgument(n) => with_comment_and(&n.comment, [("type", n.type_.as_ref())]),
            NodeKind::Id(_) => vec![],
            NodeKind::Typename(n) => match &n.form {
                TypenameForm::Builtin(_) => vec![],
                TypenameForm::User(id) => vec![("name", id.as_ref())],
                TypenameForm::ImplicitArray(arr) => vec![("array", arr.as_ref())],
            },
            NodeKind::IntegerConstant(_) => vec![],
            NodeKind::StringLit(_) => vec![],
            NodeKind::FrancaComment(_) => vec![],
            NodeKind::PackageIdentifier(_) | NodeKind::ImportIdentifier(_) => vec![],
        }
    }
}

fn with_comment<'a>(
    comment: &'a Option<Box<Node>>,
    rest: impl Iterator<Item = &'a Node>,
    rest_name: &'static str,
) -> Vec<(&'static str, &'a Node)> {
    let mut out = Vec::new();
    if let Some(c) = comment {
        out.push(("comment", c.as_ref()));
    }
    out.extend(rest.map(|n| (rest_name, n)));
    out
}

fn with_comment_and<'a, const N: usize>(
    comment: &'a Option<Box<Node>>,
    named: [(&'static str, &'a Node); N],
) -> Vec<(&'static str, &'a Node)> {
    let mut out = Vec::new();
    if let Some(c) = comment {
        out.push(("comment", c.as_ref()));
    }
    out.extend(named);
    out
}
