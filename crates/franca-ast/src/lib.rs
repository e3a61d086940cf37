//! The Franca AST: a closed set of tagged node variants plus a
//! deterministic pretty-printer.

mod access;
mod ctor;
mod node;
mod show;

pub use node::{
    ArrayTypeDeclaration, Attribute, BroadcastMethod, Document, Enum, Enumerator, EnumeratorList,
    FrancaComment, Id, ImportIdentifier, ImportStatement, IntegerConstant, Interface, Map,
    Method, MethodArgument, MethodArgumentList, MethodBody, MethodInArguments,
    MethodOutArguments, Node, NodeKind, PackageIdentifier, PackageStatement, Radix, StringLit,
    Typedef, Typename, TypenameForm, TypeCollection, Variable, VariableContainer, VariableList,
    Version,
};
