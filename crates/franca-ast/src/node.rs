use franca_common::Position;

/// A node in the Franca AST: a tagged payload plus the position of its
/// first token. Every node owns its children exclusively; there are no
/// shared nodes and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub pos: Position,
}

impl Node {
    pub fn new(kind: NodeKind, pos: Position) -> Self {
        Self { kind, pos }
    }
}

/// The closed set of AST node variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Document(Document),
    PackageStatement(PackageStatement),
    PackageIdentifier(PackageIdentifier),
    ImportStatement(ImportStatement),
    ImportIdentifier(ImportIdentifier),
    Interface(Interface),
    TypeCollection(TypeCollection),
    Enum(Enum),
    Struct(VariableContainer),
    Union(VariableContainer),
    Map(Map),
    Method(Method),
    BroadcastMethod(BroadcastMethod),
    Attribute(Attribute),
    Version(Version),
    ArrayTypeDeclaration(ArrayTypeDeclaration),
    Typedef(Typedef),
    VariableList(VariableList),
    Variable(Variable),
    EnumeratorList(EnumeratorList),
    Enumerator(Enumerator),
    MethodBody(MethodBody),
    MethodInArguments(MethodInArguments),
    MethodOutArguments(MethodOutArguments),
    MethodArgumentList(MethodArgumentList),
    MethodArgument(MethodArgument),
    Id(Id),
    Typename(Typename),
    IntegerConstant(IntegerConstant),
    StringLit(StringLit),
    FrancaComment(FrancaComment),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub package: Box<Node>,
    pub imports: Vec<Node>,
    pub objects: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageStatement {
    pub identifier: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageIdentifier {
    pub dotted_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStatement {
    pub identifier: Box<Node>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportIdentifier {
    pub dotted_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub name: String,
    pub comment: Option<Box<Node>>,
    pub members: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeCollection {
    pub name: String,
    pub comment: Option<Box<Node>>,
    pub members: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub name: String,
    pub comment: Option<Box<Node>>,
    pub enumerators: Box<Node>,
}

/// Shared payload for `Struct` and `Union`, which differ only in tag.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableContainer {
    pub name: String,
    pub comment: Option<Box<Node>>,
    pub variables: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub name: String,
    pub comment: Option<Box<Node>>,
    pub key_type: Box<Node>,
    pub value_type: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub is_fire_and_forget: bool,
    pub comment: Option<Box<Node>>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BroadcastMethod {
    pub name: String,
    pub is_selective: bool,
    pub comment: Option<Box<Node>>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub type_: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Version {
    pub major: i64,
    pub minor: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayTypeDeclaration {
    /// `None` for the implicit `T[]` form, which only ever appears inside a `Typename`.
    pub name: Option<String>,
    pub element_type: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typedef {
    pub name: String,
    pub target_type: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableList {
    pub variables: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub comment: Option<Box<Node>>,
    pub type_: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumeratorList {
    pub enumerators: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enumerator {
    pub name: String,
    pub comment: Option<Box<Node>>,
    pub value: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodBody {
    pub in_args: Option<Box<Node>>,
    pub out_args: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodInArguments {
    pub args: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodOutArguments {
    pub args: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodArgumentList {
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodArgument {
    pub name: String,
    pub comment: Option<Box<Node>>,
    pub type_: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Id {
    pub name: String,
}

/// A `Typename` wraps exactly one of a built-in keyword, a user-defined
/// `ID`, or an implicit array type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypenameForm {
    Builtin(String),
    User(Box<Node>),
    ImplicitArray(Box<Node>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typename {
    pub form: TypenameForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Dec,
    Oct,
    Hex,
    Bin,
}

impl Radix {
    pub fn as_str(self) -> &'static str {
        match self {
            Radix::Dec => "dec",
            Radix::Oct => "oct",
            Radix::Hex => "hex",
            Radix::Bin => "bin",
        }
    }
}

/// The parser does not evaluate or validate the numeric value beyond
/// decoding it per its radix; `text` preserves the original lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerConstant {
    pub value: i64,
    pub radix: Radix,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLit {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrancaComment {
    pub text: String,
}
