use franca_common::{Position, Span};

/// A single lexeme together with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, pos: Position, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line: pos.line,
            column: pos.column,
            span,
        }
    }

    pub fn pos(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// The closed set of token kinds recognized by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ── Keywords ──────────────────────────────────────────────────────
    Import,
    From,
    Version,
    Major,
    Minor,
    Package,
    Interface,
    TypeCollection,
    Method,
    Broadcast,
    Selective,
    FireAndForget,
    In,
    Out,
    Attribute,
    Enumeration,
    Struct,
    Union,
    Map,
    Typedef,
    Is,
    To,
    Array,
    Of,
    Const,
    Extends,
    Polymorphic,
    True,
    False,

    // ── Built-in type keywords ────────────────────────────────────────
    IntegerKw,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    BooleanKw,
    Float,
    Double,
    StringKw,
    ByteBuffer,

    /// `[A-Za-z_$][A-Za-z0-9_$]*`, after the keyword table has been consulted.
    Id,

    // ── Comments ──────────────────────────────────────────────────────
    /// `//...` or `/* ... */`; internal only, never handed to the parser.
    CComment,
    /// `<** ... **>`, preserved as a token.
    FrancaComment,

    // ── Literals ──────────────────────────────────────────────────────
    StringLiteral,
    IntConstDec,
    IntConstOct,
    IntConstHex,
    IntConstBin,
    FloatConst,
    HexFloatConst,

    // ── Operators ─────────────────────────────────────────────────────
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Pipe,
    Amp,
    Tilde,
    Caret,
    Shl,
    Shr,
    PipePipe,
    AmpAmp,
    Bang,
    Lt,
    Gt,
    Le,
    Ge,
    EqEq,
    NotEq,

    // ── Assignment operators ──────────────────────────────────────────
    Eq,
    StarEq,
    SlashEq,
    PercentEq,
    PlusEq,
    MinusEq,
    ShlEq,
    ShrEq,
    AmpEq,
    PipeEq,
    CaretEq,

    PlusPlus,
    MinusMinus,
    Question,

    // ── Structural delimiters ─────────────────────────────────────────
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Dot,
    Semi,
    Colon,

    Eof,
}

/// Looks up `text` in the reserved-word table. Returns `None` for ordinary
/// identifiers. Case-sensitive and whole-word only (callers only call this
/// after scanning a full identifier-shaped lexeme).
pub fn keyword_from_str(text: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match text {
        "import" => Import,
        "from" => From,
        "version" => Version,
        "major" => Major,
        "minor" => Minor,
        "package" => Package,
        "interface" => Interface,
        "typeCollection" => TypeCollection,
        "method" => Method,
        "broadcast" => Broadcast,
        "selective" => Selective,
        "fireAndForget" => FireAndForget,
        "in" => In,
        "out" => Out,
        "attribute" => Attribute,
        "enumeration" => Enumeration,
        "struct" => Struct,
        "union" => Union,
        "map" => Map,
        "typedef" => Typedef,
        "is" => Is,
        "to" => To,
        "array" => Array,
        "of" => Of,
        "const" => Const,
        "extends" => Extends,
        "polymorphic" => Polymorphic,
        "true" => True,
        "false" => False,
        "Integer" => IntegerKw,
        "Int8" => Int8,
        "Int16" => Int16,
        "Int32" => Int32,
        "Int64" => Int64,
        "UInt8" => UInt8,
        "UInt16" => UInt16,
        "UInt32" => UInt32,
        "UInt64" => UInt64,
        "Boolean" => BooleanKw,
        "Float" => Float,
        "Double" => Double,
        "String" => StringKw,
        "ByteBuffer" => ByteBuffer,
        _ => return None,
    })
}
