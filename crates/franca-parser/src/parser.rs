//! Hand-written recursive-descent parser. One method per grammar
//! production, each returning `Result<Node, ParseError>` and halting the
//! whole parse at the first unexpected token.

use franca_ast::{Node, Radix};
use franca_common::ParseError;
use franca_lexer::{Token, TokenKind};

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    // ── Token stream primitives ───────────────────────────────────────

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_at(&self, offset: usize) -> &Token {
        let idx = self.pos + offset;
        if idx < self.tokens.len() {
            &self.tokens[idx]
        } else {
            self.tokens.last().expect("token stream always ends in Eof")
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here())
        }
    }

    fn error_here(&self) -> ParseError {
        let tok = self.peek();
        if tok.kind == TokenKind::Eof {
            ParseError::unexpected_eof()
        } else {
            ParseError::unexpected_token(tok.line, tok.lexeme.clone(), tok.span)
        }
    }

    /// Peeks for a leading `FRANCA_COMMENT` and consumes it if present.
    fn take_doc_comment(&mut self) -> Option<Node> {
        if self.at(TokenKind::FrancaComment) {
            let tok = self.advance();
            let pos = tok.pos();
            Some(Node::franca_comment(tok.lexeme, pos))
        } else {
            None
        }
    }

    // ── document ────────────────────────────────────────────────────

    pub(crate) fn parse_document(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        let package = self.package_statement()?;

        let mut imports = Vec::new();
        while self.at(TokenKind::Import) {
            imports.push(self.import_statement()?);
        }

        let mut objects = Vec::new();
        objects.push(self.root_level_object()?);
        while self.starts_root_level_object() {
            objects.push(self.root_level_object()?);
        }

        self.expect(TokenKind::Eof)?;
        Ok(Node::document(package, imports, objects, pos))
    }

    fn package_statement(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        self.expect(TokenKind::Package)?;
        let identifier = self.package_identifier()?;
        Ok(Node::package_statement(identifier, pos))
    }

    fn package_identifier(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        let first = self.expect(TokenKind::Id)?;
        let mut dotted = first.lexeme;
        while self.at(TokenKind::Dot) {
            self.advance();
            let part = self.expect(TokenKind::Id)?;
            dotted.push('.');
            dotted.push_str(&part.lexeme);
        }
        Ok(Node::package_identifier(dotted, pos))
    }

    fn import_statement(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        self.expect(TokenKind::Import)?;
        let identifier = self.import_identifier()?;
        self.expect(TokenKind::From)?;
        let source_tok = self.expect(TokenKind::StringLiteral)?;
        Ok(Node::import_statement(identifier, strip_quotes(&source_tok.lexeme), pos))
    }

    fn import_identifier(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        if self.at(TokenKind::Star) {
            self.advance();
            return Ok(Node::import_identifier("*", pos));
        }
        let first = self.expect(TokenKind::Id)?;
        let mut dotted = first.lexeme;
        loop {
            if self.at(TokenKind::Dot) && self.peek_at(1).kind == TokenKind::Star {
                self.advance();
                self.advance();
                dotted.push_str(".*");
                break;
            } else if self.at(TokenKind::Dot) {
                self.advance();
                let part = self.expect(TokenKind::Id)?;
                dotted.push('.');
                dotted.push_str(&part.lexeme);
            } else {
                break;
            }
        }
        Ok(Node::import_identifier(dotted, pos))
    }

    // ── root-level objects ─────────────────────────────────────────────

    /// Whether the upcoming tokens can start a `root_level_object`: either
    /// `interface`/`typeCollection` directly, or a leading doc-comment
    /// followed by one of them.
    fn starts_root_level_object(&self) -> bool {
        if self.at(TokenKind::Interface) || self.at(TokenKind::TypeCollection) {
            return true;
        }
        self.at(TokenKind::FrancaComment)
            && matches!(self.peek_at(1).kind, TokenKind::Interface | TokenKind::TypeCollection)
    }

    fn root_level_object(&mut self) -> Result<Node, ParseError> {
        if self.at(TokenKind::FrancaComment) {
            let comment = self.take_doc_comment();
            return match self.peek().kind {
                TokenKind::Interface => self.interface(comment),
                TokenKind::TypeCollection => self.type_collection(comment),
                _ => Err(self.error_here()),
            };
        }
        if self.at(TokenKind::Interface) {
            self.interface(None)
        } else if self.at(TokenKind::TypeCollection) {
            self.type_collection(None)
        } else {
            Err(self.error_here())
        }
    }

    fn interface(&mut self, leading_comment: Option<Node>) -> Result<Node, ParseError> {
        let pos = leading_comment.as_ref().map(|c| c.pos).unwrap_or_else(|| self.peek().pos());
        self.expect(TokenKind::Interface)?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        self.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while !self.at(TokenKind::RBrace) {
            members.push(self.complex_decl()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Node::interface(name, members, leading_comment, pos))
    }

    fn type_collection(&mut self, leading_comment: Option<Node>) -> Result<Node, ParseError> {
        let pos = leading_comment.as_ref().map(|c| c.pos).unwrap_or_else(|| self.peek().pos());
        self.expect(TokenKind::TypeCollection)?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        self.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while !self.at(TokenKind::RBrace) {
            members.push(self.complex_decl()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Node::type_collection(name, members, leading_comment, pos))
    }

    // ── complex_decl ───────────────────────────────────────────────────

    /// Doc-comments only attach to enum/struct/union/map/method/broadcast;
    /// one preceding `attribute`/`version`/`array`/`typedef` is left
    /// unconsumed here so it surfaces as an unexpected token (§7).
    fn complex_decl(&mut self) -> Result<Node, ParseError> {
        if self.at(TokenKind::FrancaComment) {
            let comment = self.take_doc_comment();
            return match self.peek().kind {
                TokenKind::Enumeration => self.enumeration(comment),
                TokenKind::Struct => self.struct_decl(comment),
                TokenKind::Union => self.union_decl(comment),
                TokenKind::Map => self.map_decl(comment),
                TokenKind::Method => self.method(comment),
                TokenKind::Broadcast => self.broadcast_method(comment),
                _ => Err(self.error_here()),
            };
        }
        match self.peek().kind {
            TokenKind::Enumeration => self.enumeration(None),
            TokenKind::Struct => self.struct_decl(None),
            TokenKind::Union => self.union_decl(None),
            TokenKind::Map => self.map_decl(None),
            TokenKind::Method => self.method(None),
            TokenKind::Broadcast => self.broadcast_method(None),
            TokenKind::Attribute => self.attribute(),
            TokenKind::Version => self.version(),
            TokenKind::Array => self.explicit_array(),
            TokenKind::Typedef => self.typedef(),
            _ => Err(self.error_here()),
        }
    }

    fn enumeration(&mut self, comment: Option<Node>) -> Result<Node, ParseError> {
        let pos = comment.as_ref().map(|c| c.pos).unwrap_or_else(|| self.peek().pos());
        self.expect(TokenKind::Enumeration)?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        self.expect(TokenKind::LBrace)?;
        let enumerators = self.enumerator_list()?;
        self.expect(TokenKind::RBrace)?;
        Ok(Node::enum_decl(name, enumerators, comment, pos))
    }

    fn struct_decl(&mut self, comment: Option<Node>) -> Result<Node, ParseError> {
        let pos = comment.as_ref().map(|c| c.pos).unwrap_or_else(|| self.peek().pos());
        self.expect(TokenKind::Struct)?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        self.expect(TokenKind::LBrace)?;
        let variables = self.variable_list()?;
        self.expect(TokenKind::RBrace)?;
        Ok(Node::struct_decl(name, variables, comment, pos))
    }

    fn union_decl(&mut self, comment: Option<Node>) -> Result<Node, ParseError> {
        let pos = comment.as_ref().map(|c| c.pos).unwrap_or_else(|| self.peek().pos());
        self.expect(TokenKind::Union)?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        self.expect(TokenKind::LBrace)?;
        let variables = self.variable_list()?;
        self.expect(TokenKind::RBrace)?;
        Ok(Node::union_decl(name, variables, comment, pos))
    }

    fn map_decl(&mut self, comment: Option<Node>) -> Result<Node, ParseError> {
        let pos = comment.as_ref().map(|c| c.pos).unwrap_or_else(|| self.peek().pos());
        self.expect(TokenKind::Map)?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        self.expect(TokenKind::LBrace)?;
        let key_type = self.typename()?;
        self.expect(TokenKind::To)?;
        let value_type = self.typename()?;
        self.expect(TokenKind::RBrace)?;
        Ok(Node::map_decl(name, key_type, value_type, comment, pos))
    }

    fn attribute(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        self.expect(TokenKind::Attribute)?;
        let type_ = self.typename()?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        self.expect(TokenKind::Semi)?;
        Ok(Node::attribute(name, type_, pos))
    }

    fn version(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        self.expect(TokenKind::Version)?;
        self.expect(TokenKind::LBrace)?;
        self.expect(TokenKind::Major)?;
        let major = self.integer_literal()?;
        self.expect(TokenKind::Minor)?;
        let minor = self.integer_literal()?;
        self.expect(TokenKind::RBrace)?;
        Ok(Node::version(major, minor, pos))
    }

    fn explicit_array(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        self.expect(TokenKind::Array)?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        self.expect(TokenKind::Of)?;
        let element_type = self.typename()?;
        self.expect(TokenKind::Semi)?;
        Ok(Node::array_type_declaration(Some(name), element_type, pos))
    }

    fn typedef(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        self.expect(TokenKind::Typedef)?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        self.expect(TokenKind::Is)?;
        let target_type = self.typename()?;
        self.expect(TokenKind::Semi)?;
        Ok(Node::typedef(name, target_type, pos))
    }

    // ── method / broadcast forms ─────────────────────────────────────

    fn method(&mut self, comment: Option<Node>) -> Result<Node, ParseError> {
        let pos = comment.as_ref().map(|c| c.pos).unwrap_or_else(|| self.peek().pos());
        self.expect(TokenKind::Method)?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        if self.at(TokenKind::FireAndForget) {
            self.advance();
            self.expect(TokenKind::LBrace)?;
            let in_args = if self.at(TokenKind::In) { Some(self.method_in_arguments()?) } else { None };
            self.expect(TokenKind::RBrace)?;
            let body_pos = pos;
            let body = Node::method_body(in_args, None, body_pos);
            Ok(Node::method(name, body, true, comment, pos))
        } else {
            self.expect(TokenKind::LBrace)?;
            let body = self.method_body()?;
            self.expect(TokenKind::RBrace)?;
            Ok(Node::method(name, body, false, comment, pos))
        }
    }

    fn broadcast_method(&mut self, comment: Option<Node>) -> Result<Node, ParseError> {
        let pos = comment.as_ref().map(|c| c.pos).unwrap_or_else(|| self.peek().pos());
        self.expect(TokenKind::Broadcast)?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        if self.at(TokenKind::Selective) {
            self.advance();
            self.expect(TokenKind::LBrace)?;
            let body = self.method_body()?;
            self.expect(TokenKind::RBrace)?;
            Ok(Node::broadcast_method(name, body, true, comment, pos))
        } else {
            self.expect(TokenKind::LBrace)?;
            let out_args = if self.at(TokenKind::Out) { Some(self.method_out_arguments()?) } else { None };
            self.expect(TokenKind::RBrace)?;
            let body = Node::method_body(None, out_args, pos);
            Ok(Node::broadcast_method(name, body, false, comment, pos))
        }
    }

    fn method_body(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        let in_args = if self.at(TokenKind::In) { Some(self.method_in_arguments()?) } else { None };
        let out_args = if self.at(TokenKind::Out) { Some(self.method_out_arguments()?) } else { None };
        Ok(Node::method_body(in_args, out_args, pos))
    }

    fn method_in_arguments(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        self.expect(TokenKind::In)?;
        self.expect(TokenKind::LBrace)?;
        let args = self.method_argument_list()?;
        self.expect(TokenKind::RBrace)?;
        Ok(Node::method_in_arguments(args, pos))
    }

    fn method_out_arguments(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        self.expect(TokenKind::Out)?;
        self.expect(TokenKind::LBrace)?;
        let args = self.method_argument_list()?;
        self.expect(TokenKind::RBrace)?;
        Ok(Node::method_out_arguments(args, pos))
    }

    /// Left-recursive shape (`X -> arg | X arg`): append onto the
    /// already-built list directly, no reversal needed.
    fn method_argument_list(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        let mut args = Vec::new();
        args.push(self.method_argument()?);
        while self.starts_typename() {
            args.push(self.method_argument()?);
        }
        Ok(Node::method_argument_list(args, pos))
    }

    fn method_argument(&mut self) -> Result<Node, ParseError> {
        let comment = self.take_doc_comment();
        let pos = comment.as_ref().map(|c| c.pos).unwrap_or_else(|| self.peek().pos());
        let type_ = self.typename()?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        Ok(Node::method_argument(type_, name, comment, pos))
    }

    // ── struct/union/enum internals ───────────────────────────────────

    /// Right-recursive shape (`X -> x | x X`): build the tail first, then
    /// prepend the newly-seen head, preserving source order.
    fn variable_list(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        let mut variables = vec![self.variable()?];
        while self.starts_typename() {
            variables.push(self.variable()?);
        }
        Ok(Node::variable_list(variables, pos))
    }

    fn variable(&mut self) -> Result<Node, ParseError> {
        let comment = self.take_doc_comment();
        let pos = comment.as_ref().map(|c| c.pos).unwrap_or_else(|| self.peek().pos());
        let type_ = self.typename()?;
        let name = self.expect(TokenKind::Id)?.lexeme;
        Ok(Node::variable(type_, name, comment, pos))
    }

    fn enumerator_list(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        let mut enumerators = vec![self.enumerator()?];
        while self.at(TokenKind::Id) || self.at(TokenKind::FrancaComment) {
            enumerators.push(self.enumerator()?);
        }
        Ok(Node::enumerator_list(enumerators, pos))
    }

    fn enumerator(&mut self) -> Result<Node, ParseError> {
        let comment = self.take_doc_comment();
        let pos = comment.as_ref().map(|c| c.pos).unwrap_or_else(|| self.peek().pos());
        let name = self.expect(TokenKind::Id)?.lexeme;
        let value = if self.at(TokenKind::Eq) {
            self.advance();
            if self.at(TokenKind::StringLiteral) {
                let tok = self.advance();
                let pos = tok.pos();
                Some(Node::string_lit(strip_quotes(&tok.lexeme), pos))
            } else {
                Some(self.integer_literal_node()?)
            }
        } else {
            None
        };
        Ok(Node::enumerator(name, value, comment, pos))
    }

    // ── typename ───────────────────────────────────────────────────────

    fn starts_typename(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::IntegerKw
                | TokenKind::Int8
                | TokenKind::Int16
                | TokenKind::Int32
                | TokenKind::Int64
                | TokenKind::UInt8
                | TokenKind::UInt16
                | TokenKind::UInt32
                | TokenKind::UInt64
                | TokenKind::BooleanKw
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::StringKw
                | TokenKind::ByteBuffer
                | TokenKind::Id
        )
    }

    fn builtin_keyword_text(&self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self.peek().kind {
            IntegerKw => "Integer",
            Int8 => "Int8",
            Int16 => "Int16",
            Int32 => "Int32",
            Int64 => "Int64",
            UInt8 => "UInt8",
            UInt16 => "UInt16",
            UInt32 => "UInt32",
            UInt64 => "UInt64",
            BooleanKw => "Boolean",
            Float => "Float",
            Double => "Double",
            StringKw => "String",
            ByteBuffer => "ByteBuffer",
            _ => return None,
        })
    }

    fn typename(&mut self) -> Result<Node, ParseError> {
        let pos = self.peek().pos();
        let base = if let Some(keyword) = self.builtin_keyword_text() {
            self.advance();
            Node::typename_builtin(keyword, pos)
        } else if self.at(TokenKind::Id) {
            let tok = self.advance();
            let tok_pos = tok.pos();
            let id = Node::id(tok.lexeme, tok_pos);
            Node::typename_user(id, pos)
        } else {
            return Err(self.error_here());
        };

        if self.at(TokenKind::LBracket) {
            self.advance();
            self.expect(TokenKind::RBracket)?;
            let array_decl = Node::array_type_declaration(None, base, pos);
            Ok(Node::typename_implicit_array(array_decl, pos))
        } else {
            Ok(base)
        }
    }

    // ── integer literals ───────────────────────────────────────────────

    fn integer_literal_node(&mut self) -> Result<Node, ParseError> {
        let tok = self.peek().clone();
        let radix = match tok.kind {
            TokenKind::IntConstDec => Radix::Dec,
            TokenKind::IntConstOct => Radix::Oct,
            TokenKind::IntConstHex => Radix::Hex,
            TokenKind::IntConstBin => Radix::Bin,
            _ => return Err(self.error_here()),
        };
        self.advance();
        let pos = tok.pos();
        Ok(Node::integer_constant(tok.lexeme, radix, pos))
    }

    fn integer_literal(&mut self) -> Result<i64, ParseError> {
        let node = self.integer_literal_node()?;
        match node.kind {
            franca_ast::NodeKind::IntegerConstant(ic) => Ok(ic.value),
            _ => unreachable!("integer_literal_node always returns an IntegerConstant"),
        }
    }
}

/// Strips one layer of surrounding `"..."` from a string-literal lexeme.
fn strip_quotes(lexeme: &str) -> &str {
    lexeme.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(lexeme)
}
