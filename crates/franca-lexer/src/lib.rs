//! Lexer for Franca IDL (`.fidl`) source text.
//!
//! Converts a character stream into a stream of [`Token`]s tagged with
//! kind, lexeme, and source line. On an unrecognizable character the
//! lexer records a [`LexError`], skips exactly one character, and
//! resumes — a lexical error never aborts the scan.

mod cursor;
mod number;
mod token;

use cursor::Cursor;
use franca_common::{LexError, Position, Span};
use number::scan_number;
pub use token::{keyword_from_str, Token, TokenKind};

pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    source: &'src str,
    line: u32,
    line_start: u32,
    errors: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            source,
            line: 1,
            line_start: 0,
            errors: Vec::new(),
        }
    }

    /// Lexical errors collected so far. Does not reflect future `next_token` calls.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Drains the whole source into a token vector (always `Eof`-terminated)
    /// plus any lexical errors collected along the way.
    pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.next_token();
            let is_eof = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        (tokens, lexer.errors)
    }

    fn pos_now(&self) -> Position {
        Position::new(self.line, self.cursor.pos() - self.line_start + 1)
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_trivia();
            let start = self.cursor.pos();
            let start_pos = self.pos_now();
            let Some(c) = self.cursor.peek() else {
                return Token::new(TokenKind::Eof, "", start_pos, Span::new(start, start));
            };

            if c == '<' && self.cursor.peek_next() == Some('*') {
                if let Some(tok) = self.try_franca_comment(start, start_pos) {
                    return tok;
                }
            }
            if c.is_ascii_digit() {
                return self.lex_number(start, start_pos);
            }
            if c == '"' {
                return self.lex_string(start, start_pos);
            }
            if c.is_ascii_alphabetic() || c == '_' || c == '$' {
                return self.lex_identifier(start, start_pos);
            }
            if let Some(tok) = self.lex_operator(start, start_pos) {
                return tok;
            }

            self.cursor.advance();
            self.errors.push(LexError::illegal_character(c, start_pos));
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.peek() {
                Some('\n') => {
                    self.cursor.advance();
                    self.line += 1;
                    self.line_start = self.cursor.pos();
                }
                Some(c) if c.is_whitespace() => {
                    self.cursor.advance();
                }
                Some('/') if self.cursor.peek_next() == Some('/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    self.cursor.eat_while(|c| c != '\n');
                }
                Some('/') if self.cursor.peek_next() == Some('*') => {
                    let pos = self.pos_now();
                    self.cursor.advance();
                    self.cursor.advance();
                    self.skip_block_comment(pos);
                }
                _ => break,
            }
        }
    }

    fn skip_block_comment(&mut self, start_pos: Position) {
        loop {
            match self.cursor.peek() {
                None => {
                    self.errors.push(LexError::unterminated_comment(start_pos));
                    break;
                }
                Some('\n') => {
                    self.cursor.advance();
                    self.line += 1;
                    self.line_start = self.cursor.pos();
                }
                Some('*') if self.cursor.peek_next() == Some('/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    break;
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// `<** ... **>`, at least two stars on each side. Returns `None` (without
    /// consuming) if the input isn't a well-formed doc-comment, so the caller
    /// can fall back to lexing `<` as an operator.
    fn try_franca_comment(&mut self, start: u32, start_pos: Position) -> Option<Token> {
        let rest = &self.source[start as usize..];
        let bytes = rest.as_bytes();
        let mut i = 1;
        let open_start = i;
        while i < bytes.len() && bytes[i] == b'*' {
            i += 1;
        }
        if i - open_start < 2 {
            return None;
        }
        let content_start = i;
        let mut j = i;
        let (content_end, after) = loop {
            if j >= bytes.len() {
                return None;
            }
            if bytes[j] == b'*' {
                let run_start = j;
                while j < bytes.len() && bytes[j] == b'*' {
                    j += 1;
                }
                if j < bytes.len() && bytes[j] == b'>' && j - run_start >= 2 {
                    break (run_start, j + 1);
                }
            } else {
                j += 1;
            }
        };
        let full_text = &rest[..after];
        let inner_text = &rest[content_start..content_end];
        for ch in full_text.chars() {
            self.cursor.advance();
            if ch == '\n' {
                self.line += 1;
                self.line_start = self.cursor.pos();
            }
        }
        Some(Token::new(
            TokenKind::FrancaComment,
            inner_text,
            start_pos,
            Span::new(start, self.cursor.pos()),
        ))
    }

    fn lex_identifier(&mut self, start: u32, start_pos: Position) -> Token {
        self.cursor.advance();
        self.cursor
            .eat_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
        let end = self.cursor.pos();
        let text = self.cursor.slice(start, end);
        let kind = keyword_from_str(text).unwrap_or(TokenKind::Id);
        Token::new(kind, text, start_pos, Span::new(start, end))
    }

    fn lex_number(&mut self, start: u32, start_pos: Position) -> Token {
        let rest = &self.source[start as usize..];
        let (kind, len) = scan_number(rest);
        for _ in 0..len {
            self.cursor.advance();
        }
        let end = self.cursor.pos();
        let text = self.cursor.slice(start, end);
        Token::new(kind, text, start_pos, Span::new(start, end))
    }

    fn lex_string(&mut self, start: u32, start_pos: Position) -> Token {
        self.cursor.advance();
        loop {
            match self.cursor.peek() {
                None => {
                    self.errors.push(LexError::unterminated_string(start_pos));
                    break;
                }
                Some('\n') => {
                    self.errors.push(LexError::unterminated_string(start_pos));
                    break;
                }
                Some('"') => {
                    self.cursor.advance();
                    break;
                }
                Some('\\') => {
                    self.cursor.advance();
                    if self.cursor.peek().is_some() {
                        self.cursor.advance();
                    }
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
        let end = self.cursor.pos();
        let text = self.cursor.slice(start, end);
        Token::new(TokenKind::StringLiteral, text, start_pos, Span::new(start, end))
    }

    fn lex_operator(&mut self, start: u32, start_pos: Position) -> Option<Token> {
        use TokenKind::*;
        let c = self.cursor.peek()?;
        let kind = match c {
            '(' => {
                self.cursor.advance();
                LParen
            }
            ')' => {
                self.cursor.advance();
                RParen
            }
            '[' => {
                self.cursor.advance();
                LBracket
            }
            ']' => {
                self.cursor.advance();
                RBracket
            }
            '{' => {
                self.cursor.advance();
                LBrace
            }
            '}' => {
                self.cursor.advance();
                RBrace
            }
            ',' => {
                self.cursor.advance();
                Comma
            }
            '.' => {
                self.cursor.advance();
                Dot
            }
            ';' => {
                self.cursor.advance();
                Semi
            }
            ':' => {
                self.cursor.advance();
                Colon
            }
            '?' => {
                self.cursor.advance();
                Question
            }
            '~' => {
                self.cursor.advance();
                Tilde
            }
            '+' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('+') => {
                        self.cursor.advance();
                        PlusPlus
                    }
                    Some('=') => {
                        self.cursor.advance();
                        PlusEq
                    }
                    _ => Plus,
                }
            }
            '-' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('-') => {
                        self.cursor.advance();
                        MinusMinus
                    }
                    Some('=') => {
                        self.cursor.advance();
                        MinusEq
                    }
                    _ => Minus,
                }
            }
            '*' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('=') => {
                        self.cursor.advance();
                        StarEq
                    }
                    _ => Star,
                }
            }
            '/' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('=') => {
                        self.cursor.advance();
                        SlashEq
                    }
                    _ => Slash,
                }
            }
            '%' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('=') => {
                        self.cursor.advance();
                        PercentEq
                    }
                    _ => Percent,
                }
            }
            '^' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('=') => {
                        self.cursor.advance();
                        CaretEq
                    }
                    _ => Caret,
                }
            }
            '=' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('=') => {
                        self.cursor.advance();
                        EqEq
                    }
                    _ => Eq,
                }
            }
            '!' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('=') => {
                        self.cursor.advance();
                        NotEq
                    }
                    _ => Bang,
                }
            }
            '&' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('&') => {
                        self.cursor.advance();
                        AmpAmp
                    }
                    Some('=') => {
                        self.cursor.advance();
                        AmpEq
                    }
                    _ => Amp,
                }
            }
            '|' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('|') => {
                        self.cursor.advance();
                        PipePipe
                    }
                    Some('=') => {
                        self.cursor.advance();
                        PipeEq
                    }
                    _ => Pipe,
                }
            }
            '<' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('<') => {
                        self.cursor.advance();
                        match self.cursor.peek() {
                            Some('=') => {
                                self.cursor.advance();
                                ShlEq
                            }
                            _ => Shl,
                        }
                    }
                    Some('=') => {
                        self.cursor.advance();
                        Le
                    }
                    _ => Lt,
                }
            }
            '>' => {
                self.cursor.advance();
                match self.cursor.peek() {
                    Some('>') => {
                        self.cursor.advance();
                        match self.cursor.peek() {
                            Some('=') => {
                                self.cursor.advance();
                                ShrEq
                            }
                            _ => Shr,
                        }
                    }
                    Some('=') => {
                        self.cursor.advance();
                        Ge
                    }
                    _ => Gt,
                }
            }
            _ => return None,
        };
        let end = self.cursor.pos();
        let text = self.cursor.slice(start, end);
        Some(Token::new(kind, text, start_pos, Span::new(start, end)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, errors) = Lexer::tokenize(source);
        assert!(errors.is_empty(), "unexpected lexical errors: {errors:?}");
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            kinds("package interface myIface"),
            vec![TokenKind::Package, TokenKind::Interface, TokenKind::Id, TokenKind::Eof]
        );
    }

    #[test]
    fn builtin_type_keyword_is_not_an_identifier() {
        assert_eq!(kinds("Int32"), vec![TokenKind::Int32, TokenKind::Eof]);
    }

    #[test]
    fn line_comment_is_discarded() {
        let (tokens, _) = Lexer::tokenize("package p // trailing note\ninterface I");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Package,
                TokenKind::Id,
                TokenKind::Interface,
                TokenKind::Id,
                TokenKind::Eof
            ]
        );
        assert_eq!(tokens[2].line, 2);
    }

    #[test]
    fn block_comment_is_discarded_and_tracks_newlines() {
        let (tokens, _) = Lexer::tokenize("a /* multi\nline */ b");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn franca_comment_is_preserved_as_a_token() {
        let (tokens, errors) = Lexer::tokenize("<** @description: colors **> enumeration");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::FrancaComment);
        assert_eq!(tokens[0].lexeme, " @description: colors ");
        assert_eq!(tokens[1].kind, TokenKind::Enumeration);
    }

    #[test]
    fn string_literal_with_escape() {
        let source = r#""hello \"world\"""#;
        let (tokens, errors) = Lexer::tokenize(source);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, source);
    }

    #[test]
    fn illegal_character_is_skipped_and_lexing_continues() {
        let (tokens, errors) = Lexer::tokenize("a # b");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains('#'));
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Id, TokenKind::Id, TokenKind::Eof]);
    }

    #[test]
    fn line_numbers_increment_on_newline() {
        let (tokens, _) = Lexer::tokenize("a\nb\nc");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].line, 3);
    }

    #[test]
    fn structural_delimiters_and_multi_char_operators() {
        assert_eq!(
            kinds("{ } ( ) [ ] , . ; : = * <<= >>="),
            vec![
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Semi,
                TokenKind::Colon,
                TokenKind::Eq,
                TokenKind::Star,
                TokenKind::ShlEq,
                TokenKind::ShrEq,
                TokenKind::Eof,
            ]
        );
    }
}
