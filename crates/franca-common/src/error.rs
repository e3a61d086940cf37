use crate::{Position, Span};

/// Raised through the lexer's error callback on an unrecognizable character.
/// Does not abort the lex; the lexer skips one character and resumes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LexError {
    pub message: String,
    pub pos: Position,
}

impl LexError {
    pub fn illegal_character(c: char, pos: Position) -> Self {
        Self {
            message: format!("illegal character {c:?}"),
            pos,
        }
    }

    pub fn unterminated_string(pos: Position) -> Self {
        Self {
            message: "unterminated string literal".to_string(),
            pos,
        }
    }

    pub fn unterminated_comment(pos: Position) -> Self {
        Self {
            message: "unterminated comment".to_string(),
            pos,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.pos.line, self.message)
    }
}

impl std::error::Error for LexError {}

/// The single first-error diagnostic the parser emits on a syntax error.
///
/// `span` is additive ambient plumbing for diagnostic rendering (§7.3); it
/// does not participate in the plain-text message contract of §7.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ParseError {
    message: String,
    pub line: Option<u32>,
    pub lexeme: Option<String>,
    pub span: Option<Span>,
}

impl ParseError {
    /// `"Syntax error: unexpected EOF"`.
    pub fn unexpected_eof() -> Self {
        Self {
            message: "Syntax error: unexpected EOF".to_string(),
            line: None,
            lexeme: None,
            span: None,
        }
    }

    /// `"Syntax error at line L: unexpected token T"`.
    pub fn unexpected_token(line: u32, lexeme: impl Into<String>, span: Span) -> Self {
        let lexeme = lexeme.into();
        Self {
            message: format!("Syntax error at line {line}: unexpected token {lexeme}"),
            line: Some(line),
            lexeme: Some(lexeme),
            span: Some(span),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let e = LexError::illegal_character('$', Position::new(3, 5));
        assert_eq!(e.to_string(), "line 3: illegal character '$'");
    }

    #[test]
    fn parse_error_eof() {
        let e = ParseError::unexpected_eof();
        assert_eq!(e.to_string(), "Syntax error: unexpected EOF");
        assert_eq!(e.line, None);
    }

    #[test]
    fn parse_error_unexpected_token() {
        let e = ParseError::unexpected_token(7, "out", Span::new(10, 13));
        assert_eq!(e.to_string(), "Syntax error at line 7: unexpected token out");
        assert_eq!(e.line, Some(7));
        assert_eq!(e.lexeme.as_deref(), Some("out"));
        assert_eq!(e.span, Some(Span::new(10, 13)));
    }
}
