//! Error types for lexing and parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::ast::Span;
use crate::parser::lexer::Token;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl ParseError {
    /// Create a syntax error without an expected-token list
    pub fn syntax(span: Span, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            span,
            message: message.into(),
            expected: Vec::new(),
        }
    }

    /// Input contained nothing but whitespace
    pub fn empty_input(len: usize) -> Self {
        ParseError::Syntax {
            span: len..len,
            message: "Empty input".to_string(),
            expected: vec!["'['".to_string()],
        }
    }

    /// Text the lexer could not turn into a token
    pub fn unrecognized(text: &str, span: Span) -> Self {
        let message = if text.starts_with("R\"") {
            "Unterminated raw string".to_string()
        } else {
            format!("Unrecognized input {:?}", text)
        };
        Self::syntax(span, message)
    }

    /// Source span of the error
    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                // Writing into a Vec cannot fail
                let _ = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> From<chumsky::error::Rich<'a, Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of input".to_string(),
                };
                format!("Unexpected {}", found_str)
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        let mut expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();
        expected.sort();
        expected.dedup();

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::BracketOpen => "'['".to_string(),
        Token::BracketClose => "']'".to_string(),
        Token::Word(s) => format!("label '{}'", s),
        Token::RawString(s) => format!("raw string \"{}\"", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_raw_string_message() {
        let err = ParseError::unrecognized("R\"", 4..6);
        assert!(err.to_string().contains("Unterminated raw string"));
        assert_eq!(err.span(), &(4..6));
    }

    #[test]
    fn test_format_includes_source_line() {
        let source = "[a b";
        let err = ParseError::Syntax {
            span: 4..4,
            message: "Unexpected end of input".to_string(),
            expected: vec!["']'".to_string()],
        };
        let report = err.format(source, "input.tree");
        assert!(report.contains("Unexpected end of input"));
    }
}
