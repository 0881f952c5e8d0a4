//! Lexer for bracket-notated trees using logos

use logos::Logos;

use super::ast::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\x0C\r]+")]
pub enum Token {
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,

    /// Raw string label: `R"delim(payload)delim"`
    #[token("R\"", raw_string)]
    RawString(String),

    /// Plain label. Any run of printable characters except brackets; a run
    /// starting with `R"` is always a raw string instead.
    #[regex(
        r#"[^\x00-\x20\x7F\[\]R][^\x00-\x20\x7F\[\]]*|R([^\x00-\x20\x7F\[\]"][^\x00-\x20\x7F\[\]]*)?"#,
        |lex| lex.slice().to_string()
    )]
    Word(String),
}

/// Consume the rest of a raw string after its `R"` prefix.
///
/// The delimiter is everything between the opening quote and the first `(`.
/// The payload ends at the first `)delim"`.
fn raw_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let rest = lex.remainder();
    let open = rest.find('(')?;
    let delimiter = &rest[..open];
    if delimiter.contains(['"', ')', '\\']) || delimiter.chars().any(char::is_whitespace) {
        return None;
    }

    let closing = format!("){}\"", delimiter);
    let body_start = open + 1;
    let body_len = rest[body_start..].find(&closing)?;
    let payload = rest[body_start..body_start + body_len].to_string();

    lex.bump(body_start + body_len + closing.len());
    Some(payload)
}

/// Lex input string into tokens with spans.
///
/// Unrecognized input is kept as `Err(())` so the parser can report it.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).map(|(t, _)| t.expect("valid token")).collect()
    }

    #[test]
    fn test_brackets_and_words() {
        assert_eq!(
            tokens("[S [NP a]]"),
            vec![
                Token::BracketOpen,
                Token::Word("S".to_string()),
                Token::BracketOpen,
                Token::Word("NP".to_string()),
                Token::Word("a".to_string()),
                Token::BracketClose,
                Token::BracketClose,
            ]
        );
    }

    #[test]
    fn test_word_stops_at_bracket() {
        assert_eq!(
            tokens("[a]b"),
            vec![
                Token::BracketOpen,
                Token::Word("a".to_string()),
                Token::BracketClose,
                Token::Word("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_punctuation_is_part_of_word() {
        assert_eq!(
            tokens("std::vector<int> x+=1;"),
            vec![
                Token::Word("std::vector<int>".to_string()),
                Token::Word("x+=1;".to_string()),
            ]
        );
    }

    #[test]
    fn test_raw_strings() {
        let input = r#"R"(abc)" def var123 R"~(def)~" R"(cat and fish)""#;
        assert_eq!(
            tokens(input),
            vec![
                Token::RawString("abc".to_string()),
                Token::Word("def".to_string()),
                Token::Word("var123".to_string()),
                Token::RawString("def".to_string()),
                Token::RawString("cat and fish".to_string()),
            ]
        );
    }

    #[test]
    fn test_raw_string_keeps_brackets_and_quotes() {
        let input = r#"R"x([a] "b")x""#;
        assert_eq!(tokens(input), vec![Token::RawString(r#"[a] "b""#.to_string())]);
    }

    #[test]
    fn test_raw_string_needs_matching_delimiter() {
        let input = r#"R"ab(one)a" two)ab""#;
        assert_eq!(
            tokens(input),
            vec![Token::RawString(r#"one)a" two"#.to_string())]
        );
    }

    #[test]
    fn test_words_starting_with_r() {
        assert_eq!(
            tokens("R Root R2"),
            vec![
                Token::Word("R".to_string()),
                Token::Word("Root".to_string()),
                Token::Word("R2".to_string()),
            ]
        );
    }

    #[test]
    fn test_unterminated_raw_string_is_error() {
        let results: Vec<_> = lex(r#"[a R"(never closed]"#).collect();
        assert!(results.iter().any(|(t, _)| t.is_err()));
    }

    #[test]
    fn test_control_character_is_error() {
        let results: Vec<_> = lex("[a \x0B b]").collect();
        let (err, span) = results
            .iter()
            .find(|(t, _)| t.is_err())
            .expect("vertical tab should not lex");
        assert!(err.is_err());
        assert_eq!(span.clone(), 3..4);
    }

    #[test]
    fn test_spans() {
        let spans: Vec<_> = lex("[ab cd]").map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..1, 1..3, 4..6, 6..7]);
    }
}
