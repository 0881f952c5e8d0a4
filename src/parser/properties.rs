//! Key/value properties carried by raw-string labels
//!
//! A raw-string label such as `R"(label = "a node" color = red)"` is parsed
//! into a property map. Only the keys in [`KNOWN_KEYS`] are recognized;
//! parsing stops at the first pair that is unknown or malformed.

use std::collections::BTreeMap;

use logos::Logos;

/// Property key/value pairs of one node
pub type Properties = BTreeMap<String, String>;

/// Keys recognized in raw-string labels
pub const KNOWN_KEYS: &[&str] = &["label", "color"];

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\x0C\r]+")]
enum PropToken {
    #[token("=")]
    Equals,

    /// A quoted value may run to the end of the text unterminated
    #[regex(r#""([^"\\]|\\(.|\n))*("|\\)?"#, |lex| unescape(lex.slice()))]
    Quoted(String),

    /// Printable ASCII except `"` and `=`
    #[regex(r"[!#-<>-~]+", |lex| lex.slice().to_string())]
    Bare(String),
}

/// Strip the quotes and resolve `\x` escapes to `x`
///
/// A lone backslash at the end of the text empties the value.
fn unescape(quoted: &str) -> String {
    let mut value = String::with_capacity(quoted.len());
    let mut chars = quoted.chars().skip(1);
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => value.push(escaped),
                None => return String::new(),
            },
            '"' => break,
            c => value.push(c),
        }
    }
    value
}

/// Parse the payload of a raw-string label into properties
pub fn parse_properties(text: &str) -> Properties {
    let mut props = Properties::new();
    let mut tokens = PropToken::lexer(text);

    loop {
        let key = match tokens.next() {
            Some(Ok(PropToken::Bare(key))) if KNOWN_KEYS.contains(&key.as_str()) => key,
            _ => break,
        };
        if !matches!(tokens.next(), Some(Ok(PropToken::Equals))) {
            break;
        }
        let value = match tokens.next() {
            Some(Ok(PropToken::Quoted(v))) | Some(Ok(PropToken::Bare(v))) => v,
            _ => break,
        };
        if value.is_empty() {
            break;
        }
        props.insert(key, value);
    }

    props
}
