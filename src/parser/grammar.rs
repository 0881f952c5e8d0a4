//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::*;
use crate::parser::lexer::{lex, Token};
use crate::ParseError;

/// Parse bracket-notated source into a syntax tree
pub fn parse(input: &str) -> Result<Document, Vec<ParseError>> {
    if input.trim().is_empty() {
        return Err(vec![ParseError::empty_input(input.len())]);
    }

    let len = input.len();

    // Lex everything up front so unrecognized input is reported with its own message
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for (tok, span) in lex(input) {
        match tok {
            Ok(tok) => tokens.push((tok, SimpleSpan::from(span))),
            Err(()) => errors.push(ParseError::unrecognized(&input[span.clone()], span)),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let token_stream = Stream::from_iter(tokens).map((len..len).into(), |(t, s): (_, _)| (t, s));

    document_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn document_parser<'a, I>() -> impl Parser<'a, I, Document, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let label = select! {
        Token::Word(s) => Label::Word(s),
        Token::RawString(s) => Label::Raw(s),
    }
    .labelled("label")
    .map_with(|label, e| Spanned::new(label, span_range(&e.span())));

    // A bare label inside brackets is a leaf node
    let leaf = label.clone().map(|label: Spanned<Label>| {
        let span = label.span.clone();
        Spanned::new(NodeDecl::leaf(label), span)
    });

    let node = recursive(|node| {
        just(Token::BracketOpen)
            .ignore_then(label.clone())
            .then(choice((node, leaf)).repeated().collect::<Vec<_>>())
            .then_ignore(just(Token::BracketClose))
            .map(|(label, children)| NodeDecl { label, children })
            .map_with(|decl, e| Spanned::new(decl, span_range(&e.span())))
            .boxed()
    });

    node.then_ignore(end()).map(|root| Document { root })
}
