//! Token sinks
//!
//! A sink receives every recognized token, in left-to-right order, as soon
//! as a cutter is certain of it.

use std::ops::Range;

/// A recognized token span
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token text
    pub text: String,
    /// Absolute character offset of the first character
    pub start: usize,
    /// Absolute character offset one past the last character
    pub end: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Character span as a range
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Receiver of recognized tokens
pub trait Sink {
    /// Receive one token
    fn collect(&mut self, token: Token);
}

impl Sink for Vec<Token> {
    fn collect(&mut self, token: Token) {
        self.push(token);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn collect(&mut self, token: Token) {
        (**self).collect(token);
    }
}

/// Sink adapter around a closure
#[derive(Debug)]
pub struct FnSink<F>(F);

impl<F: FnMut(Token)> Sink for FnSink<F> {
    fn collect(&mut self, token: Token) {
        (self.0)(token);
    }
}

/// Wrap a closure as a sink
pub fn emit_fn<F: FnMut(Token)>(f: F) -> FnSink<F> {
    FnSink(f)
}

/// Sink that pushes into a borrowed vector
pub fn emit_push(tokens: &mut Vec<Token>) -> impl Sink + '_ {
    emit_fn(move |token| tokens.push(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink() {
        let mut tokens: Vec<Token> = Vec::new();
        tokens.collect(Token::new("中华", 0, 2));
        assert_eq!(tokens, vec![Token::new("中华", 0, 2)]);
        assert_eq!(tokens[0].char_len(), 2);
        assert_eq!(tokens[0].span(), 0..2);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = emit_fn(|token: Token| seen.push(token.text));
            sink.collect(Token::new("cuts", 8, 12));
        }
        assert_eq!(seen, vec!["cuts".to_string()]);
    }

    #[test]
    fn test_emit_push() {
        let mut tokens: Vec<Token> = Vec::new();
        let mut sink = emit_push(&mut tokens);
        sink.collect(Token::new("well", 13, 17));
        drop(sink);
        assert_eq!(tokens.len(), 1);
    }
}
