//! Shared cutters and helpers for protocol tests

#![allow(dead_code)]

use cleaver_core::{
    Beef, Cutter, CutterRegistry, DispatchState, Dispatcher, Disposition, Dissection, Sink, Token,
};
use std::sync::Mutex;

/// Whitespace-delimited fallback: every non-whitespace run is a token
pub struct Words;

impl Cutter for Words {
    fn name(&self) -> &str {
        "words"
    }

    fn assignable(&self, beef: &Beef<'_>, history: usize, index: usize) -> Disposition {
        match beef.char_at(index) {
            Some(ch) if !ch.is_whitespace() && history == index => Disposition::Assigned,
            Some(ch) if !ch.is_whitespace() => Disposition::Point,
            _ => Disposition::Limit,
        }
    }

    fn dissect(&self, sink: &mut dyn Sink, beef: &Beef<'_>, offset: usize) -> Dissection {
        let end = beef.scan_while(offset, |ch| !ch.is_whitespace());
        if end == beef.end() && !beef.is_final() {
            return Dissection::Partial(offset);
        }
        sink.collect(Token::new(beef.text(offset, end), offset, end));
        Dissection::Complete(end)
    }
}

/// Latin letter runs, continuing across spaces within one call
pub struct Letters;

impl Cutter for Letters {
    fn name(&self) -> &str {
        "letters"
    }

    fn assignable(&self, beef: &Beef<'_>, history: usize, index: usize) -> Disposition {
        match beef.char_at(index) {
            Some(ch) if ch.is_ascii_alphabetic() && history == index => Disposition::Assigned,
            Some(ch) if ch.is_ascii_alphabetic() => Disposition::Point,
            _ => Disposition::Limit,
        }
    }

    fn dissect(&self, sink: &mut dyn Sink, beef: &Beef<'_>, offset: usize) -> Dissection {
        let mut committed = offset;
        let mut pos = offset;
        loop {
            let end = beef.scan_while(pos, |ch| ch.is_ascii_alphabetic());
            if end == beef.end() && !beef.is_final() {
                return Dissection::Partial(committed);
            }
            sink.collect(Token::new(beef.text(pos, end), pos, end));
            committed = end;

            let next = beef.scan_while(end, |ch| ch == ' ');
            match beef.char_at(next) {
                Some(ch) if ch.is_ascii_alphabetic() && next > end => pos = next,
                _ => return Dissection::Complete(next),
            }
        }
    }
}

/// Records every dissect call of the wrapped cutter
pub struct Recording<C> {
    pub inner: C,
    pub calls: Mutex<Vec<(usize, Dissection)>>,
}

impl<C> Recording<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(usize, Dissection)> {
        self.calls.lock().unwrap().clone()
    }
}

impl<C: Cutter> Cutter for Recording<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn assignable(&self, beef: &Beef<'_>, history: usize, index: usize) -> Disposition {
        self.inner.assignable(beef, history, index)
    }

    fn dissect(&self, sink: &mut dyn Sink, beef: &Beef<'_>, offset: usize) -> Dissection {
        let result = self.inner.dissect(sink, beef, offset);
        self.calls.lock().unwrap().push((offset, result));
        result
    }
}

/// Feed `chunks` one by one, running the dispatcher after each
pub fn segment_chunks(registry: CutterRegistry, chunks: &[&str]) -> Vec<Token> {
    let mut dispatcher = Dispatcher::new(registry);
    let mut tokens: Vec<Token> = Vec::new();
    for chunk in chunks {
        dispatcher.feed(chunk).unwrap();
        let state = dispatcher.run(&mut tokens).unwrap();
        assert_eq!(state, DispatchState::AwaitingInput);
    }
    dispatcher.finish();
    assert_eq!(dispatcher.run(&mut tokens).unwrap(), DispatchState::Done);
    tokens
}

pub fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.text.as_str()).collect()
}
