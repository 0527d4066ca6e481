//! Rolling character buffer with absolute offsets
//!
//! The buffer holds the window of the stream that has arrived but has not
//! been consumed yet. Every offset is an absolute stream position, so
//! trimming the consumed prefix never shifts what a cutter observes.

use crate::error::{CoreError, Result};

/// Window of characters from an input stream
#[derive(Debug, Clone, Default)]
pub struct RollingBuffer {
    /// Characters currently held
    chars: Vec<char>,
    /// Absolute offset of `chars[0]`
    origin: usize,
    /// End-of-stream flag; no append is accepted once set
    ended: bool,
    /// Largest window observed, for memory reporting
    peak_len: usize,
}

impl RollingBuffer {
    /// Create an empty buffer positioned at offset 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` characters
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Append text to the tail, returning the number of characters added
    pub fn append(&mut self, text: &str) -> Result<usize> {
        self.append_chars(text.chars())
    }

    /// Append characters to the tail, returning the number added
    pub fn append_chars<I>(&mut self, chars: I) -> Result<usize>
    where
        I: IntoIterator<Item = char>,
    {
        if self.ended {
            return Err(CoreError::StreamEnded);
        }

        let before = self.chars.len();
        self.chars.extend(chars);
        self.peak_len = self.peak_len.max(self.chars.len());
        Ok(self.chars.len() - before)
    }

    /// Signal that no further characters will arrive
    pub fn mark_end_of_stream(&mut self) {
        self.ended = true;
    }

    /// Whether end-of-stream has been signaled
    pub fn is_final(&self) -> bool {
        self.ended
    }

    /// First absolute offset still held
    pub fn start(&self) -> usize {
        self.origin
    }

    /// Absolute offset one past the last held character
    pub fn end(&self) -> usize {
        self.origin + self.chars.len()
    }

    /// Number of characters held
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Largest number of characters held at once
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }

    /// Character at an absolute offset, if held
    pub fn char_at(&self, offset: usize) -> Option<char> {
        offset
            .checked_sub(self.origin)
            .and_then(|index| self.chars.get(index).copied())
    }

    /// Read-only view from `offset` to the current tail
    pub fn slice_from(&self, offset: usize) -> Result<Beef<'_>> {
        let index = self.index_of(offset)?;
        Ok(Beef {
            chars: &self.chars[index..],
            origin: offset,
            is_final: self.ended,
        })
    }

    /// Read-only view of the whole window
    pub fn beef(&self) -> Beef<'_> {
        Beef {
            chars: &self.chars,
            origin: self.origin,
            is_final: self.ended,
        }
    }

    /// Discard characters before `offset`, returning how many were dropped
    pub fn trim_before(&mut self, offset: usize) -> Result<usize> {
        let index = self.index_of(offset)?;
        self.chars.drain(..index);
        self.origin = offset;
        Ok(index)
    }

    fn index_of(&self, offset: usize) -> Result<usize> {
        if offset < self.start() || offset > self.end() {
            return Err(CoreError::BufferBounds {
                offset,
                start: self.start(),
                end: self.end(),
            });
        }
        Ok(offset - self.origin)
    }
}

/// Borrowed scanning window handed to cutters
///
/// Offsets are absolute. Lookups outside `[start, end)` yield `None`.
#[derive(Debug, Clone, Copy)]
pub struct Beef<'a> {
    chars: &'a [char],
    origin: usize,
    is_final: bool,
}

impl<'a> Beef<'a> {
    /// Build a standalone window over `chars` starting at absolute `origin`
    pub fn new(chars: &'a [char], origin: usize, is_final: bool) -> Self {
        Self {
            chars,
            origin,
            is_final,
        }
    }

    /// First absolute offset of the window
    #[inline]
    pub fn start(&self) -> usize {
        self.origin
    }

    /// Absolute offset one past the last character
    #[inline]
    pub fn end(&self) -> usize {
        self.origin + self.chars.len()
    }

    /// Number of characters in the window
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the window is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether this window holds the final chunk of the stream
    #[inline]
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Whether `offset` is a valid position in `[start, end]`
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start() && offset <= self.end()
    }

    /// Character at an absolute offset
    #[inline]
    pub fn char_at(&self, offset: usize) -> Option<char> {
        offset
            .checked_sub(self.origin)
            .and_then(|index| self.chars.get(index).copied())
    }

    /// Characters in `[start, end)`, clamped to the window
    pub fn slice(&self, start: usize, end: usize) -> &'a [char] {
        let from = start.clamp(self.start(), self.end()) - self.origin;
        let to = end.clamp(self.start(), self.end()) - self.origin;
        if from >= to {
            return &[];
        }
        &self.chars[from..to]
    }

    /// Text of `[start, end)`, clamped to the window
    pub fn text(&self, start: usize, end: usize) -> String {
        self.slice(start, end).iter().collect()
    }

    /// Absolute offset of the first position at or after `from` whose
    /// character fails `pred`, or the window end
    pub fn scan_while<P>(&self, from: usize, mut pred: P) -> usize
    where
        P: FnMut(char) -> bool,
    {
        let mut pos = from.max(self.start());
        while let Some(ch) = self.char_at(pos) {
            if !pred(ch) {
                break;
            }
            pos += 1;
        }
        pos.min(self.end()).max(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_offsets() {
        let mut buffer = RollingBuffer::new();
        assert_eq!(buffer.append("hello").unwrap(), 5);
        assert_eq!(buffer.append(" 世界").unwrap(), 3);
        assert_eq!(buffer.start(), 0);
        assert_eq!(buffer.end(), 8);
        assert_eq!(buffer.char_at(6), Some('世'));
        assert_eq!(buffer.char_at(8), None);
    }

    #[test]
    fn test_append_after_end_of_stream() {
        let mut buffer = RollingBuffer::new();
        buffer.append("abc").unwrap();
        buffer.mark_end_of_stream();
        assert!(buffer.is_final());
        assert_eq!(buffer.append("d"), Err(CoreError::StreamEnded));
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_trim_keeps_absolute_offsets() {
        let mut buffer = RollingBuffer::new();
        buffer.append("hello ya").unwrap();
        assert_eq!(buffer.trim_before(5).unwrap(), 5);
        buffer.append("ng!").unwrap();

        assert_eq!(buffer.start(), 5);
        assert_eq!(buffer.end(), 11);
        assert_eq!(buffer.beef().text(5, 11), " yang!");
        assert_eq!(buffer.char_at(6), Some('y'));
        assert_eq!(buffer.char_at(4), None);
        assert_eq!(buffer.peak_len(), 8);
    }

    #[test]
    fn test_slice_from_bounds() {
        let mut buffer = RollingBuffer::new();
        buffer.append("abcdef").unwrap();
        buffer.trim_before(2).unwrap();

        let beef = buffer.slice_from(6).unwrap();
        assert!(beef.is_empty());
        assert_eq!(beef.start(), 6);

        assert_eq!(
            buffer.slice_from(1).unwrap_err(),
            CoreError::BufferBounds {
                offset: 1,
                start: 2,
                end: 6
            }
        );
        assert!(buffer.slice_from(7).is_err());
        assert!(buffer.trim_before(9).is_err());
    }

    #[test]
    fn test_beef_scan_and_clamp() {
        let chars: Vec<char> = "ab12 cd".chars().collect();
        let beef = Beef::new(&chars, 10, true);

        assert_eq!(beef.scan_while(10, |c| c.is_ascii_alphabetic()), 12);
        assert_eq!(beef.scan_while(12, |c| c.is_ascii_digit()), 14);
        assert_eq!(beef.scan_while(15, |c| c != ' '), 17);
        assert_eq!(beef.text(0, 12), "ab");
        assert_eq!(beef.text(15, 99), "cd");
        assert_eq!(beef.text(13, 12), "");
        assert!(beef.contains(17));
        assert!(!beef.contains(18));
    }
}
