// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Split a string into literal text and SGR escape sequences.
//!
//! The only sequence that is recognized is `ESC [ <digits> (; <digits>)* m`. Anything
//! else, including a lone `ESC`, `ESC[m`, `ESC[;1m`, or a CSI sequence with another final
//! byte, stays in the literal text untouched.
//!
//! ```text
//! "foo\x1b[31;1mbar\x1b[0m"
//!  ───┬─ ────┬──── ──┬ ──┬───
//!  Text("foo")  │    │   Sgr { params: [0] }
//!        Sgr { params: [31, 1] }
//!                    Text("bar")
//! ```
//!
//! Since `ESC` is ASCII, splitting at it always lands on a UTF-8 char boundary.
//!
//! [`tokenize`] looks at the input exactly as it is, which is what composing needs.
//! [`SgrEraser`] looks at what is left after each removal, which is what parsing and
//! stripping need.

use smallvec::SmallVec;

use crate::ESC_BYTE;

/// Parameters of one escape sequence. Most sequences have exactly one.
pub type SgrParams = SmallVec<[u16; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Sgr {
        /// The exact bytes of the sequence, eg: `"\x1b[31m"`.
        raw: &'a str,
        params: SgrParams,
    },
}

/// Iterator over the [`Token`]s of a string. Adjacent [`Token::Text`] items are
/// possible (eg: around an `ESC` that doesn't start a valid sequence).
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

#[must_use]
pub fn tokenize(input: &str) -> Tokens<'_> { Tokens { input, pos: 0 } }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    ExpectBracket,
    ExpectDigit,
    InDigits,
}

#[derive(Debug)]
enum Step {
    Pending,
    Matched(SgrParams),
    Rejected,
}

/// Incremental matcher for the bytes that follow an `ESC`.
#[derive(Debug, Clone, Default)]
struct SgrMatcher {
    state: ScanState,
    params: SgrParams,
    current: u16,
}

impl SgrMatcher {
    fn advance(&mut self, byte: u8) -> Step {
        match (self.state, byte) {
            (ScanState::ExpectBracket, b'[') => {
                self.state = ScanState::ExpectDigit;
                Step::Pending
            }
            (ScanState::ExpectDigit | ScanState::InDigits, digit @ b'0'..=b'9') => {
                // Out of range values saturate, and are then ignored as unknown codes.
                self.current = self
                    .current
                    .saturating_mul(10)
                    .saturating_add(u16::from(digit - b'0'));
                self.state = ScanState::InDigits;
                Step::Pending
            }
            (ScanState::InDigits, b';') => {
                self.params.push(self.current);
                self.current = 0;
                self.state = ScanState::ExpectDigit;
                Step::Pending
            }
            (ScanState::InDigits, b'm') => {
                self.params.push(self.current);
                Step::Matched(std::mem::take(&mut self.params))
            }
            _ => Step::Rejected,
        }
    }
}

/// Try to match a complete SGR sequence that starts at `start`. Returns the end
/// (exclusive) of the sequence and its parameters.
fn match_sgr(bytes: &[u8], start: usize) -> Option<(usize, SgrParams)> {
    if bytes.get(start) != Some(&ESC_BYTE) {
        return None;
    }

    let mut matcher = SgrMatcher::default();
    for (offset, byte) in bytes[start + 1..].iter().enumerate() {
        match matcher.advance(*byte) {
            Step::Pending => {}
            Step::Matched(params) => return Some((start + 1 + offset + 1, params)),
            Step::Rejected => return None,
        }
    }

    // Ran out of input before the final byte.
    None
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        if let Some((end, params)) = match_sgr(bytes, start) {
            self.pos = end;
            return Some(Token::Sgr {
                raw: &self.input[start..end],
                params,
            });
        }

        // Literal text runs up to (not including) the next ESC. If the text starts with
        // an ESC, it is one that didn't match, so it belongs to this run.
        let end = bytes[start + 1..]
            .iter()
            .position(|it| *it == ESC_BYTE)
            .map_or(bytes.len(), |offset| start + 1 + offset);
        self.pos = end;
        Some(Token::Text(&self.input[start..end]))
    }
}

/// Removes SGR sequences from text that is fed to it one [`char`] at a time, and keeps
/// what is left in [`Self::text`].
///
/// Unlike [`tokenize`], removing a sequence can make the text around it join up into a
/// new sequence, and that one is removed as well:
///
/// ```text
/// "\x1b" "\x1b[31m" "[31m"
///  ──┬─  ────┬────  ──┬──
///    │    removed      │
///    └──── joined ─────┘  also removed, leaving ""
/// ```
///
/// So [`Self::text`] never contains a complete SGR sequence.
#[derive(Debug, Clone, Default)]
pub struct SgrEraser {
    text: String,
    /// Each `ESC` in `text` that can still become the start of a sequence, with the
    /// match state of the text after it. Only the last one is being extended; the others
    /// resume if the ones after them are removed.
    pending: SmallVec<[(usize, SgrMatcher); 2]>,
}

impl SgrEraser {
    /// Append `ch`. When that completes a sequence, it is removed from the text and its
    /// parameters are returned.
    pub fn feed(&mut self, ch: char) -> Option<SgrParams> {
        if ch == char::from(ESC_BYTE) {
            self.pending.push((self.text.len(), SgrMatcher::default()));
            self.text.push(ch);
            return None;
        }

        self.text.push(ch);
        let (start, matcher) = self.pending.last_mut()?;
        let start = *start;
        let step = u8::try_from(ch).map_or(Step::Rejected, |byte| matcher.advance(byte));

        match step {
            Step::Pending => None,
            Step::Matched(params) => {
                self.pending.pop();
                self.text.truncate(start);
                Some(params)
            }
            // The text after every pending `ESC` now includes `ch`, which can never be
            // removed, so none of them can match anymore.
            Step::Rejected => {
                self.pending.clear();
                None
            }
        }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn len(&self) -> usize { self.text.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    #[must_use]
    pub fn into_text(self) -> String { self.text }
}
