// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decompose a decorated string into [`Span`]s of uniformly styled text.
//!
//! This is the inverse of [`crate::AnsiColorExt`]: it tracks one slot per category
//! while scanning left to right, and starts a new span whenever the slots differ from
//! those of the current span. Styles that are never closed simply end with the input.

use crate::{ColorValue, Palette, SgrCode, SgrEraser, StyleState, extended_color_len,
            global_palette, render_css};

/// A maximal run of text that has one resolved style.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Never empty.
    pub text: String,
    /// Foreground color, brightened by a bright weight.
    pub color: Option<ColorValue>,
    pub bg_color: Option<ColorValue>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub inverse: bool,
    pub css: String,
    /// The most recent recognized SGR code before this span's text started, if any.
    ///
    /// This is the code that opened the span's style, not the one that follows its
    /// text, eg: for `"foo".bg_bright_red()` the span `foo` reports `101` rather than
    /// the closing `49`. It is `None` when no code came before the span.
    pub code: Option<u16>,
}

impl Span {
    fn new(text: String, state: &StyleState, code: Option<u16>, palette: &Palette) -> Self {
        Self {
            text,
            color: state.effective_color(),
            bg_color: state.bg_color,
            bold: state.is_bold(),
            dim: state.is_dim(),
            italic: state.italic,
            underline: state.underline,
            inverse: state.inverse,
            css: render_css(state, palette),
            code,
        }
    }
}

/// Result of [`parse()`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedText {
    pub spans: Vec<Span>,
}

mod parsed_text_impl {
    use super::{ParsedText, Span};

    impl ParsedText {
        #[must_use]
        pub fn spans(&self) -> &[Span] { &self.spans }

        pub fn iter(&self) -> std::slice::Iter<'_, Span> { self.spans.iter() }

        #[must_use]
        pub fn len(&self) -> usize { self.spans.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.spans.is_empty() }

        /// All the span text joined together, ie: the input without escape sequences.
        #[must_use]
        pub fn plain_text(&self) -> String {
            self.spans.iter().map(|it| it.text.as_str()).collect()
        }

        /// Arguments for a browser console that supports `%c` CSS styling, eg:
        ///
        /// ```text
        /// console.log("%cfoo%cbar", "", "color:rgba(204,0,0,1);")
        /// ```
        ///
        /// The first item is the format string with one `%c` per span, and it is
        /// followed by the CSS of each span in order.
        #[must_use]
        pub fn browser_console_arguments(&self) -> Vec<String> {
            let format = self
                .spans
                .iter()
                .fold(String::new(), |mut acc, span| {
                    acc.push_str("%c");
                    acc.push_str(&span.text);
                    acc
                });
            std::iter::once(format)
                .chain(self.spans.iter().map(|span| span.css.clone()))
                .collect()
        }

        /// Older name for [`Self::browser_console_arguments`].
        #[must_use]
        pub fn as_web_inspector_console_log_arguments(&self) -> Vec<String> {
            self.browser_console_arguments()
        }
    }

    impl IntoIterator for ParsedText {
        type Item = Span;
        type IntoIter = std::vec::IntoIter<Span>;

        fn into_iter(self) -> Self::IntoIter { self.spans.into_iter() }
    }

    impl<'a> IntoIterator for &'a ParsedText {
        type Item = &'a Span;
        type IntoIter = std::slice::Iter<'a, Span>;

        fn into_iter(self) -> Self::IntoIter { self.spans.iter() }
    }
}

/// Where a span starts in the erased text, and its style.
#[derive(Debug)]
struct SpanStart {
    offset: usize,
    state: StyleState,
    code: Option<u16>,
}

/// Apply the parameters of one sequence in order. An extended color is skipped as a
/// whole, along with its arguments.
fn apply_params(params: &[u16], state: &mut StyleState, last_code: &mut Option<u16>) {
    let mut idx = 0;
    while let Some(&param) = params.get(idx) {
        if let Some(len) = extended_color_len(&params[idx..]) {
            tracing::trace!(params = ?&params[idx..idx + len], "skipping extended color");
            idx += len;
            continue;
        }
        match SgrCode::from_param(param) {
            Some(code) => {
                state.apply(code);
                *last_code = Some(param);
            }
            None => tracing::trace!(param, "skipping unknown SGR parameter"),
        }
        idx += 1;
    }
}

/// Split `input` into styled spans. Every string is valid input:
/// - Unknown SGR parameters (eg: `53`) and extended colors (eg: `38;5;n`) don't change
///   the style, but their escape sequence is still removed from the text.
/// - Anything that isn't a well formed SGR sequence is kept as text.
/// - Styles left open at the end of the input are implicitly closed.
///
/// The span text is exactly what [`crate::strip()`] leaves. RGB values for CSS come from
/// the current [`global_palette`].
#[must_use]
pub fn parse(input: &str) -> ParsedText {
    let palette = global_palette::snapshot();

    let mut eraser = SgrEraser::default();
    let mut starts = Vec::<SpanStart>::new();
    let mut state = StyleState::default();
    let mut last_code: Option<u16> = None;

    for ch in input.chars() {
        let offset = eraser.len();

        let Some(params) = eraser.feed(ch) else {
            if starts.last().is_none_or(|it| it.state != state) {
                starts.push(SpanStart {
                    offset,
                    state,
                    code: last_code,
                });
            }
            continue;
        };

        // Text that turned out to be part of the sequence is gone, and so are the
        // spans that began in it.
        let len = eraser.len();
        while starts.last().is_some_and(|it| it.offset >= len) {
            starts.pop();
        }

        apply_params(&params, &mut state, &mut last_code);
    }

    let text = eraser.into_text();
    let ends = starts
        .iter()
        .skip(1)
        .map(|it| it.offset)
        .chain(std::iter::once(text.len()));
    let spans = starts
        .iter()
        .zip(ends)
        .map(|(start, end)| {
            Span::new(
                text[start.offset..end].to_owned(),
                &start.state,
                start.code,
                &palette,
            )
        })
        .collect();

    ParsedText { spans }
}
