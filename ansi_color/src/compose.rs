// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Wrap text in an attribute, so that it nests correctly inside of (and around) other
//! attributes.
//!
//! Wrapping is `open + text + close`, except that every close code of the same
//! [`Category`] already inside `text` is rewritten to the new open code. An inner close
//! means "go back to whatever was there before", and after wrapping, that is the new
//! outer attribute rather than the terminal default:
//!
//! ```text
//! ("foo".cyan() + "bar").red()
//!
//!   before:        ESC[36m foo ESC[39m bar
//!   after:  ESC[31m ESC[36m foo ESC[31m bar ESC[39m
//!                               ───┬───
//!                   inner close rewritten to the outer open
//! ```
//!
//! Concatenation is plain string concatenation. No rewriting happens until an attribute
//! is applied to the joined string.

use crate::{AnsiColorError, Attribute, Category, SgrCode, Token, attributes, resolve,
            tokenize};

/// Apply the attribute named `name` to `text`. Both `bgBrightRed` and `bg_bright_red`
/// spellings are accepted.
///
/// # Errors
///
/// Returns [`AnsiColorError::UnknownAttribute`] if `name` is not in the catalog.
pub fn apply(text: &str, name: &str) -> Result<String, AnsiColorError> {
    Ok(resolve(name)?.apply(text))
}

mod attribute_apply_impl {
    use super::{Attribute, Category, SgrCode, Token, tokenize};

    impl Attribute {
        /// Wrap `text` in this attribute.
        #[must_use]
        pub fn apply(&self, text: &str) -> String {
            let open = self.open_sequence();
            let close = self.close_sequence();

            let mut acc = String::with_capacity(text.len() + open.len() * 2 + close.len());
            acc.push_str(&open);

            let mut tokens = tokenize(text).peekable();
            while let Some(token) = tokens.next() {
                match token {
                    Token::Text(it) => acc.push_str(it),
                    Token::Sgr { raw, params } => {
                        let is_inner_close = params.as_slice() == [u16::from(self.close)]
                            && !self.is_weight_open_prefix(tokens.peek());
                        if is_inner_close {
                            acc.push_str(&open);
                        } else {
                            acc.push_str(raw);
                        }
                    }
                }
            }

            acc.push_str(&close);
            acc
        }

        /// A weight opens with `ESC[22m` followed by `ESC[1m` or `ESC[2m`. That `22` is
        /// part of an inner open, not an inner close.
        fn is_weight_open_prefix(&self, next: Option<&Token<'_>>) -> bool {
            if self.category != Category::Weight {
                return false;
            }
            let bright = u16::from(SgrCode::Bright);
            let dim = u16::from(SgrCode::Dim);
            matches!(
                next,
                Some(Token::Sgr { params, .. })
                    if params.as_slice() == [bright] || params.as_slice() == [dim]
            )
        }
    }
}

macro_rules! attribute_methods {
    (
        $( $(#[$meta:meta])* $method:ident => $attribute:ident ),* $(,)?
    ) => {
        $(
            $(#[$meta])*
            #[must_use]
            fn $method(&self) -> String { self.with_attribute(&attributes::$attribute) }
        )*
    };
}

/// Fluent API to apply attributes to strings. Each method returns a new [`String`] and,
/// since [`String`] derefs to [`str`], calls chain:
///
/// ```
/// use r3bl_ansicolor::AnsiColorExt;
///
/// let styled = ("foo".red().underline() + "bar").bg_blue();
/// assert_eq!(
///     styled,
///     "\x1b[44m\x1b[4m\x1b[31mfoo\x1b[39m\x1b[24mbar\x1b[49m"
/// );
/// ```
pub trait AnsiColorExt {
    fn with_attribute(&self, attribute: &Attribute) -> String;

    attribute_methods! {
        black => BLACK,
        bg_black => BG_BLACK,
        bg_bright_black => BG_BRIGHT_BLACK,
        red => RED,
        bg_red => BG_RED,
        bg_bright_red => BG_BRIGHT_RED,
        green => GREEN,
        bg_green => BG_GREEN,
        bg_bright_green => BG_BRIGHT_GREEN,
        yellow => YELLOW,
        bg_yellow => BG_YELLOW,
        bg_bright_yellow => BG_BRIGHT_YELLOW,
        blue => BLUE,
        bg_blue => BG_BLUE,
        bg_bright_blue => BG_BRIGHT_BLUE,
        magenta => MAGENTA,
        bg_magenta => BG_MAGENTA,
        bg_bright_magenta => BG_BRIGHT_MAGENTA,
        cyan => CYAN,
        bg_cyan => BG_CYAN,
        bg_bright_cyan => BG_BRIGHT_CYAN,
        white => WHITE,
        bg_white => BG_WHITE,
        bg_bright_white => BG_BRIGHT_WHITE,
        /// The catalog's `default` foreground (named so it doesn't read like
        /// [`Default::default`]).
        default_color => DEFAULT,
        bg_default => BG_DEFAULT,
        bg_bright_default => BG_BRIGHT_DEFAULT,
        bright => BRIGHT,
        dim => DIM,
        italic => ITALIC,
        underline => UNDERLINE,
        inverse => INVERSE,
    }
}

impl AnsiColorExt for str {
    fn with_attribute(&self, attribute: &Attribute) -> String { attribute.apply(self) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_plain_wrap() {
        assert_eq!("foo".red(), "\x1b[31mfoo\x1b[39m");
        assert_eq!("foo".bg_bright_cyan(), "\x1b[106mfoo\x1b[49m");
        assert_eq!("foo".italic(), "\x1b[3mfoo\x1b[23m");
        assert_eq!("foo".inverse(), "\x1b[7mfoo\x1b[27m");
        assert_eq!("foo".bright(), "\x1b[22m\x1b[1mfoo\x1b[22m");
        assert_eq!("".underline(), "\x1b[4m\x1b[24m");
    }

    #[test_case("red", "bg_red")]
    #[test_case("bgBrightRed", "bg_bright_red")]
    fn test_apply_by_either_name(name: &str, snake_name: &str) {
        assert_eq!(apply("x", name).unwrap(), apply("x", snake_name).unwrap());
    }

    #[test]
    fn test_apply_unknown_name() {
        assert!(matches!(
            apply("x", "blink"),
            Err(AnsiColorError::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn test_rewrites_inner_close_of_same_category() {
        assert_eq!(
            ("foo".cyan() + "bar").red(),
            "\x1b[31m\x1b[36mfoo\x1b[31mbar\x1b[39m"
        );
        assert_eq!(
            ("foo".inverse() + "bar").inverse(),
            "\x1b[7m\x1b[7mfoo\x1b[7mbar\x1b[27m"
        );
    }

    #[test]
    fn test_other_categories_untouched() {
        let inner = "foo".red();
        let outer = inner.bg_green();
        assert_eq!(outer, format!("\x1b[42m{inner}\x1b[49m"));
    }

    #[test]
    fn test_same_attribute_twice() {
        assert_eq!("foo".red().red(), "\x1b[31m\x1b[31mfoo\x1b[31m\x1b[39m");
    }

    #[test]
    fn test_weight_open_prefix_is_not_rewritten() {
        assert_eq!(
            ("foo".bright() + "bar").dim(),
            "\x1b[22m\x1b[2m\x1b[22m\x1b[1mfoo\x1b[22m\x1b[2mbar\x1b[22m"
        );
    }

    #[test]
    fn test_multi_param_sequences_are_passed_through() {
        assert_eq!(
            "\x1b[0;39mfoo".red(),
            "\x1b[31m\x1b[0;39mfoo\x1b[39m"
        );
    }

    #[test]
    fn test_non_sgr_escapes_are_passed_through() {
        assert_eq!("a\x1b[2Jb".red(), "\x1b[31ma\x1b[2Jb\x1b[39m");
    }
}
