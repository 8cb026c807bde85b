/*
 *   Copyright (c) 2023-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::ColorName;

/// Reset all attributes.
pub const SGR_RESET: u16 = 0;
/// Bold (bright).
pub const SGR_BRIGHT: u16 = 1;
pub const SGR_DIM: u16 = 2;
pub const SGR_ITALIC: u16 = 3;
pub const SGR_UNDERLINE: u16 = 4;
pub const SGR_INVERSE: u16 = 7;
/// Normal weight, ie: neither bright nor dim.
pub const SGR_RESET_BRIGHT_DIM: u16 = 22;
pub const SGR_RESET_ITALIC: u16 = 23;
pub const SGR_RESET_UNDERLINE: u16 = 24;
pub const SGR_RESET_INVERSE: u16 = 27;

pub const SGR_FG_BASE: u16 = 30;
pub const SGR_FG_DEFAULT: u16 = 39;
pub const SGR_BG_BASE: u16 = 40;
pub const SGR_BG_DEFAULT: u16 = 49;
pub const SGR_FG_BRIGHT_BASE: u16 = 90;
pub const SGR_BG_BRIGHT_BASE: u16 = 100;

/// Extended colors: `38;5;n` / `48;5;n` (256 color palette) and `38;2;r;g;b` /
/// `48;2;r;g;b` (truecolor).
pub const SGR_FG_EXTENDED: u16 = 38;
pub const SGR_BG_EXTENDED: u16 = 48;
pub const SGR_EXTENDED_INDEXED: u16 = 5;
pub const SGR_EXTENDED_RGB: u16 = 2;

/// If `params` starts with an extended color, the number of parameters that belong to
/// it (clamped to what is there). The arguments after `38` or `48` are not codes of
/// their own, eg: the `2` in `38;2;r;g;b` is not dim.
#[must_use]
pub fn extended_color_len(params: &[u16]) -> Option<usize> {
    if !matches!(params.first(), Some(&(SGR_FG_EXTENDED | SGR_BG_EXTENDED))) {
        return None;
    }
    let len = match params.get(1) {
        Some(&SGR_EXTENDED_INDEXED) => 3,
        Some(&SGR_EXTENDED_RGB) => 5,
        _ => 1,
    };
    Some(len.min(params.len()))
}

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";
pub const ESC_BYTE: u8 = 0x1b;

/// Enough room for `ESC[22mESC[1m` without spilling to the heap.
pub const SGR_STRING_STORAGE_SIZE: usize = 16;
pub type SgrString = SmallString<[u8; SGR_STRING_STORAGE_SIZE]>;

/// A single SGR parameter that this crate understands.
///
/// Use [`SgrCode::from_param`] to interpret a raw numeric parameter, and
/// [`u16::from`] to go back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    Reset,
    Bright,
    Dim,
    Italic,
    Underline,
    Inverse,
    NormalWeight,
    NoItalic,
    NoUnderline,
    NoInverse,
    /// `39` is `Foreground(ColorName::Default)`.
    Foreground(ColorName),
    /// Only the 8 real colors have a bright foreground code.
    ForegroundBright(ColorName),
    /// `49` is `Background(ColorName::Default)`.
    Background(ColorName),
    BackgroundBright(ColorName),
}

pub mod sgr_code_impl {
    use super::{CSI, ColorName, Display, Formatter, Result, SGR, SGR_BG_BASE,
                SGR_BG_BRIGHT_BASE, SGR_BRIGHT, SGR_DIM, SGR_FG_BASE,
                SGR_FG_BRIGHT_BASE, SGR_INVERSE, SGR_ITALIC, SGR_RESET,
                SGR_RESET_BRIGHT_DIM, SGR_RESET_INVERSE, SGR_RESET_ITALIC,
                SGR_RESET_UNDERLINE, SGR_UNDERLINE, SgrCode, SgrString};

    impl SgrCode {
        /// Interpret one numeric SGR parameter. Returns [None] for parameters that are
        /// outside of the supported palette (eg: `38`, `53`, `99`).
        #[must_use]
        pub const fn from_param(param: u16) -> Option<SgrCode> {
            let it = match param {
                SGR_RESET => SgrCode::Reset,
                SGR_BRIGHT => SgrCode::Bright,
                SGR_DIM => SgrCode::Dim,
                SGR_ITALIC => SgrCode::Italic,
                SGR_UNDERLINE => SgrCode::Underline,
                SGR_INVERSE => SgrCode::Inverse,
                SGR_RESET_BRIGHT_DIM => SgrCode::NormalWeight,
                SGR_RESET_ITALIC => SgrCode::NoItalic,
                SGR_RESET_UNDERLINE => SgrCode::NoUnderline,
                SGR_RESET_INVERSE => SgrCode::NoInverse,
                30..=39 => match ColorName::from_sgr_offset(param - SGR_FG_BASE) {
                    Some(name) => SgrCode::Foreground(name),
                    None => return None,
                },
                40..=49 => match ColorName::from_sgr_offset(param - SGR_BG_BASE) {
                    Some(name) => SgrCode::Background(name),
                    None => return None,
                },
                90..=97 => match ColorName::from_sgr_offset(param - SGR_FG_BRIGHT_BASE) {
                    Some(name) => SgrCode::ForegroundBright(name),
                    None => return None,
                },
                100..=109 => {
                    match ColorName::from_sgr_offset(param - SGR_BG_BRIGHT_BASE) {
                        Some(name) => SgrCode::BackgroundBright(name),
                        None => return None,
                    }
                }
                _ => return None,
            };
            Some(it)
        }

        /// The escape sequence for this code, in an inline buffer (no heap allocation).
        #[must_use]
        pub fn to_small_str(&self) -> SgrString {
            use std::fmt::Write as _;
            let mut acc = SgrString::new();
            // Writing to an in-memory buffer can't fail.
            _ = write!(acc, "{self}");
            acc
        }
    }

    impl From<SgrCode> for u16 {
        #[rustfmt::skip]
        fn from(code: SgrCode) -> Self {
            match code {
                SgrCode::Reset                  => SGR_RESET,
                SgrCode::Bright                 => SGR_BRIGHT,
                SgrCode::Dim                    => SGR_DIM,
                SgrCode::Italic                 => SGR_ITALIC,
                SgrCode::Underline              => SGR_UNDERLINE,
                SgrCode::Inverse                => SGR_INVERSE,
                SgrCode::NormalWeight           => SGR_RESET_BRIGHT_DIM,
                SgrCode::NoItalic               => SGR_RESET_ITALIC,
                SgrCode::NoUnderline            => SGR_RESET_UNDERLINE,
                SgrCode::NoInverse              => SGR_RESET_INVERSE,
                SgrCode::Foreground(name)       => SGR_FG_BASE + name.sgr_offset(),
                SgrCode::ForegroundBright(name) => SGR_FG_BRIGHT_BASE + name.sgr_offset(),
                SgrCode::Background(name)       => SGR_BG_BASE + name.sgr_offset(),
                SgrCode::BackgroundBright(name) => SGR_BG_BRIGHT_BASE + name.sgr_offset(),
            }
        }
    }

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{CSI}{}{SGR}", u16::from(*self))
        }
    }
}
