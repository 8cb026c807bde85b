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

//! # `r3bl_ansicolor`
//!
//! Compose nestable ANSI SGR styles, and take styled text apart again.
//!
//! There are three things you can do with this crate:
//!
//! 1. **Compose**: wrap text in any of the 32 attributes of the [`ATTRIBUTES`] catalog
//!    (8 colors plus `default`, in foreground, background, and bright background
//!    flavors, and the `bright`, `dim`, `italic`, `underline`, and `inverse` styles).
//!    Attributes of the same [`Category`] nest properly: closing an inner one restores
//!    the outer one rather than the terminal default.
//! 2. **Parse**: split a styled string into [`Span`]s, each with the resolved style,
//!    its CSS rendering, and the last SGR code that was applied. The spans can be
//!    turned into arguments for a browser console call that uses `%c` directives.
//! 3. **Strip**: remove all the SGR sequences from a string.
//!
//! ```
//! use r3bl_ansicolor::{AnsiColorExt, parse, strip};
//!
//! let styled = ("foo".cyan() + "bar").red();
//! assert_eq!(styled, "\x1b[31m\x1b[36mfoo\x1b[31mbar\x1b[39m");
//!
//! assert_eq!(strip(&styled), "foobar");
//!
//! let parsed = parse(&styled);
//! assert_eq!(parsed.spans.len(), 2);
//! assert_eq!(parsed.spans[1].text, "bar");
//! assert_eq!(parsed.spans[1].css, "color:rgba(204,0,0,1);");
//! ```
//!
//! Attributes can also be applied by name with [`apply()`], which accepts both the
//! `bgBrightRed` and `bg_bright_red` spellings.
//!
//! # Palette
//!
//! The RGB values used for CSS come from a process wide [`global_palette`], which can
//! be changed one color at a time with [`set_color_rgb`], or all at once from JSON
//! with [`global_palette::load_json`].
//!
//! # Logging
//!
//! This crate emits [`tracing`] events (palette changes at `DEBUG`, skipped SGR codes at
//! `TRACE`). Install a subscriber in your binary to see them.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod ansi_escape_codes;
pub mod catalog;
pub mod color;
pub mod compose;
pub mod error;
pub mod palette;
pub mod parse;
pub mod scanner;
pub mod strip;
pub mod style;

// Re-export.
pub use ansi_escape_codes::*;
pub use catalog::*;
pub use color::*;
pub use compose::*;
pub use error::*;
pub use palette::*;
pub use parse::*;
pub use scanner::*;
pub use strip::*;
pub use style::*;
