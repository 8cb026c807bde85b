// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The resolved style at one point of a decorated string: one slot per [`Category`],
//! plus the CSS rendering of that style.
//!
//! [`Category`]: crate::Category

use std::fmt::Write as _;

use crate::{ColorName, ColorValue, Palette, RgbColor, SgrCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bright,
    Dim,
}

/// Italic and underline each have their own slot, but CSS rendering has room for only
/// one of them: whichever was applied last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Italic,
    Underline,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleState {
    pub color: Option<ColorValue>,
    pub bg_color: Option<ColorValue>,
    pub weight: Weight,
    pub italic: bool,
    pub underline: bool,
    pub inverse: bool,
    pub decoration: Option<Decoration>,
}

mod style_state_impl {
    use super::{ColorValue, Decoration, SgrCode, StyleState, Weight};
    use crate::ColorName;

    impl StyleState {
        /// Update the slots for one recognized SGR code.
        #[rustfmt::skip]
        pub fn apply(&mut self, code: SgrCode) {
            match code {
                SgrCode::Reset                            => *self = StyleState::default(),
                SgrCode::Bright                           => self.weight = Weight::Bright,
                SgrCode::Dim                              => self.weight = Weight::Dim,
                SgrCode::NormalWeight                     => self.weight = Weight::Normal,
                SgrCode::Italic                           => {
                    self.italic = true;
                    self.decoration = Some(Decoration::Italic);
                }
                SgrCode::NoItalic                         => {
                    self.italic = false;
                    self.decoration = self.underline.then_some(Decoration::Underline);
                }
                SgrCode::Underline                        => {
                    self.underline = true;
                    self.decoration = Some(Decoration::Underline);
                }
                SgrCode::NoUnderline                      => {
                    self.underline = false;
                    self.decoration = self.italic.then_some(Decoration::Italic);
                }
                SgrCode::Inverse                          => self.inverse = true,
                SgrCode::NoInverse                        => self.inverse = false,
                SgrCode::Foreground(ColorName::Default)   => self.color = None,
                SgrCode::Foreground(name)                 => self.color = Some(ColorValue::new(name, false)),
                SgrCode::ForegroundBright(name)           => self.color = Some(ColorValue::new(name, true)),
                SgrCode::Background(ColorName::Default)
                | SgrCode::BackgroundBright(ColorName::Default) => self.bg_color = None,
                SgrCode::Background(name)                 => self.bg_color = Some(ColorValue::new(name, false)),
                SgrCode::BackgroundBright(name)           => self.bg_color = Some(ColorValue::new(name, true)),
            }
        }

        /// The foreground color as it renders: a bright weight brightens it.
        #[must_use]
        pub fn effective_color(&self) -> Option<ColorValue> {
            self.color.map(|it| ColorValue {
                bright: it.bright || self.weight == Weight::Bright,
                ..it
            })
        }

        #[must_use]
        pub fn is_bold(&self) -> bool { self.weight == Weight::Bright }

        #[must_use]
        pub fn is_dim(&self) -> bool { self.weight == Weight::Dim }
    }
}

const FONT_WEIGHT_BOLD: &str = "font-weight: bold;";
const TEXT_DECORATION_ITALIC: &str = "text-decoration: italic;";
const TEXT_DECORATION_UNDERLINE: &str = "text-decoration: underline;";
const COLOR_PROPERTY: &str = "color:";
const BACKGROUND_PROPERTY: &str = "background:";
const DIM_ALPHA: &str = "0.5";
const OPAQUE_ALPHA: &str = "1";
/// Rendered for a dim span whose foreground has no RGB value.
const DIM_FALLBACK_COLOR: &str = "color:rgba(0,0,0,0.5);";

fn write_rgba(acc: &mut String, property: &str, rgb: RgbColor, alpha: &str) {
    let RgbColor { red, green, blue } = rgb;
    // Writing to a String can't fail.
    _ = write!(acc, "{property}rgba({red},{green},{blue},{alpha});");
}

/// Render `state` as CSS declarations, in this order: font weight, text decoration,
/// foreground color, background color. With inverse video the foreground color is
/// rendered as the background and vice versa (missing colors fall back to white text
/// on black).
#[must_use]
pub fn render_css(state: &StyleState, palette: &Palette) -> String {
    let mut acc = String::new();

    if state.is_bold() {
        acc.push_str(FONT_WEIGHT_BOLD);
    }

    match state.decoration {
        Some(Decoration::Italic) => acc.push_str(TEXT_DECORATION_ITALIC),
        Some(Decoration::Underline) => acc.push_str(TEXT_DECORATION_UNDERLINE),
        None => {}
    }

    let fg_alpha = if state.is_dim() { DIM_ALPHA } else { OPAQUE_ALPHA };
    let fg = state.effective_color();
    let bg = state.bg_color;

    if state.inverse {
        let fg = fg.unwrap_or(ColorValue::new(ColorName::White, state.is_bold()));
        let bg = bg.unwrap_or(ColorValue::new(ColorName::Black, false));
        if let Some(rgb) = palette.get(fg) {
            write_rgba(&mut acc, BACKGROUND_PROPERTY, rgb, fg_alpha);
        }
        if let Some(rgb) = palette.get(bg) {
            write_rgba(&mut acc, COLOR_PROPERTY, rgb, OPAQUE_ALPHA);
        }
    } else {
        match fg.and_then(|it| palette.get(it)) {
            Some(rgb) => write_rgba(&mut acc, COLOR_PROPERTY, rgb, fg_alpha),
            None if state.is_dim() => acc.push_str(DIM_FALLBACK_COLOR),
            None => {}
        }
        if let Some(rgb) = bg.and_then(|it| palette.get(it)) {
            write_rgba(&mut acc, BACKGROUND_PROPERTY, rgb, OPAQUE_ALPHA);
        }
    }

    acc
}
