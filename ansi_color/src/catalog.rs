// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The fixed catalog of attributes that can be applied to text.
//!
//! Each [`Attribute`] belongs to exactly one [`Category`], and each category nests
//! independently of the others. The order of [`ATTRIBUTES`] is stable and is what
//! [`names()`] returns:
//!
//! ```text
//! black, bgBlack, bgBrightBlack, red, bgRed, bgBrightRed, ... white, bgWhite,
//! bgBrightWhite, default, bgDefault, bgBrightDefault, bright, dim, italic, underline,
//! inverse
//! ```

use smallvec::{SmallVec, smallvec};
use strum_macros::{EnumCount, EnumIter};

use crate::{AnsiColorError, ColorName, SgrCode, SgrString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum Category {
    Foreground,
    Background,
    /// Bright (bold) and dim share this category, so they never stack.
    Weight,
    Italic,
    Underline,
    Inverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Canonical name, eg: `bgBrightRed`.
    pub name: &'static str,
    /// Rust flavored alias, eg: `bg_bright_red`.
    pub snake_name: &'static str,
    pub category: Category,
    pub open: SgrCode,
    pub close: SgrCode,
}

pub const ATTRIBUTE_COUNT: usize = 32;

pub type OpenCodes = SmallVec<[SgrCode; 2]>;

mod attribute_impl {
    use super::{Attribute, Category, ColorName, OpenCodes, SgrCode, SgrString, smallvec};

    impl Attribute {
        pub(super) const fn fg(name: &'static str, color: ColorName) -> Self {
            Self {
                name,
                snake_name: name,
                category: Category::Foreground,
                open: SgrCode::Foreground(color),
                close: SgrCode::Foreground(ColorName::Default),
            }
        }

        pub(super) const fn bg(
            name: &'static str,
            snake_name: &'static str,
            color: ColorName,
        ) -> Self {
            Self {
                name,
                snake_name,
                category: Category::Background,
                open: SgrCode::Background(color),
                close: SgrCode::Background(ColorName::Default),
            }
        }

        pub(super) const fn bg_bright(
            name: &'static str,
            snake_name: &'static str,
            color: ColorName,
        ) -> Self {
            Self {
                name,
                snake_name,
                category: Category::Background,
                open: SgrCode::BackgroundBright(color),
                close: SgrCode::Background(ColorName::Default),
            }
        }

        pub(super) const fn style(
            name: &'static str,
            category: Category,
            open: SgrCode,
            close: SgrCode,
        ) -> Self {
            Self {
                name,
                snake_name: name,
                category,
                open,
                close,
            }
        }

        /// The codes written when this attribute opens. A weight opens with a
        /// normal-weight reset first, so that `bright` inside `dim` (or vice versa)
        /// replaces the weight instead of combining with it.
        #[must_use]
        pub fn open_codes(&self) -> OpenCodes {
            match self.category {
                Category::Weight => smallvec![SgrCode::NormalWeight, self.open],
                _ => smallvec![self.open],
            }
        }

        #[must_use]
        pub fn open_sequence(&self) -> SgrString {
            let mut acc = SgrString::new();
            for code in self.open_codes() {
                acc.push_str(&code.to_small_str());
            }
            acc
        }

        #[must_use]
        pub fn close_sequence(&self) -> SgrString { self.close.to_small_str() }

        /// Does `name` refer to this attribute, in either spelling?
        #[must_use]
        pub fn is_named(&self, name: &str) -> bool {
            self.name == name || self.snake_name == name
        }
    }
}

/// One constant per catalog entry, for use with [`Attribute::apply`].
pub mod attributes {
    use super::{Attribute, Category, ColorName, SgrCode};

    pub const BLACK: Attribute = Attribute::fg("black", ColorName::Black);
    pub const BG_BLACK: Attribute = Attribute::bg("bgBlack", "bg_black", ColorName::Black);
    pub const BG_BRIGHT_BLACK: Attribute =
        Attribute::bg_bright("bgBrightBlack", "bg_bright_black", ColorName::Black);

    pub const RED: Attribute = Attribute::fg("red", ColorName::Red);
    pub const BG_RED: Attribute = Attribute::bg("bgRed", "bg_red", ColorName::Red);
    pub const BG_BRIGHT_RED: Attribute =
        Attribute::bg_bright("bgBrightRed", "bg_bright_red", ColorName::Red);

    pub const GREEN: Attribute = Attribute::fg("green", ColorName::Green);
    pub const BG_GREEN: Attribute = Attribute::bg("bgGreen", "bg_green", ColorName::Green);
    pub const BG_BRIGHT_GREEN: Attribute =
        Attribute::bg_bright("bgBrightGreen", "bg_bright_green", ColorName::Green);

    pub const YELLOW: Attribute = Attribute::fg("yellow", ColorName::Yellow);
    pub const BG_YELLOW: Attribute =
        Attribute::bg("bgYellow", "bg_yellow", ColorName::Yellow);
    pub const BG_BRIGHT_YELLOW: Attribute =
        Attribute::bg_bright("bgBrightYellow", "bg_bright_yellow", ColorName::Yellow);

    pub const BLUE: Attribute = Attribute::fg("blue", ColorName::Blue);
    pub const BG_BLUE: Attribute = Attribute::bg("bgBlue", "bg_blue", ColorName::Blue);
    pub const BG_BRIGHT_BLUE: Attribute =
        Attribute::bg_bright("bgBrightBlue", "bg_bright_blue", ColorName::Blue);

    pub const MAGENTA: Attribute = Attribute::fg("magenta", ColorName::Magenta);
    pub const BG_MAGENTA: Attribute =
        Attribute::bg("bgMagenta", "bg_magenta", ColorName::Magenta);
    pub const BG_BRIGHT_MAGENTA: Attribute =
        Attribute::bg_bright("bgBrightMagenta", "bg_bright_magenta", ColorName::Magenta);

    pub const CYAN: Attribute = Attribute::fg("cyan", ColorName::Cyan);
    pub const BG_CYAN: Attribute = Attribute::bg("bgCyan", "bg_cyan", ColorName::Cyan);
    pub const BG_BRIGHT_CYAN: Attribute =
        Attribute::bg_bright("bgBrightCyan", "bg_bright_cyan", ColorName::Cyan);

    pub const WHITE: Attribute = Attribute::fg("white", ColorName::White);
    pub const BG_WHITE: Attribute = Attribute::bg("bgWhite", "bg_white", ColorName::White);
    pub const BG_BRIGHT_WHITE: Attribute =
        Attribute::bg_bright("bgBrightWhite", "bg_bright_white", ColorName::White);

    pub const DEFAULT: Attribute = Attribute::fg("default", ColorName::Default);
    pub const BG_DEFAULT: Attribute =
        Attribute::bg("bgDefault", "bg_default", ColorName::Default);
    pub const BG_BRIGHT_DEFAULT: Attribute =
        Attribute::bg_bright("bgBrightDefault", "bg_bright_default", ColorName::Default);

    pub const BRIGHT: Attribute = Attribute::style(
        "bright",
        Category::Weight,
        SgrCode::Bright,
        SgrCode::NormalWeight,
    );
    pub const DIM: Attribute =
        Attribute::style("dim", Category::Weight, SgrCode::Dim, SgrCode::NormalWeight);
    pub const ITALIC: Attribute = Attribute::style(
        "italic",
        Category::Italic,
        SgrCode::Italic,
        SgrCode::NoItalic,
    );
    pub const UNDERLINE: Attribute = Attribute::style(
        "underline",
        Category::Underline,
        SgrCode::Underline,
        SgrCode::NoUnderline,
    );
    pub const INVERSE: Attribute = Attribute::style(
        "inverse",
        Category::Inverse,
        SgrCode::Inverse,
        SgrCode::NoInverse,
    );
}

#[rustfmt::skip]
pub static ATTRIBUTES: [Attribute; ATTRIBUTE_COUNT] = {
    use attributes::*;
    [
        BLACK,   BG_BLACK,   BG_BRIGHT_BLACK,
        RED,     BG_RED,     BG_BRIGHT_RED,
        GREEN,   BG_GREEN,   BG_BRIGHT_GREEN,
        YELLOW,  BG_YELLOW,  BG_BRIGHT_YELLOW,
        BLUE,    BG_BLUE,    BG_BRIGHT_BLUE,
        MAGENTA, BG_MAGENTA, BG_BRIGHT_MAGENTA,
        CYAN,    BG_CYAN,    BG_BRIGHT_CYAN,
        WHITE,   BG_WHITE,   BG_BRIGHT_WHITE,
        DEFAULT, BG_DEFAULT, BG_BRIGHT_DEFAULT,
        BRIGHT, DIM, ITALIC, UNDERLINE, INVERSE,
    ]
};

/// All attribute names, in catalog order.
#[must_use]
pub fn names() -> [&'static str; ATTRIBUTE_COUNT] {
    std::array::from_fn(|index| ATTRIBUTES[index].name)
}

/// Look up an attribute by its canonical (`bgBrightRed`) or snake case
/// (`bg_bright_red`) name.
///
/// # Errors
///
/// Returns [`AnsiColorError::UnknownAttribute`] if no attribute has that name.
pub fn resolve(name: &str) -> Result<&'static Attribute, AnsiColorError> {
    ATTRIBUTES
        .iter()
        .find(|it| it.is_named(name))
        .ok_or_else(|| AnsiColorError::UnknownAttribute { name: name.into() })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_names_are_in_catalog_order() {
        let expected = [
            "black",
            "bgBlack",
            "bgBrightBlack",
            "red",
            "bgRed",
            "bgBrightRed",
            "green",
            "bgGreen",
            "bgBrightGreen",
            "yellow",
            "bgYellow",
            "bgBrightYellow",
            "blue",
            "bgBlue",
            "bgBrightBlue",
            "magenta",
            "bgMagenta",
            "bgBrightMagenta",
            "cyan",
            "bgCyan",
            "bgBrightCyan",
            "white",
            "bgWhite",
            "bgBrightWhite",
            "default",
            "bgDefault",
            "bgBrightDefault",
            "bright",
            "dim",
            "italic",
            "underline",
            "inverse",
        ];
        assert_eq!(names(), expected);
        assert_eq!(names(), names());
    }

    #[test]
    fn test_every_category_is_in_the_catalog() {
        assert_eq!(Category::COUNT, 6);
        for category in Category::iter() {
            assert!(
                ATTRIBUTES.iter().any(|it| it.category == category),
                "{category:?} has no attribute"
            );
        }
    }

    #[test_case("red", 31, 39)]
    #[test_case("bgCyan", 46, 49)]
    #[test_case("bg_cyan", 46, 49)]
    #[test_case("bgBrightRed", 101, 49)]
    #[test_case("bgBrightDefault", 109, 49)]
    #[test_case("default", 39, 39)]
    #[test_case("bright", 1, 22)]
    #[test_case("dim", 2, 22)]
    #[test_case("italic", 3, 23)]
    #[test_case("underline", 4, 24)]
    #[test_case("inverse", 7, 27)]
    fn test_resolve(name: &str, open: u16, close: u16) {
        let attribute = resolve(name).unwrap();
        assert_eq!(u16::from(attribute.open), open);
        assert_eq!(u16::from(attribute.close), close);
    }

    #[test]
    fn test_resolve_unknown_name() {
        let result = resolve("purple");
        assert!(matches!(
            result,
            Err(AnsiColorError::UnknownAttribute { ref name }) if name == "purple"
        ));
    }

    #[test]
    fn test_open_and_close_sequences() {
        assert_eq!(attributes::RED.open_sequence().as_str(), "\x1b[31m");
        assert_eq!(attributes::RED.close_sequence().as_str(), "\x1b[39m");
        assert_eq!(attributes::BRIGHT.open_sequence().as_str(), "\x1b[22m\x1b[1m");
        assert_eq!(attributes::DIM.open_sequence().as_str(), "\x1b[22m\x1b[2m");
        assert_eq!(attributes::DIM.close_sequence().as_str(), "\x1b[22m");
    }
}
