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
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The named colors of the 8 color ANSI palette, plus the terminal's `default` color.
///
/// The discriminant is the offset added to the SGR base code of a color category, eg:
/// `30 + offset` for a foreground color, `100 + offset` for a bright background color.
/// Note that there is no color at offset `8` (that slot is used by the extended color
/// sequences, which are not supported here).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    Default = 9,
}

mod color_name_impl {
    use super::ColorName;

    impl ColorName {
        /// Offset of this color relative to the SGR base code of its category.
        #[must_use]
        pub const fn sgr_offset(self) -> u16 { self as u16 }

        /// Inverse of [`Self::sgr_offset`].
        #[must_use]
        pub const fn from_sgr_offset(offset: u16) -> Option<Self> {
            match offset {
                0 => Some(ColorName::Black),
                1 => Some(ColorName::Red),
                2 => Some(ColorName::Green),
                3 => Some(ColorName::Yellow),
                4 => Some(ColorName::Blue),
                5 => Some(ColorName::Magenta),
                6 => Some(ColorName::Cyan),
                7 => Some(ColorName::White),
                9 => Some(ColorName::Default),
                _ => None,
            }
        }

        /// Dense index into tables that are sized by [`strum::EnumCount`].
        #[must_use]
        pub const fn table_index(self) -> usize {
            match self {
                ColorName::Default => 8,
                other => other as usize,
            }
        }

        #[must_use]
        pub fn as_str(self) -> &'static str { self.into() }
    }
}

/// A named color, along with whether it is rendered using its "bright" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorValue {
    pub name: ColorName,
    pub bright: bool,
}

impl ColorValue {
    #[must_use]
    pub const fn new(name: ColorName, bright: bool) -> Self { Self { name, bright } }
}

/// Serialized as a `[red, green, blue]` triple, eg: `[204, 0, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u8, u8, u8)", into = "(u8, u8, u8)")]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

mod rgb_color_impl {
    use super::RgbColor;

    impl RgbColor {
        #[must_use]
        pub const fn new(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }
    }

    impl From<(u8, u8, u8)> for RgbColor {
        fn from((red, green, blue): (u8, u8, u8)) -> Self { Self { red, green, blue } }
    }

    impl From<[u8; 3]> for RgbColor {
        fn from([red, green, blue]: [u8; 3]) -> Self { Self { red, green, blue } }
    }

    impl From<RgbColor> for (u8, u8, u8) {
        fn from(it: RgbColor) -> Self { (it.red, it.green, it.blue) }
    }
}
