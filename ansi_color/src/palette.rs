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

use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::EnumCount;

use crate::{AnsiColorError, ColorName, ColorValue, RgbColor};

/// One RGB table, indexed by [`ColorName::table_index`].
pub type RgbTable = [Option<RgbColor>; ColorName::COUNT];

/// The two RGB tables used to render colors as CSS: one for the normal variant of each
/// color and one for the bright variant. `default` has no RGB value in either table
/// unless the caller sets one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub normal: RgbTable,
    pub bright: RgbTable,
}

mod palette_impl {
    use super::{ColorName, ColorValue, Palette, PaletteConfig, RgbColor, RgbTable};

    #[rustfmt::skip]
    const DEFAULT_NORMAL: RgbTable = [
        Some(RgbColor::new(0,   0,   0)),   // black
        Some(RgbColor::new(204, 0,   0)),   // red
        Some(RgbColor::new(0,   204, 0)),   // green
        Some(RgbColor::new(204, 102, 0)),   // yellow
        Some(RgbColor::new(0,   0,   255)), // blue
        Some(RgbColor::new(204, 0,   204)), // magenta
        Some(RgbColor::new(0,   153, 255)), // cyan
        Some(RgbColor::new(255, 255, 255)), // white
        None,                               // default
    ];

    #[rustfmt::skip]
    const DEFAULT_BRIGHT: RgbTable = [
        Some(RgbColor::new(0,   0,   0)),   // black
        Some(RgbColor::new(255, 51,  0)),   // red
        Some(RgbColor::new(51,  204, 51)),  // green
        Some(RgbColor::new(255, 153, 51)),  // yellow
        Some(RgbColor::new(26,  140, 255)), // blue
        Some(RgbColor::new(255, 0,   255)), // magenta
        Some(RgbColor::new(0,   204, 255)), // cyan
        Some(RgbColor::new(255, 255, 255)), // white
        None,                               // default
    ];

    impl Default for Palette {
        fn default() -> Self {
            Self {
                normal: DEFAULT_NORMAL,
                bright: DEFAULT_BRIGHT,
            }
        }
    }

    impl Palette {
        #[must_use]
        pub fn table(&self, bright: bool) -> &RgbTable {
            if bright { &self.bright } else { &self.normal }
        }

        pub fn table_mut(&mut self, bright: bool) -> &mut RgbTable {
            if bright { &mut self.bright } else { &mut self.normal }
        }

        #[must_use]
        pub fn get(&self, color: ColorValue) -> Option<RgbColor> {
            self.table(color.bright)[color.name.table_index()]
        }

        pub fn set(&mut self, name: ColorName, bright: bool, rgb: RgbColor) {
            self.table_mut(bright)[name.table_index()] = Some(rgb);
        }

        /// Overlay the entries of `config` on top of `self`.
        pub fn apply_config(&mut self, config: &PaletteConfig) {
            for (name, rgb) in &config.normal {
                self.set(*name, false, *rgb);
            }
            for (name, rgb) in &config.bright {
                self.set(*name, true, *rgb);
            }
        }
    }
}

/// Serializable form of a [`Palette`], eg:
///
/// ```json
/// { "normal": { "red": [255, 0, 0] }, "bright": { "red": [255, 127, 0] } }
/// ```
///
/// Missing tables and missing colors are allowed; they keep their default value when
/// loaded with [`global_palette::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default)]
    pub normal: BTreeMap<ColorName, RgbColor>,
    #[serde(default)]
    pub bright: BTreeMap<ColorName, RgbColor>,
}

impl From<&Palette> for PaletteConfig {
    fn from(palette: &Palette) -> Self {
        use strum::IntoEnumIterator;
        let collect = |bright: bool| {
            ColorName::iter()
                .filter_map(|name| {
                    palette
                        .get(ColorValue::new(name, bright))
                        .map(|rgb| (name, rgb))
                })
                .collect::<BTreeMap<_, _>>()
        };
        Self {
            normal: collect(false),
            bright: collect(true),
        }
    }
}

/// The process wide palette which is read every time a span's CSS is rendered.
///
/// It is lazily initialized with [`Palette::default`] and can be changed at any time.
/// Nothing caches values read from it, so a change is visible to the very next
/// [`crate::parse()`] call.
///
/// # Testing support
///
/// The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
/// module. In any test which mutates the palette, please use the `#[serial]` attribute
/// to annotate that test. Otherwise there will be flakiness in the test results (tests
/// are run in parallel using many threads).
pub mod global_palette {
    use std::sync::{LazyLock, PoisonError, RwLock};

    use super::{ColorName, ColorValue, Palette, PaletteConfig, RgbColor};
    use crate::AnsiColorError;

    static PALETTE_GLOBAL: LazyLock<RwLock<Palette>> =
        LazyLock::new(|| RwLock::new(Palette::default()));

    /// A copy of the current tables. The lock holds plain data, so a poisoned lock is
    /// still safe to read.
    #[must_use]
    pub fn snapshot() -> Palette {
        *PALETTE_GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get(color: ColorValue) -> Option<RgbColor> { snapshot().get(color) }

    pub fn set(name: ColorName, bright: bool, rgb: impl Into<RgbColor>) {
        let rgb = rgb.into();
        tracing::debug!(?name, bright, ?rgb, "palette: set color");
        PALETTE_GLOBAL
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(name, bright, rgb);
    }

    /// Restore the default tables.
    pub fn reset() {
        tracing::debug!("palette: reset to defaults");
        *PALETTE_GLOBAL.write().unwrap_or_else(PoisonError::into_inner) =
            Palette::default();
    }

    /// Replace the tables with the defaults overlaid by `config`.
    pub fn load(config: &PaletteConfig) {
        tracing::debug!(?config, "palette: load");
        let mut palette = Palette::default();
        palette.apply_config(config);
        *PALETTE_GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = palette;
    }

    /// Same as [`load`], from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiColorError::InvalidPaletteConfig`] if `json` isn't a valid
    /// [`PaletteConfig`]. The palette is left unchanged in that case.
    pub fn load_json(json: &str) -> Result<(), AnsiColorError> {
        let config: PaletteConfig = serde_json::from_str(json)?;
        load(&config);
        Ok(())
    }
}

fn parse_color_name(name: &str) -> Result<ColorName, AnsiColorError> {
    ColorName::from_str(name).map_err(|_| AnsiColorError::UnknownColor { name: name.into() })
}

/// Look up the current RGB value of a color by name.
///
/// # Errors
///
/// - [`AnsiColorError::UnknownColor`] if `name` isn't a color name.
/// - [`AnsiColorError::MissingRgb`] if the table has no value for it (eg: `default`).
pub fn color_rgb(name: &str, bright: bool) -> Result<RgbColor, AnsiColorError> {
    let color_name = parse_color_name(name)?;
    global_palette::get(ColorValue::new(color_name, bright)).ok_or_else(|| {
        AnsiColorError::MissingRgb {
            name: name.into(),
            bright,
        }
    })
}

/// Override the RGB value of a color by name. Affects every subsequent parse.
///
/// # Errors
///
/// Returns [`AnsiColorError::UnknownColor`] if `name` isn't a color name.
pub fn set_color_rgb(
    name: &str,
    bright: bool,
    rgb: impl Into<RgbColor>,
) -> Result<(), AnsiColorError> {
    let color_name = parse_color_name(name)?;
    global_palette::set(color_name, bright, rgb);
    Ok(())
}
