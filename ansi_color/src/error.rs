// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors returned by catalog and palette lookups. Unknown names are always reported,
/// never replaced by a default color.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AnsiColorError {
    /// The name is not one of [`crate::names`].
    #[error("unknown attribute name `{name}`")]
    #[diagnostic(
        code(r3bl_ansicolor::unknown_attribute),
        help("Use one of the names returned by `r3bl_ansicolor::names()`, eg: `bgBrightRed`.")
    )]
    UnknownAttribute { name: String },

    /// The name is not one of the 8 colors or `default`.
    #[error("unknown color name `{name}`")]
    #[diagnostic(
        code(r3bl_ansicolor::unknown_color),
        help("Color names are lowercase, eg: `black`, `red`, ..., `white`, `default`.")
    )]
    UnknownColor { name: String },

    /// The color exists, but its palette table has no RGB value for it.
    #[error("no RGB value for color `{name}` (bright: {bright})")]
    #[diagnostic(
        code(r3bl_ansicolor::missing_rgb),
        help("`default` has no RGB value unless one is set with `set_color_rgb()`.")
    )]
    MissingRgb { name: String, bright: bool },

    /// The palette configuration could not be deserialized.
    #[error("invalid palette configuration")]
    #[diagnostic(code(r3bl_ansicolor::invalid_palette_config))]
    InvalidPaletteConfig(#[from] serde_json::Error),
}
