// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::SgrEraser;

/// Remove every well formed SGR sequence from `input`, and leave everything else
/// (including look-alikes such as `ESC[2J` or a lone `ESC`) exactly as it is.
///
/// Text that only becomes a sequence once another sequence inside of it is removed (eg:
/// `"\x1b\x1b[31m[31m"`) is removed as well, so stripping twice is the same as
/// stripping once. The output is the same as the text of all the spans of
/// [`crate::parse()`] joined together.
#[must_use]
pub fn strip(input: &str) -> String {
    let mut eraser = SgrEraser::default();
    for ch in input.chars() {
        eraser.feed(ch);
    }
    eraser.into_text()
}
