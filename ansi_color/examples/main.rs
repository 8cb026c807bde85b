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

use r3bl_ansicolor::{ATTRIBUTES, AnsiColorExt, AnsiColorError, apply, global_palette,
                     parse, set_color_rgb, strip};

fn main() -> miette::Result<()> {
    // Show palette changes and skipped codes.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    // Every attribute in the catalog.
    {
        for attribute in &ATTRIBUTES {
            print!("{} ", attribute.apply(attribute.name));
        }
        println!();
    }

    // Nesting in the same category.
    {
        let nested = ("cyan ".cyan() + "back to red").red() + " back to default";
        println!("{nested}");
        println!("{nested:?}");

        let weights = ("bright ".bright() + &"dim ".dim() + "outer").bright();
        println!("{weights}");
    }

    // Apply by name, and the error for an unknown name.
    {
        println!("{}", apply("by name", "bgBrightMagenta")?);
        let error: AnsiColorError = apply("x", "blink").unwrap_err();
        println!("{:?}", miette::Report::new(error));
    }

    // Parse into spans, and strip.
    {
        let styled = ("foo".red().underline() + &"bar".bright().bg_blue()).italic()
            + "\x1b[38;5;1mtail";
        let parsed = parse(&styled);
        for span in &parsed {
            println!("{:?} css={:?} code={:?}", span.text, span.css, span.code);
        }
        println!("{:?}", parsed.browser_console_arguments());
        println!("{:?}", strip(&styled));
    }

    // Change the palette.
    {
        global_palette::load_json(r#"{ "bright": { "red": [255, 127, 0] } }"#)?;
        set_color_rgb("red", false, (255, 0, 0))?;
        let parsed = parse(&"foo".red().bg_bright_red());
        println!("{}", parsed.spans[0].css);
        global_palette::reset();
    }

    Ok(())
}
