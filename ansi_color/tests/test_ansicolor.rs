// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end tests that go through the public API only: compose, parse, strip, and
//! palette changes.

use pretty_assertions::assert_eq;
use r3bl_ansicolor::{AnsiColorExt, ColorName, ColorValue, apply, global_palette, names,
                     parse, set_color_rgb, strip};
use serial_test::serial;

/// Make sequences readable in assertion failures.
fn dbg(it: &str) -> String { it.replace('\x1b', "ESC") }

fn same(actual: &str, expected: &str) { assert_eq!(dbg(actual), dbg(expected)); }

#[test]
fn test_compose_by_name() {
    let inner = apply("bar", "bgBrightCyan").unwrap() + "baz";
    let middle = apply(&inner, "inverse").unwrap() + "qux";
    let styled = "foo".to_string() + &apply(&middle, "green").unwrap();
    same(
        &styled,
        "foo\x1b[32m\x1b[7m\x1b[106mbar\x1b[49mbaz\x1b[27mqux\x1b[39m",
    );
}

#[test]
fn test_compose_fluent() {
    let styled = "foo".to_string()
        + &("bar".red().underline().bright() + "baz").green().underline()
        + "qux";
    same(
        &styled,
        "foo\x1b[4m\x1b[32m\x1b[22m\x1b[1m\x1b[4m\x1b[31mbar\x1b[32m\x1b[4m\x1b[22mbaz\x1b[39m\x1b[24mqux",
    );
}

#[test]
fn test_weight_hierarchy() {
    same(
        &("foo".to_string() + &"bar".dim() + "baz").bright(),
        "\x1b[22m\x1b[1mfoo\x1b[22m\x1b[2mbar\x1b[22m\x1b[1mbaz\x1b[22m",
    );
}

#[test]
fn test_same_category_hierarchy() {
    same(
        &(("red".red() + "green").green() + "blue").blue(),
        "\x1b[34m\x1b[32m\x1b[31mred\x1b[32mgreen\x1b[34mblue\x1b[39m",
    );
    same(
        &("foo".cyan() + "bar").red(),
        "\x1b[31m\x1b[36mfoo\x1b[31mbar\x1b[39m",
    );
    same(
        &("foo".bg_cyan() + "bar").bg_red(),
        "\x1b[41m\x1b[46mfoo\x1b[41mbar\x1b[49m",
    );
    same(
        &("foo".bg_bright_cyan() + "bar").bg_bright_red(),
        "\x1b[101m\x1b[106mfoo\x1b[101mbar\x1b[49m",
    );
    same(
        &("foo".underline() + "bar").underline(),
        "\x1b[4m\x1b[4mfoo\x1b[4mbar\x1b[24m",
    );
    same(
        &("foo".bright() + "bar").bright(),
        "\x1b[22m\x1b[1m\x1b[22m\x1b[1mfoo\x1b[22m\x1b[1mbar\x1b[22m",
    );
    same(
        &("foo".dim() + "bar").dim(),
        "\x1b[22m\x1b[2m\x1b[22m\x1b[2mfoo\x1b[22m\x1b[2mbar\x1b[22m",
    );
    same(
        &("foo".inverse() + "bar").inverse(),
        "\x1b[7m\x1b[7mfoo\x1b[7mbar\x1b[27m",
    );
}

#[test]
fn test_closes_at_every_depth_are_rewritten() {
    let styled = ((("a".italic() + "b").italic() + "c").italic() + "d").italic();
    same(
        &styled,
        "\x1b[3m\x1b[3m\x1b[3m\x1b[3ma\x1b[3mb\x1b[3mc\x1b[3md\x1b[23m",
    );
    // Once wrapped, no italic close is left inside; only the outermost one remains.
    assert_eq!(styled.matches("\x1b[23m").count(), 1);
}

#[test]
#[serial]
fn test_nesting_restores_outer_style() {
    global_palette::reset();
    let parsed = parse(&("foo".cyan() + "bar").red());
    let colors = parsed.iter().map(|it| it.color).collect::<Vec<_>>();
    assert_eq!(
        colors,
        vec![
            Some(ColorValue::new(ColorName::Cyan, false)),
            Some(ColorValue::new(ColorName::Red, false)),
        ]
    );
}

#[test]
#[serial]
fn test_nesting_restores_each_enclosing_color() {
    global_palette::reset();
    let parsed = parse(&(("red".red() + "green").green() + "blue").blue());
    let spans = parsed
        .iter()
        .map(|it| (it.text.as_str(), it.color))
        .collect::<Vec<_>>();
    assert_eq!(
        spans,
        vec![
            ("red", Some(ColorValue::new(ColorName::Red, false))),
            ("green", Some(ColorValue::new(ColorName::Green, false))),
            ("blue", Some(ColorValue::new(ColorName::Blue, false))),
        ]
    );
    assert_eq!(parsed.spans[2].css, "color:rgba(0,0,255,1);");
}

#[test]
#[serial]
fn test_deep_nesting_closes_once() {
    global_palette::reset();
    let styled = ((("a".italic() + "b").italic() + "c").italic() + "d").italic() + "e";
    let parsed = parse(&styled);
    let spans = parsed
        .iter()
        .map(|it| (it.text.as_str(), it.italic))
        .collect::<Vec<_>>();
    // Every inner close was rewritten to an open, so the italic run is never broken,
    // and the outermost close ends it before `e`.
    assert_eq!(spans, vec![("abcd", true), ("e", false)]);
    assert_eq!(parsed.spans[0].css, "text-decoration: italic;");
    assert_eq!(parsed.spans[1].css, "");
    assert_eq!(parsed.spans[1].code, Some(23));
}

#[test]
#[serial]
fn test_categories_are_independent() {
    global_palette::reset();
    let styled = ("foo".red() + "bar").bg_blue().underline();
    let parsed = parse(&styled);
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed.spans[0].color, Some(ColorValue::new(ColorName::Red, false)));
    assert_eq!(parsed.spans[1].color, None);
    for span in &parsed {
        assert_eq!(span.bg_color, Some(ColorValue::new(ColorName::Blue, false)));
        assert!(span.underline);
    }
}

#[test]
#[serial]
fn test_parse_spans() {
    global_palette::reset();
    let parsed = parse(&("foo".bg_bright_red().bright().italic() + &"bar".red().dim()));

    assert_eq!(parsed.iter().cloned().collect::<Vec<_>>(), parsed.spans);
    assert_eq!(parsed.len(), 2);

    let foo = &parsed.spans[0];
    assert_eq!(foo.text, "foo");
    assert_eq!(
        foo.css,
        "font-weight: bold;text-decoration: italic;background:rgba(255,51,0,1);"
    );
    assert!(foo.bold && foo.italic);
    assert!(!foo.dim && !foo.underline && !foo.inverse);
    assert_eq!(foo.color, None);
    assert_eq!(foo.bg_color, Some(ColorValue::new(ColorName::Red, true)));
    assert_eq!(foo.code, Some(101));

    let bar = &parsed.spans[1];
    assert_eq!(bar.text, "bar");
    assert_eq!(bar.css, "color:rgba(204,0,0,0.5);");
    assert!(bar.dim);
    assert!(!bar.bold && !bar.italic);
    assert_eq!(bar.color, Some(ColorValue::new(ColorName::Red, false)));
    assert_eq!(bar.bg_color, None);
    assert_eq!(bar.code, Some(31));
}

#[test]
#[serial]
fn test_browser_console_arguments() {
    global_palette::reset();
    let styled =
        "foo".to_string() + &("bar".red().underline().bright().inverse() + "baz").bg_green();
    let parsed = parse(&styled);

    assert_eq!(
        parsed.as_web_inspector_console_log_arguments(),
        parsed.browser_console_arguments()
    );
    assert_eq!(
        parsed.browser_console_arguments(),
        vec![
            "%cfoo%cbar%cbaz",
            "",
            "font-weight: bold;text-decoration: underline;background:rgba(255,51,0,1);color:rgba(0,204,0,1);",
            "background:rgba(0,204,0,1);",
        ]
    );
}

#[test]
fn test_strip() {
    assert_eq!(
        strip(
            "\x1b[0m\x1b[4m\x1b[42m\x1b[31mfoo\x1b[39m\x1b[49m\x1b[24mfoo\x1b[0m"
        ),
        "foofoo"
    );
    assert_eq!(strip("\x1b[0;33;49;3;9;4mbar\x1b[0m"), "bar");
}

#[test]
#[serial]
fn test_parse_and_strip_agree() {
    global_palette::reset();
    let inputs = [
        "plain",
        "\x1b[1;31mbold red\x1b[0m and \x1b[7minverse",
        "lone \x1b escape \x1b[ and \x1b[2J clear",
        "\x1b[999mout of range\x1b[38;2;1;2;3mtruecolor",
    ];
    for input in inputs {
        assert_eq!(parse(input).plain_text(), strip(input), "input: {input:?}");
    }
}

#[test]
fn test_names() {
    assert_eq!(
        names(),
        [
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
        ]
    );
}

#[test]
#[serial]
fn test_palette_changes_affect_css() {
    global_palette::reset();
    set_color_rgb("red", false, [255, 0, 0]).unwrap();
    set_color_rgb("red", true, [255, 127, 0]).unwrap();

    let parsed = parse(&"foo".red().bg_bright_red());
    assert_eq!(
        parsed.spans[0].css,
        "color:rgba(255,0,0,1);background:rgba(255,127,0,1);"
    );

    global_palette::reset();
}
