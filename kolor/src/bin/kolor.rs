// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints every style, each one applied to its own name, grouped by registry. The
//! `kolor_bin` integration test drives this binary with `assert_cmd` to check the color
//! directive end to end, since stdout can't be captured in process.

use std::io::{Write, stdout};

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_kolor::{ColorConfig, ColorMode, Kolor, StyleMap, global_color_support, kolor};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "kolor")]
#[command(about = "🎨 Show every style kolor can paint with")]
#[command(version)]
#[command(next_line_help = true)]
pub struct CLIArg {
    #[arg(
        long,
        default_value_t = ColorMode::Auto,
        help = "When to emit escape sequences: always, auto, or never."
    )]
    pub color: ColorMode,

    #[arg(
        long,
        short = 'l',
        help = "Log the color support decision to stderr for debugging."
    )]
    pub enable_logging: bool,
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    if cli_arg.enable_logging {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let color_support = global_color_support::init(&ColorConfig::new(cli_arg.color));
    tracing::debug!(?color_support, color_mode = %cli_arg.color, "kolor starting");

    let kolor = kolor();
    let mut out = stdout().lock();
    print_all(&mut out, kolor, "Colors", kolor.colors())?;
    let safe_heading = kolor
        .unsafe_styles()
        .paint("italic", "Safe")
        .map(|it| format!("{it} modifiers"))?;
    print_all(&mut out, kolor, &safe_heading, kolor.modifiers().safe())?;
    print_all(
        &mut out,
        kolor,
        "Other modifiers (not all of them may work for every console)",
        kolor.modifiers().other(),
    )?;
    out.flush().into_diagnostic()?;

    Ok(())
}

fn print_all(
    out: &mut impl Write,
    kolor: &Kolor,
    heading: &str,
    style_map: &StyleMap,
) -> miette::Result<()> {
    let bold = kolor.try_get("bold")?;
    let underline = kolor.try_get("underline")?;
    writeln!(out, "{}", bold.paint(underline.paint(format!("{heading}:"))))
        .into_diagnostic()?;
    for (name, style_fn) in style_map {
        writeln!(out, " • {}", style_fn.paint(name)).into_diagnostic()?;
    }
    writeln!(out).into_diagnostic()?;
    Ok(())
}
