//! Startup banner: "POST-CARE" in FIGlet letters with a red-to-pink gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Heart red (#e63946).
const HEART_RED: (u8, u8, u8) = (0xe6, 0x39, 0x46);
/// Soft pink (#ff8fab).
const SOFT_PINK: (u8, u8, u8) = (0xff, 0x8f, 0xab);

const TITLE: &str = "POST-CARE";

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Render the title with the built-in FIGlet font, or plain text if that fails.
fn title_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string())
}

/// Prints the welcome banner, then version and a short disclaimer.
pub fn print_welcome() {
    let mut out = stdout();
    let art = title_art();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(HEART_RED, SOFT_PINK, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: SOFT_PINK.0,
        g: SOFT_PINK.1,
        b: SOFT_PINK.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print(
        "Rule-based triage support. Not a substitute for clinical judgement.\r\n",
    ));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
