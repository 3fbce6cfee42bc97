// src/show.rs
//! Renders the resolved session in the terminal

use crate::{
    args::Args,
    config::ColorConfig,
    queue::Queue,
};

#[derive(Debug)]
pub struct Theme {
    /// headings and track numbers
    pub head: String,
    /// separators
    pub sep: String,
    /// track names and option values
    pub text: String,
}

impl From<&ColorConfig> for Theme {
    fn from(cfg: &ColorConfig) -> Self {
        Self {
            head: fg_hex(&cfg.primary),
            sep: fg_hex(&cfg.secondary),
            text: fg_hex(&cfg.tertiary),
        }
    }
}

fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        },
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        },
        _ => None,
    }
}

fn fg_hex(hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m"),
        None => String::new(),
    }
}

/// One line per queue entry, then the non-default options.
pub fn render(args: &Args, queue: &Queue, theme: &Theme) -> String {
    let b = "\x1b[1m";
    let r = "\x1b[0m";

    let mut out = format!(
        "{b}{h}PLAYQ {ver}{r}\n\n",
        h = theme.head,
        ver = env!("CARGO_PKG_VERSION"),
    );

    for (n, target) in queue.entries().iter().enumerate() {
        out.push_str(&format!(
            "{b}{h}{n:02} {s}::: {t}{target}{r}\n",
            n = n + 1,
            h = theme.head,
            s = theme.sep,
            t = theme.text,
        ));
    }

    if queue.is_empty() {
        out.push_str(&format!(
            "{b}{h}-- {s}::: {t}nothing to play{r}\n",
            h = theme.head,
            s = theme.sep,
            t = theme.text,
        ));
    }

    let options = format_options(args);
    if !options.is_empty() {
        out.push_str(&format!("\n{b}{s}{options}{r}\n", s = theme.sep));
    }

    out
}

fn format_options(args: &Args) -> String {
    let mut parts = Vec::new();

    if args.volume != 0.0 {
        parts.push(format!("vol {}", args.volume));
    }
    if args.dbl_time != 0.0 {
        parts.push(format!("poll {}s", args.dbl_time));
    }

    let markers = [
        (args.recursive, "recursive"),
        (args.shuffle, "shuffle"),
        (args.only_one, "once"),
        (args.looping, "loop"),
    ];
    for (set, name) in markers {
        if set {
            parts.push(name.to_string());
        }
    }

    parts.join(", ")
}
