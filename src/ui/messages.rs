//! Coloured status lines shared by every command.

use ansi_term::Colour;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Full-width rule made of `sep`.
pub fn rule(sep: &str, width: usize) -> String {
    let c = sep.chars().next().unwrap_or('=');
    std::iter::repeat_n(c, width).collect()
}

/// Title centred between two rules.
pub fn header<T: fmt::Display>(title: T, sep: &str, width: usize) {
    let title = title.to_string();
    let indent = width.saturating_sub(title.chars().count()) / 2;
    println!();
    println!("{}", rule(sep, width));
    println!("{}{}", " ".repeat(indent), Colour::Blue.bold().paint(title));
    println!("{}", rule(sep, width));
}

pub fn footer(sep: &str, width: usize) {
    println!("{}", rule(sep, width));
    println!();
}
