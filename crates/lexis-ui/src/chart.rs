use std::fmt::Write;

use lexis_types::ChartPayload;

const BAR: char = '█';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    fn paint(&self, text: &str) -> String {
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", self.0, self.1, self.2, text)
    }
}

/// Horizontal bar chart, one row per label. Bars scale to the largest value.
pub fn render_bar_chart(payload: &ChartPayload, width: usize, color: Option<Rgb>) -> String {
    let data = payload.data();
    let mut out = String::new();

    if payload.is_empty() {
        return out;
    }

    let label_width = payload
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let max = data.iter().copied().fold(0.0_f64, f64::max);

    for (label, value) in payload.labels.iter().zip(data) {
        let len = bar_len(*value, max, width);
        let bar: String = std::iter::repeat_n(BAR, len).collect();
        let bar = match color {
            Some(rgb) if len > 0 => rgb.paint(&bar),
            _ => bar,
        };
        let padding = label_width - label.chars().count();

        let _ = writeln!(
            out,
            "{}{} │{} {:.2}",
            label,
            " ".repeat(padding),
            bar,
            value
        );
    }

    out
}

fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if max.is_nan() || value.is_nan() || max <= 0.0 || value <= 0.0 {
        return 0;
    }

    let len = (value / max * width as f64).round() as usize;
    len.clamp(1, width.max(1))
}
