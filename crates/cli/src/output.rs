//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;
use unicode_segmentation::UnicodeSegmentation;

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document on stdout
    Json,
}

impl OutputFormat {
    /// Whether JSON output was requested
    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.graphemes(true).count()));
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Format milliseconds for display
pub fn format_millis(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.0}µs", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{ms:.1}ms")
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

/// Shorten `text` to at most `max` grapheme clusters, ending with `…` when cut
pub fn truncate(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out: String = graphemes[..max - 1].concat();
    out.push('…');
    out
}

/// Pad `text` with spaces to `width` grapheme clusters
pub fn pad(text: &str, width: usize) -> String {
    let len = text.graphemes(true).count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// A colored dot for a `#rgb` / `#rrggbb` color, or a plain dot
pub fn swatch(color: Option<&str>) -> String {
    match color.and_then(parse_hex) {
        Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
        None => "○".dimmed().to_string(),
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut chars = hex.chars().map(|c| channel(&format!("{c}{c}")));
            Some((chars.next()??, chars.next()??, chars.next()??))
        }
        6 => Some((
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "sound", "sounds"), "1 sound");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "sound", "sounds"), "5 sounds");
        assert_eq!(format_count(0, "sound", "sounds"), "0 sounds");
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(0.25), "250µs");
        assert_eq!(format_millis(12.34), "12.3ms");
        assert_eq!(format_millis(2500.0), "2.50s");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Rain", 10), "Rain");
        assert_eq!(truncate("Gentle rainfall", 7), "Gentle…");
        assert_eq!(truncate("café au lait", 4), "caf…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("UI", 5), "UI   ");
        assert_eq!(pad("Nature", 3), "Nature");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#4a6cf7"), Some((0x4a, 0x6c, 0xf7)));
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex("teal"), None);
        assert_eq!(parse_hex("#12345"), None);
    }

    #[test]
    fn test_output_format() {
        assert!(OutputFormat::Json.is_json());
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
