// File: crates/chartplot-core/src/color.rs
// Summary: Parsing of series color strings (hex, matplotlib shorthands, common names).

use skia_safe as skia;

/// matplotlib "tab10" palette, the default color cycle.
pub const TAB10: [(&str, u8, u8, u8); 10] = [
    ("blue", 0x1f, 0x77, 0xb4),
    ("orange", 0xff, 0x7f, 0x0e),
    ("green", 0x2c, 0xa0, 0x2c),
    ("red", 0xd6, 0x27, 0x28),
    ("purple", 0x94, 0x67, 0xbd),
    ("brown", 0x8c, 0x56, 0x4b),
    ("pink", 0xe3, 0x77, 0xc2),
    ("gray", 0x7f, 0x7f, 0x7f),
    ("olive", 0xbc, 0xbd, 0x22),
    ("cyan", 0x17, 0xbe, 0xcf),
];

const NAMED: &[(&str, u8, u8, u8)] = &[
    ("black", 0, 0, 0),
    ("white", 255, 255, 255),
    ("red", 255, 0, 0),
    ("green", 0, 128, 0),
    ("lime", 0, 255, 0),
    ("blue", 0, 0, 255),
    ("navy", 0, 0, 128),
    ("yellow", 255, 255, 0),
    ("cyan", 0, 255, 255),
    ("aqua", 0, 255, 255),
    ("magenta", 255, 0, 255),
    ("fuchsia", 255, 0, 255),
    ("orange", 255, 165, 0),
    ("purple", 128, 0, 128),
    ("violet", 238, 130, 238),
    ("pink", 255, 192, 203),
    ("brown", 165, 42, 42),
    ("maroon", 128, 0, 0),
    ("olive", 128, 128, 0),
    ("teal", 0, 128, 128),
    ("gold", 255, 215, 0),
    ("silver", 192, 192, 192),
    ("gray", 128, 128, 128),
    ("grey", 128, 128, 128),
    ("darkgray", 169, 169, 169),
    ("darkgrey", 169, 169, 169),
    ("lightgray", 211, 211, 211),
    ("lightgrey", 211, 211, 211),
    ("darkred", 139, 0, 0),
    ("darkgreen", 0, 100, 0),
    ("darkblue", 0, 0, 139),
    ("darkorange", 255, 140, 0),
    ("lightblue", 173, 216, 230),
    ("lightgreen", 144, 238, 144),
    ("skyblue", 135, 206, 235),
    ("steelblue", 70, 130, 180),
    ("indigo", 75, 0, 130),
    ("crimson", 220, 20, 60),
    ("coral", 255, 127, 80),
    ("salmon", 250, 128, 114),
    ("tomato", 255, 99, 71),
    ("turquoise", 64, 224, 208),
];

/// Parse a color string into an opaque (or explicitly translucent) Skia color.
/// Returns `None` for anything unrecognized.
pub fn parse_color(spec: &str) -> Option<skia::Color> {
    let s = spec.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    // matplotlib single-letter shorthands are case-sensitive.
    let short = match s {
        "b" => Some((0, 0, 255)),
        "g" => Some((0, 128, 0)),
        "r" => Some((255, 0, 0)),
        "c" => Some((0, 191, 191)),
        "m" => Some((191, 0, 191)),
        "y" => Some((191, 191, 0)),
        "k" => Some((0, 0, 0)),
        "w" => Some((255, 255, 255)),
        _ => None,
    };
    if let Some((r, g, b)) = short {
        return Some(skia::Color::from_rgb(r, g, b));
    }

    // matplotlib's cycle alias is case-sensitive: `C` followed by digits only
    if let Some(digits) = s.strip_prefix('C') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return digits.parse::<usize>().ok().map(cycle_color);
        }
    }
    let lower = s.to_ascii_lowercase();
    if let Some(name) = lower.strip_prefix("tab:") {
        return TAB10
            .iter()
            .find(|(n, ..)| *n == name)
            .map(|&(_, r, g, b)| skia::Color::from_rgb(r, g, b));
    }
    NAMED
        .iter()
        .find(|(n, ..)| *n == lower)
        .map(|&(_, r, g, b)| skia::Color::from_rgb(r, g, b))
}

/// Color `idx` of the default cycle, wrapping around.
pub fn cycle_color(idx: usize) -> skia::Color {
    let (_, r, g, b) = TAB10[idx % TAB10.len()];
    skia::Color::from_rgb(r, g, b)
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(skia::Color::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(c: skia::Color) -> (u8, u8, u8, u8) {
        (c.r(), c.g(), c.b(), c.a())
    }

    #[test]
    fn hex_forms() {
        assert_eq!(rgba(parse_color("#ff0000").unwrap()), (255, 0, 0, 255));
        assert_eq!(rgba(parse_color("#0F0").unwrap()), (0, 255, 0, 255));
        assert_eq!(rgba(parse_color("#1f77b480").unwrap()), (0x1f, 0x77, 0xb4, 0x80));
        assert!(parse_color("#12345").is_none());
        assert!(parse_color("#gg0000").is_none());
    }

    #[test]
    fn names_and_shorthands() {
        assert_eq!(rgba(parse_color("red").unwrap()), (255, 0, 0, 255));
        assert_eq!(rgba(parse_color(" Red ").unwrap()), (255, 0, 0, 255));
        assert_eq!(rgba(parse_color("k").unwrap()), (0, 0, 0, 255));
        assert_eq!(rgba(parse_color("tab:orange").unwrap()), (0xff, 0x7f, 0x0e, 255));
        assert_eq!(parse_color("C1"), Some(cycle_color(1)));
        assert!(parse_color("notacolor").is_none());
        assert!(parse_color("tab:chartreuse").is_none());
    }

    #[test]
    fn cycle_alias_is_case_sensitive_and_digits_only() {
        assert_eq!(parse_color("C0"), Some(cycle_color(0)));
        assert_eq!(parse_color("C12"), Some(cycle_color(2)));
        assert!(parse_color("c1").is_none());
        assert!(parse_color("C+1").is_none());
        assert!(parse_color("C").is_none());
        assert!(parse_color("C1a").is_none());
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(cycle_color(0), cycle_color(10));
    }
}
