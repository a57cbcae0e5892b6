use ratatui::style::{Color, Style};

pub const BACKGROUND: Color = Color::Rgb(0x0a, 0x0a, 0x0a);
pub const PRIMARY: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const CARD_BORDER: Color = Color::Rgb(0x52, 0x52, 0x52);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
pub const PLACEHOLDER: Color = Color::Rgb(0x73, 0x73, 0x73);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_INFO: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Blend `color` toward the background. `opacity` 1.0 keeps the color,
/// 0.0 yields [`BACKGROUND`]. Non-RGB colors snap at half opacity.
pub fn fade(color: Color, opacity: f32) -> Color {
    let opacity = if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    };
    match (color, BACKGROUND) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
            mix(br, r, opacity),
            mix(bg, g, opacity),
            mix(bb, b, opacity),
        ),
        _ if opacity >= 0.5 => color,
        _ => BACKGROUND,
    }
}

/// Foreground style at the given opacity.
pub fn faded_fg(color: Color, opacity: f32) -> Style {
    Style::default().fg(fade(color, opacity))
}

fn mix(from: u8, to: u8, t: f32) -> u8 {
    let value = from as f32 + (to as f32 - from as f32) * t;
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_opacity_keeps_color() {
        assert_eq!(fade(STATUS_OK, 1.0), STATUS_OK);
    }

    #[test]
    fn zero_opacity_is_background() {
        assert_eq!(fade(PRIMARY, 0.0), BACKGROUND);
        assert_eq!(fade(PRIMARY, f32::NAN), BACKGROUND);
    }

    #[test]
    fn half_opacity_is_midpoint() {
        assert_eq!(
            fade(Color::Rgb(0xff, 0xff, 0xff), 0.5),
            Color::Rgb(0x85, 0x85, 0x85)
        );
    }

    #[test]
    fn named_colors_snap() {
        assert_eq!(fade(Color::Red, 0.4), BACKGROUND);
        assert_eq!(fade(Color::Red, 0.6), Color::Red);
    }
}
