//! Shared conversion helpers for colors and coordinates.

use glam::Vec3;

/// Parse a "#rrggbb" hex color. Malformed input falls back to light gray.
pub fn parse_hex_color(hex: &str) -> egui::Color32 {
    let s = hex.trim_start_matches('#');
    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return egui::Color32::from_rgb(r, g, b);
        }
    }
    egui::Color32::LIGHT_GRAY
}

/// Format a color back to "#rrggbb"
pub fn color_to_hex(color: egui::Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Scene coordinates (f64) to a viewport vector (f32)
pub fn to_vec3(v: [f64; 3]) -> Vec3 {
    Vec3::new(v[0] as f32, v[1] as f32, v[2] as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let c = parse_hex_color("#3b82f6");
        assert_eq!(c, egui::Color32::from_rgb(0x3b, 0x82, 0xf6));
        assert_eq!(color_to_hex(c), "#3b82f6");
    }

    #[test]
    fn test_malformed_hex_falls_back() {
        assert_eq!(parse_hex_color("red"), egui::Color32::LIGHT_GRAY);
        assert_eq!(parse_hex_color("#12"), egui::Color32::LIGHT_GRAY);
        assert_eq!(parse_hex_color("#zzzzzz"), egui::Color32::LIGHT_GRAY);
    }

    #[test]
    fn test_to_vec3() {
        assert_eq!(to_vec3([1.0, -2.5, 0.0]), Vec3::new(1.0, -2.5, 0.0));
    }
}
