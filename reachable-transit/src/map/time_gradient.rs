/// colors markers by travel time: green at the origin, red at the time limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGradient {
    limit_minutes: f64,
}

const HUE_AT_ZERO: f64 = 120.0;
const HUE_AT_LIMIT: f64 = 0.0;
const SATURATION: f64 = 0.8;
const LIGHTNESS: f64 = 0.45;

impl TimeGradient {
    pub fn new(limit_minutes: u32) -> TimeGradient {
        TimeGradient {
            limit_minutes: f64::from(limit_minutes.max(1)),
        }
    }

    /// hex color (`#rrggbb`) for a travel time in minutes. times past the
    /// limit are clamped to the limit color.
    pub fn color(&self, minutes: u32) -> String {
        let ratio = (f64::from(minutes) / self.limit_minutes).clamp(0.0, 1.0);
        let hue = HUE_AT_ZERO + (HUE_AT_LIMIT - HUE_AT_ZERO) * ratio;
        hsl_to_hex(hue, SATURATION, LIGHTNESS)
    }

    pub fn start_color(&self) -> String {
        hsl_to_hex(HUE_AT_ZERO, SATURATION, LIGHTNESS)
    }

    pub fn end_color(&self) -> String {
        hsl_to_hex(HUE_AT_LIMIT, SATURATION, LIGHTNESS)
    }
}

fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = (hue / 60.0).rem_euclid(6.0);
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::TimeGradient;

    fn rgb(hex: &str) -> (u8, u8, u8) {
        let v = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
        (v(1), v(3), v(5))
    }

    #[test]
    fn test_zero_minutes_is_green() {
        let (r, g, b) = rgb(&TimeGradient::new(30).color(0));
        assert!(g > r && g > b);
    }

    #[test]
    fn test_limit_is_red() {
        let (r, g, b) = rgb(&TimeGradient::new(30).color(30));
        assert!(r > g && r > b);
    }

    #[test]
    fn test_halfway_is_yellowish() {
        let (r, g, b) = rgb(&TimeGradient::new(30).color(15));
        assert!(r > b && g > b);
        assert!((i16::from(r) - i16::from(g)).abs() < 8);
    }

    #[test]
    fn test_past_limit_clamped() {
        let gradient = TimeGradient::new(30);
        assert_eq!(gradient.color(45), gradient.color(30));
        assert_eq!(gradient.color(30), gradient.end_color());
        assert_eq!(gradient.color(0), gradient.start_color());
    }

    #[test]
    fn test_hex_format() {
        let color = TimeGradient::new(30).color(12);
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
    }
}
