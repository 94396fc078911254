//! Color-string parsing and shade blending, used to derive palette
//! variants (hover/highlight shades) from base theme colors.

use thiserror::Error;

/// Errors produced while parsing or blending color strings.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    #[error("A blend percentage needs to be between -1 and 1.")]
    PercentageOutOfRange,
    #[error("A color needs to start with either 'r' or '#'.")]
    UnknownFormat,
    #[error("An rgb() color needs 3 or 4 comma-separated channels.")]
    InvalidChannelCount,
    #[error("A hex color needs 3, 4, 6 or 8 digits after the '#'.")]
    InvalidHexLength,
    #[error("A color channel could not be read as a number.")]
    InvalidChannel,
}

/// A color split into integer RGB channels plus an optional alpha
/// fraction.
///
/// `alpha` is `None` when the source string carried no alpha channel,
/// otherwise a 0 to 1 fraction rounded to four decimals. Channels are
/// not clamped; blending is only defined for in-range inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: i64,
    pub g: i64,
    pub b: i64,
    pub alpha: Option<f64>,
}

/// Parses an `rgb()`/`rgba()` literal or a `#`-hex color of 3, 4, 6 or
/// 8 digits into its channels.
///
/// Shorthand hex (`#abc`, `#abcd`) expands by duplicating each digit.
/// Raw 6- or 8-character strings without the `#` are rejected.
pub fn parse_color(color: &str) -> Result<Rgba, ColorError> {
    if color.len() > 9 {
        parse_rgb(color)
    } else {
        parse_hex(color)
    }
}

fn parse_rgb(color: &str) -> Result<Rgba, ColorError> {
    let channels: Vec<&str> = color.split(',').collect();

    if channels.len() < 3 || channels.len() > 4 {
        return Err(ColorError::InvalidChannelCount);
    }

    let r = leading_int(channels[0].split('(').nth(1).unwrap_or(""))?;
    let g = leading_int(channels[1])?;
    let b = leading_int(channels[2])?;
    let alpha = match channels.get(3) {
        Some(channel) => Some(leading_float(channel)?),
        None => None,
    };

    Ok(Rgba { r, g, b, alpha })
}

fn parse_hex(color: &str) -> Result<Rgba, ColorError> {
    let chars: Vec<char> = color.chars().collect();
    let len = chars.len();

    if len == 8 || len == 6 || len < 4 {
        return Err(ColorError::InvalidHexLength);
    }

    // Shorthand forms duplicate every digit before parsing.
    let digits: String = if len < 6 {
        chars[1..].iter().flat_map(|&c| [c, c]).collect()
    } else {
        chars[1..].iter().collect()
    };

    let value = u32::from_str_radix(&digits, 16).map_err(|_| ColorError::InvalidChannel)?;

    let mut r = i64::from((value >> 16) & 255);
    let mut g = i64::from((value >> 8) & 255);
    let mut b = i64::from(value & 255);
    let mut alpha = None;

    // With an alpha digit present, the low byte is the alpha channel
    // and the color channels shift up one position.
    if len == 9 || len == 5 {
        alpha = Some((b as f64 / 255.0 * 10000.0).round() / 10000.0);
        b = g;
        g = r;
        r = i64::from((value >> 24) & 255);
    }

    Ok(Rgba { r, g, b, alpha })
}

// Numeric prefix parsing: surrounding whitespace and trailing garbage
// are ignored, so "56)" reads as 56 and "0.5)" as 0.5.
fn leading_int(text: &str) -> Result<i64, ColorError> {
    let text = text.trim_start();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();

    if digits == 0 {
        return Err(ColorError::InvalidChannel);
    }

    rest[..digits]
        .parse::<i64>()
        .map(|value| sign * value)
        .map_err(|_| ColorError::InvalidChannel)
}

fn leading_float(text: &str) -> Result<f64, ColorError> {
    let text = text.trim_start();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };

    let mut end = 0;
    let mut seen_dot = false;

    for byte in rest.bytes() {
        match byte {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    let digits = &rest[..end];

    if !digits.bytes().any(|byte| byte.is_ascii_digit()) {
        return Err(ColorError::InvalidChannel);
    }

    digits
        .parse::<f64>()
        .map(|value| sign * value)
        .map_err(|_| ColorError::InvalidChannel)
}

/// Blends `from` toward a target color by a signed percentage in
/// [-1, 1]: negative percentages darken toward black, positive ones
/// lighten toward white, unless `to` names an explicit target.
///
/// The output family follows `from` (hex stays hex, rgb stays rgb)
/// except that an rgb-family `to` forces rgb output and the literal
/// sentinel `"c"` toggles the family away from `from`'s. Alpha is
/// omitted when neither side carries one, passed through when one side
/// does, and blended when both do.
pub fn blend(percentage: f64, from: &str, to: Option<&str>) -> Result<String, ColorError> {
    if !(-1.0..=1.0).contains(&percentage) {
        return Err(ColorError::PercentageOutOfRange);
    }

    if !from.starts_with('r') && !from.starts_with('#') {
        return Err(ColorError::UnknownFormat);
    }

    let from_is_rgb = from.len() > 9;
    let rgb_output = match to {
        Some(to) if to.len() > 9 => true,
        Some("c") => !from_is_rgb,
        Some(_) => false,
        None => from_is_rgb,
    };

    let darken = percentage < 0.0;
    let delta = percentage.abs();
    let target = match to {
        Some(to) if to != "c" => to,
        _ if darken => "#000000",
        _ => "#FFFFFF",
    };

    let source = parse_color(from)?;
    let target = parse_color(target)?;

    let mix = |s: i64, t: i64| ((t - s) as f64 * delta + s as f64).round() as i64;
    let r = mix(source.r, target.r);
    let g = mix(source.g, target.g);
    let b = mix(source.b, target.b);

    if rgb_output {
        let alpha = match (source.alpha, target.alpha) {
            (Some(s), Some(t)) => Some(((((t - s) * delta) + s) * 10000.0).round() / 10000.0),
            (Some(s), None) => Some(s),
            (None, Some(t)) => Some(t),
            (None, None) => None,
        };

        return Ok(match alpha {
            Some(alpha) => format!("rgba({r},{g},{b},{alpha})"),
            None => format!("rgb({r},{g},{b})"),
        });
    }

    let has_alpha = source.alpha.is_some() || target.alpha.is_some();
    let alpha_byte = match (source.alpha, target.alpha) {
        (Some(s), Some(t)) => ((((t - s) * delta) + s) * 255.0).round() as i64,
        (None, Some(t)) => (t * 255.0).round() as i64,
        (Some(s), None) => (s * 255.0).round() as i64,
        (None, None) => 255,
    };

    // Bias keeps a leading digit in place so the formatted value always
    // has nine hex digits; it is trimmed along with the alpha byte when
    // no alpha is wanted.
    let value = 0x1_0000_0000_i64 + r * 0x100_0000 + g * 0x1_0000 + b * 0x100 + alpha_byte;
    let hex = format!("{:x}", value as u64);
    let end = if has_alpha { hex.len() } else { hex.len() - 2 };

    Ok(format!("#{}", &hex[1..end]))
}

/// Converts a 6-digit `#` hex color and an explicit alpha into an
/// `rgba()` string.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Result<String, ColorError> {
    if hex.len() != 7 || !hex.is_ascii() || !hex.starts_with('#') {
        return Err(ColorError::InvalidHexLength);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidChannel)
    };

    Ok(format!(
        "rgba({}, {}, {}, {})",
        channel(1..3)?,
        channel(3..5)?,
        channel(5..7)?,
        alpha
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_parse_six_digit_hex() {
        assert_eq!(
            parse_color("#ceeaeb"),
            Ok(Rgba {
                r: 206,
                g: 234,
                b: 235,
                alpha: None
            })
        );
    }

    #[test]
    fn test_short_hex_expands_to_the_long_form() {
        assert_eq!(parse_color("#abc"), parse_color("#aabbcc"));
        assert_eq!(parse_color("#abcd"), parse_color("#aabbccdd"));
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        let color = parse_color("#ceeaebcc").unwrap();

        assert_eq!((color.r, color.g, color.b), (206, 234, 235));
        assert_eq!(color.alpha, Some(0.8), "204/255 should round to 0.8");
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(
            parse_color("rgb(12, 34, 56)"),
            Ok(Rgba {
                r: 12,
                g: 34,
                b: 56,
                alpha: None
            })
        );
    }

    #[test]
    fn test_parse_rgba() {
        assert_eq!(
            parse_color("rgba(12,34,56,0.5)"),
            Ok(Rgba {
                r: 12,
                g: 34,
                b: 56,
                alpha: Some(0.5)
            })
        );
    }

    #[test]
    fn test_hex_without_the_hash_is_rejected() {
        assert_eq!(parse_color("abcdef"), Err(ColorError::InvalidHexLength));
        assert_eq!(parse_color("abcd1234"), Err(ColorError::InvalidHexLength));
    }

    #[test]
    fn test_too_short_input_is_rejected() {
        assert_eq!(parse_color("#ab"), Err(ColorError::InvalidHexLength));
        assert_eq!(parse_color(""), Err(ColorError::InvalidHexLength));
    }

    #[test]
    fn test_wrong_channel_count_is_rejected() {
        assert_eq!(
            parse_color("rgb(1, 2, 3, 4, 5)"),
            Err(ColorError::InvalidChannelCount)
        );
        assert_eq!(
            parse_color("rgb(10,20)   "),
            Err(ColorError::InvalidChannelCount)
        );
    }

    #[test]
    fn test_unreadable_channels_are_rejected() {
        assert_eq!(
            parse_color("rgb(one, 2, 3)"),
            Err(ColorError::InvalidChannel)
        );
        assert_eq!(parse_color("#zzzzzz"), Err(ColorError::InvalidChannel));
    }

    #[test]
    fn test_zero_percentage_returns_the_source() {
        assert_eq!(blend(0.0, "#ceeaeb", None).unwrap(), "#ceeaeb");
    }

    #[test]
    fn test_darken_toward_black() {
        assert_eq!(blend(-0.5, "#808080", None).unwrap(), "#404040");
        assert_eq!(blend(-0.2, "#ceeaeb", None).unwrap(), "#a5bbbc");
    }

    #[test]
    fn test_lighten_toward_white() {
        assert_eq!(blend(0.5, "#000000", None).unwrap(), "#808080");
        assert_eq!(blend(0.2, "#0e425e", None).unwrap(), "#3e687e");
    }

    #[test]
    fn test_percentage_out_of_range_is_rejected() {
        assert_eq!(
            blend(1.5, "#000000", None),
            Err(ColorError::PercentageOutOfRange)
        );
        assert_eq!(
            blend(-1.01, "#000000", None),
            Err(ColorError::PercentageOutOfRange)
        );
    }

    #[test]
    fn test_unknown_leading_character_is_rejected() {
        assert_eq!(blend(0.1, "blue", None), Err(ColorError::UnknownFormat));
    }

    #[test]
    fn test_rgb_input_keeps_the_rgb_family() {
        assert_eq!(
            blend(0.2, "rgb(20,40,60)", None).unwrap(),
            "rgb(67,83,99)"
        );
    }

    #[test]
    fn test_explicit_hex_target_keeps_the_hex_family() {
        assert_eq!(
            blend(0.5, "#000000", Some("#ffffff")).unwrap(),
            "#808080"
        );
    }

    #[test]
    fn test_rgb_target_forces_rgb_output() {
        assert_eq!(
            blend(1.0, "#000000", Some("rgb(10,20,30)")).unwrap(),
            "rgb(10,20,30)"
        );
    }

    #[test]
    fn test_c_sentinel_toggles_the_output_family() {
        assert_eq!(blend(0.0, "#102030", Some("c")).unwrap(), "rgb(16,32,48)");
        assert_eq!(blend(0.0, "rgb(16,32,48)", Some("c")).unwrap(), "#102030");
    }

    #[test]
    fn test_source_alpha_passes_through() {
        assert_eq!(
            blend(0.0, "rgba(10,20,30,0.5)", None).unwrap(),
            "rgba(10,20,30,0.5)"
        );
    }

    #[test]
    fn test_alpha_blends_when_both_sides_carry_one() {
        assert_eq!(
            blend(0.5, "rgba(0,0,0,0)", Some("rgba(255,255,255,1)")).unwrap(),
            "rgba(128,128,128,0.5)"
        );
    }

    #[test]
    fn test_hex_alpha_round_trips_through_a_zero_blend() {
        assert_eq!(blend(0.0, "#00000080", None).unwrap(), "#00000080");
    }

    #[test]
    fn test_random_hex_round_trip() {
        let mut rng = rand::rng();

        for _ in 0..64 {
            let (r, g, b) = (
                rng.random_range(0..=255u32),
                rng.random_range(0..=255u32),
                rng.random_range(0..=255u32),
            );
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let color = parse_color(&hex).unwrap();

            assert_eq!(
                (color.r, color.g, color.b),
                (i64::from(r), i64::from(g), i64::from(b)),
                "{hex} should parse back into its channels"
            );
            assert_eq!(
                blend(0.0, &hex, None).unwrap(),
                hex,
                "a zero blend should leave {hex} untouched"
            );
        }
    }

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(
            hex_to_rgba("#ceeaeb", 0.5).unwrap(),
            "rgba(206, 234, 235, 0.5)"
        );
        assert_eq!(
            hex_to_rgba("ceeaeb", 0.5),
            Err(ColorError::InvalidHexLength)
        );
        assert_eq!(hex_to_rgba("#zzzzzz", 1.0), Err(ColorError::InvalidChannel));
    }
}
