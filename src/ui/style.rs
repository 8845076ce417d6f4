//! Clock face configuration

use core::fmt;

use super::surface::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StyleError {
    /// Attribute key the face does not know
    UnknownAttribute,
    /// Color value not in `#RRGGBB` or `#AARRGGBB` form
    InvalidColor,
    /// Flag value other than `true` or `false`
    InvalidFlag,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::UnknownAttribute => f.write_str("unknown clock attribute"),
            StyleError::InvalidColor => f.write_str("invalid color value"),
            StyleError::InvalidFlag => f.write_str("invalid flag value"),
        }
    }
}

/// Colors and initial mode of a clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockStyle {
    pub center_inner: Color,
    pub center_outer: Color,
    pub seconds_needle: Color,
    pub hours_needle: Color,
    pub minutes_needle: Color,
    pub degrees: Color,
    pub hours_values: Color,
    pub numbers: Color,
    pub show_analog: bool,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            center_inner: Color::LIGHT_GRAY,
            center_outer: Color::WHITE,
            seconds_needle: Color::LIGHT_GRAY,
            hours_needle: Color::WHITE,
            minutes_needle: Color::WHITE,
            degrees: Color::WHITE,
            hours_values: Color::WHITE,
            numbers: Color::WHITE,
            show_analog: true,
        }
    }
}

impl ClockStyle {
    pub fn with_center_inner(mut self, color: Color) -> Self {
        self.center_inner = color;
        self
    }

    pub fn with_center_outer(mut self, color: Color) -> Self {
        self.center_outer = color;
        self
    }

    pub fn with_seconds_needle(mut self, color: Color) -> Self {
        self.seconds_needle = color;
        self
    }

    pub fn with_hours_needle(mut self, color: Color) -> Self {
        self.hours_needle = color;
        self
    }

    pub fn with_minutes_needle(mut self, color: Color) -> Self {
        self.minutes_needle = color;
        self
    }

    pub fn with_degrees(mut self, color: Color) -> Self {
        self.degrees = color;
        self
    }

    pub fn with_hours_values(mut self, color: Color) -> Self {
        self.hours_values = color;
        self
    }

    pub fn with_numbers(mut self, color: Color) -> Self {
        self.numbers = color;
        self
    }

    pub fn with_show_analog(mut self, show_analog: bool) -> Self {
        self.show_analog = show_analog;
        self
    }

    /// Build a style from key/value attributes on top of the defaults
    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut style = Self::default();
        for (key, value) in attributes {
            style.set_attribute(key, value)?;
        }
        Ok(style)
    }

    /// Apply a single attribute
    pub fn set_attribute(&mut self, key: &str, value: &str) -> Result<(), StyleError> {
        if key == "showAnalog" {
            self.show_analog = parse_flag(value)?;
            return Ok(());
        }

        let slot = match key {
            "centerInnerColor" => &mut self.center_inner,
            "centerOuterColor" => &mut self.center_outer,
            "secondsNeedleColor" => &mut self.seconds_needle,
            "hoursNeedleColor" => &mut self.hours_needle,
            "minutesNeedleColor" => &mut self.minutes_needle,
            "degreesColor" => &mut self.degrees,
            "hoursValuesColor" => &mut self.hours_values,
            "numbersColor" => &mut self.numbers,
            _ => return Err(StyleError::UnknownAttribute),
        };
        *slot = parse_color(value)?;
        Ok(())
    }
}

/// Parse `#RRGGBB` (opaque) or `#AARRGGBB`
pub fn parse_color(value: &str) -> Result<Color, StyleError> {
    let hex = value.trim().strip_prefix('#').ok_or(StyleError::InvalidColor)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(StyleError::InvalidColor);
    }
    let packed = u32::from_str_radix(hex, 16).map_err(|_| StyleError::InvalidColor)?;
    match hex.len() {
        6 => Ok(Color::from_argb(0xff00_0000 | packed)),
        8 => Ok(Color::from_argb(packed)),
        _ => Err(StyleError::InvalidColor),
    }
}

fn parse_flag(value: &str) -> Result<bool, StyleError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(StyleError::InvalidFlag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let style = ClockStyle::default();
        assert_eq!(style.center_inner, Color::LIGHT_GRAY);
        assert_eq!(style.seconds_needle, Color::LIGHT_GRAY);
        assert_eq!(style.center_outer, Color::WHITE);
        assert_eq!(style.hours_needle, Color::WHITE);
        assert_eq!(style.minutes_needle, Color::WHITE);
        assert_eq!(style.degrees, Color::WHITE);
        assert_eq!(style.hours_values, Color::WHITE);
        assert_eq!(style.numbers, Color::WHITE);
        assert!(style.show_analog);
    }

    #[test]
    fn error_messages() {
        assert_eq!(StyleError::UnknownAttribute.to_string(), "unknown clock attribute");
        assert_eq!(StyleError::InvalidColor.to_string(), "invalid color value");
        assert_eq!(StyleError::InvalidFlag.to_string(), "invalid flag value");
    }

    #[test]
    fn attributes_override_defaults() {
        let style = ClockStyle::from_attributes([
            ("secondsNeedleColor", "#ff0000"),
            ("centerInnerColor", "#80102030"),
            ("showAnalog", "false"),
        ])
        .unwrap();
        assert_eq!(style.seconds_needle, Color::rgb(0xff, 0, 0));
        assert_eq!(style.center_inner, Color::rgba(0x10, 0x20, 0x30, 0x80));
        assert!(!style.show_analog);
        assert_eq!(style.numbers, Color::WHITE);
    }

    #[test]
    fn empty_bundle_is_the_default() {
        let none: [(&str, &str); 0] = [];
        assert_eq!(ClockStyle::from_attributes(none), Ok(ClockStyle::default()));
    }

    #[test]
    fn rejects_bad_attributes() {
        assert_eq!(
            ClockStyle::from_attributes([("fooColor", "#ffffff")]),
            Err(StyleError::UnknownAttribute)
        );
        assert_eq!(
            ClockStyle::from_attributes([("degreesColor", "white")]),
            Err(StyleError::InvalidColor)
        );
        assert_eq!(
            ClockStyle::from_attributes([("showAnalog", "yes")]),
            Err(StyleError::InvalidFlag)
        );
    }

    #[test]
    fn color_parsing() {
        assert_eq!(parse_color("#000000"), Ok(Color::BLACK));
        assert_eq!(parse_color(" #CCCCCC "), Ok(Color::LIGHT_GRAY));
        assert_eq!(parse_color("#12345"), Err(StyleError::InvalidColor));
        assert_eq!(parse_color("#+1234567"), Err(StyleError::InvalidColor));
        assert_eq!(parse_color("123456"), Err(StyleError::InvalidColor));
        assert_eq!(parse_color("#gg0000"), Err(StyleError::InvalidColor));
    }

    #[test]
    fn builder_setters() {
        let style = ClockStyle::default()
            .with_numbers(Color::BLACK)
            .with_hours_needle(Color::LIGHT_GRAY)
            .with_show_analog(false);
        assert_eq!(style.numbers, Color::BLACK);
        assert_eq!(style.hours_needle, Color::LIGHT_GRAY);
        assert!(!style.show_analog);
    }
}
