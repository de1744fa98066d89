use colored::{Color, Colorize};
use weather_core::{ConditionColor, CurrentWeather};

/// Column width the city and description are centered in.
pub const PADDING: usize = 20;

fn to_color(color: ConditionColor) -> Option<Color> {
    match color {
        ConditionColor::Red => Some(Color::Red),
        ConditionColor::Cyan => Some(Color::Cyan),
        ConditionColor::Blue => Some(Color::Blue),
        ConditionColor::White => Some(Color::White),
        ConditionColor::Yellow => Some(Color::Yellow),
        ConditionColor::Default => None,
    }
}

/// "light RAIN" -> "Light rain"
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Format like the API's own floats: always at least one decimal.
/// `28.0` -> "28.0", `11.53` -> "11.53"
pub fn format_temperature(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Render the one-line summary.
///
/// With `color == false` no escape codes are emitted at all.
pub fn render(weather: &CurrentWeather, color: bool) -> String {
    let condition = weather.condition();

    let city = format!("{:^PADDING$}", weather.city);
    let body = format!(
        "\t{} \t{:^PADDING$}",
        condition.glyph(),
        capitalize(&weather.description)
    );
    let temp = format!(
        "({}°{})",
        format_temperature(weather.temperature),
        weather.units.suffix()
    );

    if !color {
        return format!("{city}{body} {temp}");
    }

    let body = match to_color(condition.color()) {
        Some(c) => body.color(c).to_string(),
        None => body,
    };

    format!("{}{body} {temp}", city.reversed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::Units;

    fn weather(code: u16, description: &str, temperature: f64, units: Units) -> CurrentWeather {
        CurrentWeather {
            city: "Oslo".to_string(),
            condition_code: code,
            description: description.to_string(),
            temperature,
            units,
        }
    }

    #[test]
    fn capitalize_lowers_the_rest() {
        assert_eq!(capitalize("light RAIN"), "Light rain");
        assert_eq!(capitalize("clear sky"), "Clear sky");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn plain_render_layout() {
        let line = render(&weather(800, "clear sky", 3.5, Units::Metric), false);
        assert_eq!(
            line,
            "        Oslo        \t🌤 \t     Clear sky       (3.5°C)"
        );
    }

    #[test]
    fn imperial_suffix() {
        let line = render(&weather(601, "snow", 28.0, Units::Imperial), false);
        assert!(line.contains("🌨"));
        assert!(line.ends_with("(28.0°F)"));
    }

    #[test]
    fn unknown_code_gets_rainbow() {
        let line = render(&weather(450, "mystery", 10.0, Units::Metric), false);
        assert!(line.contains("🌈"));
    }

    #[test]
    fn plain_render_has_no_escapes() {
        let line = render(&weather(201, "thunderstorm with rain", 20.1, Units::Metric), false);
        assert!(!line.contains('\u{1b}'));
    }

    #[test]
    fn temperature_keeps_one_decimal() {
        assert_eq!(format_temperature(28.0), "28.0");
        assert_eq!(format_temperature(-4.0), "-4.0");
        assert_eq!(format_temperature(11.53), "11.53");
        assert_eq!(format_temperature(0.5), "0.5");
    }

    #[test]
    fn colored_render_escapes() {
        colored::control::set_override(true);

        let storm = render(&weather(201, "thunderstorm with rain", 20.1, Units::Metric), true);
        assert!(storm.starts_with("\x1b[7m        Oslo        \x1b[0m"), "{storm:?}");
        assert!(storm.contains("\x1b[31m\t🌩 \t"), "{storm:?}");
        // temperature sits outside the colored span
        assert!(storm.ends_with("\x1b[0m (20.1°C)"), "{storm:?}");

        let unknown = render(&weather(450, "mystery", 10.0, Units::Metric), true);
        assert!(unknown.starts_with("\x1b[7m"));
        assert!(!unknown.contains("\x1b[3"), "{unknown:?}");
        assert!(unknown.ends_with("(10.0°C)"));

        colored::control::unset_override();
    }
}
