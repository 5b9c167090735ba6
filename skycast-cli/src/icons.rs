use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IconStyle {
    Unicode,
    Ascii,
    Emoji,
}

/// Display asset families for OpenWeather icon codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IconKind {
    Clear,
    Cloud,
    Drizzle,
    Rain,
    Snow,
}

/// Resolve an icon code such as "10d" to its asset family. The day/night
/// suffix does not change the asset, and codes without a dedicated asset
/// (thunder, mist) fall back to the clear icon.
fn icon_kind(code: &str) -> IconKind {
    match code.get(..2) {
        Some("02" | "03") => IconKind::Cloud,
        Some("04") => IconKind::Drizzle,
        Some("09" | "10") => IconKind::Rain,
        Some("13") => IconKind::Snow,
        _ => IconKind::Clear,
    }
}

pub fn condition_glyph(code: &str, style: IconStyle) -> &'static str {
    let kind = icon_kind(code);

    match style {
        IconStyle::Unicode => match kind {
            IconKind::Clear => "☀",
            IconKind::Cloud => "☁",
            IconKind::Drizzle => "☂",
            IconKind::Rain => "☔",
            IconKind::Snow => "❄",
        },
        IconStyle::Ascii => match kind {
            IconKind::Clear => "SUN",
            IconKind::Cloud => "CLD",
            IconKind::Drizzle => "DRZ",
            IconKind::Rain => "RAN",
            IconKind::Snow => "SNW",
        },
        IconStyle::Emoji => match kind {
            IconKind::Clear => "☀️",
            IconKind::Cloud => "☁️",
            IconKind::Drizzle => "🌦️",
            IconKind::Rain => "🌧️",
            IconKind::Snow => "🌨️",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_and_night_codes_share_an_asset() {
        assert_eq!(icon_kind("01d"), IconKind::Clear);
        assert_eq!(icon_kind("01n"), IconKind::Clear);
        assert_eq!(icon_kind("10d"), IconKind::Rain);
        assert_eq!(icon_kind("10n"), IconKind::Rain);
    }

    #[test]
    fn code_families_map_to_their_assets() {
        assert_eq!(icon_kind("02d"), IconKind::Cloud);
        assert_eq!(icon_kind("03n"), IconKind::Cloud);
        assert_eq!(icon_kind("04d"), IconKind::Drizzle);
        assert_eq!(icon_kind("09n"), IconKind::Rain);
        assert_eq!(icon_kind("13d"), IconKind::Snow);
    }

    #[test]
    fn unmapped_codes_fall_back_to_clear() {
        assert_eq!(icon_kind("11d"), IconKind::Clear); // thunderstorm
        assert_eq!(icon_kind("50n"), IconKind::Clear); // mist
        assert_eq!(icon_kind(""), IconKind::Clear);
    }

    #[test]
    fn glyph_follows_the_requested_style() {
        assert_eq!(condition_glyph("13d", IconStyle::Unicode), "❄");
        assert_eq!(condition_glyph("13d", IconStyle::Ascii), "SNW");
        assert_eq!(condition_glyph("13d", IconStyle::Emoji), "🌨️");
    }
}
