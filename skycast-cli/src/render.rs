use skycast_core::{CurrentConditions, DailySummary};

use crate::icons::{IconStyle, condition_glyph};

/// Render the full report: the current conditions block plus, when samples
/// were available, the daily outlook block.
pub fn weather_report(
    current: &CurrentConditions,
    outlook: &[DailySummary],
    icons: IconStyle,
) -> String {
    let mut out = current_block(current, icons);

    if !outlook.is_empty() {
        out.push('\n');
        out.push_str(&outlook_block(outlook, icons));
    }

    out
}

fn current_block(current: &CurrentConditions, icons: IconStyle) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {}°C  {}  {}\n",
        current.location_name,
        current.temperature_c.floor() as i64,
        condition_glyph(&current.condition_code, icons),
        current.condition_description,
    ));
    out.push_str(&format!(
        "Humidity {}%   Wind {:.1} km/h\n",
        current.humidity_pct,
        current.wind_speed_mps * 3.6,
    ));

    out
}

fn outlook_block(outlook: &[DailySummary], icons: IconStyle) -> String {
    let mut out = String::from("5-day forecast\n");

    for day in outlook {
        out.push_str(&format!(
            "  {}  {:<3}  {:>3}°C  {}\n",
            day.weekday,
            condition_glyph(&day.condition_code, icons),
            day.temperature_c,
            day.condition_description,
        ));
    }

    out
}
