use chrono::{NaiveDate, TimeZone};

use crate::model::{DailySummary, WeatherSample};

/// Maximum number of days in the aggregated outlook.
pub const MAX_OUTLOOK_DAYS: usize = 5;

/// Collapse a time-ordered sequence of 3-hourly forecast samples into at most
/// [`MAX_OUTLOOK_DAYS`] one-per-day summaries.
///
/// Each sample is assigned to the calendar day its timestamp falls on under
/// `tz`. Samples dated `today` are skipped, distinct days keep first-seen
/// order, and the first sample of each day supplies the summary values
/// (temperature floored to a whole degree, condition copied verbatim).
///
/// The input is borrowed read-only and the function cannot fail: an empty
/// input yields an empty outlook.
pub fn daily_outlook<Tz: TimeZone>(
    samples: &[WeatherSample],
    today: NaiveDate,
    tz: &Tz,
) -> Vec<DailySummary> {
    let mut days: Vec<DailySummary> = Vec::with_capacity(MAX_OUTLOOK_DAYS);

    for sample in samples {
        let date = sample.timestamp.with_timezone(tz).date_naive();

        if date == today || days.iter().any(|day| day.date == date) {
            continue;
        }

        days.push(DailySummary {
            date,
            weekday: date.format("%a").to_string(),
            temperature_c: sample.temperature_c.floor() as i32,
            condition_code: sample.condition_code.clone(),
            condition_description: sample.condition_description.clone(),
        });

        if days.len() == MAX_OUTLOOK_DAYS {
            break;
        }
    }

    days
}
