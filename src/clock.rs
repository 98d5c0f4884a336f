use chrono::NaiveTime;

/// Renders a time-of-day on the 12-hour clock, e.g. `14:30` as `2:30 PM`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
