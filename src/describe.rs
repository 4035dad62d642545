//! Human-readable renderings of windows and dates, in English
use crate::window::{Granularity, OutOfTimeError, ViewWindow};
use time::{Date, Month};

/// A heading for the span covered by `window`, e.g. "February 2024",
/// "12 Feb - 18 Feb 2024", or "10 June 2024"
pub fn window_title(window: &ViewWindow) -> Result<String, OutOfTimeError> {
    let anchor = window.anchor();
    Ok(match window.granularity() {
        Granularity::Month => format!("{} {}", anchor.month(), anchor.year()),
        Granularity::Week => {
            let bounds = window.bounds()?;
            let (start, end) = (bounds.start, bounds.end);
            if start.year() == end.year() {
                format!(
                    "{:02} {} - {:02} {} {}",
                    start.day(),
                    short_month(start.month()),
                    end.day(),
                    short_month(end.month()),
                    end.year()
                )
            } else {
                format!(
                    "{:02} {} {} - {:02} {} {}",
                    start.day(),
                    short_month(start.month()),
                    start.year(),
                    end.day(),
                    short_month(end.month()),
                    end.year()
                )
            }
        }
        Granularity::Day => format!("{:02} {} {}", anchor.day(), anchor.month(), anchor.year()),
    })
}

/// `dd/MM`
pub fn day_month(date: Date) -> String {
    format!("{:02}/{:02}", date.day(), u8::from(date.month()))
}

/// "Today!" for `today`, the name of the weekday for any other date
pub fn badge(date: Date, today: Date) -> String {
    if date == today {
        String::from("Today!")
    } else {
        date.weekday().to_string()
    }
}

fn short_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday;

    #[test]
    fn test_month_title() {
        let window = ViewWindow::new(Granularity::Month, date!(2024 - 02 - 15));
        assert_eq!(window_title(&window).unwrap(), "February 2024");
    }

    #[test]
    fn test_week_title() {
        let window = ViewWindow::new(Granularity::Week, date!(2024 - 02 - 15));
        assert_eq!(window_title(&window).unwrap(), "12 Feb - 18 Feb 2024");
        let window = window.with_week_start(Weekday::Sunday);
        assert_eq!(window_title(&window).unwrap(), "11 Feb - 17 Feb 2024");
    }

    #[test]
    fn test_week_title_across_year() {
        let window = ViewWindow::new(Granularity::Week, date!(2024 - 12 - 31));
        assert_eq!(
            window_title(&window).unwrap(),
            "30 Dec 2024 - 05 Jan 2025"
        );
    }

    #[test]
    fn test_day_title() {
        let window = ViewWindow::new(Granularity::Day, date!(2024 - 06 - 01));
        assert_eq!(window_title(&window).unwrap(), "01 June 2024");
    }

    #[test]
    fn test_day_month() {
        assert_eq!(day_month(date!(2024 - 03 - 07)), "07/03");
        assert_eq!(day_month(date!(2024 - 12 - 25)), "25/12");
    }

    #[test]
    fn test_badge() {
        let today = date!(2024 - 06 - 10);
        assert_eq!(badge(today, today), "Today!");
        // 2024-06-11 is a Tuesday
        assert_eq!(badge(date!(2024 - 06 - 11), today), "Tuesday");
    }
}
