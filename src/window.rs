use crate::recurring::month_length;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;
use time::{
    Date, Duration,
    Month::{December, January},
    Weekday,
};

const DAYS_IN_WEEK: i64 = 7;

/// The unit of time a [`ViewWindow`] covers
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Granularity {
    #[default]
    Month,
    Week,
    Day,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Month => "month",
            Granularity::Week => "week",
            Granularity::Day => "day",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Granularity, ParseGranularityError> {
        match s.to_ascii_lowercase().as_str() {
            "month" => Ok(Granularity::Month),
            "week" => Ok(Granularity::Week),
            "day" => Ok(Granularity::Day),
            _ => Err(ParseGranularityError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid granularity {0:?}; expected \"month\", \"week\", or \"day\"")]
pub struct ParseGranularityError(String);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Next,
    Previous,
}

/// A navigable span of the calendar: the month, week, or day containing an
/// anchor date.
///
/// Windows are plain values.  Navigation returns a new window and leaves the
/// old one untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ViewWindow {
    granularity: Granularity,
    anchor: Date,
    week_start: Weekday,
}

impl ViewWindow {
    /// Create a window whose weeks start on Monday
    pub fn new(granularity: Granularity, anchor: Date) -> ViewWindow {
        ViewWindow {
            granularity,
            anchor,
            week_start: Weekday::Monday,
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> ViewWindow {
        self.week_start = week_start;
        self
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn anchor(&self) -> Date {
        self.anchor
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// The first and last days covered by the window.  Fails only when part
    /// of the anchor's week lies outside the range supported by [`Date`].
    pub fn bounds(&self) -> Result<Bounds, OutOfTimeError> {
        let (year, month) = (self.anchor.year(), self.anchor.month());
        match self.granularity {
            Granularity::Month => {
                let start =
                    Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)?;
                let end = Date::from_calendar_date(year, month, month_length(year, month))
                    .map_err(|_| OutOfTimeError)?;
                Ok(Bounds { start, end })
            }
            Granularity::Week => {
                let offset = (DAYS_IN_WEEK
                    + i64::from(self.anchor.weekday().number_days_from_monday())
                    - i64::from(self.week_start.number_days_from_monday()))
                    % DAYS_IN_WEEK;
                let start = self
                    .anchor
                    .checked_sub(Duration::days(offset))
                    .ok_or(OutOfTimeError)?;
                let end = start
                    .checked_add(Duration::days(DAYS_IN_WEEK - 1))
                    .ok_or(OutOfTimeError)?;
                Ok(Bounds { start, end })
            }
            Granularity::Day => Ok(Bounds {
                start: self.anchor,
                end: self.anchor,
            }),
        }
    }

    /// Move one month, week, or day forwards or backwards.  Month steps keep
    /// the day of the month where possible and otherwise clamp it to the
    /// last day of the target month.
    pub fn navigate(self, direction: Direction) -> Result<ViewWindow, OutOfTimeError> {
        let anchor = match (self.granularity, direction) {
            (Granularity::Month, direction) => shift_month(self.anchor, direction)?,
            (Granularity::Week, Direction::Next) => self
                .anchor
                .checked_add(Duration::days(DAYS_IN_WEEK))
                .ok_or(OutOfTimeError)?,
            (Granularity::Week, Direction::Previous) => self
                .anchor
                .checked_sub(Duration::days(DAYS_IN_WEEK))
                .ok_or(OutOfTimeError)?,
            (Granularity::Day, Direction::Next) => self.anchor.next_day().ok_or(OutOfTimeError)?,
            (Granularity::Day, Direction::Previous) => {
                self.anchor.previous_day().ok_or(OutOfTimeError)?
            }
        };
        Ok(ViewWindow { anchor, ..self })
    }

    pub fn set_granularity(self, granularity: Granularity) -> ViewWindow {
        ViewWindow {
            granularity,
            ..self
        }
    }

    pub fn jump_to(self, anchor: Date) -> ViewWindow {
        ViewWindow { anchor, ..self }
    }
}

/// An inclusive range of dates
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Bounds {
    pub start: Date,
    pub end: Date,
}

impl Bounds {
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// The calendar years that the range overlaps
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub struct OutOfTimeError;

fn shift_month(date: Date, direction: Direction) -> Result<Date, OutOfTimeError> {
    let (year, month) = match (direction, date.month()) {
        (Direction::Next, December) => (date.year().checked_add(1), January),
        (Direction::Next, month) => (Some(date.year()), month.next()),
        (Direction::Previous, January) => (date.year().checked_sub(1), December),
        (Direction::Previous, month) => (Some(date.year()), month.previous()),
    };
    let year = year.ok_or(OutOfTimeError)?;
    let day = date.day().min(month_length(year, month));
    Date::from_calendar_date(year, month, day).map_err(|_| OutOfTimeError)
}
