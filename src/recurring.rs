use log::warn;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::{
    error::ComponentRange,
    util::is_leap_year,
    Date,
    Month::{self, *},
};

/// A month and day that come around once a year, such as a birthday.
///
/// The day is always valid for the month in a non-leap year, so the date can
/// be placed in any calendar year.  February 29 is not representable; data
/// carrying it is moved to February 28 on the way in.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "String")]
pub struct RecurringDate {
    month: Month,
    day: u8,
}

impl RecurringDate {
    /// Fails if `day` does not exist in `month` of a non-leap year
    pub fn new(month: Month, day: u8) -> Result<RecurringDate, InvalidRecurringDate> {
        if (1..=common_year_length(month)).contains(&day) {
            Ok(RecurringDate { month, day })
        } else {
            Err(InvalidRecurringDate { month, day })
        }
    }

    /// Like [`RecurringDate::new`], but February 29 becomes February 28
    pub fn with_leap_day_normalized(
        month: Month,
        day: u8,
    ) -> Result<RecurringDate, InvalidRecurringDate> {
        RecurringDate::new(month, skip_leap_day(month, day))
    }

    /// Takes the month and day of `date`, ignoring its year
    pub fn from_date(date: Date) -> RecurringDate {
        RecurringDate {
            month: date.month(),
            day: skip_leap_day(date.month(), date.day()),
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// The date on which this recurs in `year`.  Only fails for years
    /// outside the range supported by [`Date`].
    pub fn in_year(&self, year: i32) -> Result<Date, ComponentRange> {
        Date::from_calendar_date(year, self.month, self.day)
    }
}

impl fmt::Display for RecurringDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", u8::from(self.month), self.day)
    }
}

impl FromStr for RecurringDate {
    type Err = ParseRecurringDateError;

    /// Accepts `YYYY-MM-DD` (the year is discarded) or `MM-DD`.  Leading
    /// zeroes are optional.
    fn from_str(s: &str) -> Result<RecurringDate, ParseRecurringDateError> {
        let syntax = || ParseRecurringDateError::Syntax(s.to_owned());
        let fields = s.trim().split('-').collect::<Vec<_>>();
        let (month, day) = match fields.as_slice() {
            [year, month, day] => {
                year.parse::<i32>().map_err(|_| syntax())?;
                (*month, *day)
            }
            [month, day] => (*month, *day),
            _ => return Err(syntax()),
        };
        let month = month.parse::<u8>().map_err(|_| syntax())?;
        let month = Month::try_from(month).map_err(|_| syntax())?;
        let day = day.parse::<u8>().map_err(|_| syntax())?;
        RecurringDate::with_leap_day_normalized(month, day).map_err(|source| {
            ParseRecurringDateError::Invalid {
                input: s.to_owned(),
                source,
            }
        })
    }
}

impl TryFrom<String> for RecurringDate {
    type Error = ParseRecurringDateError;

    fn try_from(s: String) -> Result<RecurringDate, ParseRecurringDateError> {
        s.parse()
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("day {day} does not exist in {month}")]
pub struct InvalidRecurringDate {
    pub month: Month,
    pub day: u8,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseRecurringDateError {
    #[error("invalid recurring date {0:?}; expected YYYY-MM-DD or MM-DD")]
    Syntax(String),
    #[error("invalid recurring date {input:?}: {source}")]
    Invalid {
        input: String,
        source: InvalidRecurringDate,
    },
}

fn skip_leap_day(month: Month, day: u8) -> u8 {
    if month == February && day == 29 {
        warn!("Recurring date on February 29 moved to February 28");
        28
    } else {
        day
    }
}

/// Number of days in `month` of `year`
pub(crate) fn month_length(year: i32, month: Month) -> u8 {
    if month == February && is_leap_year(year) {
        29
    } else {
        common_year_length(month)
    }
}

fn common_year_length(month: Month) -> u8 {
    match month {
        February => 28,
        April | June | September | November => 30,
        January | March | May | July | August | October | December => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_new_valid() {
        let rd = RecurringDate::new(June, 10).unwrap();
        assert_eq!(rd.month(), June);
        assert_eq!(rd.day(), 10);
    }

    #[test]
    fn test_new_rejects_out_of_range_days() {
        assert_eq!(
            RecurringDate::new(February, 31),
            Err(InvalidRecurringDate {
                month: February,
                day: 31
            })
        );
        assert!(RecurringDate::new(April, 31).is_err());
        assert!(RecurringDate::new(January, 0).is_err());
        assert!(RecurringDate::new(February, 29).is_err());
        assert!(RecurringDate::new(December, 31).is_ok());
    }

    #[test]
    fn test_leap_day_normalized() {
        assert_eq!(
            RecurringDate::with_leap_day_normalized(February, 29),
            RecurringDate::new(February, 28)
        );
        assert!(RecurringDate::with_leap_day_normalized(February, 30).is_err());
    }

    #[test]
    fn test_from_date() {
        assert_eq!(
            RecurringDate::from_date(date!(1980 - 03 - 14)),
            RecurringDate::new(March, 14).unwrap()
        );
        assert_eq!(
            RecurringDate::from_date(date!(1984 - 02 - 29)),
            RecurringDate::new(February, 28).unwrap()
        );
    }

    #[test]
    fn test_parse() {
        let expected = RecurringDate::new(July, 2).unwrap();
        assert_eq!("1985-07-02".parse::<RecurringDate>(), Ok(expected));
        assert_eq!("1985-7-2".parse::<RecurringDate>(), Ok(expected));
        assert_eq!("07-02".parse::<RecurringDate>(), Ok(expected));
        assert_eq!(
            "02-29".parse::<RecurringDate>(),
            Ok(RecurringDate::new(February, 28).unwrap())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "07/02".parse::<RecurringDate>(),
            Err(ParseRecurringDateError::Syntax("07/02".into()))
        );
        assert_eq!(
            "1985-13-02".parse::<RecurringDate>(),
            Err(ParseRecurringDateError::Syntax("1985-13-02".into()))
        );
        assert_eq!(
            "02-31".parse::<RecurringDate>(),
            Err(ParseRecurringDateError::Invalid {
                input: "02-31".into(),
                source: InvalidRecurringDate {
                    month: February,
                    day: 31
                }
            })
        );
        assert_eq!(
            "1980-04-31".parse::<RecurringDate>().unwrap_err().to_string(),
            "invalid recurring date \"1980-04-31\": day 31 does not exist in April"
        );
        assert!("".parse::<RecurringDate>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RecurringDate::new(March, 7).unwrap().to_string(), "03-07");
    }

    #[test]
    fn test_in_year() {
        let rd = RecurringDate::new(February, 28).unwrap();
        assert_eq!(rd.in_year(2024).ok(), Some(date!(2024 - 02 - 28)));
        assert_eq!(rd.in_year(2025).ok(), Some(date!(2025 - 02 - 28)));
    }

    #[test]
    fn test_month_length() {
        assert_eq!(month_length(2024, February), 29);
        assert_eq!(month_length(2023, February), 28);
        assert_eq!(month_length(1900, February), 28);
        assert_eq!(month_length(2000, February), 29);
        assert_eq!(month_length(2023, September), 30);
        assert_eq!(month_length(2023, October), 31);
    }
}
