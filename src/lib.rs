//! Find the birthdays and other yearly dates that fall inside a month, week,
//! or day of the calendar, and step that window backwards and forwards.
//!
//! ```
//! use anniversaries::{occurrences_in_window, Direction, Granularity, Person, RecurringDate, ViewWindow};
//! use time::{macros::date, Month};
//!
//! struct Member(RecurringDate);
//!
//! impl Person for Member {
//!     fn recurring_dates(&self) -> Vec<(&str, RecurringDate)> {
//!         vec![("birthday", self.0)]
//!     }
//! }
//!
//! let people = [Member(RecurringDate::new(Month::March, 3).unwrap())];
//! let window = ViewWindow::new(Granularity::Month, date!(2024 - 02 - 15));
//! assert!(occurrences_in_window(&people, window).unwrap().is_empty());
//! let window = window.navigate(Direction::Next).unwrap();
//! let found = occurrences_in_window(&people, window).unwrap();
//! assert_eq!(found[0].date, date!(2024 - 03 - 03));
//! ```
pub mod describe;
pub mod occurrence;
pub mod recurring;
pub mod roster;
pub mod window;
pub use crate::occurrence::{occurrences_in_window, Occurrence, Person};
pub use crate::recurring::{InvalidRecurringDate, ParseRecurringDateError, RecurringDate};
pub use crate::roster::{Couple, Role, Roster, RosterError, Spouse};
pub use crate::window::{
    Bounds, Direction, Granularity, OutOfTimeError, ParseGranularityError, ViewWindow,
};
