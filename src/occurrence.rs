use crate::recurring::RecurringDate;
use crate::window::{OutOfTimeError, ViewWindow};
use log::debug;
use time::Date;

/// Anything carrying named dates that recur every year
pub trait Person {
    /// The person's recurring dates, each paired with a label naming which
    /// date it is.  The order must be stable between calls.
    fn recurring_dates(&self) -> Vec<(&str, RecurringDate)>;
}

impl<T: Person + ?Sized> Person for &T {
    fn recurring_dates(&self) -> Vec<(&str, RecurringDate)> {
        (**self).recurring_dates()
    }
}

/// A recurring date of a person placed on a concrete calendar date
#[derive(Debug, Eq, PartialEq)]
pub struct Occurrence<'a, P> {
    pub person: &'a P,
    pub label: &'a str,
    pub date: Date,
}

impl<P> Clone for Occurrence<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Occurrence<'_, P> {}

/// Returns every recurring date of `people` that falls inside `window`,
/// sorted by date.  Occurrences on the same date keep the order in which
/// their people and labels were given.
///
/// Each recurring date is placed in every calendar year the window overlaps,
/// so a week running from December into January catches dates in both
/// years.
pub fn occurrences_in_window<P: Person>(
    people: &[P],
    window: ViewWindow,
) -> Result<Vec<Occurrence<'_, P>>, OutOfTimeError> {
    let bounds = window.bounds()?;
    let mut occurrences = Vec::new();
    for person in people {
        for (label, rd) in person.recurring_dates() {
            // Different years give different dates, so a date can't be
            // matched twice.
            for year in bounds.years() {
                if let Ok(date) = rd.in_year(year) {
                    if bounds.contains(date) {
                        occurrences.push(Occurrence {
                            person,
                            label,
                            date,
                        });
                    }
                }
            }
        }
    }
    occurrences.sort_by_key(|occ| occ.date);
    debug!(
        "Found {} occurrences between {} and {}",
        occurrences.len(),
        bounds.start,
        bounds.end
    );
    Ok(occurrences)
}
