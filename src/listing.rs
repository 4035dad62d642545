use crate::theme::{
    DETAIL_STYLE, EMPTY_STYLE, SELECTED_TAB_STYLE, TAB_STYLE, TITLE_STYLE, TODAY_STYLE,
};
use anniversaries::{
    describe::{badge, day_month},
    occurrences_in_window, Couple, Granularity, OutOfTimeError, Role, Roster, ViewWindow,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use std::borrow::Cow;
use std::iter::zip;
use time::Date;

static HEADING: &str = " Birthdays";

static NOTHING_FOUND: &str = "No birthdays in the selected period";

const ACS_HLINE: char = '─';

const BADGE_WIDTH: usize = 9; // Wednesday

const NAME_WIDTH: usize = 24;

static TABS: [(Granularity, &str); 3] = [
    (Granularity::Month, " Month "),
    (Granularity::Week, " Week "),
    (Granularity::Day, " Day "),
];

/// One spouse's birthday within the current window
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry<'a> {
    pub(crate) date: Date,
    pub(crate) name: &'a str,
    pub(crate) couple: &'a Couple,
}

impl<'a> Entry<'a> {
    pub(crate) fn for_window(
        roster: &'a Roster,
        window: ViewWindow,
    ) -> Result<Vec<Entry<'a>>, OutOfTimeError> {
        Ok(occurrences_in_window(&roster.couples, window)?
            .into_iter()
            .filter_map(|occ| {
                let role = Role::from_label(occ.label)?;
                Some(Entry {
                    date: occ.date,
                    name: occ.person.name(role),
                    couple: occ.person,
                })
            })
            .collect())
    }

    fn when(&self, today: Date) -> String {
        format!(
            "{}  {:<BADGE_WIDTH$}",
            day_month(self.date),
            badge(self.date, today)
        )
    }

    fn couple_detail(&self) -> String {
        if self.couple.parish.is_empty() {
            format!("Couple #{}", self.couple.registration)
        } else {
            format!(
                "Couple #{} - {}",
                self.couple.registration, self.couple.parish
            )
        }
    }

    /// Plain-text form of the entry for non-interactive output
    pub(crate) fn summary(&self, today: Date) -> String {
        format!(
            "{}  {:<NAME_WIDTH$}  {}",
            self.when(today),
            self.name,
            self.couple_detail()
        )
    }

    fn to_line(self, today: Date) -> Line<'a> {
        let style = if self.date == today {
            TODAY_STYLE
        } else {
            Style::new()
        };
        Line::from_iter([
            Span::styled(format!(" {}  ", self.when(today)), style),
            Span::styled(format!("{:<NAME_WIDTH$}", self.name), style),
            Span::styled(format!("  {}", self.couple_detail()), DETAIL_STYLE),
        ])
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Listing<'a> {
    granularity: Granularity,
    title: String,
    today: Date,
    entries: &'a [Entry<'a>],
    empty_message: Cow<'static, str>,
}

impl<'a> Listing<'a> {
    pub(crate) fn new(
        granularity: Granularity,
        title: String,
        today: Date,
        entries: &'a [Entry<'a>],
    ) -> Self {
        Listing {
            granularity,
            title,
            today,
            entries,
            empty_message: Cow::Borrowed(NOTHING_FOUND),
        }
    }

    /// Text shown in place of the entries when there are none
    pub(crate) fn empty_message<S: Into<Cow<'static, str>>>(mut self, msg: S) -> Self {
        self.empty_message = msg.into();
        self
    }

    fn tabs(&self) -> Line<'static> {
        Line::from_iter(TABS.iter().map(|&(g, label)| {
            Span::styled(
                label,
                if g == self.granularity {
                    SELECTED_TAB_STYLE
                } else {
                    TAB_STYLE
                },
            )
        }))
    }
}

impl Widget for Listing<'_> {
    /*
     * Birthdays                              Month  Week  Day
     *                    ‹  February 2024  ›
     * ────────────────────────────────────────────────────────
     *  01/02  Thursday   João Silva                Couple #12 - São José
     *  ...
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, title, rule, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let tabs = self.tabs();
        let tabs_width = u16::try_from(tabs.width()).unwrap_or(u16::MAX);
        let [heading, tab_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(tabs_width)])
                .areas(header);
        Line::styled(HEADING, TITLE_STYLE).render(heading, buf);
        tabs.render(tab_area, buf);

        Line::styled(format!("‹  {}  ›", self.title), TITLE_STYLE)
            .centered()
            .render(title, buf);
        Line::raw(String::from(ACS_HLINE).repeat(rule.width.into())).render(rule, buf);

        if self.entries.is_empty() {
            if body.height > 1 {
                let row = Rect {
                    y: body.y + 1,
                    height: 1,
                    ..body
                };
                Line::styled(self.empty_message, EMPTY_STYLE)
                    .centered()
                    .render(row, buf);
            }
            return;
        }
        let rows = usize::from(body.height);
        let shown = if self.entries.len() > rows {
            rows.saturating_sub(1)
        } else {
            rows
        };
        for (i, entry) in zip(0u16.., self.entries.iter().take(shown)) {
            let row = Rect {
                y: body.y + i,
                height: 1,
                ..body
            };
            entry.to_line(self.today).render(row, buf);
        }
        if let Some(hidden) = self.entries.len().checked_sub(shown).filter(|&n| n > 0) {
            if let Ok(i) = u16::try_from(shown) {
                if i < body.height {
                    let row = Rect {
                        y: body.y + i,
                        height: 1,
                        ..body
                    };
                    Line::styled(format!(" … and {hidden} more"), EMPTY_STYLE).render(row, buf);
                }
            }
        }
    }
}
