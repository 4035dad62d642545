mod app;
mod help;
mod jumpto;
mod listing;
mod popup;
mod theme;
use crate::app::App;
use crate::listing::Entry;
use anniversaries::{describe::window_title, Granularity, Roster, ViewWindow};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use log::info;
use ratatui::DefaultTerminal;
use std::io::{self, Write};
use std::path::PathBuf;
use time::{
    format_description::FormatItem, macros::format_description, Date, OffsetDateTime, Weekday,
};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        roster: PathBuf,
        date: Option<Date>,
        granularity: Granularity,
        week_start: Weekday,
        print: bool,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut roster = None;
        let mut date = None;
        let mut granularity = Granularity::default();
        let mut week_start = Weekday::Monday;
        let mut print = false;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('g') | Arg::Long("granularity") => {
                    granularity = parser.value()?.parse()?;
                }
                Arg::Short('s') | Arg::Long("week-start") => {
                    week_start = parser.value()?.parse_with(parse_weekday)?;
                }
                Arg::Short('p') | Arg::Long("print") => print = true,
                Arg::Value(value) if roster.is_none() => roster = Some(PathBuf::from(value)),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        let roster = roster.ok_or("missing roster file argument")?;
        Ok(Command::Run {
            roster,
            date,
            granularity,
            week_start,
            print,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                roster,
                date,
                granularity,
                week_start,
                print,
            } => {
                let roster = Roster::load(&roster)
                    .with_context(|| format!("failed to load roster {}", roster.display()))?;
                info!("Loaded {} couples", roster.len());
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let window = ViewWindow::new(granularity, date.unwrap_or(today))
                    .with_week_start(week_start);
                if print {
                    print_window(&mut io::stdout().lock(), &roster, window, today)
                } else {
                    with_terminal(|mut terminal| {
                        terminal.hide_cursor().context("failed to hide cursor")?;
                        App::new(&roster, today, window).run(terminal)?;
                        Ok(())
                    })
                }
            }
            Command::Help => {
                println!("Usage: anniversaries [<options>] <roster.toml> [YYYY-MM-DD]");
                println!();
                println!("Browse a parish roster's birthdays by month, week, or day");
                println!();
                println!("Options:");
                println!("  -g, --granularity <month|week|day>");
                println!("                    Size of the window to show [default: month]");
                println!("  -s, --week-start <weekday>");
                println!("                    First day of the week [default: monday]");
                println!("  -p, --print       Print the window's birthdays and exit");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    Command::from_parser(Parser::from_env())?.run()
}

fn print_window<W: Write>(
    out: &mut W,
    roster: &Roster,
    window: ViewWindow,
    today: Date,
) -> anyhow::Result<()> {
    let title = window_title(&window)?;
    let entries = Entry::for_window(roster, window)?;
    writeln!(out, "{title}")?;
    if entries.is_empty() {
        writeln!(out, "No birthdays in the selected period")?;
    }
    for entry in entries {
        writeln!(out, "{}", entry.summary(today))?;
    }
    Ok(())
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

fn parse_weekday(s: &str) -> Result<Weekday, String> {
    match s.to_ascii_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Monday),
        "tuesday" | "tue" => Ok(Weekday::Tuesday),
        "wednesday" | "wed" => Ok(Weekday::Wednesday),
        "thursday" | "thu" => Ok(Weekday::Thursday),
        "friday" | "fri" => Ok(Weekday::Friday),
        "saturday" | "sat" => Ok(Weekday::Saturday),
        "sunday" | "sun" => Ok(Weekday::Sunday),
        _ => Err(format!("invalid weekday {s:?}")),
    }
}
