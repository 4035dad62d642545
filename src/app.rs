use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::listing::{Entry, Listing};
use crate::theme::BASE_STYLE;
use anniversaries::{describe::window_title, Direction, Granularity, Roster, ViewWindow};
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Date;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<'a> {
    roster: &'a Roster,
    today: Date,
    window: ViewWindow,
    state: AppState,
}

impl<'a> App<'a> {
    pub(crate) fn new(roster: &'a Roster, today: Date, window: ViewWindow) -> App<'a> {
        App {
            roster,
            today,
            window,
            state: AppState::Listing,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(&mut *self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or tried to leave
    // the supported range of dates
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Listing => match key {
                KeyCode::Char('h') | KeyCode::Left => self.navigate(Direction::Previous),
                KeyCode::Char('l') | KeyCode::Right => self.navigate(Direction::Next),
                KeyCode::Char('m') => self.set_granularity(Granularity::Month),
                KeyCode::Char('w') => self.set_granularity(Granularity::Week),
                KeyCode::Char('d') => self.set_granularity(Granularity::Day),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.set_window(self.window.jump_to(self.today))
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Listing;
                true
            }
            AppState::Jumping(state) => {
                let output = match key {
                    KeyCode::Char('q' | 'g') | KeyCode::Esc => {
                        self.state = AppState::Listing;
                        return true;
                    }
                    KeyCode::Char(c) => state.handle_input(JumpToInput::Digit(c)),
                    KeyCode::Backspace | KeyCode::Delete => {
                        state.handle_input(JumpToInput::Backspace)
                    }
                    KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                    _ => JumpToOutput::Invalid,
                };
                match output {
                    JumpToOutput::Ok => true,
                    JumpToOutput::Invalid => false,
                    JumpToOutput::Jump(date) => {
                        self.state = AppState::Listing;
                        self.set_window(self.window.jump_to(date))
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn navigate(&mut self, direction: Direction) -> bool {
        match self.window.navigate(direction) {
            Ok(window) => {
                self.window = window;
                true
            }
            Err(_) => false,
        }
    }

    fn set_granularity(&mut self, granularity: Granularity) -> bool {
        self.set_window(self.window.set_granularity(granularity))
    }

    // Only windows whose bounds can be represented are ever shown
    fn set_window(&mut self, window: ViewWindow) -> bool {
        if window.bounds().is_ok() {
            self.window = window;
            true
        } else {
            false
        }
    }
}

impl Widget for &mut App<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let title = window_title(&self.window).unwrap_or_else(|e| e.to_string());
        let granularity = self.window.granularity();
        match Entry::for_window(self.roster, self.window) {
            Ok(entries) => {
                Listing::new(granularity, title, self.today, &entries).render(area, buf);
            }
            Err(e) => Listing::new(granularity, title, self.today, &[])
                .empty_message(e.to_string())
                .render(area, buf),
        }
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum AppState {
    Listing,
    Helping,
    Jumping(JumpToState),
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    static ROSTER: &str = r#"
[[couple]]
registration = 12
parish = "São José"
husband = { name = "João Silva", birthday = "1980-06-10" }
wife = { name = "Maria Silva", birthday = "1985-07-02" }

[[couple]]
registration = 7
parish = "Santa Luzia"
husband = { name = "Pedro Souza", birthday = "1979-06-03" }
wife = { name = "Ana Souza" }
"#;

    fn roster() -> Roster {
        Roster::from_toml(ROSTER).unwrap()
    }

    fn render_lines(app: &mut App<'_>) -> Vec<String> {
        let area = Rect::new(0, 0, 80, 16);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
            .content
            .chunks(usize::from(area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_month_listing() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Month, today));
        let lines = render_lines(&mut app);
        assert!(lines[0].starts_with(" Birthdays"));
        assert!(lines[0].trim_end().ends_with("Month  Week  Day"));
        assert!(lines[1].contains("‹  June 2024  ›"));
        assert!(lines[2].starts_with("────"));
        assert!(lines[3].starts_with(" 03/06  Monday     Pedro Souza"));
        assert!(lines[3].contains("Couple #7 - Santa Luzia"));
        assert!(lines[4].starts_with(" 10/06  Today!     João Silva"));
        assert!(lines[4].contains("Couple #12 - São José"));
        assert_eq!(lines[5].trim(), "");
    }

    #[test]
    fn test_empty_listing() {
        let roster = roster();
        let today = date!(2024 - 01 - 15);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Month, today));
        let lines = render_lines(&mut app);
        assert_eq!(lines[4].trim(), "No birthdays in the selected period");
    }

    #[test]
    fn test_navigate_keys() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Month, today));
        assert!(app.handle_key(KeyCode::Char('l')));
        assert_eq!(app.window.anchor(), date!(2024 - 07 - 10));
        let lines = render_lines(&mut app);
        assert!(lines[1].contains("July 2024"));
        assert!(lines[3].starts_with(" 02/07  Tuesday    Maria Silva"));
        assert!(app.handle_key(KeyCode::Left));
        assert!(app.handle_key(KeyCode::Left));
        assert_eq!(app.window.anchor(), date!(2024 - 05 - 10));
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(app.window.anchor(), today);
    }

    #[test]
    fn test_granularity_keys() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Month, today));
        assert!(app.handle_key(KeyCode::Char('w')));
        assert_eq!(app.window.granularity(), Granularity::Week);
        let lines = render_lines(&mut app);
        assert!(lines[1].contains("10 Jun - 16 Jun 2024"));
        assert!(lines[3].starts_with(" 10/06  Today!     João Silva"));
        assert_eq!(lines[4].trim(), "");
        assert!(app.handle_key(KeyCode::Char('d')));
        assert!(app.handle_key(KeyCode::Char('h')));
        assert_eq!(app.window.anchor(), date!(2024 - 06 - 09));
        let lines = render_lines(&mut app);
        assert!(lines[1].contains("09 June 2024"));
        assert_eq!(lines[4].trim(), "No birthdays in the selected period");
    }

    #[test]
    fn test_invalid_key() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Month, today));
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Listing);
    }

    #[test]
    fn test_navigate_past_end_of_time() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Day, Date::MAX));
        assert!(!app.handle_key(KeyCode::Right));
        assert_eq!(app.window.anchor(), Date::MAX);
    }

    #[test]
    fn test_granularity_past_end_of_time() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Day, Date::MAX));
        assert!(!app.handle_key(KeyCode::Char('w')));
        assert_eq!(app.window.anchor(), Date::MAX);
        assert_eq!(app.window.granularity(), Granularity::Day);
        assert!(app.handle_key(KeyCode::Char('m')));
        assert_eq!(app.window.granularity(), Granularity::Month);
    }

    #[test]
    fn test_jump_past_end_of_time() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Week, today));
        assert!(app.handle_key(KeyCode::Char('g')));
        for c in "99991231".chars() {
            assert!(app.handle_key(KeyCode::Char(c)));
        }
        assert!(!app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Listing);
        assert_eq!(app.window.anchor(), today);
    }

    #[test]
    fn test_unrepresentable_window_shows_error() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Week, Date::MAX));
        let lines = render_lines(&mut app);
        assert!(lines[1].contains("reached the end of time"));
        assert_eq!(lines[4].trim(), "reached the end of time");
        assert!(!lines
            .iter()
            .any(|ln| ln.contains("No birthdays in the selected period")));
    }

    #[test]
    fn test_help() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Month, today));
        assert!(app.handle_key(KeyCode::Char('?')));
        let lines = render_lines(&mut app);
        assert!(lines.iter().any(|ln| ln.contains(" Commands ")));
        assert!(lines
            .iter()
            .any(|ln| ln.contains("Press the Any Key to dismiss.")));
        assert!(app.handle_key(KeyCode::Char('z')));
        assert_eq!(app.state, AppState::Listing);
    }

    #[test]
    fn test_jump_to_date() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Month, today));
        assert!(app.handle_key(KeyCode::Char('g')));
        let lines = render_lines(&mut app);
        assert!(lines.iter().any(|ln| ln.contains("Jump To…")));
        for c in "20250702".chars() {
            assert!(app.handle_key(KeyCode::Char(c)));
        }
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Listing);
        assert_eq!(app.window.anchor(), date!(2025 - 07 - 02));
        assert_eq!(app.window.granularity(), Granularity::Month);
    }

    #[test]
    fn test_cancel_jump() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Month, today));
        assert!(app.handle_key(KeyCode::Char('g')));
        assert!(app.handle_key(KeyCode::Char('2')));
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Listing);
        assert_eq!(app.window.anchor(), today);
    }

    #[test]
    fn test_quit() {
        let roster = roster();
        let today = date!(2024 - 06 - 10);
        let mut app = App::new(&roster, today, ViewWindow::new(Granularity::Month, today));
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.quitting());
    }
}
