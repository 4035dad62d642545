use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const TAB_STYLE: Style = Style::new().fg(Color::DarkGray).bg(Color::Black);

pub(crate) const SELECTED_TAB_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);

pub(crate) const TODAY_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const DETAIL_STYLE: Style = Style::new().fg(Color::Gray).bg(Color::Black);

pub(crate) const EMPTY_STYLE: Style = DETAIL_STYLE.add_modifier(Modifier::ITALIC);

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
