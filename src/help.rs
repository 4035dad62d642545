use crate::popup::render_popup;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::Widget,
};

static KEYS: &[(&str, &str)] = &[
    ("h, LEFT", "Previous month/week/day"),
    ("l, RIGHT", "Next month/week/day"),
    ("m", "View by month"),
    ("w", "View by week"),
    ("d", "View by day"),
    ("0, HOME", "Jump to today"),
    ("g", "Input date to jump to"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

static DISMISS: &str = "Press the Any Key to dismiss.";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = KEYS
            .iter()
            .map(|(keys, action)| Line::raw(format!("{keys:<16}{action}")))
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        lines.push(Line::raw(DISMISS));
        let text = Text::from(lines).style(self.0);
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let height = u16::try_from(text.height()).unwrap_or(u16::MAX);
        let inner = render_popup(area, buf, " Commands ", width, height, self.0);
        text.render(inner, buf);
    }
}
