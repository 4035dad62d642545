use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    widgets::{Block, Clear, Widget},
};

/// A bordered box of the given inner size centered in `area`, with a blank
/// column on either side separating it from whatever is drawn beneath.
/// Returns the area inside the border.
pub(crate) fn render_popup(
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    inner_width: u16,
    inner_height: u16,
    style: Style,
) -> Rect {
    let width = inner_width.min(area.width).saturating_add(2);
    let height = inner_height.min(area.height).saturating_add(2);
    let [boxed] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
    let [boxed] = Layout::vertical([height]).flex(Flex::Center).areas(boxed);
    let padded = Rect {
        x: boxed.x.saturating_sub(1),
        width: boxed.width.saturating_add(2),
        ..boxed
    }
    .intersection(area);
    Clear.render(padded, buf);
    Block::new().style(style).render(padded, buf);
    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .style(style);
    let inner = block.inner(boxed);
    block.render(boxed, buf);
    inner
}
