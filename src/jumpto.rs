use crate::popup::render_popup;
use crate::theme::{
    jumpto::{READY_ENTER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use crate::YMD_FMT;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{StatefulWidget, Widget},
};
use time::Date;

/// Shape of the input, also shown in place of digits not yet typed
const TEMPLATE: &str = "YYYY-MM-DD";

/// Positions in `TEMPLATE` that hold a separator rather than a digit
const SEPARATORS: [usize; 2] = [4, 7];

const INNER_WIDTH: u16 = 13;
const INNER_HEIGHT: u16 = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpTo;

impl StatefulWidget for JumpTo {
    type State = JumpToState;

    /*
     * .................
     * .┌─ Jump To… ──┐.
     * .│             │.
     * .│  YYYY-MM-DD │.
     * .│             │.
     * .│   [ENTER]   │.
     * .└─────────────┘.
     * .................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = render_popup(area, buf, " Jump To… ", INNER_WIDTH, INNER_HEIGHT, BASE_STYLE);
        state.to_text().render(inner, buf);
    }
}

/// Digits typed so far, with separators inserted as the input grows
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct JumpToState {
    input: String,
}

impl JumpToState {
    pub(crate) fn new() -> JumpToState {
        JumpToState::default()
    }

    fn is_complete(&self) -> bool {
        self.input.len() == TEMPLATE.len()
    }

    fn to_text(&self) -> Text<'static> {
        let placeholder = TEMPLATE.get(self.input.len()..).unwrap_or_default();
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            Line::from_iter([
                Span::styled(self.input.clone(), BASE_STYLE),
                Span::styled(placeholder, UNFILLED_CELL_STYLE),
            ]),
            Line::styled("", BASE_STYLE),
            // Only the "[ENTER]" text, not its centering padding, is
            // underlined
            Line::from(Span::styled(
                "[ENTER]",
                if self.is_complete() {
                    READY_ENTER_STYLE
                } else {
                    BASE_STYLE
                },
            )),
        ])
        .centered()
    }

    pub(crate) fn handle_input(&mut self, input: JumpToInput) -> JumpToOutput {
        match input {
            JumpToInput::Digit(d) if d.is_ascii_digit() && !self.is_complete() => {
                if SEPARATORS.contains(&self.input.len()) {
                    self.input.push('-');
                }
                self.input.push(d);
                JumpToOutput::Ok
            }
            JumpToInput::Backspace if !self.input.is_empty() => {
                self.input.pop();
                if self.input.ends_with('-') {
                    self.input.pop();
                }
                JumpToOutput::Ok
            }
            JumpToInput::Enter if self.is_complete() => match Date::parse(&self.input, YMD_FMT) {
                Ok(date) => JumpToOutput::Jump(date),
                Err(_) => JumpToOutput::Invalid,
            },
            _ => JumpToOutput::Invalid,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToInput {
    Digit(char),
    Backspace,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToOutput {
    Ok,
    Invalid,
    Jump(Date),
}
