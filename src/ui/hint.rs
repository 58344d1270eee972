use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT_DIM};

/// Static explainer shown above the form.
pub struct Hint;

impl Hint {
    pub fn widget() -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(TEXT_DIM);
        let lines = vec![
            Line::from(Span::styled(" Form Store Example", title_style)),
            Line::from(Span::styled(
                " A basic form whose state and update surface are owned by a single store.",
                text_style,
            )),
            Line::from(Span::styled(
                " The form writes through the store; the card on the right only reads snapshots.",
                text_style,
            )),
        ];

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
