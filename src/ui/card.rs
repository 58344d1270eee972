//! Read-only card rendering the current form values.
//!
//! This widget never writes: it is handed a snapshot and prints the six
//! fields in their boundary string form.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::PersonalDetails;
use crate::ui::theme::{GLOBAL_BORDER, TEXT_DIM, VALUE_SET, VALUE_UNSET};

pub fn card_widget(details: &PersonalDetails) -> Paragraph<'static> {
    let rows = [
        ("name", details.name.clone()),
        ("email", details.email.clone()),
        (
            "country",
            details.country.map(|c| c.to_string()).unwrap_or_default(),
        ),
        ("mood", details.mood.to_string()),
        (
            "pricing",
            details.pricing.map(|p| p.to_string()).unwrap_or_default(),
        ),
        ("skill", details.skill.to_string()),
    ];

    let mut lines = Vec::with_capacity(rows.len() * 2);
    for (label, value) in rows {
        let value_style = if value.is_empty() {
            Style::default().fg(VALUE_UNSET)
        } else {
            Style::default().fg(VALUE_SET)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:>8}: ", label), Style::default().fg(TEXT_DIM)),
            Span::styled(value, value_style),
        ]));
        lines.push(Line::default());
    }

    Paragraph::new(lines).block(
        Block::default()
            .title(" Current Values ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
