//! The form widget: six input rows writing through the store.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::{PersonalDetails, Pricing, SKILL_MAX};
use crate::ui::focus::Field;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT, TEXT_DIM};

pub fn form_widget(details: &PersonalDetails, focused: Field) -> Paragraph<'static> {
    let mut lines = Vec::with_capacity(Field::ALL.len() * 2);
    for field in Field::ALL {
        lines.push(field_line(details, field, field == focused));
        lines.push(Line::default());
    }

    Paragraph::new(lines).block(
        Block::default()
            .title(" Personal Details ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn field_line(details: &PersonalDetails, field: Field, focused: bool) -> Line<'static> {
    let marker_style = Style::default().fg(ACCENT);
    let label_style = if focused {
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };

    let mut spans = vec![
        Span::styled(if focused { " ❯ " } else { "   " }, marker_style),
        Span::styled(format!("{:<16}", field.label()), label_style),
    ];
    spans.extend(field_value(details, field, focused));
    Line::from(spans)
}

fn field_value(details: &PersonalDetails, field: Field, focused: bool) -> Vec<Span<'static>> {
    let text_style = Style::default().fg(TEXT);
    let dim_style = Style::default().fg(TEXT_DIM);

    match field {
        Field::Name => text_input(&details.name, focused),
        Field::Email => text_input(&details.email, focused),
        Field::Country => {
            let value = match details.country {
                Some(country) => Span::styled(country.label().to_string(), text_style),
                None => Span::styled("Choose country...", dim_style),
            };
            vec![
                Span::styled("‹ ", dim_style),
                value,
                Span::styled(" ›", dim_style),
            ]
        }
        Field::Mood => {
            let mark = if details.mood { "[x]" } else { "[ ]" };
            vec![Span::styled(mark.to_string(), text_style)]
        }
        Field::Pricing => {
            let mut spans = Vec::new();
            for pricing in Pricing::ALL {
                let selected = details.pricing == Some(pricing);
                let mark = if selected { "(•) " } else { "( ) " };
                let style = if selected { text_style } else { dim_style };
                spans.push(Span::styled(
                    format!("{}{}  ", mark, pricing.label()),
                    style,
                ));
            }
            spans
        }
        Field::Skill => {
            let filled = details.skill.min(SKILL_MAX) as usize;
            let empty = SKILL_MAX.saturating_sub(details.skill) as usize;
            vec![
                Span::styled("▰".repeat(filled), Style::default().fg(ACCENT)),
                Span::styled("▱".repeat(empty), dim_style),
                Span::styled(format!(" {}/{}", details.skill, SKILL_MAX), text_style),
            ]
        }
    }
}

fn text_input(value: &str, focused: bool) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        value.to_string(),
        Style::default().fg(TEXT),
    )];
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::default().fg(ACCENT).add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    spans
}
