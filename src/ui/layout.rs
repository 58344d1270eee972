use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into hint (top), body, and footer (bottom) regions.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let hint_height = area.height.min(5);
    let footer_height = 3.min(area.height.saturating_sub(hint_height));
    let hint = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: hint_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + hint_height,
        width: area.width,
        height: area.height.saturating_sub(hint_height + footer_height),
    };
    (hint, body, footer)
}

/// Split the body into the form (left) and the details card (right).
pub fn body_columns(area: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    (columns[0], columns[1])
}
