use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{AppState, EntryField},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let entry = &state.entry;

    let title = if entry.editing.is_some() {
        "Edit Expense"
    } else {
        "Add New Expense"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // amount
            Constraint::Length(3), // category
            Constraint::Length(2), // validation message
            Constraint::Min(0),
            Constraint::Length(1), // key hints
        ])
        .split(inner);

    render_field(
        frame,
        rows[0],
        "Expense Name",
        &entry.draft.name,
        entry.focus == EntryField::Name,
        false,
        &theme,
    );
    render_field(
        frame,
        rows[1],
        "Amount",
        &entry.draft.amount,
        entry.focus == EntryField::Amount,
        false,
        &theme,
    );

    let (category_text, placeholder) = match entry.draft.category {
        Some(category) => (category.as_str(), false),
        None => ("Select a category", true),
    };
    render_field(
        frame,
        rows[2],
        "Category",
        category_text,
        entry.focus == EntryField::Category,
        placeholder,
        &theme,
    );

    if let Some(message) = &entry.message {
        frame.render_widget(
            Paragraph::new(Line::from(message.as_str())).style(Style::default().fg(theme.error)),
            rows[3],
        );
    }

    let hints = "Tab switch field   ↑/↓ pick category   Enter save   Esc cancel";
    frame.render_widget(
        Paragraph::new(Line::from(hints)).style(Style::default().fg(theme.dim)),
        rows[5],
    );
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    placeholder: bool,
    theme: &Theme,
) {
    let border = if focused { theme.accent } else { theme.dim };
    let text = if placeholder { theme.dim } else { theme.text };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(label)
        .border_style(Style::default().fg(border));
    frame.render_widget(
        Paragraph::new(Line::from(value))
            .style(Style::default().fg(text))
            .block(block),
        area,
    );
}
