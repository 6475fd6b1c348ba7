use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{app::AppState, ui::theme::Theme};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // running total
            Constraint::Length(1), // filter bar
            Constraint::Min(0),    // expense list
            Constraint::Length(1), // key hints
        ])
        .split(area);

    render_header(frame, layout[0], state, &theme);
    render_filter_bar(frame, layout[1], state, &theme);
    render_list(frame, layout[2], state, &theme);
    render_hints(frame, layout[3], &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    // The total covers the whole collection, whatever the filter shows,
    // and is recomputed from the store on every frame.
    let total = state.expenses.total();
    let line = Line::from(vec![
        Span::styled("Total Expenses", Style::default().fg(theme.dim)),
        Span::raw(": "),
        Span::styled(
            format!("{}{total}", state.currency),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Expense Tracker");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_filter_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut line = vec![
        Span::styled("Filter", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}", state.filter.label())),
    ];

    if let Some(err) = &state.list_error {
        line.push(Span::raw("   "));
        line.push(Span::styled(err.as_str(), Style::default().fg(theme.error)));
    }

    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let visible = state.visible();

    if visible.is_empty() {
        let empty = Paragraph::new(Line::from("No expenses in this category."))
            .style(Style::default().fg(theme.dim))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let items = visible
        .iter()
        .map(|record| {
            let date = record
                .date
                .with_timezone(&state.timezone)
                .format("%d %b %Y")
                .to_string();
            let amount = format!("{}{}", state.currency, record.amount);
            let text = format!(
                "{date}  {name:<24} {category:<10} {amount:>12}",
                name = record.name,
                category = record.category.as_str(),
            );
            ListItem::new(Line::from(text))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_hints(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let hints = "a add   e edit   d delete   f filter   r reload   j/k move   q quit";
    frame.render_widget(
        Paragraph::new(Line::from(hints)).style(Style::default().fg(theme.dim)),
        area,
    );
}
