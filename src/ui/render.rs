use crate::todo::Filter;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::theme::{ACCENT, DONE_TEXT, GLOBAL_BORDER, SELECTION_BG, SEPARATOR, TEXT};
use ratatui::layout::Position;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new().widget(state), header);

    let (entry, tabs, list) = split_body(body);

    // Draft entry line, cursor at the end of the text
    let draft = state.draft.title.clone();
    let entry_widget = Paragraph::new(Line::from(Span::styled(
        draft.clone(),
        Style::default().fg(TEXT),
    )))
    .block(
        Block::default()
            .title(Span::styled("New todo", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(entry_widget, entry);
    if entry.width > 2 && entry.height > 2 {
        let max_col = entry.width.saturating_sub(3) as usize;
        let col = draft.chars().count().min(max_col) as u16;
        frame.set_cursor_position(Position::new(entry.x + 1 + col, entry.y + 1));
    }

    frame.render_widget(filter_tabs(state.filter), tabs);
    frame.render_widget(todo_list(app, list.height), list);

    frame.render_widget(Footer::new().widget(footer), footer);
}

fn filter_tabs(active: Filter) -> Paragraph<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (idx, filter) in Filter::ALL.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(SEPARATOR)));
        }
        let style = if filter == active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT).add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(filter.label(), style));
    }
    Paragraph::new(Line::from(spans))
}

fn todo_list(app: &App, height: u16) -> Paragraph<'static> {
    let state = app.state();
    let mut lines: Vec<Line> = Vec::new();

    for (idx, todo) in state.visible().enumerate() {
        let mark = if todo.completed { "[x] " } else { "[ ] " };
        let style = if todo.completed {
            Style::default()
                .fg(DONE_TEXT)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(TEXT)
        };
        let mut line = Line::from(vec![
            Span::styled(format!(" {mark}"), Style::default().fg(TEXT)),
            Span::styled(todo.title.clone(), style),
        ]);
        if idx == app.selection() {
            line = line.style(Style::default().bg(SELECTION_BG));
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            " nothing to show",
            Style::default().fg(TEXT).add_modifier(Modifier::DIM),
        )));
    }

    // Keep the selected row inside the viewport
    let inner_height = height.saturating_sub(2) as usize;
    let scroll = if inner_height > 0 {
        app.selection().saturating_sub(inner_height - 1) as u16
    } else {
        0
    };

    Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
