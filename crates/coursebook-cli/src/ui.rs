use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::{app::App, render::accent_color};

pub fn draw(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(f.area());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let course = app.course();
    let accent = accent_color(&course.color);
    let sidebar_title = format!("{} {}", course.icon, course.name);
    let (position, total) = app.navigator().progress();
    let content_title = format!("Lesson {position} / {total}");

    // Lesson list
    let items: Vec<ListItem> = course
        .lessons
        .iter()
        .map(|lesson| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{}. {}", lesson.id, lesson.title),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("   {}", lesson.desc),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ])
        })
        .collect();
    let lessons = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(sidebar_title)
                .border_style(Style::default().fg(accent)),
        )
        .highlight_style(Style::default().bg(accent).fg(Color::Black));
    f.render_stateful_widget(lessons, columns[0], &mut app.lesson_list_state);

    // Lesson body
    let content = app.content_lines();
    let inner_width = usize::from(columns[1].width.saturating_sub(2)).max(1);
    let wrapped_height: usize = content
        .iter()
        .map(|line| line.width().div_ceil(inner_width).max(1))
        .sum();
    app.clamp_scroll(wrapped_height, columns[1].height.saturating_sub(2));
    let body = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(content_title))
        .wrap(Wrap { trim: false })
        .scroll((app.navigator().scroll_offset(), 0));
    f.render_widget(body, columns[1]);

    // Help line
    let mut help = vec![Span::raw("q: Quit | j/k: Select | ")];
    if let Some(previous) = app.previous_label() {
        help.push(Span::raw(format!("{previous} | ")));
    }
    help.push(Span::styled(app.forward_label(), Style::default().fg(accent)));
    help.push(Span::raw(" | Tab: Course | PgUp/PgDn: Scroll"));
    f.render_widget(Paragraph::new(Line::from(help)), rows[1]);
}
