//! Rendering - draws the roadmap, skill list, and content panes

use crate::curriculum::model::ContentRecord;
use crate::resolver::{Resolution, COMING_SOON_NOTICE};
use crate::ui::state::{App, Focus};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const ACCENT: Color = Color::Cyan;
const DIM: Color = Color::DarkGray;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_step_bar(frame, app, chunks[0]);
    draw_body(frame, app, chunks[1]);
    draw_help_line(frame, app, chunks[2]);
}

fn draw_step_bar(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.controller.step();
    let steps = app.controller.registry().steps();

    let mut spans = Vec::new();
    for s in steps {
        let style = if s.id == step.id {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        spans.push(Span::styled(format!(" {} ", s.id), style));
    }

    let text = Text::from(vec![
        Line::from(spans),
        Line::from(Span::styled(
            format!("Step {}: {}", step.id, step.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ]);

    let bar = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("AI Roadmap"))
        .wrap(Wrap { trim: true });
    frame.render_widget(bar, area);
}

fn draw_body(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(40)])
        .split(area);

    draw_skill_list(frame, app, columns[0]);
    draw_content(frame, app, columns[1]);
}

fn draw_skill_list(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.controller.step();
    let items: Vec<ListItem> = step
        .skills
        .iter()
        .map(|skill| ListItem::new(*skill))
        .collect();

    let border_style = if app.focus == Focus::Skills {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Skills"),
        )
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.controller.skill_index()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.resolution() {
        Resolution::Dedicated(unit) => {
            let record = unit.content();
            if let Some(tool) = unit.interactive_tool() {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(8), Constraint::Length(9)])
                    .split(area);
                draw_record(frame, record, rows[0]);
                draw_commit_tool(frame, app, tool.title, tool.description, rows[1]);
            } else {
                draw_record(frame, record, area);
            }
        }
        Resolution::Generic(record) => draw_record(frame, record, area),
        Resolution::ComingSoon { title, description } => {
            let lines = vec![
                Line::from(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(description),
                Line::from(""),
                Line::from(Span::styled(
                    COMING_SOON_NOTICE,
                    Style::default().fg(Color::Yellow),
                )),
            ];
            let panel = Paragraph::new(Text::from(lines))
                .block(Block::default().borders(Borders::ALL).title("Details"))
                .wrap(Wrap { trim: true });
            frame.render_widget(panel, area);
        }
    }
}

fn draw_record(frame: &mut Frame, record: &ContentRecord, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            record.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(record.description),
        Line::from(""),
    ];

    for point in record.learning_points {
        lines.push(Line::from(Span::styled(
            point.title,
            Style::default().fg(ACCENT),
        )));
        lines.push(Line::from(point.description));
        for example in point.examples {
            if !example.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    example.description,
                    Style::default().fg(DIM),
                )));
            }
            for code_line in example.code.lines() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", code_line),
                    Style::default().fg(Color::Green),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    let panel = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

fn draw_commit_tool(frame: &mut Frame, app: &App, title: &str, description: &str, area: Rect) {
    let border_style = if app.focus == Focus::CommitInput {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };

    let input_line = if app.busy {
        Line::from(Span::styled("Generating...", Style::default().fg(DIM)))
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::raw(app.commit_input.as_str()),
            Span::styled("_", Style::default().fg(ACCENT)),
        ])
    };

    let mut lines = vec![Line::from(description), Line::from(""), input_line];

    if let Some(message) = &app.commit_error {
        lines.push(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(message) = &app.commit_output {
        lines.push(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Green),
        )));
    }

    let tool = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title.to_string()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(tool, area);
}

fn draw_help_line(frame: &mut Frame, app: &App, area: Rect) {
    let help = match app.focus {
        Focus::CommitInput => "Enter: generate | Esc: back | Ctrl-C: quit",
        _ => "\u{2190}/\u{2192}: step | \u{2191}/\u{2193}: skill | 1-0: jump | Tab: focus | q: quit",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(DIM))),
        area,
    );
}
