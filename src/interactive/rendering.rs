//! TUI rendering with ratatui
//!
//! Views for the interactive scramble scorer.

use super::app::{App, Field, MessageStyle};
use crate::core::Classification;
use crate::output::formatters::{position_marks, segment_kind_name, segmentation};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, BorderType, Borders, List, ListItem, Paragraph, Wrap,
    },
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Inputs
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Analysis and history
            Constraint::Percentage(40), // Stats and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_inputs(f, app, chunks[2]);
    render_help(f, chunks[3]);
}

const fn label_color(classification: Classification) -> Color {
    match classification {
        Classification::Not => Color::DarkGray,
        Classification::Poor => Color::Red,
        Classification::Fair => Color::Yellow,
        Classification::Hard => Color::Green,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔀 WORD SCRAMBLE SCORER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(65), // Current analysis
            Constraint::Percentage(35), // History
        ])
        .split(area);

    render_analysis(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_analysis(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Analysis ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(result) = &app.current else {
        let paragraph = Paragraph::new("Nothing scored yet").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let assessment = &result.assessment;
    let scrambled = result.pair.scrambled();
    let classification = assessment.classification;
    let looks_real = if result.trace.looks_real() {
        Span::styled("yes", Style::default().fg(Color::Green))
    } else {
        Span::styled("no", Style::default().fg(Color::Red))
    };

    let mut content = vec![
        Line::from(vec![
            Span::raw("Verdict:   "),
            Span::styled(
                classification.label().to_uppercase(),
                Style::default()
                    .fg(label_color(classification))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(result.message.clone()),
        Line::from(""),
        Line::from(vec![Span::raw("Looks real: "), looks_real]),
        Line::from(format!("Segments:  {}", segmentation(scrambled, &result.trace))),
    ];

    for segment in &result.trace.segments {
        content.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:<4}", segment.text(scrambled)),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                segment_kind_name(segment.kind, segment.class),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    if assessment.not_reason.is_none() {
        content.push(Line::from(""));
        content.push(Line::from(format!(
            "In place:  {}",
            position_marks(scrambled, &assessment.matching_positions)
        )));
        content.push(Line::from(format!(
            "Overlap:   {}",
            if assessment.positional_overlap {
                "yes"
            } else {
                "no"
            }
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(8)
        .enumerate()
        .map(|(i, entry)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!(
                    "{}: {} / {} ",
                    app.history.len() - i,
                    entry.scrambled,
                    entry.word
                )),
                Span::styled(
                    entry.classification.label(),
                    Style::default().fg(label_color(entry.classification)),
                ),
            ]))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Label distribution
            Constraint::Percentage(45), // Messages
        ])
        .split(area);

    render_distribution(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let bars: Vec<Bar> = Classification::ALL
        .iter()
        .map(|&classification| {
            Bar::default()
                .label(Line::from(classification.label()))
                .value(app.stats.counts[classification.index()] as u64)
                .style(Style::default().fg(label_color(classification)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!(" Scored: {} ", app.stats.total))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(2);

    f.render_widget(chart, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_inputs(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_input(
        f,
        " Scramble ",
        &app.scrambled_input,
        app.focus == Field::Scrambled,
        chunks[0],
    );
    render_input(
        f,
        " Word ",
        &app.word_input,
        app.focus == Field::Word,
        chunks[1],
    );
}

fn render_input(f: &mut Frame, title: &str, content: &str, focused: bool, area: Rect) {
    let (color, border) = if focused {
        (Color::Yellow, BorderType::Double)
    } else {
        (Color::DarkGray, BorderType::Plain)
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(border)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter: Score | Tab/Space: Switch field | Esc: Clear | Ctrl-L: Reset | Ctrl-C/Ctrl-Q: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
