use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::bank::OPTION_LETTERS;
use crate::scoring::ReviewItem;
use crate::tui::app::{App, InputMode};
use crate::tui::theme::ThemeColors;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 10 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Progress(1) + Card/Panel(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_progress(frame, chunks[1], app);

    if app.session.panel_open() {
        let columns =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(38)]).split(chunks[2]);
        render_card(frame, columns[0], app);
        render_panel(frame, columns[1], app);
    } else {
        render_card(frame, chunks[2], app);
    }

    render_status_bar(frame, chunks[3], app);

    match app.input_mode {
        InputMode::Results => render_results_popup(frame, app),
        InputMode::Help => render_help_popup(frame, app),
        InputMode::Quiz => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Quizdeck",
        Style::default().fg(app.theme.title_color).bold(),
    )];

    // Bank label on the right
    let left_len = "Quizdeck".len();
    let right_len = app.bank_label.len();
    let padding_len = (area.width as usize).saturating_sub(left_len + right_len);
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(
        app.bank_label.clone(),
        Style::default().fg(app.theme.muted),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let total = app.session.question_count();

    let line = if total == 0 {
        Line::from(Span::styled(
            "No questions loaded",
            Style::default().fg(app.theme.muted),
        ))
    } else {
        let text = format!("Question {} of {}  ", app.session.current_index() + 1, total);
        let bar_width = (area.width as usize)
            .saturating_sub(text.len() + 1)
            .min(24);
        let filled = bar_width * (app.session.current_index() + 1) / total;

        Line::from(vec![
            Span::styled(text, Style::default().fg(app.theme.muted)),
            Span::styled(
                "█".repeat(filled),
                Style::default().fg(app.theme.bar_filled),
            ),
            Span::styled(
                "░".repeat(bar_width - filled),
                Style::default().fg(app.theme.bar_empty),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_card(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.session.current_question() else {
        let msg = Paragraph::new(
            "No questions found. Add some to ~/.config/quizdeck/questions.yaml or pass --questions.",
        )
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(msg, area);
        return;
    };

    let selected = app.session.selection();
    let marks = app.session.current_marks();

    let mut lines = vec![
        Line::from(Span::styled(question.text.clone(), app.theme.question_style)),
        Line::default(),
    ];

    for (i, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(i) { "(•)" } else { "( )" };

        let mut option_style = if selected == Some(i) {
            app.theme.selected_style
        } else {
            Style::default()
        };
        if let Some(color) = marks.and_then(|m| app.theme.mark_color(m[i])) {
            option_style = option_style.fg(color);
        }

        lines.push(Line::from(vec![
            Span::raw(format!(" {} ", marker)),
            Span::styled(
                format!("{}. ", OPTION_LETTERS[i]),
                Style::default().fg(app.theme.option_letter),
            ),
            Span::styled(option.clone(), option_style),
        ]));
    }

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Card "));
    frame.render_widget(card, area);
}

fn render_panel(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.session.stats();
    let total = app.session.question_count();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Answered ", Style::default().fg(app.theme.muted)),
            Span::raw(format!("{}/{}", stats.answered, total)),
            Span::styled("  Correct ", Style::default().fg(app.theme.muted)),
            Span::styled(
                stats.correct.to_string(),
                Style::default().fg(app.theme.correct),
            ),
            Span::styled("  Accuracy ", Style::default().fg(app.theme.muted)),
            Span::raw(format!("{}%", stats.accuracy_pct)),
        ]),
        Line::default(),
    ];

    let items = app.session.quick_review();
    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing answered yet.",
            Style::default().fg(app.theme.muted),
        )));
    } else {
        for item in &items {
            lines.push(quick_review_line(item, &app.theme));
        }
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Study Panel ")
                .border_style(Style::default().fg(app.theme.panel_border)),
        );
    frame.render_widget(panel, area);
}

fn quick_review_line(item: &ReviewItem, theme: &ThemeColors) -> Line<'static> {
    let picked = item
        .user_option
        .map(|i| OPTION_LETTERS[i].to_string())
        .unwrap_or_else(|| "—".to_string());

    Line::from(vec![
        Span::styled(
            format!("Q{}. ", item.question_index + 1),
            Style::default().fg(theme.muted),
        ),
        Span::styled(
            item.status_label().to_string(),
            Style::default().fg(theme.status_color(item.status)),
        ),
        Span::raw(format!(
            "  picked {}, answer {}",
            picked, OPTION_LETTERS[item.correct_option]
        )),
    ])
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Failed") {
            app.theme.flash_error
        } else {
            app.theme.flash_success
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match app.input_mode {
            InputMode::Quiz => &[
                ("1-4", ":answer "),
                ("←/→", ":move "),
                ("s", ":submit "),
                ("v", ":reveal "),
                ("p", ":panel "),
                ("R", ":restart "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            InputMode::Results => &[("j/k", ":scroll "), ("Esc", ":close "), ("R", ":restart")],
            InputMode::Help => &[("any key", ":close")],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(app.theme.status_key_color),
            ));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(app.theme.status_bar_bg)),
        area,
    );
}

fn render_results_popup(frame: &mut Frame, app: &mut App) {
    let review = app.session.full_review();
    let area = centered_rect(frame.area(), 80, 80);
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(review.score_line.clone(), app.theme.popup_title)),
        Line::default(),
    ];
    for item in &review.items {
        lines.push(Line::from(vec![
            Span::styled(
                format!("Q{}. ", item.question_index + 1),
                Style::default().fg(app.theme.muted),
            ),
            Span::raw(item.question_text.clone()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", item.status_label()),
            Style::default().fg(app.theme.status_color(item.status)),
        )));
        lines.push(Line::from(Span::raw(format!(
            "   Your answer: {}",
            item.user_answer_label()
        ))));
        lines.push(Line::from(Span::raw(format!(
            "   Correct answer: {}",
            item.correct_answer_label()
        ))));
        lines.push(Line::default());
    }

    // Keep the scroll inside the content
    let max_scroll = (lines.len() as u16).saturating_sub(area.height.saturating_sub(2));
    if app.review_scroll > max_scroll {
        app.review_scroll = max_scroll;
    }

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.review_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Results ")
                .border_style(Style::default().fg(app.theme.popup_border)),
        );
    frame.render_widget(popup, area);
}

fn render_help_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.area(), 60, 60);
    frame.render_widget(Clear, area);

    let keys = [
        ("1-4 / a-d", "answer the current question"),
        ("← → / h l", "previous / next question"),
        ("s / Enter", "submit anytime and review"),
        ("v", "reveal correct answer on the card"),
        ("p / Tab", "toggle the study panel"),
        ("R", "restart and clear saved progress"),
        ("q", "quit (progress is saved)"),
    ];

    let lines: Vec<Line> = keys
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<12}", key),
                    Style::default().fg(app.theme.status_key_color),
                ),
                Span::raw(*desc),
            ])
        })
        .collect();

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(app.theme.popup_border)),
    );
    frame.render_widget(popup, area);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);

    horizontal[1]
}
