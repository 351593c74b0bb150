//! Result view: renders the submission state.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::application::SubmissionState;
use crate::domain::{suggestions_for, PredictionResult, Urgency};
use crate::tui::styles::MedicalTheme;

/// Render the result area for the current submission state.
///
/// `scroll` offsets the suggestion list; it is reset by the app on every
/// transition into a successful result so the classification is in view.
pub fn render_result(
    f: &mut Frame,
    area: Rect,
    state: &SubmissionState,
    scroll: u16,
    received_at: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_result_header(f, chunks[0]);

    match state {
        SubmissionState::Idle => render_placeholder(f, chunks[1]),
        SubmissionState::Submitting { .. } => render_loading(f, chunks[1]),
        SubmissionState::Succeeded(result) => {
            render_classification(f, chunks[1], result, scroll, received_at);
        }
        SubmissionState::Failed { message } => render_failure(f, chunks[1], message),
    }

    render_result_footer(f, chunks[2], state);
}

fn render_result_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Prediction Results", MedicalTheme::title()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_placeholder(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("📊", MedicalTheme::text())),
        Line::from(Span::styled(
            "Prediction Results",
            MedicalTheme::subtitle(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Fill in the patient information and press Enter to see results here.",
            MedicalTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_loading(f: &mut Frame, area: Rect) {
    // No stale content ever shows alongside the loading indicator; the
    // state machine guarantees the prior result was cleared on submit.
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Analyzing...", MedicalTheme::subtitle())),
        Line::from(""),
        Line::from(Span::styled(
            "Processing patient data...",
            MedicalTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_failure(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("⚠ Connection Error", MedicalTheme::danger())),
        Line::from(""),
        Line::from(Span::styled(message, MedicalTheme::text())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(MedicalTheme::danger()),
    );

    f.render_widget(content, area);
}

fn render_classification(
    f: &mut Frame,
    area: Rect,
    result: &PredictionResult,
    scroll: u16,
    received_at: Option<&str>,
) {
    let bundle = suggestions_for(result);
    let urgency_style = MedicalTheme::urgency(bundle.urgency);

    let border_style = match bundle.urgency {
        Urgency::High => MedicalTheme::danger(),
        Urgency::Low => MedicalTheme::border_focused(),
    };
    let block = Block::default()
        .title(Span::styled(" Classification ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Headline + message
            Constraint::Length(3), // Confidence gauge
            Constraint::Min(0),    // Suggestions
        ])
        .margin(1)
        .split(inner);

    let mut headline = vec![Line::from(Span::styled(
        result.headline(),
        urgency_style.add_modifier(ratatui::style::Modifier::BOLD),
    ))];
    headline.push(Line::from(Span::styled(
        result.message.clone(),
        MedicalTheme::text_secondary(),
    )));
    if let Some(ts) = received_at {
        headline.push(Line::from(Span::styled(
            format!("Received {ts}"),
            MedicalTheme::text_muted(),
        )));
    }
    f.render_widget(
        Paragraph::new(headline).alignment(Alignment::Center),
        chunks[0],
    );

    if let Some(confidence) = result.confidence {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(Span::styled(" Confidence ", MedicalTheme::text_secondary()))
                    .borders(Borders::ALL)
                    .border_style(MedicalTheme::border()),
            )
            .gauge_style(MedicalTheme::info())
            .percent((confidence * 100.0).clamp(0.0, 100.0) as u16)
            .label(
                result
                    .confidence_percent()
                    .unwrap_or_default(),
            );
        f.render_widget(gauge, chunks[1]);
    }

    render_suggestions(f, chunks[2], result, scroll);
}

fn render_suggestions(f: &mut Frame, area: Rect, result: &PredictionResult, scroll: u16) {
    // Regenerated from the result on every render, never cached.
    let bundle = suggestions_for(result);

    let mut lines = vec![
        Line::from(Span::styled(
            bundle.title,
            MedicalTheme::urgency(bundle.urgency).add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, item) in bundle.items.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", i + 1), MedicalTheme::text_muted()),
            Span::styled(*item, MedicalTheme::text()),
        ]));
    }

    let suggestions = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(MedicalTheme::border()),
        );

    f.render_widget(suggestions, area);
}

fn render_result_footer(f: &mut Frame, area: Rect, state: &SubmissionState) {
    let content = match state {
        SubmissionState::Succeeded(_) => Line::from(vec![
            Span::styled("[↑↓] ", MedicalTheme::key_hint()),
            Span::styled("Scroll ", MedicalTheme::key_desc()),
            Span::styled("[N] ", MedicalTheme::key_hint()),
            Span::styled("New Prediction ", MedicalTheme::key_desc()),
            Span::styled("[Esc] ", MedicalTheme::key_hint()),
            Span::styled("Back", MedicalTheme::key_desc()),
        ]),
        SubmissionState::Failed { .. } => Line::from(vec![
            Span::styled("[Enter] ", MedicalTheme::key_hint()),
            Span::styled("Edit & Retry ", MedicalTheme::key_desc()),
            Span::styled("[Esc] ", MedicalTheme::key_hint()),
            Span::styled("Back", MedicalTheme::key_desc()),
        ]),
        _ => Line::from(vec![Span::styled(
            "Processing...",
            MedicalTheme::text_muted(),
        )]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}
