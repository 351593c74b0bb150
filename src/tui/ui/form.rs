//! Patient data input form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::{FieldKind, FieldSpec, PatientIntake, FIELDS};
use crate::tui::styles::MedicalTheme;

/// Patient form state: one raw text buffer per field in [`FIELDS`] order.
pub struct FormState {
    pub values: Vec<String>,
    pub selected: usize,
    pub error_message: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: FIELDS.iter().map(|f| f.default.to_string()).collect(),
            selected: 0,
            error_message: None,
        }
    }
}

impl FormState {
    fn selected_spec(&self) -> &'static FieldSpec {
        &FIELDS[self.selected]
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % FIELDS.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected == 0 {
            self.selected = FIELDS.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Add a character to the current field (numeric fields only).
    pub fn input_char(&mut self, c: char) {
        if let FieldKind::Numeric { decimal, .. } = self.selected_spec().kind {
            if c.is_ascii_digit() || (decimal && c == '.') {
                self.values[self.selected].push(c);
                self.error_message = None;
            }
        }
    }

    /// Delete the last character of a numeric field
    pub fn delete_char(&mut self) {
        if matches!(self.selected_spec().kind, FieldKind::Numeric { .. }) {
            self.values[self.selected].pop();
        }
    }

    /// Cycle a choice field to the next/previous option.
    pub fn cycle_option(&mut self, forward: bool) {
        let FieldKind::Choice(options) = self.selected_spec().kind else {
            return;
        };

        let current = options
            .iter()
            .position(|(code, _)| *code == self.values[self.selected])
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.values[self.selected] = options[next].0.to_string();
        self.error_message = None;
    }

    /// Restore the sample defaults.
    pub fn reset_defaults(&mut self) {
        for (value, spec) in self.values.iter_mut().zip(FIELDS.iter()) {
            value.zeroize();
            *value = spec.default.to_string();
        }
        self.error_message = None;
    }

    /// Validate every field against its edit-time constraints.
    ///
    /// This is the edit boundary: the codec downstream trusts values that
    /// pass here.
    pub fn validate(&self) -> Result<(), String> {
        for (value, spec) in self.values.iter().zip(FIELDS.iter()) {
            spec.validate(value)?;
        }
        Ok(())
    }

    /// Convert to a [`PatientIntake`] for encoding.
    pub fn to_intake(&self) -> Result<PatientIntake, String> {
        PatientIntake::from_values(&self.values)
    }
}

/// Render the patient data input form
pub fn render_form(f: &mut Frame, area: Rect, state: &FormState, submitting: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Fields
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state, submitting);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Patient Information", MedicalTheme::title()),
        Span::styled(
            " │ Heart Disease Risk Prediction",
            MedicalTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &FormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (FIELDS.len() + 1) / 2;

    render_field_column(f, columns[0], state, 0, mid);
    render_field_column(f, columns[1], state, mid, FIELDS.len());
}

fn render_field_column(f: &mut Frame, area: Rect, state: &FormState, from: usize, to: usize) {
    let field_height = 3;
    let constraints: Vec<Constraint> = (from..to)
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, idx) in (from..to).enumerate() {
        let spec = &FIELDS[idx];
        let value = &state.values[idx];
        let is_selected = idx == state.selected;

        let border_style = if is_selected {
            MedicalTheme::border_focused()
        } else {
            MedicalTheme::border()
        };
        let title_style = if is_selected {
            MedicalTheme::focused()
        } else {
            MedicalTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", spec.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let content = match spec.kind {
            FieldKind::Choice(_) => Line::from(vec![
                Span::styled(" ◂ ", MedicalTheme::text_muted()),
                Span::styled(spec.option_label(value), MedicalTheme::text()),
                Span::styled(" ▸", MedicalTheme::text_muted()),
            ]),
            FieldKind::Numeric { .. } => {
                let value_display = if value.is_empty() {
                    Span::styled(spec.hint, MedicalTheme::text_muted())
                } else {
                    Span::styled(value.as_str(), MedicalTheme::text())
                };
                Line::from(vec![
                    Span::raw(" "),
                    value_display,
                    if is_selected {
                        Span::styled("▌", MedicalTheme::focused())
                    } else {
                        Span::raw("")
                    },
                    Span::raw(" "),
                    Span::styled(
                        if value.is_empty() { "" } else { spec.hint },
                        MedicalTheme::text_muted(),
                    ),
                ])
            }
        };

        f.render_widget(Paragraph::new(content).block(block), chunks[slot]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &FormState, submitting: bool) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", MedicalTheme::danger()),
            Span::styled(err.clone(), MedicalTheme::danger()),
        ])
    } else if submitting {
        // Submit affordance disabled while a request is in flight.
        Line::from(vec![Span::styled(
            "Analyzing... please wait",
            MedicalTheme::text_muted(),
        )])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", MedicalTheme::key_hint()),
            Span::styled("Navigate ", MedicalTheme::key_desc()),
            Span::styled("[◂▸] ", MedicalTheme::key_hint()),
            Span::styled("Options ", MedicalTheme::key_desc()),
            Span::styled("[Enter] ", MedicalTheme::key_hint()),
            Span::styled("Predict ", MedicalTheme::key_desc()),
            Span::styled("[R] ", MedicalTheme::key_hint()),
            Span::styled("Reset ", MedicalTheme::key_desc()),
            Span::styled("[Esc] ", MedicalTheme::key_hint()),
            Span::styled("Quit", MedicalTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_validates_and_encodes() {
        let form = FormState::default();
        assert!(form.validate().is_ok());

        let payload = form
            .to_intake()
            .expect("Should build intake")
            .encode()
            .expect("Should encode");
        assert_eq!(payload.age, 45);
        assert_eq!(payload.sex, 1);
    }

    #[test]
    fn test_numeric_input_respects_field_kind() {
        let mut form = FormState::default();

        // age is numeric, integer only
        form.values[0].clear();
        form.input_char('6');
        form.input_char('3');
        form.input_char('.');
        assert_eq!(form.values[0], "63");

        // oldpeak accepts a decimal point
        form.selected = 9;
        form.values[9].clear();
        form.input_char('2');
        form.input_char('.');
        form.input_char('3');
        assert_eq!(form.values[9], "2.3");

        // choice fields ignore typed characters
        form.selected = 1;
        form.input_char('7');
        assert_eq!(form.values[1], "1");
    }

    #[test]
    fn test_cycle_choice_options() {
        let mut form = FormState::default();
        form.selected = 1; // sex, default "1"
        form.cycle_option(true);
        assert_eq!(form.values[1], "0");
        form.cycle_option(true);
        assert_eq!(form.values[1], "1");
        form.cycle_option(false);
        assert_eq!(form.values[1], "0");
    }

    #[test]
    fn test_out_of_range_blocks_validation() {
        let mut form = FormState::default();
        form.values[3] = "300".to_string(); // trestbps above 200
        let err = form.validate().expect_err("Should reject");
        assert!(err.contains("Resting Blood Pressure"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = FormState::default();
        form.values[0] = "99".to_string();
        form.error_message = Some("oops".to_string());
        form.reset_defaults();
        assert_eq!(form.values[0], "45");
        assert!(form.error_message.is_none());
    }
}
