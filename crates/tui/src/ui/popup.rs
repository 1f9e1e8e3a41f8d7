//! Modal popups: the keyboard-shortcuts overlay and course details.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use studysphere_shortcuts::help::HelpContent;

use crate::catalog;
use crate::document::{CLOSE_DETAILS_ID, Document};
use crate::ui::theme::Theme;

/// Percentage of the terminal the help overlay covers.
pub const HELP_WIDTH_PERCENT: u16 = 70;
pub const HELP_HEIGHT_PERCENT: u16 = 90;

pub const DETAILS_WIDTH_PERCENT: u16 = 60;
pub const DETAILS_HEIGHT_PERCENT: u16 = 60;

/// Render the keyboard-shortcuts overlay from the shared help content.
pub fn render_help(f: &mut Frame, content: &HelpContent, theme: &Theme) {
    let area = centered_rect(HELP_WIDTH_PERCENT, HELP_HEIGHT_PERCENT, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(content.subtitle, theme.text_dim())),
        Line::default(),
    ];
    for section in &content.sections {
        lines.push(Line::from(Span::styled(section.title, theme.title())));
        let width = section.key_width();
        for entry in &section.entries {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<width$}", entry.keys), theme.highlight()),
                Span::raw("  "),
                Span::styled(entry.description, theme.text()),
            ]));
        }
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled("Pro Tips", theme.title())));
    for tip in content.pro_tips {
        lines.push(Line::from(Span::styled(format!("  • {tip}"), theme.text_dim())));
    }
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled("Esc or Enter to close", theme.text_dim()))
            .alignment(Alignment::Center),
    );

    let overlay = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(format!(" {} ", content.title), theme.title()))
            .border_style(theme.border(true)),
    );
    f.render_widget(overlay, area);
}

/// Render the details modal for `course_id`.
pub fn render_course_details(f: &mut Frame, course_id: u32, document: &Document, theme: &Theme) {
    let Some(course) = catalog::course(course_id) else {
        return;
    };
    let area = centered_rect(DETAILS_WIDTH_PERCENT, DETAILS_HEIGHT_PERCENT, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} · {}", course.instructor, course.category),
            theme.text(),
        )),
        Line::from(Span::styled(
            format!(
                "{} · ★ {:.1} · {} students",
                course.difficulty, course.rating, course.students
            ),
            theme.text_dim(),
        )),
        Line::default(),
    ];
    match catalog::enrollment(course_id) {
        Some(e) => {
            lines.push(Line::from(format!(
                "Progress: {}% ({}/{} lessons)",
                course.progress, e.completed_lessons, e.total_lessons
            )));
            lines.push(Line::from(format!("Next lesson: {}", e.next_lesson)));
            lines.push(Line::from(format!(
                "Learning methods: {}",
                e.learning_methods.join(", ")
            )));
        }
        None => lines.push(Line::from("Not enrolled yet.")),
    }
    lines.push(Line::default());

    let close_style = if document.is_focused(CLOSE_DETAILS_ID) {
        theme.highlight()
    } else {
        theme.text()
    };
    lines.push(Line::from(Span::styled("[ Close ]", close_style)).alignment(Alignment::Center));

    let modal = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(format!(" {} ", course.title), theme.title()))
            .border_style(theme.border(true)),
    );
    f.render_widget(modal, area);
}

/// Helper to center a rect within another rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
