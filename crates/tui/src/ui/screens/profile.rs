//! Profile screen rendering: the bio textarea and the learning-style selector.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::components::{MultiLineInput, SelectInput};
use crate::document::{BIO_ID, Document, LEARNING_STYLE_ID};
use crate::ui::theme::Theme;

/// Configuration for rendering the profile screen.
pub struct ProfileRenderConfig<'a, 'b> {
    pub document: &'a Document,
    pub bio: &'a mut MultiLineInput<'b>,
    pub learning_style: &'a SelectInput,
    pub theme: &'a Theme,
}

pub fn render_profile(f: &mut Frame, area: Rect, config: ProfileRenderConfig) {
    let ProfileRenderConfig {
        document,
        bio,
        learning_style,
        theme,
    } = config;

    let [bio_area, style_area, _] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let bio_focused = document.is_focused(BIO_ID);
    bio.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title("Bio")
            .border_style(theme.border(bio_focused)),
    );
    // Hide the textarea cursor unless it has focus.
    bio.set_cursor_style(if bio_focused {
        theme.highlight()
    } else {
        Style::default()
    });
    f.render_widget(&*bio, bio_area);

    let style_focused = document.is_focused(LEARNING_STYLE_ID);
    let mut spans = Vec::new();
    for (i, option) in learning_style.options().iter().enumerate() {
        let style = if i == learning_style.selected_index() {
            if style_focused {
                theme.highlight()
            } else {
                theme.title()
            }
        } else {
            theme.text_dim()
        };
        spans.push(Span::styled(format!(" {option} "), style));
    }
    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Learning Style")
            .border_style(theme.border(style_focused)),
    );
    f.render_widget(selector, style_area);
}
