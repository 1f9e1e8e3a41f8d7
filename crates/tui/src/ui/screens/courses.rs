//! My Courses screen rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::catalog;
use crate::document::{Document, ENROLLED, ElementKind};
use crate::ui::focused_in;
use crate::ui::theme::{Theme, progress_bar};

/// Configuration for rendering the courses screen.
pub struct CoursesRenderConfig<'a> {
    pub document: &'a Document,
    pub theme: &'a Theme,
}

pub fn render_courses(f: &mut Frame, area: Rect, config: CoursesRenderConfig) {
    let CoursesRenderConfig { document, theme } = config;

    let items: Vec<ListItem> = document
        .elements()
        .iter()
        .filter_map(|e| match e.kind {
            ElementKind::CourseCard(id) if e.parent == ENROLLED => catalog::course(id),
            _ => None,
        })
        .map(|c| {
            let mut lines = vec![Line::from(vec![
                Span::styled(c.title, theme.title()),
                Span::styled(format!("  {}", c.instructor), theme.text_dim()),
            ])];
            lines.push(Line::from(vec![
                Span::styled(progress_bar(c.progress, 20), theme.success()),
                Span::styled(format!(" {}%", c.progress), theme.text()),
            ]));
            if let Some(e) = catalog::enrollment(c.id) {
                lines.push(Line::from(Span::styled(
                    format!(
                        "Next: {} · {}/{} lessons · {}",
                        e.next_lesson,
                        e.completed_lessons,
                        e.total_lessons,
                        e.learning_methods.join(", ")
                    ),
                    theme.text_dim(),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let focused = focused_in(document, ENROLLED);
    let title = if items.is_empty() {
        "My Courses (no matches)"
    } else {
        "My Courses"
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.border(focused.is_some())),
        )
        .highlight_style(theme.highlight());
    let mut state = ListState::default().with_selected(focused);
    f.render_stateful_widget(list, area, &mut state);
}
