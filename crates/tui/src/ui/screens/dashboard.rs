//! Dashboard screen rendering.
//!
//! Shows a progress summary, the featured course catalog (filtered by the
//! search box) and the recent activity feed.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::catalog::{self, RECENT_ACTIVITY};
use crate::document::{ACTIVITY, Document, ElementKind, FEATURED};
use crate::ui::focused_in;
use crate::ui::theme::Theme;

/// Configuration for rendering the dashboard.
pub struct DashboardRenderConfig<'a> {
    pub document: &'a Document,
    pub theme: &'a Theme,
}

pub fn render_dashboard(f: &mut Frame, area: Rect, config: DashboardRenderConfig) {
    let DashboardRenderConfig { document, theme } = config;

    let [summary_area, lists_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);
    let [featured_area, activity_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(lists_area);

    let summary = Paragraph::new(vec![
        Line::from(Span::styled("Welcome back!", theme.title())),
        Line::from(Span::styled(
            format!(
                "Keep up the great work! {} courses in progress, {}% average progress.",
                catalog::enrolled().len(),
                catalog::average_progress()
            ),
            theme.text(),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(theme.border(false)));
    f.render_widget(summary, summary_area);

    let items: Vec<ListItem> = document
        .elements()
        .iter()
        .filter_map(|e| match e.kind {
            ElementKind::CourseCard(id) if e.parent == FEATURED => catalog::course(id),
            _ => None,
        })
        .map(|c| {
            let status = if c.enrolled {
                format!("{}% complete", c.progress)
            } else {
                "Enroll".to_string()
            };
            ListItem::new(vec![
                Line::from(Span::styled(c.title, theme.title())),
                Line::from(Span::styled(
                    format!(
                        "{} · {} · {} · ★ {:.1} · {} students · {}",
                        c.instructor, c.category, c.difficulty, c.rating, c.students, status
                    ),
                    theme.text_dim(),
                )),
            ])
        })
        .collect();

    let featured_focused = focused_in(document, FEATURED);
    let title = if items.is_empty() {
        "Featured Courses (no matches)"
    } else {
        "Featured Courses"
    };
    let featured = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.border(featured_focused.is_some())),
        )
        .highlight_style(theme.highlight());
    let mut state = ListState::default().with_selected(featured_focused);
    f.render_stateful_widget(featured, featured_area, &mut state);

    let activity_items: Vec<ListItem> = RECENT_ACTIVITY
        .iter()
        .map(|a| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("[{}] ", a.kind), theme.success()),
                    Span::styled(a.lesson, theme.text()),
                ]),
                Line::from(Span::styled(
                    format!("{} · {}", a.course, a.time),
                    theme.text_dim(),
                )),
            ])
        })
        .collect();

    let activity_focused = focused_in(document, ACTIVITY);
    let activity = List::new(activity_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Recent Activity")
                .border_style(theme.border(activity_focused.is_some())),
        )
        .highlight_style(theme.highlight());
    let mut state = ListState::default().with_selected(activity_focused);
    f.render_stateful_widget(activity, activity_area, &mut state);
}
