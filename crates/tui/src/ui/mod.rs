//! UI rendering for the terminal front end.
//!
//! Responsibilities:
//! - Lay out header, active screen and footer.
//! - Draw the course-details modal and the keyboard-shortcuts overlay on top.
//!
//! Does NOT handle:
//! - Changing application state (rendering only reads it, apart from
//!   restyling the bio textarea for focus).

pub mod popup;
pub mod screens;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use studysphere_config::KeybindAction;
use studysphere_shortcuts::{Route, help};

use crate::app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::document::{Document, ElementKind, SEARCH_ID};
use screens::{
    courses::{CoursesRenderConfig, render_courses},
    dashboard::{DashboardRenderConfig, render_dashboard},
    profile::{ProfileRenderConfig, render_profile},
};
use theme::Theme;

const SEARCH_WIDTH: u16 = 44;

/// Draw one frame.
pub fn render(f: &mut Frame, app: &mut App) {
    let theme = Theme::default();
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(f.area());

    render_header(f, header, app, &theme);

    match app.screen() {
        Route::Dashboard => render_dashboard(
            f,
            body,
            DashboardRenderConfig {
                document: &app.document,
                theme: &theme,
            },
        ),
        Route::Courses => render_courses(
            f,
            body,
            CoursesRenderConfig {
                document: &app.document,
                theme: &theme,
            },
        ),
        Route::Profile => render_profile(
            f,
            body,
            ProfileRenderConfig {
                document: &app.document,
                bio: &mut app.bio,
                learning_style: &app.learning_style,
                theme: &theme,
            },
        ),
    }

    render_footer(f, footer, app, &theme);

    if let Some(course_id) = app.document.open_course() {
        popup::render_course_details(f, course_id, &app.document, &theme);
    }
    if let Some(content) = help::render_help(app.help_visible(), &app.keymap(), app.platform) {
        popup::render_help(f, &content, &theme);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let [tabs_area, search_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(SEARCH_WIDTH)]).areas(area);

    let mut spans = Vec::new();
    for element in app.document.elements() {
        let ElementKind::NavLink(route) = element.kind else {
            continue;
        };
        let style = if app.document.is_focused(&element.id) {
            theme.highlight()
        } else if route == app.screen() {
            theme.title()
        } else {
            theme.text()
        };
        spans.push(Span::styled(format!(" {} ", route.title()), style));
        spans.push(Span::raw(" "));
    }
    let tabs = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" StudySphere ", theme.title()))
            .border_style(theme.border(false)),
    );
    f.render_widget(tabs, tabs_area);

    let focused = app.document.is_focused(SEARCH_ID);
    let text = if app.search.is_empty() {
        Span::styled(app.search.placeholder().unwrap_or_default(), theme.text_dim())
    } else {
        Span::styled(app.search.value(), theme.text())
    };
    let search = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(theme.border(focused)),
    );
    f.render_widget(search, search_area);

    if focused {
        let offset = u16::try_from(app.search.cursor_position()).unwrap_or(u16::MAX);
        let x = (search_area.x + 1).saturating_add(offset);
        let max_x = search_area.right().saturating_sub(2);
        f.set_cursor_position(Position::new(x.min(max_x), search_area.y + 1));
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let keymap = app.keymap();
    let help_key = keymap
        .binding_for(KeybindAction::Help)
        .map(|b| help::key_label(b, app.platform))
        .unwrap_or_default();

    let mut spans = vec![
        Span::styled(help_key, theme.title()),
        Span::styled(" Shortcuts  ", theme.text_dim()),
        Span::styled("Tab", theme.title()),
        Span::styled(" Focus  ", theme.text_dim()),
        Span::styled("Enter", theme.title()),
        Span::styled(" Open  ", theme.text_dim()),
        Span::styled("q", theme.title()),
        Span::styled(" Quit", theme.text_dim()),
    ];
    if let Some(status) = &app.status {
        spans.push(Span::styled(format!("  │ {status}"), theme.success()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Index of the focused element among the elements of `parent`.
pub(crate) fn focused_in(document: &Document, parent: &str) -> Option<usize> {
    let focused = document.focused_id()?;
    document
        .elements()
        .iter()
        .filter(|e| e.parent == parent)
        .position(|e| e.id == focused)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FEATURED;
    use studysphere_shortcuts::FocusHost;

    #[test]
    fn focused_in_counts_within_parent() {
        let mut document = Document::new(Route::Dashboard, "");
        assert_eq!(focused_in(&document, FEATURED), None);

        document.set_focus("featured-3");
        assert_eq!(focused_in(&document, FEATURED), Some(2));

        document.blur_active();
        assert_eq!(focused_in(&document, FEATURED), None);
    }
}
