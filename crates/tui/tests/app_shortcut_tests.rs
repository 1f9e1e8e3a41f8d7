//! Shortcut handling through the full app.
//!
//! ## Invariants
//! - Shortcuts fire from ordinary elements and never from text entry.
//! - Escape in a text control only blurs it.
//! - Arrow keys move within a list and never wrap.
//! - 'q' quits only outside text entry.

mod helpers;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use helpers::*;
use studysphere_config::Platform;
use studysphere_shortcuts::Route;
use studysphere_tui::Action;
use studysphere_tui::document::{BIO_ID, CLOSE_DETAILS_ID, LEARNING_STYLE_ID, SEARCH_ID};

#[test]
fn ctrl_shortcuts_switch_screens() {
    let mut app = new_app(Platform::Other);

    app.handle_input(ctrl_key('c'));
    assert_eq!(app.screen(), Route::Courses);
    assert_eq!(app.document.screen(), Route::Courses);

    app.handle_input(ctrl_key('p'));
    assert_eq!(app.screen(), Route::Profile);

    app.handle_input(ctrl_key('d'));
    assert_eq!(app.screen(), Route::Dashboard);
    assert_eq!(app.status.as_deref(), Some("Opened Dashboard"));
    assert_eq!(
        app.router.history(),
        [Route::Courses, Route::Profile, Route::Dashboard]
    );
}

#[test]
fn command_key_works_like_ctrl() {
    let mut app = new_app(Platform::Mac);
    app.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::SUPER));
    assert_eq!(app.screen(), Route::Courses);
}

#[test]
fn typing_in_search_inserts_text_instead_of_navigating() {
    let mut app = new_app(Platform::Other);
    app.handle_input(key('/'));
    assert!(app.document.is_focused(SEARCH_ID));

    type_text(&mut app, "dq");
    app.handle_input(ctrl_key('p'));

    assert_eq!(app.search.value(), "dq");
    assert_eq!(app.screen(), Route::Dashboard);
}

#[test]
fn escape_blurs_search_then_closes_overlays() {
    let mut app = new_app(Platform::Other);
    app.handle_input(ctrl_key('h'));
    assert!(app.help_visible());

    app.handle_input(ctrl_key('s'));
    assert!(app.document.is_focused(SEARCH_ID));

    app.handle_input(esc_key());
    assert_eq!(app.document.focused_id(), None);
    assert!(app.help_visible(), "blur must not close the overlay");

    app.handle_input(esc_key());
    assert!(!app.help_visible());
}

#[test]
fn search_filters_featured_courses() {
    let mut app = new_app(Platform::Other);
    app.handle_input(key('/'));
    type_text(&mut app, "bio");

    let cards: Vec<&str> = app
        .document
        .elements()
        .iter()
        .filter(|e| e.id.starts_with("featured-"))
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(cards, ["featured-2"]);
    assert!(app.document.is_focused(SEARCH_ID));
}

#[test]
fn arrows_walk_the_featured_list_without_wrapping() {
    let mut app = new_app(Platform::Other);
    // Tab through nav links and search to the first card.
    for _ in 0..5 {
        app.handle_input(tab_key());
    }
    assert_eq!(app.document.focused_id(), Some("featured-1"));

    app.handle_input(up_key());
    assert_eq!(app.document.focused_id(), Some("featured-1"));

    for _ in 0..5 {
        app.handle_input(down_key());
    }
    assert_eq!(app.document.focused_id(), Some("featured-4"));
}

#[test]
fn enter_opens_details_and_escape_closes_them() {
    let mut app = new_app(Platform::Other);
    app.handle_input(ctrl_key('c'));
    for _ in 0..5 {
        app.handle_input(tab_key());
    }
    assert_eq!(app.document.focused_id(), Some("enrolled-1"));

    app.handle_input(enter_key());
    assert_eq!(app.document.open_course(), Some(1));
    assert!(app.document.is_focused(CLOSE_DETAILS_ID));

    app.handle_input(esc_key());
    assert_eq!(app.document.open_course(), None);
    assert_eq!(app.document.focused_id(), Some("enrolled-1"));
}

#[test]
fn enter_on_close_control_closes_details() {
    let mut app = new_app(Platform::Other);
    app.document.set_focus("featured-3");
    app.handle_input(enter_key());
    assert_eq!(app.document.open_course(), Some(3));

    app.handle_input(enter_key());
    assert_eq!(app.document.open_course(), None);
}

#[test]
fn enter_dismisses_help() {
    let mut app = new_app(Platform::Other);
    app.handle_input(ctrl_key('h'));
    app.handle_input(enter_key());
    assert!(!app.help_visible());
}

#[test]
fn profile_controls_take_their_keys() {
    let mut app = new_app(Platform::Other);
    app.handle_input(ctrl_key('p'));

    assert!(app.document.set_focus(BIO_ID));
    type_text(&mut app, "hi q");
    app.handle_input(enter_key());
    type_text(&mut app, "/");
    assert_eq!(app.bio.value(), "hi q\n/");
    assert!(app.document.is_focused(BIO_ID));

    app.handle_input(tab_key());
    assert!(app.document.is_focused(LEARNING_STYLE_ID));
    app.handle_input(down_key());
    app.handle_input(down_key());
    assert_eq!(app.learning_style.selected(), Some("Reading/Writing"));
    assert!(app.document.is_focused(LEARNING_STYLE_ID));
}

#[test]
fn q_quits_only_outside_text_entry() {
    let mut app = new_app(Platform::Other);
    app.handle_input(key('/'));
    assert_eq!(app.handle_input(key('q')), None);
    assert_eq!(app.search.value(), "q");

    app.handle_input(esc_key());
    assert_eq!(app.handle_input(key('q')), Some(Action::Quit));
    assert_eq!(app.handle_input(ctrl_key('q')), Some(Action::Quit));
}

#[test]
fn key_release_is_ignored() {
    let mut app = new_app(Platform::Other);
    let mut release = ctrl_key('p');
    release.kind = KeyEventKind::Release;

    app.handle_input(release);
    assert_eq!(app.screen(), Route::Dashboard);
}

#[test]
fn enter_on_nav_link_navigates() {
    let mut app = new_app(Platform::Other);
    app.handle_input(tab_key());
    app.handle_input(tab_key());
    assert_eq!(app.document.focused_id(), Some("nav-courses"));

    app.handle_input(enter_key());
    assert_eq!(app.screen(), Route::Courses);
    assert_eq!(app.document.focused_id(), None);
}
