//! Inline keyboard layouts.

use mentor_catalog::Catalog;
use mentor_models::Topic;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::callback::CallbackAction;
use crate::state::LessonView;

fn button(text: impl Into<String>, action: CallbackAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text.into(), action.payload())
}

/// The main menu.
pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            button("📚 Topics", CallbackAction::ShowTopics),
            button("📥 Install Python", CallbackAction::Topic(Topic::Install)),
        ],
        vec![
            button("📊 My progress", CallbackAction::Progress),
            button("❓ Ask a question", CallbackAction::Ask),
        ],
    ])
}

/// Topic picker, two topics per row. The install guide has its own main
/// menu button, so it is not repeated here.
pub fn topics(catalog: &Catalog) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::new();
    let mut row: Vec<InlineKeyboardButton> = Vec::new();

    for (topic, title) in catalog.topics() {
        if topic == Topic::Install {
            continue;
        }
        row.push(button(title, CallbackAction::Topic(topic)));
        if row.len() == 2 {
            rows.push(std::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows.push(vec![button("🏠 Main menu", CallbackAction::MainMenu)]);
    InlineKeyboardMarkup::new(rows)
}

/// Navigation keyboard under a lesson page: prev / indicator / next, then
/// the secondary actions.
pub fn lesson_navigation(view: &LessonView) -> InlineKeyboardMarkup {
    let mut nav_row: Vec<InlineKeyboardButton> = Vec::new();

    if view.page_index > 0 {
        nav_row.push(button(
            "⬅️ Back",
            CallbackAction::Page(view.topic, view.page_index - 1),
        ));
    }
    nav_row.push(button(
        format!("{}/{}", view.page_index + 1, view.page_count),
        CallbackAction::Noop,
    ));
    if view.page_index + 1 < view.page_count {
        nav_row.push(button(
            "Next ➡️",
            CallbackAction::Page(view.topic, view.page_index + 1),
        ));
    }

    let mut middle_row = vec![button("📚 All topics", CallbackAction::ShowTopics)];
    if view.page.example().is_some() {
        middle_row.push(button(
            "💻 Code only",
            CallbackAction::Code(view.topic, view.page_index),
        ));
    }

    InlineKeyboardMarkup::new(vec![
        nav_row,
        middle_row,
        vec![button("🏠 Main menu", CallbackAction::MainMenu)],
    ])
}

/// Keyboard under the code-only view: back to the full page.
pub fn code_view(topic: Topic, page_index: usize) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![button(
            "📖 Full lesson",
            CallbackAction::Page(topic, page_index),
        )],
        vec![button("📚 All topics", CallbackAction::ShowTopics)],
    ])
}
