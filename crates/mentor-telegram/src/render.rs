//! HTML rendering for Telegram messages.
//!
//! Explanations are authored with simple HTML markup and pass through
//! unescaped; code and shell blocks are escaped and wrapped in <pre>.

use mentor_catalog::{BlockRole, ContentBlock, Page};
use mentor_models::UserProgress;

use crate::state::LessonView;

/// Escape HTML special characters for Telegram HTML mode.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn format_code(code: &str) -> String {
    format!(
        "<pre><code class=\"language-python\">{}</code></pre>",
        html_escape(code)
    )
}

fn format_shell(commands: &str) -> String {
    format!("<pre>{}</pre>", html_escape(commands))
}

fn format_block(block: &ContentBlock) -> String {
    match block.role {
        BlockRole::Example => format!("<b>📝 Example:</b>\n{}", format_code(block.body)),
        BlockRole::Steps => {
            let mut out = String::from("<b>📋 Steps:</b>\n");
            for line in block.body.lines() {
                out.push_str("• ");
                out.push_str(&html_escape(line));
                out.push('\n');
            }
            out
        }
        role => format!(
            "<b>{}:</b>\n{}",
            role.heading(),
            format_shell(block.body)
        ),
    }
}

/// Render a full lesson page.
pub fn format_page(view: &LessonView) -> String {
    let mut text = format!(
        "<b>{}</b>\n\n<b>{}</b>\n\n{}\n\n",
        view.topic_title, view.page.title, view.page.explanation
    );
    for block in &view.page.blocks {
        text.push_str(&format_block(block));
        text.push('\n');
    }
    text.trim_end().to_string()
}

/// Render only a page's code example, or `None` if the page has none.
pub fn format_code_only(page: &Page) -> Option<String> {
    let example = page.example()?;
    Some(format!(
        "<b>💻 Code example: {}</b>\n\n{}",
        html_escape(page.title),
        format_code(example.body)
    ))
}

/// Render the user's progress summary.
pub fn format_progress(progress: &UserProgress, topic_title: &str) -> String {
    format!(
        "<b>📊 Your progress</b>\n\n\
         👤 User: {}\n\
         🎯 Current topic: {}\n\
         📄 Page: {}\n\
         📅 Learning since: {}\n\n\
         <i>Keep going! 🚀</i>",
        html_escape(progress.username.as_deref().unwrap_or("anonymous")),
        topic_title,
        progress.page + 1,
        progress.created_at.format("%d.%m.%Y")
    )
}

/// The /start welcome text.
pub fn welcome_text() -> &'static str {
    "👋 <b>Hi! I am Mentor Bot</b>\n\n\
     I will help you learn Python from the basics to advanced topics.\n\n\
     <b>What I can do:</b>\n\
     • 📚 Explain Python fundamentals\n\
     • 💻 Show code examples for every topic\n\
     • 🚀 Introduce frameworks (Flask, Django)\n\
     • 🛠️ Walk through developer tools\n\
     • 📊 Explain Data Science libraries\n\
     • ⚡ Cover async programming\n\n\
     <b>Pick an action:</b>"
}

/// Prompt shown when the user starts the question flow.
pub fn ask_prompt() -> &'static str {
    "<b>❓ Ask your Python question</b>\n\n\
     Type your question as a normal message and I will log it:"
}

/// Acknowledgement after a question is logged.
pub fn question_ack() -> &'static str {
    "<b>✅ Question received!</b>\n\n\
     I have logged your question for review.\n\
     Meanwhile, feel free to keep exploring the topics:"
}

/// Fixed replies for common free-text messages. Lookup is by the lowercased
/// message; anything not in the table gets the generic hint.
pub fn fixed_reply(text: &str) -> Option<&'static str> {
    match text.to_lowercase().as_str() {
        "hi" | "hello" => Some("👋 Hi! I am Mentor Bot. Use the menu buttons to navigate."),
        "help" => Some(
            "📋 Use the menu:\n\
             • /topics — pick a topic\n\
             • /progress — see where you are\n\
             • /ask — log a question",
        ),
        "python" => Some("🐍 Great choice! Start with 📚 Python Basics in /topics."),
        "thanks" | "thank you" => Some("😊 You're welcome! Happy learning!"),
        "oop" => Some("🏛️ Object-oriented programming has its own topic — check /topics."),
        _ => None,
    }
}

/// Hint for unmatched free text.
pub fn fallback_reply() -> &'static str {
    "🤔 I didn't quite get that.\n\
     Use the menu buttons, or send /help for the command list."
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_catalog::Catalog;
    use mentor_models::{Topic, UserId};

    fn view(topic: Topic, page: usize) -> LessonView {
        let catalog = Catalog::new();
        LessonView {
            topic,
            topic_title: catalog.title(topic).unwrap(),
            page: catalog.page(topic, page).unwrap().clone(),
            page_index: page,
            page_count: catalog.page_count(topic).unwrap(),
        }
    }

    #[test]
    fn escapes_html_specials() {
        assert_eq!(html_escape("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn code_blocks_are_escaped_and_wrapped() {
        let text = format_page(&view(Topic::Basics, 0));
        // The example prints an f-string with braces; the <pre> wrapper must
        // be present and raw angle brackets inside code escaped.
        assert!(text.contains("<pre><code class=\"language-python\">"));
        assert!(!text.contains("<pre><code class=\"language-python\"><"));
    }

    #[test]
    fn explanation_markup_passes_through() {
        let text = format_page(&view(Topic::Oop, 0));
        assert!(text.contains("<b>Encapsulation</b>"));
    }

    #[test]
    fn steps_render_as_bullets() {
        let text = format_page(&view(Topic::Install, 0));
        assert!(text.contains("• 1. Download Python"));
    }

    #[test]
    fn code_only_view_requires_an_example() {
        let catalog = Catalog::new();
        let with_example = catalog.page(Topic::Basics, 0).unwrap();
        assert!(format_code_only(with_example).is_some());

        let steps_only = catalog.page(Topic::Install, 0).unwrap();
        assert!(format_code_only(steps_only).is_none());
    }

    #[test]
    fn progress_summary_shows_one_based_page() {
        let mut progress =
            mentor_models::UserProgress::new(UserId(1), Some("alice".into()), Topic::Basics);
        progress = progress.at(Topic::Basics, 1, None);
        let text = format_progress(&progress, "📚 Python Basics");
        assert!(text.contains("Page: 2"));
        assert!(text.contains("alice"));
    }

    #[test]
    fn fixed_replies_are_case_insensitive() {
        assert!(fixed_reply("HELLO").is_some());
        assert!(fixed_reply("what is a metaclass").is_none());
    }

    #[test]
    fn every_page_renders_without_panicking() {
        let catalog = Catalog::new();
        for topic in Topic::ALL {
            for index in 0..catalog.page_count(topic).unwrap() {
                let v = view(topic, index);
                assert!(!format_page(&v).is_empty());
            }
        }
    }
}
