//! Page and content block types.

/// The role a content block plays on a page.
///
/// The set is closed so rendering can match exhaustively instead of probing
/// an open-ended map for optional keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockRole {
    /// The primary code example for the page.
    Example,
    /// Shell commands for Windows.
    WindowsShell,
    /// Shell commands for Linux.
    LinuxShell,
    /// Installation commands, Windows variant.
    InstallWindows,
    /// Installation commands, Linux variant.
    InstallLinux,
    /// Platform-neutral installation commands.
    Install,
    /// An ordered list of steps rendered as a bullet list.
    Steps,
}

impl BlockRole {
    /// Heading shown above the block when rendered.
    pub fn heading(&self) -> &'static str {
        match self {
            BlockRole::Example => "Example",
            BlockRole::WindowsShell => "Windows",
            BlockRole::LinuxShell => "Linux",
            BlockRole::InstallWindows => "Install on Windows",
            BlockRole::InstallLinux => "Install on Linux",
            BlockRole::Install => "Install",
            BlockRole::Steps => "Steps",
        }
    }
}

/// One tagged block of lesson content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub role: BlockRole,
    pub body: &'static str,
}

impl ContentBlock {
    pub fn new(role: BlockRole, body: &'static str) -> Self {
        Self { role, body }
    }
}

/// One unit of lesson content within a topic, addressed by a 0-based index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page title.
    pub title: &'static str,
    /// Explanation text. May embed simple Telegram-HTML markup.
    pub explanation: &'static str,
    /// Ordered content blocks.
    pub blocks: Vec<ContentBlock>,
}

impl Page {
    pub fn new(title: &'static str, explanation: &'static str, blocks: Vec<ContentBlock>) -> Self {
        Self {
            title,
            explanation,
            blocks,
        }
    }

    /// Returns the primary example block, if the page has one.
    pub fn example(&self) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.role == BlockRole::Example)
    }
}
