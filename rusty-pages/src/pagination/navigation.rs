//! Page navigation state machine.

/// Action tokens that end a pagination session.
const CLOSE_ALIASES: [&str; 5] = ["close", "stop", "cancel", "delete", "end"];

/// A navigation request decoded from an action token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Previous,
    Next,
    Last,
    Close,
    /// Jump straight to a 1-based page.
    Goto(usize),
}

impl NavAction {
    /// Decode a named action token, case-insensitively.
    ///
    /// Returns `None` for tokens outside the navigation vocabulary; callers
    /// ignore those.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim().to_ascii_lowercase();

        match token.as_str() {
            "first" => Some(Self::First),
            "previous" | "prev" | "back" => Some(Self::Previous),
            "next" | "forward" => Some(Self::Next),
            "last" => Some(Self::Last),
            other if CLOSE_ALIASES.contains(&other) => Some(Self::Close),
            _ => None,
        }
    }

    /// Decode a select menu value: a page number or a named action.
    pub fn parse_menu_value(value: &str) -> Option<Self> {
        match value.trim().parse::<usize>() {
            Ok(page) => Some(Self::Goto(page)),
            Err(_) => Self::parse(value),
        }
    }
}

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The current page is now the given page; re-render it.
    Moved(usize),
    /// Nothing to re-render.
    Unchanged,
    /// The session should end.
    Close,
}

/// Current position within a fixed number of pages.
///
/// Invariant: `1 <= current <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    total: usize,
}

impl Navigator {
    /// Start on page 1. A page count of zero is treated as one page.
    pub fn new(total_pages: usize) -> Self {
        Self {
            current: 1,
            total: total_pages.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn apply(&mut self, action: NavAction) -> Transition {
        let target = match action {
            NavAction::Close => return Transition::Close,
            NavAction::First => return self.move_to(1),
            NavAction::Last => return self.move_to(self.total),
            NavAction::Previous if self.current > 1 => self.current - 1,
            NavAction::Next if self.current < self.total => self.current + 1,
            NavAction::Goto(page) if (1..=self.total).contains(&page) && page != self.current => {
                page
            }
            NavAction::Previous | NavAction::Next | NavAction::Goto(_) => {
                return Transition::Unchanged;
            }
        };

        self.move_to(target)
    }

    fn move_to(&mut self, page: usize) -> Transition {
        self.current = page;
        Transition::Moved(page)
    }
}
