//! Session-scoped custom ID encoding and parsing.

const TOKEN_PREFIX: &str = "pg";

/// Identifier of the select menu control within a session.
pub const MENU_CONTROL_ID: &str = "pages";

/// Parsed pagination token from a component custom ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationToken {
    /// Session the component belongs to.
    pub session_id: u64,
    /// Control identifier (`next`, `stop`, `pages`, ...).
    pub control: String,
}

/// Build a custom ID routing a control back to its session.
pub fn build_custom_id(session_id: u64, control: &str) -> String {
    format!("{TOKEN_PREFIX}:{session_id}:{control}")
}

/// Parse a pagination custom ID.
pub fn parse_custom_id(custom_id: &str) -> Option<PaginationToken> {
    let mut parts = custom_id.splitn(3, ':');

    let prefix = parts.next()?;
    if prefix != TOKEN_PREFIX {
        return None;
    }

    let session_id = parts.next()?.parse::<u64>().ok()?;
    let control = parts.next()?;
    if control.is_empty() {
        return None;
    }

    Some(PaginationToken {
        session_id,
        control: control.to_owned(),
    })
}
