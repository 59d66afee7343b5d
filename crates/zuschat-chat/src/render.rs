//! Terminal rendering of a conversation.
//!
//! [`render`] and [`footer`] build a view model from plain data; the
//! `paint*` functions turn that view model into coloured text.

use chrono::{DateTime, Local};
use colored::{ColoredString, Colorize};

use zuschat_logging::safe_truncate;
use zuschat_types::{Message, Role, SessionId};

pub const EMPTY_HINT: &str = "No messages yet. Start by asking me something!";

pub const SUGGESTIONS: [&str; 3] = [
    "What is 150 times 12?",
    "Tell me about the Black Sugar Latte",
    "List outlets in Kuala Lumpur",
];

const INPUT_PLACEHOLDER: &str = "Type your message... (or /reset to clear history)";
const SENDING_PLACEHOLDER: &str = "Sending...";

/// Label for the capability the backend reports having used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolBadge {
    pub icon: &'static str,
    pub class: &'static str,
    pub name: String,
}

impl ToolBadge {
    pub fn for_tool(name: &str) -> Self {
        let (icon, class) = match name {
            "Calculator" => ("🧮", "calculator"),
            "Product RAG" => ("📦", "rag"),
            "Outlet Text2SQL" => ("📍", "sql"),
            _ => ("🔧", "default"),
        };

        Self {
            icon,
            class,
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub avatar: &'static str,
    pub role: Role,
    pub content: String,
    /// Local wall-clock time, `None` if the timestamp does not parse
    pub time: Option<String>,
    pub is_pending: bool,
    pub badge: Option<ToolBadge>,
}

impl MessageView {
    pub fn from_message(message: &Message) -> Self {
        let avatar = match message.role {
            Role::User => "👤",
            Role::Assistant => "🤖",
        };

        let badge = match (&message.tool_used, message.is_pending) {
            (Some(tool), false) => Some(ToolBadge::for_tool(tool)),
            _ => None,
        };

        Self {
            avatar,
            role: message.role,
            content: message.content.clone(),
            time: local_time(&message.timestamp),
            is_pending: message.is_pending,
            badge,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    Empty {
        hint: &'static str,
        suggestions: [&'static str; 3],
    },
    Messages {
        messages: Vec<MessageView>,
        sending: bool,
    },
}

/// Status line shown under the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub session: String,
    pub placeholder: &'static str,
}

pub fn render(history: &[Message], is_sending: bool) -> Transcript {
    if history.is_empty() {
        return Transcript::Empty {
            hint: EMPTY_HINT,
            suggestions: SUGGESTIONS,
        };
    }

    Transcript::Messages {
        messages: history.iter().map(MessageView::from_message).collect(),
        sending: is_sending,
    }
}

pub fn footer(session_id: &SessionId, is_sending: bool) -> Footer {
    Footer {
        session: session_id.short(),
        placeholder: if is_sending {
            SENDING_PLACEHOLDER
        } else {
            INPUT_PLACEHOLDER
        },
    }
}

fn local_time(timestamp: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
}

// ============================================================================
// Painting
// ============================================================================

pub fn paint(transcript: &Transcript) -> String {
    match transcript {
        Transcript::Empty { hint, suggestions } => {
            let mut out = format!("{}\n\n{}\n", hint.dimmed(), "Try asking:".bright_black());
            for suggestion in suggestions {
                out.push_str(&format!("  • {}\n", suggestion.cyan()));
            }
            out
        }
        Transcript::Messages { messages, sending } => {
            let mut out = messages
                .iter()
                .map(paint_message)
                .collect::<Vec<_>>()
                .join("\n");
            if *sending {
                out.push_str(&format!("\n{}\n", SENDING_PLACEHOLDER.yellow()));
            }
            out
        }
    }
}

pub fn paint_message(view: &MessageView) -> String {
    let label = match view.role {
        Role::User => "You".cyan().bold(),
        Role::Assistant => "Assistant".green().bold(),
    };

    let mut header = format!("{} {}", view.avatar, label);
    if let Some(badge) = &view.badge {
        header.push_str(&format!("  {}", paint_badge(badge)));
    }
    if let Some(time) = &view.time {
        header.push_str(&format!("  {}", time.bright_black()));
    }

    let body = if view.is_pending {
        view.content.dimmed().italic().to_string()
    } else if view.role == Role::Assistant && view.content.starts_with("Error:") {
        view.content.red().to_string()
    } else {
        view.content.clone()
    };

    let indented = body
        .lines()
        .map(|line| format!("   {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}\n", header, indented)
}

pub fn paint_badge(badge: &ToolBadge) -> String {
    let text = format!("[{} {}]", badge.icon, safe_truncate(&badge.name, 40));
    let styled: ColoredString = match badge.class {
        "calculator" => text.blue(),
        "rag" => text.magenta(),
        "sql" => text.yellow(),
        _ => text.white(),
    };
    styled.to_string()
}

pub fn paint_footer(footer: &Footer) -> String {
    format!(
        "{} {}\n{}",
        "Session ID:".bright_black(),
        footer.session.bright_black(),
        footer.placeholder.dimmed()
    )
}
