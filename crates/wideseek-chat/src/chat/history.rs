use wideseek_models::Message;

/// A completed user/assistant pair, as remembered for replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub user: Message,
    pub assistant: Message,
}

impl Exchange {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: Message::user(user),
            assistant: Message::assistant(assistant),
        }
    }
}

/// Flatten the most recent `max_turns` exchanges into messages, oldest first.
///
/// Older exchanges are dropped whole; nothing is summarised.
pub fn history_window(exchanges: &[Exchange], max_turns: usize) -> Vec<Message> {
    let skip = exchanges.len().saturating_sub(max_turns);
    if skip > 0 {
        log::debug!(
            "history window: replaying {} of {} exchanges",
            exchanges.len() - skip,
            exchanges.len()
        );
    }

    exchanges[skip..]
        .iter()
        .flat_map(|e| [e.user.clone(), e.assistant.clone()])
        .collect()
}
