//! Command table: exact, case-sensitive command text → handler.
//!
//! The registry itself is not synchronized; [`crate::Bot`] owns it behind its single lock so
//! registration and dispatch are serialized.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Produces the reply for a command, given the chat it was sent in.
pub trait CommandHandler: Send + Sync {
    fn handle(&self, chat_id: i64) -> String;
}

impl<F> CommandHandler for F
where
    F: Fn(i64) -> String + Send + Sync,
{
    fn handle(&self, chat_id: i64) -> String {
        self(chat_id)
    }
}

/// One handler per command text; re-registering replaces the previous handler.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut commands: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        commands.sort_unstable();
        f.debug_struct("CommandRegistry")
            .field("commands", &commands)
            .finish()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites. Returns true if a handler for `text` was replaced.
    pub fn insert(&mut self, text: impl Into<String>, handler: Arc<dyn CommandHandler>) -> bool {
        self.handlers.insert(text.into(), handler).is_some()
    }

    /// Exact match; no trimming, case folding or `@botname` stripping.
    pub fn lookup(&self, text: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(text).cloned()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.handlers.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
