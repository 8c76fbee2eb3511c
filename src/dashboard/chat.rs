//! Mock AI tutor chat dialog and the add-flashcard dialog
//!
//! Replies are canned and picked by keyword; nothing leaves the process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Chat dialog is closed")]
    DialogClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

const GREETING: &str =
    "Hi! I'm your IELTS study companion. Ask me about vocabulary, band scores, or any skill.";

/// Keyword → reply, checked in order
const REPLIES: [(&str, &str); 5] = [
    (
        "band",
        "Band scores move in half steps. Steady vocabulary review is the fastest way to lift your estimated band.",
    ),
    (
        "vocab",
        "Try reviewing 20 words a day and use each new word in a sentence of your own.",
    ),
    (
        "speaking",
        "For Speaking Part 2, practise talking for two full minutes using topic vocabulary from your decks.",
    ),
    (
        "writing",
        "In Writing Task 2, collocations and linking words make a big difference. Your collocation deck is a good place to start.",
    ),
    (
        "listening",
        "Listening improves with variety: mix lectures, conversations and note completion practice.",
    ),
];

const FALLBACK_REPLY: &str =
    "Good question! Keep studying your weakest category and check back on your progress tomorrow.";

fn reply_for(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    REPLIES
        .iter()
        .find(|(keyword, _)| lower.contains(*keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatDialog {
    pub state: DialogState,
    pub messages: Vec<ChatMessage>,
}

impl ChatDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog; the first open posts a greeting
    pub fn open(&mut self, now: DateTime<Utc>) {
        self.state = DialogState::Open;
        if self.messages.is_empty() {
            self.messages.push(ChatMessage {
                role: Role::Assistant,
                content: GREETING.to_string(),
                timestamp: now,
            });
        }
    }

    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Post a user message and return the assistant's reply
    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> Result<&ChatMessage, ChatError> {
        if !self.is_open() {
            return Err(ChatError::DialogClosed);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.messages.push(ChatMessage {
            role: Role::User,
            content: text.to_string(),
            timestamp: now,
        });
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: reply_for(text).to_string(),
            timestamp: now,
        });
        log::debug!("Chat now has {} messages", self.messages.len());

        Ok(&self.messages[self.messages.len() - 1])
    }
}

/// Form state of the "New Flashcard" dialog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCardDraft {
    pub question: String,
    pub answer: String,
}

impl AddCardDraft {
    pub fn is_valid(&self) -> bool {
        !self.question.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_dialog_rejects_messages() {
        let mut chat = ChatDialog::new();
        assert_eq!(chat.send("hello", Utc::now()), Err(ChatError::DialogClosed));
    }

    #[test]
    fn test_open_greets_once() {
        let mut chat = ChatDialog::new();
        chat.open(Utc::now());
        chat.close();
        chat.open(Utc::now());
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].role, Role::Assistant);
    }

    #[test]
    fn test_send_appends_user_and_reply() {
        let mut chat = ChatDialog::new();
        let now = Utc::now();
        chat.open(now);

        let reply = chat.send("How do I raise my BAND score?", now).unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert!(reply.content.contains("half steps"));
        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.messages[1].role, Role::User);
    }

    #[test]
    fn test_fallback_and_empty() {
        let mut chat = ChatDialog::new();
        chat.open(Utc::now());
        assert_eq!(chat.send("   ", Utc::now()), Err(ChatError::EmptyMessage));
        let reply = chat.send("what's up", Utc::now()).unwrap();
        assert_eq!(reply.content, FALLBACK_REPLY);
    }

    #[test]
    fn test_add_card_draft() {
        let mut draft = AddCardDraft::default();
        assert!(!draft.is_valid());
        draft.question = "Define 'ubiquitous'".to_string();
        assert!(draft.is_valid());
    }
}
