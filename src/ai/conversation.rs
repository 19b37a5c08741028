use crate::i18n::Translator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    welcome: bool,
}

impl ChatMessage {
    fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            welcome: false,
        }
    }

    fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
            welcome: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Chat history of the AI panel. Lives only as long as the window; it is not
/// part of the persisted tree.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    pending: Option<RequestId>,
    next_request: u64,
}

impl Conversation {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Seeds the greeting, and keeps it in the current language for as long
    /// as it is the only message.
    pub fn ensure_welcome(&mut self, translator: &Translator) {
        let welcome = translator.t("welcomeToAI");
        if self.messages.is_empty() {
            self.messages.push(ChatMessage {
                sender: Sender::Ai,
                text: welcome.to_string(),
                welcome: true,
            });
            return;
        }
        if let [only] = self.messages.as_mut_slice() {
            if only.welcome && only.text != welcome {
                only.text = welcome.to_string();
            }
        }
    }

    /// Records the user's message and opens a request for it. Returns `None`
    /// for blank input or while another request is outstanding.
    pub fn begin(&mut self, input: &str) -> Option<(RequestId, String)> {
        if input.trim().is_empty() || self.is_busy() {
            return None;
        }
        self.next_request += 1;
        let id = RequestId(self.next_request);
        self.pending = Some(id);
        self.messages.push(ChatMessage::user(input));
        Some((id, input.to_string()))
    }

    /// Appends a reply. Replies for anything but the outstanding request are dropped.
    pub fn complete(&mut self, id: RequestId, text: impl Into<String>) -> bool {
        if !self.take_pending(id) {
            return false;
        }
        self.messages.push(ChatMessage::ai(text));
        true
    }

    pub fn fail(&mut self, id: RequestId, translator: &Translator) -> bool {
        if !self.take_pending(id) {
            return false;
        }
        self.messages.push(ChatMessage::ai(translator.t("aiError")));
        true
    }

    fn take_pending(&mut self, id: RequestId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            tracing::debug!(request = id.value(), "discarding stale AI reply");
            false
        }
    }
}
