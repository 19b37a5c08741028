use crate::ai::conversation::RequestId;

/// Messages from background tasks to the UI thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    AiReply { request: RequestId, text: String },
    AiFailed { request: RequestId, error: String },
}
