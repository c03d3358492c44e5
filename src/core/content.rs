//! Content envelope returned by every tool invocation.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};

/// `{ "content": [ { "type": "text", "text": ... } ] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<ContentItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text { text: String },
}

impl ToolResponse {
    /// Envelope holding a single text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::Text { text: text.into() }],
        }
    }

    /// Text of the first content item, or "" for an empty envelope.
    pub fn first_text(&self) -> &str {
        match self.content.first() {
            Some(ContentItem::Text { text }) => text,
            None => "",
        }
    }
}

impl From<ToolResponse> for CallToolResult {
    fn from(resp: ToolResponse) -> Self {
        let content = resp
            .content
            .into_iter()
            .map(|item| match item {
                ContentItem::Text { text } => Content::text(text),
            })
            .collect();
        CallToolResult::success(content)
    }
}
