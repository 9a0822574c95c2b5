//! Server-sent event handling for the Responses API.
//!
//! Both providers stream their answer as SSE. We don't forward deltas to the
//! UI; `OutputCollector` just concatenates `response.output_text.delta`
//! events until `response.completed` arrives.

use log::{debug, info, warn};
use serde::Deserialize;

use crate::inference::ProviderError;

/// Generic SSE event wrapper to extract the type field.
/// OpenRouter embeds the event type inside the JSON, not in `event:` lines.
#[derive(Deserialize, Debug)]
struct SseEvent {
    #[serde(rename = "type")]
    event_type: String,
    #[serde(default)]
    delta: String,
}

/// What the collector decided after consuming some input.
#[derive(Debug, PartialEq)]
pub(crate) enum Progress {
    /// Keep reading.
    Pending,
    /// `response.completed` seen.
    Completed,
    /// The API reported a failure inside the stream.
    Failed(String),
}

pub(crate) struct OutputCollector {
    /// Raw bytes not yet terminated by a newline. Kept as bytes so a
    /// multi-byte character split across chunks survives.
    buffer: Vec<u8>,
    current_event_type: Option<String>,
    text: String,
    delta_count: usize,
}

impl OutputCollector {
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            current_event_type: None,
            text: String::new(),
            delta_count: 0,
        }
    }

    /// Consume a chunk of the body, processing every complete line in it.
    pub fn feed(&mut self, chunk: &[u8]) -> Progress {
        self.buffer.extend_from_slice(chunk);

        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw);
            let progress = self.handle_line(line.trim());
            if progress != Progress::Pending {
                return progress;
            }
        }
        Progress::Pending
    }

    /// Text accumulated so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    fn handle_line(&mut self, line: &str) -> Progress {
        if line.is_empty() {
            return Progress::Pending;
        }
        debug!("SSE line: {}", line);

        if let Some(event_type) = line.strip_prefix("event: ") {
            self.current_event_type = Some(event_type.to_string());
            return Progress::Pending;
        }

        let Some(data) = line.strip_prefix("data: ") else {
            return Progress::Pending;
        };

        if data == "[DONE]" {
            debug!("Received [DONE] marker");
            return Progress::Pending;
        }

        let event_type = self.current_event_type.take().or_else(|| {
            serde_json::from_str::<SseEvent>(data)
                .ok()
                .map(|e| e.event_type)
        });

        match event_type.as_deref() {
            Some("response.output_text.delta") => {
                if let Ok(event) = serde_json::from_str::<SseEvent>(data) {
                    self.delta_count += 1;
                    self.text.push_str(&event.delta);
                }
                Progress::Pending
            }
            Some("response.completed") => {
                info!(
                    "Stream complete: {} deltas, {} content bytes",
                    self.delta_count,
                    self.text.len()
                );
                Progress::Completed
            }
            Some("response.failed") | Some("response.incomplete") | Some("error") => {
                let message = error_message(data);
                warn!("Stream reported failure: {}", message);
                Progress::Failed(message)
            }
            Some(other) => {
                debug!("Ignoring event type '{}': {} bytes", other, data.len());
                Progress::Pending
            }
            None => {
                debug!("Could not parse event type from data: {}", data);
                Progress::Pending
            }
        }
    }
}

/// Best-effort extraction of a human-readable message from an error event.
fn error_message(data: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(data) else {
        return data.to_string();
    };
    let candidates = [
        value.pointer("/response/error/message"),
        value.pointer("/response/incomplete_details/reason"),
        value.pointer("/error/message"),
        value.pointer("/message"),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| data.to_string())
}

/// Drain a streaming response and return the concatenated output text.
pub(crate) async fn read_output_text(
    mut response: reqwest::Response,
    provider: &str,
) -> Result<String, ProviderError> {
    let status = response.status().as_u16();
    let mut collector = OutputCollector::new();

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?
    {
        debug!("{} chunk received: {} bytes", provider, chunk.len());
        match collector.feed(&chunk) {
            Progress::Pending => {}
            Progress::Completed => break,
            Progress::Failed(message) => return Err(ProviderError::Api { status, message }),
        }
    }

    if collector.text().trim().is_empty() {
        return Err(ProviderError::Parse(format!(
            "{provider} returned no output text"
        )));
    }
    Ok(collector.into_text())
}
