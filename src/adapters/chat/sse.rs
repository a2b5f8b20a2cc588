//! Line-oriented decoder for streamed chat-completion bodies.
//!
//! The endpoint replies with an event-stream style body: newline-delimited
//! `data: {...}` chunks terminated by a `data: [DONE]` sentinel. Network
//! reads arrive in arbitrary fragments, so input is buffered and only
//! complete lines are consumed.

use serde_json::Value;

/// Incremental decoder. Feed raw body bytes, collect content deltas.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    buffer: Vec<u8>,
    done: bool,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the `[DONE]` sentinel has been seen. Further input is ignored.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feed a fragment of the response body. Returns the content deltas
    /// completed by this fragment, in order.
    ///
    /// A `data:` payload that does not yet parse as JSON is pushed back into
    /// the buffer and retried once more input arrives, so a payload spanning
    /// several reads is reassembled rather than dropped.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        if self.done {
            return Vec::new();
        }
        self.buffer.extend_from_slice(chunk);

        let mut deltas = Vec::new();
        while !self.done {
            let Some(nl) = self.buffer.iter().position(|&b| b == b'\n') else {
                break;
            };
            let line_bytes: Vec<u8> = self.buffer.drain(..=nl).collect();
            // Lines are complete here, so lossy conversion cannot split a
            // multi-byte character.
            let mut line = String::from_utf8_lossy(&line_bytes[..nl]).into_owned();
            if line.ends_with('\r') {
                line.pop();
            }

            if line.trim().is_empty() || line.starts_with(':') {
                continue;
            }
            let Some(payload) = line.strip_prefix("data: ") else {
                continue;
            };
            let payload = payload.trim();
            if payload == "[DONE]" {
                self.done = true;
                break;
            }

            match serde_json::from_str::<Value>(payload) {
                Ok(event) => {
                    if let Some(content) = event["choices"][0]["delta"]["content"].as_str() {
                        if !content.is_empty() {
                            deltas.push(content.to_string());
                        }
                    }
                }
                Err(_) => {
                    // Payload may continue past this newline; put the line
                    // back and wait for more input.
                    let mut restored = line.into_bytes();
                    restored.push(b'\n');
                    restored.extend_from_slice(&self.buffer);
                    self.buffer = restored;
                    break;
                }
            }
        }
        deltas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(content: &str) -> String {
        format!(
            "data: {{\"choices\":[{{\"delta\":{{\"content\":\"{}\"}}}}]}}\n",
            content
        )
    }

    #[test]
    fn test_single_event() {
        let mut dec = StreamDecoder::new();
        let deltas = dec.feed(event("Hello").as_bytes());
        assert_eq!(deltas, vec!["Hello"]);
        assert!(!dec.is_done());
    }

    #[test]
    fn test_multiple_events_in_one_chunk() {
        let mut dec = StreamDecoder::new();
        let body = format!("{}{}", event("Hel"), event("lo"));
        let deltas = dec.feed(body.as_bytes());
        assert_eq!(deltas, vec!["Hel", "lo"]);
    }

    #[test]
    fn test_line_split_across_feeds() {
        let mut dec = StreamDecoder::new();
        let line = event("Hello");
        let (a, b) = line.split_at(10);
        assert!(dec.feed(a.as_bytes()).is_empty());
        assert_eq!(dec.feed(b.as_bytes()), vec!["Hello"]);
    }

    #[test]
    fn test_crlf_lines() {
        let mut dec = StreamDecoder::new();
        let body = "data: {\"choices\":[{\"delta\":{\"content\":\"Hi\"}}]}\r\n";
        assert_eq!(dec.feed(body.as_bytes()), vec!["Hi"]);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let mut dec = StreamDecoder::new();
        let body = format!(": keep-alive\n\n{}", event("Hi"));
        assert_eq!(dec.feed(body.as_bytes()), vec!["Hi"]);
    }

    #[test]
    fn test_done_sentinel_stops_decoding() {
        let mut dec = StreamDecoder::new();
        let body = format!("{}data: [DONE]\n{}", event("Hi"), event("ignored"));
        assert_eq!(dec.feed(body.as_bytes()), vec!["Hi"]);
        assert!(dec.is_done());
        assert!(dec.feed(event("late").as_bytes()).is_empty());
    }

    #[test]
    fn test_event_without_content_ignored() {
        let mut dec = StreamDecoder::new();
        let body = "data: {\"choices\":[{\"delta\":{}}]}\n";
        assert!(dec.feed(body.as_bytes()).is_empty());
    }

    #[test]
    fn test_partial_json_payload_reassembled() {
        // A newline inside the JSON payload splits the line; the first half
        // fails to parse and is retried once the rest arrives.
        let mut dec = StreamDecoder::new();
        assert!(dec
            .feed(b"data: {\"choices\":[{\"delta\":{\"content\":\"Hi\"}}]")
            .is_empty());
        assert_eq!(dec.feed(b"}\n"), vec!["Hi"]);
    }

    #[test]
    fn test_non_data_lines_skipped() {
        let mut dec = StreamDecoder::new();
        let body = format!("event: message\n{}", event("Hi"));
        assert_eq!(dec.feed(body.as_bytes()), vec!["Hi"]);
    }

    #[test]
    fn test_multibyte_content_across_chunk_boundary() {
        let mut dec = StreamDecoder::new();
        let line = event("🌡️ fever");
        let bytes = line.as_bytes();
        // Split inside the emoji's UTF-8 sequence.
        let split = line.find('🌡').unwrap() + 2;
        assert!(dec.feed(&bytes[..split]).is_empty());
        assert_eq!(dec.feed(&bytes[split..]), vec!["🌡️ fever"]);
    }
}
