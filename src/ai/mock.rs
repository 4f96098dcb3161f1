use super::{GenerateContentResponse, GenerativeModelClient, Part};
use crate::error::RemoteError;
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory [`GenerativeModelClient`] that records every request's parts.
///
/// Responses cycle through the configured list; with none configured the
/// mock echoes the number of parts it received.
pub struct MockGenerativeModel {
    model: String,
    responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    failure: Arc<Mutex<Option<(u16, String)>>>,
    requests: Arc<Mutex<Vec<Vec<Part>>>>,
}

impl MockGenerativeModel {
    pub fn new() -> Self {
        Self {
            model: "mock-model".to_string(),
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_model_id(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_text_response(self, text: &str) -> Self {
        self.with_response(GenerateContentResponse::from_text(text))
    }

    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Fail every call with an API status error.
    pub fn with_status_error(self, status: u16, body: &str) -> Self {
        *self.failure.lock().unwrap() = Some((status, body.to_string()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Parts of every request seen so far, oldest first.
    pub fn requests(&self) -> Vec<Vec<Part>> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, parts: Vec<Part>) -> Result<GenerateContentResponse> {
        let part_count = parts.len();
        let call_index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(parts);
            requests.len() - 1
        };

        if let Some((status, body)) = self.failure.lock().unwrap().clone() {
            return Err(RemoteError::Status { status, body }.into());
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(GenerateContentResponse::from_text(format!(
                "received {} part(s)",
                part_count
            )))
        } else {
            Ok(responses[call_index % responses.len()].clone())
        }
    }
}

impl Default for MockGenerativeModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeModelClient for MockGenerativeModel {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate_from_text(&self, prompt: &str) -> Result<GenerateContentResponse> {
        self.respond(vec![Part::text(prompt)])
    }

    async fn generate_from_parts(&self, parts: Vec<Part>) -> Result<GenerateContentResponse> {
        self.respond(parts)
    }
}
