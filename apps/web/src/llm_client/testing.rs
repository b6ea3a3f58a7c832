//! In-memory `GenerativeService` used by tests. Records every remote call.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenerativeService, LlmError, ModelInfo};

/// A recorded `generate_content` call: (model, prompt).
pub type GenerateCall = (String, String);

pub struct StubService {
    catalog: Option<Vec<ModelInfo>>,
    reply: Result<String, (u16, String)>,
    list_calls: AtomicUsize,
    generate_calls: Mutex<Vec<GenerateCall>>,
}

pub fn model(name: &str, methods: &[&str]) -> ModelInfo {
    ModelInfo {
        name: name.to_string(),
        display_name: None,
        supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
    }
}

impl StubService {
    /// A service with a one-entry catalog that answers every prompt with `text`.
    pub fn replying(text: &str) -> Self {
        Self {
            catalog: Some(vec![model("models/gemini-1.5-flash", &["generateContent"])]),
            reply: Ok(text.to_string()),
            list_calls: AtomicUsize::new(0),
            generate_calls: Mutex::new(Vec::new()),
        }
    }

    /// A service whose generation call fails with an API error.
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Err((status, message.to_string())),
            ..Self::replying("")
        }
    }

    pub fn with_catalog(mut self, catalog: Vec<ModelInfo>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Makes catalog listing fail.
    pub fn without_catalog(mut self) -> Self {
        self.catalog = None;
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn generate_calls(&self) -> Vec<GenerateCall> {
        self.generate_calls.lock().unwrap().clone()
    }

    pub fn remote_calls(&self) -> usize {
        self.list_calls() + self.generate_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeService for StubService {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.catalog.clone().ok_or_else(|| LlmError::Api {
            status: 503,
            message: "catalog unavailable".to_string(),
        })
    }

    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        self.generate_calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err((status, message)) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
