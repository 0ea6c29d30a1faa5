//! Raw candidate responses for one assessment attempt.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::ResponseError;

/// The answer a candidate gave to one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseValue {
    /// Likert scale rating.
    Likert(u8),
    /// Index of the chosen option of a forced-choice item.
    Choice(usize),
}

/// One answered item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub item_id: String,
    pub value: ResponseValue,
    /// Time spent on the item. Optional; speed checks degrade without it.
    #[serde(default)]
    pub response_time_ms: Option<u32>,
    /// Candidate-reported confidence in [0, 1], where captured.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl Response {
    pub fn likert(item_id: impl Into<String>, value: u8) -> Self {
        Self {
            item_id: item_id.into(),
            value: ResponseValue::Likert(value),
            response_time_ms: None,
            confidence: None,
        }
    }

    pub fn choice(item_id: impl Into<String>, index: usize) -> Self {
        Self {
            item_id: item_id.into(),
            value: ResponseValue::Choice(index),
            response_time_ms: None,
            confidence: None,
        }
    }

    pub fn with_time(mut self, ms: u32) -> Self {
        self.response_time_ms = Some(ms);
        self
    }
}

/// All responses for one attempt, in answer order.
///
/// Construction enforces the at-most-one-response-per-item invariant;
/// a duplicate indicates a capture-layer bug and fails loudly rather
/// than silently overwriting.
#[derive(Debug, Clone)]
pub struct ResponseSet {
    session_id: String,
    assessment_type: String,
    responses: Vec<Response>,
    by_item: FxHashMap<String, usize>,
    completed_at: Option<DateTime<Utc>>,
}

impl ResponseSet {
    pub fn new(
        session_id: impl Into<String>,
        assessment_type: impl Into<String>,
        responses: Vec<Response>,
    ) -> Result<Self, ResponseError> {
        let mut by_item = FxHashMap::default();
        for (idx, r) in responses.iter().enumerate() {
            if by_item.insert(r.item_id.clone(), idx).is_some() {
                return Err(ResponseError::DuplicateResponse {
                    item_id: r.item_id.clone(),
                });
            }
        }
        Ok(Self {
            session_id: session_id.into(),
            assessment_type: assessment_type.into(),
            responses,
            by_item,
            completed_at: None,
        })
    }

    pub fn with_completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at = Some(at);
        self
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn assessment_type(&self) -> &str {
        &self.assessment_type
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn get(&self, item_id: &str) -> Option<&Response> {
        self.by_item.get(item_id).map(|&i| &self.responses[i])
    }

    /// Responses in the order the candidate answered.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}
