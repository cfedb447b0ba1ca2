// src/config.rs

/// Questions requested per quiz.
pub const QUESTION_AMOUNT: usize = 5;
/// Open Trivia DB category 9: General Knowledge.
pub const CATEGORY: u32 = 9;
pub const DIFFICULTY: &str = "easy";
pub const QUESTION_TYPE: &str = "multiple";
/// Minimum score that counts as a pass (and triggers the confetti).
pub const PASS_THRESHOLD: usize = 3;

const API_BASE: &str = "https://opentdb.com/api.php";
#[cfg(not(target_arch = "wasm32"))]
const ENDPOINT_ENV: &str = "QUIZZICAL_API_URL";

/// Seconds before the native client gives up on the request.
#[cfg(not(target_arch = "wasm32"))]
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub endpoint: String,
    pub pass_threshold: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            pass_threshold: PASS_THRESHOLD,
        }
    }
}

impl QuizConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            pass_threshold: PASS_THRESHOLD,
        }
    }
}

pub fn trivia_url() -> String {
    format!(
        "{API_BASE}?amount={QUESTION_AMOUNT}&category={CATEGORY}&difficulty={DIFFICULTY}&type={QUESTION_TYPE}"
    )
}

fn normalize_endpoint(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_endpoint() -> String {
    std::env::var(ENDPOINT_ENV)
        .ok()
        .and_then(|v| normalize_endpoint(&v))
        .unwrap_or_else(trivia_url)
}

#[cfg(target_arch = "wasm32")]
fn default_endpoint() -> String {
    // Web builds can only override it at compile time
    option_env!("QUIZZICAL_API_URL")
        .and_then(normalize_endpoint)
        .unwrap_or_else(trivia_url)
}
