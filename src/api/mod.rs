mod client;

pub use client::{AnswerService, ApiClient, LoginOutcome, UploadOutcome};
