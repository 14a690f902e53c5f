//! Summarizer adapters. Implement SummarizerPort for narrative summaries.
//!
//! Provides the Hugging Face adapter, a mock for tests, and the output cleaner.

pub mod cleaner;
pub mod huggingface_adapter;
pub mod mock_adapter;

pub use cleaner::clean_summary;
pub use huggingface_adapter::HuggingFaceAdapter;
pub use mock_adapter::MockSummarizer;
