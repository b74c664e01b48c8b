//! Built-in use cases.
//!
//! Financial and research scenarios, each a [`UseCase`] implementation.
//! Most are a single agent working toward its goal; fraud detection,
//! algorithmic trading and paper summarization run three-agent crews
//! whose later tasks consume earlier outputs.

pub mod algorithmic_trading;
pub mod fraud_detection;
pub mod paper_summarization;
pub mod simple;

pub use algorithmic_trading::AlgorithmicTrading;
pub use fraud_detection::FraudDetection;
pub use paper_summarization::PaperSummarization;
pub use simple::{SINGLE_AGENT_USE_CASES, SingleAgentUseCase};

use crate::use_case::traits::UseCase;
use std::sync::Arc;

/// Every built-in use case, in no particular order.
pub fn builtin_use_cases() -> Vec<Arc<dyn UseCase>> {
    let mut all: Vec<Arc<dyn UseCase>> = vec![
        Arc::new(FraudDetection),
        Arc::new(AlgorithmicTrading),
        Arc::new(PaperSummarization),
    ];
    all.extend(
        SINGLE_AGENT_USE_CASES
            .iter()
            .map(|u| Arc::new(*u) as Arc<dyn UseCase>),
    );
    all
}
