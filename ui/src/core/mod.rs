//! Platform-agnostic logic: input collection, normalization, the request
//! lifecycle and the scoring client. Nothing here touches the DOM.

pub mod client;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod field;
pub mod format;
pub mod form;
pub mod normalize;
pub mod record;
pub mod sample;
pub mod timing;
pub mod upload;
pub mod verdict;
