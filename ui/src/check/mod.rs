//! The fraud check page: entry tabs, result card and error banner.

mod manual;
mod outcome;
mod upload;
mod view;

pub use manual::ManualEntry;
pub use outcome::{error_message, ErrorBanner, VerdictCard};
pub use upload::UploadZone;
pub use view::CheckView;
