//! UI Components for the image predictor.
//!
//! # Layout Components
//! - [`Header`] - Title bar with service address and health dot
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Image picking with drag & drop, predict button, status
//! - [`PreviewSection`] - Selected image and its metadata
//! - [`ResultsSection`] - Top-1 summary and ranked bars
//! - [`Toast`] - Transient notifications

mod header;
mod hero;
mod upload;
mod preview;
mod results;
mod toast;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use preview::*;
pub use results::*;
pub use toast::*;
pub use footer::*;
