//! readycheck-report — Markdown and HTML rendering of assessment reports.

pub mod html;
pub mod markdown;
