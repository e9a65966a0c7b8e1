// Layout: density-aware scale selection, font metrics and page-fill estimation.
// Everything here is pure and synchronous; a render never waits on it.

pub mod font_metrics;
pub mod page_fill;
pub mod scale;

pub use font_metrics::PageConfig;
