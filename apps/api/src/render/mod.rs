// Rendering: the closed template family, the DocumentTree it produces, the
// precomputed style tables, and the HTML/text serializers over the tree.

pub mod common;
pub mod document;
pub mod handlers;
pub mod html;
pub mod registry;
pub mod style;
pub mod templates;

pub use registry::list;
