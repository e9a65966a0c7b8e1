// One renderer per template id. Each exposes `render(&Resume, &PageConfig) -> DocumentTree`
// and is reached through the registry's dispatch table.

pub mod classic_executive;
pub mod fresh_graduate;
pub mod minimal_elegant;
pub mod modern_professional;
pub mod tech_focused;
