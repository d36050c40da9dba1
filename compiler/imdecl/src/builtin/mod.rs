//! Compiled-in declaration listing.

/// Display name used in diagnostics for [`DRAW_LIST_DECLS`].
pub const DRAW_LIST_NAME: &str = "<builtin:ImDrawList>";

/// Hand-curated excerpt of the `ImDrawList` member declarations from the
/// Dear ImGui header, with their comments and inline bodies.
/// Declarations that cannot be serialized (callbacks, clone helpers) are
/// commented out.
pub const DRAW_LIST_DECLS: &str = include_str!("draw_list.h");
