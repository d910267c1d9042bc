// Page geometry and preview fitting.
// Pure computations; the handlers live in `render::handlers`.

pub mod page;
pub mod preview;

pub use page::{a4, PageGeometry};
pub use preview::{compute_preview_scale, PreviewScale};
