pub mod compositor;
pub mod projector;

pub use compositor::{compose_frame, StrokeCmd};
pub use projector::project;
