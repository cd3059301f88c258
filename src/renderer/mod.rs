//! WebGPU rendering module
//!
//! A read-only draw pass: `frame` folds the post-tick game state into a
//! triangle list, `pipeline` puts it on screen.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::build_frame;
pub use pipeline::RenderState;
