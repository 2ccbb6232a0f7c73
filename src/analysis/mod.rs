pub mod engine;
pub mod graph;
pub mod scoring;
pub mod types;
pub mod validate;


pub use engine::*;
pub use graph::*;
pub use scoring::*;
pub use types::*;
pub use validate::*;
