//! Scene graph state.
//!
//! Responsibilities:
//! - own every renderable object in one collection
//! - hand out stable, generational ids instead of shared references
//! - keep transform/visibility records plain data so callbacks can mutate them

mod key;
mod list;
mod object;

pub use key::ObjectId;
pub use list::Scene;
pub use object::{Material, SceneObject, Transform};
