//! Frustum/culling engine.
//!
//! Derives a six-plane frustum per view and tests entity bounding
//! volumes against every active view independently, writing the result
//! into each entity's per-view visibility bitset.

pub mod frustum;
pub mod culler;

pub use frustum::{Frustum, Obb, Sphere};
pub use culler::cull_scene;
