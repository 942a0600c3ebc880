//! Scene collaborator data model.
//!
//! The core consumes a pre-populated, flat entity/light list per frame:
//! scene-graph authoring, animation and asset loading belong to external
//! collaborators.

pub mod camera;
pub mod entity;
pub mod lights;
pub mod scene;

pub use camera::Camera;
pub use entity::{Entity, SubMeshBounds, Transform};
pub use lights::{DirectionalLight, PointLight, SpotLight};
pub use scene::Scene;
