//! Fixed capacities, binding indices and well-known registry keys.
//!
//! Every shader-invoking collaborator must respect the uniform-buffer
//! binding convention below; the capacities bound the per-frame uniform
//! buffers and the view queue.

/// Maximum number of simultaneously active views per frame.
///
/// Also the width of the per-entity visibility bitset — one bit per
/// view slot.
pub const MAX_VIEWS: usize = 64;

/// Maximum number of entities the per-entity uniform buffer can hold.
pub const MAX_ENTITIES: usize = 1024;

/// Per-scene light array capacities.
pub const MAX_DIRECTIONAL_LIGHTS: usize = 8;
pub const MAX_SPOT_LIGHTS: usize = 32;
pub const MAX_POINT_LIGHTS: usize = 32;

/// Shadow-casting light caps (one atlas slice group per casting light).
pub const MAX_SHADOW_CASTING_DIRECTIONAL_LIGHTS: usize = 8;
pub const MAX_SHADOW_CASTING_SPOT_LIGHTS: usize = 8;
pub const MAX_SHADOW_CASTING_POINT_LIGHTS: usize = 8;

/// Maximum directional-light cascade count.
pub const MAX_SHADOW_MAP_CASCADES: usize = 4;

// ===== UNIFORM BUFFER BINDING CONVENTION =====

/// Binding index of the per-view uniform buffer.
pub const PER_VIEW_UBO_BINDING: u32 = 0;
/// Binding index of the per-entity uniform buffer (range-bound per entity).
pub const PER_ENTITY_UBO_BINDING: u32 = 1;
/// Binding index of the per-scene (light arrays) uniform buffer.
pub const PER_SCENE_UBO_BINDING: u32 = 2;

// ===== WELL-KNOWN REGISTRY KEYS =====

/// Default off-screen color target, rebuilt on window resize.
pub const RENDER_TARGET_COLOR: &str = "render-target-color";
/// Default off-screen depth target, rebuilt on window resize.
pub const RENDER_TARGET_DEPTH: &str = "render-target-depth";
/// Framebuffer binding the default color + depth targets.
pub const FRAMEBUFFER_DEFAULT: &str = "framebuffer-default";

/// Directional-light shadow atlas (layers = cascades x casting lights).
pub const SHADOW_MAPS_DIRECTIONAL: &str = "shadow-maps-directional";
/// Spot-light shadow atlas (one layer per casting light).
pub const SHADOW_MAPS_SPOT: &str = "shadow-maps-spot";
/// Point-light shadow atlas (six faces per casting light).
pub const SHADOW_MAPS_POINT: &str = "shadow-maps-point";

// ===== SHADOW MAP SIZE TABLES =====

/// Shadow-map resolutions indexed by `ShadowMapQuality`.
pub const DIRECTIONAL_SHADOW_MAP_SIZES: [u32; 4] = [512, 1024, 2048, 4096];
pub const SPOT_SHADOW_MAP_SIZES: [u32; 4] = [512, 1024, 2048, 4096];
pub const POINT_SHADOW_MAP_SIZES: [u32; 4] = [256, 512, 1024, 2048];
