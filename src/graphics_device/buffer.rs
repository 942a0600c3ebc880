/// Buffer trait and descriptor.

use crate::error::Result;

/// Buffer usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Static vertex data (shared quad/cube geometry)
    Vertex,
    /// Per-frame uniform data, rewritten every frame through map/unmap
    Uniform,
}

/// Descriptor for creating a buffer.
#[derive(Debug, Clone)]
pub struct BufferDesc {
    /// Size in bytes
    pub size: u64,
    pub usage: BufferUsage,
    /// Initial contents (vertex buffers); must not exceed `size`
    pub data: Option<Vec<u8>>,
}

/// Buffer resource trait.
///
/// Uniform buffers follow a strict map/write/unmap discipline: `write`
/// is only valid between `map_write` and `unmap`, and the device
/// guarantees the GPU is not reading the mapped range (double buffering
/// or fencing — backend's responsibility).
pub trait Buffer: Send + Sync {
    /// Total size in bytes.
    fn size(&self) -> u64;

    fn usage(&self) -> BufferUsage;

    /// Open an exclusive write window. Fails if already mapped.
    fn map_write(&self) -> Result<()>;

    /// Close the write window. No-op when not mapped.
    fn unmap(&self);

    /// Write bytes at `offset`. Requires an open write window for
    /// uniform buffers; writes beyond `size` are rejected, never UB.
    fn write(&self, offset: u64, data: &[u8]) -> Result<()>;
}
