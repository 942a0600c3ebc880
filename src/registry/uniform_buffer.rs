//! Fixed-stride uniform buffer with a scoped write window.
//!
//! Wraps a device buffer sized `stride * count` and hands out record
//! writes only through a [`MappedBuffer`] guard, so the unmap can never
//! be forgotten on an early return.

use std::sync::{Arc, Mutex};
use crate::engine_bail;
use crate::error::Result;
use crate::graphics_device::{Buffer, BufferDesc, BufferUsage, GraphicsDevice};

const SOURCE: &str = "nebula::UniformBuffer";

/// A uniform buffer holding `count` records of `stride` bytes each.
///
/// Record `i` lives at byte offset `i * stride`; shader-side bindings
/// address the same records with dynamic offsets, so the stride must
/// already satisfy the device's uniform-offset alignment.
pub struct UniformBuffer {
    buffer: Arc<dyn Buffer>,
    stride: u64,
    count: u64,
}

impl UniformBuffer {
    /// Create the underlying device buffer, zero-initialized.
    pub fn new(
        device: &Arc<Mutex<dyn GraphicsDevice>>,
        stride: u64,
        count: u64,
    ) -> Result<Self> {
        if stride == 0 || count == 0 {
            engine_bail!(
                SOURCE,
                InvalidResource,
                "uniform buffer needs non-zero stride and count (stride {}, count {})",
                stride,
                count
            );
        }

        let buffer = device.lock().unwrap().create_buffer(BufferDesc {
            size: stride * count,
            usage: BufferUsage::Uniform,
            data: None,
        })?;

        Ok(Self { buffer, stride, count })
    }

    pub fn stride(&self) -> u64 {
        self.stride
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Total size in bytes.
    pub fn size(&self) -> u64 {
        self.stride * self.count
    }

    /// The underlying device buffer, for binding.
    pub fn buffer(&self) -> &Arc<dyn Buffer> {
        &self.buffer
    }

    /// Open a write window over the whole buffer. The returned guard
    /// unmaps on drop.
    pub fn map_write(&self) -> Result<MappedBuffer<'_>> {
        self.buffer.map_write()?;
        Ok(MappedBuffer { parent: self })
    }
}

/// Open write window over a [`UniformBuffer`]. Unmaps when dropped.
pub struct MappedBuffer<'a> {
    parent: &'a UniformBuffer,
}

impl MappedBuffer<'_> {
    /// Write one record. `data` may be shorter than the stride (the
    /// tail keeps its previous contents) but never longer.
    pub fn write_record(&self, index: u64, data: &[u8]) -> Result<()> {
        if index >= self.parent.count {
            engine_bail!(
                SOURCE,
                InvalidResource,
                "record index {} out of range (count {})",
                index,
                self.parent.count
            );
        }
        if data.len() as u64 > self.parent.stride {
            engine_bail!(
                SOURCE,
                InvalidResource,
                "record data of {} bytes exceeds stride {}",
                data.len(),
                self.parent.stride
            );
        }

        self.parent.buffer.write(index * self.parent.stride, data)
    }
}

impl Drop for MappedBuffer<'_> {
    fn drop(&mut self) {
        self.parent.buffer.unmap();
    }
}

#[cfg(test)]
#[path = "uniform_buffer_tests.rs"]
mod tests;
