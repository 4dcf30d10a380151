//! Reusable response-body buffers
//!
//! Every request absorbs its whole body into a [`PooledBuffer`] before the
//! decoder runs over it in place. Dropping the buffer hands it back to its
//! pool; [`PooledBuffer::discard`] throws it away instead, which is what the
//! transport does when a body read fails halfway and the contents can no
//! longer be trusted.

use crate::constants::{
    DEFAULT_BUFFER_CAPACITY, DEFAULT_MAX_IDLE_BUFFERS, DEFAULT_MAX_RETAINED_CAPACITY,
};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::trace;

/// Sizing limits for a [`BufferPool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Capacity of a newly allocated buffer
    pub initial_capacity: usize,
    /// Maximum number of idle buffers kept for reuse
    pub max_idle: usize,
    /// Buffers whose capacity exceeds this are dropped on release
    pub max_retained_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_BUFFER_CAPACITY,
            max_idle: DEFAULT_MAX_IDLE_BUFFERS,
            max_retained_capacity: DEFAULT_MAX_RETAINED_CAPACITY,
        }
    }
}

/// A thread-safe free list of byte buffers
///
/// The lock only guards pushing and popping the free list; a checked-out
/// buffer is owned exclusively by its [`PooledBuffer`] and is never visible to
/// other callers until it has been cleared and returned.
pub struct BufferPool {
    free: Mutex<Vec<Vec<u8>>>,
    config: PoolConfig,
}

impl BufferPool {
    /// Create an empty pool with default limits
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// Create an empty pool with custom limits
    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            free: Mutex::new(Vec::new()),
            config,
        }
    }

    /// The process-wide pool used by clients that are not given their own
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<BufferPool>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(Self::new())))
    }

    /// Limits this pool was created with
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Check out an empty buffer
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let recycled = self.lock().pop();
        let mut buf = recycled.unwrap_or_else(|| Vec::with_capacity(self.config.initial_capacity));
        buf.clear();

        PooledBuffer {
            buf,
            pool: Some(self),
        }
    }

    /// Number of buffers waiting to be reused
    pub fn idle(&self) -> usize {
        self.lock().len()
    }

    fn release(&self, mut buf: Vec<u8>) {
        if buf.capacity() > self.config.max_retained_capacity {
            trace!(
                capacity = buf.capacity(),
                "Dropping oversized buffer instead of recycling it"
            );
            return;
        }

        buf.clear();
        let mut free = self.lock();
        if free.len() < self.config.max_idle {
            free.push(buf);
        }
    }

    // A panic while holding the lock cannot leave the free list half-updated,
    // so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<Vec<u8>>> {
        self.free.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool")
            .field("idle", &self.idle())
            .field("config", &self.config)
            .finish()
    }
}

/// A buffer checked out of a [`BufferPool`]
///
/// Dereferences to the underlying `Vec<u8>`. Returned to the pool on drop.
pub struct PooledBuffer<'a> {
    buf: Vec<u8>,
    pool: Option<&'a BufferPool>,
}

impl PooledBuffer<'_> {
    /// Drop the buffer without returning it to the pool
    pub fn discard(mut self) {
        trace!(len = self.buf.len(), "Discarding buffer after failed read");
        self.pool = None;
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl fmt::Debug for PooledBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledBuffer")
            .field("len", &self.buf.len())
            .field("capacity", &self.buf.capacity())
            .finish()
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.release(std::mem::take(&mut self.buf));
        }
    }
}
