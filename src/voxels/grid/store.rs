//! # Block Store Module
//!
//! This module provides the two concrete storage encodings behind the grid:
//! a single 8-bit buffer for narrow identifiers, and a low/high byte buffer
//! pair for wide identifiers.
//!
//! The split is expressed through the [`BlockStore`] trait so that the grid
//! can be generic over identifier width. Every implementation is fully
//! monomorphized; the narrow store's `set` is a single byte write with no
//! high-byte path at all.

use super::error::GridError;
use crate::voxels::block::{BlockId, BlockRaw, MAX_DEFINED_MASK};

/// Flat per-voxel storage for block identifiers.
///
/// Implementations own their buffers exclusively and perform no bounds
/// interpretation of their own: the grid supplies already-flattened indices.
pub trait BlockStore {
    /// Creates a store with no buffers, the "no data" state of an unloaded
    /// grid.
    fn empty() -> Self;

    /// The number of voxels this store holds.
    fn len(&self) -> usize;

    /// Whether this store holds no voxels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the identifier at the given flattened index.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> BlockId;

    /// Writes the identifier at the given flattened index.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn set(&mut self, index: usize, id: BlockId);
}

/// Single-buffer storage for identifiers that fit in 8 bits (the common
/// case).
///
/// Writes truncate the identifier to its low byte; reads widen it back.
#[derive(Debug)]
pub struct NarrowBlocks {
    blocks: Box<[BlockRaw]>,
}

impl NarrowBlocks {
    /// Creates a narrow store that takes ownership of the given raw buffer.
    ///
    /// # Arguments
    /// * `blocks` - One byte per voxel, in row-major order
    pub fn new(blocks: Vec<BlockRaw>) -> Self {
        NarrowBlocks {
            blocks: blocks.into_boxed_slice(),
        }
    }
}

impl BlockStore for NarrowBlocks {
    fn empty() -> Self {
        NarrowBlocks {
            blocks: Box::default(),
        }
    }

    fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    fn get(&self, index: usize) -> BlockId {
        self.blocks[index] as BlockId
    }

    #[inline]
    fn set(&mut self, index: usize, id: BlockId) {
        self.blocks[index] = id as BlockRaw;
    }
}

/// Dual-buffer storage for identifiers wider than 8 bits.
///
/// The low buffer holds bits 0-7 of each identifier and the high buffer bits
/// 8-15. Reads recombine the two bytes and mask the result with
/// [`MAX_DEFINED_MASK`] so a corrupted high byte cannot produce an identifier
/// above the known-block range.
#[derive(Debug)]
pub struct WideBlocks {
    low: Box<[BlockRaw]>,
    high: Box<[BlockRaw]>,
}

impl WideBlocks {
    /// Creates a wide store that takes ownership of the given buffer pair.
    ///
    /// # Arguments
    /// * `low` - The low byte of each voxel's identifier, in row-major order
    /// * `high` - The high byte of each voxel's identifier, same order
    ///
    /// # Errors
    /// Returns [`GridError::DimensionMismatch`] if the two buffers differ in
    /// length.
    pub fn new(low: Vec<BlockRaw>, high: Vec<BlockRaw>) -> Result<Self, GridError> {
        if low.len() != high.len() {
            return Err(GridError::DimensionMismatch {
                expected: low.len(),
                actual: high.len(),
            });
        }
        Ok(WideBlocks {
            low: low.into_boxed_slice(),
            high: high.into_boxed_slice(),
        })
    }
}

impl BlockStore for WideBlocks {
    fn empty() -> Self {
        WideBlocks {
            low: Box::default(),
            high: Box::default(),
        }
    }

    fn len(&self) -> usize {
        self.low.len()
    }

    #[inline]
    fn get(&self, index: usize) -> BlockId {
        ((self.low[index] as BlockId) | ((self.high[index] as BlockId) << 8)) & MAX_DEFINED_MASK
    }

    #[inline]
    fn set(&mut self, index: usize, id: BlockId) {
        self.low[index] = id as BlockRaw;
        self.high[index] = (id >> 8) as BlockRaw;
    }
}
