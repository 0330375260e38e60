//! # Grid Module
//!
//! This module provides the `VoxelGrid` struct, the dense fixed-size block
//! container at the heart of the voxel world.
//!
//! ## Layout
//!
//! The grid flattens 3D coordinates into one contiguous row-major buffer
//! using `index = (y * length + z) * width + x`. That layout is the de facto
//! interchange contract with whatever pipeline generates or parses the raw
//! buffer, and is reproduced exactly.
//!
//! ## Access Disciplines
//!
//! Three read policies coexist, each for a different consumer:
//!
//! * [`VoxelGrid::get`] / [`VoxelGrid::set`] - unchecked, for hot loops that
//!   already validated their coordinates
//! * [`VoxelGrid::get_safe`] - checked, returning the air sentinel outside
//!   the grid
//! * [`VoxelGrid::get_physics`] - boundary-extrapolating, returning bedrock
//!   beyond the sides and floor but air above the ceiling, so entities can
//!   neither walk off the world edge nor be blocked by the open sky
//!
//! ## Lifecycle
//!
//! A grid is either `empty` (no buffers, dimensions zero) or `loaded`
//! (buffers sized exactly to volume). Only [`VoxelGrid::load`] and
//! [`VoxelGrid::reset`] transition between the two, and a failed `load`
//! leaves the previous state fully intact.

use cgmath::Point3;
use log::info;

use crate::voxels::block::{BlockId, AIR_ID, BEDROCK_ID};

pub mod error;
pub mod store;

pub use error::GridError;
pub use store::{BlockStore, NarrowBlocks, WideBlocks};

cfg_if::cfg_if! {
    if #[cfg(feature = "wide-blocks")] {
        /// The block store variant selected by the build configuration.
        ///
        /// The `wide-blocks` feature is enabled, so world grids carry a
        /// low/high byte buffer pair.
        pub type WorldBlocks = WideBlocks;
    } else {
        /// The block store variant selected by the build configuration.
        ///
        /// With the `wide-blocks` feature disabled (the default), world
        /// grids carry a single 8-bit buffer.
        pub type WorldBlocks = NarrowBlocks;
    }
}

/// The grid type used for the world under the current build configuration.
pub type WorldGrid = VoxelGrid<WorldBlocks>;

/// A fixed-size 3D grid of block identifiers backed by one dense buffer.
///
/// The grid owns its storage exclusively, keeps its dimensions and the
/// derived per-axis maxima, and performs all coordinate-to-index and bounds
/// logic itself. It is a leaf: rendering and physics call into it, and it
/// calls into nothing.
///
/// # Type Parameters
/// - `S`: The storage encoding, narrow or wide. Defaults to the
///   build-configured [`WorldBlocks`].
///
/// # Examples
///
/// ```
/// use voxel_grid::{BlockType, NarrowBlocks, VoxelGrid};
///
/// let mut grid = VoxelGrid::new();
/// grid.load(NarrowBlocks::new(vec![0; 27]), 3, 3, 3).unwrap();
/// assert!(grid.has_blocks());
///
/// grid.set(2, 0, 1, BlockType::DIRT.id());
/// assert_eq!(grid.get(2, 0, 1), BlockType::DIRT.id());
/// ```
pub struct VoxelGrid<S: BlockStore = WorldBlocks> {
    /// Grid extent along the x axis.
    width: i32,
    /// Grid extent along the y axis (world height).
    height: i32,
    /// Grid extent along the z axis.
    length: i32,

    // Fast bound caps, always dimension - 1.
    max_x: i32,
    max_y: i32,
    max_z: i32,

    /// The owned block storage; empty in the unloaded state.
    store: S,

    /// Whether the grid currently holds any block data.
    has_blocks: bool,

    /// Unique identity of this particular world, regenerated on reset.
    uuid: u128,
}

impl<S: BlockStore> VoxelGrid<S> {
    /// Creates a new grid in the empty state: no buffers, dimensions zero,
    /// and a freshly generated unique identifier.
    pub fn new() -> Self {
        VoxelGrid {
            width: 0,
            height: 0,
            length: 0,
            max_x: -1,
            max_y: -1,
            max_z: -1,
            store: S::empty(),
            has_blocks: false,
            uuid: fastrand::u128(..),
        }
    }

    /// Installs a new block buffer and the dimensions of this grid.
    ///
    /// The store is taken by ownership transfer; no blocks are copied. Any
    /// previously installed buffers are dropped once the new ones are in
    /// place. A zero-length buffer (with a matching zero volume) is allowed
    /// and degrades the grid to the "no data" state.
    ///
    /// # Arguments
    /// * `store` - The block storage, sized exactly to `width * height * length`
    /// * `width` - Grid extent along x
    /// * `height` - Grid extent along y
    /// * `length` - Grid extent along z
    ///
    /// # Errors
    /// Returns [`GridError::DimensionMismatch`] if the store's length does
    /// not equal the declared volume (negative dimensions can never match).
    /// The grid's previous state is left untouched in that case.
    pub fn load(&mut self, store: S, width: i32, height: i32, length: i32) -> Result<(), GridError> {
        let volume = volume_of(width, height, length);
        if volume != Some(store.len()) {
            return Err(GridError::DimensionMismatch {
                expected: volume.unwrap_or(0),
                actual: store.len(),
            });
        }

        self.width = width;
        self.max_x = width - 1;
        self.height = height;
        self.max_y = height - 1;
        self.length = length;
        self.max_z = length - 1;

        self.has_blocks = !store.is_empty();
        self.store = store;

        info!(
            "loaded {}x{}x{} grid ({} blocks)",
            width,
            height,
            length,
            self.store.len()
        );
        Ok(())
    }

    /// Resets the grid to a fresh empty state.
    ///
    /// Dimensions return to zero, both buffers are released, and a new
    /// unique world identifier is generated.
    pub fn reset(&mut self) {
        self.width = 0;
        self.height = 0;
        self.length = 0;
        self.max_x = -1;
        self.max_y = -1;
        self.max_z = -1;
        self.store = S::empty();
        self.has_blocks = false;
        self.uuid = fastrand::u128(..);

        info!("grid reset, new uuid {:032x}", self.uuid);
    }

    /// Flattens world coordinates into a buffer index. Valid only for
    /// in-bounds coordinates.
    #[inline]
    fn block_index(&self, x: i32, y: i32, z: i32) -> usize {
        ((y * self.length + z) * self.width + x) as usize
    }

    /// Sets the block at the given world coordinates without bounds checking.
    ///
    /// This is the hot path: the caller guarantees `(x, y, z)` is in bounds.
    /// With a narrow store only the low 8 bits of `id` are kept; with a wide
    /// store the low and high bytes land in their respective buffers.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds (precondition violation).
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, z: i32, id: BlockId) {
        let i = self.block_index(x, y, z);
        self.store.set(i, id);
    }

    /// Returns the block at the given world coordinates without bounds
    /// checking.
    ///
    /// Wide-store reads are masked to the maximum identifier the system
    /// recognizes, so a corrupted high byte cannot escape the known-block
    /// range.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds (precondition violation).
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockId {
        self.store.get(self.block_index(x, y, z))
    }

    /// Returns the block at the given world point without bounds checking.
    ///
    /// Point-argument form of [`VoxelGrid::get`] with identical semantics.
    ///
    /// # Panics
    /// Panics if the point is out of bounds (precondition violation).
    #[inline]
    pub fn get_at(&self, p: Point3<i32>) -> BlockId {
        self.get(p.x, p.y, p.z)
    }

    /// Returns the block at the given world coordinates with bounds checking,
    /// returning the air sentinel if the coordinates are outside the grid.
    ///
    /// Never panics and never reads out of range.
    pub fn get_safe(&self, x: i32, y: i32, z: i32) -> BlockId {
        if self.is_valid_position(x, y, z) {
            self.get(x, y, z)
        } else {
            AIR_ID
        }
    }

    /// Returns whether the given world coordinates are contained within the
    /// dimensions of the grid.
    #[inline]
    pub fn is_valid_position(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && y >= 0 && z >= 0 && x < self.width && y < self.height && z < self.length
    }

    /// Returns whether the given world point is contained within the
    /// dimensions of the grid.
    ///
    /// Point-argument form of [`VoxelGrid::is_valid_position`] with
    /// identical semantics.
    #[inline]
    pub fn is_valid_point(&self, p: Point3<i32>) -> bool {
        self.is_valid_position(p.x, p.y, p.z)
    }

    /// Returns the block at the given world coordinates for physics queries,
    /// extrapolating beyond the grid boundary.
    ///
    /// The boundary policy is asymmetric by design and must be preserved
    /// exactly: horizontal out-of-bounds or below-floor coordinates read as
    /// solid bedrock so entities cannot fall through the world edge, while
    /// above-ceiling coordinates read as air (open sky). In-range coordinates
    /// perform the real indexed read.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxel_grid::{NarrowBlocks, VoxelGrid, AIR_ID, BEDROCK_ID};
    ///
    /// let mut grid = VoxelGrid::new();
    /// grid.load(NarrowBlocks::new(vec![1; 64]), 4, 4, 4).unwrap();
    ///
    /// assert_eq!(grid.get_physics(-1, 1, 1), BEDROCK_ID);
    /// assert_eq!(grid.get_physics(1, 5, 1), AIR_ID);
    /// assert_eq!(grid.get_physics(1, 1, 1), 1);
    /// ```
    pub fn get_physics(&self, x: i32, y: i32, z: i32) -> BlockId {
        if x < 0 || x >= self.width || z < 0 || z >= self.length || y < 0 {
            return BEDROCK_ID;
        }
        if y >= self.height {
            return AIR_ID;
        }
        self.store.get(self.block_index(x, y, z))
    }

    /// Grid extent along the x axis.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid extent along the y axis (world height).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Grid extent along the z axis.
    #[inline]
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Largest valid x coordinate (`width - 1`).
    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    /// Largest valid y coordinate (`height - 1`).
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Largest valid z coordinate (`length - 1`).
    #[inline]
    pub fn max_z(&self) -> i32 {
        self.max_z
    }

    /// Whether the grid currently holds any block data.
    #[inline]
    pub fn has_blocks(&self) -> bool {
        self.has_blocks
    }

    /// The number of voxels currently stored (`width * height * length`).
    #[inline]
    pub fn volume(&self) -> usize {
        self.store.len()
    }

    /// Unique identifier of this particular world, regenerated on reset.
    #[inline]
    pub fn uuid(&self) -> u128 {
        self.uuid
    }
}

impl<S: BlockStore> Default for VoxelGrid<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes `width * height * length` as a buffer length, or `None` when the
/// dimensions are negative or the product overflows.
fn volume_of(width: i32, height: i32, length: i32) -> Option<usize> {
    if width < 0 || height < 0 || length < 0 {
        return None;
    }
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(length as usize)
}
