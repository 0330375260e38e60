#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Grid
//!
//! Dense, fixed-size block storage for a voxel world.
//!
//! This crate provides the block storage model that the other subsystems of a
//! voxel engine (rendering, physics, networking) build on: a single
//! contiguous, row-major buffer of block identifiers together with the
//! coordinate arithmetic and bounds policies needed to read and write it
//! correctly.
//!
//! ## Key Modules
//!
//! * `voxels::block` - Block identifier types, sentinels, and the block table
//! * `voxels::grid` - The `VoxelGrid` container and its storage variants
//!
//! ## Architecture
//!
//! The grid is a leaf component: it owns its buffers, exposes coordinate
//! validation, and calls into nothing else. Consumers choose between three
//! access disciplines:
//!
//! * `get`/`set` - unchecked hot path; the caller guarantees bounds
//! * `get_safe` - checked; out-of-range reads yield the air sentinel
//! * `get_physics` - boundary-extrapolating; solid below and to the sides,
//!   open sky above
//!
//! ## Storage Variants
//!
//! Block identifiers are stored either in a single 8-bit buffer
//! ([`NarrowBlocks`], the common case) or in a pair of same-length low/high
//! byte buffers ([`WideBlocks`]). The variant is a build-configuration
//! choice: enabling the `wide-blocks` cargo feature switches the crate-level
//! [`WorldBlocks`] alias, while both variants stay available generically
//! through [`VoxelGrid`].
//!
//! ## Usage
//!
//! ```rust
//! use voxel_grid::{BlockType, NarrowBlocks, VoxelGrid};
//!
//! let mut grid = VoxelGrid::new();
//! grid.load(NarrowBlocks::new(vec![0; 27]), 3, 3, 3).unwrap();
//!
//! grid.set(1, 2, 0, BlockType::STONE.id());
//! assert_eq!(grid.get(1, 2, 0), BlockType::STONE.id());
//! assert_eq!(grid.get_safe(1, -1, 0), voxel_grid::AIR_ID);
//! ```
//!
//! ## Performance Considerations
//!
//! All accessors are O(1) and branch-free with respect to the storage
//! variant: the narrow/wide split is monomorphized, so the aliased-buffer
//! case compiles down to a single byte write per `set`. `load` takes its
//! buffers by ownership transfer and never copies.

pub mod voxels;

pub use voxels::block::{BlockId, BlockRaw, BlockType, AIR_ID, BEDROCK_ID, MAX_DEFINED_MASK};
pub use voxels::grid::store::{BlockStore, NarrowBlocks, WideBlocks};
pub use voxels::grid::{GridError, VoxelGrid, WorldBlocks, WorldGrid};
