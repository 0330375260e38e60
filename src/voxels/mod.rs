//! # Voxel Storage Core
//!
//! This module contains the block storage model for a voxel world.
//!
//! ## Architecture
//!
//! The storage model is organized into two components:
//!
//! * **Block**: Defines the block identifier types, the sentinel identifiers
//!   used by the checked accessors, and the block table
//! * **Grid**: Manages the dense, fixed-size 3D array of block identifiers
//!   and all coordinate-to-index and bounds logic
//!
//! ## Data Flow
//!
//! 1. A world-load pipeline parses or generates a raw block buffer
//! 2. The buffer is handed to [`grid::VoxelGrid::load`] by ownership transfer
//! 3. Rendering reads identifiers through `get`/`get_safe`
//! 4. Physics reads world edges through `get_physics`
//!
//! ## Thread Safety
//!
//! The grid uses a single-owner model: one owner performs `load`/`reset`/`set`
//! with exclusive access, while the read accessors may be shared freely once
//! loading has completed.

pub mod block;
pub mod grid;
