//! # Block Module
//!
//! This module provides the block identifier model for the voxel grid.
//! It includes the identifier type aliases, the sentinel identifiers used by
//! the checked accessors, and the block type table.

pub use block_type::BlockType;

pub mod block_type;

/// The widened block identifier type returned by every grid accessor.
///
/// Identifiers are stored as one or two raw bytes per voxel depending on the
/// storage variant, but always read back as a `BlockId`.
pub type BlockId = u16;

/// The underlying integer type used to represent block identifiers in memory.
/// Each storage buffer holds one `BlockRaw` per voxel.
pub type BlockRaw = u8;

/// The maximum block identifier the system recognizes, used as an AND mask.
///
/// Wide-store reads are masked with this value so that a corrupted high byte
/// can never produce an identifier above the known-block range.
pub const MAX_DEFINED_MASK: BlockId = 0x3FF;

/// The "empty/air" sentinel identifier.
///
/// Returned by `get_safe` for every out-of-range coordinate, and by
/// `get_physics` for coordinates above the world ceiling (open sky).
pub const AIR_ID: BlockId = BlockType::AIR as BlockId;

/// The solid "bedrock" sentinel identifier.
///
/// Returned by `get_physics` for horizontal out-of-bounds and below-floor
/// coordinates so that entities cannot fall through the world edge.
pub const BEDROCK_ID: BlockId = BlockType::BEDROCK as BlockId;
