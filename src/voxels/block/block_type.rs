//! # Block Type Module
//!
//! This module defines the core block types recognized by the grid.
//! It provides functionality for block type identification and conversion
//! to and from the stored identifier values.

use num_derive::FromPrimitive;

use super::BlockId;

/// Enumerates the core block types of the voxel world.
///
/// Each variant's discriminant is its stored block identifier. The
/// `FromPrimitive` derive allows conversion from identifiers read out of a
/// loaded buffer back to the rich enum type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block, which is non-solid and transparent. Doubles as the
    /// sentinel returned by checked reads outside the grid.
    AIR,

    /// A basic stone block, the most common terrain filler.
    STONE,

    /// A grass block with different textures on top and sides.
    GRASS,

    /// A plain dirt block, used as a common building material.
    DIRT,

    /// A cobblestone block.
    COBBLESTONE,

    /// A wooden block with a bark texture on all sides.
    WOOD,

    /// A sapling, non-solid decoration.
    SAPLING,

    /// An indestructible boundary block. Doubles as the sentinel returned by
    /// physics reads beyond the world edge or below the floor.
    BEDROCK,

    /// A still water block.
    WATER,

    /// A still lava block.
    LAVA,
}

impl BlockType {
    /// Converts a stored block identifier to a `BlockType`.
    ///
    /// This is typically used when interpreting identifiers read out of a
    /// loaded grid.
    ///
    /// # Arguments
    /// * `id` - The block identifier as read from the grid
    ///
    /// # Returns
    /// The corresponding `BlockType`, or `None` if the identifier does not
    /// name a core block type.
    pub fn from_id(id: BlockId) -> Option<Self> {
        num::FromPrimitive::from_u16(id)
    }

    /// Returns the block identifier stored for this block type.
    ///
    /// # Returns
    /// The identifier as a `BlockId`, suitable for passing to the grid's
    /// `set` accessor.
    pub fn id(self) -> BlockId {
        self as BlockId
    }
}
