/// Integration tests for grid lifecycle and the checked/unchecked accessor
/// contracts: load/reset transitions, round trips, coordinate validation,
/// and failure atomicity.
use voxel_grid::{BlockType, GridError, NarrowBlocks, VoxelGrid, AIR_ID};

fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A loaded narrow grid filled entirely with stone.
fn stone_grid(width: i32, height: i32, length: i32) -> VoxelGrid<NarrowBlocks> {
    let volume = (width * height * length) as usize;
    let mut grid = VoxelGrid::new();
    grid.load(
        NarrowBlocks::new(vec![BlockType::STONE.id() as u8; volume]),
        width,
        height,
        length,
    )
    .unwrap();
    grid
}

#[test]
fn test_set_then_get_round_trip() {
    init_test_logger();
    let mut grid = stone_grid(3, 4, 5);

    let mut id = 0u16;
    for y in 0..4 {
        for z in 0..5 {
            for x in 0..3 {
                grid.set(x, y, z, id);
                id += 1;
            }
        }
    }

    let mut id = 0u16;
    for y in 0..4 {
        for z in 0..5 {
            for x in 0..3 {
                assert_eq!(grid.get(x, y, z), id, "mismatch at ({x}, {y}, {z})");
                id += 1;
            }
        }
    }
}

#[test]
fn test_narrow_set_truncates_to_eight_bits() {
    let mut grid = stone_grid(2, 2, 2);
    grid.set(1, 0, 1, 0x1FF);
    assert_eq!(grid.get(1, 0, 1), 0xFF);
}

#[test]
fn test_index_is_injective_over_valid_domain() {
    // Every cell gets a distinct value; if any two coordinate triples shared
    // a buffer index, the later write would clobber the earlier one and a
    // read-back would disagree.
    let mut grid = stone_grid(3, 4, 5);

    let mut id = 0u16;
    for y in 0..4 {
        for z in 0..5 {
            for x in 0..3 {
                grid.set(x, y, z, id);
                id += 1;
            }
        }
    }
    assert_eq!(id as usize, grid.volume());

    let mut seen = std::collections::HashSet::new();
    for y in 0..4 {
        for z in 0..5 {
            for x in 0..3 {
                assert!(seen.insert(grid.get(x, y, z)), "duplicate at ({x}, {y}, {z})");
            }
        }
    }
    assert_eq!(seen.len(), grid.volume());
}

#[test]
fn test_get_safe_agrees_with_is_valid_position() {
    let grid = stone_grid(4, 4, 4);

    for x in -2..6 {
        for y in -2..6 {
            for z in -2..6 {
                if grid.is_valid_position(x, y, z) {
                    assert_eq!(grid.get_safe(x, y, z), grid.get(x, y, z));
                } else {
                    assert_eq!(grid.get_safe(x, y, z), AIR_ID, "at ({x}, {y}, {z})");
                }
            }
        }
    }
}

#[test]
fn test_point_forms_match_scalar_forms() {
    use cgmath::Point3;

    let mut grid = stone_grid(3, 3, 3);
    grid.set(2, 1, 0, BlockType::WOOD.id());

    assert_eq!(grid.get_at(Point3::new(2, 1, 0)), grid.get(2, 1, 0));
    assert!(grid.is_valid_point(Point3::new(2, 2, 2)));
    assert!(!grid.is_valid_point(Point3::new(3, 2, 2)));
    assert!(!grid.is_valid_point(Point3::new(0, -1, 0)));
}

#[test]
fn test_failed_load_preserves_previous_state() {
    init_test_logger();
    let mut grid = stone_grid(2, 2, 2);
    grid.set(1, 1, 1, BlockType::DIRT.id());

    let result = grid.load(NarrowBlocks::new(vec![0; 7]), 2, 2, 2);
    assert_eq!(
        result,
        Err(GridError::DimensionMismatch {
            expected: 8,
            actual: 7,
        })
    );

    // The bad load must not have touched dimensions or buffers.
    assert_eq!(grid.width(), 2);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.length(), 2);
    assert!(grid.has_blocks());
    assert_eq!(grid.get_safe(1, 1, 1), BlockType::DIRT.id());
    assert_eq!(grid.get_safe(0, 0, 0), BlockType::STONE.id());
}

#[test]
fn test_negative_dimensions_rejected() {
    let mut grid = VoxelGrid::new();
    let result = grid.load(NarrowBlocks::new(vec![0; 8]), -2, -2, 2);
    assert!(result.is_err());
    assert_eq!(grid.width(), 0);
    assert!(!grid.has_blocks());
}

#[test]
fn test_zero_length_buffer_degrades_to_no_data() {
    let mut grid = VoxelGrid::new();
    grid.load(NarrowBlocks::new(Vec::new()), 4, 0, 4).unwrap();

    assert!(!grid.has_blocks());
    assert_eq!(grid.volume(), 0);
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 0);

    // No position is valid for stateful reads even though two of the
    // dimensions are nonzero.
    for x in -1..5 {
        for y in -1..2 {
            for z in -1..5 {
                assert!(!grid.is_valid_position(x, y, z));
                assert_eq!(grid.get_safe(x, y, z), AIR_ID);
            }
        }
    }
}

#[test]
fn test_load_replaces_previous_world() {
    let mut grid = stone_grid(2, 2, 2);

    grid.load(NarrowBlocks::new(vec![BlockType::DIRT.id() as u8]), 1, 1, 1)
        .unwrap();
    assert_eq!(grid.width(), 1);
    assert_eq!(grid.max_x(), 0);
    assert_eq!(grid.volume(), 1);
    assert_eq!(grid.get(0, 0, 0), BlockType::DIRT.id());
    assert!(!grid.is_valid_position(1, 1, 1));
}

#[test]
fn test_reset_returns_to_empty_state_with_new_uuid() {
    let mut grid = stone_grid(2, 2, 2);
    let uuid_before = grid.uuid();

    grid.reset();

    assert_eq!(grid.width(), 0);
    assert_eq!(grid.height(), 0);
    assert_eq!(grid.length(), 0);
    assert_eq!(grid.max_x(), -1);
    assert!(!grid.has_blocks());
    assert_eq!(grid.volume(), 0);
    assert_eq!(grid.get_safe(0, 0, 0), AIR_ID);
    assert_ne!(grid.uuid(), uuid_before);
}

#[test]
fn test_dimension_getters_track_load() {
    let grid = stone_grid(3, 4, 5);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 4);
    assert_eq!(grid.length(), 5);
    assert_eq!(grid.max_x(), 2);
    assert_eq!(grid.max_y(), 3);
    assert_eq!(grid.max_z(), 4);
    assert_eq!(grid.volume(), 60);
}
