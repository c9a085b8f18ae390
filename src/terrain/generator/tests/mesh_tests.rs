use crate::terrain::{
    config::TerrainConfig,
    coords::GridSpecs,
    generator::{FbmNoise, NoiseModifiers, TerrainMesh, FRAME_INDEX_COUNT},
    vertex::{Vertex, FRAME_COLOR, GRID_COLOR},
};
use approx::assert_relative_eq;
use log::info;
use test_case::test_case;

use super::{init_logging, RampNoise};

fn flat_config(x_dim: usize, z_dim: usize, height: f32) -> TerrainConfig {
    TerrainConfig::default()
        .with_grid(GridSpecs::new(x_dim, z_dim, 1))
        .with_modifiers(NoiseModifiers::constant(height))
}

#[test_case(2, 2)]
#[test_case(3, 3)]
#[test_case(4, 7)]
#[test_case(7, 4)]
#[test_case(10, 10)]
fn test_buffer_sizes(x_dim: usize, z_dim: usize) {
    let config = TerrainConfig::default().with_grid(GridSpecs::new(x_dim, z_dim, 1));
    let mesh = TerrainMesh::build(&config, &FbmNoise::new(1)).unwrap();

    let grid_indices = (x_dim - 1) * (z_dim - 1) * 12;
    assert_eq!(mesh.grid_index_count(), grid_indices);
    assert_eq!(mesh.indices().len(), grid_indices + 2 * FRAME_INDEX_COUNT);
    assert_eq!(mesh.vertices().len(), 2 * x_dim * z_dim + 24);

    let n = mesh.vertices().len() as u32;
    assert!(mesh.indices().iter().all(|&i| i < n), "Index out of range");
}

#[test]
fn test_flat_three_by_three() {
    init_logging();

    let mesh = TerrainMesh::build(&flat_config(3, 3, 5.0), &RampNoise).unwrap();

    assert_eq!(mesh.grid_vertices().len(), 9);
    assert_eq!(mesh.grid_index_count(), 48);
    for v in mesh.grid_vertices().iter().chain(mesh.mirror_vertices()) {
        assert_relative_eq!(v.position[1], 5.0);
        assert_relative_eq!(v.normal[0], 0.0);
        assert_relative_eq!(v.normal[1], 1.0);
        assert_relative_eq!(v.normal[2], 0.0);
        assert_eq!(v.color, GRID_COLOR);
    }

    // centered on the origin
    let xs: Vec<f32> = mesh.grid_vertices().iter().map(|v| v.position[0]).collect();
    assert_eq!(xs, vec![-1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    let zs: Vec<f32> = mesh.grid_vertices()[..3].iter().map(|v| v.position[2]).collect();
    assert_eq!(zs, vec![-1.0, 0.0, 1.0]);

    info!("Flat mesh: {} vertices, {} indices", mesh.vertices().len(), mesh.indices().len());
}

#[test]
fn test_single_cell_winding() {
    let mesh = TerrainMesh::build(&flat_config(2, 2, 0.0), &RampNoise).unwrap();

    assert_eq!(
        &mesh.indices()[..12],
        &[2, 1, 0, 1, 2, 0, 6, 7, 5, 7, 6, 5]
    );
}

#[test]
fn test_cells_are_double_sided() {
    let mesh = TerrainMesh::build(&flat_config(4, 5, 1.0), &RampNoise).unwrap();

    for cell in mesh.indices()[..mesh.grid_index_count()].chunks(12) {
        for tri in cell.chunks(6) {
            assert_eq!(tri[0], tri[4]);
            assert_eq!(tri[1], tri[3]);
            assert_eq!(tri[2], tri[5]);
        }
    }
}

#[test]
fn test_copies_split_between_passes() {
    let mesh = TerrainMesh::build(&flat_config(5, 3, 1.0), &RampNoise).unwrap();
    let offset = mesh.grid_vertex_count() as u32;

    for cell in mesh.indices()[..mesh.grid_index_count()].chunks(12) {
        assert!(cell[..6].iter().all(|&i| i < offset));
        assert!(cell[6..].iter().all(|&i| i >= offset && i < offset * 2));
    }
}

#[test_case(3, 6)]
#[test_case(6, 3)]
fn test_non_square_cells_are_adjacent(x_dim: usize, z_dim: usize) {
    let config = flat_config(x_dim, z_dim, 0.0);
    let mesh = TerrainMesh::build(&config, &RampNoise).unwrap();
    let specs = config.grid;
    let offset = specs.vertex_count();

    for tri in mesh.indices()[..mesh.grid_index_count()].chunks(3) {
        let coords: Vec<(usize, usize)> = tri
            .iter()
            .map(|&i| specs.coords(i as usize % offset))
            .collect();
        for a in &coords {
            for b in &coords {
                assert!(a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1);
            }
        }
    }
}

#[test]
fn test_positions_follow_sampler() {
    let config = TerrainConfig::default().with_grid(GridSpecs::new(4, 3, 2));
    let mesh = TerrainMesh::build(&config, &RampNoise).unwrap();
    let specs = config.grid;

    for i in 0..specs.x_dim {
        for j in 0..specs.z_dim {
            let v = mesh.grid_vertices()[specs.index(i, j)];
            assert_relative_eq!(v.position[1], (i * 200 + j * 2) as f32);
            assert_relative_eq!(v.position[0], specs.world_x(i));
            assert_relative_eq!(v.position[2], specs.world_z(j));
        }
    }
}

#[test]
fn test_copies_share_positions() {
    let mesh = TerrainMesh::build(&TerrainConfig::default(), &FbmNoise::new(99)).unwrap();

    for (a, b) in mesh.grid_vertices().iter().zip(mesh.mirror_vertices()) {
        assert_eq!(a.position, b.position);
    }
}

#[test_case(1, 5)]
#[test_case(5, 1)]
#[test_case(0, 0)]
fn test_degenerate_grid(x_dim: usize, z_dim: usize) {
    let mesh = TerrainMesh::build(&flat_config(x_dim, z_dim, 1.0), &RampNoise).unwrap();

    assert_eq!(mesh.grid_index_count(), 0);
    assert_eq!(mesh.indices().len(), 2 * FRAME_INDEX_COUNT);
    assert_eq!(mesh.frame_vertices().len(), 24);
}

#[test]
fn test_frame_indices_reference_frame_vertices() {
    let mesh = TerrainMesh::build(&flat_config(6, 6, 0.0), &RampNoise).unwrap();
    let start = (mesh.grid_vertex_count() * 2) as u32;

    assert_eq!(mesh.frame_band_count(), 2);
    assert_eq!(mesh.frame_indices().len(), 2 * FRAME_INDEX_COUNT);
    assert!(mesh.frame_indices().iter().all(|&i| i >= start));
    assert!(mesh.frame_vertices().iter().all(|v| v.color == FRAME_COLOR));

    // the second band uses its own vertices
    let second = &mesh.frame_indices()[FRAME_INDEX_COUNT..];
    assert!(second.iter().all(|&i| i >= start + 12));
}

#[test]
fn test_no_frame_bands() {
    let config = flat_config(3, 3, 0.0).with_frame_bands(Vec::new());
    let mesh = TerrainMesh::build(&config, &RampNoise).unwrap();

    assert!(mesh.frame_vertices().is_empty());
    assert!(mesh.frame_indices().is_empty());
    assert_eq!(mesh.indices().len(), 48);
}

#[test]
fn test_byte_views() {
    let mesh = TerrainMesh::build(&flat_config(3, 3, 0.0), &RampNoise).unwrap();

    assert_eq!(
        mesh.vertex_bytes().len(),
        mesh.vertices().len() * std::mem::size_of::<Vertex>()
    );
    assert_eq!(mesh.index_bytes().len(), mesh.indices().len() * 4);
    assert_eq!(mesh.layout().stride, std::mem::size_of::<Vertex>());
}

#[test]
fn test_update_heights_writes_both_copies() {
    let mut mesh = TerrainMesh::build(&flat_config(3, 4, 2.0), &RampNoise).unwrap();
    mesh.mark_clean();
    assert!(!mesh.is_dirty());

    mesh.update_heights(|i, y| y + i as f32);

    assert!(mesh.is_dirty());
    for (i, (a, b)) in mesh.grid_vertices().iter().zip(mesh.mirror_vertices()).enumerate() {
        assert_relative_eq!(a.position[1], 2.0 + i as f32);
        assert_eq!(a.position, b.position);
    }
    assert_eq!(mesh.heights().len(), 12);
}
