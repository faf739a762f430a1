//! End-to-end generation through the public API.

use proptest::prelude::*;
use verdant_worldgen::{
    GenerationError, GridCoord, GridSize, NeighborSurvey, Placement, SelectionRule, TileCatalog,
    TileGrid, TileManifest, TileSelector, TileType, WeightFactors, WorldGenConfig, WorldGenerator,
};

fn basic_catalog() -> TileCatalog<()> {
    TileCatalog::try_from_entries(
        [TileType::Plains, TileType::Forest, TileType::Desert].map(|t| (t, ())),
    )
    .expect("catalog")
}

fn full_catalog() -> TileCatalog<()> {
    TileCatalog::try_from_entries(TileType::ASSIGNABLE.map(|t| (t, ()))).expect("catalog")
}

#[test]
fn test_manifest_to_world() {
    let manifest = TileManifest::from_toml_str(
        r#"
        [[tiles]]
        name = "plains"
        tile_type = "plains"
        asset = "prefabs/plains.glb"
        tags = ["tile"]

        [[tiles]]
        name = "forest"
        tile_type = "forest"
        asset = "prefabs/forest.glb"
        tags = ["tile"]

        [[tiles]]
        name = "desert"
        tile_type = "desert"
        asset = "prefabs/desert.glb"
        tags = ["tile"]
        "#,
    )
    .expect("parse manifest");
    let catalog = TileCatalog::from_supplier(&manifest).expect("catalog");

    let gen = WorldGenerator::new(WorldGenConfig::with_size(10, 10).with_seed(2024))
        .expect("valid config");
    let mut placements: Vec<Placement> = Vec::new();
    let world = gen.generate(&catalog, &mut placements).expect("generate");

    assert_eq!(placements.len(), 100);
    for p in &placements {
        // Every placed tile resolves to a descriptor.
        assert!(catalog.get(p.tile).is_ok());
    }
    assert!(world.grid.is_complete());
}

#[test]
fn test_forest_and_desert_never_touch_after_conflict() {
    // Any cell that saw both Forest and Desert must have become Plains.
    let gen = WorldGenerator::new(WorldGenConfig::with_size(30, 30).with_seed(8))
        .expect("valid config");
    let world = gen.generate(&basic_catalog(), &mut ()).expect("generate");

    let mut replay = TileGrid::new(GridSize::new(30, 30)).expect("grid");
    for (coord, tile) in world.grid.iter() {
        let survey = NeighborSurvey::of(&replay, coord);
        if TileSelector::rule_for(&survey) == SelectionRule::Conflict {
            assert_eq!(tile, TileType::Plains, "conflict at {coord}");
        }
        replay.assign(coord, tile).expect("replay write");
    }
    assert_eq!(replay, world.grid);
}

#[test]
fn test_strong_forest_weight_grows_forest() {
    let weak = WorldGenConfig::with_size(40, 40)
        .with_seed(31)
        .with_weights(WeightFactors::new(0.0, 0.6, 0.5));
    let strong = weak.clone().with_weights(WeightFactors::new(1.0, 0.6, 0.5));

    let weak_world = WorldGenerator::new(weak)
        .expect("valid config")
        .generate(&basic_catalog(), &mut ())
        .expect("generate");
    let strong_world = WorldGenerator::new(strong)
        .expect("valid config")
        .generate(&basic_catalog(), &mut ())
        .expect("generate");

    assert!(
        strong_world.grid.count(TileType::Forest) > weak_world.grid.count(TileType::Forest),
        "weak={} strong={}",
        weak_world.grid.count(TileType::Forest),
        strong_world.grid.count(TileType::Forest)
    );
}

#[test]
fn test_empty_manifest_reports_no_content() {
    let manifest = TileManifest::from_toml_str("").expect("parse manifest");
    let catalog = TileCatalog::from_supplier(&manifest).expect("catalog");
    let gen = WorldGenerator::new(WorldGenConfig::default().with_seed(1)).expect("valid config");

    let mut placements: Vec<Placement> = Vec::new();
    let result = gen.generate(&catalog, &mut placements);

    assert!(matches!(result, Err(GenerationError::EmptyCatalog)));
    assert!(placements.is_empty());
}

proptest! {
    #[test]
    fn prop_generation_complete_and_ordered(
        length in 1u32..24,
        width in 1u32..24,
        seed in 1u64..u64::from(u32::MAX),
    ) {
        let gen = WorldGenerator::new(WorldGenConfig::with_size(length, width).with_seed(seed))
            .expect("valid config");
        let mut placements: Vec<Placement> = Vec::new();
        let world = gen.generate(&full_catalog(), &mut placements).expect("generate");

        prop_assert!(world.grid.is_complete());
        prop_assert_eq!(placements.len(), (length * width) as usize);
        for (i, p) in placements.iter().enumerate() {
            prop_assert_eq!(world.grid.size().from_index(i), p.coord);
            prop_assert_eq!(world.grid.get(p.coord), Some(p.tile));
        }
    }

    #[test]
    fn prop_generation_deterministic(seed in 1u64..u64::from(u32::MAX)) {
        let gen = WorldGenerator::new(WorldGenConfig::with_size(12, 12).with_seed(seed))
            .expect("valid config");
        let mut first: Vec<Placement> = Vec::new();
        let mut second: Vec<Placement> = Vec::new();
        gen.generate(&full_catalog(), &mut first).expect("generate");
        gen.generate(&full_catalog(), &mut second).expect("generate");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_survey_stays_in_bounds(
        length in 1u32..16,
        width in 1u32..16,
        x in 0u32..16,
        z in 0u32..16,
    ) {
        prop_assume!(x < length && z < width);
        let size = GridSize::new(length, width);
        let mut grid = TileGrid::new(size).expect("grid");
        for coord in size.scan_order() {
            grid.assign(coord, TileType::Lake).expect("write");
        }

        let coord = GridCoord::new(x, z);
        let neighbors: Vec<_> = grid.neighbors(coord).collect();
        for n in &neighbors {
            prop_assert!(size.contains(*n));
            prop_assert_ne!(*n, coord);
        }
        let survey = NeighborSurvey::of(&grid, coord);
        prop_assert_eq!(survey.total() as usize, neighbors.len());
        prop_assert!(survey.total() <= 8);
    }
}
