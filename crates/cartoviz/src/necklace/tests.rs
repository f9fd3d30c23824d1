use super::*;
use crate::error::Error;
use crate::geom2::rand::{draw_ring_of_regions, RadialCfg, VertexCount};
use crate::geom2::Polygon;
use nalgebra::{point, Point2};
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::sync::Arc;

fn square(c: Point2<f64>, h: f64) -> Polygon {
    Polygon::new(vec![
        point![c.x - h, c.y - h],
        point![c.x + h, c.y - h],
        point![c.x + h, c.y + h],
        point![c.x - h, c.y + h],
    ])
}

fn ring_map(count: usize, seed: u64) -> RegionMap {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 9 },
        base_radius: 1.5,
        ..RadialCfg::default()
    };
    draw_ring_of_regions(cfg, count, 6.0, seed)
        .into_iter()
        .enumerate()
        .map(|(k, p)| Region::new(format!("R{k}"), vec![p]))
        .collect()
}

fn all_placed_valid(map: &NecklaceMap) -> bool {
    let scale = map.scale_factor().unwrap_or(0.0);
    let buffer = map.parameters().buffer_rad;
    map.necklaces()
        .iter()
        .all(|n| validate_placement(n, scale, buffer, 1e-7))
}

#[test]
fn unknown_region_is_rejected() {
    let mut map = NecklaceMap::new(RegionMap::new());
    let n = map.add_necklace(NecklaceShape::circle(point![0.0, 0.0], 1.0)).unwrap();
    assert_eq!(map.add_bead("nowhere", 1.0, n), Err(Error::NoSuchRegion("nowhere".into())));
}

#[test]
fn invalid_inputs_are_rejected() {
    let regions: RegionMap = [Region::new("A", vec![square(point![3.0, 0.0], 1.0)])]
        .into_iter()
        .collect();
    let mut map = NecklaceMap::new(regions);
    assert!(matches!(
        map.add_necklace(NecklaceShape::circle(point![0.0, 0.0], -1.0)),
        Err(Error::InvalidArgument(_))
    ));
    let n = map.add_necklace(NecklaceShape::circle(point![0.0, 0.0], 5.0)).unwrap();
    assert!(matches!(map.add_bead("A", -1.0, n), Err(Error::InvalidArgument(_))));
    assert!(matches!(map.add_bead("A", 1.0, NecklaceId(7)), Err(Error::InvalidArgument(_))));
    map.add_bead("A", 1.0, n).unwrap();
    map.parameters_mut().buffer_rad = 4.0;
    assert!(matches!(map.compute(), Err(Error::InvalidArgument(_))));
    map.parameters_mut().buffer_rad = 0.0;
    map.parameters_mut().aversion_ratio = -0.5;
    assert!(matches!(map.compute(), Err(Error::InvalidArgument(_))));
    assert!(map.scale_factor().is_none());
}

#[test]
fn region_extent_merges_polygons() {
    let r = Region::new(
        "two",
        vec![square(point![0.0, 0.0], 1.0), square(point![4.0, 0.0], 1.0)],
    );
    let e = r.extent().unwrap();
    assert_eq!(e.len(), 4);
    assert!((e.signed_area() - 12.0).abs() < 1e-12);
    assert!(Region::new("p", vec![Polygon::new(vec![point![1.0, 1.0]])]).is_point());
    assert!(Region::new("none", vec![]).extent().is_none());
}

#[test]
fn ring_of_regions_on_one_necklace() {
    let regions = Arc::new(ring_map(8, 17));
    for order in [OrderType::Fixed, OrderType::Any] {
        for interval in [IntervalType::Centroid, IntervalType::Wedge] {
            let mut map = NecklaceMap::new(Arc::clone(&regions));
            *map.parameters_mut() = Parameters::new()
                .with_order_type(order)
                .with_interval_type(interval)
                .with_buffer_rad(0.02);
            let n = map.add_necklace(NecklaceShape::circle(point![0.0, 0.0], 10.0)).unwrap();
            for (k, region) in regions.iter().enumerate() {
                map.add_bead(&region.id, 1.0 + k as f64, n).unwrap();
            }
            let scale = map.compute().unwrap();
            assert!(scale > 0.0, "{order:?} {interval:?}");
            assert!(map.beads().all(|b| b.angle.is_some()));
            assert!(all_placed_valid(&map), "{order:?} {interval:?}");
        }
    }
}

#[test]
fn empty_necklace_does_not_limit_scale() {
    let regions: RegionMap = [Region::new("A", vec![square(point![5.0, 0.0], 1.0)])]
        .into_iter()
        .collect();
    let mut map = NecklaceMap::new(regions);
    let a = map.add_necklace(NecklaceShape::circle(point![0.0, 0.0], 10.0)).unwrap();
    let _empty = map.add_necklace(NecklaceShape::circle(point![0.0, 0.0], 20.0)).unwrap();
    map.add_bead("A", 1.0, a).unwrap();
    assert_eq!(map.compute().unwrap(), 10.0);
}

#[test]
fn arc_necklace_drops_regions_outside() {
    let regions: RegionMap = [
        Region::new("east", vec![square(point![5.0, 0.5], 0.5)]),
        Region::new("west", vec![square(point![-5.0, 0.0], 0.5)]),
    ]
    .into_iter()
    .collect();
    let mut map = NecklaceMap::new(regions);
    *map.parameters_mut() = Parameters::new().with_centroid_interval_length_rad(0.5);
    let n = map
        .add_necklace(NecklaceShape::arc(point![0.0, 0.0], 10.0, -FRAC_PI_2, FRAC_PI_2))
        .unwrap();
    map.add_bead("east", 1.0, n).unwrap();
    map.add_bead("west", 1.0, n).unwrap();
    let scale = map.compute().unwrap();
    assert!(scale > 0.0);
    let beads: Vec<_> = map.beads().collect();
    assert!(beads[0].angle.is_some());
    assert!(beads[1].feasible.is_none());
    assert!(beads[1].angle.is_none());
}

#[test]
fn duplicate_beads_are_distinct() {
    let regions: RegionMap = [Region::new("A", vec![square(point![5.0, 0.0], 1.0)])]
        .into_iter()
        .collect();
    let mut map = NecklaceMap::new(regions);
    let n = map.add_necklace(NecklaceShape::circle(point![0.0, 0.0], 10.0)).unwrap();
    map.add_bead("A", 1.0, n).unwrap();
    map.add_bead("A", 1.0, n).unwrap();
    map.compute().unwrap();
    let angles: Vec<f64> = map.beads().filter_map(|b| b.angle).collect();
    assert_eq!(angles.len(), 2);
    assert!(all_placed_valid(&map));
}

#[test]
fn compute_placement_uses_given_scale() {
    let regions = ring_map(5, 3);
    let ids: Vec<String> = regions.iter().map(|r| r.id.clone()).collect();
    let mut map = NecklaceMap::new(regions);
    let n = map.add_necklace(NecklaceShape::circle(point![0.0, 0.0], 10.0)).unwrap();
    for id in &ids {
        map.add_bead(id, 2.0, n).unwrap();
    }
    map.compute_placement(0.5).unwrap();
    assert_eq!(map.scale_factor(), Some(0.5));
    assert!(map.beads().all(|b| b.angle.is_some()));
    assert!(all_placed_valid(&map));
    // Far too large: nothing fits, beads stay unplaced.
    map.compute_placement(7.0).unwrap();
    assert!(map.beads().all(|b| b.angle.is_none()));
    assert!(map.compute_placement(-1.0).is_err());
}

#[test]
fn saturated_buffer_reports_max_buffer() {
    let regions: RegionMap = [
        Region::new("A", vec![square(point![5.0, 0.0], 0.2)]),
        Region::new("B", vec![square(point![5.0, 0.3], 0.2)]),
    ]
    .into_iter()
    .collect();
    let mut map = NecklaceMap::new(regions);
    *map.parameters_mut() = Parameters::new()
        .with_centroid_interval_length_rad(0.2)
        .with_buffer_rad(1.0);
    let n = map.add_necklace(NecklaceShape::circle(point![0.0, 0.0], 10.0)).unwrap();
    map.add_bead("A", 1.0, n).unwrap();
    map.add_bead("B", 1.0, n).unwrap();
    assert_eq!(map.compute().unwrap(), 0.0);
    let max_buffer = map.max_buffer_rad().unwrap();
    assert!(max_buffer < 1.0 && max_buffer > 0.0);
    assert!(map.beads().all(|b| b.angle.is_none()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_maps_place_without_overlap(
        seed in 0u64..1000,
        count in 1usize..10,
        buffer in 0.0f64..0.2,
        use_any in any::<bool>(),
    ) {
        let regions = ring_map(count, seed);
        let ids: Vec<String> = regions.iter().map(|r| r.id.clone()).collect();
        let mut map = NecklaceMap::new(regions);
        *map.parameters_mut() = Parameters::new()
            .with_buffer_rad(buffer)
            .with_order_type(if use_any { OrderType::Any } else { OrderType::Fixed });
        let n = map.add_necklace(NecklaceShape::circle(point![0.0, 0.0], 10.0)).unwrap();
        for (k, id) in ids.iter().enumerate() {
            map.add_bead(id, 1.0 + (k % 3) as f64, n).unwrap();
        }
        let scale = map.compute().unwrap();
        prop_assert!(scale >= 0.0);
        for b in map.beads() {
            if let Some(a) = b.covering_radius_rad(&map.necklaces()[0].shape, scale) {
                prop_assert!(a <= FRAC_PI_2 + 1e-12);
            }
        }
        prop_assert!(all_placed_valid(&map));
        prop_assert!(map.max_buffer_rad().unwrap() <= TAU);
    }
}
