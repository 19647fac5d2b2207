#![allow(clippy::unwrap_used, clippy::float_cmp)]

// End-to-end propagation and rendering scenarios on small floorplans.

use pretty_assertions::assert_eq;
use wavemap_core::propagation::path_loss_db;
use wavemap_core::render::grid;
use wavemap_core::{
    AccessPoint, Aggregator, Band, Environment, HeatmapGenerator, HeatmapRequest, Point,
    PropagationTuning, Wall, WallMaterial,
};

fn single_band_ap(name: &str, at: (f64, f64)) -> AccessPoint {
    AccessPoint::new(name, at)
        .with_bands(&[Band::Ghz24])
        .with_power(18.0, 2.0)
}

// ── Line of sight ───────────────────────────────────────────────────

#[test]
fn free_space_rssi_matches_path_loss() {
    let env = Environment::new(0.05, 2.5).with_ap(single_band_ap("AP-1", (0.0, 0.0)));
    let tuning = PropagationTuning::los_only();
    let rssi = Aggregator::new(&env, &tuning)
        .strongest_rssi_at(Point::new(100.0, 0.0))
        .unwrap();

    let expected = 20.0 - path_loss_db(5.0, 2.4, 2.5);
    assert!((rssi - expected).abs() < 1e-9, "{rssi} vs {expected}");
}

#[test]
fn crossing_wall_costs_its_attenuation() {
    let open = Environment::new(0.05, 2.5).with_ap(single_band_ap("AP-1", (0.0, 0.0)));
    let walled = open
        .clone()
        .with_wall(Wall::custom((50.0, -20.0), (50.0, 20.0), 14.0, 14.0).unwrap());
    let tuning = PropagationTuning::los_only();
    let rx = Point::new(100.0, 0.0);

    let a = Aggregator::new(&open, &tuning).strongest_rssi_at(rx).unwrap();
    let b = Aggregator::new(&walled, &tuning).strongest_rssi_at(rx).unwrap();
    assert!((a - b - 14.0).abs() < 1e-9);
}

#[test]
fn nearer_ap_wins_and_swapping_flips() {
    let rx = Point::new(30.0, 0.0);
    let tuning = PropagationTuning::default();

    let winner = |env: &Environment| {
        let agg = Aggregator::new(env, &tuning);
        let best = agg.strongest_rssi_at(rx).unwrap();
        env.aps
            .iter()
            .find(|ap| agg.ap_rssi_at(ap, rx) == Some(best))
            .map(|ap| ap.name.clone())
            .unwrap()
    };

    let env = Environment::new(0.05, 2.5)
        .with_ap(single_band_ap("A", (0.0, 0.0)))
        .with_ap(single_band_ap("B", (300.0, 0.0)));
    assert_eq!(winner(&env), "A");

    let mut swapped = env.clone();
    swapped.aps[0].position = Point::new(300.0, 0.0);
    swapped.aps[1].position = Point::new(0.0, 0.0);
    assert_eq!(winner(&swapped), "B");
}

#[test]
fn wall_free_los_never_exceeds_eirp() {
    let env = Environment::new(0.02, 2.0).with_ap(AccessPoint::new("AP", (50.0, 50.0)));
    let tuning = PropagationTuning::los_only();
    let agg = Aggregator::new(&env, &tuning);
    for y in (0..100).step_by(7) {
        for x in (0..100).step_by(7) {
            let rssi = agg.strongest_rssi_at(Point::new(f64::from(x), f64::from(y))).unwrap();
            assert!(rssi <= 20.0);
        }
    }
}

// ── Multipath ───────────────────────────────────────────────────────

#[test]
fn corridor_multipath_paths_respect_cutoffs() {
    let env = Environment::new(0.05, 2.5)
        .with_ap(single_band_ap("AP-1", (20.0, 50.0)))
        .with_wall(Wall::new((0.0, 0.0), (400.0, 0.0), WallMaterial::Concrete))
        .with_wall(Wall::new((0.0, 100.0), (400.0, 100.0), WallMaterial::Concrete))
        .with_wall(Wall::new((200.0, 0.0), (200.0, 40.0), WallMaterial::Brick));
    let tuning = PropagationTuning::default();
    let agg = Aggregator::new(&env, &tuning);

    let ap = env.aps[0].position;
    let rx = Point::new(300.0, 50.0);
    let paths = agg.paths(ap, rx, Band::Ghz24);
    let los = paths[0].length_m;

    for path in &paths[1..] {
        assert!(path.length_m >= los - 1e-9);
        match path.route {
            wavemap_core::PathRoute::Reflection { .. } => {
                assert!(path.length_m <= los * tuning.reflection.los_ratio_cutoff);
            }
            wavemap_core::PathRoute::Diffraction { .. } => {
                assert!(path.length_m <= los * tuning.diffraction.los_ratio_cutoff);
            }
            wavemap_core::PathRoute::Direct => panic!("only the first path is direct"),
        }
    }
    assert!(paths.iter().any(|p| matches!(p.route, wavemap_core::PathRoute::Reflection { .. })));
    assert!(paths.iter().any(|p| matches!(p.route, wavemap_core::PathRoute::Diffraction { .. })));
}

// ── Rendering ───────────────────────────────────────────────────────

fn office() -> Environment {
    Environment::new(0.05, 2.5)
        .with_ap(AccessPoint::new("AP-1", (40.0, 40.0)))
        .with_ap(AccessPoint::new("AP-2", (150.0, 90.0)).with_bands(&[Band::Ghz5]))
        .with_wall(Wall::new((100.0, 0.0), (100.0, 70.0), WallMaterial::Brick))
        .with_wall(Wall::new((0.0, 70.0), (60.0, 70.0), WallMaterial::Drywall))
}

#[test]
fn render_paints_every_block_in_range() {
    let env = office();
    let tuning = PropagationTuning::default();
    let req = HeatmapRequest {
        smooth_radius_px: 0,
        ..HeatmapRequest::new(200, 120)
    };
    let img = HeatmapGenerator::new(&env, &tuning).generate(&req).unwrap();

    assert_eq!(img.dimensions(), (200, 120));
    assert!(img.pixels().all(|p| p.0[3] == 140));
}

#[test]
fn grid_matches_block_by_block_evaluation() {
    let env = office();
    let tuning = PropagationTuning::default();
    let req = HeatmapRequest {
        grid_step_px: 10,
        smooth_radius_px: 0,
        ..HeatmapRequest::new(95, 63)
    };
    let agg = Aggregator::new(&env, &tuning);
    let img = grid::paint(&agg, &req);

    for y0 in (0..req.height).step_by(10) {
        for x0 in (0..req.width).step_by(10) {
            let rssi = grid::block_rssi(&agg, x0, y0, &req).unwrap();
            let expected = wavemap_core::render::colormap::rssi_to_color(
                rssi,
                req.legend_min_dbm,
                req.legend_max_dbm,
            );
            assert_eq!(*img.get_pixel(x0, y0), expected);
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let env = office();
    let tuning = PropagationTuning::default();
    let generator = HeatmapGenerator::new(&env, &tuning);
    let req = HeatmapRequest::new(120, 80);
    assert_eq!(generator.generate(&req).unwrap(), generator.generate(&req).unwrap());
}

#[test]
fn disabled_aps_render_transparent() {
    let mut env = office();
    for ap in &mut env.aps {
        ap.enabled = false;
    }
    let tuning = PropagationTuning::default();
    let img = HeatmapGenerator::new(&env, &tuning)
        .generate(&HeatmapRequest::new(64, 64))
        .unwrap();
    assert!(img.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn smoothing_softens_block_edges() {
    let env = Environment::new(0.05, 2.5).with_ap(single_band_ap("AP", (0.0, 0.0)));
    let tuning = PropagationTuning::los_only();
    let generator = HeatmapGenerator::new(&env, &tuning);

    let sharp = HeatmapRequest {
        grid_step_px: 16,
        smooth_radius_px: 0,
        ..HeatmapRequest::new(64, 64)
    };
    let soft = HeatmapRequest {
        smooth_radius_px: 4,
        ..sharp.clone()
    };
    let a = generator.generate(&sharp).unwrap();
    let b = generator.generate(&soft).unwrap();
    assert_ne!(a, b);
    // Uniform alpha survives the blur.
    assert!(b.pixels().all(|p| p.0[3] == 140));
}
