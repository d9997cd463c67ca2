use std::f32::consts::PI;
use glam::Vec3;
use crate::body::{mock_body::MockBody, StarKind, SpectralClass, SystemBody, SystemBodyKind};
use crate::renderer::{Color, Light};
use super::*;

// ============================================================================
// Scene helpers
// ============================================================================

fn add_planet(space: &mut Space, label: &str, position: DVec3, radius: f64) -> BodyId {
    let root = space.root_frame();
    let body = MockBody::new(label, BodyType::Planet, root, position, radius)
        .with_system_body(SystemBody::new(label, SystemBodyKind::Terrestrial, radius));
    space.add_body(Box::new(body)).unwrap()
}

fn add_star(space: &mut Space, position: DVec3, radius: f64) -> BodyId {
    let root = space.root_frame();
    let kind = SystemBodyKind::Star(StarKind::MainSequence(SpectralClass::G));
    let body = MockBody::new("star", BodyType::Star, root, position, radius)
        .with_system_body(SystemBody::new("star", kind, radius));
    space.add_body(Box::new(body)).unwrap()
}

fn star_light(star: BodyId) -> Vec<LightSource> {
    vec![LightSource::new(Some(star), Light::directional(Vec3::Z, Color::WHITE))]
}

/// Star at z=100 (r=1), target at the origin (r=1).
fn create_eclipse_scene() -> (Space, BodyId, BodyId) {
    let mut space = Space::new();
    let star = add_star(&mut space, DVec3::new(0.0, 0.0, 100.0), 1.0);
    let target = add_planet(&mut space, "target", DVec3::ZERO, 1.0);
    (space, star, target)
}

// ============================================================================
// disc_covered
// ============================================================================

#[test]
fn test_disc_covered_always_bounded_and_finite() {
    let samples = [
        0.0f32, 1.0e-30, 0.0005, 0.01, 0.5, 1.0, 1.5, 2.0, 10.0, 1.0e6, 3.0e4, 1.0e20, f32::MAX,
    ];
    for &dist in &samples {
        for &rad in &samples {
            let covered = disc_covered(dist, rad);
            assert!(covered.is_finite(), "dist={} rad={}", dist, rad);
            assert!((0.0..=1.0).contains(&covered), "dist={} rad={} -> {}", dist, rad, covered);
        }
    }
}

#[test]
fn test_disc_covered_concentric_larger_disc() {
    assert!((disc_covered(0.0, 1.0) - 1.0).abs() < 1e-6);
    assert_eq!(disc_covered(0.0, 2.0), 1.0);
    assert_eq!(disc_covered(0.0, 100.0), 1.0);
}

#[test]
fn test_disc_covered_concentric_smaller_disc() {
    assert!((disc_covered(0.0, 0.5) - 0.25).abs() < 1e-6);
}

#[test]
fn test_disc_covered_separated_discs() {
    assert_eq!(disc_covered(2.0, 1.0), 0.0);
    assert_eq!(disc_covered(3.0, 1.0), 0.0);
    assert_eq!(disc_covered(5.0, 0.5), 0.0);
}

#[test]
fn test_disc_covered_touching_discs_exactly_zero() {
    // 1 + r is rarely representable; the sum must still count as separated
    let mut r = 0.0f32;
    while r < 50.0 {
        assert_eq!(disc_covered(1.0 + r, r), 0.0, "rad={}", r);
        r += 0.013;
    }
}

#[test]
fn test_disc_covered_huge_inputs() {
    assert_eq!(disc_covered(1.0e20, 1.0e20), 0.0);
    assert_eq!(disc_covered(f32::MAX, f32::MAX), 0.0);
    assert_eq!(disc_covered(0.0, f32::MAX), 1.0);
    assert_eq!(disc_covered(f32::MAX, 0.5), 0.0);
}

#[test]
fn test_disc_covered_huge_disc_edge_through_centre() {
    // Edge of a very large disc passing through the unit disc centre
    let covered = disc_covered(1.0e5, 1.0e5);
    assert!((covered - 0.5).abs() < 1e-3, "got {}", covered);

    // Edge 0.9 beyond the centre: nearly all covered
    let covered = disc_covered(1.0e5 - 0.9, 1.0e5);
    assert!(covered > 0.9 && covered < 1.0, "got {}", covered);
}

#[test]
fn test_disc_covered_contained_small_disc() {
    assert_eq!(disc_covered(0.25, 0.5), 0.25);
    assert_eq!(disc_covered(0.5, 0.25), 0.0625);
}

#[test]
fn test_disc_covered_partial_overlap() {
    let covered = disc_covered(1.0, 1.0);
    // Lens of two unit circles one radius apart: (2π/3 - √3/2) / π
    let expected = (2.0 * PI / 3.0 - 3.0f32.sqrt() / 2.0) / PI;
    assert!((covered - expected).abs() < 1e-5, "got {}", covered);
}

#[test]
fn test_disc_covered_grows_as_discs_approach() {
    let far = disc_covered(1.8, 1.0);
    let mid = disc_covered(1.0, 1.0);
    let near = disc_covered(0.3, 1.0);
    assert!(far < mid && mid < near);
}

// ============================================================================
// Shadow
// ============================================================================

#[test]
fn test_shadow_significance_order() {
    let small = Shadow { centre: DVec3::ZERO, srad: 0.1, lrad: 0.5 };
    let big = Shadow { centre: DVec3::ZERO, srad: 2.0, lrad: 0.5 };

    assert_eq!(small.cmp_significance(&big), Ordering::Less);
    assert_eq!(big.cmp_significance(&small), Ordering::Greater);
    assert!((big.significance() - 4.0).abs() < 1e-6);
}

// ============================================================================
// calc_shadows / shadowed_intensity
// ============================================================================

#[test]
fn test_occluder_on_axis_casts_total_eclipse() {
    let (mut space, star, target) = create_eclipse_scene();
    add_planet(&mut space, "moon", DVec3::new(0.0, 0.0, 50.0), 0.5);
    let lights = star_light(star);

    let mut shadows = Vec::new();
    calc_shadows(&space, &lights, 0, target, 0.01, &mut shadows);

    assert_eq!(shadows.len(), 1);
    assert!((shadows[0].srad - 0.5).abs() < 1e-6);
    assert!((shadows[0].lrad - 0.5).abs() < 1e-6);
    assert!(shadows[0].centre.length() < 1e-12);

    let intensity = shadowed_intensity(&space, &lights, 0, target, 0.01);
    assert!(intensity < 1e-5, "got {}", intensity);
}

#[test]
fn test_calc_shadows_appends() {
    let (mut space, star, target) = create_eclipse_scene();
    add_planet(&mut space, "moon", DVec3::new(0.0, 0.0, 50.0), 0.5);
    let lights = star_light(star);

    let mut shadows = vec![Shadow { centre: DVec3::X, srad: 1.0, lrad: 1.0 }];
    calc_shadows(&space, &lights, 0, target, 0.01, &mut shadows);

    assert_eq!(shadows.len(), 2);
    assert_eq!(shadows[0].centre, DVec3::X);
}

#[test]
fn test_no_occluders_gives_full_intensity() {
    let (space, star, target) = create_eclipse_scene();
    let lights = star_light(star);

    let mut shadows = Vec::new();
    calc_shadows(&space, &lights, 0, target, 0.01, &mut shadows);

    assert!(shadows.is_empty());
    assert_eq!(shadowed_intensity(&space, &lights, 0, target, 0.01), 1.0);
}

#[test]
fn test_negligible_occluder_ignored() {
    let (mut space, star, target) = create_eclipse_scene();
    // srad / lrad = 0.001 / 0.5
    add_planet(&mut space, "pebble", DVec3::new(0.0, 0.0, 50.0), 0.001);
    let lights = star_light(star);

    assert_eq!(shadowed_intensity(&space, &lights, 0, target, 0.01), 1.0);
}

#[test]
fn test_occluder_behind_body_ignored() {
    let (mut space, star, target) = create_eclipse_scene();
    add_planet(&mut space, "behind", DVec3::new(0.0, 0.0, -50.0), 0.5);
    let lights = star_light(star);

    let mut shadows = Vec::new();
    calc_shadows(&space, &lights, 0, target, 0.01, &mut shadows);
    assert!(shadows.is_empty());
}

#[test]
fn test_occluder_beyond_light_ignored() {
    let (mut space, star, target) = create_eclipse_scene();
    add_planet(&mut space, "beyond", DVec3::new(0.0, 0.0, 150.0), 5.0);
    let lights = star_light(star);

    let mut shadows = Vec::new();
    calc_shadows(&space, &lights, 0, target, 0.01, &mut shadows);
    assert!(shadows.is_empty());
}

#[test]
fn test_occluder_off_axis_ignored() {
    let (mut space, star, target) = create_eclipse_scene();
    add_planet(&mut space, "aside", DVec3::new(10.0, 0.0, 50.0), 0.5);
    let lights = star_light(star);

    let mut shadows = Vec::new();
    calc_shadows(&space, &lights, 0, target, 0.01, &mut shadows);
    assert!(shadows.is_empty());
}

#[test]
fn test_ships_do_not_occlude() {
    let (mut space, star, target) = create_eclipse_scene();
    let root = space.root_frame();
    space.add_body(Box::new(MockBody::new("ship", BodyType::Ship, root, DVec3::new(0.0, 0.0, 50.0), 5.0))).unwrap();
    let lights = star_light(star);

    assert_eq!(shadowed_intensity(&space, &lights, 0, target, 0.01), 1.0);
}

#[test]
fn test_fallback_light_casts_no_shadow() {
    let (mut space, _star, target) = create_eclipse_scene();
    add_planet(&mut space, "moon", DVec3::new(0.0, 0.0, 50.0), 0.5);
    let lights = vec![LightSource::new(None, Light::directional(Vec3::ZERO, Color::WHITE))];

    assert_eq!(shadowed_intensity(&space, &lights, 0, target, 0.01), 1.0);
    // Out of range index
    assert_eq!(shadowed_intensity(&space, &lights, 3, target, 0.01), 1.0);
}

#[test]
fn test_partial_eclipse_between_zero_and_one() {
    let (mut space, star, target) = create_eclipse_scene();
    // Projected centre 0.5 from the axis: half the light disc covered
    add_planet(&mut space, "moon", DVec3::new(0.5, 0.0, 50.0), 0.5);
    let lights = star_light(star);

    let intensity = shadowed_intensity(&space, &lights, 0, target, 0.01);
    assert!(intensity > 0.0 && intensity < 1.0, "got {}", intensity);
}

// ============================================================================
// principal_shadows
// ============================================================================

fn create_two_occluder_scene() -> (Space, Vec<LightSource>, BodyId) {
    let (mut space, star, target) = create_eclipse_scene();
    // significance 1.0
    add_planet(&mut space, "small", DVec3::new(0.0, 0.0, 50.0), 0.5);
    // lrad = 0.3, significance 2.0
    add_planet(&mut space, "large", DVec3::new(0.2, 0.0, 30.0), 0.6);
    (space, star_light(star), target)
}

#[test]
fn test_principal_shadows_most_significant_first() {
    let (space, lights, target) = create_two_occluder_scene();

    let shadows = principal_shadows(&space, &lights, target, 5, 4, 0.01);

    assert_eq!(shadows.len(), 2);
    assert!(shadows[0].significance() > shadows[1].significance());
    assert!((shadows[0].srad - 0.6).abs() < 1e-6);
}

#[test]
fn test_principal_shadows_limited_to_n() {
    let (space, lights, target) = create_two_occluder_scene();

    assert_eq!(principal_shadows(&space, &lights, target, 1, 4, 0.01).len(), 1);
    assert!(principal_shadows(&space, &lights, target, 0, 4, 0.01).is_empty());
}

#[test]
fn test_principal_shadows_respects_light_limit() {
    let (space, lights, target) = create_two_occluder_scene();

    assert!(principal_shadows(&space, &lights, target, 5, 0, 0.01).is_empty());
}
