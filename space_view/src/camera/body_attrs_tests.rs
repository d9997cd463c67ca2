use slotmap::SlotMap;
use super::*;

fn create_attrs(ids: &mut SlotMap<BodyId, ()>, cam_dist: f64, flags: BodyFlags) -> BodyAttrs {
    BodyAttrs {
        body: ids.insert(()),
        view_transform: DMat4::IDENTITY,
        view_coords: DVec3::new(0.0, 0.0, -cam_dist),
        cam_dist,
        flags,
        billboard: None,
    }
}

#[test]
fn test_sort_far_to_near() {
    let mut ids = SlotMap::with_key();
    let mut bodies = vec![
        create_attrs(&mut ids, 10.0, BodyFlags::empty()),
        create_attrs(&mut ids, 1000.0, BodyFlags::empty()),
        create_attrs(&mut ids, 100.0, BodyFlags::empty()),
    ];

    sort_for_draw(&mut bodies);

    let dists: Vec<f64> = bodies.iter().map(|b| b.cam_dist()).collect();
    assert_eq!(dists, vec![1000.0, 100.0, 10.0]);
}

#[test]
fn test_draw_last_after_normal_bodies() {
    let mut ids = SlotMap::with_key();
    let mut bodies = vec![
        create_attrs(&mut ids, 5.0, BodyFlags::DRAW_LAST),
        create_attrs(&mut ids, 10.0, BodyFlags::empty()),
        create_attrs(&mut ids, 5000.0, BodyFlags::DRAW_LAST),
        create_attrs(&mut ids, 1.0, BodyFlags::empty()),
        create_attrs(&mut ids, 300.0, BodyFlags::empty()),
    ];

    sort_for_draw(&mut bodies);

    let order: Vec<(f64, bool)> = bodies
        .iter()
        .map(|b| (b.cam_dist(), b.flags().contains(BodyFlags::DRAW_LAST)))
        .collect();
    assert_eq!(
        order,
        vec![(300.0, false), (10.0, false), (1.0, false), (5000.0, true), (5.0, true)]
    );
}

#[test]
fn test_sort_is_stable_for_equal_distance() {
    let mut ids = SlotMap::with_key();
    let first = create_attrs(&mut ids, 50.0, BodyFlags::empty());
    let second = create_attrs(&mut ids, 50.0, BodyFlags::empty());
    let (first_id, second_id) = (first.body(), second.body());
    let mut bodies = vec![first, second];

    sort_for_draw(&mut bodies);

    assert_eq!(bodies[0].body(), first_id);
    assert_eq!(bodies[1].body(), second_id);
}

#[test]
fn test_billboard_accessors() {
    let mut ids = SlotMap::with_key();
    let mut attrs = create_attrs(&mut ids, 1.0e9, BodyFlags::empty());
    assert!(!attrs.is_billboard());

    attrs.billboard = Some(Billboard {
        position: Vec3::new(0.0, 0.0, -500.0),
        size: 1.0,
        color: Color::WHITE,
    });

    assert!(attrs.is_billboard());
    assert_eq!(attrs.billboard().map(|b| b.size), Some(1.0));
}
