use tarp_sim::{GridIndex, TarpError, Tarp, TarpConfig, TieOut, TieOutCursor, Vec3};

fn tarp() -> Tarp<f32> {
    Tarp::new(TarpConfig::flat_on_ground().with_points_per_axis(7)).unwrap()
}

#[test]
fn pin_twice_keeps_first_target() {
    let mut tarp = tarp();
    let idx = GridIndex::new(3, 3);
    tarp.pin(idx, Vec3::new(0.0, 1.0, 0.0));
    tarp.pin(idx, Vec3::new(0.0, 2.0, 0.0));
    tarp.lift(idx);
    tarp.stake(idx);
    tarp.step(1.0 / 60.0);
    assert_eq!(tarp.position(idx), Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(tarp.pinned_indices(), vec![idx]);
}

#[test]
fn unpin_releases_particle() {
    let mut tarp = tarp();
    let idx = GridIndex::new(0, 6);
    tarp.unpin(idx); // not pinned yet: no-op
    tarp.lift(idx);
    for _ in 0..10 {
        tarp.step(1.0 / 60.0);
    }
    assert!(tarp.is_pinned(idx));

    tarp.unpin(idx);
    assert!(!tarp.is_pinned(idx));
    let held = tarp.position(idx).y;
    assert_eq!(tarp.state().previous_positions()[idx.flatten(7)], tarp.position(idx));
    let mut peak = held;
    for _ in 0..30 {
        tarp.step(1.0 / 60.0);
        peak = peak.max(tarp.position(idx).y);
    }
    assert!(peak < held + 0.05, "released tie-out rose to {} from {}", peak, held);
    assert!(tarp.position(idx).y < held, "released tie-out should fall");
}

#[test]
fn new_drag_replaces_old() {
    let mut tarp = tarp();
    let first = GridIndex::new(0, 0);
    let second = GridIndex::new(6, 6);
    tarp.set_drag(first, Vec3::new(-3.0, 1.0, -3.0), 0.8).unwrap();
    tarp.set_drag(second, Vec3::new(3.0, 1.0, 3.0), 0.3).unwrap();
    assert_eq!(tarp.drag(), Some((second, Vec3::new(3.0, 1.0, 3.0), 0.3)));

    tarp.clear_drag();
    tarp.clear_drag();
    assert_eq!(tarp.drag(), None);
}

#[test]
fn drag_pulls_corner_towards_target() {
    let mut tarp = tarp();
    let corner = tarp.tie_out(TieOut::BottomRight);
    let target = Vec3::new(3.0, 0.0, 3.0);
    let start = tarp.position(corner);
    tarp.drag_to(corner, target);
    for _ in 0..60 {
        tarp.step(1.0 / 60.0);
    }
    let before = ((start.x - target.x).powi(2) + (start.z - target.z).powi(2)).sqrt();
    let p = tarp.position(corner);
    let after = ((p.x - target.x).powi(2) + (p.z - target.z).powi(2)).sqrt();
    assert!(after < before, "drag should close the gap: {} -> {}", before, after);
}

#[test]
fn invalid_compliance_is_rejected() {
    let mut tarp = tarp();
    let idx = GridIndex::new(1, 1);
    assert_eq!(tarp.set_drag(idx, Vec3::default(), -0.1), Err(TarpError::InvalidCompliance));
    assert_eq!(tarp.set_drag(idx, Vec3::default(), 1.01), Err(TarpError::InvalidCompliance));
    assert!(tarp.set_drag(idx, Vec3::default(), 1.0).is_ok());
}

#[test]
fn construction_rejects_bad_config() {
    let err = Tarp::<f32>::new(TarpConfig::new().with_iterations(0)).err();
    assert_eq!(err, Some(TarpError::InvalidIterations));
    let err = Tarp::<f32>::new(TarpConfig::new().with_drag_compliance(2.0)).err();
    assert_eq!(err, Some(TarpError::InvalidCompliance));
    let err = Tarp::<f32>::new(TarpConfig::new().with_ground_level(f32::NAN)).err();
    assert_eq!(err, Some(TarpError::NonFiniteParameter));
    let err = Tarp::<f64>::new(TarpConfig::new().with_gravity(Vec3::new(0.0, f64::NAN, 0.0))).err();
    assert_eq!(err, Some(TarpError::NonFiniteParameter));
    assert_eq!(
        TarpError::InvalidGridDimensions { n: 1 }.to_string(),
        "grid must be at least 2x2 (got 1 points per axis)"
    );
}

#[test]
fn guylines_join_particles_to_pin_targets() {
    let mut tarp = tarp();
    let indices = tarp.tie_out_indices();
    tarp.stake(indices[0]);
    tarp.lift(indices[8]);
    for _ in 0..5 {
        tarp.step(1.0 / 60.0);
    }
    let lines = tarp.guylines();
    assert_eq!(lines.len(), 2);
    for (pos, target) in lines {
        assert_eq!(pos, target);
    }
}

#[test]
fn cursor_selects_tie_outs_for_pinning() {
    let mut tarp = tarp();
    let mut cursor = TieOutCursor::new();
    assert_eq!(cursor.selected(), TieOut::Center);
    cursor.next();
    cursor.next();
    assert_eq!(cursor.selected(), TieOut::BottomLeft);

    let idx = tarp.tie_out(cursor.selected());
    tarp.stake(idx);
    assert_eq!(idx, GridIndex::new(6, 0));
    assert_eq!(tarp.pinned_indices(), vec![idx]);
}
