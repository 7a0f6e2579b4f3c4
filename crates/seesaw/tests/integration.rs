//! Integration tests for the seesaw balance simulator.

use approx::assert_relative_eq;
use seesaw::{
    BalanceModel, MAX_TILT_DEG, Vec2, Weight, layout_to_json, parse_layout, restore_layout,
    rotate, to_records,
};

/// Place a weight at an exact board offset through the full placement path:
/// the pointer is given in the visual frame the current tilt produces, so
/// `place` has to un-rotate it back to `offset`.
fn place_at_offset(model: &mut BalanceModel, magnitude: f64, offset: f64) -> Weight {
    let tilt = model.tilt_deg();
    let pointer = rotate(Vec2::new(offset, 0.0), tilt.to_radians());
    model.place(magnitude, pointer)
}

#[test]
fn tilt_stays_bounded_for_any_layout() {
    let mut model = BalanceModel::default();
    for i in 0..50 {
        let offset = (i as f64 - 25.0) * 137.0;
        model.restore(10.0, offset, offset + 350.0);
        assert!(
            model.tilt_deg().abs() <= MAX_TILT_DEG,
            "tilt {} out of bounds after {} weights",
            model.tilt_deg(),
            model.len(),
        );
    }

    // Heavily one-sided layouts saturate exactly at the limit.
    let mut heavy = BalanceModel::default();
    heavy.restore(10.0, 3000.0, 3350.0);
    assert_eq!(heavy.tilt_deg(), MAX_TILT_DEG);
    heavy.reset();
    heavy.restore(10.0, -3000.0, -2650.0);
    assert_eq!(heavy.tilt_deg(), -MAX_TILT_DEG);
}

#[test]
fn single_weight_loads_one_side_only() {
    let mut model = BalanceModel::default();
    place_at_offset(&mut model, 4.0, -120.0);
    let b = model.balance();
    assert_relative_eq!(b.left_torque, 480.0, epsilon = 1e-9);
    assert_relative_eq!(b.right_torque, 0.0);

    let mut model = BalanceModel::default();
    place_at_offset(&mut model, 4.0, 120.0);
    let b = model.balance();
    assert_relative_eq!(b.left_torque, 0.0);
    assert_relative_eq!(b.right_torque, 480.0, epsilon = 1e-9);
}

#[test]
fn equal_opposite_weights_balance() {
    let mut model = BalanceModel::default();
    place_at_offset(&mut model, 5.0, -150.0);
    // The board is tilted now; the second placement exercises un-rotation.
    place_at_offset(&mut model, 5.0, 150.0);

    let b = model.balance();
    assert_relative_eq!(b.left_torque, b.right_torque, epsilon = 1e-9);
    assert_relative_eq!(b.tilt_deg, 0.0, epsilon = 1e-9);
}

#[test]
fn worked_example_tilts_ten_degrees() {
    // {5 at -100, 3 at +200}: left 500, right 600, tilt 10.
    let mut model = BalanceModel::default();
    model.restore(5.0, -100.0, 250.0);
    model.restore(3.0, 200.0, 550.0);

    let b = model.balance();
    assert_relative_eq!(b.left_torque, 500.0);
    assert_relative_eq!(b.right_torque, 600.0);
    assert_relative_eq!(b.tilt_deg, 10.0);
}

#[test]
fn placement_beyond_edges_clamps_to_margins() {
    // Board width 700: margin 35, placeable span [35, 665].
    let mut model = BalanceModel::default();
    let w = model.place(5.0, Vec2::new(-10_000.0, 0.0));
    assert_eq!(w.position, 35.0);
    assert_eq!(w.offset, -315.0);

    let w = model.place(5.0, Vec2::new(10_000.0, 0.0));
    assert_eq!(w.position, 665.0);
    assert_eq!(w.offset, 315.0);
}

#[test]
fn pivot_placement_contributes_no_torque() {
    let mut model = BalanceModel::default();
    let w = model.place(5.0, Vec2::new(0.0, 0.0));
    assert_eq!(w.offset, 0.0);
    assert_eq!(model.torques(), (0.0, 0.0));
    assert_eq!(model.tilt_deg(), 0.0);
}

#[test]
fn removing_unknown_id_changes_nothing() {
    let mut model = BalanceModel::default();
    place_at_offset(&mut model, 5.0, -100.0);
    let before = model.balance();

    assert!(!model.remove(12345));
    assert_eq!(model.balance(), before);
    assert_eq!(model.len(), 1);
}

#[test]
fn serialize_deserialize_reproduces_layout() {
    let mut model = BalanceModel::default();
    place_at_offset(&mut model, 5.0, -100.0);
    place_at_offset(&mut model, 3.0, 200.0);
    place_at_offset(&mut model, 1.0, 40.0);

    let json = layout_to_json(&to_records(&model)).unwrap();
    let records = parse_layout(&json).unwrap();

    let mut restored = BalanceModel::default();
    restore_layout(&mut restored, &records);

    assert_eq!(restored.len(), model.len());
    for (a, b) in restored.weights().iter().zip(model.weights()) {
        assert_relative_eq!(a.magnitude, b.magnitude);
        assert_relative_eq!(a.offset, b.offset);
        assert_relative_eq!(a.position, b.position);
    }
    let (rl, rr) = restored.torques();
    let (ml, mr) = model.torques();
    assert_relative_eq!(rl, ml);
    assert_relative_eq!(rr, mr);
}

#[test]
fn restored_layout_is_not_reclamped() {
    // A layout saved on a wider board sits outside this board's margins;
    // loading keeps it there.
    let records = parse_layout(r#"[{"magnitude":2,"offset":450,"position":800}]"#).unwrap();
    let mut model = BalanceModel::default();
    restore_layout(&mut model, &records);

    assert_eq!(model.weights()[0].offset, 450.0);
    assert_eq!(model.weights()[0].position, 800.0);
    let (_, right) = model.torques();
    assert_eq!(right, 900.0);
}

#[test]
fn tilted_placement_lands_where_the_pointer_shows() {
    let mut model = BalanceModel::default();
    place_at_offset(&mut model, 10.0, 250.0);
    let tilt = model.tilt_deg();
    assert!(tilt > 0.0, "expected a right tilt, got {tilt}");

    // Pointer over the visual position of board coordinate -80.
    let w = place_at_offset(&mut model, 2.0, -80.0);
    assert_relative_eq!(w.offset, -80.0, epsilon = 1e-9);
}

#[test]
fn layout_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let mut model = BalanceModel::default();
    place_at_offset(&mut model, 5.0, -100.0);
    place_at_offset(&mut model, 3.0, 200.0);
    seesaw::save_layout_file(&path, &model).unwrap();

    let records = seesaw::load_layout_file(&path).unwrap();
    let mut restored = BalanceModel::default();
    restore_layout(&mut restored, &records);

    assert_eq!(restored.torques(), model.torques());
    assert_eq!(restored.tilt_deg(), model.tilt_deg());
}

#[test]
fn ids_stay_unique_for_the_whole_session() {
    let mut model = BalanceModel::default();
    let a = place_at_offset(&mut model, 1.0, -50.0);
    let b = place_at_offset(&mut model, 1.0, 50.0);
    model.remove(a.id);
    model.reset();
    let c = place_at_offset(&mut model, 1.0, 0.0);

    assert!(b.id > a.id);
    assert!(c.id > b.id, "id {} reused after reset", c.id);
}
