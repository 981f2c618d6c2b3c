// Host-side tests for pointer smoothing and camera matrices.

use portfolio_core::camera::{approach, CameraRig, PointerState};
use portfolio_core::constants::{CAMERA_PARALLAX, CAMERA_TAU_SEC};

const DT: f32 = 1.0 / 60.0;

#[test]
fn approach_moves_toward_target_without_overshoot() {
    let mut x = 0.0;
    let mut prev_gap = (10.0f32 - x).abs();
    for _ in 0..300 {
        x = approach(x, 10.0, DT, CAMERA_TAU_SEC);
        let gap = (10.0f32 - x).abs();
        assert!(gap <= prev_gap, "gap grew from {prev_gap} to {gap}");
        assert!(x <= 10.0, "overshot to {x}");
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-3, "did not converge, gap {prev_gap}");
}

#[test]
fn approach_is_framerate_independent() {
    // One whole second in a single step vs sixty small ones.
    let coarse = approach(0.0, 1.0, 1.0, CAMERA_TAU_SEC);
    let mut fine = 0.0;
    for _ in 0..60 {
        fine = approach(fine, 1.0, DT, CAMERA_TAU_SEC);
    }
    assert!(
        (coarse - fine).abs() < 1e-3,
        "coarse {coarse} vs fine {fine}"
    );
}

#[test]
fn approach_closes_most_of_the_gap_after_tau() {
    let after_tau = approach(0.0, 1.0, CAMERA_TAU_SEC, CAMERA_TAU_SEC);
    assert!((after_tau - 0.632).abs() < 0.01, "got {after_tau}");
}

#[test]
fn approach_ignores_nonpositive_dt() {
    assert_eq!(approach(3.0, 10.0, 0.0, CAMERA_TAU_SEC), 3.0);
    assert_eq!(approach(3.0, 10.0, -0.1, CAMERA_TAU_SEC), 3.0);
}

#[test]
fn rig_eases_toward_pointer_with_screen_y_flipped() {
    let mut rig = CameraRig::new();
    let pointer = PointerState { dx: 100.0, dy: 50.0 };
    for _ in 0..600 {
        rig.step(pointer, DT);
    }
    let offset = rig.offset();
    assert!((offset.x - 100.0 * CAMERA_PARALLAX).abs() < 1e-2);
    assert!((offset.y - -50.0 * CAMERA_PARALLAX).abs() < 1e-2);
}

#[test]
fn rig_holds_still_for_centered_pointer() {
    let mut rig = CameraRig::new();
    for _ in 0..60 {
        rig.step(PointerState::default(), DT);
    }
    assert_eq!(rig.offset().x, 0.0);
    assert_eq!(rig.offset().y, 0.0);
}

#[test]
fn camera_matrices_are_finite_and_respond_to_aspect() {
    let mut rig = CameraRig::new();
    rig.step(PointerState { dx: 40.0, dy: -20.0 }, 0.5);

    let wide = rig.camera(16.0 / 9.0);
    let square = rig.camera(1.0);
    for m in [
        wide.projection_matrix(),
        wide.view_matrix(),
        square.projection_matrix(),
    ] {
        for v in m.to_cols_array() {
            assert!(v.is_finite());
        }
    }
    assert_ne!(
        wide.projection_matrix(),
        square.projection_matrix(),
        "aspect must shape the projection"
    );

    // Eye follows the smoothed offset, look-at stays down the field axis.
    assert_eq!(wide.eye.x, rig.offset().x);
    assert_eq!(wide.eye.y, rig.offset().y);
    assert_eq!(wide.eye.z, 0.0);
    assert!(wide.target.z < 0.0);
}
