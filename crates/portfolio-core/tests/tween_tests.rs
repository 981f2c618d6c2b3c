// Host-side tests for the property tween engine.

use portfolio_core::tween::{Easing, Prop, TweenBank, TweenDone, TweenUpdate};

const ALL_EASINGS: [Easing; 6] = [
    Easing::Linear,
    Easing::QuadIn,
    Easing::QuadOut,
    Easing::CubicOut,
    Easing::BackOut,
    Easing::ElasticOut,
];

fn step(bank: &mut TweenBank, dt: f32) -> (Vec<TweenUpdate>, Vec<TweenDone>) {
    let mut updates = Vec::new();
    let mut completed = Vec::new();
    bank.step(dt, &mut updates, &mut completed);
    (updates, completed)
}

#[test]
fn easing_curves_hit_both_endpoints() {
    for easing in ALL_EASINGS {
        assert_eq!(easing.sample(0.0), 0.0, "{easing:?} at 0");
        assert_eq!(easing.sample(1.0), 1.0, "{easing:?} at 1");
        assert_eq!(easing.sample(-0.5), 0.0, "{easing:?} clamps below");
        assert_eq!(easing.sample(1.5), 1.0, "{easing:?} clamps above");
    }
}

#[test]
fn non_overshooting_curves_are_monotone() {
    for easing in [Easing::Linear, Easing::QuadIn, Easing::QuadOut, Easing::CubicOut] {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = easing.sample(i as f32 / 100.0);
            assert!(v >= prev, "{easing:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn back_and_elastic_overshoot() {
    for easing in [Easing::BackOut, Easing::ElasticOut] {
        let overshoots = (1..100).any(|i| easing.sample(i as f32 / 100.0) > 1.0);
        assert!(overshoots, "{easing:?} never crossed its target");
    }
}

#[test]
fn linear_tween_interpolates_midway() {
    let mut bank = TweenBank::new();
    bank.begin(1, Prop::TranslateX, 0.0, 10.0, 1.0, 0.0, Easing::Linear);
    let (updates, completed) = step(&mut bank, 0.5);
    assert_eq!(updates.len(), 1);
    assert!((updates[0].value - 5.0).abs() < 1e-5);
    assert!(completed.is_empty());
}

#[test]
fn tween_lands_exactly_on_target_and_completes_once() {
    let mut bank = TweenBank::new();
    bank.begin(1, Prop::Opacity, 0.0, 1.0, 1.0, 0.0, Easing::QuadOut);

    let (_, completed) = step(&mut bank, 0.7);
    assert!(completed.is_empty());

    let (updates, completed) = step(&mut bank, 0.7);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].value, 1.0, "final update must land on the target");
    assert_eq!(
        completed,
        vec![TweenDone { target: 1, prop: Prop::Opacity }]
    );
    assert!(bank.is_empty());

    // Nothing left to report.
    let (updates, completed) = step(&mut bank, 1.0);
    assert!(updates.is_empty());
    assert!(completed.is_empty());
}

#[test]
fn delay_holds_back_updates() {
    let mut bank = TweenBank::new();
    bank.begin(2, Prop::TranslateY, 0.0, 100.0, 1.0, 0.5, Easing::Linear);

    let (updates, _) = step(&mut bank, 0.25);
    assert!(updates.is_empty(), "no updates during the delay");

    let (updates, _) = step(&mut bank, 0.75);
    assert_eq!(updates.len(), 1);
    assert!((updates[0].value - 50.0).abs() < 1e-4);
}

#[test]
fn retarget_replaces_without_completing_the_old_tween() {
    let mut bank = TweenBank::new();
    bank.begin(3, Prop::TranslateX, 0.0, 10.0, 1.0, 0.0, Easing::Linear);
    let _ = step(&mut bank, 0.5);

    // Hover-retarget midway; the first tween must vanish silently.
    bank.begin(3, Prop::TranslateX, 5.0, 0.0, 0.5, 0.0, Easing::Linear);
    assert_eq!(bank.len(), 1);

    let (updates, completed) = step(&mut bank, 1.0);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].value, 0.0);
    assert_eq!(completed.len(), 1, "only the replacement completes");
    assert_eq!(completed[0].target, 3);
}

#[test]
fn independent_props_on_one_target_coexist() {
    let mut bank = TweenBank::new();
    bank.begin(4, Prop::TranslateX, 0.0, 10.0, 1.0, 0.0, Easing::Linear);
    bank.begin(4, Prop::Opacity, 1.0, 0.0, 2.0, 0.0, Easing::Linear);
    assert_eq!(bank.len(), 2);
    assert!(bank.has_target(4));

    let (_, completed) = step(&mut bank, 1.0);
    assert_eq!(completed.len(), 1);
    assert!(bank.has_target(4), "opacity is still animating");

    let (_, completed) = step(&mut bank, 1.0);
    assert_eq!(completed.len(), 1);
    assert!(!bank.has_target(4));
}

#[test]
fn zero_duration_completes_on_first_step() {
    let mut bank = TweenBank::new();
    bank.begin(5, Prop::Scale, 1.0, 2.0, 0.0, 0.0, Easing::BackOut);
    let (updates, completed) = step(&mut bank, 1.0 / 60.0);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].value, 2.0);
    assert_eq!(completed.len(), 1);
}

#[test]
fn elastic_settle_ends_at_rest() {
    let mut bank = TweenBank::new();
    bank.begin(6, Prop::TranslateX, 24.0, 0.0, 0.8, 0.0, Easing::ElasticOut);
    let mut last = f32::NAN;
    for _ in 0..120 {
        let (updates, _) = step(&mut bank, 1.0 / 60.0);
        if let Some(u) = updates.last() {
            last = u.value;
        }
    }
    assert_eq!(last, 0.0, "spring must end exactly at rest");
    assert!(bank.is_empty());
}

#[test]
fn prop_identities() {
    for prop in Prop::ALL {
        let id = prop.identity();
        match prop {
            Prop::Scale | Prop::Opacity => assert_eq!(id, 1.0),
            _ => assert_eq!(id, 0.0),
        }
    }
}
