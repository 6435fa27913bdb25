// Transition sequencing, stage timers and the per-frame opacity ramp.

use std::time::Duration;
use tour_core::{
    CameraState, SphereRamp, StageChange, TimerQueue, TransitionMachine, TransitionRejected,
    TransitionStage, TransitionTimings,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn navigate_walks_every_stage_once() {
    let mut m = TransitionMachine::new(TransitionTimings::default());
    assert_eq!(m.navigate("reception", "hallway"), Ok(ms(600)));
    assert_eq!(m.stage(), TransitionStage::ZoomingIn);
    assert_eq!(m.target(), Some("hallway"));

    let a = m.advance().expect("zooming-in advances");
    assert_eq!(a.change, StageChange::Hold);
    assert_eq!(a.next_in, Some(ms(300)));
    assert_eq!(m.stage(), TransitionStage::ChangingScene);
    assert_eq!(m.target(), Some("hallway"));

    let a = m.advance().expect("changing-scene advances");
    assert_eq!(
        a.change,
        StageChange::SwapScene {
            target: "hallway".into()
        }
    );
    assert_eq!(a.next_in, Some(ms(500)));
    assert_eq!(m.stage(), TransitionStage::Settling);
    assert_eq!(m.target(), None);

    let a = m.advance().expect("settling advances");
    assert_eq!(a.change, StageChange::Finished);
    assert_eq!(a.next_in, None);
    assert!(m.is_idle());
    assert!(m.advance().is_none());
}

#[test]
fn navigate_rejects_same_scene_and_in_flight_requests() {
    let mut m = TransitionMachine::new(TransitionTimings::default());
    assert_eq!(
        m.navigate("reception", "reception"),
        Err(TransitionRejected::SameScene)
    );
    assert!(m.is_idle());

    m.navigate("reception", "hallway").expect("first navigate");
    let before = m.state().clone();
    assert_eq!(
        m.navigate("reception", "waiting-area"),
        Err(TransitionRejected::InFlight)
    );
    assert_eq!(m.state(), &before);
}

#[test]
fn custom_timings_are_reported() {
    let timings = TransitionTimings {
        zoom_in: ms(10),
        changing_scene: ms(20),
        settle: ms(30),
    };
    let mut m = TransitionMachine::new(timings);
    assert_eq!(m.navigate("a", "b"), Ok(ms(10)));
    assert_eq!(m.advance().and_then(|a| a.next_in), Some(ms(20)));
    assert_eq!(m.advance().and_then(|a| a.next_in), Some(ms(30)));
}

#[test]
fn stage_labels() {
    assert_eq!(TransitionStage::Idle.label(), "idle");
    assert_eq!(TransitionStage::ZoomingIn.label(), "zooming-in");
    assert_eq!(TransitionStage::ChangingScene.label(), "changing-scene");
    assert_eq!(TransitionStage::Settling.label(), "settling");
}

#[test]
fn timers_fire_in_deadline_order() {
    let mut q = TimerQueue::new();
    q.schedule(ms(0), ms(300), "c");
    q.schedule(ms(0), ms(100), "a");
    q.schedule(ms(50), ms(50), "b");
    assert_eq!(q.next_deadline(), Some(ms(100)));
    assert_eq!(q.pop_due(ms(99)), None);
    // same deadline: scheduling order wins
    assert_eq!(q.pop_due(ms(150)), Some("a"));
    assert_eq!(q.pop_due(ms(150)), Some("b"));
    assert_eq!(q.pop_due(ms(150)), None);
    assert_eq!(q.len(), 1);
    assert_eq!(q.pop_due(ms(1_000)), Some("c"));
    assert!(q.is_empty());
}

#[test]
fn cancelled_timers_never_fire() {
    let mut q = TimerQueue::new();
    let a = q.schedule(ms(0), ms(10), 1);
    q.schedule(ms(0), ms(20), 2);
    assert!(q.cancel(a));
    assert!(!q.cancel(a));
    assert_eq!(q.pop_due(ms(100)), Some(2));

    q.schedule(ms(0), ms(10), 3);
    q.schedule(ms(0), ms(10), 4);
    assert_eq!(q.cancel_all(), 2);
    assert_eq!(q.pop_due(ms(100)), None);
    assert_eq!(q.next_deadline(), None);
}

#[test]
fn ramp_starts_transparent_and_waits_for_a_texture() {
    let mut ramp = SphereRamp::default();
    let mut cam = CameraState::default();
    assert_eq!(ramp.opacity(), 0.0);
    for _ in 0..10 {
        ramp.step(TransitionStage::Idle, false, &mut cam);
    }
    assert_eq!(ramp.opacity(), 0.0);
    ramp.step(TransitionStage::Idle, true, &mut cam);
    assert!((ramp.opacity() - 0.05).abs() < 1e-6);
    for _ in 0..40 {
        ramp.step(TransitionStage::Idle, true, &mut cam);
    }
    assert_eq!(ramp.opacity(), 1.0);
    assert_eq!(cam, CameraState::default());
}

#[test]
fn zoom_in_fades_to_the_plateau_and_narrows_fov() {
    let mut ramp = SphereRamp::default();
    let mut cam = CameraState::default();
    for _ in 0..30 {
        ramp.step(TransitionStage::Idle, true, &mut cam);
    }
    ramp.step(TransitionStage::ZoomingIn, true, &mut cam);
    assert!((ramp.opacity() - 0.95).abs() < 1e-5);
    assert!((cam.fov - 74.25).abs() < 1e-4);
    for _ in 0..100 {
        ramp.step(TransitionStage::ZoomingIn, true, &mut cam);
    }
    assert!((ramp.opacity() - 0.3).abs() < 1e-6);
    assert_eq!(cam.fov, 30.0);
}

#[test]
fn zoom_in_never_raises_a_dim_sphere() {
    let mut ramp = SphereRamp::default();
    let mut cam = CameraState::default();
    ramp.step(TransitionStage::ZoomingIn, true, &mut cam);
    assert_eq!(ramp.opacity(), 0.0);
}

#[test]
fn changing_scene_caps_and_settling_recovers() {
    let mut ramp = SphereRamp::default();
    let mut cam = CameraState::default();
    for _ in 0..30 {
        ramp.step(TransitionStage::Idle, true, &mut cam);
    }
    ramp.step(TransitionStage::ChangingScene, true, &mut cam);
    assert!((ramp.opacity() - 0.3).abs() < 1e-6);

    // new panorama still loading: hold
    ramp.step(TransitionStage::Settling, false, &mut cam);
    assert!((ramp.opacity() - 0.3).abs() < 1e-6);
    ramp.step(TransitionStage::Settling, true, &mut cam);
    assert!((ramp.opacity() - 0.35).abs() < 1e-5);
}
