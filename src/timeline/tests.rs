use eframe::egui::{vec2, Color32, Pos2};

use crate::geometry::{Anchor, RowKey, Side, StageGeometry};
use crate::timeline::{Easing, RunState, Scene, Step, Timeline};

const OSI_IDS: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

fn stage() -> StageGeometry {
    StageGeometry::compute(vec2(1000.0, 700.0), &OSI_IDS)
}

fn close(a: Pos2, b: Pos2) -> bool {
    (a - b).length() < 0.01
}

/// Two sequential 1s moves with narrations plus a terminal narration.
fn two_move_timeline() -> Timeline {
    let mut tl = Timeline::builder();
    tl.push(Step::move_to(Anchor::Layer(Side::Sender, 7), 1.0, Easing::Linear).narrate("a", "s1"));
    tl.push(Step::move_to(Anchor::Layer(Side::Sender, 6), 1.0, Easing::Linear).narrate("a", "s2"));
    tl.on_complete("✅", "done");
    tl.build()
}

#[test]
fn test_easing_endpoints() {
    for easing in [Easing::Linear, Easing::QuadIn, Easing::QuadOut, Easing::QuadInOut] {
        assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
        assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        // Out of range input clamps instead of extrapolating.
        assert_eq!(easing.apply(-1.0), 0.0, "{easing:?}");
        assert_eq!(easing.apply(2.0), 1.0, "{easing:?}");
    }
    // At the midpoint the in-curve lags and the out-curve leads.
    assert!(Easing::QuadIn.apply(0.5) < 0.5);
    assert!(Easing::QuadOut.apply(0.5) > 0.5);
    assert_eq!(Easing::QuadInOut.apply(0.5), 0.5);
}

#[test]
fn test_fresh_timeline_is_idle_until_played() {
    let geo = stage();
    let mut scene = Scene::new();
    let mut tl = two_move_timeline();
    assert_eq!(tl.state(), RunState::Idle);
    // Ticking while idle is a no-op.
    assert!(tl.tick(1.0, 1.0, &geo, &mut scene).is_empty());
    assert_eq!(scene.token.pos, Pos2::ZERO);
    tl.play();
    assert_eq!(tl.state(), RunState::Running);
}

#[test]
fn test_linear_move_interpolates_position() {
    let geo = stage();
    let mut scene = Scene::new();
    let target = Anchor::Layer(Side::Sender, 4).resolve(&geo).unwrap();
    let start = Anchor::Home(Side::Sender).resolve(&geo).unwrap();

    let mut tl = Timeline::builder();
    tl.push(Step::move_to(Anchor::Home(Side::Sender), 0.0, Easing::Linear).opacity(1.0));
    tl.push(Step::move_to(Anchor::Layer(Side::Sender, 4), 1.0, Easing::Linear));
    let mut tl = tl.build();
    tl.play();

    tl.tick(0.5, 1.0, &geo, &mut scene);
    let midpoint = start + (target - start) * 0.5;
    assert!(close(scene.token.pos, midpoint), "{:?}", scene.token.pos);

    tl.tick(0.5, 1.0, &geo, &mut scene);
    assert!(close(scene.token.pos, target));
    assert_eq!(tl.state(), RunState::Completed);
}

#[test]
fn test_instant_set_applies_in_one_tick() {
    let geo = stage();
    let mut scene = Scene::new();
    let home = Anchor::Home(Side::Sender).resolve(&geo).unwrap();

    let mut tl = Timeline::builder();
    tl.push(
        Step::move_to(Anchor::Home(Side::Sender), 0.0, Easing::Linear)
            .color(Color32::RED)
            .scale(1.0)
            .opacity(1.0)
            .label("ICMP"),
    );
    let mut tl = tl.build();
    tl.play();

    let fired = tl.tick(0.0, 1.0, &geo, &mut scene);
    assert!(fired.is_empty());
    assert!(close(scene.token.pos, home));
    assert_eq!(scene.token.color, Color32::RED);
    assert_eq!(scene.token.opacity, 1.0);
    assert_eq!(scene.token.label, "ICMP");
    // Nothing left to run, so the zero-length tick already completed it.
    assert_eq!(tl.state(), RunState::Completed);
}

#[test]
fn test_joined_steps_share_a_group() {
    let geo = stage();
    let mut scene = Scene::new();
    let tint = Color32::from_rgba_unmultiplied(255, 255, 255, 38);
    let key = RowKey::new(Side::Sender, 7);

    let mut tl = Timeline::builder();
    // Short highlight joined to a longer move, like one traversal beat.
    tl.push(Step::tint(Side::Sender, 7, tint, 0.25));
    tl.join(Step::move_to(Anchor::Layer(Side::Sender, 7), 1.0, Easing::Linear).narrate("a", "k"));
    let mut tl = tl.build();
    tl.play();

    let fired = tl.tick(0.25, 1.0, &geo, &mut scene);
    // Both started together: narration fired, tint already complete.
    assert_eq!(fired.len(), 1);
    assert_eq!(scene.highlight(key), Some(tint));
    assert_eq!(tl.state(), RunState::Running);

    // The group only ends when the longest member does.
    tl.tick(0.75, 1.0, &geo, &mut scene);
    assert_eq!(tl.state(), RunState::Completed);
}

#[test]
fn test_narrations_fire_in_script_order() {
    let geo = stage();
    let mut scene = Scene::new();
    let mut tl = two_move_timeline();
    tl.play();

    // One oversized tick runs everything; order must survive.
    let fired = tl.tick(60.0, 1.0, &geo, &mut scene);
    let keys: Vec<&str> = fired.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, vec!["s1", "s2", "done"]);
    assert_eq!(tl.state(), RunState::Completed);
}

#[test]
fn test_terminal_narration_fires_once() {
    let geo = stage();
    let mut scene = Scene::new();
    let mut tl = two_move_timeline();
    tl.play();
    let fired = tl.tick(10.0, 1.0, &geo, &mut scene);
    assert_eq!(fired.last().map(|n| n.key.as_str()), Some("done"));
    // Further ticks stay silent.
    assert!(tl.tick(10.0, 1.0, &geo, &mut scene).is_empty());
    assert!(tl.tick(0.25, 1.0, &geo, &mut scene).is_empty());
}

#[test]
fn test_pause_freezes_and_resume_continues() {
    let geo = stage();
    let mut baseline_scene = Scene::new();
    let mut baseline = two_move_timeline();
    baseline.play();
    let mut baseline_fired = Vec::new();
    for _ in 0..8 {
        baseline_fired.extend(baseline.tick(0.25, 1.0, &geo, &mut baseline_scene));
    }
    assert_eq!(baseline.state(), RunState::Completed);

    let mut scene = Scene::new();
    let mut tl = two_move_timeline();
    tl.play();
    let mut fired = Vec::new();
    for _ in 0..3 {
        fired.extend(tl.tick(0.25, 1.0, &geo, &mut scene));
    }

    tl.pause();
    assert_eq!(tl.state(), RunState::Paused);
    let frozen = scene.token.clone();
    for _ in 0..5 {
        assert!(tl.tick(0.25, 1.0, &geo, &mut scene).is_empty());
    }
    assert_eq!(scene.token, frozen);

    // Pausing a paused timeline and resuming a running one are no-ops.
    tl.pause();
    tl.resume();
    assert_eq!(tl.state(), RunState::Running);
    tl.resume();
    assert_eq!(tl.state(), RunState::Running);

    for _ in 0..5 {
        fired.extend(tl.tick(0.25, 1.0, &geo, &mut scene));
    }
    assert_eq!(tl.state(), RunState::Completed);
    assert_eq!(fired, baseline_fired);
    assert_eq!(scene.token, baseline_scene.token);
}

#[test]
fn test_speed_is_sampled_when_a_step_starts() {
    let geo = stage();

    // Baseline at 1x: s2 starts on tick 3, completion lands on tick 7.
    let mut scene = Scene::new();
    let mut tl = two_move_timeline();
    tl.play();
    let mut s2_tick = None;
    let mut done_tick = None;
    for i in 0..12 {
        for n in tl.tick(0.25, 1.0, &geo, &mut scene) {
            if n.key == "s2" {
                s2_tick = Some(i);
            }
            if n.key == "done" {
                done_tick = Some(i);
            }
        }
    }
    assert_eq!(s2_tick, Some(3));
    assert_eq!(done_tick, Some(7));

    // Same run, but the multiplier jumps to 4x while the first step is in
    // flight. The first step keeps its sampled rate; only the second step
    // picks up the new one.
    let mut scene = Scene::new();
    let mut tl = two_move_timeline();
    tl.play();
    let mut s2_tick = None;
    let mut done_tick = None;
    for i in 0..12 {
        let speed = if i < 2 { 1.0 } else { 4.0 };
        for n in tl.tick(0.25, speed, &geo, &mut scene) {
            if n.key == "s2" {
                s2_tick = Some(i);
            }
            if n.key == "done" {
                done_tick = Some(i);
            }
        }
    }
    assert_eq!(s2_tick, Some(3), "in-flight step must keep its rate");
    assert_eq!(done_tick, Some(4), "next step must adopt the new rate");
}

#[test]
fn test_cancel_rewinds_and_clears_the_scene() {
    let geo = stage();
    let mut scene = Scene::new();
    let mut tl = two_move_timeline();
    tl.play();
    tl.tick(1.5, 1.0, &geo, &mut scene);
    assert!(scene.token.opacity == 0.0 || scene.token.pos != Pos2::ZERO);

    tl.cancel(&mut scene);
    assert_eq!(tl.state(), RunState::Idle);
    assert_eq!(scene.token.opacity, 0.0);
    assert_eq!(scene.token.pos, Pos2::ZERO);
    assert!(!scene.has_highlights());
    assert!(tl.tick(1.0, 1.0, &geo, &mut scene).is_empty());

    // Cancel also works from Paused and from Completed.
    tl.play();
    tl.tick(0.25, 1.0, &geo, &mut scene);
    tl.pause();
    tl.cancel(&mut scene);
    assert_eq!(tl.state(), RunState::Idle);

    tl.play();
    tl.tick(60.0, 1.0, &geo, &mut scene);
    assert_eq!(tl.state(), RunState::Completed);
    tl.cancel(&mut scene);
    assert_eq!(tl.state(), RunState::Idle);
}

#[test]
fn test_play_after_completion_is_a_noop_until_cancelled() {
    let geo = stage();
    let mut scene = Scene::new();
    let mut tl = two_move_timeline();
    tl.play();
    tl.tick(60.0, 1.0, &geo, &mut scene);
    assert_eq!(tl.state(), RunState::Completed);

    tl.play();
    assert_eq!(tl.state(), RunState::Completed);
    assert!(tl.tick(1.0, 1.0, &geo, &mut scene).is_empty());

    // After a cancel the same script can run again from the top.
    tl.cancel(&mut scene);
    tl.play();
    let fired = tl.tick(60.0, 1.0, &geo, &mut scene);
    let keys: Vec<&str> = fired.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, vec!["s1", "s2", "done"]);
}

#[test]
fn test_missing_row_skips_the_transit_not_the_story() {
    // A registry with no rows at all: every layer anchor is unresolvable.
    let geo = StageGeometry::compute(vec2(1000.0, 700.0), &[]);
    let mut scene = Scene::new();
    let home = Anchor::Home(Side::Sender).resolve(&geo).unwrap();

    let mut tl = Timeline::builder();
    tl.push(Step::move_to(Anchor::Home(Side::Sender), 0.0, Easing::Linear).opacity(1.0));
    tl.push(
        Step::move_to(Anchor::Layer(Side::Sender, 7), 1.0, Easing::QuadInOut)
            .color(Color32::RED)
            .narrate("a", "s1"),
    );
    tl.push(Step::move_to(Anchor::Wire(Side::Sender), 1.0, Easing::Linear).narrate("a", "s2"));
    let mut tl = tl.build();
    tl.play();

    let fired = tl.tick(0.25, 1.0, &geo, &mut scene);
    // The doomed step fired its narration, snapped its other properties, and
    // handed straight over to the wire move.
    assert_eq!(fired.iter().map(|n| n.key.as_str()).collect::<Vec<_>>(), vec!["s1", "s2"]);
    assert_eq!(scene.token.color, Color32::RED);
    assert!(scene.token.pos.x == home.x, "skip must not move the token sideways");

    tl.tick(1.0, 1.0, &geo, &mut scene);
    assert!(close(scene.token.pos, Anchor::Wire(Side::Sender).resolve(&geo).unwrap()));
    assert_eq!(tl.state(), RunState::Completed);
}

#[test]
fn test_empty_timeline_completes_immediately() {
    let geo = stage();
    let mut scene = Scene::new();
    let mut tl = Timeline::builder();
    tl.on_complete("✅", "done");
    let mut tl = tl.build();
    tl.play();
    let fired = tl.tick(0.0, 1.0, &geo, &mut scene);
    assert_eq!(fired.iter().map(|n| n.key.as_str()).collect::<Vec<_>>(), vec!["done"]);
    assert_eq!(tl.state(), RunState::Completed);
}

#[test]
fn test_speed_floor_prevents_runaway_durations() {
    let geo = stage();
    let mut scene = Scene::new();
    let mut tl = Timeline::builder();
    tl.push(Step::move_to(Anchor::Layer(Side::Sender, 7), 0.5, Easing::Linear));
    let mut tl = tl.build();
    tl.play();
    // Zero or negative multipliers clamp to the floor instead of dividing
    // by zero; 0.5s / 0.05 = 10s worst case.
    tl.tick(10.0, 0.0, &geo, &mut scene);
    assert_eq!(tl.state(), RunState::Completed);
}
