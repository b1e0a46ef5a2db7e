//! Animation Timeline Engine
//! Sequential groups of concurrently-running tween steps, advanced by an
//! explicit tick so the whole engine works without a display

use std::collections::HashMap;

use eframe::egui::{lerp, pos2, Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::geometry::{Anchor, RowKey, Side, StageGeometry};

#[cfg(test)]
mod tests;

/// Lifecycle of one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Tween easing curves. `Quad*` are the quadratic power curves, the only
/// family the traversal scripts use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A narration reference fired when its step starts. The key is resolved
/// against the string tables at display time, so a language switch mid-run
/// affects every line that has not fired yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    pub tag: String,
    pub key: String,
}

/// Side effects attached to a step, applied once when the step starts.
#[derive(Debug, Clone, Default)]
pub struct StepEffect {
    pub narration: Option<Narration>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StepTarget {
    Token,
    Row(RowKey),
}

/// One tween: a target, the properties to reach, a nominal duration, and an
/// easing curve. Anchors stay symbolic until the step actually starts.
#[derive(Debug, Clone)]
pub struct Step {
    target: StepTarget,
    anchor: Option<Anchor>,
    to_color: Option<Color32>,
    to_scale: Option<f32>,
    to_opacity: Option<f32>,
    to_tint: Option<Color32>,
    duration: f32,
    easing: Easing,
    effect: StepEffect,
}

impl Step {
    fn blank(target: StepTarget, duration: f32, easing: Easing) -> Step {
        Step {
            target,
            anchor: None,
            to_color: None,
            to_scale: None,
            to_opacity: None,
            to_tint: None,
            duration,
            easing,
            effect: StepEffect::default(),
        }
    }

    /// Move the token to a symbolic anchor.
    pub fn move_to(anchor: Anchor, duration: f32, easing: Easing) -> Step {
        let mut step = Step::blank(StepTarget::Token, duration, easing);
        step.anchor = Some(anchor);
        step
    }

    /// Fade a layer row's highlight tint toward `color`.
    pub fn tint(side: Side, layer: u8, color: Color32, duration: f32) -> Step {
        let mut step = Step::blank(
            StepTarget::Row(RowKey::new(side, layer)),
            duration,
            Easing::Linear,
        );
        step.to_tint = Some(color);
        step
    }

    /// A pure delay; the token holds its pose for `duration`.
    pub fn wait(duration: f32) -> Step {
        Step::blank(StepTarget::Token, duration, Easing::Linear)
    }

    /// An instant step that only narrates, like a timeline callback.
    pub fn note(tag: impl Into<String>, key: impl Into<String>) -> Step {
        Step::wait(0.0).narrate(tag, key)
    }

    pub fn color(mut self, color: Color32) -> Step {
        self.to_color = Some(color);
        self
    }

    pub fn scale(mut self, scale: f32) -> Step {
        self.to_scale = Some(scale);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Step {
        self.to_opacity = Some(opacity);
        self
    }

    pub fn narrate(mut self, tag: impl Into<String>, key: impl Into<String>) -> Step {
        self.effect.narration = Some(Narration { tag: tag.into(), key: key.into() });
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Step {
        self.effect.label = Some(label.into());
        self
    }
}

/// The token being animated across the stage.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenVisual {
    pub pos: Pos2,
    pub color: Color32,
    pub scale: f32,
    pub opacity: f32,
    pub label: String,
}

impl Default for TokenVisual {
    fn default() -> Self {
        TokenVisual {
            pos: Pos2::ZERO,
            color: Color32::WHITE,
            scale: 1.0,
            opacity: 0.0,
            label: String::new(),
        }
    }
}

/// Everything the stage painter needs: the token pose plus per-row highlight
/// tints. Owned by the controller, mutated only through ticks and resets.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub token: TokenVisual,
    highlights: HashMap<RowKey, Color32>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene::default()
    }

    /// Hidden token, no highlights.
    pub fn reset(&mut self) {
        *self = Scene::new();
    }

    pub fn highlight(&self, key: RowKey) -> Option<Color32> {
        self.highlights.get(&key).copied()
    }

    pub fn has_highlights(&self) -> bool {
        !self.highlights.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
enum ActiveFrom {
    Token { pos: Pos2, color: Color32, scale: f32, opacity: f32 },
    Row { tint: Color32 },
}

#[derive(Debug, Clone, Copy)]
struct ActiveStep {
    index: usize,
    duration: f32,
    elapsed: f32,
    from: ActiveFrom,
    to_pos: Option<Pos2>,
}

/// Assembles groups for a [`Timeline`]. `push` opens a new group; `join`
/// adds to the last one so its steps start together.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    groups: Vec<Vec<Step>>,
    on_complete: Option<Narration>,
}

impl TimelineBuilder {
    pub fn new() -> TimelineBuilder {
        TimelineBuilder::default()
    }

    pub fn push(&mut self, step: Step) -> &mut Self {
        self.groups.push(vec![step]);
        self
    }

    pub fn join(&mut self, step: Step) -> &mut Self {
        match self.groups.last_mut() {
            Some(group) => group.push(step),
            None => self.groups.push(vec![step]),
        }
        self
    }

    /// Narration fired once, when the final group finishes.
    pub fn on_complete(&mut self, tag: impl Into<String>, key: impl Into<String>) -> &mut Self {
        self.on_complete = Some(Narration { tag: tag.into(), key: key.into() });
        self
    }

    pub fn build(self) -> Timeline {
        Timeline {
            groups: self.groups,
            on_complete: self.on_complete,
            state: RunState::Idle,
            current: 0,
            active: Vec::new(),
            complete_fired: false,
        }
    }
}

// Floor for the per-step rate divisor, so a degenerate multiplier cannot
// produce infinite durations.
const MIN_SPEED: f32 = 0.05;

/// A deterministic animation timeline.
///
/// Groups run strictly in order; steps inside a group start together and the
/// group ends when its longest step does. Each step samples the speed
/// multiplier and resolves its anchors once, at start, so in-flight steps are
/// immune to both speed changes and stage resizes.
#[derive(Debug)]
pub struct Timeline {
    groups: Vec<Vec<Step>>,
    on_complete: Option<Narration>,
    state: RunState,
    current: usize,
    active: Vec<ActiveStep>,
    complete_fired: bool,
}

impl Timeline {
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::new()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Begin playback. Only valid from `Idle`; anything else is a no-op.
    pub fn play(&mut self) {
        if self.state == RunState::Idle {
            self.state = RunState::Running;
        }
    }

    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            self.state = RunState::Running;
        }
    }

    /// Abort the run from any state: drop pending steps, rewind, and clear
    /// the scene so no stale token or tint survives.
    pub fn cancel(&mut self, scene: &mut Scene) {
        self.state = RunState::Idle;
        self.current = 0;
        self.active.clear();
        self.complete_fired = false;
        scene.reset();
    }

    /// Advance by `dt` seconds of wall time, mutating `scene` and returning
    /// the narrations whose steps started (or completed, for the terminal
    /// one) during this tick, in firing order.
    ///
    /// Outside `Running` this does nothing, which is what makes pause a
    /// freeze rather than a skip.
    pub fn tick(
        &mut self,
        dt: f32,
        speed: f32,
        geo: &StageGeometry,
        scene: &mut Scene,
    ) -> Vec<Narration> {
        let mut fired = Vec::new();
        if self.state != RunState::Running {
            return fired;
        }
        let mut remaining = dt.max(0.0);
        loop {
            if self.current >= self.groups.len() {
                self.state = RunState::Completed;
                if !self.complete_fired {
                    self.complete_fired = true;
                    if let Some(n) = &self.on_complete {
                        fired.push(n.clone());
                    }
                }
                break;
            }
            if self.active.is_empty() {
                self.start_group(speed, geo, scene, &mut fired);
            }
            let group_left = self
                .active
                .iter()
                .map(|a| (a.duration - a.elapsed).max(0.0))
                .fold(0.0_f32, f32::max);
            if group_left <= 0.0 {
                // Instant group (sets, notes): done the moment it started.
                self.active.clear();
                self.current += 1;
                continue;
            }
            if remaining <= 0.0 {
                break;
            }
            let advance = remaining.min(group_left);
            let group = &self.groups[self.current];
            for a in &mut self.active {
                if a.elapsed >= a.duration {
                    continue;
                }
                a.elapsed = (a.elapsed + advance).min(a.duration);
                let step = &group[a.index];
                let t = if a.duration > 0.0 { a.elapsed / a.duration } else { 1.0 };
                Self::apply_step(step, a, step.easing.apply(t), scene);
            }
            remaining -= advance;
            if advance >= group_left {
                self.active.clear();
                self.current += 1;
            }
        }
        fired
    }

    fn start_group(
        &mut self,
        speed: f32,
        geo: &StageGeometry,
        scene: &mut Scene,
        fired: &mut Vec<Narration>,
    ) {
        let rate = speed.max(MIN_SPEED);
        let group = &self.groups[self.current];
        let mut active = Vec::with_capacity(group.len());
        for (index, step) in group.iter().enumerate() {
            if let Some(n) = &step.effect.narration {
                fired.push(n.clone());
            }
            if let Some(label) = &step.effect.label {
                scene.token.label = label.clone();
            }
            let mut duration = (step.duration / rate).max(0.0);
            let (from, to_pos) = match step.target {
                StepTarget::Token => {
                    let to_pos = match step.anchor {
                        Some(anchor) => {
                            let resolved = anchor.resolve(geo);
                            if resolved.is_none() {
                                // Target row is gone; skip the transit but
                                // keep the rest of the step's outcome.
                                duration = 0.0;
                            }
                            resolved
                        }
                        None => None,
                    };
                    let token = &scene.token;
                    (
                        ActiveFrom::Token {
                            pos: token.pos,
                            color: token.color,
                            scale: token.scale,
                            opacity: token.opacity,
                        },
                        to_pos,
                    )
                }
                StepTarget::Row(key) => {
                    let tint = scene.highlight(key).unwrap_or(Color32::TRANSPARENT);
                    (ActiveFrom::Row { tint }, None)
                }
            };
            let mut entry = ActiveStep { index, duration, elapsed: 0.0, from, to_pos };
            if entry.duration <= 0.0 {
                Self::apply_step(step, &entry, 1.0, scene);
                entry.elapsed = entry.duration;
            }
            active.push(entry);
        }
        self.active = active;
    }

    fn apply_step(step: &Step, active: &ActiveStep, eased: f32, scene: &mut Scene) {
        match (step.target, active.from) {
            (StepTarget::Token, ActiveFrom::Token { pos, color, scale, opacity }) => {
                if let Some(to) = active.to_pos {
                    scene.token.pos =
                        pos2(lerp(pos.x..=to.x, eased), lerp(pos.y..=to.y, eased));
                }
                if let Some(to) = step.to_color {
                    scene.token.color = mix(color, to, eased);
                }
                if let Some(to) = step.to_scale {
                    scene.token.scale = lerp(scale..=to, eased);
                }
                if let Some(to) = step.to_opacity {
                    scene.token.opacity = lerp(opacity..=to, eased);
                }
            }
            (StepTarget::Row(key), ActiveFrom::Row { tint }) => {
                if let Some(to) = step.to_tint {
                    scene.highlights.insert(key, mix(tint, to, eased));
                }
            }
            _ => {}
        }
    }
}

/// Channel-wise blend between two colors. Both endpoints are premultiplied,
/// so the straight lerp stays premultiplied.
fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        ch(a.r(), b.r()),
        ch(a.g(), b.g()),
        ch(a.b(), b.b()),
        ch(a.a(), b.a()),
    )
}
