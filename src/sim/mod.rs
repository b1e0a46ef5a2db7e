//! Simulation Controller
//! Scenario scripts for the packet-traversal animation and the session state
//! machine the GUI and CLI drive

use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Anchor, Side, StageGeometry};
use crate::i18n::{tr, Lang};
use crate::model::sim_layer_color;
use crate::timeline::{Easing, RunState, Scene, Step, Timeline, TimelineBuilder};


/// The two guided walkthroughs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Ping,
    Http,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::Ping, Scenario::Http];

    pub fn key(self) -> &'static str {
        match self {
            Scenario::Ping => "ping",
            Scenario::Http => "http",
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            Scenario::Ping => "sim_title_ping",
            Scenario::Http => "sim_title_http",
        }
    }

    pub fn desc_key(self) -> &'static str {
        match self {
            Scenario::Ping => "sim_desc_ping",
            Scenario::Http => "sim_desc_http",
        }
    }

    /// Token label while the run is armed but not started.
    pub fn initial_label(self) -> &'static str {
        match self {
            Scenario::Ping => "ICMP",
            Scenario::Http => "HTTP",
        }
    }

    /// The machines get scenario-specific names: Sender/Receiver for ping,
    /// Client/Server for HTTP.
    pub fn side_label_key(self, side: Side) -> &'static str {
        match (self, side) {
            (Scenario::Ping, Side::Sender) => "sim_sender",
            (Scenario::Ping, Side::Receiver) => "sim_receiver",
            (Scenario::Http, Side::Sender) => "sim_client",
            (Scenario::Http, Side::Receiver) => "sim_server",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("unknown scenario {0:?} (expected \"ping\" or \"http\")")]
    Unknown(String),
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ping" => Ok(Scenario::Ping),
            "http" => Ok(Scenario::Http),
            _ => Err(ScenarioError::Unknown(s.to_owned())),
        }
    }
}

// Nominal step durations in seconds, before the speed multiplier divides
// them. The wire hop splits into down/across/up legs.
const STEP_SECS: f32 = 0.5;
const WIRE_SECS: f32 = 1.2;
const HIGHLIGHT_SECS: f32 = 0.15;
const PROCESS_SECS: f32 = 0.5;
const FADE_SECS: f32 = 0.5;

const WIRE_PING_TX: Color32 = Color32::WHITE;
const WIRE_PING_RX: Color32 = Color32::from_rgb(0x90, 0xEE, 0x90);
const WIRE_HTTP_TX: Color32 = Color32::from_rgb(0x38, 0xBD, 0xF8);
const HTTP_OK_GREEN: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);

const TINT_NEUTRAL: Color32 = Color32::from_rgba_premultiplied(38, 38, 38, 38);
const TINT_REPLY: Color32 = Color32::from_rgba_premultiplied(15, 38, 15, 38);
const TINT_HTTP_REQ: Color32 = Color32::from_rgba_premultiplied(11, 38, 50, 51);
const TINT_HTTP_RESP: Color32 = Color32::from_rgba_premultiplied(7, 39, 19, 51);

/// Build the full traversal script for a scenario. The timeline comes back
/// idle; callers decide when to play it.
pub fn build_script(scenario: Scenario) -> Timeline {
    match scenario {
        Scenario::Ping => ping_script(),
        Scenario::Http => http_script(),
    }
}

/// One stack pass: seven beats, each a row highlight joined with the token
/// move onto that row. `down` walks L7->L1 (encapsulating, token grows),
/// otherwise L1->L7 (decapsulating, token shrinks back).
fn traversal(
    tl: &mut TimelineBuilder,
    side: Side,
    down: bool,
    tint: Color32,
    key_prefix: &str,
    tag: impl Fn(u8) -> String,
    label: impl Fn(u8) -> Option<&'static str>,
    color: impl Fn(u8) -> Color32,
) {
    let ids: Vec<u8> = if down { (1..=7).rev().collect() } else { (1..=7).collect() };
    for (index, id) in ids.into_iter().enumerate() {
        let scale = if down {
            1.0 + index as f32 * 0.04
        } else {
            1.3 - index as f32 * 0.04
        };
        let mut step = Step::move_to(Anchor::Layer(side, id), STEP_SECS, Easing::QuadInOut)
            .color(color(id))
            .scale(scale)
            .narrate(tag(id), format!("{key_prefix}{id}"));
        if let Some(text) = label(id) {
            step = step.label(text);
        }
        tl.push(Step::tint(side, id, tint, HIGHLIGHT_SECS));
        tl.join(step);
    }
}

/// The U-shaped cable hop: down to the wire, across, up into the far L1.
fn wire_hop(tl: &mut TimelineBuilder, from: Side, color: Color32, label: Option<&'static str>) {
    let to = from.opposite();
    let mut down = Step::move_to(Anchor::Wire(from), WIRE_SECS * 0.3, Easing::QuadIn)
        .color(color)
        .narrate("📡", "sim_wire_tx");
    if let Some(text) = label {
        down = down.label(text);
    }
    tl.push(down);
    tl.push(Step::move_to(Anchor::Wire(to), WIRE_SECS * 0.4, Easing::Linear));
    tl.push(Step::move_to(Anchor::Layer(to, 1), WIRE_SECS * 0.3, Easing::QuadOut));
}

fn ping_script() -> Timeline {
    let mut tl = Timeline::builder();

    tl.push(
        Step::move_to(Anchor::Home(Side::Sender), 0.0, Easing::Linear)
            .color(sim_layer_color(7))
            .scale(1.0)
            .opacity(1.0)
            .label("ICMP"),
    );

    // Echo request: down the sender, across, up the receiver.
    tl.push(Step::note("📤", "sim_ping_request"));
    traversal(
        &mut tl,
        Side::Sender,
        true,
        TINT_NEUTRAL,
        "sim_ping_l",
        |id| format!("📤 L{id}:"),
        |id| match id {
            3 => Some("PKT"),
            2 => Some("FRM"),
            1 => Some("BIT"),
            _ => None,
        },
        sim_layer_color,
    );
    wire_hop(&mut tl, Side::Sender, WIRE_PING_TX, None);
    traversal(
        &mut tl,
        Side::Receiver,
        false,
        TINT_NEUTRAL,
        "sim_ping_l",
        |id| format!("📥 L{id} [Receiver]:"),
        |id| match id {
            2 => Some("FRM"),
            3 => Some("PKT"),
            _ if id >= 4 => Some("ICMP"),
            _ => None,
        },
        sim_layer_color,
    );

    // Echo reply retraces the path in green.
    tl.push(Step::note("📤", "sim_ping_reply").label("REPLY"));
    traversal(
        &mut tl,
        Side::Receiver,
        true,
        TINT_REPLY,
        "sim_ping_l",
        |id| format!("📤 L{id} [Reply]:"),
        |id| match id {
            3 => Some("PKT"),
            2 => Some("FRM"),
            1 => Some("BIT"),
            _ => None,
        },
        sim_layer_color,
    );
    wire_hop(&mut tl, Side::Receiver, WIRE_PING_RX, None);
    traversal(
        &mut tl,
        Side::Sender,
        false,
        TINT_REPLY,
        "sim_ping_l",
        |id| format!("📥 L{id} [Reply Received]:"),
        |id| match id {
            2 => Some("FRM"),
            3 => Some("PKT"),
            _ if id >= 4 => Some("REPLY"),
            _ => None,
        },
        sim_layer_color,
    );

    tl.push(Step::wait(FADE_SECS).scale(1.5).opacity(0.0));
    tl.on_complete("✅", "sim_ping_complete");
    tl.build()
}

fn http_label(id: u8) -> Option<&'static str> {
    match id {
        7 => Some("GET /"),
        6 => Some("DATA"),
        5 => Some("SESS"),
        4 => Some("TCP"),
        3 => Some("IP"),
        2 => Some("FRM"),
        1 => Some("BIT"),
        _ => None,
    }
}

/// Response passes swap L7's palette color for the success green.
fn http_response_color(id: u8) -> Color32 {
    if id == 7 {
        HTTP_OK_GREEN
    } else {
        sim_layer_color(id)
    }
}

fn http_response_label(id: u8) -> Option<&'static str> {
    if id == 7 {
        Some("HTML")
    } else {
        http_label(id)
    }
}

fn http_script() -> Timeline {
    let mut tl = Timeline::builder();

    tl.push(
        Step::move_to(Anchor::Home(Side::Sender), 0.0, Easing::Linear)
            .color(sim_layer_color(7))
            .scale(1.0)
            .opacity(1.0)
            .label("HTTP"),
    );

    // GET request: client stack down, wire, server stack up.
    tl.push(Step::note("🌐", "sim_http_request"));
    traversal(
        &mut tl,
        Side::Sender,
        true,
        TINT_HTTP_REQ,
        "sim_http_l",
        |id| format!("🌐 L{id}:"),
        http_label,
        sim_layer_color,
    );
    wire_hop(&mut tl, Side::Sender, WIRE_HTTP_TX, Some("📶"));
    traversal(
        &mut tl,
        Side::Receiver,
        false,
        TINT_HTTP_REQ,
        "sim_http_l",
        |id| format!("📥 Server L{id}:"),
        http_label,
        sim_layer_color,
    );

    // The server thinks for a beat before answering.
    tl.push(Step::note("⚙️", "sim_http_processing").label("⚙️"));
    tl.push(Step::wait(PROCESS_SECS));
    tl.push(
        Step::wait(0.0)
            .narrate("📤", "sim_http_response")
            .label("200")
            .color(HTTP_OK_GREEN),
    );

    // 200 OK: server stack down, wire, client stack up.
    traversal(
        &mut tl,
        Side::Receiver,
        true,
        TINT_HTTP_RESP,
        "sim_http_l",
        |id| format!("📤 Response L{id}:"),
        http_response_label,
        http_response_color,
    );
    wire_hop(&mut tl, Side::Receiver, HTTP_OK_GREEN, Some("📶"));
    traversal(
        &mut tl,
        Side::Sender,
        false,
        TINT_HTTP_RESP,
        "sim_http_l",
        |id| format!("📥 Client L{id}:"),
        http_response_label,
        http_response_color,
    );

    tl.push(Step::wait(FADE_SECS).scale(1.5).opacity(0.0));
    tl.on_complete("✅", "sim_http_complete");
    tl.build()
}

/// A narration line that already fired, with its text resolved in whatever
/// language was active at firing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationEvent {
    pub key: String,
    pub tag: String,
    pub text: String,
}

impl NarrationEvent {
    pub fn line(&self) -> String {
        if self.tag.is_empty() {
            self.text.clone()
        } else {
            format!("{} {}", self.tag, self.text)
        }
    }
}

pub const SPEED_MIN: f32 = 0.25;
pub const SPEED_MAX: f32 = 3.0;

/// One simulation session: the active scenario, its timeline (if armed), the
/// scene being painted, and the narration record.
///
/// The session never touches a display; the GUI feeds it frame deltas and the
/// CLI feeds it synthetic ones.
pub struct SimSession {
    lang: Lang,
    scenario: Scenario,
    speed: f32,
    timeline: Option<Timeline>,
    scene: Scene,
    narration: String,
    events: Vec<NarrationEvent>,
}

impl SimSession {
    pub fn new(lang: Lang) -> SimSession {
        let mut session = SimSession {
            lang,
            scenario: Scenario::Ping,
            speed: 1.0,
            timeline: None,
            scene: Scene::new(),
            narration: String::new(),
            events: Vec::new(),
        };
        session.reset();
        session
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The line currently shown under the stage.
    pub fn narration(&self) -> &str {
        &self.narration
    }

    /// Every line fired so far this run, oldest first.
    pub fn events(&self) -> &[NarrationEvent] {
        &self.events
    }

    pub fn state(&self) -> RunState {
        self.timeline
            .as_ref()
            .map(|tl| tl.state())
            .unwrap_or(RunState::Idle)
    }

    pub fn is_animating(&self) -> bool {
        self.state() == RunState::Running
    }

    /// Arm and play the active scenario from a clean slate.
    pub fn start(&mut self) {
        self.reset();
        let mut timeline = build_script(self.scenario);
        timeline.play();
        self.timeline = Some(timeline);
        log::info!("simulation started: {} at {:.2}x", self.scenario, self.speed);
    }

    /// Running -> Paused -> Running; anything else ignores the press.
    pub fn toggle_pause(&mut self) {
        if let Some(timeline) = &mut self.timeline {
            match timeline.state() {
                RunState::Running => {
                    timeline.pause();
                    log::debug!("simulation paused");
                }
                RunState::Paused => {
                    timeline.resume();
                    log::debug!("simulation resumed");
                }
                _ => {}
            }
        }
    }

    /// Cancel any in-flight run and restore the armed pose: hidden token
    /// wearing the scenario label, description line, empty record.
    pub fn reset(&mut self) {
        if let Some(mut timeline) = self.timeline.take() {
            timeline.cancel(&mut self.scene);
        }
        self.scene.reset();
        self.scene.token.label = self.scenario.initial_label().to_owned();
        self.scene.token.color = sim_layer_color(7);
        self.narration = tr(self.scenario.desc_key(), self.lang).to_owned();
        self.events.clear();
    }

    /// Switching always resets, even to the same scenario; the buttons double
    /// as "start over".
    pub fn set_scenario(&mut self, scenario: Scenario) {
        self.scenario = scenario;
        self.reset();
    }

    /// Clamps to the dial range. Non-finite input is ignored, since `clamp`
    /// would pass a NaN straight through.
    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
        }
    }

    /// Already-fired narration keeps its language; only the idle description
    /// line is re-resolved immediately.
    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
        if self.state() == RunState::Idle {
            self.narration = tr(self.scenario.desc_key(), lang).to_owned();
        }
    }

    /// Advance the run by `dt` seconds against the current stage geometry.
    pub fn tick(&mut self, dt: f32, geo: &StageGeometry) {
        let Some(timeline) = &mut self.timeline else {
            return;
        };
        let was_running = timeline.state() == RunState::Running;
        for narration in timeline.tick(dt, self.speed, geo, &mut self.scene) {
            let text = tr(&narration.key, self.lang).to_owned();
            let event = NarrationEvent { key: narration.key, tag: narration.tag, text };
            self.narration = event.line();
            self.events.push(event);
        }
        if was_running && timeline.state() == RunState::Completed {
            log::info!(
                "simulation completed: {} ({} narration lines)",
                self.scenario,
                self.events.len()
            );
        }
    }

    /// Drive a fresh run to completion with fixed synthetic ticks. Used by
    /// the CLI and tests; narration does not depend on the geometry passed.
    pub fn run_to_completion(&mut self, geo: &StageGeometry, step: f32) -> &[NarrationEvent] {
        self.start();
        let mut guard = 0;
        while self.state() == RunState::Running && guard < 100_000 {
            self.tick(step.max(0.001), geo);
            guard += 1;
        }
        &self.events
    }

    /// The narration record as numbered plain-text lines, for export.
    pub fn log_text(&self) -> String {
        self.events
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {}", i + 1, e.line()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
