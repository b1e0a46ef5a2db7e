//! OsiView GUI - OSI & TCP/IP Layer Model Explorer
//! Interactive comparison grid with per-layer details, protocol cards, and an
//! animated packet-traversal simulator

use eframe::egui;
use std::time::{Duration, Instant};

mod geometry;
mod i18n;
mod model;
mod protocol;
mod sim;
mod timeline;

use egui_extras::{Column, TableBuilder};

use geometry::{CardRect, GridGeometry, MappingLink, RowKey, Side, StageGeometry};
use i18n::{tr, Lang};
use model::{Layer, ModelKind};
use protocol::ProtocolInfo;
use sim::{Scenario, SimSession};
use timeline::RunState;

fn osiview_icon() -> egui::IconData {
    // Generated icon (64x64): the seven layer colors as stacked bars on a
    // dark backdrop. Avoids external assets and works cross-platform.
    let w: u32 = 64;
    let h: u32 = 64;
    let mut rgba = vec![0u8; (w * h * 4) as usize];
    let colors: Vec<egui::Color32> = model::osi_layers().iter().map(|l| l.color).collect();
    let margin: u32 = 6;
    let bar_h = (h - margin * 2) / 7;

    for y in 0..h {
        for x in 0..w {
            let mut r: u8 = 18;
            let mut g: u8 = 21;
            let mut b: u8 = 26;

            let in_bars = x >= margin && x < w - margin && y >= margin && y < margin + bar_h * 7;
            if in_bars && (y - margin) % bar_h != 0 {
                let c = colors[((y - margin) / bar_h) as usize];
                r = c.r();
                g = c.g();
                b = c.b();
            }

            let idx = ((y * w + x) * 4) as usize;
            rgba[idx] = r;
            rgba[idx + 1] = g;
            rgba[idx + 2] = b;
            rgba[idx + 3] = 255;
        }
    }

    egui::IconData { rgba, width: w, height: h }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    if let Err(errors) = model::validate() {
        for e in &errors {
            log::error!("layer data: {}", e);
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("OsiView - OSI & TCP/IP Explorer")
            .with_icon(osiview_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "OsiView",
        options,
        Box::new(|cc| Ok(Box::new(OsiViewApp::new(cc)))),
    )
}

struct OsiViewApp {
    /// Active display language
    lang: Lang,
    /// Selected card in the comparison grid
    selected: Option<(ModelKind, u8)>,
    /// Protocol card currently open in the modal
    modal_protocol: Option<&'static ProtocolInfo>,
    /// Whether the simulator view replaces the explorer
    sim_open: bool,
    /// Simulation session: scenario, timeline, narration record
    session: SimSession,
    /// Previous frame instant for animation deltas
    last_frame: Option<Instant>,
}

impl OsiViewApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let lang = Lang::default();
        Self {
            lang,
            selected: None,
            modal_protocol: None,
            sim_open: false,
            session: SimSession::new(lang),
            last_frame: None,
        }
    }

    fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
        self.session.set_lang(lang);
    }

    /// The simulator always opens and closes on a clean slate.
    fn open_sim(&mut self) {
        self.sim_open = true;
        self.session.reset();
        self.last_frame = None;
    }

    fn close_sim(&mut self) {
        self.sim_open = false;
        self.session.reset();
        self.last_frame = None;
    }

    fn card_interact(
        &mut self,
        ui: &mut egui::Ui,
        kind: ModelKind,
        card: &CardRect,
        origin: egui::Vec2,
        hovered: &mut Option<(ModelKind, u8)>,
    ) {
        let tag = match kind {
            ModelKind::Osi => "osi",
            ModelKind::TcpIp => "tcp",
        };
        let resp = ui
            .interact(
                card.rect.translate(origin),
                ui.id().with((tag, card.id)),
                egui::Sense::click(),
            )
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if resp.hovered() {
            *hovered = Some((kind, card.id));
        }
        if resp.clicked() {
            self.selected = if self.selected == Some((kind, card.id)) {
                None
            } else {
                Some((kind, card.id))
            };
        }

        // Ids repeat across the two models, so the tooltip lookup must be
        // scoped by kind.
        if let Some(layer) = model::layer(kind, card.id) {
            if let Some(meaning) = model::pdu_description(layer.pdu) {
                resp.on_hover_text(format!("{}: {}", layer.pdu, meaning.get(self.lang)));
            }
        }
    }

    fn explorer_view(&mut self, ui: &mut egui::Ui) {
        let lang = self.lang;

        ui.horizontal(|ui| {
            ui.heading(tr("subtitle", lang));
            ui.label(
                egui::RichText::new(tr("title_interactive", lang))
                    .color(egui::Color32::from_rgb(56, 189, 248))
                    .small(),
            );
        });
        ui.separator();

        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;
        let origin = rect.min.to_vec2();

        let osi = model::osi_layers();
        let tcp = model::tcpip_layers();
        let grid = GridGeometry::compute(rect.size(), osi, tcp);

        // Interactions first so hover state can drive the paint pass.
        let mut hovered: Option<(ModelKind, u8)> = None;
        for card in &grid.osi {
            self.card_interact(ui, ModelKind::Osi, card, origin, &mut hovered);
        }
        for card in &grid.tcp {
            self.card_interact(ui, ModelKind::TcpIp, card, origin, &mut hovered);
        }

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(18, 21, 27));
        draw_grid_headers(&painter, rect, &grid, lang);

        let focus = hovered.or(self.selected);
        for link in &grid.links {
            let emphasized = match focus {
                Some((ModelKind::Osi, id)) => link.osi_id == id,
                Some((ModelKind::TcpIp, id)) => link.tcp_id == id,
                None => false,
            };
            draw_mapping_link(&painter, link, origin, emphasized);
        }

        for card in &grid.osi {
            if let Some(layer) = model::osi_layer(card.id) {
                let key = (ModelKind::Osi, card.id);
                draw_layer_card(
                    &painter,
                    card.rect.translate(origin),
                    layer,
                    lang,
                    hovered == Some(key),
                    self.selected == Some(key),
                    focus.is_some_and(|f| !cards_related(f, key)),
                );
            }
        }
        for card in &grid.tcp {
            if let Some(layer) = model::tcpip_layer(card.id) {
                let key = (ModelKind::TcpIp, card.id);
                draw_layer_card(
                    &painter,
                    card.rect.translate(origin),
                    layer,
                    lang,
                    hovered == Some(key),
                    self.selected == Some(key),
                    focus.is_some_and(|f| !cards_related(f, key)),
                );
            }
        }
    }

    fn layer_detail(&mut self, ui: &mut egui::Ui, kind: ModelKind, id: u8) {
        let lang = self.lang;
        let layer = match model::layer(kind, id) {
            Some(layer) => layer,
            None => return,
        };

        ui.add_space(10.0);
        ui.heading(format!("{} {}", layer.icon, layer.name));
        ui.label(egui::RichText::new(layer.subtitle.get(lang)).color(layer.color));
        if let Some(meaning) = model::pdu_description(layer.pdu) {
            ui.label(
                egui::RichText::new(format!("PDU: {} ({})", layer.pdu, meaning.get(lang)))
                    .small()
                    .weak(),
            );
        }
        ui.separator();
        ui.label(layer.description.get(lang));
        ui.add_space(6.0);
        ui.label(egui::RichText::new(layer.details.get(lang)).weak());

        if kind == ModelKind::Osi {
            if let Some(peer) = model::tcpip_layer_for_osi(layer.id) {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!("≈ TCP/IP: {} {}", peer.icon, peer.name)).small(),
                );
            }
        }

        ui.add_space(10.0);
        ui.strong(tr("protocols_title", lang));
        ui.horizontal_wrapped(|ui| {
            for tag in layer.protocols {
                match protocol::lookup(tag) {
                    Some(info) => {
                        if ui.small_button(*tag).clicked() {
                            self.modal_protocol = Some(info);
                        }
                    }
                    None => {
                        ui.label(egui::RichText::new(*tag).weak());
                    }
                }
            }
        });

        ui.add_space(10.0);
        ui.strong(tr("common_ports", lang));
        if layer.has_ports() {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto())
                .column(Column::auto())
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong(tr("port_col_port", lang));
                    });
                    header.col(|ui| {
                        ui.strong(tr("port_col_service", lang));
                    });
                    header.col(|ui| {
                        ui.strong(tr("port_col_desc", lang));
                    });
                })
                .body(|mut body| {
                    for port in layer.ports {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.monospace(port.number);
                            });
                            row.col(|ui| {
                                ui.label(port.service);
                            });
                            row.col(|ui| {
                                ui.label(port.desc);
                            });
                        });
                    }
                });
        } else {
            ui.label(egui::RichText::new(tr("layer_focus_msg", lang)).weak());
        }

        if !layer.references.is_empty() {
            ui.add_space(10.0);
            egui::CollapsingHeader::new(tr("references", lang))
                .default_open(false)
                .show(ui, |ui| {
                    for link in layer.references {
                        ui.hyperlink_to(link.title, link.url);
                    }
                });
        }
        ui.add_space(12.0);
    }

    fn sim_view(&mut self, ui: &mut egui::Ui) {
        let lang = self.lang;
        let scenario = self.session.scenario();

        let mut close = false;
        ui.horizontal(|ui| {
            ui.heading(tr(scenario.title_key(), lang));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(format!("✕ {}", tr("sim_close", lang))).clicked() {
                    close = true;
                }
            });
        });
        if close {
            self.close_sim();
            return;
        }

        ui.horizontal_wrapped(|ui| {
            for sc in Scenario::ALL {
                let icon = match sc {
                    Scenario::Ping => "🔁",
                    Scenario::Http => "🌐",
                };
                let label = format!("{} {}", icon, tr(sc.title_key(), lang));
                if ui.selectable_label(scenario == sc, label).clicked() && scenario != sc {
                    self.session.set_scenario(sc);
                }
            }
            ui.separator();

            let mut speed = self.session.speed();
            if ui
                .add(
                    egui::Slider::new(&mut speed, sim::SPEED_MIN..=sim::SPEED_MAX)
                        .step_by(0.25)
                        .suffix("x")
                        .text(tr("sim_speed", lang)),
                )
                .changed()
            {
                self.session.set_speed(speed);
            }
            ui.separator();

            match self.session.state() {
                RunState::Idle | RunState::Completed => {
                    if ui.button(format!("▶ {}", tr("sim_start", lang))).clicked() {
                        self.session.start();
                        self.last_frame = None;
                    }
                }
                RunState::Running => {
                    if ui.button(format!("⏸ {}", tr("sim_pause", lang))).clicked() {
                        self.session.toggle_pause();
                    }
                }
                RunState::Paused => {
                    if ui.button(format!("▶ {}", tr("sim_resume", lang))).clicked() {
                        self.session.toggle_pause();
                        // Frames stop while paused, so the stored instant can
                        // be arbitrarily stale by the time Resume is clicked.
                        self.last_frame = None;
                    }
                }
            }
            if self.session.state() != RunState::Idle
                && ui.button(format!("↻ {}", tr("sim_reset", lang))).clicked()
            {
                self.session.reset();
            }
        });
        ui.label(egui::RichText::new(tr(scenario.desc_key(), lang)).small().weak());
        ui.add_space(4.0);

        // Keep a band at the bottom for the narration line and the log.
        let log_h = 150.0;
        let stage_size = egui::vec2(
            ui.available_width(),
            (ui.available_height() - log_h).max(220.0),
        );
        let (response, painter) = ui.allocate_painter(stage_size, egui::Sense::hover());
        let rect = response.rect;

        let geo = StageGeometry::compute(rect.size(), &[7, 6, 5, 4, 3, 2, 1]);

        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| (now - last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        // Cap stalls so a dragged or hidden window does not fast-forward the run.
        self.session.tick(dt.min(0.25), &geo);

        draw_stage(&painter, rect, &geo, &self.session, lang);

        ui.add_space(4.0);
        ui.label(egui::RichText::new(self.session.narration()).strong());
        ui.add_space(2.0);
        egui::ScrollArea::vertical()
            .max_height(log_h - 50.0)
            .auto_shrink([false, true])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for (i, event) in self.session.events().iter().enumerate() {
                    ui.weak(format!("{}. {}", i + 1, event.line()));
                }
            });
    }
}

impl eframe::App for OsiViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let can_export = !self.session.events().is_empty();
                    if ui
                        .add_enabled(can_export, egui::Button::new("💾 Export Narration Log..."))
                        .clicked()
                    {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Text", &["txt"])
                            .save_file()
                        {
                            let _ = std::fs::write(&path, self.session.log_text());
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(format!("🌐 {}", self.lang.toggled().code()))
                        .clicked()
                    {
                        self.set_lang(self.lang.toggled());
                    }
                    ui.separator();
                    let sim_label = format!("🚀 {}", tr("sim_btn", self.lang));
                    if ui.selectable_label(self.sim_open, sim_label).clicked() {
                        if self.sim_open {
                            self.close_sim();
                        } else {
                            self.open_sim();
                        }
                    }
                });
            });
        });

        // Protocol detail modal
        if let Some(info) = self.modal_protocol {
            let mut open = true;
            let mut close_clicked = false;
            let response = egui::Window::new(format!("{} - {}", info.tag, info.full_name))
                .collapsible(false)
                .resizable(false)
                .default_width(440.0)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(info.description.get(self.lang));
                    if let Some(cases) = info.use_cases {
                        ui.add_space(6.0);
                        ui.strong(tr("use_cases", self.lang));
                        ui.label(cases.get(self.lang));
                    }
                    if !info.risks.is_empty() {
                        ui.add_space(6.0);
                        ui.strong(format!("⚠ {}", tr("security_risks", self.lang)));
                        for note in info.risks {
                            ui.label(format!("• {}: {}", note.title, note.desc.get(self.lang)));
                        }
                    }
                    if !info.mitigations.is_empty() {
                        ui.add_space(6.0);
                        ui.strong(format!("🛡 {}", tr("security_mitigation", self.lang)));
                        for note in info.mitigations {
                            ui.label(format!("• {}: {}", note.title, note.desc.get(self.lang)));
                        }
                    }
                    if !info.references.is_empty() {
                        ui.add_space(6.0);
                        ui.strong(tr("references", self.lang));
                        for link in info.references {
                            ui.hyperlink_to(link.title, link.url);
                        }
                    }
                    ui.separator();
                    if ui.button(tr("sim_close", self.lang)).clicked() {
                        close_clicked = true;
                    }
                });
            let clicked_outside = response
                .map(|r| r.response.clicked_elsewhere())
                .unwrap_or(false);
            if !open || close_clicked || clicked_outside {
                self.modal_protocol = None;
            }
        }

        // Right panel: layer details (explorer only)
        if !self.sim_open {
            egui::SidePanel::right("detail_panel")
                .default_width(360.0)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| match self.selected {
                        Some((kind, id)) => self.layer_detail(ui, kind, id),
                        None => {
                            ui.add_space(12.0);
                            ui.heading(tr("welcome_title", self.lang));
                            ui.add_space(4.0);
                            ui.label(tr("welcome_desc", self.lang));
                        }
                    });
                });
        }

        // Bottom panel: Info
        egui::TopBottomPanel::bottom("info_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("OsiView v0.1.0");
                ui.separator();
                ui.label(format!(
                    "{} · {}",
                    tr("osi_header", self.lang),
                    tr("tcp_header", self.lang)
                ));
                if let Some((kind, id)) = self.selected {
                    if let Some(layer) = model::layer(kind, id) {
                        ui.separator();
                        ui.label(format!("{} {}", layer.icon, layer.name));
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.sim_open {
                self.sim_view(ui);
            } else {
                self.explorer_view(ui);
            }
        });

        // eframe only repaints on input by default; the traversal animation
        // needs continuous frames while it is running.
        if self.sim_open && self.session.is_animating() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}

fn draw_grid_headers(painter: &egui::Painter, rect: egui::Rect, grid: &GridGeometry, lang: Lang) {
    let osi_x = grid.osi.first().map(|c| c.rect.center().x).unwrap_or(0.0) + rect.left();
    let tcp_x = grid.tcp.first().map(|c| c.rect.center().x).unwrap_or(0.0) + rect.left();
    let y = rect.top() + 16.0;

    painter.text(
        egui::pos2(osi_x, y),
        egui::Align2::CENTER_CENTER,
        tr("osi_header", lang),
        egui::FontId::proportional(15.0),
        egui::Color32::from_rgb(167, 139, 250),
    );
    painter.text(
        egui::pos2(tcp_x, y),
        egui::Align2::CENTER_CENTER,
        tr("tcp_header", lang),
        egui::FontId::proportional(15.0),
        egui::Color32::from_rgb(56, 189, 248),
    );

    // Direction hints in the header band.
    painter.text(
        egui::pos2(rect.left() + 12.0, y + 22.0),
        egui::Align2::LEFT_CENTER,
        format!("⬇ {}", tr("flow_down", lang)),
        egui::FontId::proportional(11.0),
        egui::Color32::from_rgb(34, 197, 94),
    );
    painter.text(
        egui::pos2(rect.right() - 12.0, y + 22.0),
        egui::Align2::RIGHT_CENTER,
        format!("{} ⬆", tr("flow_up", lang)),
        egui::FontId::proportional(11.0),
        egui::Color32::from_rgb(56, 189, 248),
    );
}

/// A card relates to itself and to its mapped counterparts across the
/// columns; everything else fades while one card has focus.
fn cards_related(a: (ModelKind, u8), b: (ModelKind, u8)) -> bool {
    match (a, b) {
        _ if a == b => true,
        ((ModelKind::Osi, osi), (ModelKind::TcpIp, tcp))
        | ((ModelKind::TcpIp, tcp), (ModelKind::Osi, osi)) => model::tcpip_layer(tcp)
            .map(|l| l.osi_mapping.contains(&osi))
            .unwrap_or(false),
        _ => false,
    }
}

fn draw_layer_card(
    painter: &egui::Painter,
    rect: egui::Rect,
    layer: &Layer,
    lang: Lang,
    hovered: bool,
    selected: bool,
    dimmed: bool,
) {
    // Unrelated cards fade while another card has focus.
    let dim = |c: egui::Color32| if dimmed { c.gamma_multiply(0.35) } else { c };

    let fill = if hovered {
        egui::Color32::from_rgb(36, 41, 52)
    } else {
        egui::Color32::from_rgb(28, 32, 41)
    };
    let stroke = if selected {
        egui::Stroke::new(2.0, layer.color)
    } else if hovered {
        egui::Stroke::new(1.5, layer.color.gamma_multiply(0.8))
    } else {
        egui::Stroke::new(1.0, dim(egui::Color32::from_gray(58)))
    };
    painter.rect(rect, 6.0, dim(fill), stroke);

    let stripe = egui::Rect::from_min_size(rect.min, egui::vec2(4.0, rect.height()));
    painter.rect_filled(
        stripe,
        egui::Rounding { nw: 6.0, ne: 0.0, sw: 6.0, se: 0.0 },
        dim(layer.color),
    );

    painter.text(
        egui::pos2(rect.left() + 14.0, rect.top() + 6.0),
        egui::Align2::LEFT_TOP,
        format!("L{}", layer.id),
        egui::FontId::proportional(11.0),
        dim(layer.color),
    );

    // Two-line header (name + subtitle) when the card is tall enough,
    // otherwise just the name; protocols stay on the bottom edge.
    let name = format!("{} {}", layer.icon, layer.name);
    let two_lines = rect.height() >= 72.0;
    let name_y = if two_lines { rect.center().y - 8.0 } else { rect.center().y };
    painter.text(
        egui::pos2(rect.left() + 14.0, name_y),
        egui::Align2::LEFT_CENTER,
        name,
        egui::FontId::proportional(14.0),
        dim(egui::Color32::WHITE),
    );
    if two_lines {
        painter.text(
            egui::pos2(rect.left() + 14.0, rect.center().y + 8.0),
            egui::Align2::LEFT_CENTER,
            layer.subtitle.get(lang),
            egui::FontId::proportional(10.0),
            dim(egui::Color32::from_gray(150)),
        );
    }
    if rect.height() >= 58.0 {
        painter.text(
            egui::pos2(rect.left() + 14.0, rect.bottom() - 8.0),
            egui::Align2::LEFT_BOTTOM,
            layer.protocols.join(" · "),
            egui::FontId::proportional(10.0),
            dim(egui::Color32::from_gray(140)),
        );
    }

    // PDU badge on the right edge.
    if !layer.pdu.is_empty() {
        let size = egui::vec2(10.0 + layer.pdu.len() as f32 * 6.5, 18.0);
        let badge = egui::Rect::from_center_size(
            egui::pos2(rect.right() - size.x / 2.0 - 10.0, rect.top() + 16.0),
            size,
        );
        painter.rect_filled(badge, 9.0, dim(layer.color.gamma_multiply(0.18)));
        painter.text(
            badge.center(),
            egui::Align2::CENTER_CENTER,
            layer.pdu,
            egui::FontId::proportional(10.0),
            dim(layer.color),
        );
    }
}

fn draw_mapping_link(
    painter: &egui::Painter,
    link: &MappingLink,
    origin: egui::Vec2,
    emphasized: bool,
) {
    let from = link.from + origin;
    let to = link.to + origin;
    let color = if emphasized {
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 115)
    } else {
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 50)
    };
    painter.line_segment([from, to], egui::Stroke::new(2.0, color));

    // Arrowheads at both ends.
    let dir = (to - from).normalized();
    let size = 7.0;
    let spread = 0.45;
    for (tip, d) in [(to, dir), (from, -dir)] {
        let perp = egui::vec2(-d.y, d.x);
        let p1 = tip - d * size + perp * size * spread;
        let p2 = tip - d * size - perp * size * spread;
        painter.add(egui::Shape::convex_polygon(
            vec![tip, p1, p2],
            color,
            egui::Stroke::NONE,
        ));
    }
}

fn draw_stage(
    painter: &egui::Painter,
    rect: egui::Rect,
    geo: &StageGeometry,
    session: &SimSession,
    lang: Lang,
) {
    let origin = rect.min.to_vec2();
    painter.rect_filled(rect, 8.0, egui::Color32::from_rgb(16, 19, 26));

    // Machine headers above each stack.
    for side in [Side::Sender, Side::Receiver] {
        let stack = geo.stack(side).translate(origin);
        painter.text(
            egui::pos2(stack.center().x, rect.top() + 20.0),
            egui::Align2::CENTER_CENTER,
            format!("🖥 {}", tr(session.scenario().side_label_key(side), lang)),
            egui::FontId::proportional(15.0),
            egui::Color32::WHITE,
        );
    }

    // Layer rows, top down, with any active highlight tint on top.
    for side in [Side::Sender, Side::Receiver] {
        for layer in model::osi_layers() {
            let key = RowKey::new(side, layer.id);
            let row = match geo.row(key) {
                Some(row) => row.translate(origin),
                None => continue,
            };
            painter.rect(
                row,
                4.0,
                egui::Color32::from_rgb(30, 34, 43),
                egui::Stroke::new(1.0, egui::Color32::from_gray(55)),
            );
            let stripe = egui::Rect::from_min_size(row.min, egui::vec2(4.0, row.height()));
            painter.rect_filled(
                stripe,
                egui::Rounding { nw: 4.0, ne: 0.0, sw: 4.0, se: 0.0 },
                layer.color,
            );
            painter.text(
                egui::pos2(row.left() + 12.0, row.center().y),
                egui::Align2::LEFT_CENTER,
                format!("L{} {}", layer.id, layer.name),
                egui::FontId::proportional(12.0),
                egui::Color32::from_gray(200),
            );
            if let Some(tint) = session.scene().highlight(key) {
                painter.rect_filled(row, 4.0, tint);
            }
        }
    }

    // The cable: down from each stack, across the bottom.
    let (x_left, x_right) = geo.wire_span();
    let wire_y = geo.wire_y() + origin.y;
    let wire_stroke = egui::Stroke::new(2.0, egui::Color32::from_gray(90));
    for side in [Side::Sender, Side::Receiver] {
        let stack = geo.stack(side).translate(origin);
        let x = stack.center().x;
        painter.line_segment(
            [egui::pos2(x, stack.bottom() + 4.0), egui::pos2(x, wire_y)],
            wire_stroke,
        );
        painter.circle_filled(egui::pos2(x, wire_y), 3.5, egui::Color32::from_gray(140));
    }
    painter.line_segment(
        [
            egui::pos2(x_left + origin.x, wire_y),
            egui::pos2(x_right + origin.x, wire_y),
        ],
        wire_stroke,
    );

    // The packet token.
    let token = &session.scene().token;
    if token.opacity > 0.0 {
        let pos = token.pos + origin;
        let size = egui::vec2(54.0, 24.0) * token.scale;
        let r = egui::Rect::from_center_size(pos, size);
        painter.rect(
            r,
            6.0,
            token.color.gamma_multiply(token.opacity),
            egui::Stroke::new(
                1.0,
                egui::Color32::from_white_alpha((token.opacity * 180.0) as u8),
            ),
        );
        painter.text(
            r.center(),
            egui::Align2::CENTER_CENTER,
            &token.label,
            egui::FontId::proportional(12.0),
            egui::Color32::from_black_alpha((token.opacity * 255.0) as u8),
        );
    }
}
