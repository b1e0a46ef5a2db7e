//! Stage & Grid Geometry
//! Pure layout math for the comparison grid and the simulation stage. All
//! coordinates are relative to the containing panel's top-left corner, so a
//! moved or resized panel only changes the offset the painter adds back.

use std::collections::HashMap;

use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

use crate::model::Layer;

#[cfg(test)]
mod tests;

/// Which host stack a row or anchor belongs to.
///
/// The HTTP scenario relabels the sides Client/Server in the UI; geometry
/// only ever sees sender and receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Sender,
    Receiver,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Sender => Side::Receiver,
            Side::Receiver => Side::Sender,
        }
    }
}

/// Identifies one layer row on one side of the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub side: Side,
    pub layer: u8,
}

impl RowKey {
    pub fn new(side: Side, layer: u8) -> Self {
        RowKey { side, layer }
    }
}

/// A symbolic stage position, resolved against the current geometry when the
/// owning animation step starts rather than when the script is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Token parking spot above a stack, next to the machine icon.
    Home(Side),
    /// Center of a layer row.
    Layer(Side, u8),
    /// Cable altitude below a stack's L1 row.
    Wire(Side),
}

impl Anchor {
    /// `None` when the referenced row is not in the registry, in which case
    /// the caller skips the movement instead of guessing a position.
    pub fn resolve(&self, geo: &StageGeometry) -> Option<Pos2> {
        match *self {
            Anchor::Home(side) => Some(geo.home_anchor(side)),
            Anchor::Layer(side, layer) => geo.layer_anchor(side, layer),
            Anchor::Wire(side) => Some(geo.wire_anchor(side)),
        }
    }
}

const STAGE_HEADER_H: f32 = 64.0;
const WIRE_ZONE_H: f32 = 56.0;
const ROW_GAP: f32 = 6.0;
const STACK_WIDTH_FRAC: f32 = 0.32;
const STACK_MARGIN_FRAC: f32 = 0.06;
const TOKEN_HOME_Y: f32 = 36.0;

/// Resolved layout for the simulation stage: two mirrored layer stacks, a row
/// registry keyed by [`RowKey`], and the wire altitude between them.
#[derive(Debug, Clone)]
pub struct StageGeometry {
    size: Vec2,
    sender_stack: Rect,
    receiver_stack: Rect,
    rows: HashMap<RowKey, Rect>,
    wire_y: f32,
}

impl StageGeometry {
    /// Lay out both stacks for `size`, with `layer_ids` ordered top to
    /// bottom. Degenerate sizes clamp row heights at zero instead of going
    /// negative.
    pub fn compute(size: Vec2, layer_ids: &[u8]) -> StageGeometry {
        let stack_w = (size.x * STACK_WIDTH_FRAC).max(0.0);
        let margin = (size.x * STACK_MARGIN_FRAC).max(0.0);
        let sender_x = margin;
        let receiver_x = (size.x - margin - stack_w).max(sender_x);

        let rows_top = STAGE_HEADER_H;
        let rows_bottom = (size.y - WIRE_ZONE_H).max(rows_top);

        let mut rows = HashMap::new();
        let count = layer_ids.len();
        if count > 0 {
            let gaps = ROW_GAP * (count as f32 - 1.0);
            let row_h = ((rows_bottom - rows_top - gaps) / count as f32).max(0.0);
            for (index, layer) in layer_ids.iter().enumerate() {
                let y = rows_top + index as f32 * (row_h + ROW_GAP);
                let row_size = vec2(stack_w, row_h);
                rows.insert(
                    RowKey::new(Side::Sender, *layer),
                    Rect::from_min_size(pos2(sender_x, y), row_size),
                );
                rows.insert(
                    RowKey::new(Side::Receiver, *layer),
                    Rect::from_min_size(pos2(receiver_x, y), row_size),
                );
            }
        }

        StageGeometry {
            size,
            sender_stack: Rect::from_min_size(
                pos2(sender_x, rows_top),
                vec2(stack_w, rows_bottom - rows_top),
            ),
            receiver_stack: Rect::from_min_size(
                pos2(receiver_x, rows_top),
                vec2(stack_w, rows_bottom - rows_top),
            ),
            rows,
            wire_y: size.y - WIRE_ZONE_H * 0.5,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn stack(&self, side: Side) -> Rect {
        match side {
            Side::Sender => self.sender_stack,
            Side::Receiver => self.receiver_stack,
        }
    }

    pub fn row(&self, key: RowKey) -> Option<Rect> {
        self.rows.get(&key).copied()
    }

    pub fn layer_anchor(&self, side: Side, layer: u8) -> Option<Pos2> {
        self.row(RowKey::new(side, layer)).map(|r| r.center())
    }

    pub fn home_anchor(&self, side: Side) -> Pos2 {
        pos2(self.stack(side).center().x, TOKEN_HOME_Y)
    }

    pub fn wire_anchor(&self, side: Side) -> Pos2 {
        pos2(self.stack(side).center().x, self.wire_y)
    }

    pub fn wire_y(&self) -> f32 {
        self.wire_y
    }

    /// Horizontal extent of the cable, from sender column to receiver column.
    pub fn wire_span(&self) -> (f32, f32) {
        (
            self.sender_stack.center().x,
            self.receiver_stack.center().x,
        )
    }
}

pub const GRID_TOP_Y: f32 = 56.0;
const GRID_BOTTOM_PAD: f32 = 16.0;
const GRID_GAP: f32 = 8.0;
const GRID_CENTER_GAP: f32 = 120.0;
const GRID_SIDE_PAD: f32 = 80.0;
const LINK_INSET: f32 = 10.0;

/// One positioned card in the comparison grid.
#[derive(Debug, Clone, Copy)]
pub struct CardRect {
    pub id: u8,
    pub rect: Rect,
}

/// A double-headed arrow from an OSI card to the TCP/IP card that absorbs it.
#[derive(Debug, Clone, Copy)]
pub struct MappingLink {
    pub osi_id: u8,
    pub tcp_id: u8,
    pub from: Pos2,
    pub to: Pos2,
}

/// Resolved layout for the side-by-side model comparison.
#[derive(Debug, Clone)]
pub struct GridGeometry {
    pub osi: Vec<CardRect>,
    pub tcp: Vec<CardRect>,
    pub links: Vec<MappingLink>,
}

impl GridGeometry {
    /// Seven equal OSI rows on the left, span-weighted TCP/IP cards on the
    /// right, one mapping arrow per OSI row.
    pub fn compute(size: Vec2, osi: &[Layer], tcp: &[Layer]) -> GridGeometry {
        let avail_h = size.y - GRID_TOP_Y - GRID_BOTTOM_PAD;
        let rows = osi.len().max(1);
        let row_h = ((avail_h - GRID_GAP * (rows as f32 - 1.0)) / rows as f32)
            .floor()
            .max(0.0);

        let avail_w = size.x - GRID_SIDE_PAD * 2.0;
        let card_w = ((avail_w - GRID_CENTER_GAP) / 2.0).floor().max(0.0);
        let osi_x = GRID_SIDE_PAD;
        let tcp_x = GRID_SIDE_PAD + card_w + GRID_CENTER_GAP;

        let mut osi_cards = Vec::with_capacity(osi.len());
        for (index, layer) in osi.iter().enumerate() {
            let y = GRID_TOP_Y + index as f32 * (row_h + GRID_GAP);
            osi_cards.push(CardRect {
                id: layer.id,
                rect: Rect::from_min_size(pos2(osi_x, y), vec2(card_w, row_h)),
            });
        }

        let mut tcp_cards = Vec::with_capacity(tcp.len());
        for layer in tcp {
            // A TCP/IP card starts at the row of the highest OSI layer it
            // absorbs and spans down from there.
            let top_osi = layer.osi_mapping.iter().copied().max().unwrap_or(0);
            let start_index = osi
                .iter()
                .position(|l| l.id == top_osi)
                .unwrap_or(0);
            let y = GRID_TOP_Y + start_index as f32 * (row_h + GRID_GAP);
            let span = layer.span.max(1) as f32;
            let h = span * row_h + (span - 1.0) * GRID_GAP;
            tcp_cards.push(CardRect {
                id: layer.id,
                rect: Rect::from_min_size(pos2(tcp_x, y), vec2(card_w, h)),
            });
        }

        let mut links = Vec::with_capacity(osi_cards.len());
        for (card, layer) in osi_cards.iter().zip(osi) {
            let Some(tcp_layer) = tcp.iter().find(|t| t.osi_mapping.contains(&layer.id)) else {
                continue;
            };
            let y = card.rect.center().y;
            links.push(MappingLink {
                osi_id: layer.id,
                tcp_id: tcp_layer.id,
                from: pos2(card.rect.right() + LINK_INSET, y),
                to: pos2(tcp_x - LINK_INSET, y),
            });
        }

        GridGeometry { osi: osi_cards, tcp: tcp_cards, links }
    }

    pub fn osi_card(&self, id: u8) -> Option<&CardRect> {
        self.osi.iter().find(|c| c.id == id)
    }

    pub fn tcp_card(&self, id: u8) -> Option<&CardRect> {
        self.tcp.iter().find(|c| c.id == id)
    }
}
