use eframe::egui::vec2;

use crate::geometry::{Anchor, GridGeometry, RowKey, Side, StageGeometry};
use crate::model::{osi_layers, tcpip_layers};

const OSI_IDS: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

fn stage() -> StageGeometry {
    StageGeometry::compute(vec2(900.0, 600.0), &OSI_IDS)
}

#[test]
fn test_stage_registers_all_rows() {
    let geo = stage();
    for side in [Side::Sender, Side::Receiver] {
        for id in OSI_IDS {
            assert!(
                geo.row(RowKey::new(side, id)).is_some(),
                "missing row {side:?}/{id}"
            );
        }
    }
    assert!(geo.row(RowKey::new(Side::Sender, 8)).is_none());
}

#[test]
fn test_stage_rows_ordered_top_down() {
    let geo = stage();
    for side in [Side::Sender, Side::Receiver] {
        let mut last_y = f32::MIN;
        // L7 sits on top, L1 at the bottom.
        for id in OSI_IDS {
            let y = geo.layer_anchor(side, id).unwrap().y;
            assert!(y > last_y, "row {id} not below previous");
            last_y = y;
        }
    }
}

#[test]
fn test_stage_sides_are_mirrored_columns() {
    let geo = stage();
    let sender = geo.stack(Side::Sender);
    let receiver = geo.stack(Side::Receiver);
    assert!(sender.right() < receiver.left());
    assert_eq!(sender.width(), receiver.width());
    // Rows on both sides share the same vertical band.
    for id in OSI_IDS {
        let s = geo.row(RowKey::new(Side::Sender, id)).unwrap();
        let r = geo.row(RowKey::new(Side::Receiver, id)).unwrap();
        assert_eq!(s.top(), r.top());
        assert_eq!(s.height(), r.height());
    }
}

#[test]
fn test_wire_sits_below_the_stacks() {
    let geo = stage();
    let l1_bottom = geo.row(RowKey::new(Side::Sender, 1)).unwrap().bottom();
    assert!(geo.wire_y() > l1_bottom);
    assert!(geo.wire_y() < geo.size().y);
    let (x1, x2) = geo.wire_span();
    assert!(x1 < x2);
}

#[test]
fn test_anchor_resolution() {
    let geo = stage();
    assert!(Anchor::Home(Side::Sender).resolve(&geo).is_some());
    assert!(Anchor::Wire(Side::Receiver).resolve(&geo).is_some());
    assert!(Anchor::Layer(Side::Sender, 4).resolve(&geo).is_some());
    assert!(Anchor::Layer(Side::Sender, 9).resolve(&geo).is_none());

    let home = Anchor::Home(Side::Sender).resolve(&geo).unwrap();
    let l7 = Anchor::Layer(Side::Sender, 7).resolve(&geo).unwrap();
    assert!(home.y < l7.y, "home must sit above the top row");
    // Home, rows, and wire share the stack's column.
    let wire = Anchor::Wire(Side::Sender).resolve(&geo).unwrap();
    assert_eq!(home.x, l7.x);
    assert_eq!(home.x, wire.x);
}

#[test]
fn test_empty_registry_resolves_nothing_per_layer() {
    let geo = StageGeometry::compute(vec2(900.0, 600.0), &[]);
    for id in OSI_IDS {
        assert!(Anchor::Layer(Side::Sender, id).resolve(&geo).is_none());
    }
    // Side anchors survive without rows.
    assert!(Anchor::Home(Side::Sender).resolve(&geo).is_some());
    assert!(Anchor::Wire(Side::Sender).resolve(&geo).is_some());
}

#[test]
fn test_tiny_stage_does_not_go_negative() {
    let geo = StageGeometry::compute(vec2(10.0, 10.0), &OSI_IDS);
    for id in OSI_IDS {
        let row = geo.row(RowKey::new(Side::Sender, id)).unwrap();
        assert!(row.width() >= 0.0);
        assert!(row.height() >= 0.0);
    }
}

#[test]
fn test_grid_has_all_cards_and_links() {
    let grid = GridGeometry::compute(vec2(1200.0, 700.0), osi_layers(), tcpip_layers());
    assert_eq!(grid.osi.len(), 7);
    assert_eq!(grid.tcp.len(), 4);
    assert_eq!(grid.links.len(), 7);
}

#[test]
fn test_grid_osi_rows_equal_height() {
    let grid = GridGeometry::compute(vec2(1200.0, 700.0), osi_layers(), tcpip_layers());
    let h = grid.osi[0].rect.height();
    for card in &grid.osi {
        assert_eq!(card.rect.height(), h);
    }
}

#[test]
fn test_grid_spans_follow_mapping() {
    let grid = GridGeometry::compute(vec2(1200.0, 700.0), osi_layers(), tcpip_layers());
    let row_h = grid.osi[0].rect.height();
    let gap = grid.osi[1].rect.top() - grid.osi[0].rect.bottom();

    // Application (TCP/IP 4) covers the three top OSI rows.
    let app = grid.tcp_card(4).unwrap().rect;
    assert_eq!(app.top(), grid.osi_card(7).unwrap().rect.top());
    assert_eq!(app.height(), 3.0 * row_h + 2.0 * gap);

    // Network Access (TCP/IP 1) covers the two bottom OSI rows.
    let access = grid.tcp_card(1).unwrap().rect;
    assert_eq!(access.top(), grid.osi_card(2).unwrap().rect.top());
    assert_eq!(access.height(), 2.0 * row_h + gap);

    // Single-span cards line up with their row exactly.
    let transport = grid.tcp_card(3).unwrap().rect;
    assert_eq!(transport.top(), grid.osi_card(4).unwrap().rect.top());
    assert_eq!(transport.height(), row_h);
}

#[test]
fn test_grid_links_run_left_to_right() {
    let grid = GridGeometry::compute(vec2(1200.0, 700.0), osi_layers(), tcpip_layers());
    for link in &grid.links {
        let osi = grid.osi_card(link.osi_id).unwrap().rect;
        let tcp = grid.tcp_card(link.tcp_id).unwrap().rect;
        assert!(link.from.x > osi.right());
        assert!(link.to.x < tcp.left());
        assert!(link.from.x < link.to.x);
        assert_eq!(link.from.y, link.to.y);
        assert_eq!(link.from.y, osi.center().y);
    }
}
