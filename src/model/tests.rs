use crate::model::{
    layer, layers, osi_layer, osi_layers, pdu_description, sim_layer_color, tcpip_layer,
    tcpip_layer_for_osi, tcpip_layers, validate, ModelKind,
};

#[test]
fn test_tables_validate() {
    if let Err(errors) = validate() {
        panic!("model data invalid: {errors:?}");
    }
}

#[test]
fn test_osi_layers_ordered_top_down() {
    let ids: Vec<u8> = osi_layers().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_tcpip_layers_ordered_top_down() {
    let ids: Vec<u8> = tcpip_layers().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![4, 3, 2, 1]);
}

#[test]
fn test_layer_lookup() {
    assert_eq!(osi_layer(7).map(|l| l.name), Some("Application"));
    assert_eq!(osi_layer(1).map(|l| l.name), Some("Physical"));
    assert!(osi_layer(8).is_none());
    assert_eq!(tcpip_layer(2).map(|l| l.name), Some("Internet"));
    assert!(tcpip_layer(5).is_none());
}

#[test]
fn test_kind_scoped_lookup_keeps_shared_ids_apart() {
    // Ids 1..=4 exist in both models, so the kind picks the table.
    assert_eq!(layer(ModelKind::Osi, 4).map(|l| l.name), Some("Transport"));
    assert_eq!(layer(ModelKind::TcpIp, 4).map(|l| l.name), Some("Application"));
    assert!(layer(ModelKind::TcpIp, 7).is_none());
    // Every card in either column resolves to itself and to tooltip copy
    // for its PDU.
    for kind in [ModelKind::Osi, ModelKind::TcpIp] {
        for l in layers(kind) {
            let found = layer(kind, l.id).unwrap();
            assert_eq!(found.name, l.name);
            assert!(pdu_description(found.pdu).is_some(), "{}", found.pdu);
        }
    }
}

#[test]
fn test_osi_to_tcpip_mapping() {
    // Application absorbs 7-5, Transport takes 4, Internet takes 3,
    // Network Access folds 2 and 1 together.
    for osi_id in [7, 6, 5] {
        assert_eq!(tcpip_layer_for_osi(osi_id).map(|l| l.id), Some(4));
    }
    assert_eq!(tcpip_layer_for_osi(4).map(|l| l.id), Some(3));
    assert_eq!(tcpip_layer_for_osi(3).map(|l| l.id), Some(2));
    assert_eq!(tcpip_layer_for_osi(2).map(|l| l.id), Some(1));
    assert_eq!(tcpip_layer_for_osi(1).map(|l| l.id), Some(1));
    assert!(tcpip_layer_for_osi(0).is_none());
}

#[test]
fn test_spans_cover_the_grid() {
    let total: u8 = tcpip_layers().iter().map(|l| l.span).sum();
    assert_eq!(total, 7);
}

#[test]
fn test_every_pdu_has_a_description() {
    for layer in layers(ModelKind::Osi).iter().chain(layers(ModelKind::TcpIp)) {
        assert!(
            pdu_description(layer.pdu).is_some(),
            "no PDU description for {:?}",
            layer.pdu
        );
    }
    assert!(pdu_description("Datagrams").is_none());
}

#[test]
fn test_sim_palette_swaps_physical_layer() {
    // L1's violet card color would vanish against the dark stage.
    let card = osi_layer(1).map(|l| l.color);
    assert_ne!(Some(sim_layer_color(1)), card);
    for id in 2..=7 {
        assert_eq!(Some(sim_layer_color(id)), osi_layer(id).map(|l| l.color));
    }
}

#[test]
fn test_port_tables_only_where_expected() {
    // Only Application (L7) and Transport (L4) list concrete port entries.
    for layer in osi_layers() {
        let expect_ports = layer.id == 7 || layer.id == 4;
        assert_eq!(layer.has_ports(), expect_ports, "layer {}", layer.id);
    }
}
