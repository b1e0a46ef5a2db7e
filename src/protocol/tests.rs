use crate::i18n::Lang;
use crate::model::{osi_layers, tcpip_layers};
use crate::protocol::{all, lookup};

#[test]
fn test_lookup_known_protocol() {
    let http = lookup("HTTP").expect("HTTP entry");
    assert_eq!(http.full_name, "Hypertext Transfer Protocol");
    assert!(!http.risks.is_empty());
    assert!(!http.mitigations.is_empty());
    assert!(http.use_cases.is_some());
}

#[test]
fn test_lookup_unknown_protocol() {
    assert!(lookup("QUIC").is_none());
    assert!(lookup("").is_none());
    // Tags are case sensitive, same as the card chips.
    assert!(lookup("http").is_none());
}

#[test]
fn test_every_layer_chip_resolves() {
    for layer in osi_layers().iter().chain(tcpip_layers()) {
        for tag in layer.protocols {
            assert!(
                lookup(tag).is_some(),
                "layer {} references unknown protocol {tag}",
                layer.id
            );
        }
    }
}

#[test]
fn test_entries_have_bilingual_descriptions() {
    for info in all() {
        assert!(!info.description.get(Lang::Id).is_empty(), "{}", info.tag);
        assert!(!info.description.get(Lang::En).is_empty(), "{}", info.tag);
        for note in info.risks.iter().chain(info.mitigations) {
            assert!(!note.title.is_empty(), "{}", info.tag);
            assert!(!note.desc.get(Lang::Id).is_empty(), "{}", info.tag);
            assert!(!note.desc.get(Lang::En).is_empty(), "{}", info.tag);
        }
    }
}

#[test]
fn test_no_duplicate_tags() {
    for (i, a) in all().iter().enumerate() {
        for b in &all()[i + 1..] {
            assert_ne!(a.tag, b.tag);
        }
    }
}
