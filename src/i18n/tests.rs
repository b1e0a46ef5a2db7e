use crate::i18n::{has_key, tr, Lang, Text};

#[test]
fn test_default_language_is_indonesian() {
    assert_eq!(Lang::default(), Lang::Id);
}

#[test]
fn test_toggle_round_trips() {
    assert_eq!(Lang::Id.toggled(), Lang::En);
    assert_eq!(Lang::En.toggled(), Lang::Id);
    assert_eq!(Lang::Id.toggled().toggled(), Lang::Id);
}

#[test]
fn test_text_get_picks_language() {
    let t = Text { id: "halo", en: "hello" };
    assert_eq!(t.get(Lang::Id), "halo");
    assert_eq!(t.get(Lang::En), "hello");
}

#[test]
fn test_unknown_key_returns_key() {
    assert_eq!(tr("no_such_key", Lang::Id), "no_such_key");
    assert_eq!(tr("no_such_key", Lang::En), "no_such_key");
    assert!(!has_key("no_such_key"));
}

#[test]
fn test_known_keys_differ_from_key() {
    for key in ["subtitle", "sim_start", "sim_ping_complete"] {
        assert!(has_key(key));
        assert_ne!(tr(key, Lang::Id), key);
        assert_ne!(tr(key, Lang::En), key);
    }
}

#[test]
fn test_all_narration_keys_present_in_both_languages() {
    let mut keys: Vec<String> = Vec::new();
    for prefix in ["sim_ping", "sim_http"] {
        for layer in 1..=7 {
            keys.push(format!("{prefix}_l{layer}"));
        }
        keys.push(format!("{prefix}_request"));
        keys.push(format!("{prefix}_complete"));
    }
    keys.push("sim_ping_reply".into());
    keys.push("sim_http_response".into());
    keys.push("sim_http_processing".into());
    keys.push("sim_wire_tx".into());

    for key in &keys {
        assert!(has_key(key), "missing narration key {key}");
        let id = tr(key, Lang::Id);
        let en = tr(key, Lang::En);
        assert!(!id.is_empty() && !en.is_empty());
        assert_ne!(id, key);
        assert_ne!(en, key);
    }
}

#[test]
fn test_welcome_text_mentions_layer_selection() {
    // The welcome card doubles as the "nothing selected" hint.
    assert!(tr("welcome_desc", Lang::En).contains("Click a layer"));
    assert!(tr("welcome_desc", Lang::Id).contains("Pilih sebuah layer"));
}
