//! Property tests for flattening and interpolation

use std::collections::HashMap;

use locale_bundles::i18n::{template, Bundle, Vars};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn nested_document() -> impl Strategy<Value = HashMap<String, HashMap<String, String>>> {
    prop::collection::hash_map(
        "[a-z]{1,8}",
        prop::collection::hash_map("[a-z_]{1,8}", "[^{}]{0,16}", 1..5),
        1..5,
    )
}

proptest! {
    #[test]
    fn flattened_keys_join_every_level(document in nested_document()) {
        let mut root = Map::new();
        for (outer, inner) in &document {
            root.insert(outer.clone(), json!(inner));
        }

        let bundle = Bundle::flatten(&root);
        let leaves: usize = document.values().map(HashMap::len).sum();
        prop_assert_eq!(bundle.len(), leaves);

        for (outer, inner) in &document {
            for (key, value) in inner {
                let expected = [value.clone()];
                let candidates = bundle.get(&format!("{}.{}", outer, key));
                prop_assert_eq!(candidates, Some(&expected[..]));
            }
        }
    }

    #[test]
    fn arrays_keep_candidate_order(values in prop::collection::vec("[a-zA-Z ]{1,12}", 1..8)) {
        let mut root = Map::new();
        root.insert("variants".to_string(), json!(values));

        let bundle = Bundle::flatten(&root);
        prop_assert_eq!(bundle.get("variants"), Some(values.as_slice()));
    }

    #[test]
    fn text_without_actions_renders_verbatim(text in "[^{]{0,40}") {
        let vars = Vars::new();
        prop_assert_eq!(template::render(&text, &vars), Ok(text.clone()));
    }

    #[test]
    fn field_actions_substitute_values(name in "[A-Z][A-Za-z0-9_]{0,10}", value in "[^{}]{0,20}") {
        let mut vars = Vars::new();
        vars.insert(name.clone(), Value::String(value.clone()));

        let source = format!("<{{{{.{}}}}}>", name);
        prop_assert_eq!(template::render(&source, &vars), Ok(format!("<{}>", value)));
    }
}
