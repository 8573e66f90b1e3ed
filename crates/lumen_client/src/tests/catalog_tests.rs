use super::*;

fn assert_sorted_unique(catalog: &SceneCatalog) {
    let scenes = catalog.scenes();
    for pair in scenes.windows(2) {
        assert!(pair[0] < pair[1], "not strictly ascending: {scenes:?}");
    }
}

#[test]
fn starts_with_sorted_seed_scenes() {
    let catalog = SceneCatalog::new();
    assert_eq!(catalog.scenes(), ["default", "relax", "work"]);
    assert_eq!(catalog.active(), "default");
}

#[test]
fn ensure_inserts_new_scene_in_order_and_selects_it() {
    let mut catalog = SceneCatalog::new();
    assert!(catalog.ensure("night"));
    assert_eq!(catalog.scenes(), ["default", "night", "relax", "work"]);
    assert_eq!(catalog.active(), "night");
}

#[test]
fn ensure_is_idempotent() {
    let mut once = SceneCatalog::new();
    once.ensure("focus");

    let mut twice = SceneCatalog::new();
    twice.ensure("focus");
    assert!(!twice.ensure("focus"));

    assert_eq!(once, twice);
    assert_eq!(twice.active(), "focus");
}

#[test]
fn ensure_known_scene_only_moves_selection() {
    let mut catalog = SceneCatalog::new();
    assert!(!catalog.ensure("work"));
    assert_eq!(catalog.scenes().len(), 3);
    assert_eq!(catalog.active(), "work");
}

#[test]
fn ensure_ignores_empty_names() {
    let mut catalog = SceneCatalog::new();
    catalog.select("relax");
    assert!(!catalog.ensure(""));
    assert_eq!(catalog.scenes(), ["default", "relax", "work"]);
    assert_eq!(catalog.active(), "relax");
}

#[test]
fn arbitrary_ensure_sequences_keep_catalog_sorted_and_unique() {
    let names = [
        "zen", "alpha", "work", "Zen", "alpha", "mid", "", "default", "b", "zen", "a", "night",
    ];
    let mut catalog = SceneCatalog::new();
    for (i, name) in names.iter().enumerate() {
        catalog.ensure(name);
        assert_sorted_unique(&catalog);
        // Rotate through prefixes so insertion order varies.
        for extra in &names[..i % 4] {
            catalog.ensure(extra);
            assert_sorted_unique(&catalog);
        }
    }
    assert!(catalog.contains("Zen"));
    assert!(catalog.contains("zen"));
    assert_eq!(catalog.scenes().first().map(String::as_str), Some("Zen"));
}

#[test]
fn options_follow_catalog_order_with_capitalized_labels() {
    let mut catalog = SceneCatalog::new();
    catalog.ensure("night");
    let labels: Vec<_> = catalog.options().into_iter().map(|o| o.label).collect();
    assert_eq!(labels, ["Default", "Night", "Relax", "Work"]);
}
