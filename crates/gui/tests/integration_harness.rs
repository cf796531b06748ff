//! Integration tests for the headless editor harness: scene CRUD,
//! selection and persistence.

use habita_gui_lib::fixtures::sample_scene;
use habita_gui_lib::harness::EditorHarness;
use shared::FurnitureItem;

#[test]
fn test_harness_create_and_inspect() {
    let mut h = EditorHarness::new();
    let id = h.add_cube();
    assert_eq!(h.object_count(), 1);
    assert_eq!(h.position_of(id).unwrap(), [0.0, 0.5, 0.0]);
}

#[test]
fn test_all_primitive_kinds() {
    let mut h = EditorHarness::new();
    h.add_cube();
    h.add_sphere();
    h.add_cylinder();
    h.add_cone();
    assert_eq!(h.object_count(), 4);
}

#[test]
fn test_furniture_rests_on_floor() {
    let mut h = EditorHarness::new();
    let item = FurnitureItem {
        id: "wardrobe".to_string(),
        name: "Armario".to_string(),
        dimensions: [1.2, 2.0, 0.6],
        color: "#795548".to_string(),
    };
    let id = h.add_furniture(&item);
    let pos = h.position_of(id).unwrap();
    assert_eq!(pos[1], 1.0);
}

#[test]
fn test_load_export_roundtrip() {
    let mut h1 = EditorHarness::new();
    h1.add_cube();
    h1.add_cube();
    let json = h1.export_scene_json();

    let mut h2 = EditorHarness::new();
    h2.load_scene_json(&json).unwrap();
    assert_eq!(h2.object_count(), 2);

    // Ids allocated after a load never collide with loaded ones.
    let new_id = h2.add_cube();
    let existing: Vec<_> = h2.scene.objects().iter().map(|o| o.id).collect();
    assert_eq!(existing.iter().filter(|i| **i == new_id).count(), 1);
}

#[test]
fn test_load_sample_scene_json() {
    let scene = sample_scene();
    let json = serde_json::to_string(&scene).unwrap();

    let mut h = EditorHarness::new();
    h.load_scene_json(&json).unwrap();
    assert_eq!(h.object_count(), 3);
    assert_eq!(h.scene.bounds().max_x, 4.0);
}

#[test]
fn test_load_malformed_json_fails_cleanly() {
    let mut h = EditorHarness::new();
    h.add_cube();
    assert!(h.load_scene_json("not json").is_err());
    // The previous scene survives a failed load.
    assert_eq!(h.object_count(), 1);
}

#[test]
fn test_selection_survives_unrelated_edits() {
    let mut h = EditorHarness::new();
    let a = h.add_cube();
    let b = h.add_cube();
    h.select(a);
    h.scene.remove_object(b);
    assert!(h.selection.is_selected(a));
}

#[test]
fn test_load_clears_selection_and_drag() {
    let mut h = EditorHarness::new();
    let id = h.add_cube();
    h.select(id);
    assert!(h.begin_drag(id));

    let json = h.export_scene_json();
    h.load_scene_json(&json).unwrap();
    assert!(h.selection.is_empty());
    assert!(h.camera_enabled());
}
