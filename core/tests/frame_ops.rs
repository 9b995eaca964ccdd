use photo_playground_core::frame::{FrameModel, FrameState, Orientation, OverlayState};
use photo_playground_core::DragGesture;

fn model_with_photos(names: &[&str]) -> FrameModel {
    let mut model = FrameModel::new();
    for name in names {
        model.ingest(name);
    }
    model
}

#[test]
fn ingestion_ids_are_distinct_even_for_repeated_names() {
    let model = model_with_photos(&["cat.jpg", "cat.jpg", "dog.png", "cat.jpg"]);
    let ids: Vec<&str> = model.photos.iter().map(|photo| photo.id.as_str()).collect();
    assert_eq!(ids, vec!["cat.jpg-1", "cat.jpg-2", "dog.png-3", "cat.jpg-4"]);
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn most_recent_ingestion_is_the_only_selection() {
    let model = model_with_photos(&["a.jpg", "b.jpg", "c.jpg"]);
    let selected: Vec<&str> = model
        .photos
        .iter()
        .filter(|photo| photo.selected)
        .map(|photo| photo.id.as_str())
        .collect();
    assert_eq!(selected, vec!["c.jpg-3"]);
}

#[test]
fn new_photo_starts_at_origin_without_orientation() {
    let model = model_with_photos(&["a.jpg"]);
    let photo = &model.photos[0];
    assert_eq!((photo.x, photo.y), (0.0, 0.0));
    assert_eq!(photo.orientation, None);
    assert_eq!(photo.src, "a.jpg");
}

#[test]
fn classification_happens_exactly_once() {
    let mut model = model_with_photos(&["a.jpg"]);
    assert!(model.classify("a.jpg-1", 800, 600));
    assert_eq!(model.photos[0].orientation, Some(Orientation::Landscape));
    assert!(!model.classify("a.jpg-1", 600, 800));
    assert_eq!(model.photos[0].orientation, Some(Orientation::Landscape));
    assert!(!model.classify("missing-9", 800, 600));
}

#[test]
fn rotate_twice_restores_orientation() {
    let mut state = FrameState::new();
    assert_eq!(state.orientation, Orientation::Portrait);
    state.rotate();
    assert_eq!(state.orientation, Orientation::Landscape);
    state.rotate();
    assert_eq!(state.orientation, Orientation::Portrait);
}

#[test]
fn rotate_leaves_disabled_overlays_disabled() {
    let mut state = FrameState::new();
    state.rotate();
    state.rotate();
    assert_eq!(state.overlays, OverlayState::both_off());
}

#[test]
fn rotate_swaps_the_visible_overlay() {
    let mut state = FrameState::new();
    state.toggle_overlay();
    assert!(state.overlays.portrait_on);
    state.rotate();
    assert!(!state.overlays.portrait_on);
    assert!(state.overlays.landscape_on);
    assert_eq!(state.overlays.visible(), Some(state.orientation));
}

#[test]
fn toggle_twice_while_portrait_round_trips() {
    let mut state = FrameState::new();
    state.toggle_overlay();
    assert!(state.overlays.portrait_on);
    assert!(!state.overlays.landscape_on);
    state.toggle_overlay();
    assert!(!state.overlays.portrait_on);
    assert!(!state.overlays.landscape_on);
}

#[test]
fn toggle_while_landscape_forces_portrait_overlay_off() {
    let mut state = FrameState::new();
    state.toggle_overlay();
    state.rotate();
    assert!(state.overlays.landscape_on);
    state.toggle_overlay();
    assert_eq!(state.overlays, OverlayState::both_off());
    state.toggle_overlay();
    assert!(state.overlays.landscape_on);
    assert!(!state.overlays.portrait_on);
}

#[test]
fn click_selection_is_exclusive() {
    let mut model = model_with_photos(&["a.jpg", "b.jpg"]);
    model.select("a.jpg-1");
    assert!(model.photos[0].selected);
    assert!(!model.photos[1].selected);
    model.select("b.jpg-2");
    assert!(!model.photos[0].selected);
    assert!(model.photos[1].selected);
}

#[test]
fn clearing_selection_deselects_everything() {
    let mut model = model_with_photos(&["a.jpg", "b.jpg"]);
    model.clear_selection();
    assert!(model.selected().is_none());
}

#[test]
fn delete_without_selection_is_a_no_op() {
    let mut model = model_with_photos(&["a.jpg", "b.jpg"]);
    model.clear_selection();
    assert!(model.delete_selected().is_none());
    assert_eq!(model.photos.len(), 2);
}

#[test]
fn delete_removes_exactly_the_selected_photo() {
    let mut model = model_with_photos(&["a.jpg", "b.jpg", "c.jpg"]);
    model.select("b.jpg-2");
    let removed = model.delete_selected().expect("photo removed");
    assert_eq!(removed.id, "b.jpg-2");
    let remaining: Vec<&str> = model.photos.iter().map(|photo| photo.id.as_str()).collect();
    assert_eq!(remaining, vec!["a.jpg-1", "c.jpg-3"]);
}

#[test]
fn drag_position_matches_press_and_frame_offsets() {
    let gesture = DragGesture::begin(10.0, 10.0, 50.0, 50.0);
    let (left, top) = gesture.position_for(200.0, 300.0);
    assert_eq!(left, 140.0);
    assert_eq!(top, 240.0);
}

#[test]
fn moved_photo_keeps_its_new_position() {
    let mut model = model_with_photos(&["a.jpg"]);
    assert!(model.move_photo("a.jpg-1", 140.0, 240.0));
    let photo = model.photo("a.jpg-1").expect("photo exists");
    assert_eq!((photo.x, photo.y), (140.0, 240.0));
    assert!(!model.move_photo("missing-7", 1.0, 2.0));
}
