use photo_playground_core::codec::{decode_text, encode_text};
use photo_playground_core::frame::{FrameModel, FrameState, OverlayState, Photo};
use photo_playground_core::snapshot::{OverlayClasses, PhotoSet, PHOTO_SET_VERSION};

pub(crate) const PHOTOS_KEY: &str = "photos";
pub(crate) const FRAME_CLASS_KEY: &str = "frame-class";
pub(crate) const OVERLAY_STATUSES_KEY: &str = "overlay-statuses";

pub(crate) struct StoredFrame {
    pub(crate) photos: Vec<Photo>,
    pub(crate) state: FrameState,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

pub(crate) fn save_frame(model: &FrameModel) {
    let Some(storage) = local_storage() else {
        gloo::console::log!("frame store: storage unavailable");
        return;
    };
    let Some(photos) = encode_text(&PhotoSet::from_photos(&model.photos)) else {
        gloo::console::log!("frame store: photo encode failed");
        return;
    };
    let Some(overlays) = encode_text(&OverlayClasses::from_state(&model.state)) else {
        gloo::console::log!("frame store: overlay encode failed");
        return;
    };
    if storage.set_item(PHOTOS_KEY, &photos).is_err()
        || storage
            .set_item(FRAME_CLASS_KEY, &model.state.class_string())
            .is_err()
        || storage.set_item(OVERLAY_STATUSES_KEY, &overlays).is_err()
    {
        gloo::console::log!("frame store: storage set failed");
        return;
    }
    gloo::console::log!("frame store: saved", model.photos.len() as u32);
}

// Missing slots load as defaults, never as errors: no saved photos is an
// empty frame, no saved overlay statuses means both overlays hidden.
pub(crate) fn load_frame() -> StoredFrame {
    let Some(storage) = local_storage() else {
        gloo::console::log!("frame store: storage unavailable");
        return StoredFrame {
            photos: Vec::new(),
            state: FrameState::new(),
        };
    };
    let photos = storage
        .get_item(PHOTOS_KEY)
        .ok()
        .flatten()
        .and_then(|raw| decode_text::<PhotoSet>(&raw))
        .filter(|set| set.version == PHOTO_SET_VERSION)
        .map(|set| set.into_photos())
        .unwrap_or_default();
    let frame_class = storage
        .get_item(FRAME_CLASS_KEY)
        .ok()
        .flatten()
        .unwrap_or_default();
    let mut state = FrameState::from_class_string(&frame_class);
    state.overlays = storage
        .get_item(OVERLAY_STATUSES_KEY)
        .ok()
        .flatten()
        .and_then(|raw| decode_text::<OverlayClasses>(&raw))
        .map(|classes| OverlayState::from_class_strings(&classes.portrait, &classes.landscape))
        .unwrap_or_else(OverlayState::both_off);
    gloo::console::log!("frame store: loaded", photos.len() as u32);
    StoredFrame { photos, state }
}
