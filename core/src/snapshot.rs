use rkyv::{Archive, Deserialize, Serialize};

use crate::frame::{
    FrameState, Orientation, Photo, PHOTO_LANDSCAPE_CLASS, PHOTO_PORTRAIT_CLASS,
    PHOTO_SELECTED_CLASS,
};

pub const PHOTO_SET_VERSION: u32 = 1;

pub const PHOTO_POSITION_MODE: &str = "absolute";
pub const PHOTO_CURSOR: &str = "move";
pub const ZERO_PX: &str = "0px";

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub class_list: Vec<String>,
    pub src: String,
    pub id: String,
    pub top: String,
    pub left: String,
    pub position: String,
    pub cursor: String,
}

impl PhotoRecord {
    pub fn from_photo(photo: &Photo) -> Self {
        Self {
            class_list: photo.class_list(),
            src: photo.src.clone(),
            id: photo.id.clone(),
            top: px_string(photo.y),
            left: px_string(photo.x),
            position: PHOTO_POSITION_MODE.to_string(),
            cursor: PHOTO_CURSOR.to_string(),
        }
    }

    pub fn into_photo(&self) -> Photo {
        let orientation = if self.has_class(PHOTO_LANDSCAPE_CLASS) {
            Some(Orientation::Landscape)
        } else if self.has_class(PHOTO_PORTRAIT_CLASS) {
            Some(Orientation::Portrait)
        } else {
            None
        };
        Photo {
            id: self.id.clone(),
            src: self.src.clone(),
            orientation,
            selected: self.has_class(PHOTO_SELECTED_CLASS),
            x: parse_px(&self.left),
            y: parse_px(&self.top),
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|entry| entry == class)
    }
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct PhotoSet {
    pub version: u32,
    pub photos: Vec<PhotoRecord>,
}

impl PhotoSet {
    pub fn from_photos(photos: &[Photo]) -> Self {
        Self {
            version: PHOTO_SET_VERSION,
            photos: photos.iter().map(PhotoRecord::from_photo).collect(),
        }
    }

    pub fn into_photos(&self) -> Vec<Photo> {
        self.photos.iter().map(PhotoRecord::into_photo).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct OverlayClasses {
    pub portrait: String,
    pub landscape: String,
}

impl OverlayClasses {
    pub fn from_state(state: &FrameState) -> Self {
        Self {
            portrait: state.overlays.portrait_class(),
            landscape: state.overlays.landscape_class(),
        }
    }
}

pub fn px_string(value: f64) -> String {
    if value == 0.0 {
        ZERO_PX.to_string()
    } else {
        format!("{value}px")
    }
}

pub fn parse_px(value: &str) -> f64 {
    value.trim().trim_end_matches("px").parse().unwrap_or(0.0)
}
