pub const PHOTO_CLASS: &str = "img";
pub const PHOTO_PORTRAIT_CLASS: &str = "img-portrait";
pub const PHOTO_LANDSCAPE_CLASS: &str = "img-landscape";
pub const PHOTO_SELECTED_CLASS: &str = "selected";

pub const FRAME_BASE_CLASS: &str = "photo-frame";
pub const FRAME_LANDSCAPE_CLASS: &str = "landscape-orientation";

pub const OVERLAY_BASE_CLASS: &str = "overlay";
pub const OVERLAY_PORTRAIT_CLASS: &str = "overlay-portrait";
pub const OVERLAY_LANDSCAPE_CLASS: &str = "overlay-landscape";
pub const OVERLAY_OFF_CLASS: &str = "off";

pub const PHOTO_ID_COUNTER_START: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn classify(width: u32, height: u32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    pub fn photo_class(self) -> &'static str {
        match self {
            Orientation::Portrait => PHOTO_PORTRAIT_CLASS,
            Orientation::Landscape => PHOTO_LANDSCAPE_CLASS,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Portrait
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub portrait_on: bool,
    pub landscape_on: bool,
}

impl OverlayState {
    pub fn both_off() -> Self {
        Self::default()
    }

    pub fn visible(self) -> Option<Orientation> {
        if self.portrait_on {
            Some(Orientation::Portrait)
        } else if self.landscape_on {
            Some(Orientation::Landscape)
        } else {
            None
        }
    }

    // Rotation re-sync: overlays that were never enabled stay hidden,
    // otherwise the on/off roles swap so the visible overlay tracks the
    // new orientation.
    pub fn swap(&mut self) {
        if !self.portrait_on && !self.landscape_on {
            return;
        }
        let portrait_was_on = self.portrait_on;
        self.portrait_on = !portrait_was_on;
        self.landscape_on = portrait_was_on;
    }

    pub fn toggle_for(&mut self, orientation: Orientation) {
        match orientation {
            Orientation::Portrait => {
                self.portrait_on = !self.portrait_on;
                self.landscape_on = false;
            }
            Orientation::Landscape => {
                self.landscape_on = !self.landscape_on;
                self.portrait_on = false;
            }
        }
    }

    pub fn portrait_class(self) -> String {
        overlay_class(OVERLAY_PORTRAIT_CLASS, self.portrait_on)
    }

    pub fn landscape_class(self) -> String {
        overlay_class(OVERLAY_LANDSCAPE_CLASS, self.landscape_on)
    }

    pub fn from_class_strings(portrait: &str, landscape: &str) -> Self {
        Self {
            portrait_on: !has_class(portrait, OVERLAY_OFF_CLASS),
            landscape_on: !has_class(landscape, OVERLAY_OFF_CLASS),
        }
    }
}

fn overlay_class(kind: &str, on: bool) -> String {
    if on {
        format!("{OVERLAY_BASE_CLASS} {kind}")
    } else {
        format!("{OVERLAY_BASE_CLASS} {kind} {OVERLAY_OFF_CLASS}")
    }
}

fn has_class(class_string: &str, class: &str) -> bool {
    class_string.split_whitespace().any(|entry| entry == class)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameState {
    pub orientation: Orientation,
    pub overlays: OverlayState,
}

impl FrameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotate(&mut self) {
        self.orientation = self.orientation.flipped();
        self.overlays.swap();
    }

    pub fn toggle_overlay(&mut self) {
        self.overlays.toggle_for(self.orientation);
    }

    pub fn class_string(&self) -> String {
        match self.orientation {
            Orientation::Portrait => FRAME_BASE_CLASS.to_string(),
            Orientation::Landscape => {
                format!("{FRAME_BASE_CLASS} {FRAME_LANDSCAPE_CLASS}")
            }
        }
    }

    pub fn from_class_string(class_string: &str) -> Self {
        let orientation = if has_class(class_string, FRAME_LANDSCAPE_CLASS) {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        Self {
            orientation,
            overlays: OverlayState::both_off(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub id: String,
    pub src: String,
    pub orientation: Option<Orientation>,
    pub selected: bool,
    pub x: f64,
    pub y: f64,
}

impl Photo {
    pub fn new(id: String, src: String) -> Self {
        Self {
            id,
            src,
            orientation: None,
            selected: false,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn class_list(&self) -> Vec<String> {
        let mut classes = vec![PHOTO_CLASS.to_string()];
        if let Some(orientation) = self.orientation {
            classes.push(orientation.photo_class().to_string());
        }
        if self.selected {
            classes.push(PHOTO_SELECTED_CLASS.to_string());
        }
        classes
    }
}

#[derive(Clone, Debug)]
pub struct FrameModel {
    pub state: FrameState,
    pub photos: Vec<Photo>,
    next_photo: u32,
}

impl FrameModel {
    pub fn new() -> Self {
        Self {
            state: FrameState::new(),
            photos: Vec::new(),
            next_photo: PHOTO_ID_COUNTER_START,
        }
    }

    // Ids stay unique for repeated file names within one session; the
    // counter itself is session-scoped and restarts on page reload.
    pub fn ingest(&mut self, file_name: &str) -> String {
        let id = format!("{}-{}", file_name, self.next_photo);
        self.next_photo += 1;
        let photo = Photo::new(id.clone(), file_name.to_string());
        self.photos.push(photo);
        self.select(&id);
        id
    }

    pub fn photo(&self, id: &str) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.id == id)
    }

    fn photo_mut(&mut self, id: &str) -> Option<&mut Photo> {
        self.photos.iter_mut().find(|photo| photo.id == id)
    }

    pub fn set_src(&mut self, id: &str, src: String) -> bool {
        match self.photo_mut(id) {
            Some(photo) => {
                photo.src = src;
                true
            }
            None => false,
        }
    }

    // Classifies exactly once; later dimension reports are ignored.
    pub fn classify(&mut self, id: &str, width: u32, height: u32) -> bool {
        match self.photo_mut(id) {
            Some(photo) if photo.orientation.is_none() => {
                photo.orientation = Some(Orientation::classify(width, height));
                true
            }
            _ => false,
        }
    }

    pub fn select(&mut self, id: &str) {
        for photo in &mut self.photos {
            photo.selected = photo.id == id;
        }
    }

    pub fn clear_selection(&mut self) {
        for photo in &mut self.photos {
            photo.selected = false;
        }
    }

    pub fn selected(&self) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.selected)
    }

    pub fn delete_selected(&mut self) -> Option<Photo> {
        let index = self.photos.iter().position(|photo| photo.selected)?;
        Some(self.photos.remove(index))
    }

    pub fn move_photo(&mut self, id: &str, x: f64, y: f64) -> bool {
        match self.photo_mut(id) {
            Some(photo) => {
                photo.x = x;
                photo.y = y;
                true
            }
            None => false,
        }
    }

    // Full replace from a loaded snapshot. The ingestion counter is left
    // untouched on purpose: restored photos keep their persisted ids while
    // new ingestions continue from the session counter.
    pub fn restore(&mut self, mut photos: Vec<Photo>, state: FrameState) {
        let mut selection_seen = false;
        for photo in &mut photos {
            if photo.selected {
                if selection_seen {
                    photo.selected = false;
                } else {
                    selection_seen = true;
                }
            }
        }
        self.photos = photos;
        self.state = state;
    }
}

impl Default for FrameModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_width_equal_height_is_portrait() {
        assert_eq!(Orientation::classify(300, 300), Orientation::Portrait);
        assert_eq!(Orientation::classify(299, 300), Orientation::Portrait);
        assert_eq!(Orientation::classify(301, 300), Orientation::Landscape);
    }

    #[test]
    fn overlay_swap_keeps_both_off() {
        let mut overlays = OverlayState::both_off();
        overlays.swap();
        assert_eq!(overlays, OverlayState::both_off());
    }

    #[test]
    fn overlay_swap_moves_the_on_side() {
        let mut overlays = OverlayState {
            portrait_on: true,
            landscape_on: false,
        };
        overlays.swap();
        assert!(!overlays.portrait_on);
        assert!(overlays.landscape_on);
        overlays.swap();
        assert!(overlays.portrait_on);
        assert!(!overlays.landscape_on);
    }

    #[test]
    fn frame_class_round_trips_orientation() {
        let mut state = FrameState::new();
        state.rotate();
        let parsed = FrameState::from_class_string(&state.class_string());
        assert_eq!(parsed.orientation, Orientation::Landscape);
        assert_eq!(FrameState::from_class_string("").orientation, Orientation::Portrait);
    }

    #[test]
    fn restore_keeps_at_most_one_selection() {
        let mut model = FrameModel::new();
        let mut first = Photo::new("a-1".to_string(), "a".to_string());
        let mut second = Photo::new("b-2".to_string(), "b".to_string());
        first.selected = true;
        second.selected = true;
        model.restore(vec![first, second], FrameState::new());
        assert_eq!(model.photos.iter().filter(|photo| photo.selected).count(), 1);
        assert!(model.photos[0].selected);
    }
}
