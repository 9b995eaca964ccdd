pub mod codec;
pub mod drag;
pub mod frame;
pub mod snapshot;

pub use codec::{decode, decode_text, encode, encode_text};
pub use drag::DragGesture;
pub use frame::{FrameModel, FrameState, Orientation, OverlayState, Photo};
pub use snapshot::{OverlayClasses, PhotoRecord, PhotoSet, PHOTO_SET_VERSION};
