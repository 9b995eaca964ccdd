use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent};

use photo_playground_core::frame::FrameModel;
use photo_playground_core::DragGesture;

#[derive(Clone)]
pub(crate) struct ActiveDrag {
    pub(crate) id: String,
    pub(crate) gesture: DragGesture,
}

pub(crate) type DragSlot = Rc<RefCell<Option<ActiveDrag>>>;

pub(crate) fn begin(slot: &DragSlot, id: String, event: &MouseEvent, frame: &HtmlElement) {
    event.prevent_default();
    let gesture = DragGesture::begin(
        event.offset_x() as f64,
        event.offset_y() as f64,
        frame.offset_left() as f64,
        frame.offset_top() as f64,
    );
    *slot.borrow_mut() = Some(ActiveDrag { id, gesture });
}

pub(crate) fn install_listeners(
    frame: &HtmlElement,
    slot: DragSlot,
    model: Rc<RefCell<FrameModel>>,
    refresh: Rc<dyn Fn()>,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    let window = web_sys::window().expect("window available");

    let move_slot = slot.clone();
    let listener = EventListener::new_with_options(
        &window,
        "mousemove",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let Some(active) = move_slot.borrow().clone() else {
                return;
            };
            event.prevent_default();
            let (left, top) = active
                .gesture
                .position_for(event.page_x() as f64, event.page_y() as f64);
            if model.borrow_mut().move_photo(&active.id, left, top) {
                refresh();
            }
        },
    );
    listeners.push(listener);

    // Release stays frame-scoped: a release outside the frame is not
    // observed, and the dangling gesture is superseded by the next press.
    let up_slot = slot;
    let listener = EventListener::new(frame, "mouseup", move |_event: &Event| {
        up_slot.borrow_mut().take();
    });
    listeners.push(listener);

    listeners
}
