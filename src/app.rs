use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use photo_playground_core::frame::{FrameModel, Photo};

use crate::drag::{self, ActiveDrag};
use crate::export;
use crate::ingest;
use crate::storage;

#[function_component(App)]
pub(crate) fn app() -> Html {
    let model = use_mut_ref(FrameModel::new);
    let revision = use_state(|| 0u32);
    let revision_counter = use_mut_ref(|| 0u32);
    let frame_ref = use_node_ref();
    let drag_slot = use_mut_ref(|| None::<ActiveDrag>);

    let refresh: Rc<dyn Fn()> = {
        let revision = revision.clone();
        let counter = revision_counter.clone();
        Rc::new(move || {
            let next = counter.borrow().wrapping_add(1);
            *counter.borrow_mut() = next;
            revision.set(next);
        })
    };

    {
        let model = model.clone();
        let drag_slot = drag_slot.clone();
        let refresh = refresh.clone();
        let frame_ref = frame_ref.clone();
        use_effect_with((), move |_| {
            let frame = frame_ref.cast::<HtmlElement>().expect("frame mounted");
            let drag_listeners =
                drag::install_listeners(&frame, drag_slot, model.clone(), refresh.clone());

            let window = web_sys::window().expect("window available");
            let key_model = model.clone();
            let key_refresh = refresh.clone();
            let keyup = EventListener::new(&window, "keyup", move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.code() != "Backspace" {
                    return;
                }
                if key_model.borrow_mut().delete_selected().is_some() {
                    key_refresh();
                }
            });

            let document = window.document().expect("document available");
            let deselect = EventListener::new(&document, "click", move |event: &Event| {
                let Some(target) = event.target() else {
                    return;
                };
                let Ok(element) = target.dyn_into::<Element>() else {
                    return;
                };
                if element.node_name() == "IMG" {
                    return;
                }
                if model.borrow().selected().is_some() {
                    model.borrow_mut().clear_selection();
                    refresh();
                }
            });

            move || {
                drop(drag_listeners);
                drop(keyup);
                drop(deselect);
            }
        });
    }

    let on_file_change = {
        let model = model.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(files) = input.files() else {
                return;
            };
            let Some(file) = files.get(0) else {
                return;
            };
            let id = model.borrow_mut().ingest(&file.name());
            refresh();
            ingest::load_photo(file, id, model.clone(), refresh.clone());
        })
    };

    let on_save = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| {
            storage::save_frame(&model.borrow());
        })
    };

    let on_load = {
        let model = model.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            let stored = storage::load_frame();
            model.borrow_mut().restore(stored.photos, stored.state);
            refresh();
        })
    };

    let on_rotate = {
        let model = model.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            model.borrow_mut().state.rotate();
            refresh();
        })
    };

    let on_toggle_overlay = {
        let model = model.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            model.borrow_mut().state.toggle_overlay();
            refresh();
        })
    };

    let on_export = {
        let frame_ref = frame_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(frame) = frame_ref.cast::<HtmlElement>() else {
                return;
            };
            if let Err(error) = export::download_frame(&frame) {
                gloo::console::error!("frame export failed", error);
            }
        })
    };

    let photos: Vec<Photo> = model.borrow().photos.clone();
    let state = model.borrow().state;

    html! {
        <main class="playground">
            <header class="controls">
                <input id="file-picker" type="file" accept="image/*" onchange={on_file_change} />
                <button id="save-frame" onclick={on_save}>{ "Save frame" }</button>
                <button id="load-frame" onclick={on_load}>{ "Load frame" }</button>
                <button id="rotate-button" onclick={on_rotate}>{ "Rotate" }</button>
                <button id="toggle-overlay" onclick={on_toggle_overlay}>{ "Toggle overlay" }</button>
                <button id="save-file" onclick={on_export}>{ "Download" }</button>
            </header>
            <div id="photo-frame" class={state.class_string()} ref={frame_ref.clone()}>
                { for photos.iter().map(|photo| {
                    let onmousedown = {
                        let drag_slot = drag_slot.clone();
                        let frame_ref = frame_ref.clone();
                        let id = photo.id.clone();
                        Callback::from(move |event: MouseEvent| {
                            let Some(frame) = frame_ref.cast::<HtmlElement>() else {
                                return;
                            };
                            drag::begin(&drag_slot, id.clone(), &event, &frame);
                        })
                    };
                    let onclick = {
                        let model = model.clone();
                        let refresh = refresh.clone();
                        let id = photo.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            model.borrow_mut().select(&id);
                            refresh();
                        })
                    };
                    let style = format!(
                        "position:absolute;top:{}px;left:{}px;cursor:move",
                        photo.y, photo.x
                    );
                    html! {
                        <img
                            key={photo.id.clone()}
                            id={photo.id.clone()}
                            src={photo.src.clone()}
                            class={photo.class_list().join(" ")}
                            style={style}
                            {onmousedown}
                            {onclick}
                        />
                    }
                }) }
                <img class={state.overlays.portrait_class()} src="overlays/portrait.png" alt="" />
                <img class={state.overlays.landscape_class()} src="overlays/landscape.png" alt="" />
            </div>
        </main>
    }
}
