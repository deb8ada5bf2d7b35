use crate::audio::WebPlayback;
use crate::keys::{action_for_key, KeyAction};
use crate::storage::LocalStore;
use mixer_core::{persistence, Mixer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct KeyboardWiring {
    pub mixer: Rc<RefCell<Mixer>>,
    pub playback: Rc<RefCell<WebPlayback>>,
    pub store: Rc<RefCell<LocalStore>>,
    pub show_help: Rc<RefCell<bool>>,
    pub started: Rc<RefCell<bool>>,
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &KeyboardWiring) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleHelp => {
            let mut h = w.show_help.borrow_mut();
            *h = !*h;
        }
        KeyAction::Save => {
            if let Err(e) = persistence::save(&w.mixer.borrow(), &mut *w.store.borrow_mut()) {
                log::warn!("[persist] save failed: {}", e);
            }
        }
        KeyAction::Load => {
            let mut mixer = w.mixer.borrow_mut();
            let previous = mixer.assigned_sounds();
            if persistence::load(&mut mixer, &*w.store.borrow()) && *w.started.borrow() {
                mixer.sync_assignments(&previous, &mut *w.playback.borrow_mut());
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(w: KeyboardWiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
