use crate::audio::WebPlayback;
use crate::input;
use mixer_core::{interaction, Mixer, PressTarget, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub mixer: Rc<RefCell<Mixer>>,
    pub playback: Rc<RefCell<WebPlayback>>,
    pub session: Rc<RefCell<Session>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
    pub started: Rc<RefCell<bool>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
}

fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();

    add_listener(&target, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ms = w.mouse_state.borrow_mut();
            ms.x = pos.x;
            ms.y = pos.y;
            ms.inside = true;
        }

        let session = *w.session.borrow();
        if session.is_idle() {
            return;
        }
        let mut mixer = w.mixer.borrow_mut();
        let pointer = mixer.viewport.pointer(pos);
        interaction::drag(&mut mixer, &session, &pointer);
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();

    add_listener(&target, "pointerdown", move |ev: web::PointerEvent| {
        if !*w.started.borrow() {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut mixer = w.mixer.borrow_mut();
        let pointer = mixer.viewport.pointer(pos);
        let target = interaction::press(
            &mut mixer,
            &mut w.session.borrow_mut(),
            &pointer,
            &mut *w.playback.borrow_mut(),
        );
        if target != PressTarget::Nothing {
            log::debug!("[pointer] press -> {:?}", target);
        }
        ev.prevent_default();
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let Some(wnd) = web::window() else {
        return;
    };

    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        add_listener(&wnd, event, move |_ev: web::PointerEvent| {
            interaction::release(&mut w.mixer.borrow_mut(), &mut w.session.borrow_mut());
        });
    }
}

// Leaving the canvas ends any drag in progress.
fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();

    add_listener(&target, "pointerleave", move |_ev: web::PointerEvent| {
        w.mouse_state.borrow_mut().inside = false;
        interaction::release(&mut w.mixer.borrow_mut(), &mut w.session.borrow_mut());
    });
}
