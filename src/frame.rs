use crate::audio::WebPlayback;
use crate::input::MouseState;
use crate::render;
use mixer_core::Mixer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub mixer: Rc<RefCell<Mixer>>,
    pub playback: Rc<RefCell<WebPlayback>>,
    pub mouse: Rc<RefCell<MouseState>>,
    pub show_help: Rc<RefCell<bool>>,
    pub started: Rc<RefCell<bool>>,
    pub ctx2d: web::CanvasRenderingContext2d,
}

impl FrameContext {
    /// One animation tick: push volume/pan for every source, then redraw.
    pub fn frame(&mut self) {
        let mixer = self.mixer.borrow();
        if *self.started.borrow() {
            mixer.tick(&mut *self.playback.borrow_mut());
        }
        render::draw(
            &self.ctx2d,
            &render::DrawState {
                mixer: &mixer,
                mouse: *self.mouse.borrow(),
                show_help: *self.show_help.borrow(),
            },
        );
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
