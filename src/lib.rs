#![cfg(target_arch = "wasm32")]
use mixer_core::{LoadTracker, Mixer, MixerConfig, Session, SoundCatalog};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod keys;
mod overlay;
mod render;
mod storage;

const CANVAS_ID: &str = "app-canvas";
const CONFIG_ATTR: &str = "data-mixer-config";

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, mixer: &Rc<RefCell<Mixer>>) {
    let (w, h) = dom::sync_canvas_size(canvas);
    mixer.borrow_mut().set_viewport(w, h);
    let canvas_resize = canvas.clone();
    let mixer_resize = mixer.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_size(&canvas_resize);
        mixer_resize.borrow_mut().set_viewport(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Optional JSON overrides from `<canvas data-mixer-config='{...}'>`.
fn read_config(canvas: &web::HtmlCanvasElement) -> MixerConfig {
    match canvas.get_attribute(CONFIG_ATTR) {
        Some(json) => MixerConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("[config] ignoring {}: {}", CONFIG_ATTR, e);
            MixerConfig::default()
        }),
        None => MixerConfig::default(),
    }
}

/// Kick off one fetch+decode per catalog entry; each completion settles the tracker.
fn load_assets(
    audio_ctx: &web::AudioContext,
    mixer: &Rc<RefCell<Mixer>>,
    playback: &Rc<RefCell<audio::WebPlayback>>,
    tracker: &Rc<RefCell<LoadTracker>>,
    document: &web::Document,
) {
    let entries: Vec<_> = mixer
        .borrow()
        .catalog
        .iter()
        .map(|(id, e)| (id, e.asset_path.clone()))
        .collect();
    overlay::update_progress(document, 0, entries.len(), 0);

    for (id, path) in entries {
        let audio_ctx = audio_ctx.clone();
        let playback = playback.clone();
        let tracker = tracker.clone();
        let document = document.clone();
        spawn_local(async move {
            match audio::load_clip(&audio_ctx, &path).await {
                Ok(buffer) => {
                    playback.borrow_mut().attach_buffer(id, buffer);
                    tracker.borrow_mut().mark_loaded(id);
                }
                Err(e) => {
                    log::warn!("[assets] {}: {:?}", path, e);
                    tracker.borrow_mut().mark_failed(id);
                }
            }
            let t = tracker.borrow();
            let (settled, total) = t.progress();
            overlay::update_progress(&document, settled, total, t.failed().len());
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mixer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let catalog = SoundCatalog::default();
    let mixer = Rc::new(RefCell::new(Mixer::new(read_config(&canvas), catalog)));
    wire_canvas_resize(&canvas, &mixer);

    // The context starts suspended until the start button provides a user gesture.
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let playback = Rc::new(RefCell::new(
        audio::WebPlayback::new(&audio_ctx, &mixer.borrow().catalog)
            .map_err(|_| anyhow::anyhow!("audio graph setup failed"))?,
    ));
    let tracker = Rc::new(RefCell::new(LoadTracker::new(mixer.borrow().catalog.len())));
    load_assets(&audio_ctx, &mixer, &playback, &tracker, &document);

    let started = Rc::new(RefCell::new(false));
    {
        let started = started.clone();
        let mixer = mixer.clone();
        let playback = playback.clone();
        let tracker = tracker.clone();
        let document_hide = document.clone();
        dom::add_click_listener(&document, overlay::start_button_id(), move || {
            if *started.borrow() || !tracker.borrow().is_ready() {
                return;
            }
            let pb = playback.borrow();
            _ = pb.audio_ctx().resume();
            drop(pb);
            mixer.borrow().start_playback(&mut *playback.borrow_mut());
            *started.borrow_mut() = true;
            overlay::hide(&document_hide);
        });
    }

    let session = Rc::new(RefCell::new(Session::Idle));
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    let show_help = Rc::new(RefCell::new(true));
    let store = Rc::new(RefCell::new(storage::LocalStore::new()));

    events::wire_global_keydown(events::KeyboardWiring {
        mixer: mixer.clone(),
        playback: playback.clone(),
        store,
        show_help: show_help.clone(),
        started: started.clone(),
    });
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        mixer: mixer.clone(),
        playback: playback.clone(),
        session,
        mouse_state: mouse_state.clone(),
        started: started.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        mixer,
        playback,
        mouse: mouse_state,
        show_help,
        started,
        ctx2d,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
