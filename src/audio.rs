use mixer_core::{Playback, SoundCatalog, SoundId};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Per-clip chain: looping buffer source -> gain -> stereo panner -> destination.
struct SoundHandle {
    buffer: Option<web::AudioBuffer>,
    source: Option<web::AudioBufferSourceNode>,
    gain: web::GainNode,
    panner: web::StereoPannerNode,
}

pub struct WebPlayback {
    audio_ctx: web::AudioContext,
    handles: Vec<SoundHandle>,
}

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

impl WebPlayback {
    /// Build one silent chain per catalog entry. Buffers arrive later via [`WebPlayback::attach_buffer`].
    pub fn new(audio_ctx: &web::AudioContext, catalog: &SoundCatalog) -> Result<Self, ()> {
        let mut handles = Vec::with_capacity(catalog.len());
        for (_, entry) in catalog.iter() {
            let gain = create_gain(audio_ctx, 0.0, &entry.name)?;
            let panner = web::StereoPannerNode::new(audio_ctx).map_err(|e| {
                log::error!("{} StereoPannerNode error: {:?}", entry.name, e);
            })?;
            _ = gain.connect_with_audio_node(&panner);
            _ = panner.connect_with_audio_node(&audio_ctx.destination());
            handles.push(SoundHandle {
                buffer: None,
                source: None,
                gain,
                panner,
            });
        }
        Ok(Self {
            audio_ctx: audio_ctx.clone(),
            handles,
        })
    }

    pub fn attach_buffer(&mut self, sound: SoundId, buffer: web::AudioBuffer) {
        if let Some(h) = self.handles.get_mut(sound.0) {
            h.buffer = Some(buffer);
        }
    }

    pub fn audio_ctx(&self) -> &web::AudioContext {
        &self.audio_ctx
    }
}

impl Playback for WebPlayback {
    fn start_looping(&mut self, sound: SoundId) {
        let Some(h) = self.handles.get_mut(sound.0) else {
            return;
        };
        let (Some(buffer), None) = (&h.buffer, &h.source) else {
            return;
        };
        let src = match self.audio_ctx.create_buffer_source() {
            Ok(s) => s,
            Err(e) => {
                log::error!("[audio] buffer source error for {}: {:?}", sound, e);
                return;
            }
        };
        src.set_buffer(Some(buffer));
        src.set_loop(true);
        _ = src.connect_with_audio_node(&h.gain);
        if let Err(e) = src.start() {
            log::error!("[audio] start error for {}: {:?}", sound, e);
            return;
        }
        h.source = Some(src);
    }

    fn set_volume(&mut self, sound: SoundId, level: f32, ramp_sec: f64) {
        let Some(h) = self.handles.get(sound.0) else {
            return;
        };
        let param = h.gain.gain();
        let now = self.audio_ctx.current_time();
        // Drop any pending fade so the new value is not overridden by automation.
        _ = param.cancel_scheduled_values(now);
        if ramp_sec > 0.0 {
            _ = param.set_value_at_time(param.value(), now);
            _ = param.linear_ramp_to_value_at_time(level, now + ramp_sec);
        } else {
            param.set_value(level);
        }
    }

    fn set_pan(&mut self, sound: SoundId, pan: f32) {
        if let Some(h) = self.handles.get(sound.0) {
            h.panner.pan().set_value(pan);
        }
    }

    fn is_looping(&self, sound: SoundId) -> bool {
        self.handles
            .get(sound.0)
            .map(|h| h.source.is_some())
            .unwrap_or(false)
    }

    fn is_ready(&self, sound: SoundId) -> bool {
        self.handles
            .get(sound.0)
            .map(|h| h.buffer.is_some())
            .unwrap_or(false)
    }
}

/// Fetch and decode one clip.
pub async fn load_clip(audio_ctx: &web::AudioContext, path: &str) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !response.ok() {
        anyhow::bail!("HTTP {} for {}", response.status(), path);
    }
    let bytes: js_sys::ArrayBuffer = JsFuture::from(response.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let decoded = audio_ctx.decode_audio_data(&bytes).map_err(js_err)?;
    let buffer: web::AudioBuffer = JsFuture::from(decoded)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    Ok(buffer)
}
