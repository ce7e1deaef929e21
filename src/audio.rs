use crate::constants::*;
use crate::dom;
use crate::style;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;
use zwarp_core::constants::ANALYSER_FFT_SIZE;
use zwarp_core::{bass_level, Latch, LoudnessProvider, Silence};

/// Loudness source read by the frame loop. Silent until audio starts.
pub type SharedLoudness = Rc<RefCell<Box<dyn LoudnessProvider>>>;

pub fn silent_loudness() -> SharedLoudness {
    Rc::new(RefCell::new(Box::new(Silence)))
}

/// Bass level from a WebAudio analyser tapped between the music element
/// and the speakers.
pub struct AnalyserLoudness {
    _audio_ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    bins: Vec<u8>,
}

impl LoudnessProvider for AnalyserLoudness {
    fn sample(&mut self) -> u8 {
        self.analyser.get_byte_frequency_data(&mut self.bins);
        bass_level(&self.bins)
    }
}

// source -> analyser -> destination
fn build_analyser_graph(music: &web::HtmlAudioElement) -> anyhow::Result<AnalyserLoudness> {
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow!("AudioContext: {:?}", e))?;
    let track = audio_ctx
        .create_media_element_source(music)
        .map_err(|e| anyhow!("MediaElementSource: {:?}", e))?;
    let analyser =
        web::AnalyserNode::new(&audio_ctx).map_err(|e| anyhow!("AnalyserNode: {:?}", e))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    let bins = vec![0u8; analyser.frequency_bin_count() as usize];

    track
        .connect_with_audio_node(&analyser)
        .map_err(|e| anyhow!("connect source: {:?}", e))?;
    analyser
        .connect_with_audio_node(&audio_ctx.destination())
        .map_err(|e| anyhow!("connect analyser: {:?}", e))?;

    Ok(AnalyserLoudness {
        _audio_ctx: audio_ctx,
        analyser,
        bins,
    })
}

fn play(music: &web::HtmlAudioElement) {
    match music.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] play error: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[audio] play error: {:?}", e),
    }
}

/// Start music and loudness analysis. Runs once per page; later calls are
/// ignored. If the analyser graph cannot be built the music still plays and
/// loudness stays silent.
pub fn start(latch: &RefCell<Latch>, loudness: &SharedLoudness, music: &web::HtmlAudioElement) {
    if !latch.borrow_mut().fire() {
        log::debug!("[audio] already started");
        return;
    }
    match build_analyser_graph(music) {
        Ok(analyser) => {
            music.set_volume(INITIAL_VOLUME);
            *loudness.borrow_mut() = Box::new(analyser);
            log::info!("[audio] analyser ready");
        }
        Err(e) => log::warn!("[audio] web audio unavailable, continuing without loudness: {e:#}"),
    }
    play(music);
}

pub fn music_element(document: &web::Document) -> Option<web::HtmlAudioElement> {
    document
        .get_element_by_id(MUSIC_ID)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
}

pub fn wire_volume_controls(document: &web::Document, music: &web::HtmlAudioElement) {
    let icon = document.get_element_by_id(VOLUME_ICON_ID);

    if let Some(slider) = document
        .get_element_by_id(VOLUME_SLIDER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        let music = music.clone();
        let icon = icon.clone();
        let slider_read = slider.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let Some(volume) = style::parse_number_attr(&slider_read.value()) else {
                return;
            };
            let volume = volume.clamp(0.0, 1.0);
            music.set_volume(volume);
            if let Some(icon) = &icon {
                icon.set_class_name(style::volume_icon_class(volume));
            }
        }) as Box<dyn FnMut()>);
        _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(icon) = icon {
        let music = music.clone();
        dom::add_click_listener(document, VOLUME_ICON_ID, move || {
            let muted = !music.muted();
            music.set_muted(muted);
            icon.set_class_name(style::mute_icon_class(muted));
        });
    }
}
