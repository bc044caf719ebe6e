use crate::constants::FILTER_Q;
use crate::core::constants::{
    FILTER_CUTOFF_MAX_HZ, MOD_DEPTH_MIN, MOD_RATE_MIN_HZ, PITCH_MIN_HZ,
};
use crate::core::Synth;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn create_oscillator(
    audio_ctx: &web::AudioContext,
    kind: web::OscillatorType,
    hz: f32,
    label: &str,
) -> anyhow::Result<web::OscillatorNode> {
    let o = web::OscillatorNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} OscillatorNode error: {:?}", label, e))?;
    o.set_type(kind);
    o.frequency().set_value(hz);
    Ok(o)
}

fn await_logged(what: &'static str, promise: js_sys::Promise) {
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("[audio] context {} done", what),
            Err(e) => log::error!("[audio] {} error: {:?}", what, e),
        }
    });
}

/// WebAudio rendition of the rope synth.
///
/// Graph: `lfo -> depth -> carrier.frequency`, `carrier -> lowpass -> out ->
/// destination`. Built silent; the mapper raises the output gain.
pub struct WebSynth {
    audio_ctx: web::AudioContext,
    carrier: web::OscillatorNode,
    lfo: web::OscillatorNode,
    depth: web::GainNode,
    filter: web::BiquadFilterNode,
    out: web::GainNode,
    /// Smoothing for the setters whose signature carries no ramp.
    tau_sec: f32,
}

impl WebSynth {
    /// `tau_sec` is the mapper's ramp constant, reused for rate, depth and
    /// cutoff so one config value smooths every parameter.
    pub fn new(tau_sec: f32) -> anyhow::Result<Self> {
        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        // Created inside a pointer gesture, so resume is allowed here.
        if audio_ctx.state() == web::AudioContextState::Suspended {
            if let Ok(p) = audio_ctx.resume() {
                await_logged("resume", p);
            }
        }

        let carrier = create_oscillator(
            &audio_ctx,
            web::OscillatorType::Sawtooth,
            PITCH_MIN_HZ,
            "Carrier",
        )?;
        let lfo =
            create_oscillator(&audio_ctx, web::OscillatorType::Sine, MOD_RATE_MIN_HZ, "LFO")?;
        let depth = create_gain(&audio_ctx, MOD_DEPTH_MIN, "Mod depth")?;
        let filter = web::BiquadFilterNode::new(&audio_ctx)
            .map_err(|e| anyhow::anyhow!("BiquadFilterNode error: {:?}", e))?;
        filter.set_type(web::BiquadFilterType::Lowpass);
        filter.frequency().set_value(FILTER_CUTOFF_MAX_HZ);
        filter.q().set_value(FILTER_Q);
        let out = create_gain(&audio_ctx, 0.0, "Output")?;

        _ = lfo.connect_with_audio_node(&depth);
        _ = depth.connect_with_audio_param(&carrier.frequency());
        _ = carrier.connect_with_audio_node(&filter);
        _ = filter.connect_with_audio_node(&out);
        _ = out.connect_with_audio_node(&audio_ctx.destination());

        Ok(Self {
            audio_ctx,
            carrier,
            lfo,
            depth,
            filter,
            out,
            tau_sec,
        })
    }

    #[inline]
    fn ramp(&self, param: web::AudioParam, value: f32, tau_sec: f32) {
        if !value.is_finite() {
            return;
        }
        let now = self.audio_ctx.current_time();
        _ = param.set_target_at_time(value, now, tau_sec.max(1e-3) as f64);
    }
}

impl Synth for WebSynth {
    fn set_oscillator_frequency(&mut self, hz: f32, ramp_sec: f32) {
        self.ramp(self.carrier.frequency(), hz, ramp_sec);
    }

    fn set_modulation_rate(&mut self, hz: f32) {
        self.ramp(self.lfo.frequency(), hz, self.tau_sec);
    }

    fn set_modulation_depth(&mut self, value: f32) {
        self.ramp(self.depth.gain(), value, self.tau_sec);
    }

    fn set_filter_cutoff(&mut self, hz: f32) {
        self.ramp(self.filter.frequency(), hz, self.tau_sec);
    }

    fn set_gain(&mut self, value: f32, ramp_sec: f32) {
        self.ramp(self.out.gain(), value, ramp_sec);
    }

    fn start(&mut self) {
        let t0 = self.audio_ctx.current_time();
        _ = self.carrier.start_with_when(t0);
        _ = self.lfo.start_with_when(t0);
    }

    fn stop(&mut self) {
        _ = self.carrier.stop();
        _ = self.lfo.stop();
    }

    fn close(&mut self) {
        _ = self.out.disconnect();
        match self.audio_ctx.close() {
            Ok(promise) => await_logged("close", promise),
            Err(e) => log::error!("[audio] close error: {:?}", e),
        }
    }
}
