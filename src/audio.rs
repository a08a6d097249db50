//! Audio: looping background music plus short synthesized effects
//!
//! Everything here is best effort. Browsers block playback until the first
//! user gesture; those rejections are logged and otherwise ignored.

use crate::sim::{GameEvent, PowerUpKind};

/// Background track, relative to the page
pub const MUSIC_URL: &str = "bg_music.wav";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Food eaten
    Eat,
    /// Grow power-up
    Grow,
    /// Invincibility picked up
    Shield,
    /// Speed boost picked up
    Boost,
    /// Snake crashed
    GameOver,
}

impl SoundEffect {
    /// Which effect, if any, a game event should make
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::FoodEaten { .. } => Some(SoundEffect::Eat),
            GameEvent::PowerUpCollected(PowerUpKind::Grow) => Some(SoundEffect::Grow),
            GameEvent::PowerUpCollected(PowerUpKind::Invincible) => Some(SoundEffect::Shield),
            GameEvent::SpeedBoostCollected { .. } => Some(SoundEffect::Boost),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::PowerExpired(_)
            | GameEvent::SpeedBoostExpired { .. }
            | GameEvent::Reset => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{AudioContext, GainNode, HtmlAudioElement, OscillatorNode, OscillatorType};

    use super::{MUSIC_URL, SoundEffect};
    use crate::settings::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        music: Option<HtmlAudioElement>,
        ctx: Option<AudioContext>,
        music_enabled: bool,
        sfx_enabled: bool,
        sfx_volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            let music = HtmlAudioElement::new_with_src(MUSIC_URL).ok();
            match &music {
                Some(m) => {
                    m.set_loop(true);
                    m.set_volume(f64::from(settings.music_volume));
                }
                None => log::warn!("Failed to create music element - music disabled"),
            }

            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - effects disabled");
            }

            Self {
                music,
                ctx,
                music_enabled: settings.music_enabled,
                sfx_enabled: settings.sfx_enabled,
                sfx_volume: settings.sfx_volume,
            }
        }

        pub fn music_enabled(&self) -> bool {
            self.music_enabled
        }

        /// Turn the music on or off
        pub fn set_music(&mut self, enabled: bool) {
            self.music_enabled = enabled;
            if enabled {
                self.start_music();
            } else if let Some(m) = &self.music {
                let _ = m.pause();
            }
        }

        /// Try to start the music if it is enabled. Safe to call repeatedly;
        /// the first user gesture usually unblocks it.
        pub fn start_music(&self) {
            if !self.music_enabled {
                return;
            }
            let Some(m) = &self.music else { return };
            if !m.paused() {
                return;
            }
            match m.play() {
                Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                    if JsFuture::from(promise).await.is_err() {
                        log::warn!("Music playback blocked until user interaction");
                    }
                }),
                Err(_) => log::warn!("Music playback failed"),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if !self.sfx_enabled || self.sfx_volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let vol = self.sfx_volume;
            match effect {
                SoundEffect::Eat => {
                    self.blip(ctx, 520.0, 880.0, 0.08, vol * 0.35, OscillatorType::Sine)
                }
                SoundEffect::Grow => {
                    self.blip(ctx, 330.0, 660.0, 0.18, vol * 0.3, OscillatorType::Triangle)
                }
                SoundEffect::Shield => {
                    self.blip(ctx, 440.0, 1320.0, 0.3, vol * 0.25, OscillatorType::Square)
                }
                SoundEffect::Boost => {
                    self.blip(ctx, 200.0, 1600.0, 0.22, vol * 0.25, OscillatorType::Sawtooth)
                }
                SoundEffect::GameOver => {
                    self.blip(ctx, 300.0, 60.0, 0.5, vol * 0.4, OscillatorType::Sawtooth)
                }
            }
        }

        // === Sound generators ===

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Single sweep from `from` to `to` Hz with an exponential fade
        fn blip(
            &self,
            ctx: &AudioContext,
            from: f32,
            to: f32,
            secs: f64,
            vol: f32,
            osc_type: OscillatorType,
        ) {
            let Some((osc, gain)) = self.create_osc(ctx, from, osc_type) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + secs)
                .ok();
            osc.frequency().set_value_at_time(from, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(to, t + secs)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + secs + 0.05).ok();
        }
    }
}
