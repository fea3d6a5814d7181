//! Player state that does not touch the media element. Components mutate a
//! `PlayerState` and the video bridge mirrors the result onto the element.

pub const DEFAULT_VOLUME: f64 = 1.0;
pub const DEFAULT_SPEED_STEP: f64 = 0.5;
pub const DEFAULT_MAX_PLAYBACK_RATE: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Low,
    Muted,
}

impl VolumeIcon {
    pub fn for_volume(volume: f64) -> Self {
        if volume <= 0.0 {
            VolumeIcon::Muted
        } else {
            VolumeIcon::Low
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            VolumeIcon::Low => "volume-low",
            VolumeIcon::Muted => "volume-x",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub current_index: usize,
    pub is_playing: bool,
    pub volume: f64,
    /// Level to restore when unmuting.
    pub volume_before_mute: Option<f64>,
    pub playback_rate: f64,
    pub current_time: f64,
    pub duration: f64,
    /// Bumped when the loaded source must start over without its index changing.
    pub reload_requests: u64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            volume: DEFAULT_VOLUME,
            volume_before_mute: None,
            playback_rate: 1.0,
            current_time: 0.0,
            duration: 0.0,
            reload_requests: 0,
        }
    }
}

impl PlayerState {
    pub fn toggle_play(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        self.is_playing
    }

    /// Moves to the next catalog entry, wrapping to the first. Returns the new
    /// index, or `None` for an empty catalog.
    pub fn advance(&mut self, catalog_len: usize) -> Option<usize> {
        let next = next_index(self.current_index, catalog_len)?;
        self.select(next);
        Some(next)
    }

    /// Switches to `index` and marks playback as wanted. Position resets until
    /// the element reports the new source. Selecting the loaded index asks for
    /// a reload, since the element's source does not change.
    pub fn select(&mut self, index: usize) {
        if index == self.current_index {
            self.reload_requests = self.reload_requests.wrapping_add(1);
        }
        self.current_index = index;
        self.is_playing = true;
        self.current_time = 0.0;
        self.duration = 0.0;
    }

    pub fn update_time(&mut self, current_time: f64, duration: f64) {
        self.current_time = if current_time.is_finite() {
            current_time.max(0.0)
        } else {
            0.0
        };
        self.duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
    }

    /// Seek bar position in percent.
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current_time, self.duration)
    }

    /// Target time for a seek bar value. `None` while the duration is unknown.
    pub fn seek_target(&self, percent: f64) -> Option<f64> {
        seek_time(percent, self.duration)
    }

    pub fn set_volume(&mut self, volume: f64) -> f64 {
        self.volume = clamp_volume(volume);
        if self.volume > 0.0 {
            self.volume_before_mute = None;
        }
        self.volume
    }

    /// Mutes when audible, restores the previous level when muted.
    pub fn toggle_mute(&mut self) -> f64 {
        if self.volume > 0.0 {
            self.volume_before_mute = Some(self.volume);
            self.volume = 0.0;
        } else {
            self.volume = self
                .volume_before_mute
                .take()
                .filter(|v| *v > 0.0)
                .unwrap_or(DEFAULT_VOLUME);
        }
        self.volume
    }

    pub fn volume_icon(&self) -> VolumeIcon {
        VolumeIcon::for_volume(self.volume)
    }

    pub fn speed_up(&mut self, step: f64, max_rate: f64) -> f64 {
        self.playback_rate = next_playback_rate(self.playback_rate, step, max_rate);
        self.playback_rate
    }
}

pub fn next_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = current.saturating_add(1);
    Some(if next >= len { 0 } else { next })
}

pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current_time.is_finite() {
        return 0.0;
    }
    (current_time / duration * 100.0).clamp(0.0, 100.0)
}

pub fn seek_time(percent: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 || !percent.is_finite() {
        return None;
    }
    Some(percent.clamp(0.0, 100.0) / 100.0 * duration)
}

pub fn clamp_volume(volume: f64) -> f64 {
    if volume.is_finite() {
        volume.clamp(0.0, 1.0)
    } else {
        DEFAULT_VOLUME
    }
}

/// Raises the rate by `step`; once that would pass `max_rate` the rate wraps
/// back to normal speed.
pub fn next_playback_rate(current: f64, step: f64, max_rate: f64) -> f64 {
    let step = if step.is_finite() && step > 0.0 {
        step
    } else {
        DEFAULT_SPEED_STEP
    };
    let next = current + step;
    if !next.is_finite() || next > max_rate + f64::EPSILON {
        1.0
    } else {
        next
    }
}

pub fn rate_label(rate: f64) -> String {
    let label = format!("{rate:.2}");
    let label = label.trim_end_matches('0').trim_end_matches('.');
    format!("{label}x")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_start() {
        assert_eq!(next_index(0, 4), Some(1));
        assert_eq!(next_index(3, 4), Some(0));
        assert_eq!(next_index(9, 4), Some(0));
        assert_eq!(next_index(0, 1), Some(0));
        assert_eq!(next_index(0, 0), None);
    }

    #[test]
    fn advance_starts_playback_and_resets_position() {
        let mut state = PlayerState {
            current_index: 3,
            current_time: 42.0,
            duration: 60.0,
            ..Default::default()
        };
        assert_eq!(state.advance(4), Some(0));
        assert!(state.is_playing);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.duration, 0.0);
    }

    #[test]
    fn selecting_the_loaded_video_requests_a_reload() {
        let mut state = PlayerState {
            current_index: 2,
            current_time: 30.0,
            duration: 60.0,
            ..Default::default()
        };
        state.select(2);
        assert_eq!(state.reload_requests, 1);
        assert!(state.is_playing);
        assert_eq!(state.current_time, 0.0);

        state.select(0);
        assert_eq!(state.reload_requests, 1);
    }

    #[test]
    fn next_in_a_single_video_catalog_reloads() {
        let mut state = PlayerState::default();
        assert_eq!(state.advance(1), Some(0));
        assert_eq!(state.reload_requests, 1);
        assert_eq!(state.advance(1), Some(0));
        assert_eq!(state.reload_requests, 2);
    }

    #[test]
    fn toggle_play_flips() {
        let mut state = PlayerState::default();
        assert!(state.toggle_play());
        assert!(!state.toggle_play());
    }

    #[test]
    fn progress_and_seek() {
        assert_eq!(progress_percent(30.0, 120.0), 25.0);
        assert_eq!(progress_percent(5.0, f64::NAN), 0.0);
        assert_eq!(progress_percent(5.0, 0.0), 0.0);
        assert_eq!(seek_time(50.0, 90.0), Some(45.0));
        assert_eq!(seek_time(150.0, 90.0), Some(90.0));
        assert_eq!(seek_time(-5.0, 90.0), Some(0.0));
        assert_eq!(seek_time(50.0, f64::NAN), None);
    }

    #[test]
    fn time_update_ignores_non_finite_values() {
        let mut state = PlayerState::default();
        state.update_time(12.5, f64::NAN);
        assert_eq!(state.current_time, 12.5);
        assert_eq!(state.duration, 0.0);
        assert_eq!(state.seek_target(50.0), None);
        state.update_time(12.5, 50.0);
        assert_eq!(state.progress_percent(), 25.0);
        assert_eq!(state.seek_target(10.0), Some(5.0));
    }

    #[test]
    fn mute_restores_previous_level() {
        let mut state = PlayerState::default();
        state.set_volume(0.4);
        assert_eq!(state.toggle_mute(), 0.0);
        assert_eq!(state.volume_icon(), VolumeIcon::Muted);
        assert_eq!(state.toggle_mute(), 0.4);
        assert_eq!(state.volume_icon(), VolumeIcon::Low);
    }

    #[test]
    fn unmuting_slider_zero_uses_default() {
        let mut state = PlayerState::default();
        state.set_volume(0.0);
        assert_eq!(state.volume_icon(), VolumeIcon::Muted);
        assert_eq!(state.toggle_mute(), DEFAULT_VOLUME);
    }

    #[test]
    fn slider_clamps_and_forgets_mute() {
        let mut state = PlayerState::default();
        state.toggle_mute();
        assert_eq!(state.set_volume(1.7), 1.0);
        assert_eq!(state.volume_before_mute, None);
        assert_eq!(state.set_volume(f64::NAN), DEFAULT_VOLUME);
    }

    #[test]
    fn speed_steps_then_wraps() {
        let mut state = PlayerState::default();
        let rates: Vec<f64> = (0..7).map(|_| state.speed_up(0.5, 4.0)).collect();
        assert_eq!(rates, vec![1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 1.0]);
    }

    #[test]
    fn bad_step_falls_back() {
        assert_eq!(next_playback_rate(1.0, 0.0, 4.0), 1.5);
        assert_eq!(next_playback_rate(1.0, f64::NAN, 4.0), 1.5);
    }

    #[test]
    fn rate_labels() {
        assert_eq!(rate_label(1.0), "1x");
        assert_eq!(rate_label(1.5), "1.5x");
        assert_eq!(rate_label(1.25), "1.25x");
    }
}
