//! VCR-style playback over a recorded [`Run`]
//!
//! - [`timer`]: the cancellable interval timer behind auto-play
//!
//! # State Machine
//!
//! ```text
//! Idle --load--> Ready --play--> Playing <--pause/play--> Paused
//!                                   |
//!                          reaches last step
//!                                   v
//!                                Complete --play--> Playing (from step 0)
//! ```
//!
//! `reset` returns to `Idle` from anywhere and discards the run. Manual
//! stepping works in every state except `Idle` and clamps the cursor to the
//! run. The host calls [`Playback::tick`] with the current instant; only the
//! live timer schedule can move the cursor.

pub mod timer;

use crate::errors::{VizError, VizResult};
use crate::snapshot::{Run, Step};
use clap::ValueEnum;
use std::fmt;
use std::time::{Duration, Instant};
pub use timer::{IntervalTimer, TimerToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Ready,
    Playing,
    Paused,
    Complete,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Ready => "ready",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
            PlaybackState::Complete => "complete",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Discrete playback speeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Speed {
    #[value(name = "0.5x")]
    Half,
    #[default]
    #[value(name = "1x")]
    Normal,
    #[value(name = "2x")]
    Double,
    #[value(name = "4x")]
    Quadruple,
}

impl Speed {
    /// Time between automatic steps
    pub fn interval(self) -> Duration {
        Duration::from_millis(match self {
            Speed::Half => 1000,
            Speed::Normal => 500,
            Speed::Double => 250,
            Speed::Quadruple => 100,
        })
    }

    pub fn faster(self) -> Self {
        match self {
            Speed::Half => Speed::Normal,
            Speed::Normal => Speed::Double,
            Speed::Double | Speed::Quadruple => Speed::Quadruple,
        }
    }

    pub fn slower(self) -> Self {
        match self {
            Speed::Quadruple => Speed::Double,
            Speed::Double => Speed::Normal,
            Speed::Normal | Speed::Half => Speed::Half,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Half => "0.5x",
            Speed::Normal => "1x",
            Speed::Double => "2x",
            Speed::Quadruple => "4x",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cursor, state and timer over at most one loaded run
#[derive(Debug)]
pub struct Playback {
    run: Option<Run>,
    cursor: usize,
    state: PlaybackState,
    speed: Speed,
    timer: IntervalTimer,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(Speed::default())
    }
}

impl Playback {
    pub fn new(speed: Speed) -> Self {
        Playback {
            run: None,
            cursor: 0,
            state: PlaybackState::Idle,
            speed,
            timer: IntervalTimer::new(speed.interval()),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Number of steps in the loaded run
    pub fn len(&self) -> usize {
        self.run.as_ref().map_or(0, Run::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Step under the cursor
    pub fn current_step(&self) -> Option<&Step> {
        self.run.as_ref().and_then(|run| run.get(self.cursor))
    }

    /// Token of the live auto-play schedule, if any
    pub fn timer_token(&self) -> Option<TimerToken> {
        self.timer.token()
    }

    /// Replace the loaded run, cancelling any auto-play
    pub fn load(&mut self, run: Run) {
        self.timer.cancel();
        tracing::debug!(steps = run.len(), "playback loaded run");
        self.run = Some(run);
        self.cursor = 0;
        self.state = PlaybackState::Ready;
    }

    /// Back to `Idle`, discarding the run
    pub fn reset(&mut self) {
        self.timer.cancel();
        if self.state != PlaybackState::Idle {
            tracing::debug!(from = %self.state, "playback reset");
        }
        self.run = None;
        self.cursor = 0;
        self.state = PlaybackState::Idle;
    }

    /// Stop auto-play without discarding the run
    pub fn halt(&mut self) {
        if self.state == PlaybackState::Playing {
            self.pause();
        }
    }

    pub fn play(&mut self, now: Instant) -> VizResult<()> {
        let last = self.last_index()?;
        match self.state {
            PlaybackState::Playing => return Ok(()),
            PlaybackState::Complete => self.cursor = 0,
            _ => {}
        }
        if self.cursor >= last {
            self.state = PlaybackState::Complete;
            return Ok(());
        }
        self.timer.start(now);
        self.state = PlaybackState::Playing;
        tracing::debug!(cursor = self.cursor, speed = %self.speed, "playback started");
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.timer.cancel();
        self.state = PlaybackState::Paused;
        tracing::debug!(cursor = self.cursor, "playback paused");
    }

    pub fn toggle(&mut self, now: Instant) -> VizResult<()> {
        if self.is_playing() {
            self.pause();
            Ok(())
        } else {
            self.play(now)
        }
    }

    pub fn step_forward(&mut self) -> VizResult<()> {
        let target = self.cursor.saturating_add(1);
        self.jump_to(target)
    }

    pub fn step_backward(&mut self) -> VizResult<()> {
        let target = self.cursor.saturating_sub(1);
        self.jump_to(target)
    }

    /// Move the cursor to `index`, clamped into the run
    pub fn jump_to(&mut self, index: usize) -> VizResult<()> {
        let last = self.last_index()?;
        let target = index.min(last);
        if target == self.cursor {
            return Ok(());
        }
        self.cursor = target;
        match self.state {
            PlaybackState::Playing if target == last => {
                self.timer.cancel();
                self.state = PlaybackState::Complete;
                tracing::debug!("playback complete");
            }
            PlaybackState::Playing => {}
            _ if target == last => self.state = PlaybackState::Complete,
            _ => self.state = PlaybackState::Paused,
        }
        Ok(())
    }

    pub fn rewind(&mut self) -> VizResult<()> {
        self.jump_to(0)
    }

    pub fn jump_to_end(&mut self) -> VizResult<()> {
        let last = self.last_index()?;
        self.jump_to(last)
    }

    /// Change speed; a live schedule is re-timed from `now`
    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        self.speed = speed;
        self.timer.set_interval(speed.interval(), now);
    }

    /// Advance auto-play if the timer is due; returns whether the cursor moved
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.timer.poll(now) {
            Some(token) => self.fire(token),
            None => false,
        }
    }

    /// Handle one timer fire; tokens from cancelled schedules are ignored
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.state != PlaybackState::Playing || self.timer.token() != Some(token) {
            tracing::debug!(?token, "ignoring stale timer fire");
            return false;
        }
        let last = self.len().saturating_sub(1);
        let moved = self.cursor < last;
        if moved {
            self.cursor += 1;
        }
        if self.cursor >= last {
            self.timer.cancel();
            self.state = PlaybackState::Complete;
            tracing::debug!("playback complete");
        }
        moved
    }

    fn last_index(&self) -> VizResult<usize> {
        self.run
            .as_ref()
            .map(Run::last_index)
            .ok_or(VizError::NoRun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting;
    use crate::structures::Array;

    fn loaded() -> Playback {
        let array = Array::from_values(&[3, 1, 2]);
        let run = sorting::bubble_sort(array.items(), 1000).unwrap();
        let mut playback = Playback::new(Speed::Quadruple);
        playback.load(run);
        playback
    }

    #[test]
    fn test_idle_rejects_controls() {
        let mut playback = Playback::default();
        assert_eq!(playback.play(Instant::now()), Err(VizError::NoRun));
        assert_eq!(playback.step_forward(), Err(VizError::NoRun));
        assert!(playback.current_step().is_none());
    }

    #[test]
    fn test_load_is_ready_at_zero() {
        let playback = loaded();
        assert_eq!(playback.state(), PlaybackState::Ready);
        assert_eq!(playback.cursor(), 0);
    }

    #[test]
    fn test_cursor_clamps() {
        let mut playback = loaded();
        playback.step_backward().unwrap();
        assert_eq!(playback.cursor(), 0);
        assert_eq!(playback.state(), PlaybackState::Ready);

        playback.jump_to(usize::MAX).unwrap();
        let last = playback.len() - 1;
        assert_eq!(playback.cursor(), last);
        assert_eq!(playback.state(), PlaybackState::Complete);

        playback.step_forward().unwrap();
        assert_eq!(playback.cursor(), last);

        playback.step_backward().unwrap();
        assert_eq!(playback.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_autoplay_runs_to_complete() {
        let mut playback = loaded();
        let t0 = Instant::now();
        playback.play(t0).unwrap();
        let mut now = t0;
        for _ in 0..playback.len() {
            now += Speed::Quadruple.interval();
            playback.tick(now);
        }
        assert_eq!(playback.state(), PlaybackState::Complete);
        assert_eq!(playback.cursor(), playback.len() - 1);
        assert!(playback.timer_token().is_none());
    }

    #[test]
    fn test_play_from_complete_restarts() {
        let mut playback = loaded();
        playback.jump_to_end().unwrap();
        playback.play(Instant::now()).unwrap();
        assert_eq!(playback.cursor(), 0);
        assert!(playback.is_playing());
    }

    #[test]
    fn test_pause_blocks_stale_fire() {
        let mut playback = loaded();
        let t0 = Instant::now();
        playback.play(t0).unwrap();
        let token = playback.timer_token().unwrap();
        playback.pause();
        assert!(!playback.fire(token));
        assert!(!playback.tick(t0 + Duration::from_secs(10)));
        assert_eq!(playback.cursor(), 0);
    }

    #[test]
    fn test_reset_twice_equals_once() {
        let mut playback = loaded();
        playback.play(Instant::now()).unwrap();
        playback.reset();
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.cursor(), 0);
        playback.reset();
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert!(playback.run().is_none());
    }

    #[test]
    fn test_jump_to_end_while_playing_completes() {
        let mut playback = loaded();
        playback.set_speed(Speed::Half, Instant::now());
        playback.play(Instant::now()).unwrap();
        playback.jump_to_end().unwrap();
        assert_eq!(playback.cursor(), playback.len() - 1);
        assert_eq!(playback.state(), PlaybackState::Complete);
        assert!(playback.timer_token().is_none());
    }

    #[test]
    fn test_manual_step_keeps_playing() {
        let mut playback = loaded();
        playback.play(Instant::now()).unwrap();
        playback.step_forward().unwrap();
        assert!(playback.is_playing());
        assert_eq!(playback.cursor(), 1);
    }

    #[test]
    fn test_speed_change_retimes_timer() {
        let mut playback = loaded();
        let t0 = Instant::now();
        playback.set_speed(Speed::Half, t0);
        playback.play(t0).unwrap();
        assert!(!playback.tick(t0 + Duration::from_millis(500)));
        playback.set_speed(Speed::Quadruple, t0 + Duration::from_millis(500));
        assert!(playback.tick(t0 + Duration::from_millis(600)));
    }

    #[test]
    fn test_speed_steps() {
        assert_eq!(Speed::Half.slower(), Speed::Half);
        assert_eq!(Speed::Normal.faster(), Speed::Double);
        assert_eq!(Speed::Quadruple.faster(), Speed::Quadruple);
        assert_eq!(Speed::Double.interval(), Duration::from_millis(250));
    }
}
