//! One visualizer session
//!
//! A [`Session`] owns the live structure, the playback over its latest run
//! and the settings both run under. Nothing here is shared: every session
//! has its own structure and its own timer, and dropping the session drops
//! the timer with it.

use crate::algorithms::{self, Algorithm};
use crate::command::{self, Command};
use crate::config::{check_capacity, Settings};
use crate::errors::{VizError, VizResult};
use crate::playback::{Playback, PlaybackState, Speed};
use crate::snapshot::{Run, Step};
use crate::structures::{Operation, Structure, StructureKind};
use rustc_hash::FxHashMap;
use std::time::Instant;

#[derive(Debug)]
pub struct Session {
    structure: Structure,
    /// Structures of the other kinds, kept while the user looks elsewhere
    shelved: FxHashMap<StructureKind, Structure>,
    playback: Playback,
    settings: Settings,
    last_operation: Option<String>,
}

impl Session {
    pub fn new(structure: Structure, settings: Settings) -> Self {
        Session {
            structure,
            shelved: FxHashMap::default(),
            playback: Playback::new(settings.speed),
            settings,
            last_operation: None,
        }
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn kind(&self) -> StructureKind {
        self.structure.kind()
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Narration of the most recent accepted operation or run
    pub fn last_operation(&self) -> Option<&str> {
        self.last_operation.as_deref()
    }

    pub fn run(&self) -> Option<&Run> {
        self.playback.run()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.playback.current_step()
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn cursor(&self) -> usize {
        self.playback.cursor()
    }

    /// Apply one mutation to the live structure
    ///
    /// `Clear` also discards the loaded run. A rejected operation leaves the
    /// session untouched.
    pub fn apply_operation(&mut self, op: Operation) -> VizResult<&Structure> {
        let kind = self.structure.kind();
        let result = check_capacity(&self.structure, &op, self.settings.capacity)
            .and_then(|()| self.structure.apply(&op));
        let report = match result {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(operation = op.name(), %kind, error = %err, "operation rejected");
                return Err(err);
            }
        };

        tracing::info!(operation = op.name(), %kind, len = self.structure.len(), "{}", report.message);
        if op == Operation::Clear {
            self.playback.reset();
        }
        self.last_operation = Some(report.message);
        Ok(&self.structure)
    }

    /// Record `algorithm` over the live structure and load it for playback
    ///
    /// Auto-play stops before generation starts. If generation fails the
    /// previous run stays loaded.
    pub fn generate_run(&mut self, algorithm: Algorithm) -> VizResult<&Run> {
        self.playback.halt();
        let run = match algorithms::generate_run(algorithm, &self.structure, self.settings.max_steps)
        {
            Ok(run) => run,
            Err(err) => {
                tracing::warn!(%algorithm, error = %err, "run generation failed");
                return Err(err);
            }
        };
        self.last_operation = Some(format!("Recorded {} ({} steps)", algorithm, run.len()));
        self.playback.load(run);
        self.playback.run().ok_or(VizError::NoRun)
    }

    /// Parse and execute one text command
    pub fn execute(&mut self, input: &str) -> VizResult<Command> {
        let command = command::parse(input, self.kind(), &self.settings.random_range)
            .inspect_err(|err| tracing::warn!(input, error = %err, "command rejected"))?;
        match &command {
            Command::Operation(op) => {
                self.apply_operation(op.clone())?;
            }
            Command::Algorithm(algorithm) => {
                self.generate_run(*algorithm)?;
            }
        }
        Ok(command)
    }

    /// Execute one command and return the lines a headless run prints
    ///
    /// An algorithm yields its transcript; an operation yields its narration
    /// followed by the resulting values.
    pub fn execute_headless(&mut self, input: &str) -> VizResult<Vec<String>> {
        match self.execute(input)? {
            Command::Algorithm(_) => Ok(self
                .run()
                .map(|run| run.transcript().collect())
                .unwrap_or_default()),
            Command::Operation(_) => {
                let mut lines: Vec<String> =
                    self.last_operation.iter().cloned().collect();
                lines.push(format!("{:?}", self.structure.snapshot().values()));
                Ok(lines)
            }
        }
    }

    /// Switch to another structure kind
    ///
    /// The current structure is shelved and restored when its kind comes
    /// back; a kind seen for the first time starts from its sample data.
    pub fn switch_kind(&mut self, kind: StructureKind) {
        if kind == self.kind() {
            return;
        }
        self.playback.reset();
        let next = self
            .shelved
            .remove(&kind)
            .unwrap_or_else(|| Structure::sample(kind));
        let previous = std::mem::replace(&mut self.structure, next);
        self.shelved.insert(previous.kind(), previous);
        self.last_operation = Some(format!("Switched to {}", kind));
        tracing::info!(%kind, "switched structure");
    }

    pub fn play(&mut self, now: Instant) -> VizResult<()> {
        self.playback.play(now)
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn toggle(&mut self, now: Instant) -> VizResult<()> {
        self.playback.toggle(now)
    }

    pub fn step_forward(&mut self) -> VizResult<()> {
        self.playback.step_forward()
    }

    pub fn step_backward(&mut self) -> VizResult<()> {
        self.playback.step_backward()
    }

    pub fn jump_to(&mut self, index: usize) -> VizResult<()> {
        self.playback.jump_to(index)
    }

    pub fn rewind(&mut self) -> VizResult<()> {
        self.playback.rewind()
    }

    pub fn jump_to_end(&mut self) -> VizResult<()> {
        self.playback.jump_to_end()
    }

    /// Discard the run and return to idle; calling it twice equals once
    pub fn reset(&mut self) {
        self.playback.reset();
    }

    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        self.settings.speed = speed;
        self.playback.set_speed(speed, now);
    }

    /// Forward the host clock to playback; returns whether the cursor moved
    pub fn tick(&mut self, now: Instant) -> bool {
        self.playback.tick(now)
    }
}
