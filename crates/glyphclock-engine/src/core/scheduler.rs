use std::time::Duration;

use anyhow::{Context, Result};

use crate::coords::ViewportSize;
use crate::input::{dispatch, Dispatch, EventSource};
use crate::time::{FixedStep, MonotonicClock, FIXED_INTERVAL};

use super::Stage;

/// Scheduler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Cadence of Update/Render cycles.
    pub interval: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval: FIXED_INTERVAL,
        }
    }
}

impl SchedulerConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SchedulerState {
    Running,
    /// Terminal.
    Stopped,
}

/// Outcome of a completed [`Scheduler::run`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RunSummary {
    /// Update/Render cycles performed, the initial one included.
    pub frames: u64,
    /// Unconsumed time left in the accumulator.
    pub accumulator: Duration,
}

/// Fixed-step loop combining an accumulator with a bounded event wait.
///
/// Each [`tick`](Self::tick):
/// 1. adds the elapsed time to the accumulator,
/// 2. waits for an event for at most the remaining budget and dispatches it,
/// 3. runs one Update + Render if a whole interval has accumulated.
///
/// Events never trigger a frame. Once stopped, no further frame runs.
pub struct Scheduler<S, C> {
    stage: S,
    clock: C,
    step: FixedStep,
    state: SchedulerState,
    viewport: ViewportSize,
    frames: u64,
}

impl<S: Stage, C: MonotonicClock> Scheduler<S, C> {
    /// Creates a scheduler for a window whose drawable area is `viewport`.
    pub fn new(stage: S, clock: C, config: SchedulerConfig, viewport: ViewportSize) -> Result<Self> {
        anyhow::ensure!(
            !config.interval.is_zero(),
            "scheduler interval must be non-zero"
        );

        let step = FixedStep::new(config.interval, clock.now());
        Ok(Self {
            stage,
            clock,
            step,
            state: SchedulerState::Running,
            viewport,
            frames: 0,
        })
    }

    /// Runs the initial Update + Render and restarts the accumulator.
    pub fn start(&mut self) -> Result<()> {
        if self.state == SchedulerState::Stopped {
            return Ok(());
        }

        self.cycle().context("initial frame failed")?;
        self.step.reset(self.clock.now());
        Ok(())
    }

    /// Runs one loop iteration.
    pub fn tick<E: EventSource + ?Sized>(&mut self, events: &mut E) -> Result<()> {
        if self.state == SchedulerState::Stopped {
            return Ok(());
        }

        self.step.advance(self.clock.now());

        let budget = self.step.budget();
        if !budget.is_zero() {
            match events.wait_event(budget).context("failed to wait for events")? {
                Some(event) => self.handle(dispatch(&event)),
                None => log::trace!("wait timed out after {budget:?}"),
            }
        }

        if self.state == SchedulerState::Running && self.step.is_due() {
            self.cycle()?;
            self.step.consume();
        }

        Ok(())
    }

    /// Runs [`start`](Self::start), then ticks until stopped.
    pub fn run<E: EventSource + ?Sized>(&mut self, events: &mut E) -> Result<RunSummary> {
        self.start()?;
        while self.state == SchedulerState::Running {
            self.tick(events)?;
        }

        Ok(self.summary())
    }

    /// Stops the loop. Idempotent.
    pub fn stop(&mut self) {
        if self.state == SchedulerState::Running {
            log::debug!("scheduler stopped after {} frames", self.frames);
        }
        self.state = SchedulerState::Stopped;
    }

    fn handle(&mut self, action: Dispatch) {
        match action {
            Dispatch::Stop => self.stop(),
            Dispatch::Resize(reported) => {
                let size = self.stage.viewport_changed(reported);
                log::debug!(
                    "viewport resized to {}x{} (reported {}x{})",
                    size.width,
                    size.height,
                    reported.width,
                    reported.height
                );
                self.viewport = size;
            }
            Dispatch::Ignore => log::trace!("event ignored"),
        }
    }

    fn cycle(&mut self) -> Result<()> {
        log::trace!("frame {} at {}x{}", self.frames, self.viewport.width, self.viewport.height);
        self.stage.update().context("stage update failed")?;
        self.stage.render(self.viewport).context("stage render failed")?;
        self.frames += 1;
        Ok(())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            accumulator: self.step.accumulator(),
        }
    }

    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn accumulator(&self) -> Duration {
        self.step.accumulator()
    }

    #[inline]
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }
}
