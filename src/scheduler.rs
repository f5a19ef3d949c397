//! Fixed-delay scheduler driving the active mode.
//!
//! The scheduler owns the loop of the running program: it invokes the mode's
//! action, waits for the mode's tick interval and repeats until the shared
//! `running` flag is cleared by the signal thread.
//!
//! - The interval is measured from the end of one action to the start of the
//!   next, so a slow action delays the schedule instead of piling ticks up.
//! - Cancellation is checked before and after each action and during the
//!   sleep. A running action is never interrupted.
//! - A failing action is reported and the loop carries on with the next tick.
//!
//! The scheduler does not print anything itself. Everything it has to say is
//! sent as a [`SchedulerEvent`] to the injected [`EventSink`].

use anyhow::Result;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::modes::Mode;
use crate::time_source::TimeSource;

/// Lifecycle of a scheduler. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

impl SchedulerState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => SchedulerState::Idle,
            1 => SchedulerState::Running,
            _ => SchedulerState::Stopped,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            SchedulerState::Idle => 0,
            SchedulerState::Running => 1,
            SchedulerState::Stopped => 2,
        }
    }
}

impl fmt::Display for SchedulerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchedulerState::Idle => "idle",
            SchedulerState::Running => "running",
            SchedulerState::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default)]
struct StatusInner {
    state: AtomicU8,
    ticks: AtomicU64,
}

/// Read-only view of a scheduler's progress, usable from other threads and
/// from inside a running action.
#[derive(Debug, Clone, Default)]
pub struct SchedulerStatus {
    inner: Arc<StatusInner>,
}

impl SchedulerStatus {
    pub fn state(&self) -> SchedulerState {
        SchedulerState::from_u8(self.inner.state.load(Ordering::SeqCst))
    }

    /// Number of actions started so far.
    pub fn ticks(&self) -> u64 {
        self.inner.ticks.load(Ordering::SeqCst)
    }

    fn set_state(&self, state: SchedulerState) {
        self.inner.state.store(state.as_u8(), Ordering::SeqCst);
    }

    fn next_tick(&self) -> u64 {
        self.inner.ticks.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Totals of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub ticks: u64,
    pub failures: u64,
}

/// Things the scheduler reports while running.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerEvent {
    Started {
        mode: &'static str,
        interval: Duration,
    },
    Tick {
        tick: u64,
    },
    ActionFailed {
        tick: u64,
        /// Full error chain
        error: String,
    },
    Stopped {
        summary: RunSummary,
    },
}

/// Receiver of scheduler events.
pub trait EventSink {
    fn emit(&mut self, event: SchedulerEvent);
}

/// Renders scheduler events with the terminal logger.
pub struct TerminalEventSink;

impl EventSink for TerminalEventSink {
    fn emit(&mut self, event: SchedulerEvent) {
        match event {
            SchedulerEvent::Started { mode, interval } => {
                log_block_start!("Starting {mode} mode");
                log_indented!("Tick interval: {interval:?}");
            }
            SchedulerEvent::Tick { tick } => {
                log_debug!("Tick {tick} complete");
            }
            SchedulerEvent::ActionFailed { tick, error } => {
                log_pipe!();
                log_warning!("Tick {tick} failed: {error}");
            }
            SchedulerEvent::Stopped { summary } => {
                log_block_start!("Scheduler stopped");
                log_indented!("Ticks: {}", summary.ticks);
                if summary.failures > 0 {
                    log_indented!("Failed ticks: {}", summary.failures);
                }
            }
        }
    }
}

/// Sink that keeps every event, for tests and embedding.
#[derive(Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<SchedulerEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SchedulerEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn failures(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, SchedulerEvent::ActionFailed { .. }))
            .count()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&mut self, event: SchedulerEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

pub struct Scheduler {
    running: Arc<AtomicBool>,
    clock: Arc<dyn TimeSource>,
    sink: Box<dyn EventSink>,
    status: SchedulerStatus,
}

impl Scheduler {
    pub fn new(
        running: Arc<AtomicBool>,
        clock: Arc<dyn TimeSource>,
        sink: Box<dyn EventSink>,
    ) -> Self {
        Self {
            running,
            clock,
            sink,
            status: SchedulerStatus::default(),
        }
    }

    pub fn status(&self) -> SchedulerStatus {
        self.status.clone()
    }

    fn should_run(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Run `mode` until cancelled. Can be called once per scheduler.
    pub fn run(&mut self, mode: &mut dyn Mode) -> Result<RunSummary> {
        let state = self.status.state();
        if state != SchedulerState::Idle {
            anyhow::bail!("Scheduler cannot be started: it is already {state}");
        }
        self.status.set_state(SchedulerState::Running);

        let interval = mode.tick_interval();
        self.sink.emit(SchedulerEvent::Started {
            mode: mode.label(),
            interval,
        });

        let mut summary = RunSummary::default();

        while self.should_run() {
            let tick = self.status.next_tick();
            summary.ticks = tick;

            match mode.perform_action() {
                Ok(()) => self.sink.emit(SchedulerEvent::Tick { tick }),
                Err(e) => {
                    summary.failures += 1;
                    self.sink.emit(SchedulerEvent::ActionFailed {
                        tick,
                        error: format!("{e:#}"),
                    });
                }
            }

            if !self.should_run() || !self.clock.sleep_while_running(interval, &self.running) {
                break;
            }
        }

        self.status.set_state(SchedulerState::Stopped);
        self.sink.emit(SchedulerEvent::Stopped { summary });

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_source::SimulatedTimeSource;
    use chrono::{TimeZone, Utc};

    /// Mode whose action is a closure receiving the 1-based call number.
    struct ScriptedMode<F: FnMut(u64) -> Result<()>> {
        interval: Duration,
        calls: u64,
        action: F,
    }

    impl<F: FnMut(u64) -> Result<()>> ScriptedMode<F> {
        fn new(interval: Duration, action: F) -> Self {
            Self {
                interval,
                calls: 0,
                action,
            }
        }
    }

    impl<F: FnMut(u64) -> Result<()>> Mode for ScriptedMode<F> {
        fn label(&self) -> &'static str {
            "scripted"
        }

        fn tick_interval(&self) -> Duration {
            self.interval
        }

        fn perform_action(&mut self) -> Result<()> {
            self.calls += 1;
            (self.action)(self.calls)
        }
    }

    fn setup() -> (
        Scheduler,
        Arc<AtomicBool>,
        Arc<SimulatedTimeSource>,
        RecordingEventSink,
    ) {
        let running = Arc::new(AtomicBool::new(true));
        let clock = Arc::new(SimulatedTimeSource::new(
            Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap(),
        ));
        let sink = RecordingEventSink::new();
        let scheduler = Scheduler::new(running.clone(), clock.clone(), Box::new(sink.clone()));
        (scheduler, running, clock, sink)
    }

    #[test]
    fn test_failures_are_reported_and_loop_continues() {
        const FAILING_TICKS: u64 = 5;
        let (mut scheduler, running, _clock, sink) = setup();
        let status = scheduler.status();
        let observed = Arc::new(Mutex::new(None));

        let mut mode = ScriptedMode::new(Duration::from_secs(1), {
            let sink = sink.clone();
            let observed = observed.clone();
            move |call| {
                if call <= FAILING_TICKS {
                    anyhow::bail!("bulb unreachable (attempt {call})");
                }
                *observed.lock().unwrap() = Some((sink.failures(), status.state()));
                running.store(false, Ordering::SeqCst);
                Ok(())
            }
        });

        let summary = scheduler.run(&mut mode).unwrap();

        assert_eq!(
            *observed.lock().unwrap(),
            Some((FAILING_TICKS as usize, SchedulerState::Running))
        );
        assert_eq!(
            summary,
            RunSummary {
                ticks: FAILING_TICKS + 1,
                failures: FAILING_TICKS
            }
        );

        let events = sink.events();
        assert_eq!(
            events[1],
            SchedulerEvent::ActionFailed {
                tick: 1,
                error: "bulb unreachable (attempt 1)".to_string()
            }
        );
    }

    #[test]
    fn test_cancellation_between_ticks_stops_cleanly() {
        let (mut scheduler, running, clock, sink) = setup();
        let status = scheduler.status();

        let mut mode = ScriptedMode::new(Duration::from_secs(30), move |call| {
            if call == 3 {
                running.store(false, Ordering::SeqCst);
            }
            Ok(())
        });

        let summary = scheduler.run(&mut mode).unwrap();

        assert_eq!(mode.calls, 3);
        assert_eq!(summary, RunSummary { ticks: 3, failures: 0 });
        assert_eq!(status.state(), SchedulerState::Stopped);
        assert_eq!(status.ticks(), 3);
        // no sleep after the cancelling tick
        assert_eq!(clock.total_slept(), Duration::from_secs(60));

        assert_eq!(
            sink.events(),
            vec![
                SchedulerEvent::Started {
                    mode: "scripted",
                    interval: Duration::from_secs(30)
                },
                SchedulerEvent::Tick { tick: 1 },
                SchedulerEvent::Tick { tick: 2 },
                SchedulerEvent::Tick { tick: 3 },
                SchedulerEvent::Stopped { summary },
            ]
        );
    }

    #[test]
    fn test_cancelled_before_start_runs_nothing() {
        let (mut scheduler, running, _clock, sink) = setup();
        running.store(false, Ordering::SeqCst);

        let mut mode = ScriptedMode::new(Duration::from_secs(1), |_| Ok(()));
        let summary = scheduler.run(&mut mode).unwrap();

        assert_eq!(mode.calls, 0);
        assert_eq!(summary, RunSummary::default());
        assert_eq!(scheduler.status().state(), SchedulerState::Stopped);
        assert_eq!(sink.events().len(), 2);
    }

    #[test]
    fn test_fixed_delay_between_ticks() {
        let (mut scheduler, running, clock, _sink) = setup();
        let start = clock.now();
        let stamps = Arc::new(Mutex::new(Vec::new()));

        let mut mode = ScriptedMode::new(Duration::from_millis(250), {
            let clock = clock.clone();
            let stamps = stamps.clone();
            move |call| {
                stamps.lock().unwrap().push(clock.now() - start);
                // action itself takes 50ms
                clock.advance(Duration::from_millis(50));
                if call == 4 {
                    running.store(false, Ordering::SeqCst);
                }
                Ok(())
            }
        });

        scheduler.run(&mut mode).unwrap();

        let millis: Vec<i64> = stamps
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.num_milliseconds())
            .collect();
        assert_eq!(millis, vec![0, 300, 600, 900]);
    }

    #[test]
    fn test_run_twice_is_an_error() {
        let (mut scheduler, running, _clock, _sink) = setup();
        let mut mode = ScriptedMode::new(Duration::from_secs(1), move |_| {
            running.store(false, Ordering::SeqCst);
            Ok(())
        });

        assert_eq!(scheduler.status().state(), SchedulerState::Idle);
        scheduler.run(&mut mode).unwrap();

        let err = scheduler.run(&mut mode).unwrap_err();
        assert!(err.to_string().contains("already stopped"));
        assert_eq!(mode.calls, 1);
    }
}
