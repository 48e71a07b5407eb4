//! Refresh Loop
//!
//! Owns the dashboard state and drives fetch, convert, merge and render on
//! a fixed interval. The first cycle runs immediately. Cancellation has
//! priority over everything else, including a cycle that is in flight.

use crate::metrics::Metrics;
use crate::source::MetricSource;
use crate::source::error::{FetchCause, FetchError, FetchTag};
use crate::ui::input::InputEvent;
use crate::ui::{DashboardState, Renderer};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum LoopPhase {
    Idle,
    Refreshing,
    Terminated,
}

/// One fetch of every source, with the zero-total check applied.
pub async fn collect(source: &MetricSource, prior: &Metrics) -> (Metrics, Vec<FetchError>) {
    let (metrics, mut errors) = source.fetch_all(prior).await;
    flag_zero_memory_total(&metrics, &mut errors);
    (metrics, errors)
}

/// A health response with a zero total cannot yield a percentage.
fn flag_zero_memory_total(metrics: &Metrics, errors: &mut Vec<FetchError>) {
    let health_ok = !errors.iter().any(|e| e.tag == FetchTag::Health);
    if health_ok && metrics.memory_total_bytes == 0 {
        errors.push(FetchError::new(
            FetchTag::MemoryTotalZero,
            FetchCause::ZeroMemoryTotal,
        ));
    }
}

pub struct RefreshLoop<R: Renderer> {
    source: MetricSource,
    renderer: R,
    state: DashboardState,
    interval: Duration,
    phase: LoopPhase,
}

impl<R: Renderer> RefreshLoop<R> {
    pub fn new(
        source: MetricSource,
        renderer: R,
        state: DashboardState,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            renderer,
            state,
            interval,
            phase: LoopPhase::Idle,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run until `shutdown` is cancelled or rendering fails.
    pub async fn run(
        &mut self,
        mut input: mpsc::Receiver<InputEvent>,
        shutdown: CancellationToken,
    ) -> io::Result<()> {
        let result = self.drive(&mut input, &shutdown).await;
        self.phase = LoopPhase::Terminated;
        match &result {
            Ok(()) => log::info!(
                "Refresh loop {} after {} cycles",
                self.phase,
                self.state.cycles
            ),
            Err(e) => log::error!("Refresh loop {}: {}", self.phase, e),
        }
        result
    }

    async fn drive(
        &mut self,
        input: &mut mpsc::Receiver<InputEvent>,
        shutdown: &CancellationToken,
    ) -> io::Result<()> {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut input_open = true;

        // The startup cycle runs before any queued input is looked at
        if !self.refresh_once(shutdown).await? {
            return Ok(());
        }
        ticker.reset();

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => return Ok(()),
                _ = ticker.tick() => {
                    if !self.refresh_once(shutdown).await? {
                        return Ok(());
                    }
                }
                event = input.recv(), if input_open => match event {
                    Some(InputEvent::Redraw) => self.renderer.render(&self.state)?,
                    None => input_open = false,
                },
            }
        }
    }

    /// Run a single cycle. Returns `false` when cancelled before it completed,
    /// in which case the state is left untouched.
    pub async fn refresh_once(&mut self, shutdown: &CancellationToken) -> io::Result<bool> {
        self.phase = LoopPhase::Refreshing;
        let started = Instant::now();

        let fetched = tokio::select! {
            biased;
            _ = shutdown.cancelled() => None,
            result = collect(&self.source, &self.state.metrics) => Some(result),
        };
        let Some((metrics, errors)) = fetched else {
            log::debug!("Refresh cancelled in flight");
            return Ok(false);
        };

        self.state.apply_cycle(metrics, &errors, started.elapsed());
        self.renderer.render(&self.state)?;
        self.phase = LoopPhase::Idle;
        Ok(true)
    }
}
