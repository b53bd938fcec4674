//! Play/pause state machine and the tick schedule.
//!
//! The schedule is a single explicit deadline rather than a recurring
//! timer: a tick becomes due, the caller performs the tick's work (engine
//! step plus view refresh), and only then re-arms the next deadline. Ticks
//! therefore never overlap and the effective period is
//! `interval + tick work`, a deliberate approximation for a visualization
//! tool rather than a hard real-time guarantee. `stop` drops the deadline
//! synchronously, so no further tick can become due afterwards.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Editing,
    Running,
}

#[derive(Debug)]
pub struct Simulation {
    state: SimState,
    interval: Duration,
    /// Armed deadline; present only while Running.
    next_tick: Option<Instant>,
    generation: u64,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            state: SimState::Editing,
            interval: Duration::from_millis(100),
            next_tick: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Counts one completed generation step.
    pub fn advance_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// A new grid starts back at generation zero.
    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Takes effect when the next tick is armed; an already-armed deadline
    /// is left alone.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Enters Running and arms the first tick. Idempotent while Running:
    /// there is never a second live schedule.
    pub fn play(&mut self, now: Instant, interval: Duration) -> bool {
        if self.is_running() {
            return false;
        }
        self.interval = interval;
        self.state = SimState::Running;
        self.next_tick = Some(now + interval);
        log::debug!("simulation running, interval {:?}", interval);
        true
    }

    /// Cancels the pending deadline and returns to Editing. No-op while
    /// Editing.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.next_tick = None;
        self.state = SimState::Editing;
        log::debug!("simulation stopped at generation {}", self.generation);
        true
    }

    /// Claims a due tick. Returns true at most once per armed deadline;
    /// the caller must call [`Simulation::rearm`] after finishing the
    /// tick's work.
    pub fn take_due_tick(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(deadline) if now >= deadline => {
                self.next_tick = None;
                true
            }
            _ => false,
        }
    }

    /// Arms the next deadline, strictly after the current tick's work.
    /// Does nothing if `stop` ran mid-tick.
    pub fn rearm(&mut self, now: Instant) {
        if self.is_running() {
            self.next_tick = Some(now + self.interval);
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(50);

    #[test]
    fn starts_editing_with_no_deadline() {
        let sim = Simulation::new();
        assert_eq!(SimState::Editing, sim.state());
        assert_eq!(0, sim.generation());
    }

    #[test]
    fn play_then_stop_before_first_tick() {
        let mut sim = Simulation::new();
        let t0 = Instant::now();
        assert!(sim.play(t0, TICK));
        assert!(sim.stop());
        assert_eq!(SimState::Editing, sim.state());
        assert_eq!(0, sim.generation());
        // Even far in the future no tick is due.
        assert!(!sim.take_due_tick(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn play_while_running_is_a_no_op() {
        let mut sim = Simulation::new();
        let t0 = Instant::now();
        assert!(sim.play(t0, TICK));
        assert!(!sim.play(t0, Duration::from_millis(1)));
        // The original schedule is untouched.
        assert!(!sim.take_due_tick(t0 + Duration::from_millis(10)));
        assert!(sim.take_due_tick(t0 + TICK));
    }

    #[test]
    fn stop_while_editing_is_a_no_op() {
        let mut sim = Simulation::new();
        assert!(!sim.stop());
        assert_eq!(SimState::Editing, sim.state());
    }

    #[test]
    fn tick_fires_once_and_only_after_rearm() {
        let mut sim = Simulation::new();
        let t0 = Instant::now();
        sim.play(t0, TICK);

        let due = t0 + TICK;
        assert!(sim.take_due_tick(due));
        // Same instant again: the deadline was claimed, not rescheduled.
        assert!(!sim.take_due_tick(due));
        assert!(!sim.take_due_tick(due + Duration::from_secs(1)));

        // Re-arming happens after the tick work, pushing the next deadline
        // out from completion time, however long the work took.
        let work_done = due + Duration::from_millis(200);
        sim.rearm(work_done);
        assert!(!sim.take_due_tick(work_done + TICK - Duration::from_millis(1)));
        assert!(sim.take_due_tick(work_done + TICK));
    }

    #[test]
    fn stop_mid_tick_suppresses_rearm() {
        let mut sim = Simulation::new();
        let t0 = Instant::now();
        sim.play(t0, TICK);
        assert!(sim.take_due_tick(t0 + TICK));
        sim.stop();
        sim.rearm(t0 + TICK);
        assert!(!sim.take_due_tick(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn interval_change_applies_on_next_arming() {
        let mut sim = Simulation::new();
        let t0 = Instant::now();
        sim.play(t0, TICK);
        sim.set_interval(Duration::from_millis(500));

        // The armed deadline keeps the old interval.
        assert!(sim.take_due_tick(t0 + TICK));
        sim.rearm(t0 + TICK);
        assert!(!sim.take_due_tick(t0 + TICK + Duration::from_millis(499)));
        assert!(sim.take_due_tick(t0 + TICK + Duration::from_millis(500)));
    }

    #[test]
    fn generation_counts_and_resets() {
        let mut sim = Simulation::new();
        assert_eq!(1, sim.advance_generation());
        assert_eq!(2, sim.advance_generation());
        sim.reset_generation();
        assert_eq!(0, sim.generation());
    }
}
