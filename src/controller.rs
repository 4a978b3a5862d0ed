//! The single owner of all timer state and the poll entry point
//!
//! [`PomodoroController::poll`] is meant to be called far more often than
//! the fastest cadence. Each call reads the clock once and then, in order:
//!
//! 1. steps the ring spinner when the 250 ms cadence fires
//! 2. advances or ends the border flash
//! 3. on the 1 Hz cadence, ticks the countdown, switches phase on expiry and
//!    refreshes the digits and progress bar
//!
//! The ring and flash run before the main cadence so they keep moving on
//! polls where the countdown does not.

use std::time::Duration;

use tracing::{debug, info};

use crate::{
    animation::{AnimationPacer, BorderTone, FlashAnimation, RingPath, RingSpinner},
    clock::Clock,
    config::TimerSettings,
    render::{layout, Scene, SweepTicker},
    state::{Phase, ProgressionState, TickOutcome, TimerSnapshot, TimerState},
    surface::DisplaySurface,
};

/// A phase that just timed out and the one replacing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
    /// Round counter after the change
    pub round: u32,
    pub round_completed: bool,
}

/// What happened during one poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollReport {
    /// The spinner cadence fired
    pub ring_stepped: bool,
    /// Border color painted by the flash, if any
    pub border: Option<BorderTone>,
    /// The 1 Hz cadence fired and the countdown moved
    pub ticked: bool,
    pub phase_change: Option<PhaseChange>,
}

/// Pomodoro timer bound to a surface and a clock
#[derive(Debug)]
pub struct PomodoroController<S, C> {
    settings: TimerSettings,
    surface: S,
    clock: C,
    scene: Scene,
    timer: TimerState,
    progression: ProgressionState,
    pacer: AnimationPacer,
    spinner: RingSpinner,
    flash: FlashAnimation,
    sweep: SweepTicker,
}

impl<S: DisplaySurface, C: Clock> PomodoroController<S, C> {
    /// Create every element and paint the initial work phase
    pub fn new(settings: TimerSettings, mut surface: S, clock: C) -> Self {
        let now = clock.now();
        let scene = Scene::build(
            &mut surface,
            &settings.name,
            settings.slices_per_round,
            settings.rounds,
        );

        let spinner = RingSpinner::new(RingPath::around(layout::RING));
        if spinner.path().is_empty() {
            debug!("Ring path is empty, spinner disabled");
        }

        let mut controller = Self {
            timer: TimerState::new(Phase::Work, &settings),
            progression: ProgressionState::new(settings.slices_per_round, settings.rounds),
            pacer: AnimationPacer::new(now),
            spinner,
            flash: FlashAnimation::new(now),
            sweep: SweepTicker::new(),
            settings,
            surface,
            clock,
            scene,
        };
        controller.paint_initial();
        controller.surface.flush();

        info!(
            "Timer ready: work={}min short={}min long={}min slices={} rounds={}",
            controller.settings.work_minutes,
            controller.settings.short_break_minutes,
            controller.settings.long_break_minutes,
            controller.settings.slices_per_round,
            controller.settings.rounds
        );
        controller
    }

    fn paint_initial(&mut self) {
        let surface = &mut self.surface;
        self.scene.paint_phase(surface, self.timer.phase);
        self.scene.place_spinners(surface, &self.spinner);
        self.scene
            .paint_timer_text(surface, self.timer.remaining_seconds, self.timer.colon_visible);
        self.scene.reset_slice_row(surface);
        self.scene.paint_round_dots(surface, self.progression.completed_rounds());
        self.scene.reset_progress(surface);
        self.scene.paint_border(surface, BorderTone::Background);
    }

    /// Run one iteration of the loop
    pub fn poll(&mut self) -> PollReport {
        let now = self.clock.now();
        let mut report = PollReport {
            ring_stepped: self.step_ring(now),
            border: self.step_flash(now),
            ..PollReport::default()
        };

        if self.pacer.poll_main(now) {
            report.ticked = true;
            report.phase_change = self.tick(now);
        }

        if report != PollReport::default() {
            self.surface.flush();
        }
        report
    }

    fn step_ring(&mut self, now: Duration) -> bool {
        if !self.pacer.poll_ring(now) {
            return false;
        }
        self.spinner.advance();
        self.scene.place_spinners(&mut self.surface, &self.spinner);
        true
    }

    fn step_flash(&mut self, now: Duration) -> Option<BorderTone> {
        let tone = self.flash.poll(now)?;
        self.scene.paint_border(&mut self.surface, tone);
        if !self.flash.is_active() {
            debug!("Border flash finished");
        }
        Some(tone)
    }

    fn tick(&mut self, now: Duration) -> Option<PhaseChange> {
        match self.timer.tick() {
            TickOutcome::Counting { elapsed } => {
                self.scene.paint_progress(
                    &mut self.surface,
                    elapsed,
                    self.timer.phase_total_seconds,
                    &mut self.sweep,
                );
                self.paint_timer_text();
                None
            }
            TickOutcome::Expired => Some(self.finish_phase(now)),
        }
    }

    fn finish_phase(&mut self, now: Duration) -> PhaseChange {
        self.flash.start(now);

        let from = self.timer.phase;
        let transition = self.progression.next_phase(from);
        if let Some(index) = transition.filled_slice {
            self.scene.mark_slice(&mut self.surface, index, true);
        }
        if transition.round_completed {
            debug!("Round complete, now on round {}", self.progression.current_round);
            self.scene.reset_slice_row(&mut self.surface);
            self.scene
                .paint_round_dots(&mut self.surface, self.progression.completed_rounds());
        }

        self.start_phase(transition.next);
        self.scene
            .paint_round_dots(&mut self.surface, self.progression.completed_rounds());
        self.paint_timer_text();
        self.scene.paint_progress(
            &mut self.surface,
            0,
            self.timer.phase_total_seconds,
            &mut self.sweep,
        );

        let change = PhaseChange {
            from,
            to: transition.next,
            round: self.progression.current_round,
            round_completed: transition.round_completed,
        };
        info!(
            "Phase {} timed out, starting {} ({}s, round {}/{}, slice {}/{})",
            change.from,
            change.to,
            self.timer.phase_total_seconds,
            self.progression.current_round,
            self.progression.rounds,
            self.progression.completed_slices_in_round,
            self.progression.slices_per_round
        );
        change
    }

    fn start_phase(&mut self, phase: Phase) {
        self.timer.start_phase(phase, &self.settings);
        self.scene.paint_phase(&mut self.surface, phase);
        self.scene.reset_progress(&mut self.surface);
        self.sweep.reset();
    }

    fn paint_timer_text(&mut self) {
        self.scene.paint_timer_text(
            &mut self.surface,
            self.timer.remaining_seconds,
            self.timer.colon_visible,
        );
    }

    /// Current state as plain data
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::capture(
            &self.settings.name,
            &self.timer,
            &self.progression,
            self.flash.is_active(),
        )
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn progression(&self) -> &ProgressionState {
        &self.progression
    }

    pub fn spinner(&self) -> &RingSpinner {
        &self.spinner
    }

    pub fn flash(&self) -> &FlashAnimation {
        &self.flash
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
