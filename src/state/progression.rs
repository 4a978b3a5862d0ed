//! Slice and round bookkeeping

use serde::Serialize;

use super::Phase;

/// What finishing a phase did to the slice and round counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Phase to start next
    pub next: Phase,
    /// Slice index that became filled, when a work phase finished
    pub filled_slice: Option<u32>,
    /// The last slice of the round was just filled
    pub round_completed: bool,
}

/// Progress through slices (work phases) and rounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionState {
    /// 1-based, wraps to 1 after `rounds`
    pub current_round: u32,
    /// Work phases finished in the current round
    pub completed_slices_in_round: u32,
    pub slices_per_round: u32,
    pub rounds: u32,
}

impl ProgressionState {
    pub fn new(slices_per_round: u32, rounds: u32) -> Self {
        Self {
            current_round: 1,
            completed_slices_in_round: 0,
            slices_per_round,
            rounds,
        }
    }

    /// Decide which phase follows `current`
    ///
    /// Breaks always lead back to work; only finishing work moves the counters.
    pub fn next_phase(&mut self, current: Phase) -> Transition {
        match current {
            Phase::Work => self.on_work_phase_complete(),
            Phase::ShortBreak | Phase::LongBreak => Transition {
                next: Phase::Work,
                filled_slice: None,
                round_completed: false,
            },
        }
    }

    /// Record a finished work phase
    pub fn on_work_phase_complete(&mut self) -> Transition {
        let filled = self.completed_slices_in_round;
        self.completed_slices_in_round += 1;

        if self.completed_slices_in_round < self.slices_per_round {
            return Transition {
                next: Phase::ShortBreak,
                filled_slice: Some(filled),
                round_completed: false,
            };
        }

        self.completed_slices_in_round = 0;
        self.current_round += 1;
        if self.current_round > self.rounds {
            self.current_round = 1;
        }

        Transition {
            next: Phase::LongBreak,
            filled_slice: Some(filled),
            round_completed: true,
        }
    }

    /// Rounds finished in the current cycle of `rounds`
    pub fn completed_rounds(&self) -> u32 {
        self.current_round.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_always_return_to_work() {
        let mut progress = ProgressionState::new(4, 2);
        for phase in [Phase::ShortBreak, Phase::LongBreak] {
            let t = progress.next_phase(phase);
            assert_eq!(t.next, Phase::Work);
            assert_eq!(t.filled_slice, None);
        }
        assert_eq!(progress, ProgressionState::new(4, 2));
    }

    #[test]
    fn full_cycle_wraps_round_to_one() {
        let mut progress = ProgressionState::new(4, 2);

        for slice in 0..3 {
            let t = progress.next_phase(Phase::Work);
            assert_eq!(t.next, Phase::ShortBreak);
            assert_eq!(t.filled_slice, Some(slice));
            assert_eq!(progress.completed_slices_in_round, slice + 1);
            assert_eq!(progress.next_phase(Phase::ShortBreak).next, Phase::Work);
        }

        let t = progress.next_phase(Phase::Work);
        assert_eq!(t.next, Phase::LongBreak);
        assert!(t.round_completed);
        assert_eq!(progress.current_round, 2);
        assert_eq!(progress.completed_slices_in_round, 0);
        assert_eq!(progress.completed_rounds(), 1);

        for _ in 0..3 {
            assert_eq!(progress.next_phase(Phase::Work).next, Phase::ShortBreak);
        }
        assert_eq!(progress.next_phase(Phase::Work).next, Phase::LongBreak);
        assert_eq!(progress.current_round, 1);
        assert_eq!(progress.completed_rounds(), 0);
    }

    #[test]
    fn single_slice_rounds_always_long_break() {
        let mut progress = ProgressionState::new(1, 1);
        for _ in 0..3 {
            let t = progress.next_phase(Phase::Work);
            assert_eq!(t.next, Phase::LongBreak);
            assert_eq!(t.filled_slice, Some(0));
            assert_eq!(progress.current_round, 1);
        }
    }

    #[test]
    fn zero_slices_completes_every_work_phase() {
        let mut progress = ProgressionState::new(0, 0);
        let t = progress.next_phase(Phase::Work);
        assert_eq!(t.next, Phase::LongBreak);
        assert_eq!(progress.current_round, 1);
        assert_eq!(progress.completed_slices_in_round, 0);
    }
}
