//! Per-pass run state: the resolution phase, the section-number path, and
//! the numbering switch.

/// Resolution phase of the two-pass conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// First traversal: anchor and definition tables are being built and
    /// structure is validated; emitted text is discarded.
    Collect,
    /// Second traversal: tables are complete, output is final.
    Emit,
}

/// Mutable traversal state for a single pass over one document.
///
/// Created fresh per pass; only the resolution tables outlive it. The
/// section-number path holds one component per heading level below the
/// numbering start point (a level-2 heading owns a one-element path).
#[derive(Debug)]
pub struct RunState {
    phase: Phase,
    path: Vec<u32>,
    numbering: bool,
}

impl RunState {
    pub fn new(phase: Phase) -> Self {
        RunState {
            phase,
            // Incremented to 1 by the first numbered section.
            path: vec![0],
            numbering: false,
        }
    }

    pub fn is_collect(&self) -> bool {
        self.phase == Phase::Collect
    }

    /// Numbering switches on when the status section is passed.
    pub fn start_numbering(&mut self) {
        self.numbering = true;
    }

    pub fn numbering_started(&self) -> bool {
        self.numbering
    }

    /// Advance the path for a section entered at `level` and render its
    /// number, e.g. `"3. "` at level 2 or `"3.1 "` deeper. Before the
    /// status boundary this is a no-op returning an empty string.
    pub fn next_number(&mut self, level: usize) -> String {
        if !self.numbering {
            return String::new();
        }
        if level > self.path.len() + 1 {
            // One level deeper.
            self.path.push(1);
        } else if level == self.path.len() + 1 {
            // Next sibling at the same depth.
            self.path[level - 2] += 1;
        } else {
            // Up one or more levels.
            while self.path.len() >= level {
                self.path.pop();
            }
            self.path[level - 2] += 1;
        }
        let joined = self
            .path
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".");
        if level == 2 {
            format!("{joined}. ")
        } else {
            format!("{joined} ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbered_state() -> RunState {
        let mut state = RunState::new(Phase::Emit);
        state.start_numbering();
        state
    }

    #[test]
    fn test_unnumbered_before_status() {
        let mut state = RunState::new(Phase::Emit);
        assert_eq!(state.next_number(2), "");
        assert_eq!(state.next_number(3), "");
        assert!(!state.numbering_started());
    }

    #[test]
    fn test_top_level_siblings() {
        let mut state = numbered_state();
        assert_eq!(state.next_number(2), "1. ");
        assert_eq!(state.next_number(2), "2. ");
        assert_eq!(state.next_number(2), "3. ");
    }

    #[test]
    fn test_descend_appends_one() {
        let mut state = numbered_state();
        assert_eq!(state.next_number(2), "1. ");
        assert_eq!(state.next_number(3), "1.1 ");
        assert_eq!(state.next_number(4), "1.1.1 ");
    }

    #[test]
    fn test_sibling_increments_last_only() {
        let mut state = numbered_state();
        state.next_number(2);
        state.next_number(3);
        assert_eq!(state.next_number(3), "1.2 ");
        assert_eq!(state.next_number(3), "1.3 ");
    }

    #[test]
    fn test_ascend_pops_then_increments() {
        let mut state = numbered_state();
        state.next_number(2); // 1.
        state.next_number(3); // 1.1
        state.next_number(4); // 1.1.1
        assert_eq!(state.next_number(3), "1.2 ");
        assert_eq!(state.next_number(2), "2. ");
    }

    #[test]
    fn test_ascend_multiple_levels() {
        let mut state = numbered_state();
        state.next_number(2); // 1.
        state.next_number(3); // 1.1
        state.next_number(4); // 1.1.1
        state.next_number(5); // 1.1.1.1
        assert_eq!(state.next_number(2), "2. ");
    }

    #[test]
    fn test_trailing_punctuation_by_level() {
        let mut state = numbered_state();
        assert!(state.next_number(2).ends_with(". "));
        assert!(state.next_number(3).ends_with(' '));
        assert!(!state.next_number(3).ends_with(". "));
    }

    #[test]
    fn test_phase_accessors() {
        assert!(RunState::new(Phase::Collect).is_collect());
        assert!(!RunState::new(Phase::Emit).is_collect());
    }

    proptest! {
        #[test]
        fn prop_path_depth_tracks_level(proposals in prop::collection::vec(2usize..6, 1..40)) {
            let mut state = numbered_state();
            // The first numbered section is always at level 2, and headings
            // never skip levels on the way down.
            let mut level = 1;
            for proposal in proposals {
                level = proposal.min(level + 1);
                let number = state.next_number(level);
                let digits = number.trim_end().trim_end_matches('.');
                prop_assert_eq!(digits.split('.').count(), level - 1);
                prop_assert_eq!(number.ends_with(". "), level == 2);
                for part in digits.split('.') {
                    prop_assert!(part.parse::<u32>().is_ok_and(|n| n >= 1));
                }
            }
        }

        #[test]
        fn prop_unnumbered_until_started(levels in prop::collection::vec(2usize..6, 0..20)) {
            let mut state = RunState::new(Phase::Emit);
            for level in levels {
                prop_assert_eq!(state.next_number(level), "");
            }
        }
    }
}
