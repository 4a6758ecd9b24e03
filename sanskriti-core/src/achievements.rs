//! Achievement progress tracking.
//!
//! Achievements are a fixed catalog; only the per-entry progress counter and
//! completion flag mutate, driven by user actions elsewhere in the UI.
use crate::data::AchievementDef;
use crate::rewards::RewardLedger;

/// Live progress for one achievement from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementEntry {
    def: AchievementDef,
    progress: u32,
    completed: bool,
}

impl AchievementEntry {
    fn new(def: AchievementDef) -> Self {
        let progress = def.start_progress.min(def.target);
        let completed = progress >= def.target;
        Self {
            def,
            progress,
            completed,
        }
    }

    /// Catalog definition backing this entry.
    #[must_use]
    pub const fn def(&self) -> &AchievementDef {
        &self.def
    }

    /// Progress counter, clamped to the target.
    #[must_use]
    pub const fn progress(&self) -> u32 {
        self.progress
    }

    /// Whether the target has been reached. Never un-set once true.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Completion percentage for display, floored to an integer.
    #[must_use]
    pub fn pct(&self) -> u8 {
        debug_assert!(self.def.target > 0, "achievement target must be positive");
        u8::try_from(self.progress * 100 / self.def.target.max(1)).unwrap_or(100)
    }
}

/// Tracks progress counters and completion for the achievement catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementTracker {
    entries: Vec<AchievementEntry>,
}

impl AchievementTracker {
    /// Build a tracker over the fixed catalog. Entries whose seeded progress
    /// already meets the target start out completed without paying the reward;
    /// their coins are assumed to be part of the starting balance.
    #[must_use]
    pub fn new(catalog: Vec<AchievementDef>) -> Self {
        Self {
            entries: catalog.into_iter().map(AchievementEntry::new).collect(),
        }
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[AchievementEntry] {
        &self.entries
    }

    /// Look up a single entry.
    #[must_use]
    pub fn get(&self, achievement_id: &str) -> Option<&AchievementEntry> {
        self.entries.iter().find(|e| e.def.id == achievement_id)
    }

    /// Record `delta` units of progress for the named achievement, clamped to
    /// its target. Crossing the target flips `completed` exactly once and
    /// credits the reward coins to the ledger exactly once.
    ///
    /// # Panics
    ///
    /// Panics on an unknown `achievement_id`: catalogs are fixed at build
    /// time, so a miss is a programming fault rather than a runtime condition.
    pub fn record_progress(&mut self, achievement_id: &str, delta: u32, ledger: &mut RewardLedger) {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.def.id == achievement_id)
        else {
            panic!("unknown achievement id: {achievement_id}");
        };

        entry.progress = entry.progress.saturating_add(delta).min(entry.def.target);
        if !entry.completed && entry.progress >= entry.def.target {
            entry.completed = true;
            ledger.credit(entry.def.reward_coins);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<AchievementDef> {
        vec![
            AchievementDef {
                id: "quiz-master".into(),
                title: "Quiz Master".into(),
                desc: "Answer 10 heritage questions correctly".into(),
                target: 10,
                reward_coins: 30,
                start_progress: 0,
            },
            AchievementDef {
                id: "heritage-explorer".into(),
                title: "Heritage Explorer".into(),
                desc: "Visit 3 AR monuments".into(),
                target: 3,
                reward_coins: 50,
                start_progress: 3,
            },
        ]
    }

    #[test]
    fn progress_clamps_to_target() {
        let mut tracker = AchievementTracker::new(catalog());
        let mut ledger = RewardLedger::new(0);
        tracker.record_progress("quiz-master", 25, &mut ledger);
        assert_eq!(tracker.get("quiz-master").unwrap().progress(), 10);
    }

    #[test]
    fn completion_credits_reward_exactly_once() {
        let mut tracker = AchievementTracker::new(catalog());
        let mut ledger = RewardLedger::new(0);
        tracker.record_progress("quiz-master", 9, &mut ledger);
        assert_eq!(ledger.balance(), 0);
        assert!(!tracker.get("quiz-master").unwrap().completed());

        tracker.record_progress("quiz-master", 1, &mut ledger);
        assert!(tracker.get("quiz-master").unwrap().completed());
        assert_eq!(ledger.balance(), 30);

        // Further progress must not pay again.
        tracker.record_progress("quiz-master", 5, &mut ledger);
        assert_eq!(ledger.balance(), 30);
        assert_eq!(tracker.get("quiz-master").unwrap().progress(), 10);
    }

    #[test]
    fn seeded_completion_does_not_pay_at_construction() {
        let tracker = AchievementTracker::new(catalog());
        let entry = tracker.get("heritage-explorer").unwrap();
        assert!(entry.completed());
        assert_eq!(entry.pct(), 100);
    }

    #[test]
    fn pct_is_floored() {
        let tracker = AchievementTracker::new(vec![AchievementDef {
            id: "culture-enthusiast".into(),
            title: "Culture Enthusiast".into(),
            desc: "Spend 30 minutes exploring".into(),
            target: 30,
            reward_coins: 25,
            start_progress: 25,
        }]);
        // 25/30 is 83.33…%; the display value floors.
        assert_eq!(tracker.get("culture-enthusiast").unwrap().pct(), 83);
    }

    #[test]
    #[should_panic(expected = "unknown achievement id")]
    fn unknown_id_is_a_contract_violation() {
        let mut tracker = AchievementTracker::new(catalog());
        let mut ledger = RewardLedger::new(0);
        tracker.record_progress("missing", 1, &mut ledger);
    }
}
