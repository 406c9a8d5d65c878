//! Level nodes and the journey table.

use glam::Vec3;
use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::content::JourneyContent;
use super::path::PathCurve;
use super::quiz::Quiz;
use crate::error::TrailheadError;

/// Progression state of a level node.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LevelStatus {
    /// Not yet reachable; clicks on the node are rejected.
    #[default]
    Locked,
    /// Reachable but not yet cleared.
    Unlocked,
    /// All quizzes answered correctly at least once.
    Completed,
}

/// A quiz level placed on the journey path.
///
/// `position` is derived from the path curve when the table is built;
/// afterwards only `status` ever mutates.
#[derive(Debug, Clone)]
pub struct LevelNode {
    /// Stable level identifier, which is also its order along the path.
    pub id: u32,
    /// Progression status.
    pub status: LevelStatus,
    /// World position of the node on the curve.
    pub position: Vec3,
    /// Ordered questions gating this level.
    pub quizzes: Vec<Quiz>,
}

/// The static table of levels along the path.
///
/// Built once from content plus the path curve; process-wide
/// read-mostly state. Only the quiz flow writes to it, through
/// [`complete_level`](Self::complete_level).
pub struct Journey {
    levels: Vec<LevelNode>,
    index: FxHashMap<u32, usize>,
}

impl Journey {
    /// Build the table, placing level `i` of `n` at the curve point for
    /// fraction `i / max(n - 1, 1)`.
    ///
    /// # Errors
    ///
    /// [`TrailheadError::ContentLoad`] when the content has no levels or
    /// duplicate level ids.
    pub fn from_content(
        content: &JourneyContent,
        curve: &PathCurve,
    ) -> Result<Self, TrailheadError> {
        if content.levels.is_empty() {
            return Err(TrailheadError::ContentLoad(
                "journey has no levels".into(),
            ));
        }
        let count = content.levels.len();
        let mut levels = Vec::with_capacity(count);
        let mut index = FxHashMap::default();
        for (i, level) in content.levels.iter().enumerate() {
            if index.insert(level.id, i).is_some() {
                return Err(TrailheadError::ContentLoad(format!(
                    "duplicate level id {}",
                    level.id
                )));
            }
            levels.push(LevelNode {
                id: level.id,
                status: level.status,
                position: curve.level_point(i, count),
                quizzes: level.quizzes.clone(),
            });
        }
        Ok(Self { levels, index })
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the table is empty (never true for a built journey).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// All level nodes in path order.
    #[must_use]
    pub fn levels(&self) -> &[LevelNode] {
        &self.levels
    }

    /// The id of the first level on the path.
    #[must_use]
    pub fn first_level_id(&self) -> u32 {
        self.levels[0].id
    }

    /// Look up a level by id.
    #[must_use]
    pub fn level(&self, id: u32) -> Option<&LevelNode> {
        self.index.get(&id).map(|&i| &self.levels[i])
    }

    /// Whether clicks on this node should open its quiz.
    ///
    /// This is the lock check of the click-handling layer; the
    /// transition controller downstream never re-checks it.
    #[must_use]
    pub fn is_selectable(&self, id: u32) -> bool {
        self.level(id)
            .is_some_and(|l| l.status != LevelStatus::Locked)
    }

    /// Mark `id` completed and unlock its successor on the path.
    ///
    /// Returns the successor's id (the level to travel to next), or
    /// `None` when `id` is unknown or was the last level. A successor
    /// that is already unlocked or completed keeps its status.
    pub fn complete_level(&mut self, id: u32) -> Option<u32> {
        let idx = *self.index.get(&id)?;
        self.levels[idx].status = LevelStatus::Completed;
        log::debug!("level {id} completed");

        let next = self.levels.get_mut(idx + 1)?;
        if next.status == LevelStatus::Locked {
            next.status = LevelStatus::Unlocked;
            log::debug!("level {} unlocked", next.id);
        }
        Some(next.id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::content::LevelContent;
    use super::super::path::zigzag_waypoints;
    use super::*;

    fn content(count: u32) -> JourneyContent {
        JourneyContent {
            levels: (0..count)
                .map(|id| LevelContent {
                    id,
                    status: if id == 0 {
                        LevelStatus::Unlocked
                    } else {
                        LevelStatus::Locked
                    },
                    quizzes: Vec::new(),
                })
                .collect(),
        }
    }

    fn journey(count: u32) -> Journey {
        let curve = PathCurve::new(zigzag_waypoints(count as usize));
        Journey::from_content(&content(count), &curve).unwrap()
    }

    #[test]
    fn empty_content_is_rejected() {
        let curve = PathCurve::new(zigzag_waypoints(0));
        let result = Journey::from_content(
            &JourneyContent { levels: Vec::new() },
            &curve,
        );
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut c = content(3);
        c.levels[2].id = 0;
        let curve = PathCurve::new(zigzag_waypoints(3));
        assert!(Journey::from_content(&c, &curve).is_err());
    }

    #[test]
    fn positions_follow_the_curve() {
        let curve = PathCurve::new(zigzag_waypoints(4));
        let j = Journey::from_content(&content(4), &curve).unwrap();
        for (i, level) in j.levels().iter().enumerate() {
            let expected = curve.level_point(i, 4);
            assert!((level.position - expected).length() < 1e-5);
        }
    }

    #[test]
    fn completing_unlocks_the_successor() {
        let mut j = journey(3);
        assert!(j.is_selectable(0));
        assert!(!j.is_selectable(1));

        let next = j.complete_level(0);
        assert_eq!(next, Some(1));
        assert_eq!(j.level(0).unwrap().status, LevelStatus::Completed);
        assert_eq!(j.level(1).unwrap().status, LevelStatus::Unlocked);
        assert_eq!(j.level(2).unwrap().status, LevelStatus::Locked);
    }

    #[test]
    fn completing_the_last_level_returns_none() {
        let mut j = journey(2);
        assert_eq!(j.complete_level(0), Some(1));
        assert_eq!(j.complete_level(1), None);
        assert_eq!(j.level(1).unwrap().status, LevelStatus::Completed);
    }

    #[test]
    fn replaying_does_not_downgrade_the_successor() {
        let mut j = journey(3);
        assert_eq!(j.complete_level(0), Some(1));
        assert_eq!(j.complete_level(1), Some(2));
        // Replaying level 0: level 1 stays completed.
        assert_eq!(j.complete_level(0), Some(1));
        assert_eq!(j.level(1).unwrap().status, LevelStatus::Completed);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut j = journey(2);
        assert_eq!(j.complete_level(99), None);
        assert_eq!(j.level(0).unwrap().status, LevelStatus::Unlocked);
    }
}
