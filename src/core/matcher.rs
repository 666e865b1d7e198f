use std::cmp::Ordering;
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::core::scoring::calculate_compatibility;
use crate::error::RankError;
use crate::models::{Candidate, Profile, RankedMatch};

const DEFAULT_CHUNK_SIZE: usize = 32;

/// Result of ranking one seeker against a batch of candidates
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Batch ranking - repeated pairwise scoring, then sort and truncate
///
/// # Pipeline Stages
/// 1. Score every candidate against the seeker
/// 2. Drop candidates under the minimum score
/// 3. Sort by overall score (descending), ties by candidate id
/// 4. Truncate to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    min_score: f64,
    chunk_size: usize,
}

impl Matcher {
    pub fn new(min_score: f64, chunk_size: usize) -> Self {
        Self {
            min_score,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Rank candidates on the calling thread
    pub fn rank(&self, seeker: &Profile, candidates: Vec<Candidate>, limit: usize) -> MatchResult {
        let total_candidates = candidates.len();

        let matches = candidates
            .into_iter()
            .map(|candidate| score_candidate(seeker, candidate))
            .collect();

        MatchResult {
            matches: self.finalize(matches, limit),
            total_candidates,
        }
    }

    /// Rank candidates on tokio's blocking pool, one task per chunk.
    ///
    /// Output order comes from sorting once every chunk is in, so it matches
    /// [`Matcher::rank`] regardless of which task finishes first.
    pub async fn rank_concurrent(
        &self,
        seeker: Arc<Profile>,
        candidates: Vec<Candidate>,
        limit: usize,
    ) -> Result<MatchResult, RankError> {
        let total_candidates = candidates.len();
        let mut tasks = JoinSet::new();

        let mut remaining = candidates.into_iter().peekable();
        while remaining.peek().is_some() {
            let chunk: Vec<Candidate> = remaining.by_ref().take(self.chunk_size).collect();
            let seeker = Arc::clone(&seeker);
            tasks.spawn_blocking(move || {
                chunk
                    .into_iter()
                    .map(|candidate| score_candidate(&seeker, candidate))
                    .collect::<Vec<_>>()
            });
        }

        let mut matches = Vec::with_capacity(total_candidates);
        while let Some(scored) = tasks.join_next().await {
            matches.extend(scored?);
        }

        Ok(MatchResult {
            matches: self.finalize(matches, limit),
            total_candidates,
        })
    }

    fn finalize(&self, mut matches: Vec<RankedMatch>, limit: usize) -> Vec<RankedMatch> {
        matches.retain(|m| m.result.overall_score() >= self.min_score);

        matches.sort_by(|a, b| {
            b.result
                .overall_score()
                .partial_cmp(&a.result.overall_score())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.candidate_id.cmp(&b.candidate_id))
        });

        matches.truncate(limit);
        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_CHUNK_SIZE)
    }
}

fn score_candidate(seeker: &Profile, candidate: Candidate) -> RankedMatch {
    RankedMatch {
        result: calculate_compatibility(seeker, &candidate.profile),
        candidate_id: candidate.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FitnessLevel;

    fn create_candidate(id: &str, workouts: &[&str], level: FitnessLevel) -> Candidate {
        Candidate::new(
            id,
            Profile {
                workout_types: workouts.iter().map(|w| w.to_string()).collect(),
                fitness_level: Some(level),
                ..Profile::default()
            },
        )
    }

    fn create_seeker() -> Profile {
        Profile {
            workout_types: ["Running", "Yoga"].iter().map(|w| w.to_string()).collect(),
            fitness_level: Some(FitnessLevel::Intermediate),
            ..Profile::default()
        }
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let matcher = Matcher::default();
        let candidates = vec![
            create_candidate("far", &["Boxing"], FitnessLevel::Athlete),
            create_candidate("close", &["Running", "Yoga"], FitnessLevel::Intermediate),
            create_candidate("middle", &["Running"], FitnessLevel::Advanced),
        ];

        let result = matcher.rank(&create_seeker(), candidates, 10);

        let ids: Vec<&str> = result.matches.iter().map(|m| m.candidate_id.as_str()).collect();
        assert_eq!(ids, vec!["close", "middle", "far"]);
        assert_eq!(result.total_candidates, 3);
    }

    #[test]
    fn test_ties_broken_by_id() {
        let matcher = Matcher::default();
        let candidates = vec![
            create_candidate("b", &["Yoga"], FitnessLevel::Beginner),
            create_candidate("a", &["Yoga"], FitnessLevel::Beginner),
        ];

        let result = matcher.rank(&create_seeker(), candidates, 10);

        assert_eq!(result.matches[0].candidate_id, "a");
        assert_eq!(result.matches[1].candidate_id, "b");
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::default();
        let candidates: Vec<Candidate> = (0..20)
            .map(|i| create_candidate(&i.to_string(), &["Running"], FitnessLevel::Beginner))
            .collect();

        let result = matcher.rank(&create_seeker(), candidates, 5);

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_min_score_filters() {
        let matcher = Matcher::new(0.6, 8);
        let candidates = vec![
            create_candidate("good", &["Running", "Yoga"], FitnessLevel::Intermediate),
            create_candidate("poor", &["Boxing"], FitnessLevel::Athlete),
        ];

        let result = matcher.rank(&create_seeker(), candidates, 10);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].candidate_id, "good");
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let matcher = Matcher::new(0.0, 3);
        let levels = FitnessLevel::ALL;
        let pool: [&[&str]; 4] = [&["Running"], &["Yoga", "Boxing"], &["Running", "Yoga"], &[]];
        let candidates: Vec<Candidate> = (0..25)
            .map(|i| create_candidate(&format!("c{:02}", i), pool[i % pool.len()], levels[i % levels.len()]))
            .collect();

        let seeker = create_seeker();
        let sequential = matcher.rank(&seeker, candidates.clone(), 10);
        let concurrent = matcher
            .rank_concurrent(Arc::new(seeker), candidates, 10)
            .await
            .unwrap();

        assert_eq!(sequential.matches, concurrent.matches);
        assert_eq!(concurrent.total_candidates, 25);
    }

    #[tokio::test]
    async fn test_concurrent_empty_batch() {
        let result = Matcher::default()
            .rank_concurrent(Arc::new(create_seeker()), vec![], 10)
            .await
            .unwrap();

        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }
}
