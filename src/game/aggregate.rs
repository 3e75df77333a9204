//! End-of-game aggregation.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, RoundResult};

/// Reduced view of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of final scores across all completed rounds.
    pub total_score: i64,
    /// Player behind the highest-scoring single round. Ties go to the
    /// earliest submission.
    pub top_player: String,
}

/// Reduce a sequence of round results into a `Summary`.
///
/// Fails with `EmptyResults` when no rounds were completed; callers in
/// the normal game flow only aggregate after at least one submission.
pub fn aggregate<'a, I>(results: I) -> Result<Summary, GameError>
where
    I: IntoIterator<Item = &'a RoundResult>,
{
    let mut total_score = 0;
    let mut top: Option<&RoundResult> = None;

    for result in results {
        total_score += result.final_score;
        // Strictly-greater keeps the first occurrence on ties.
        if top.map_or(true, |best| result.final_score > best.final_score) {
            top = Some(result);
        }
    }

    let top = top.ok_or(GameError::EmptyResults)?;
    Ok(Summary {
        total_score,
        top_player: top.player.clone(),
    })
}
