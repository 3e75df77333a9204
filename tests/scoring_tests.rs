//! Scorer contract tests.
//!
//! These pin the scoring edges the rest of the game depends on:
//! identical strings score 100, disjoint strings score 0, and the
//! final score never leaves [0, 100].

use proptest::prelude::*;

use prompt_arena::{PenaltyPolicy, Scorer};

#[test]
fn test_identical_output_scores_full_match() {
    let scorer = Scorer::new(PenaltyPolicy::PromptLength);
    for s in ["hello world", "a", "x y z w", "the quick brown fox"] {
        let breakdown = scorer.score("prompt", s, s).unwrap();
        assert_eq!(breakdown.match_score, 100, "for {s:?}");
    }
}

#[test]
fn test_disjoint_output_scores_zero_match() {
    let scorer = Scorer::new(PenaltyPolicy::PromptLength);
    let breakdown = scorer.score("prompt", "abc", "xyz").unwrap();
    assert_eq!(breakdown.match_score, 0);
}

#[test]
fn test_greeting_scenario_prompt_length_policy() {
    // Challenge: target "hello world", prompt "hi", generator returns
    // the target exactly. Penalty is min(1 * 2, 30) = 2.
    let scorer = Scorer::new(PenaltyPolicy::PromptLength);
    let breakdown = scorer.score("hi", "hello world", "hello world").unwrap();
    assert_eq!(breakdown.match_score, 100);
    assert_eq!(breakdown.token_penalty, -2);
    assert_eq!(breakdown.final_score, 98);
}

#[test]
fn test_overrun_scenario_output_overrun_policy() {
    // 7-word output vs 5-word target: penalty -2 regardless of match.
    let scorer = Scorer::new(PenaltyPolicy::OutputOverrun);
    let breakdown = scorer
        .score("whatever", "a b c d e f g", "a b c d e")
        .unwrap();
    assert_eq!(breakdown.token_penalty, -2);
    assert_eq!(breakdown.final_score, breakdown.match_score - 2);
}

#[test]
fn test_penalty_is_never_positive() {
    for policy in [PenaltyPolicy::PromptLength, PenaltyPolicy::OutputOverrun] {
        let scorer = Scorer::new(policy);
        let breakdown = scorer.score("one two three", "short", "a much longer target").unwrap();
        assert!(breakdown.token_penalty <= 0);
    }
}

proptest! {
    #[test]
    fn prop_final_score_bounded(
        prompt in ".{0,80}",
        output in ".{0,80}",
        target in "[a-z ]{1,40}",
    ) {
        prop_assume!(!target.trim().is_empty());
        for policy in [PenaltyPolicy::PromptLength, PenaltyPolicy::OutputOverrun] {
            let breakdown = Scorer::new(policy).score(&prompt, &output, &target).unwrap();
            prop_assert!((0..=100).contains(&breakdown.final_score));
            prop_assert!((0..=100).contains(&breakdown.match_score));
            prop_assert!(breakdown.token_penalty <= 0);
        }
    }

    #[test]
    fn prop_identical_strings_always_match(s in "[a-zA-Z0-9 ]{1,40}", prompt in ".{0,40}") {
        prop_assume!(!s.trim().is_empty());
        let breakdown = Scorer::new(PenaltyPolicy::PromptLength)
            .score(&prompt, &s, &s)
            .unwrap();
        prop_assert_eq!(breakdown.match_score, 100);
    }
}
