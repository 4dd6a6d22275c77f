//! Property-based tests over the pure reconciliation and scoring functions.

use std::collections::BTreeSet;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use telar::catalog::{catalog, AssessmentMode, Language};
use telar::profile::{AnswerValue, ProfileSnapshot};
use telar::progress::{
    derive_block_index, merge_by_recency, validate_answered_ids, MergeSource, ProgressRecord,
};
use telar::scoring::calculate_scores;

fn arb_question_id() -> impl Strategy<Value = String> {
    let real = catalog(Language::Es, AssessmentMode::Full)
        .questions()
        .map(|q| Just(q.id.clone()).boxed())
        .collect::<Vec<_>>();
    prop_oneof![
        proptest::strategy::Union::new(real),
        "[a-z_]{3,24}".prop_map(|s| format!("ghost_{s}")),
    ]
}

fn arb_answered() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_question_id(), 0..40)
}

fn arb_record() -> impl Strategy<Value = ProgressRecord> {
    (arb_answered(), 0..10usize, 0i64..2_000_000_000).prop_map(|(ids, block, secs)| {
        let mut record = ProgressRecord::empty(Utc.timestamp_opt(secs, 0).single().unwrap());
        record.answered_ids = ids;
        record.block_index = block;
        record
    })
}

proptest! {
    // The derived index is always a valid block position.
    #[test]
    fn derived_index_is_in_range(ids in arb_answered()) {
        let cat = catalog(Language::Es, AssessmentMode::Full);
        let answered: BTreeSet<String> = ids.into_iter().collect();
        let index = derive_block_index(&answered, &cat, &ProfileSnapshot::new());
        prop_assert!(index < cat.block_count());
    }

    // Derivation is a pure function of its inputs.
    #[test]
    fn derivation_is_deterministic(ids in arb_answered()) {
        let cat = catalog(Language::Es, AssessmentMode::Full);
        let answered: BTreeSet<String> = ids.into_iter().collect();
        let profile = ProfileSnapshot::new();
        prop_assert_eq!(
            derive_block_index(&answered, &cat, &profile),
            derive_block_index(&answered, &cat, &profile)
        );
    }

    // Answering more questions never moves the derived index backwards.
    #[test]
    fn derivation_is_monotone_under_growth(ids in arb_answered(), extra in arb_question_id()) {
        let cat = catalog(Language::Es, AssessmentMode::Full);
        let profile = ProfileSnapshot::new();
        let smaller: BTreeSet<String> = ids.into_iter().collect();
        let mut larger = smaller.clone();
        larger.insert(extra);
        prop_assert!(
            derive_block_index(&larger, &cat, &profile)
                >= derive_block_index(&smaller, &cat, &profile)
        );
    }

    // Validation partitions the input: every id lands in exactly one side,
    // and everything kept is a real catalog id.
    #[test]
    fn validation_partitions_ids(ids in arb_answered()) {
        let cat = catalog(Language::Es, AssessmentMode::Full);
        let unique: BTreeSet<String> = ids.into_iter().collect();
        let validation = validate_answered_ids(unique.iter().cloned(), &cat);

        prop_assert_eq!(validation.valid.len() + validation.removed.len(), unique.len());
        for id in &validation.valid {
            prop_assert!(cat.valid_ids().contains(id.as_str()));
        }
        for id in &validation.removed {
            prop_assert!(!cat.valid_ids().contains(id.as_str()));
        }
    }

    // The merge picks one of its inputs unchanged, and never the stale one.
    #[test]
    fn merge_picks_the_fresher_record(local in arb_record(), remote in arb_record()) {
        let (merged, source) = merge_by_recency(Some(local.clone()), Some(remote.clone()));
        let merged = merged.unwrap();
        match source {
            MergeSource::Local => {
                prop_assert_eq!(&merged, &local);
                prop_assert!(local.last_updated >= remote.last_updated);
            }
            MergeSource::Remote => {
                prop_assert_eq!(&merged, &remote);
                prop_assert!(remote.last_updated > local.last_updated);
            }
            MergeSource::Fresh => prop_assert!(false, "two inputs cannot merge to fresh"),
        }
    }

    // Merge result is stable under small clock skew of the loser.
    #[test]
    fn merge_ignores_loser_content(record in arb_record(), skew in 1i64..3600) {
        let mut older = record.clone();
        older.last_updated = record.last_updated - Duration::seconds(skew);
        older.block_index = record.block_index + 1;
        let (merged, _) = merge_by_recency(Some(record.clone()), Some(older));
        prop_assert_eq!(merged.unwrap(), record);
    }

    // Scores never panic and always land in 0..=100 for arbitrary text.
    #[test]
    fn scores_are_bounded_for_any_profile(
        description in ".{0,300}",
        sales in "[a-z_]{0,16}",
        channels in prop::collection::vec("[a-z]{2,12}", 0..8),
    ) {
        let mut profile = ProfileSnapshot::new();
        profile.set("businessDescription", AnswerValue::from(description));
        profile.set("salesStatus", AnswerValue::from(sales));
        profile.set("promotionChannels", AnswerValue::from(channels));

        let scores = calculate_scores(&profile);
        for value in [
            scores.idea_validation,
            scores.user_experience,
            scores.market_fit,
            scores.monetization,
        ] {
            prop_assert!((0.0..=100.0).contains(&value));
        }
    }
}
