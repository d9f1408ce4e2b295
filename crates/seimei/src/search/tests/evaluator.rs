use super::common::*;
use crate::config::StrokeRange;
use crate::scoring::{InputError, KakuCalculator};
use crate::search::{
    BestCandidates, Candidate, PairEvaluator, PoolIndex, QualifiedSumPair, StrokeComboPool,
};

fn pair(heavenly_total: u32, earthly_total: u32) -> QualifiedSumPair {
    QualifiedSumPair {
        heavenly_total,
        earthly_total,
        heavenly_score: 4,
        earthly_score: 4,
        total_score: 5,
    }
}

#[test]
fn single_character_pair_scores_twenty_nine() {
    let engine = synthetic_engine(1);
    let pool = pool_for(&engine);
    let evaluator = PairEvaluator::new(engine.calculator(), &pool);

    let best = evaluator.evaluate(&pair(1, 5)).expect("evaluates");

    assert_eq!(best.best_score(), Some(29));
    assert_eq!(best.len(), 1);
    let winner = best.candidates()[0];
    assert_eq!(winner.surname, seq(&[1]));
    assert_eq!(winner.given, seq(&[5]));
    assert_eq!(winner.reading.values.human, 6);
    assert_eq!(winner.reading.values.outer, 2);
    assert_eq!(winner.reading.scores.outer, 1);
    assert_eq!(winner.overall, 29);
}

#[test]
fn missing_pool_side_yields_the_empty_result() {
    let engine = synthetic_engine(1);
    let pool = pool_for(&engine);
    let evaluator = PairEvaluator::new(engine.calculator(), &pool);

    for missing in [pair(2, 5), pair(1, 4), pair(40, 40)] {
        let best = evaluator.evaluate(&missing).expect("evaluates");
        assert_eq!(best, BestCandidates::empty());
        assert_eq!(best.best_score(), None);
    }
}

#[test]
fn evaluation_keeps_exactly_the_maximal_combinations() {
    let engine = synthetic_engine(2);
    let pool = pool_for(&engine);
    let calculator = engine.calculator();
    let evaluator = PairEvaluator::new(calculator, &pool);

    for target in [pair(3, 3), pair(1, 5), pair(5, 1), pair(6, 6)] {
        let best = evaluator.evaluate(&target).expect("evaluates");

        let mut brute_force = Vec::new();
        for surname in pool.with_total(target.heavenly_total) {
            for given in pool.with_total(target.earthly_total) {
                let reading = calculator
                    .calculate(&surname.strokes, &given.strokes)
                    .expect("reading");
                brute_force.push((surname.strokes, given.strokes, reading.overall()));
            }
        }

        let max = brute_force.iter().map(|(_, _, overall)| *overall).max();
        assert_eq!(best.best_score(), max);
        let expected_ties = brute_force
            .iter()
            .filter(|(_, _, overall)| Some(*overall) == max)
            .count();
        assert_eq!(best.len(), expected_ties);
        assert!(best
            .candidates()
            .iter()
            .all(|candidate| Some(candidate.overall) == max && candidate.overall <= 35));
        assert!(best.candidates().iter().all(|candidate| {
            candidate.surname.sum() == target.heavenly_total
                && candidate.given.sum() == target.earthly_total
        }));
    }
}

#[test]
fn ties_accumulate_until_a_higher_score_resets_them() {
    let engine = synthetic_engine(1);
    let calculator = engine.calculator();
    let base = candidate(&calculator, &[1], &[5]);

    let mut best = BestCandidates::empty();
    assert!(best.admits(0));
    best.offer(Candidate { overall: 10, ..base });
    best.offer(Candidate { overall: 10, ..base });
    assert_eq!(best.best_score(), Some(10));
    assert_eq!(best.len(), 2);

    best.offer(Candidate { overall: 9, ..base });
    assert_eq!(best.len(), 2);
    assert!(!best.admits(9));

    best.offer(Candidate { overall: 12, ..base });
    assert_eq!(best.best_score(), Some(12));
    assert_eq!(best.len(), 1);

    best.offer(Candidate { overall: 12, ..base });
    assert_eq!(best.len(), 2);
}

#[test]
fn out_of_bounds_pool_entries_fail_the_evaluation() {
    let engine = synthetic_engine(1);
    let table = synthetic_table();
    let wide = StrokeComboPool::new(&table, StrokeRange { min: 1, max: 6 });
    let pool: PoolIndex = wide.generate(1, 4).expect("pool").into_iter().collect();
    let narrow = KakuCalculator::new(engine.table(), StrokeRange { min: 1, max: 3 });
    let evaluator = PairEvaluator::new(narrow, &pool);

    let err = evaluator.evaluate(&pair(1, 5)).expect_err("stroke 5 rejected");
    assert!(matches!(err, InputError::OutOfBounds { stroke: 5, .. }));
}
