use super::common::*;
use crate::config::{ConfigError, StrokeRange};
use crate::scoring::ScoreTable;
use crate::search::{cartesian_power, PoolEntry, PoolIndex, StrokeComboPool};

#[test]
fn cartesian_power_enumerates_every_sequence_in_order() {
    let range = StrokeRange { min: 1, max: 3 };
    let sequences: Vec<_> = cartesian_power(range, 2).collect();

    assert_eq!(sequences.len(), 9);
    assert_eq!(sequences.first(), Some(&seq(&[1, 1])));
    assert_eq!(sequences[1], seq(&[1, 2]));
    assert_eq!(sequences[3], seq(&[2, 1]));
    assert_eq!(sequences.last(), Some(&seq(&[3, 3])));
    assert!(sequences.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn cartesian_power_covers_four_characters() {
    let range = StrokeRange { min: 2, max: 4 };
    assert_eq!(cartesian_power(range, 4).count(), 81);
    assert_eq!(cartesian_power(range, 1).count(), 3);
    assert_eq!(cartesian_power(range, 0).count(), 0);
}

#[test]
fn combinations_match_the_enumeration_size() {
    let table = synthetic_table();
    let range = StrokeRange { min: 2, max: 4 };
    let generator = StrokeComboPool::new(&table, range);

    for length in 1..=4 {
        assert_eq!(
            generator.combinations(length),
            cartesian_power(range, length).count()
        );
    }
    assert_eq!(
        StrokeComboPool::new(&table, StrokeRange { min: 1, max: 30 }).combinations(4),
        810_000
    );
}

#[test]
fn single_character_pool_keeps_high_scoring_strokes() {
    let table = synthetic_table();
    let generator = StrokeComboPool::new(&table, StrokeRange { min: 1, max: 6 });

    let entries = generator.generate(1, 4).expect("pool generates");

    let strokes: Vec<_> = entries.iter().map(|entry| entry.strokes).collect();
    assert_eq!(strokes, vec![seq(&[1]), seq(&[3]), seq(&[5]), seq(&[6])]);
    let scores: Vec<_> = entries.iter().map(|entry| entry.score).collect();
    assert_eq!(scores, vec![4, 4, 4, 5]);
    assert!(entries.iter().all(|entry| entry.total == entry.strokes.sum()));
}

#[test]
fn pool_partitions_the_full_enumeration_by_threshold() {
    let table = ScoreTable::standard();
    let range = StrokeRange { min: 1, max: 12 };
    let generator = StrokeComboPool::new(&table, range);

    for length in 1..=3 {
        let retained = generator.generate(length, 4).expect("pool generates");
        let everything: Vec<_> = cartesian_power(range, length).collect();

        assert_eq!(everything.len(), 12usize.pow(length as u32));
        assert!(retained.len() < everything.len());
        assert!(retained.iter().all(|entry| table.score(entry.total) >= 4));

        let kept: std::collections::HashSet<_> =
            retained.iter().map(|entry| entry.strokes).collect();
        for sequence in everything.iter().filter(|sequence| !kept.contains(sequence)) {
            assert!(table.score(sequence.sum()) < 4, "{sequence} wrongly dropped");
        }
    }
}

#[test]
fn generate_rejects_lengths_outside_one_to_four() {
    let table = synthetic_table();
    let generator = StrokeComboPool::new(&table, StrokeRange { min: 1, max: 6 });

    assert!(matches!(
        generator.generate(0, 4),
        Err(ConfigError::NameLengthOutOfBounds { length: 0 })
    ));
    assert!(matches!(
        generator.generate(5, 4),
        Err(ConfigError::NameLengthOutOfBounds { length: 5 })
    ));
}

#[test]
fn generate_rejects_thresholds_above_five() {
    let table = synthetic_table();
    let generator = StrokeComboPool::new(&table, StrokeRange { min: 1, max: 6 });

    assert!(matches!(
        generator.generate(1, 6),
        Err(ConfigError::ScoreOutOfBounds { score: 6, .. })
    ));
}

#[test]
fn index_groups_entries_of_every_length_by_total() {
    let engine = synthetic_engine(2);
    let pool = pool_for(&engine);

    assert_eq!(pool.len(), 15);
    assert_eq!(pool.totals().collect::<Vec<_>>(), vec![1, 3, 5, 6]);

    let threes: Vec<_> = pool.with_total(3).iter().map(|entry| entry.strokes).collect();
    assert_eq!(threes, vec![seq(&[3]), seq(&[1, 2]), seq(&[2, 1])]);
    assert_eq!(pool.with_total(6).len(), 6);
    assert!(pool.with_total(2).is_empty());
}

#[test]
fn empty_index_reports_empty() {
    let pool: PoolIndex = std::iter::empty::<PoolEntry>().collect();
    assert!(pool.is_empty());
    assert!(pool.with_total(1).is_empty());
}
