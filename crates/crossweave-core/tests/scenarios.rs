use crossweave::core::models::grid::Direction;
use crossweave::core::models::word::Word;
use crossweave::engine::audit::audit_layout;
use crossweave::engine::search::generate_layout;
use crossweave::engine::selection::select_words;
use crossweave::workflows::generate::generate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn words(texts: &[&str]) -> Vec<Word> {
    texts.iter().map(|t| Word::bare(t).unwrap()).collect()
}

#[test]
fn three_short_words_interlock() {
    let layout = generate_layout(&words(&["CAT", "CAR", "ART"]), 7).expect("layout");

    let mut placed = layout.words();
    placed.sort();
    assert_eq!(placed, vec!["ART", "CAR", "CAT"]);

    let across = layout
        .placements()
        .filter(|p| p.direction == Direction::Across)
        .count();
    assert!(across >= 1 && across < 3, "needs at least one crossing");
    audit_layout(&layout).unwrap();
}

#[test]
fn full_width_word_spans_the_whole_row() {
    let layout = generate_layout(&words(&["AAAAAAA"]), 7).expect("layout");
    assert_eq!(layout.entries.len(), 1);

    let entry = &layout.entries[0];
    assert_eq!(entry.clue_number, 1);
    assert_eq!(entry.placement.start_row, 3);
    assert_eq!(entry.placement.start_col, 0);
    assert_eq!(entry.placement.end(), (3, 6));
    audit_layout(&layout).unwrap();
}

#[test]
fn words_without_shared_letters_fail() {
    assert!(generate_layout(&words(&["ZEBRA", "GHOST"]), 7).is_none());
}

#[test]
fn supervisor_falls_back_when_no_selection_can_interlock() {
    let pool = words(&["ZEBRA", "GHOST"]);
    let outcome = generate(&pool, Some(2), &mut StdRng::seed_from_u64(3)).unwrap();
    assert!(outcome.is_fallback());
    audit_layout(&outcome.layout).unwrap();
}

#[test]
fn selector_uses_every_word_of_an_exact_pool() {
    let pool = words(&["CAT", "CAR", "ART", "TAR"]);
    for seed in 0..10 {
        let selected = select_words(&pool, 4, &mut StdRng::seed_from_u64(seed));
        let unique: HashSet<_> = selected.iter().map(|w| w.text()).collect();
        assert_eq!(selected.len(), 4);
        assert_eq!(unique.len(), 4);
    }
}

#[test]
fn oversized_word_is_never_truncated() {
    assert!(generate_layout(&words(&["ABCDEFGHI"]), 7).is_none());
    assert!(generate_layout(&words(&["ABCDEFGHI", "CAT"]), 7).is_none());
}

#[test]
fn supervisor_reorders_an_exact_pool_whose_file_order_fails() {
    let pool = words(&["CAT", "ART", "ERA"]);
    assert!(generate_layout(&pool, 7).is_none());
    assert!(generate_layout(&words(&["ERA", "ART", "CAT"]), 7).is_some());

    for seed in 0..5 {
        let outcome = generate(&pool, Some(3), &mut StdRng::seed_from_u64(seed)).unwrap();
        assert!(!outcome.is_fallback(), "seed {seed} fell back");
        assert_eq!(outcome.layout.entries.len(), 3);
        audit_layout(&outcome.layout).unwrap();
    }
}
