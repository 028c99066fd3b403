// Property tests over randomly generated boards.
//
// Invariants covered:
// - exactly the configured number of mines is placed, all on the board;
// - every safe field holds the number of mines among its neighbours;
// - a click on a zero field opens exactly its clearing and border;
// - a loss reveals unflagged mines only, keeping flags on mines;
// - retry restores a covered, unfrozen board satisfying the same invariants.
mod common;

use common::{expected_clearing, mines_around};
use proptest::prelude::*;
use saper::{Board, BoardConfig, FieldCoordinates, FieldState, FieldValue, RandomBoard};

fn assert_layout_consistent(b: &RandomBoard) {
    let mines = b.iter().filter(|(_, f)| f.is_mine()).count();
    assert_eq!(mines, b.mine_count());
    for (at, field) in b.iter() {
        assert!(at[0] < b.height() && at[1] < b.width());
        if let FieldValue::Count(count) = field.value() {
            assert_eq!(count, mines_around(b, at), "wrong count at {:?}", at);
        }
    }
}

fn config() -> impl Strategy<Value = BoardConfig> {
    (1usize..=24, 1usize..=24)
        .prop_flat_map(|(width, height)| (Just(width), Just(height), 0..width * height))
        .prop_map(|(width, height, mines)| BoardConfig::new(width, height, mines))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fill_satisfies_count_invariants(config in config(), seed in any::<u64>()) {
        let b = Board::seeded(config, seed).unwrap();
        assert_layout_consistent(&b);
    }

    #[test]
    fn zero_click_opens_exactly_the_clearing(config in config(), seed in any::<u64>()) {
        let mut b = Board::seeded(config, seed).unwrap();
        let zero = b.iter()
            .find(|(_, f)| f.value() == FieldValue::Count(0))
            .map(|(at, _)| at);
        if let Some(start) = zero {
            let expected = expected_clearing(&b, start);
            prop_assert!(!b.left_click(start));
            for (at, field) in b.iter() {
                prop_assert_eq!(field.state().is_revealed(), expected.contains(&at));
            }
        }
    }

    #[test]
    fn loss_reveals_unflagged_mines_only(
        config in config(),
        seed in any::<u64>(),
        flags in proptest::collection::vec(any::<prop::sample::Index>(), 0..12),
    ) {
        prop_assume!(config.mines > 0);
        let mut b = Board::seeded(config, seed).unwrap();
        let area = b.width() * b.height();
        let flagged: Vec<FieldCoordinates> = flags.iter()
            .map(|i| {
                let offset = i.index(area);
                [offset / b.width(), offset % b.width()]
            })
            .collect();
        for &at in &flagged {
            if b.field(at).state() == FieldState::Hidden {
                b.right_click(at);
            }
        }
        let before: Vec<FieldState> = b.iter().map(|(_, f)| f.state()).collect();
        let unflagged_mine = b.iter()
            .find(|(_, f)| f.is_mine() && f.state() != FieldState::FlaggedAsMine)
            .map(|(at, _)| at);
        if let Some(mine) = unflagged_mine {
            prop_assert!(b.left_click(mine));
            prop_assert!(b.is_frozen());
            for ((_, field), prior) in b.iter().zip(before) {
                if !field.is_mine() {
                    prop_assert_eq!(field.state(), prior);
                } else if prior == FieldState::FlaggedAsMine {
                    prop_assert_eq!(field.state(), FieldState::FlaggedAsMine);
                } else {
                    prop_assert_eq!(field.state(), FieldState::Revealed);
                }
            }
        }
    }

    #[test]
    fn retry_restores_a_fresh_board(config in config(), seed in any::<u64>(), clicks in 1usize..6) {
        let mut b = Board::seeded(config, seed).unwrap();
        let width = b.width();
        let area = width * b.height();
        for i in 0..clicks {
            let offset = (i * 7919) % area;
            b.right_click([offset / width, offset % width]);
            b.left_click([(offset + 1) % area / width, (offset + 1) % area % width]);
        }
        b.retry();
        prop_assert!(!b.is_frozen());
        prop_assert!(b.iter().all(|(_, f)| f.state() == FieldState::Hidden));
        assert_layout_consistent(&b);
    }
}
