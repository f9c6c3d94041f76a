//! The sanitization boundary is the security property of the AI
//! subsystem: these tests pin the exact field-presence behavior of the
//! AI-visible view, including its serialized shape.

use rand::rngs::StdRng;
use rand::SeedableRng;

use minecrawl_engine::engine::board::{
    AdjacentItems, Board, BoardLayout, Cell, CellKind, Mark,
};
use minecrawl_engine::engine::models::Coord;
use minecrawl_engine::engine::sanitizer::sanitize;

fn generated_board(seed: u64) -> Board {
    let layout = BoardLayout {
        attacks: 7,
        gold: 6,
        traps: 3,
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::generate(10, 10, &layout, &mut rng);
    // Reveal a checkerboard so the view mixes revealed and hidden cells.
    for c in board.coords().collect::<Vec<_>>() {
        if (c.row + c.col) % 2 == 0 {
            board.reveal(c);
        }
    }
    board
}

/// Collect every object key reachable in a JSON tree.
fn collect_keys(value: &serde_json::Value, keys: &mut Vec<String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (k, v) in map {
                keys.push(k.clone());
                collect_keys(v, keys);
            }
        }
        serde_json::Value::Array(items) => {
            for v in items {
                collect_keys(v, keys);
            }
        }
        _ => {}
    }
}

/// No per-type breakdown is reachable anywhere in the serialized view:
/// the only fields a sanitized cell can ever carry are the four public
/// ones.
#[test]
fn sanitized_json_never_leaks_item_breakdown() {
    let allowed = [
        "cells",
        "is_revealed",
        "mark",
        "revealed_kind",
        "total_adjacent_items",
    ];
    for seed in [1u64, 2, 3, 4, 5] {
        let board = generated_board(seed);
        let view = sanitize(&board);
        let json = view.to_value();
        let mut keys = Vec::new();
        collect_keys(&json, &mut keys);
        for key in keys {
            assert!(allowed.contains(&key.as_str()), "unexpected field: {key}");
        }
    }
}

/// Clue totals equal attacks + gold exactly, for every revealed clue.
#[test]
fn sanitized_totals_match_breakdown_sum() {
    for seed in [10u64, 11, 12] {
        let board = generated_board(seed);
        let view = sanitize(&board);
        for c in board.coords() {
            let cell = board.get(c);
            if cell.revealed && cell.kind == CellKind::Clue {
                let summary = cell.adjacent.expect("generated clue carries a summary");
                assert_eq!(
                    view.get(c).total_adjacent_items,
                    Some(summary.attacks + summary.gold)
                );
            }
        }
    }
}

/// Hidden cells expose neither kind nor total, in the struct and on the
/// wire; the serialized object must omit the fields, not null them.
#[test]
fn unrevealed_cells_are_fully_gated() {
    let board = generated_board(20);
    let view = sanitize(&board);

    for c in view.coords() {
        let sc = view.get(c);
        if !sc.is_revealed {
            assert!(sc.revealed_kind.is_none());
            assert!(sc.total_adjacent_items.is_none());

            let json = serde_json::to_value(sc).unwrap();
            let obj = json.as_object().unwrap();
            assert!(!obj.contains_key("revealed_kind"));
            assert!(!obj.contains_key("total_adjacent_items"));
        }
    }
}

/// Marks are public on hidden and revealed cells alike.
#[test]
fn marks_survive_sanitization() {
    let mut board = generated_board(30);
    let hidden = Coord::new(1, 0);
    let revealed = Coord::new(0, 0);
    board.set_mark(hidden, Some(Mark::BombSuspect));
    board.set_mark(revealed, Some(Mark::GoldSuspect));

    let view = sanitize(&board);
    assert_eq!(view.get(hidden).mark, Some(Mark::BombSuspect));
    assert_eq!(view.get(revealed).mark, Some(Mark::GoldSuspect));
}

/// A revealed clue missing its summary yields no total at all — policies
/// must be able to tell "no data" from "zero items".
#[test]
fn missing_summary_is_absent_not_zero() {
    let mut cells = vec![vec![Cell::hidden(CellKind::Empty); 2]; 2];
    cells[0][0] = Cell {
        kind: CellKind::Clue,
        revealed: true,
        mark: None,
        adjacent: None,
    };
    cells[0][1] = Cell {
        kind: CellKind::Clue,
        revealed: true,
        mark: None,
        adjacent: Some(AdjacentItems {
            attacks: 0,
            gold: 0,
            total: 0,
        }),
    };
    let board = Board::from_cells(cells);
    let view = sanitize(&board);

    assert_eq!(view.get(Coord::new(0, 0)).total_adjacent_items, None);
    assert_eq!(view.get(Coord::new(0, 1)).total_adjacent_items, Some(0));
}

/// Round-trip: the sanitized view deserializes back to the same shape, so
/// it can cross a process boundary without gaining fields.
#[test]
fn sanitized_view_round_trips_through_json() {
    let board = generated_board(40);
    let view = sanitize(&board);
    let json = serde_json::to_string(&view).unwrap();
    let back: minecrawl_engine::engine::sanitizer::SanitizedBoard =
        serde_json::from_str(&json).unwrap();
    for c in view.coords() {
        assert_eq!(view.get(c).is_revealed, back.get(c).is_revealed);
        assert_eq!(view.get(c).total_adjacent_items, back.get(c).total_adjacent_items);
    }
}
