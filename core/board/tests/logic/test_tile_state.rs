use super::super::test_helpers::items_board;
use super::super::test_helpers::scripted_pool::{PoolEvent, ScriptedPool};
use super::super::test_helpers::scripted_board;
use match_board::domain::constants::DEFAULT_CRATE_STEPS;
use match_board::domain::core_types::{StateAdvance, TileGroup};
use match_board::ecs_types::components::GridPosition;

#[test]
fn test_non_stateful_tile_is_noop() {
    let mut board = scripted_board(3, 3, ScriptedPool::new());
    let pos = GridPosition::new(1, 1);
    let before = board.snapshot();
    let events_before = board.pool().events.len();

    let outcome = board.try_advance_state(pos).expect("位置應有效");

    assert_eq!(outcome, StateAdvance::NotStateful);
    assert_eq!(board.snapshot(), before);
    assert_eq!(board.pool().events.len(), events_before);
}

#[test]
fn test_n_step_tile_collapses_on_nth_call() {
    const STEPS: u8 = 4;
    let pool = ScriptedPool::new().with_steps(TileGroup::Ice, STEPS);
    let mut board = scripted_board(2, 2, pool);
    let pos = GridPosition::new(0, 1);
    board.set_tile(pos, TileGroup::Ice).expect("位置應有效");

    for call in 1..STEPS {
        let outcome = board.try_advance_state(pos).expect("位置應有效");
        assert_eq!(outcome, StateAdvance::Advanced, "第 {call} 次");
        assert_eq!(board.group_at(pos).expect("位置應有效"), TileGroup::Ice);
    }

    let events_before = board.pool().events.len();
    let outcome = board.try_advance_state(pos).expect("位置應有效");
    assert_eq!(outcome, StateAdvance::Exhausted);
    assert_eq!(board.group_at(pos).expect("位置應有效"), TileGroup::Available);
    assert!(!board.is_locked(pos).expect("位置應有效"));

    // 舊磚塊先重置狀態再歸還，接著租一塊可用磚塊
    let events = &board.pool().events[events_before..];
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        PoolEvent::Return {
            group: TileGroup::Ice,
            taken: Some(0),
            ..
        }
    ));
    assert!(matches!(
        events[1],
        PoolEvent::Rent {
            group: TileGroup::Available,
            ..
        }
    ));

    // 可用磚塊沒有多段狀態
    assert_eq!(
        board.try_advance_state(pos).expect("位置應有效"),
        StateAdvance::NotStateful
    );
}

#[test]
fn test_single_step_tile_collapses_immediately() {
    let pool = ScriptedPool::new().with_steps(TileGroup::Chain, 1);
    let mut board = scripted_board(1, 1, pool);
    let pos = GridPosition::new(0, 0);
    board.set_tile(pos, TileGroup::Chain).expect("位置應有效");

    assert_eq!(
        board.try_advance_state(pos).expect("位置應有效"),
        StateAdvance::Exhausted
    );
    assert_eq!(board.group_at(pos).expect("位置應有效"), TileGroup::Available);
    assert_eq!(board.pool().outstanding(), 1);
}

#[test]
fn test_items_pool_crate_uses_default_steps() {
    let mut board = items_board(3, 3);
    let pos = GridPosition::new(2, 0);
    board.set_tile(pos, TileGroup::Crate).expect("位置應有效");

    let mut outcomes = Vec::new();
    for _ in 0..DEFAULT_CRATE_STEPS {
        outcomes.push(board.try_advance_state(pos).expect("位置應有效"));
    }

    let mut expected = vec![StateAdvance::Advanced; (DEFAULT_CRATE_STEPS - 1) as usize];
    expected.push(StateAdvance::Exhausted);
    assert_eq!(outcomes, expected);
    assert_eq!(board.group_at(pos).expect("位置應有效"), TileGroup::Available);

    // 重新租到的木箱從第一段開始
    board.set_tile(pos, TileGroup::Crate).expect("位置應有效");
    assert_eq!(
        board.try_advance_state(pos).expect("位置應有效"),
        StateAdvance::Advanced
    );
}

#[test]
fn test_deactivating_stateful_cell_returns_tile() {
    let pool = ScriptedPool::new().with_steps(TileGroup::Ice, 3);
    let mut board = scripted_board(2, 2, pool);
    let pos = GridPosition::new(1, 1);
    board.set_tile(pos, TileGroup::Ice).expect("位置應有效");
    board.try_advance_state(pos).expect("位置應有效");

    board.deactivate(pos).expect("位置應有效");
    assert_eq!(board.group_at(pos).expect("位置應有效"), TileGroup::Unavailable);
    assert_eq!(
        board.try_advance_state(pos).expect("位置應有效"),
        StateAdvance::NotStateful
    );
    assert_eq!(board.pool().outstanding(), 4);
}
