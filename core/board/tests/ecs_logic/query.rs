use super::{BOARD_TOML, setup_world_with_board};
use bevy_ecs::prelude::{Entity, With, World};
use match_board::ecs_logic::query::{get_all_slots, pointer_on_board};
use match_board::ecs_types::components::{GridPosition, Slot, SlotGroup};
use match_board::ecs_types::resources::BoardResource;
use match_board::error::{BoardError, ErrorKind};
use match_board::logic::tile_pool::TileHandle;

#[test]
fn test_slots_mirror_board_tiles() {
    let mut world = setup_world_with_board(BOARD_TOML);
    let slots = get_all_slots(&mut world).expect("get_all_slots 應成功");

    let board = &world
        .get_resource::<BoardResource>()
        .expect("BoardResource 應已存入 World")
        .0;
    for (pos, group, tile) in board.slots() {
        let tile = tile.expect("每格都應有磚塊");
        let slot = &slots[&pos];
        assert_eq!(slot.group, group);
        assert_eq!(slot.tile_id, tile.id());
        assert_eq!(slot.world_position, board.world_position(pos));
    }
}

#[test]
fn test_pointer_on_board_in_world() {
    let world = setup_world_with_board(BOARD_TOML);
    let board = &world
        .get_resource::<BoardResource>()
        .expect("BoardResource 應已存入 World")
        .0;

    let active = GridPosition::new(1, 2);
    let inactive = GridPosition::new(0, 2);
    let active_point = board.world_position(active);
    let inactive_point = board.world_position(inactive);

    assert_eq!(
        pointer_on_board(&world, active_point).expect("應有棋盤"),
        Some(active)
    );
    assert_eq!(
        pointer_on_board(&world, inactive_point).expect("應有棋盤"),
        None
    );
}

#[test]
fn test_pointer_on_board_without_board() {
    let world = World::new();
    let err = pointer_on_board(&world, Default::default()).expect_err("沒有棋盤應失敗");
    assert!(matches!(
        err.kind(),
        ErrorKind::Board(BoardError::BoardNotFound { .. })
    ));
}

#[test]
fn test_get_all_slots_reports_missing_component() {
    let mut world = setup_world_with_board(BOARD_TOML);
    let entity = world
        .query_filtered::<Entity, With<Slot>>()
        .iter(&world)
        .next()
        .expect("應有格子 Entity");
    world.entity_mut(entity).remove::<SlotGroup>();

    let err = get_all_slots(&mut world).expect_err("缺少 SlotGroup 應失敗");
    assert!(matches!(
        err.kind(),
        ErrorKind::Board(BoardError::MissingComponent { component_name }) if component_name == "SlotGroup"
    ));
}
