use super::board_not_found;
use crate::domain::core_types::TileGroup;
use crate::ecs_types::components::{
    GridPosition, Slot, SlotBundle, SlotGroup, SlotTileId, WorldPosition,
};
use crate::ecs_types::resources::{BoardLayout, BoardResource};
use crate::error::Result;
use crate::loader::parse_board_config;
use crate::logic::slot_board::SlotBoard;
use crate::logic::tile_pool::{PooledTile, TileHandle, TileItemsPool};
use bevy_ecs::prelude::{Entity, With, World};
use log::debug;

/// 反序列化棋盤設定並生成棋盤（Resource）與所有格子 Entity
pub fn spawn_board(world: &mut World, config_toml: &str, format_name: &str) -> Result<()> {
    let config = parse_board_config(config_toml, format_name)?;
    let pool = TileItemsPool::new(config.pool.clone());
    let board = SlotBoard::from_config(&config, pool)?;

    // 先收集 bundle，board 移入 World 後就不能再借用
    let bundles: Vec<SlotBundle> = board
        .slots()
        .map(|(pos, group, tile)| slot_bundle(pos, group, tile))
        .collect();

    world.insert_resource(board.layout());
    world.insert_resource(BoardResource(board));

    let count = bundles.len();
    for bundle in bundles {
        world.spawn(bundle);
    }

    debug!("生成棋盤 {}，共 {count} 個格子", config.name);
    Ok(())
}

/// 移除所有格子 Entity 與棋盤 Resource，釋放棋盤並交回磚塊池
pub fn despawn_board(world: &mut World) -> Result<TileItemsPool> {
    let entities: Vec<Entity> = world
        .query_filtered::<Entity, With<Slot>>()
        .iter(world)
        .collect();
    for entity in entities {
        world.despawn(entity);
    }

    world.remove_resource::<BoardLayout>();
    let BoardResource(board) = world
        .remove_resource::<BoardResource>()
        .ok_or_else(board_not_found)?;

    Ok(board.dispose())
}

fn slot_bundle(
    pos: GridPosition,
    group: TileGroup,
    tile: Option<&PooledTile>,
) -> SlotBundle {
    SlotBundle {
        slot: Slot,
        position: pos,
        group: SlotGroup(group),
        tile_id: SlotTileId(tile.map_or(0, |t| t.id())),
        world_position: WorldPosition(tile.map(|t| t.world_position()).unwrap_or_default()),
    }
}
