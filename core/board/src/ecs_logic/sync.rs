use super::board_not_found;
use crate::domain::alias::TileId;
use crate::domain::core_types::{TileGroup, Vec3};
use crate::ecs_types::components::{GridPosition, Slot, SlotGroup, SlotTileId, WorldPosition};
use crate::ecs_types::resources::BoardResource;
use crate::error::Result;
use crate::logic::slot_board::SlotBoard;
use crate::logic::tile_pool::{TileHandle, TileItemsPool};
use bevy_ecs::prelude::{With, World};
use std::collections::HashMap;

/// 將棋盤目前的磚塊同步到格子 Entity，回傳有變動的格子數
pub fn sync_slots(world: &mut World) -> Result<usize> {
    // 第一階段：借用 BoardResource 收集最新狀態
    let latest: HashMap<GridPosition, (TileGroup, TileId, Vec3)> = {
        let BoardResource(board) = world
            .get_resource::<BoardResource>()
            .ok_or_else(board_not_found)?;

        board
            .slots()
            .filter_map(|(pos, group, tile)| {
                tile.map(|t| (pos, (group, t.id(), t.world_position())))
            })
            .collect()
    };

    // 第二階段：可變借用 world 更新 component
    let mut query = world.query_filtered::<(
        &GridPosition,
        &mut SlotGroup,
        &mut SlotTileId,
        &mut WorldPosition,
    ), With<Slot>>();

    let mut changed = 0;
    for (pos, mut group, mut tile_id, mut world_position) in query.iter_mut(world) {
        let Some((latest_group, latest_id, latest_position)) = latest.get(pos).copied() else {
            continue;
        };
        if group.0 == latest_group && tile_id.0 == latest_id {
            continue;
        }
        group.0 = latest_group;
        tile_id.0 = latest_id;
        world_position.0 = latest_position;
        changed += 1;
    }

    Ok(changed)
}

/// 對 World 中的棋盤執行操作，成功後同步格子 Entity
pub fn mutate_board<T, F>(world: &mut World, op: F) -> Result<T>
where
    F: FnOnce(&mut SlotBoard<TileItemsPool>) -> Result<T>,
{
    let output = {
        let mut resource = world
            .get_resource_mut::<BoardResource>()
            .ok_or_else(board_not_found)?;
        op(&mut resource.0)?
    };

    sync_slots(world)?;
    Ok(output)
}
