use super::{board_not_found, get_component};
use crate::domain::alias::TileId;
use crate::domain::core_types::{TileGroup, Vec3};
use crate::ecs_types::components::{GridPosition, Slot, SlotGroup, SlotTileId, WorldPosition};
use crate::ecs_types::resources::{BoardLayout, BoardResource};
use crate::error::{BoardError, Result};
use bevy_ecs::prelude::{Entity, With, World};
use std::collections::HashMap;

/// 格子查詢結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotQueryResult {
    pub group: TileGroup,
    pub tile_id: TileId,
    pub world_position: Vec3,
}

/// 取得棋盤尺寸與座標設定
pub fn get_layout(world: &World) -> Result<BoardLayout> {
    world.get_resource::<BoardLayout>().copied().ok_or_else(|| {
        BoardError::BoardNotFound {
            resource_name: "BoardLayout".to_string(),
        }
        .into()
    })
}

/// 查詢所有格子，以位置為 key
pub fn get_all_slots(world: &mut World) -> Result<HashMap<GridPosition, SlotQueryResult>> {
    let entities: Vec<(Entity, GridPosition)> = world
        .query_filtered::<(Entity, &GridPosition), With<Slot>>()
        .iter(world)
        .map(|(entity, pos)| (entity, *pos))
        .collect();

    let mut result = HashMap::new();
    for (entity, position) in entities {
        let entity_ref = world.entity(entity);
        result.insert(
            position,
            SlotQueryResult {
                group: get_component!(entity_ref, SlotGroup).0,
                tile_id: get_component!(entity_ref, SlotTileId).0,
                world_position: get_component!(entity_ref, WorldPosition).0,
            },
        );
    }
    Ok(result)
}

/// 指標落點若在啟用格上，回傳該格位置
pub fn pointer_on_board(world: &World, point: Vec3) -> Result<Option<GridPosition>> {
    let BoardResource(board) = world
        .get_resource::<BoardResource>()
        .ok_or_else(board_not_found)?;

    let (pos, hit) = board.pointer_on_board(point);
    Ok(hit.then_some(pos))
}
