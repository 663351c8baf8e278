//! ECS Component 定義

use crate::domain::alias::{Coord, TileId};
use crate::domain::core_types::{TileGroup, Vec3};
use bevy_ecs::bundle::Bundle;
use bevy_ecs::component::Component;
use serde::{Deserialize, Serialize};

// ============================================================================
// 棋盤與位置 Components
// ============================================================================

/// 棋盤格子位置（第 row 列，第 column 行）
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Component,
    Serialize,
    Deserialize,
)]
pub struct GridPosition {
    pub row: Coord,
    pub column: Coord,
}

impl GridPosition {
    pub const fn new(row: Coord, column: Coord) -> Self {
        Self { row, column }
    }
}

// ============================================================================
// 格子 Components
// ============================================================================

/// tag component: 棋盤格子
#[derive(Debug, Component)]
pub struct Slot;

/// 格子目前的磚塊分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct SlotGroup(pub TileGroup);

/// 格子目前持有的磚塊 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct SlotTileId(pub TileId);

/// 格子的世界座標
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct WorldPosition(pub Vec3);

// ============================================================================
// Bundles
// ============================================================================

/// 格子 Entity 的完整 Bundle
#[derive(Debug, Bundle)]
pub struct SlotBundle {
    pub slot: Slot,
    pub position: GridPosition,
    pub group: SlotGroup,
    pub tile_id: SlotTileId,
    pub world_position: WorldPosition,
}
