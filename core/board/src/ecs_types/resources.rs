//! ECS World Resource 定義

use crate::domain::alias::{Coord, WorldUnit};
use crate::domain::core_types::Vec3;
use crate::error::{BoardError, Result};
use crate::logic::coords::origin_offset;
use crate::logic::slot_board::SlotBoard;
use crate::logic::tile_pool::TileItemsPool;
use bevy_ecs::prelude::Resource;

/// 棋盤尺寸與座標設定（初始化後不可變）
///
/// 只能經由 [`BoardLayout::new`] 建立，尺寸與邊長必為正數，原點由錨點推導。
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct BoardLayout {
    rows: Coord,
    columns: Coord,
    tile_size: WorldUnit,
    anchor: Vec3,
    origin: Vec3,
}

impl BoardLayout {
    /// 建立棋盤設定並計算置中原點
    pub fn new(rows: Coord, columns: Coord, tile_size: WorldUnit, anchor: Vec3) -> Result<Self> {
        if rows <= 0 || columns <= 0 {
            return Err(BoardError::EmptyBoard { rows, columns }.into());
        }
        // NaN 也會在這裡被擋下
        if !(tile_size > 0.0 && tile_size.is_finite()) {
            return Err(BoardError::InvalidTileSize { tile_size }.into());
        }

        Ok(Self {
            rows,
            columns,
            tile_size,
            anchor,
            origin: anchor + origin_offset(rows, columns, tile_size),
        })
    }

    pub fn rows(&self) -> Coord {
        self.rows
    }

    pub fn columns(&self) -> Coord {
        self.columns
    }

    pub fn tile_size(&self) -> WorldUnit {
        self.tile_size
    }

    /// 棋盤中心錨點
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// (0, 0) 格的世界座標
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// 格子總數
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.columns as usize)
    }
}

/// World 中唯一的棋盤（以內建磚塊池為後端）
#[derive(Debug, Resource)]
pub struct BoardResource(pub SlotBoard<TileItemsPool>);
