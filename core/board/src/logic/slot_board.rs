//! 棋盤格子登記
//!
//! 維護兩份同步的資料：
//! - 每格的啟用狀態（[`BoardState`]）
//! - 每格的磚塊分類與從池中租出的磚塊
//!
//! 所有磚塊更換都經過 `replace_tile`，確保登記表與磚塊池的借還一致。

use crate::domain::alias::Coord;
use crate::domain::core_types::{StateAdvance, TileGroup, Vec3};
use crate::ecs_types::components::GridPosition;
use crate::ecs_types::resources::BoardLayout;
use crate::error::{BoardError, Result};
use crate::loader::{AsciiLayout, load_layout_from_ascii};
use crate::loader_schema::BoardConfig;
use crate::logic::board_state::BoardState;
use crate::logic::coords::{self, cell_index, position_of_index};
use crate::logic::tile_pool::{TileHandle, TilePool};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 棋盤快照（可序列化，用於比對與存檔）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: Coord,
    pub columns: Coord,
    pub active: Vec<bool>,
    pub groups: Vec<TileGroup>,
}

/// 三消棋盤：啟用狀態 + 格子磚塊 + 座標換算
pub struct SlotBoard<P: TilePool> {
    layout: BoardLayout,
    state: BoardState,
    groups: Vec<TileGroup>,
    // 只在 replace_tile 內短暫為 None
    tiles: Vec<Option<P::Tile>>,
    pool: P,
}

impl<P: TilePool> SlotBoard<P> {
    /// 初始化棋盤：全部格子啟用，並為每格租一塊可用磚塊
    pub fn new(layout: BoardLayout, pool: P) -> Self {
        let cell_count = layout.cell_count();
        let mut board = Self {
            layout,
            state: BoardState::new_active(layout.rows(), layout.columns()),
            groups: vec![TileGroup::Available; cell_count],
            tiles: (0..cell_count).map(|_| None).collect(),
            pool,
        };

        for index in 0..cell_count {
            board.replace_tile(index, TileGroup::Available);
        }

        debug!(
            "棋盤初始化 {}x{}，原點 ({}, {})",
            layout.rows(), layout.columns(), layout.origin().x, layout.origin().y
        );
        board
    }

    /// 依設定建立棋盤，若有 ASCII 版面則一併套用
    pub fn from_config(config: &BoardConfig, pool: P) -> Result<Self> {
        let ascii = match &config.layout {
            Some(text) => Some(load_layout_from_ascii(text)?),
            None => None,
        };

        let (rows, columns) = config.resolve_size(ascii.as_ref())?;
        let layout = BoardLayout::new(rows, columns, config.tile_size, config.anchor)?;
        let mut board = Self::new(layout, pool);

        if let Some(ascii) = &ascii {
            board.apply_layout(ascii)?;
        }

        Ok(board)
    }

    // ========================================================================
    // 基本查詢
    // ========================================================================

    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    pub fn rows(&self) -> Coord {
        self.layout.rows()
    }

    pub fn columns(&self) -> Coord {
        self.layout.columns()
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// 啟用中的格子數
    pub fn active_count(&self) -> usize {
        self.state.active_count()
    }

    // ========================================================================
    // 啟用狀態
    // ========================================================================

    pub fn is_active(&self, pos: GridPosition) -> Result<bool> {
        let index = self.index_of(pos)?;
        Ok(self.state.get(index).unwrap_or(false))
    }

    /// 啟用格子並換上可用磚塊
    pub fn activate(&mut self, pos: GridPosition) -> Result<()> {
        let index = self.index_of(pos)?;
        self.state.set(index, true);
        self.replace_tile(index, TileGroup::Available);
        Ok(())
    }

    /// 停用格子並換上停用磚塊
    pub fn deactivate(&mut self, pos: GridPosition) -> Result<()> {
        let index = self.index_of(pos)?;
        self.state.set(index, false);
        self.replace_tile(index, TileGroup::Unavailable);
        Ok(())
    }

    /// 重新開始關卡：全部啟用、全部換回可用磚塊
    pub fn reset_all(&mut self) {
        self.state.fill(true);
        for index in 0..self.groups.len() {
            self.replace_tile(index, TileGroup::Available);
        }
        debug!("棋盤重置 {}x{}", self.layout.rows(), self.layout.columns());
    }

    /// 歸還所有磚塊並交回磚塊池，棋盤之後不可再使用
    pub fn dispose(mut self) -> P {
        let mut returned = 0;
        for slot in self.tiles.iter_mut() {
            if let Some(tile) = slot.take() {
                self.pool.give_back(tile);
                returned += 1;
            }
        }
        self.tiles.clear();
        self.groups.clear();
        self.state.clear();

        debug!("棋盤釋放，歸還 {returned} 塊磚塊");
        self.pool
    }

    // ========================================================================
    // 格子磚塊
    // ========================================================================

    pub fn group_at(&self, pos: GridPosition) -> Result<TileGroup> {
        let index = self.index_of(pos)?;
        Ok(self.groups[index])
    }

    /// 查詢格子目前的磚塊
    pub fn tile_at(&self, pos: GridPosition) -> Result<Option<&P::Tile>> {
        let index = self.index_of(pos)?;
        Ok(self.tiles[index].as_ref())
    }

    /// 可用或冰塊的格子可以放置道具
    pub fn can_place_item(&self, pos: GridPosition) -> Result<bool> {
        Ok(self.group_at(pos)?.is_placeable())
    }

    /// 非可用分類一律視為鎖定
    pub fn is_locked(&self, pos: GridPosition) -> Result<bool> {
        Ok(self.group_at(pos)? != TileGroup::Available)
    }

    /// 換成下一個分類，已是最後一個時退回可用
    pub fn advance_group(&mut self, pos: GridPosition) -> Result<TileGroup> {
        let index = self.index_of(pos)?;
        let next = self.groups[index].next_or_available();
        self.replace_tile(index, next);
        Ok(next)
    }

    /// 推進磚塊的多段狀態
    ///
    /// 狀態用盡時先重置舊磚塊的狀態，再換上新的可用磚塊並把舊磚塊歸還。
    pub fn try_advance_state(&mut self, pos: GridPosition) -> Result<StateAdvance> {
        let index = self.index_of(pos)?;

        let Some(stateful) = self.tiles[index]
            .as_mut()
            .and_then(|tile| tile.as_stateful_mut())
        else {
            return Ok(StateAdvance::NotStateful);
        };

        if stateful.advance() {
            return Ok(StateAdvance::Advanced);
        }

        stateful.reset_state();
        self.replace_tile(index, TileGroup::Available);
        Ok(StateAdvance::Exhausted)
    }

    /// 將格子換成指定分類的新磚塊
    pub fn set_tile(&mut self, pos: GridPosition, group: TileGroup) -> Result<()> {
        let index = self.index_of(pos)?;
        self.replace_tile(index, group);
        Ok(())
    }

    /// 套用 ASCII 版面：`x` 停用，其餘格子啟用並換成對應分類
    pub fn apply_layout(&mut self, ascii: &AsciiLayout) -> Result<()> {
        if ascii.rows != self.layout.rows() || ascii.columns != self.layout.columns() {
            return Err(BoardError::LayoutMismatch {
                layout_rows: ascii.rows,
                layout_columns: ascii.columns,
                rows: self.layout.rows(),
                columns: self.layout.columns(),
            }
            .into());
        }

        for (index, group) in ascii.cells.iter().copied().enumerate() {
            self.state.set(index, group != TileGroup::Unavailable);
            if self.groups[index] != group {
                self.replace_tile(index, group);
            }
        }

        debug!("套用版面，啟用 {} 格", self.state.active_count());
        Ok(())
    }

    /// 依序走訪所有格子
    pub fn slots(&self) -> impl Iterator<Item = (GridPosition, TileGroup, Option<&P::Tile>)> + '_ {
        self.groups
            .iter()
            .zip(self.tiles.iter())
            .enumerate()
            .map(|(index, (group, tile))| {
                (position_of_index(self.layout, index), *group, tile.as_ref())
            })
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: self.layout.rows(),
            columns: self.layout.columns(),
            active: self.state.as_slice().to_vec(),
            groups: self.groups.clone(),
        }
    }

    /// 以 ASCII 版面符號輸出目前的分類
    pub fn to_ascii(&self) -> String {
        let columns = self.layout.columns() as usize;
        self.groups
            .chunks(columns)
            .map(|row| {
                row.iter()
                    .map(|group| group.symbol())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ========================================================================
    // 座標換算
    // ========================================================================

    pub fn world_position(&self, pos: GridPosition) -> Vec3 {
        coords::world_position(self.layout, pos)
    }

    pub fn grid_position(&self, point: Vec3) -> GridPosition {
        coords::grid_position(self.layout, point)
    }

    pub fn is_on_grid(&self, pos: GridPosition) -> bool {
        coords::is_on_grid(self.layout, pos)
    }

    /// 在棋盤邊界內且為啟用格
    pub fn is_on_board(&self, pos: GridPosition) -> bool {
        cell_index(self.layout, pos)
            .and_then(|index| self.state.get(index))
            .unwrap_or(false)
    }

    /// 指標落點換算成格子位置，並回傳是否在棋盤邊界內
    pub fn pointer_on_grid(&self, point: Vec3) -> (GridPosition, bool) {
        let pos = self.grid_position(point);
        (pos, self.is_on_grid(pos))
    }

    /// 指標落點換算成格子位置，並回傳是否落在啟用格上
    pub fn pointer_on_board(&self, point: Vec3) -> (GridPosition, bool) {
        let pos = self.grid_position(point);
        (pos, self.is_on_board(pos))
    }

    // ========================================================================
    // 內部
    // ========================================================================

    fn index_of(&self, pos: GridPosition) -> Result<usize> {
        cell_index(self.layout, pos).ok_or_else(|| {
            BoardError::OutOfBounds {
                row: pos.row,
                column: pos.column,
                rows: self.layout.rows(),
                columns: self.layout.columns(),
            }
            .into()
        })
    }

    // 先歸還舊磚塊再租新磚塊，index 必須已通過邊界檢查
    fn replace_tile(&mut self, index: usize, group: TileGroup) {
        let pos = position_of_index(self.layout, index);

        if let Some(old) = self.tiles[index].take() {
            trace!("({}, {}) 歸還 {} → 租借 {}", pos.row, pos.column, old.group(), group);
            self.pool.give_back(old);
        }

        let mut tile = self.pool.rent(group);
        tile.set_world_position(coords::world_position(self.layout, pos));
        self.tiles[index] = Some(tile);
        self.groups[index] = group;
    }
}

impl<P> fmt::Debug for SlotBoard<P>
where
    P: TilePool + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotBoard")
            .field("layout", &self.layout)
            .field("active", &self.state.active_count())
            .field("groups", &self.groups)
            .field("pool", &self.pool)
            .finish()
    }
}
