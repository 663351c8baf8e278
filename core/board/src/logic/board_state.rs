//! 棋盤啟用狀態

use crate::domain::alias::Coord;

/// 以列為主的布林格子，`true` 表示該格可遊玩
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    cells: Vec<bool>,
}

impl BoardState {
    /// 建立全部啟用的格子
    pub fn new_active(rows: Coord, columns: Coord) -> Self {
        let len = (rows.max(0) as usize) * (columns.max(0) as usize);
        Self {
            cells: vec![true; len],
        }
    }

    /// 查詢指定索引是否啟用，索引越界時回傳 `None`
    pub fn get(&self, index: usize) -> Option<bool> {
        self.cells.get(index).copied()
    }

    /// 設定指定索引的啟用狀態，回傳是否在範圍內
    pub fn set(&mut self, index: usize, active: bool) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = active;
                true
            }
            None => false,
        }
    }

    /// 全部設為同一狀態
    pub fn fill(&mut self, active: bool) {
        self.cells.fill(active);
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|active| **active).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// 清空（釋放後使用）
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
