//! 座標換算邏輯
//!
//! 格子索引與世界座標互換：行往右遞增，列往下遞增（世界 y 取負）。

use crate::domain::alias::{Coord, WorldUnit};
use crate::domain::core_types::Vec3;
use crate::ecs_types::components::GridPosition;
use crate::ecs_types::resources::BoardLayout;

/// 無法換算的落點，永遠不在任何棋盤內
pub const OFF_GRID: GridPosition = GridPosition::new(-1, -1);

/// 計算讓棋盤以錨點置中的原點偏移
///
/// 每軸偏移 `floor(count / 2) * tile_size`，奇偶尺寸都讓磚塊（而非縫隙）落在中線上。
pub fn origin_offset(rows: Coord, columns: Coord, tile_size: WorldUnit) -> Vec3 {
    let half_columns = (columns / 2) as WorldUnit;
    let half_rows = (rows / 2) as WorldUnit;
    Vec3::new(-half_columns * tile_size, half_rows * tile_size, 0.0)
}

/// 格子位置 → 世界座標：`(column, -row) * tile_size + origin`
pub fn world_position(layout: BoardLayout, pos: GridPosition) -> Vec3 {
    let local = Vec3::new(pos.column as WorldUnit, -(pos.row as WorldUnit), 0.0);
    local * layout.tile_size() + layout.origin()
}

/// 世界座標 → 格子位置
///
/// 換算出的小數索引取最接近的整數格，格子中心附近的浮點誤差不影響結果。
/// 剛好落在兩格交界時取偶數索引（`round_ties_even`），
/// 因此外框上的交界點可能算在棋盤內，也可能算在棋盤外。
/// 不做邊界檢查，棋盤外的點會得到超出範圍（可能為負）的位置；
/// 非有限值（NaN、無限大）一律換算為 [`OFF_GRID`]。
pub fn grid_position(layout: BoardLayout, point: Vec3) -> GridPosition {
    let column = (point.x - layout.origin().x) / layout.tile_size();
    let row = -(point.y - layout.origin().y) / layout.tile_size();
    if !column.is_finite() || !row.is_finite() {
        return OFF_GRID;
    }
    GridPosition {
        row: row.round_ties_even() as Coord,
        column: column.round_ties_even() as Coord,
    }
}

/// 驗證位置是否在棋盤邊界內
pub fn is_on_grid(layout: BoardLayout, pos: GridPosition) -> bool {
    (0..layout.rows()).contains(&pos.row) && (0..layout.columns()).contains(&pos.column)
}

/// 位置在棋盤內時回傳扁平索引 `row * columns + column`
pub fn cell_index(layout: BoardLayout, pos: GridPosition) -> Option<usize> {
    if !is_on_grid(layout, pos) {
        return None;
    }
    Some((pos.row * layout.columns() + pos.column) as usize)
}

/// 扁平索引 → 格子位置
pub fn position_of_index(layout: BoardLayout, index: usize) -> GridPosition {
    let columns = layout.columns() as usize;
    GridPosition {
        row: (index / columns) as Coord,
        column: (index % columns) as Coord,
    }
}
