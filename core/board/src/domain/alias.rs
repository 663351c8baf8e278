//! 型別別名

/// 格子索引（列/行），允許負值以表示棋盤外的指標位置
pub type Coord = i32;

/// 磚塊唯一 ID
pub type TileId = u32;

/// 世界座標單位
pub type WorldUnit = f32;

/// 多段狀態磚塊的段數
pub type StepCount = u8;
