//! 核心棋盤邏輯（不是 ECS System）

pub mod board_state;
pub mod coords;
pub mod slot_board;
pub mod tile_pool;
