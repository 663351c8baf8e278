//! 棋盤常數定義

use crate::domain::alias::{Coord, StepCount, WorldUnit};

/// 預設棋盤列數
pub const DEFAULT_ROW_COUNT: Coord = 9;

/// 預設棋盤行數
pub const DEFAULT_COLUMN_COUNT: Coord = 9;

/// 預設磚塊邊長（世界座標）
pub const DEFAULT_TILE_SIZE: WorldUnit = 1.0;

/// 冰塊預設段數
pub const DEFAULT_ICE_STEPS: StepCount = 2;

/// 鎖鏈預設段數
pub const DEFAULT_CHAIN_STEPS: StepCount = 1;

/// 木箱預設段數
pub const DEFAULT_CRATE_STEPS: StepCount = 3;

/// ASCII 版面符號：可用格
pub const SYMBOL_AVAILABLE: &str = ".";

/// ASCII 版面符號：停用格
pub const SYMBOL_UNAVAILABLE: &str = "x";

/// ASCII 版面符號：冰塊
pub const SYMBOL_ICE: &str = "I";

/// ASCII 版面符號：鎖鏈
pub const SYMBOL_CHAIN: &str = "C";

/// ASCII 版面符號：木箱
pub const SYMBOL_CRATE: &str = "B";
