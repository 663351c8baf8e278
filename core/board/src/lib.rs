//! 三消棋盤格子管理
//!
//! 棋盤狀態、格子磚塊登記、世界座標換算，以及向磚塊池租借/歸還磚塊。

pub mod domain;
pub mod ecs_logic;
pub mod ecs_types;
pub mod error;
pub mod loader;
pub mod loader_schema;
pub mod logic;
