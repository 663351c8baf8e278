//! 基本資料類型定義

use crate::domain::alias::WorldUnit;
use crate::domain::constants::{
    SYMBOL_AVAILABLE, SYMBOL_CHAIN, SYMBOL_CRATE, SYMBOL_ICE, SYMBOL_UNAVAILABLE,
};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};
use strum_macros::{Display, EnumIter};

// ============================================================================
// 磚塊分類
// ============================================================================

/// 格子磚塊分類
///
/// 宣告順序即為「下一個分類」的推進順序，統一由 [`TileGroup::ALL`] 索引。
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
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum TileGroup {
    /// 可放置道具
    #[default]
    Available,
    /// 停用格
    Unavailable,
    /// 冰塊（阻擋，但仍可放置）
    Ice,
    /// 鎖鏈
    Chain,
    /// 木箱
    Crate,
}

impl TileGroup {
    /// 所有分類（固定順序）
    pub const ALL: [TileGroup; 5] = [
        TileGroup::Available,
        TileGroup::Unavailable,
        TileGroup::Ice,
        TileGroup::Chain,
        TileGroup::Crate,
    ];

    /// 在 [`TileGroup::ALL`] 中的索引
    pub fn index(self) -> usize {
        match self {
            TileGroup::Available => 0,
            TileGroup::Unavailable => 1,
            TileGroup::Ice => 2,
            TileGroup::Chain => 3,
            TileGroup::Crate => 4,
        }
    }

    /// 下一個分類；已是最後一個時退回 `Available`（不循環）
    pub fn next_or_available(self) -> TileGroup {
        Self::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(TileGroup::Available)
    }

    /// 此分類的格子是否可放置道具
    pub fn is_placeable(self) -> bool {
        matches!(self, TileGroup::Available | TileGroup::Ice)
    }

    /// ASCII 版面使用的符號
    pub fn symbol(self) -> &'static str {
        match self {
            TileGroup::Available => SYMBOL_AVAILABLE,
            TileGroup::Unavailable => SYMBOL_UNAVAILABLE,
            TileGroup::Ice => SYMBOL_ICE,
            TileGroup::Chain => SYMBOL_CHAIN,
            TileGroup::Crate => SYMBOL_CRATE,
        }
    }

    /// 由 ASCII 符號反查分類
    pub fn from_symbol(symbol: &str) -> Option<TileGroup> {
        Self::ALL.into_iter().find(|group| group.symbol() == symbol)
    }
}

// ============================================================================
// 世界座標
// ============================================================================

/// 世界座標點
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: WorldUnit,
    pub y: WorldUnit,
    pub z: WorldUnit,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: WorldUnit, y: WorldUnit, z: WorldUnit) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<WorldUnit> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: WorldUnit) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// ============================================================================
// 狀態推進結果
// ============================================================================

/// `try_advance_state` 的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateAdvance {
    /// 磚塊不支援多段狀態，未做任何事
    NotStateful,
    /// 已推進一段，仍有後續狀態
    Advanced,
    /// 狀態已用盡，格子換回可用磚塊
    Exhausted,
}
