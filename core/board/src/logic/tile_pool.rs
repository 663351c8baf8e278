//! 磚塊池
//!
//! 棋盤只透過 [`TilePool`] 租借與歸還磚塊，不關心池的回收策略。
//! 有多段狀態的磚塊以 [`StatefulTile`] 能力查詢取得，不做執行期型別判斷。

use crate::domain::alias::{StepCount, TileId};
use crate::domain::constants::{DEFAULT_CHAIN_STEPS, DEFAULT_CRATE_STEPS, DEFAULT_ICE_STEPS};
use crate::domain::core_types::{TileGroup, Vec3};
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ============================================================================
// 能力介面
// ============================================================================

/// 多段狀態能力
pub trait StatefulTile {
    /// 推進一段，回傳之後是否還有狀態
    fn advance(&mut self) -> bool;

    /// 回到第一段
    fn reset_state(&mut self);
}

/// 從池中租出的磚塊
pub trait TileHandle {
    fn id(&self) -> TileId;

    fn group(&self) -> TileGroup;

    fn world_position(&self) -> Vec3;

    fn set_world_position(&mut self, position: Vec3);

    /// 永久釋放（池清空時呼叫）
    fn dispose(&mut self);

    /// 查詢多段狀態能力，一般磚塊回傳 `None`
    fn as_stateful_mut(&mut self) -> Option<&mut dyn StatefulTile> {
        None
    }
}

/// 磚塊池
pub trait TilePool {
    type Tile: TileHandle;

    /// 租出指定分類的磚塊
    fn rent(&mut self, group: TileGroup) -> Self::Tile;

    /// 歸還磚塊
    fn give_back(&mut self, tile: Self::Tile);
}

// ============================================================================
// 內建實作
// ============================================================================

/// 多段狀態計數
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepState {
    total: StepCount,
    taken: StepCount,
}

impl StepState {
    pub fn new(total: StepCount) -> Self {
        Self { total, taken: 0 }
    }

    pub fn total(&self) -> StepCount {
        self.total
    }

    /// 剩餘可推進段數
    pub fn remaining(&self) -> StepCount {
        self.total.saturating_sub(self.taken)
    }
}

impl StatefulTile for StepState {
    fn advance(&mut self) -> bool {
        self.taken = self.taken.saturating_add(1).min(self.total);
        self.taken < self.total
    }

    fn reset_state(&mut self) {
        self.taken = 0;
    }
}

/// [`TileItemsPool`] 租出的磚塊
#[derive(Debug, Clone, PartialEq)]
pub struct PooledTile {
    id: TileId,
    group: TileGroup,
    world_position: Vec3,
    steps: Option<StepState>,
    disposed: bool,
}

impl PooledTile {
    pub fn steps(&self) -> Option<StepState> {
        self.steps
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl TileHandle for PooledTile {
    fn id(&self) -> TileId {
        self.id
    }

    fn group(&self) -> TileGroup {
        self.group
    }

    fn world_position(&self) -> Vec3 {
        self.world_position
    }

    fn set_world_position(&mut self, position: Vec3) {
        self.world_position = position;
    }

    fn dispose(&mut self) {
        self.disposed = true;
    }

    fn as_stateful_mut(&mut self) -> Option<&mut dyn StatefulTile> {
        match self.steps.as_mut() {
            Some(steps) => Some(steps),
            None => None,
        }
    }
}

/// 各分類磚塊的段數設定，0 表示無多段狀態
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub ice_steps: StepCount,
    pub chain_steps: StepCount,
    pub crate_steps: StepCount,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            ice_steps: DEFAULT_ICE_STEPS,
            chain_steps: DEFAULT_CHAIN_STEPS,
            crate_steps: DEFAULT_CRATE_STEPS,
        }
    }
}

impl PoolConfig {
    /// 指定分類的段數，`None` 表示一般磚塊
    pub fn steps_for(&self, group: TileGroup) -> Option<StepCount> {
        let steps = match group {
            TileGroup::Available | TileGroup::Unavailable => 0,
            TileGroup::Ice => self.ice_steps,
            TileGroup::Chain => self.chain_steps,
            TileGroup::Crate => self.crate_steps,
        };
        (steps > 0).then_some(steps)
    }
}

/// 依分類維護閒置清單的磚塊池
///
/// 同時統計租出與歸還次數，供呼叫端檢查借還是否平衡。
#[derive(Debug, Default)]
pub struct TileItemsPool {
    config: PoolConfig,
    idle: HashMap<TileGroup, Vec<PooledTile>>,
    used_ids: HashSet<TileId>,
    rented: usize,
    returned: usize,
}

impl TileItemsPool {
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// 累計租出次數
    pub fn rented(&self) -> usize {
        self.rented
    }

    /// 累計歸還次數
    pub fn returned(&self) -> usize {
        self.returned
    }

    /// 目前尚未歸還的磚塊數
    pub fn outstanding(&self) -> usize {
        self.rented.saturating_sub(self.returned)
    }

    /// 指定分類閒置中的磚塊數
    pub fn idle_count(&self, group: TileGroup) -> usize {
        self.idle.get(&group).map_or(0, Vec::len)
    }

    /// 釋放所有閒置磚塊，回傳釋放數量
    pub fn clear(&mut self) -> usize {
        let mut disposed = 0;
        for (_, tiles) in self.idle.drain() {
            for mut tile in tiles {
                tile.dispose();
                self.used_ids.remove(&tile.id);
                disposed += 1;
            }
        }
        disposed
    }

    fn allocate_id(&mut self) -> TileId {
        loop {
            let id: TileId = rand::random();
            if self.used_ids.insert(id) {
                return id;
            }
        }
    }
}

impl TilePool for TileItemsPool {
    type Tile = PooledTile;

    fn rent(&mut self, group: TileGroup) -> PooledTile {
        self.rented += 1;

        let steps = self.config.steps_for(group).map(StepState::new);
        match self.idle.get_mut(&group).and_then(Vec::pop) {
            Some(mut tile) => {
                // 租出的磚塊一律從第一段開始
                tile.steps = steps;
                tile
            }
            None => {
                let id = self.allocate_id();
                trace!("新建磚塊 {id} ({group})");
                PooledTile {
                    id,
                    group,
                    world_position: Vec3::ZERO,
                    steps,
                    disposed: false,
                }
            }
        }
    }

    fn give_back(&mut self, tile: PooledTile) {
        self.returned += 1;
        self.idle.entry(tile.group).or_default().push(tile);
    }
}
