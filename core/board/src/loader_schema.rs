//! Loader 相關的資料結構定義

use crate::domain::alias::{Coord, WorldUnit};
use crate::domain::constants::{DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT, DEFAULT_TILE_SIZE};
use crate::domain::core_types::Vec3;
use crate::error::{BoardError, Result};
use crate::loader::AsciiLayout;
use crate::logic::tile_pool::PoolConfig;
use serde::{Deserialize, Serialize};

/// 棋盤設定（初始化後不可變）
///
/// 例如：
/// ```toml
/// name = "level-1"
/// tile_size = 1.5
/// layout = """
/// x . . x
/// . I I .
/// . . . .
/// """
///
/// [anchor]
/// x = 0.0
/// y = 2.0
/// z = 0.0
///
/// [pool]
/// ice_steps = 3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Coord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Coord>,
    pub tile_size: WorldUnit,
    /// ASCII 版面，見 [`crate::loader::load_layout_from_ascii`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    pub anchor: Vec3,
    pub pool: PoolConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "board".to_string(),
            rows: None,
            columns: None,
            tile_size: DEFAULT_TILE_SIZE,
            layout: None,
            anchor: Vec3::ZERO,
            pool: PoolConfig::default(),
        }
    }
}

impl BoardConfig {
    /// 決定棋盤尺寸
    ///
    /// 有版面時以版面為準，明寫的 `rows`/`columns` 必須與版面一致；
    /// 沒有版面時未寫的維度使用預設值。
    pub fn resolve_size(&self, ascii: Option<&AsciiLayout>) -> Result<(Coord, Coord)> {
        let Some(ascii) = ascii else {
            return Ok((
                self.rows.unwrap_or(DEFAULT_ROW_COUNT),
                self.columns.unwrap_or(DEFAULT_COLUMN_COUNT),
            ));
        };

        let rows = self.rows.unwrap_or(ascii.rows);
        let columns = self.columns.unwrap_or(ascii.columns);
        if rows != ascii.rows || columns != ascii.columns {
            return Err(BoardError::LayoutMismatch {
                layout_rows: ascii.rows,
                layout_columns: ascii.columns,
                rows,
                columns,
            }
            .into());
        }
        Ok((rows, columns))
    }
}
