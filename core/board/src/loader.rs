//! 棋盤載入器

use crate::domain::alias::Coord;
use crate::domain::core_types::TileGroup;
use crate::error::{LoadError, Result};
use crate::loader_schema::BoardConfig;
use log::debug;

/// 由 ASCII 解析出的版面，`cells` 以列為主
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiLayout {
    pub rows: Coord,
    pub columns: Coord,
    pub cells: Vec<TileGroup>,
}

/// 從 ASCII 格式載入版面
///
/// ASCII 格式：每行用空格分隔的符號
/// - `.` = 可用格
/// - `x` = 停用格
/// - `I` = 冰塊、`C` = 鎖鏈、`B` = 木箱
///
/// 例如：
/// ```text
/// x . x
/// . I .
/// . . .
/// ```
pub fn load_layout_from_ascii(ascii: &str) -> Result<AsciiLayout> {
    let lines: Vec<&str> = ascii
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(LoadError::ParseError("版面為空".to_string()).into());
    }

    // 推導寬度（第一行的符號數）
    let width = lines[0].split_whitespace().count();
    let columns: Coord = width
        .try_into()
        .map_err(|_| LoadError::ParseError("版面寬度過大".to_string()))?;
    let rows: Coord = lines
        .len()
        .try_into()
        .map_err(|_| LoadError::ParseError("版面高度過大".to_string()))?;

    let mut cells = Vec::with_capacity(width * lines.len());
    for (row, line) in lines.iter().enumerate() {
        let symbols: Vec<&str> = line.split_whitespace().collect();
        if symbols.len() != width {
            return Err(LoadError::ParseError(format!(
                "第 {row} 列有 {} 個符號，預期 {width} 個",
                symbols.len()
            ))
            .into());
        }

        for (column, symbol) in symbols.into_iter().enumerate() {
            let group = TileGroup::from_symbol(symbol).ok_or_else(|| LoadError::UnknownSymbol {
                symbol: symbol.to_string(),
                row: row as Coord,
                column: column as Coord,
            })?;
            cells.push(group);
        }
    }

    Ok(AsciiLayout {
        rows,
        columns,
        cells,
    })
}

/// 反序列化 TOML 棋盤設定
pub fn parse_board_config(config_toml: &str, format_name: &str) -> Result<BoardConfig> {
    let config: BoardConfig =
        toml::from_str(config_toml).map_err(|e| LoadError::DeserializeError {
            format: format_name.to_string(),
            reason: e.to_string(),
        })?;

    debug!("載入棋盤設定 {}（{format_name}）", config.name);
    Ok(config)
}

/// 序列化棋盤設定為 TOML
pub fn board_config_to_toml(config: &BoardConfig) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| {
        LoadError::SerializeError {
            format: config.name.clone(),
            reason: e.to_string(),
        }
        .into()
    })
}
