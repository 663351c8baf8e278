//! 錯誤處理系統
//!
//! 自製而非 anyhow 的原因：
//! - 庫開發需要強類型（anyhow 型別擦除）
//! - 呼叫端需要區分越界與設定錯誤

use crate::domain::alias::{Coord, WorldUnit};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// 棋盤錯誤
#[derive(Debug, ThisError)]
pub enum BoardError {
    #[error("位置超出棋盤邊界: ({row}, {column}) 邊界 ({rows}, {columns})")]
    OutOfBounds {
        row: Coord,
        column: Coord,
        rows: Coord,
        columns: Coord,
    },
    #[error("棋盤尺寸無效: {rows} x {columns}")]
    EmptyBoard { rows: Coord, columns: Coord },
    #[error("磚塊邊長必須為正數: {tile_size}")]
    InvalidTileSize { tile_size: WorldUnit },
    #[error("版面尺寸 ({layout_rows}, {layout_columns}) 與棋盤 ({rows}, {columns}) 不符")]
    LayoutMismatch {
        layout_rows: Coord,
        layout_columns: Coord,
        rows: Coord,
        columns: Coord,
    },
    #[error("World 中找不到棋盤資源: {resource_name}")]
    BoardNotFound { resource_name: String },
    #[error("格子 Entity 缺少 component: {component_name}")]
    MissingComponent { component_name: String },
}

/// 格式載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("解析失敗: {0}")]
    ParseError(String),
    #[error("未知的版面符號 `{symbol}` 位於 ({row}, {column})")]
    UnknownSymbol {
        symbol: String,
        row: Coord,
        column: Coord,
    },
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
    #[error("{format} 序列化失敗: {reason}")]
    SerializeError { format: String, reason: String },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(e.context(context)),
        }
    }
}
