//! 載入棋盤設定並在終端機預覽版面
//!
//! 用法：`board-preview [config.toml] [x,y ...]`
//! 後面的 `x,y` 會以世界座標做指標命中測試。

use anyhow::{Context, Result, bail};
use log::info;
use match_board::domain::core_types::Vec3;
use match_board::loader::parse_board_config;
use match_board::loader_schema::BoardConfig;
use match_board::logic::slot_board::SlotBoard;
use match_board::logic::tile_pool::TileItemsPool;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(PathBuf::from(path))?,
        None => BoardConfig::default(),
    };
    let points = args.map(|arg| parse_point(&arg)).collect::<Result<Vec<_>>>()?;

    let pool = TileItemsPool::new(config.pool.clone());
    let board = SlotBoard::from_config(&config, pool)?;
    let layout = board.layout();

    println!(
        "{}: {} x {}，磚塊邊長 {}，原點 ({}, {})",
        config.name,
        layout.rows(),
        layout.columns(),
        layout.tile_size(),
        layout.origin().x,
        layout.origin().y
    );
    let steps = board.pool().config();
    println!(
        "段數：冰塊 {}，鎖鏈 {}，木箱 {}",
        steps.ice_steps, steps.chain_steps, steps.crate_steps
    );
    println!("{}", board.to_ascii());
    println!("啟用格子：{}", board.active_count());

    for point in points {
        let (pos, hit) = board.pointer_on_board(point);
        println!(
            "({}, {}) → 格子 ({}, {}) {}",
            point.x,
            point.y,
            pos.row,
            pos.column,
            if hit { "命中" } else { "未命中" }
        );
    }

    let pool = board.dispose();
    info!("磚塊池尚未歸還：{}", pool.outstanding());
    Ok(())
}

fn load_config(path: PathBuf) -> Result<BoardConfig> {
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("讀取 {} 失敗", path.display()))?;
    let format_name = path.display().to_string();
    Ok(parse_board_config(&text, &format_name)?)
}

fn parse_point(arg: &str) -> Result<Vec3> {
    let Some((x, y)) = arg.split_once(',') else {
        bail!("指標座標格式應為 x,y：{arg}");
    };
    let x: f32 = x.trim().parse().with_context(|| format!("無效的 x：{x}"))?;
    let y: f32 = y.trim().parse().with_context(|| format!("無效的 y：{y}"))?;
    Ok(Vec3::new(x, y, 0.0))
}
