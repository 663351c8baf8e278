use match_board::domain::core_types::{TileGroup, Vec3};
use match_board::ecs_types::components::GridPosition;
use match_board::error::{BoardError, ErrorKind, LoadError};
use match_board::loader::{board_config_to_toml, load_layout_from_ascii, parse_board_config};
use match_board::loader_schema::BoardConfig;
use match_board::logic::slot_board::SlotBoard;
use match_board::logic::tile_pool::{PoolConfig, TileItemsPool};

const LEVEL_TOML: &str = r#"
name = "level-1"
tile_size = 2.0
layout = """
x . . x
. I C .
. . B .
"""

[anchor]
x = 1.0
y = 0.0
z = 0.0

[pool]
ice_steps = 3
"#;

#[test]
fn test_ascii_layout_3x4() {
    let ascii = r#"
        x . . x
        . I C .
        . . B .
    "#;

    let layout = load_layout_from_ascii(ascii).expect("版面應可解析");

    assert_eq!(layout.rows, 3);
    assert_eq!(layout.columns, 4);
    assert_eq!(layout.cells.len(), 12);
    assert_eq!(layout.cells[0], TileGroup::Unavailable);
    assert_eq!(layout.cells[5], TileGroup::Ice);
    assert_eq!(layout.cells[6], TileGroup::Chain);
    assert_eq!(layout.cells[10], TileGroup::Crate);
    assert_eq!(
        layout
            .cells
            .iter()
            .filter(|g| **g == TileGroup::Available)
            .count(),
        7
    );
}

#[test]
fn test_ascii_layout_errors() {
    let err = load_layout_from_ascii("   \n  ").expect_err("空版面應失敗");
    assert!(matches!(err.kind(), ErrorKind::Load(LoadError::ParseError(_))));

    let err = load_layout_from_ascii(". . .\n. .").expect_err("列寬不一致應失敗");
    assert!(matches!(err.kind(), ErrorKind::Load(LoadError::ParseError(_))));

    let err = load_layout_from_ascii(". . .\n. ? .").expect_err("未知符號應失敗");
    match err.kind() {
        ErrorKind::Load(LoadError::UnknownSymbol {
            symbol,
            row,
            column,
        }) => {
            assert_eq!(symbol, "?");
            assert_eq!((*row, *column), (1, 1));
        }
        other => panic!("預期 UnknownSymbol，得到 {other:?}"),
    }
}

#[test]
fn test_parse_board_config() {
    let config = parse_board_config(LEVEL_TOML, "level-1.toml").expect("設定應可解析");

    assert_eq!(config.name, "level-1");
    assert_eq!(config.rows, None);
    assert_eq!(config.columns, None);
    assert_eq!(config.tile_size, 2.0);
    assert_eq!(config.anchor, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(
        config.pool,
        PoolConfig {
            ice_steps: 3,
            ..Default::default()
        }
    );
}

#[test]
fn test_parse_board_config_defaults() {
    let config = parse_board_config("", "empty.toml").expect("空設定應使用預設值");
    assert_eq!(config, BoardConfig::default());

    let board = SlotBoard::from_config(&config, TileItemsPool::default()).expect("應可建立棋盤");
    assert_eq!((board.rows(), board.columns()), (9, 9));
    assert_eq!(board.active_count(), 81);
}

#[test]
fn test_parse_board_config_rejects_bad_toml() {
    let err = parse_board_config("tile_size = \"big\"", "bad.toml").expect_err("型別錯誤應失敗");
    match err.kind() {
        ErrorKind::Load(LoadError::DeserializeError { format, .. }) => {
            assert_eq!(format, "bad.toml");
        }
        other => panic!("預期 DeserializeError，得到 {other:?}"),
    }
}

#[test]
fn test_board_from_config_applies_layout() {
    let config = parse_board_config(LEVEL_TOML, "level-1.toml").expect("設定應可解析");
    let pool = TileItemsPool::new(config.pool.clone());
    let board = SlotBoard::from_config(&config, pool).expect("應可建立棋盤");

    assert_eq!((board.rows(), board.columns()), (3, 4));
    assert_eq!(board.active_count(), 10);

    let corner = GridPosition::new(0, 0);
    assert!(!board.is_on_board(corner));
    assert!(board.is_on_grid(corner));

    let ice = GridPosition::new(1, 1);
    assert!(board.is_on_board(ice));
    assert_eq!(board.group_at(ice).expect("位置應有效"), TileGroup::Ice);
    assert!(board.can_place_item(ice).expect("位置應有效"));
    assert!(board.is_locked(ice).expect("位置應有效"));

    // 原點：(1, 0) + (-2 * 2, 1 * 2)
    assert_eq!(board.layout().origin(), Vec3::new(-3.0, 2.0, 0.0));
    assert_eq!(board.to_ascii(), "x . . x\n. I C .\n. . B .");
}

#[test]
fn test_board_from_config_size_mismatch() {
    let mut config = parse_board_config(LEVEL_TOML, "level-1.toml").expect("設定應可解析");
    config.rows = Some(5);

    let err = SlotBoard::from_config(&config, TileItemsPool::default()).expect_err("尺寸不符應失敗");
    assert!(matches!(
        err.kind(),
        ErrorKind::Board(BoardError::LayoutMismatch {
            layout_rows: 3,
            rows: 5,
            ..
        })
    ));
}

#[test]
fn test_apply_layout_rejects_other_size() {
    let mut board = SlotBoard::from_config(&BoardConfig::default(), TileItemsPool::default())
        .expect("應可建立棋盤");
    let small = load_layout_from_ascii(". .\n. .").expect("版面應可解析");

    let err = board.apply_layout(&small).expect_err("尺寸不符應失敗");
    assert!(matches!(
        err.kind(),
        ErrorKind::Board(BoardError::LayoutMismatch { .. })
    ));
    assert_eq!(board.active_count(), 81);
}

#[test]
fn test_board_config_toml_round_trip() {
    let config = parse_board_config(LEVEL_TOML, "level-1.toml").expect("設定應可解析");

    let text = board_config_to_toml(&config).expect("設定應可序列化");
    let reparsed = parse_board_config(&text, "round-trip.toml").expect("輸出應可再解析");

    assert_eq!(reparsed.name, config.name);
    assert_eq!(reparsed.tile_size, config.tile_size);
    assert_eq!(reparsed.anchor, config.anchor);
    assert_eq!(reparsed.pool, config.pool);

    let original_layout = load_layout_from_ascii(config.layout.as_deref().unwrap_or_default())
        .expect("原版面應可解析");
    let reparsed_layout = load_layout_from_ascii(reparsed.layout.as_deref().unwrap_or_default())
        .expect("輸出版面應可解析");
    assert_eq!(reparsed_layout, original_layout);
}
