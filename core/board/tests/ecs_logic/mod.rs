mod query;

use bevy_ecs::prelude::World;
use match_board::ecs_logic::spawner::spawn_board;

const BOARD_TOML: &str = r#"
name = "ecs-board"
layout = """
. . x
. I .
"""
"#;

fn setup_world_with_board(config_toml: &str) -> World {
    let mut world = World::new();
    spawn_board(&mut world, config_toml, "test-board").expect("spawn_board 應成功");
    world
}
