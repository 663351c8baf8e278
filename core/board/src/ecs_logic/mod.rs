//! 以 bevy_ecs World 承載棋盤：棋盤本體為 Resource，每個格子為一個 Entity

pub mod query;
pub mod spawner;
pub mod sync;

/// 從 EntityRef 取得 component，若缺少則回傳 BoardError::MissingComponent
macro_rules! get_component {
    ($entity_ref:expr, $component:ty) => {
        $entity_ref
            .get::<$component>()
            .ok_or_else(|| crate::error::BoardError::MissingComponent {
                component_name: stringify!($component).to_string(),
            })?
            .clone()
    };
}

pub(super) use get_component;

use crate::ecs_types::resources::BoardResource;
use crate::error::{BoardError, Error};

fn board_not_found() -> Error {
    BoardError::BoardNotFound {
        resource_name: std::any::type_name::<BoardResource>()
            .rsplit("::")
            .next()
            .unwrap_or("BoardResource")
            .to_string(),
    }
    .into()
}
