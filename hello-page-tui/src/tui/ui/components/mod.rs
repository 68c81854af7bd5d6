mod component;

pub use self::component::{Component, ComponentRender};
