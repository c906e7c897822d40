mod container;
mod field;
mod rename_all;
mod variant;

pub use container::ContainerAttrs;
pub use field::FieldAttrs;
pub use rename_all::RenameAll;
pub use variant::VariantAttrs;
