pub mod item;
pub mod item_type;
pub mod row;
pub mod trip;
