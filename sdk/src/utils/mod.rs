pub mod text;
pub mod timestamp;
