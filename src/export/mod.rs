pub mod bbox;
pub mod gif;
pub mod svg;
