pub mod grid;
pub mod grouping;
pub mod stops;
pub mod timeline;
