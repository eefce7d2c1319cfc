pub mod document;
pub mod error;
pub mod listing;
pub mod nav;
pub mod style;
pub mod svg;
