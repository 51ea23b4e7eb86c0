pub mod catalog;
pub mod format;
pub mod geometry;
pub mod palette;
pub mod scene;
pub mod web;
