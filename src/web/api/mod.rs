pub mod error;
pub mod health;
pub mod orbit;
pub mod overview;
pub mod scene;
