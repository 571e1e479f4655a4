pub mod numeric;
pub mod persistence;
pub mod scene;
pub mod snapshot;
pub mod speech;
pub mod tui;
