//! The locomotion core. `character::Character` owns the per-tick loop;
//! everything else is a piece it orchestrates.

pub mod animation;
pub mod character;
pub mod config;
pub mod gravity;
pub mod intent;
pub mod machine;
pub mod orientation;
pub mod state;
