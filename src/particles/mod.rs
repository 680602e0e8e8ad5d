pub mod snow;

pub use snow::SnowfallSystem;
