// simulation_engine/mod.rs
pub mod data_generation;
pub mod dataset_loader;
pub mod preprocessing;
