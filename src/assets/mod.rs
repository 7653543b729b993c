// file: src/assets/mod.rs
// description: packaging asset generation module exports
// reference: internal module structure

pub mod icons;

pub use icons::IconGenerator;
