//! Core building blocks shared by every roamstay module: layered settings,
//! the [`Module`] lifecycle trait, and the [`ModuleRegistry`].

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Migration, Module};
pub use registry::ModuleRegistry;
