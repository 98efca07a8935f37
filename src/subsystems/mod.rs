// subsystems/mod.rs
// マップレジストリ等、外部サブシステムとの境界

pub mod registry;
pub mod subsystem_trait;

pub use registry::{SubsystemRegistry, SubsystemRegistryError, SubsystemState};
pub use subsystem_trait::{Subsystem, SubsystemResult};
