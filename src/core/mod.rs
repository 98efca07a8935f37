// core/mod.rs
// コアモジュールのエントリポイント

pub mod archive;
pub mod config;
pub mod directory_guard;
pub mod error;
pub mod event_bus;
pub mod gui;
pub mod host;
pub mod i18n;
pub mod lifecycle;
pub mod plugin_context;
pub mod resource_locator;

// コアモジュールを一括でエクスポート
pub use archive::{ArchiveGuard, FilePackage, PackageArchive};
pub use config::PluginConfiguration;
pub use directory_guard::ensure_directory;
pub use error::LifecycleError;
pub use event_bus::{EventBus, EventPayload};
pub use gui::OpenGuiTracker;
pub use host::PluginHost;
pub use i18n::I18n;
pub use lifecycle::{ImageOnMap, LifecycleState, Subsystems};
pub use plugin_context::PluginContext;
pub use resource_locator::{MapId, ResourceLocator};
