// lifecycle.rs
// プラグインの有効化・無効化の手順

use std::sync::Arc;

use crate::commands::{maptool, CommandRegistry};
use crate::core::archive::ArchiveGuard;
use crate::core::config::PluginConfiguration;
use crate::core::directory_guard::ensure_directory;
use crate::core::error::LifecycleError;
use crate::core::event_bus::{self, EventBus};
use crate::core::gui::OpenGuiTracker;
use crate::core::host::PluginHost;
use crate::core::i18n::I18n;
use crate::core::plugin_context::PluginContext;
use crate::subsystems::{Subsystem, SubsystemRegistry};

/// プラグインのライフサイクル状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    DirectoriesReady,
    ConfigLoaded,
    LocalizationLoaded,
    SubsystemsRunning,
    Disabled,
    /// ディレクトリを用意できず起動を中断した
    Aborted,
}

/// 初期化順に並べたサブシステム
pub struct Subsystems {
    pub map_manager: Box<dyn Subsystem>,
    pub map_init_event: Box<dyn Subsystem>,
    pub map_item_manager: Box<dyn Subsystem>,
}

/// プラグイン本体
pub struct ImageOnMap {
    host: Arc<dyn PluginHost>,
    context: Arc<PluginContext>,
    state: LifecycleState,
    configuration: PluginConfiguration,
    i18n: I18n,
    open_guis: Arc<OpenGuiTracker>,
    subsystems: SubsystemRegistry,
    commands: CommandRegistry,
    event_bus: Arc<EventBus>,
}

impl ImageOnMap {
    pub const NAME: &'static str = "ImageOnMap";

    /// ホストのデータフォルダからコンテキストを一度だけ生成する
    pub fn new(host: Arc<dyn PluginHost>, subsystems: Subsystems) -> Result<Self, LifecycleError> {
        let event_bus = Arc::new(EventBus::new());
        let open_guis = Arc::new(OpenGuiTracker::new());
        let context = Arc::new(PluginContext::new(
            host.data_folder(),
            Arc::clone(&event_bus),
            Arc::clone(&open_guis),
        ));

        let mut registry = SubsystemRegistry::new(Arc::clone(&event_bus));
        for subsystem in [subsystems.map_manager, subsystems.map_init_event, subsystems.map_item_manager] {
            registry
                .register(subsystem)
                .map_err(LifecycleError::SubsystemRegistration)?;
        }

        Ok(Self {
            host,
            context,
            state: LifecycleState::Uninitialized,
            configuration: PluginConfiguration::default(),
            i18n: I18n::new(),
            open_guis,
            subsystems: registry,
            commands: CommandRegistry::new(),
            event_bus,
        })
    }

    /// ホストから有効化時に呼ばれる
    pub fn on_enable(&mut self) -> Result<(), LifecycleError> {
        match self.state {
            LifecycleState::Uninitialized | LifecycleState::Disabled | LifecycleState::Aborted => {}
            state => {
                return Err(LifecycleError::InvalidState {
                    operation: "enable",
                    state,
                })
            }
        }

        if let Err(e) = self.check_directories() {
            log::error!("FATAL: {}", e);
            self.state = LifecycleState::Aborted;
            event_bus::emit(&self.event_bus, Self::NAME, "plugin:aborted", serde_json::json!({
                "error": e.to_string(),
            }));
            self.host.disable_plugin(Self::NAME);
            return Err(e);
        }
        self.state = LifecycleState::DirectoriesReady;

        self.load_configuration();
        self.open_guis.clear_open_guis();
        self.state = LifecycleState::ConfigLoaded;

        self.load_localization()?;
        self.state = LifecycleState::LocalizationLoaded;

        self.i18n.set_primary_locale(&self.configuration.lang);

        self.subsystems
            .init_all(&self.context)
            .map_err(LifecycleError::SubsystemInitFailure)?;

        maptool::register(&mut self.commands)?;
        event_bus::emit(&self.event_bus, Self::NAME, "command:registered", serde_json::json!({
            "group": maptool::GROUP,
        }));

        self.state = LifecycleState::SubsystemsRunning;
        event_bus::emit(&self.event_bus, Self::NAME, "plugin:enabled", serde_json::json!({
            "data_folder": self.context.data_folder().display().to_string(),
        }));
        log::info!("{}", self.i18n.translate("plugin.enabled"));
        Ok(())
    }

    /// ホストから無効化時に呼ばれる。起動途中で失敗していても安全に呼べる
    pub fn on_disable(&mut self) {
        self.subsystems.exit_all();
        self.open_guis.clear_open_guis();
        self.commands.clear();

        self.state = LifecycleState::Disabled;
        event_bus::emit(&self.event_bus, Self::NAME, "plugin:disabled", serde_json::json!({}));
        log::info!("{} disabled", Self::NAME);
    }

    fn check_directories(&self) -> Result<(), LifecycleError> {
        ensure_directory(self.context.maps_directory())?;
        ensure_directory(self.context.images_directory())
    }

    /// 設定の読み込みに失敗しても既定値で続行する
    fn load_configuration(&mut self) {
        let data_folder = self.context.data_folder();

        if let Err(e) = PluginConfiguration::save_default(data_folder) {
            log::warn!("{}", e);
        }

        self.configuration = match PluginConfiguration::load(data_folder) {
            Ok(configuration) => configuration,
            Err(e) => {
                log::warn!("{}, using default configuration", e);
                PluginConfiguration::default()
            }
        };
    }

    /// アーカイブはこの関数を抜けるまでに必ず閉じる
    fn load_localization(&mut self) -> Result<(), LifecycleError> {
        let mut guard = match self.host.open_package() {
            Ok(archive) => Some(ArchiveGuard::new(archive)),
            Err(e) => {
                log::error!(
                    "Unable to load package archive {}: {}",
                    self.host.package_file().display(),
                    e
                );
                None
            }
        };

        let loaded = self.i18n.on_enable(guard.as_mut().and_then(|g| g.archive_mut()));

        if let Some(guard) = guard {
            if let Err((path, source)) = guard.release() {
                let e = LifecycleError::ArchiveHandleFailure { path, source };
                log::error!("{}", e);
            }
        }

        loaded?;
        Ok(())
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn context(&self) -> &Arc<PluginContext> {
        &self.context
    }

    pub fn configuration(&self) -> &PluginConfiguration {
        &self.configuration
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn subsystems(&self) -> &SubsystemRegistry {
        &self.subsystems
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    pub fn open_guis(&self) -> &Arc<OpenGuiTracker> {
        &self.open_guis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::archive::testing::CountingArchive;
    use crate::core::archive::PackageArchive;
    use crate::core::config::CONFIG_FILE_NAME;
    use crate::core::i18n::I18nError;
    use crate::subsystems::subsystem_trait::MockSubsystem;
    use crate::subsystems::{SubsystemRegistryError, SubsystemResult, SubsystemState};
    use fs2::FileExt;
    use serde_json::json;
    use std::fs::{self, File};
    use std::io;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Mutex};
    use std::thread;
    use std::time::Duration;
    use tempfile::{tempdir, TempDir};

    /// パッケージの開き方を差し替えられるテスト用ホスト
    struct TestHost {
        data_folder: PathBuf,
        package_file: PathBuf,
        disable_requests: AtomicUsize,
        package: Mutex<Option<CountingArchive>>,
        opens: AtomicUsize,
    }

    impl TestHost {
        fn new(data_folder: &Path) -> Self {
            Self {
                data_folder: data_folder.to_path_buf(),
                package_file: data_folder.join("missing.pkg.json"),
                disable_requests: AtomicUsize::new(0),
                package: Mutex::new(None),
                opens: AtomicUsize::new(0),
            }
        }

        fn with_package(self, archive: CountingArchive) -> Self {
            *self.package.lock().unwrap() = Some(archive);
            self
        }

        fn with_package_file(mut self, path: PathBuf) -> Self {
            self.package_file = path;
            self
        }
    }

    impl PluginHost for TestHost {
        fn data_folder(&self) -> PathBuf {
            self.data_folder.clone()
        }

        fn package_file(&self) -> PathBuf {
            self.package_file.clone()
        }

        fn disable_plugin(&self, plugin_name: &str) {
            assert_eq!(plugin_name, ImageOnMap::NAME);
            self.disable_requests.fetch_add(1, Ordering::SeqCst);
        }

        fn open_package(&self) -> io::Result<Box<dyn PackageArchive>> {
            self.opens.fetch_add(1, Ordering::SeqCst);
            match self.package.lock().unwrap().take() {
                Some(archive) => Ok(Box::new(archive)),
                None => crate::core::archive::FilePackage::open(&self.package_file)
                    .map(|p| Box::new(p) as Box<dyn PackageArchive>),
            }
        }
    }

    struct Fixture {
        _dir: TempDir,
        base: PathBuf,
        journal: Arc<Mutex<Vec<String>>>,
        init_calls: Vec<Arc<AtomicUsize>>,
        exit_calls: Vec<Arc<AtomicUsize>>,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempdir().unwrap();
            let base = dir.path().join("plugins").join("ImageOnMap");
            Self {
                _dir: dir,
                base,
                journal: Arc::new(Mutex::new(Vec::new())),
                init_calls: Vec::new(),
                exit_calls: Vec::new(),
            }
        }

        fn subsystems(&mut self, failing: Option<&str>) -> Subsystems {
            let mut make = |id: &str| -> Box<dyn Subsystem> {
                let mut mock = MockSubsystem::with_journal(id, Arc::clone(&self.journal));
                mock.fail_init = failing == Some(id);
                self.init_calls.push(Arc::clone(&mock.init_calls));
                self.exit_calls.push(Arc::clone(&mock.exit_calls));
                Box::new(mock)
            };
            Subsystems {
                map_manager: make("map-manager"),
                map_init_event: make("map-init-event"),
                map_item_manager: make("map-item-manager"),
            }
        }

        fn plugin(&mut self, host: TestHost, failing: Option<&str>) -> (Arc<TestHost>, ImageOnMap) {
            let host = Arc::new(host);
            let subsystems = self.subsystems(failing);
            let plugin = ImageOnMap::new(Arc::clone(&host) as Arc<dyn PluginHost>, subsystems).unwrap();
            (host, plugin)
        }

        fn total_inits(&self) -> usize {
            self.init_calls.iter().map(|c| c.load(Ordering::SeqCst)).sum()
        }

        fn total_exits(&self) -> usize {
            self.exit_calls.iter().map(|c| c.load(Ordering::SeqCst)).sum()
        }
    }

    /// 有効化の完了を受けて "map:ready" を発行するサブシステム
    struct ReadyAnnouncer;

    impl Subsystem for ReadyAnnouncer {
        fn get_id(&self) -> String {
            "map-manager".to_string()
        }

        fn init(&mut self, context: Arc<PluginContext>) -> SubsystemResult<()> {
            let bus = Arc::downgrade(context.event_bus());
            context.event_bus().subscribe("plugin:enabled", move |payload| match bus.upgrade() {
                Some(bus) => bus.publish_from("map-manager", "map:ready", payload.data),
                None => Ok(()),
            })
        }
    }

    fn bundle() -> serde_json::Value {
        json!({
            "i18n": {
                "en_US": {"plugin.enabled": "ImageOnMap is ready."},
                "fr_FR": {"plugin.enabled": "ImageOnMap est prêt."}
            }
        })
    }

    #[test]
    fn test_enable_on_fresh_data_folder() {
        let mut fixture = Fixture::new();
        let closes = Arc::new(AtomicUsize::new(0));
        let host = TestHost::new(&fixture.base).with_package(CountingArchive::new(bundle(), Arc::clone(&closes)));
        let (host, mut plugin) = fixture.plugin(host, None);
        assert_eq!(plugin.state(), LifecycleState::Uninitialized);

        plugin.on_enable().unwrap();

        assert_eq!(plugin.state(), LifecycleState::SubsystemsRunning);
        assert!(fixture.base.join("maps").is_dir());
        assert!(fixture.base.join("images").is_dir());
        assert!(fixture.base.join(CONFIG_FILE_NAME).is_file());
        assert_eq!(host.disable_requests.load(Ordering::SeqCst), 0);

        let group = plugin.commands().group("maptool").unwrap();
        assert_eq!(group.len(), 9);
        assert_eq!(plugin.commands().resolve("tomap").unwrap().name(), "new");
        assert_eq!(plugin.commands().resolve("maps").unwrap().name(), "explore");
        assert_eq!(plugin.commands().resolve("givemap").unwrap().name(), "give");

        assert_eq!(
            *fixture.journal.lock().unwrap(),
            vec!["init:map-manager", "init:map-init-event", "init:map-item-manager"]
        );
        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert_eq!(plugin.i18n().primary_locale(), Some("en_US"));
        assert_eq!(
            plugin.context().image_path_for(5),
            fixture.base.join("images").join("map5.png")
        );
    }

    #[test]
    fn test_directory_failure_aborts_startup() {
        let mut fixture = Fixture::new();
        fs::create_dir_all(&fixture.base).unwrap();
        fs::write(fixture.base.join("maps"), "occupied").unwrap();
        let (host, mut plugin) = fixture.plugin(TestHost::new(&fixture.base), None);

        let err = plugin.on_enable().unwrap_err();

        assert!(err.is_fatal());
        assert!(matches!(err, LifecycleError::DirectoryFailure { ref path, .. } if path.ends_with("maps")));
        assert_eq!(plugin.state(), LifecycleState::Aborted);
        assert_eq!(host.disable_requests.load(Ordering::SeqCst), 1);
        assert_eq!(fixture.total_inits(), 0);
        assert!(plugin.commands().group("maptool").is_none());
        assert!(plugin.commands().is_empty());
        // 後続の手順は一切実行しない
        assert_eq!(host.opens.load(Ordering::SeqCst), 0);
        assert!(!fixture.base.join(CONFIG_FILE_NAME).exists());
        assert!(!fixture.base.join("images").exists());
        assert_eq!(fs::read_to_string(fixture.base.join("maps")).unwrap(), "occupied");
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_data_folder_aborts_startup() {
        use std::os::unix::fs::PermissionsExt;

        let mut fixture = Fixture::new();
        fs::create_dir_all(&fixture.base).unwrap();
        fs::set_permissions(&fixture.base, fs::Permissions::from_mode(0o555)).unwrap();

        // root は権限に関係なく書き込めるので確認できない
        let write_check = fixture.base.join("write-check");
        if fs::create_dir(&write_check).is_ok() {
            fs::remove_dir(&write_check).unwrap();
            fs::set_permissions(&fixture.base, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let (host, mut plugin) = fixture.plugin(TestHost::new(&fixture.base), None);
        let result = plugin.on_enable();
        fs::set_permissions(&fixture.base, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(
            err,
            LifecycleError::DirectoryFailure { ref path, ref source }
                if path.ends_with("maps") && source.kind() == io::ErrorKind::PermissionDenied
        ));
        assert_eq!(plugin.state(), LifecycleState::Aborted);
        assert_eq!(host.disable_requests.load(Ordering::SeqCst), 1);
        assert_eq!(fixture.total_inits(), 0);
        assert!(plugin.commands().group("maptool").is_none());
        assert_eq!(host.opens.load(Ordering::SeqCst), 0);
        assert!(!fixture.base.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_disable_after_abort_is_safe() {
        let mut fixture = Fixture::new();
        fs::create_dir_all(fixture.base.join("maps")).unwrap();
        fs::write(fixture.base.join("images"), "occupied").unwrap();
        let (_host, mut plugin) = fixture.plugin(TestHost::new(&fixture.base), None);
        assert!(plugin.on_enable().is_err());

        plugin.on_disable();

        assert_eq!(plugin.state(), LifecycleState::Disabled);
        assert_eq!(fixture.total_inits(), 0);
        assert_eq!(fixture.total_exits(), 3);
    }

    #[test]
    fn test_disable_without_enable_is_safe() {
        let mut fixture = Fixture::new();
        let (_host, mut plugin) = fixture.plugin(TestHost::new(&fixture.base), None);

        plugin.on_disable();

        assert_eq!(plugin.state(), LifecycleState::Disabled);
        assert!(!fixture.base.exists());
    }

    #[test]
    fn test_archive_released_once_when_bundle_is_malformed() {
        let mut fixture = Fixture::new();
        let closes = Arc::new(AtomicUsize::new(0));
        let archive = CountingArchive::new(json!({"i18n": "broken"}), Arc::clone(&closes));
        let (_host, mut plugin) = fixture.plugin(TestHost::new(&fixture.base).with_package(archive), None);

        let err = plugin.on_enable().unwrap_err();

        assert!(matches!(err, LifecycleError::LocalizationFailure(I18nError::MalformedBundle { .. })));
        assert!(!err.is_fatal());
        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert_eq!(plugin.state(), LifecycleState::ConfigLoaded);
        assert_eq!(fixture.total_inits(), 0);
    }

    #[test]
    fn test_archive_close_failure_is_not_fatal() {
        let mut fixture = Fixture::new();
        let closes = Arc::new(AtomicUsize::new(0));
        let mut archive = CountingArchive::new(bundle(), Arc::clone(&closes));
        archive.fail_close = true;
        let (host, mut plugin) = fixture.plugin(TestHost::new(&fixture.base).with_package(archive), None);

        plugin.on_enable().unwrap();

        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert_eq!(plugin.state(), LifecycleState::SubsystemsRunning);
        assert_eq!(host.disable_requests.load(Ordering::SeqCst), 0);
        assert_eq!(plugin.i18n().translate("plugin.enabled"), "ImageOnMap is ready.");
    }

    #[test]
    fn test_missing_package_still_enables() {
        let mut fixture = Fixture::new();
        let (_host, mut plugin) = fixture.plugin(TestHost::new(&fixture.base), None);

        plugin.on_enable().unwrap();

        assert_eq!(plugin.state(), LifecycleState::SubsystemsRunning);
        assert!(plugin.i18n().available_locales().is_empty());
    }

    #[test]
    fn test_package_file_lock_released_after_enable() {
        let mut fixture = Fixture::new();
        let package = fixture._dir.path().join("image-on-map.pkg.json");
        fs::write(&package, bundle().to_string()).unwrap();
        fs::create_dir_all(&fixture.base).unwrap();
        fs::write(fixture.base.join(CONFIG_FILE_NAME), r#"{"lang": "fr_FR"}"#).unwrap();
        let host = TestHost::new(&fixture.base).with_package_file(package.clone());
        let (_host, mut plugin) = fixture.plugin(host, None);

        plugin.on_enable().unwrap();

        let file = File::open(&package).unwrap();
        assert!(FileExt::try_lock_exclusive(&file).is_ok());
        assert_eq!(plugin.configuration().lang, "fr_FR");
        assert_eq!(plugin.i18n().translate("plugin.enabled"), "ImageOnMap est prêt.");
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let mut fixture = Fixture::new();
        fs::create_dir_all(&fixture.base).unwrap();
        fs::write(fixture.base.join(CONFIG_FILE_NAME), "not json").unwrap();
        let (_host, mut plugin) = fixture.plugin(TestHost::new(&fixture.base), None);

        plugin.on_enable().unwrap();

        assert_eq!(plugin.configuration(), &PluginConfiguration::default());
        assert_eq!(fs::read_to_string(fixture.base.join(CONFIG_FILE_NAME)).unwrap(), "not json");
    }

    #[test]
    fn test_subsystem_init_failure_is_propagated() {
        let mut fixture = Fixture::new();
        let (host, mut plugin) = fixture.plugin(TestHost::new(&fixture.base), Some("map-init-event"));

        let err = plugin.on_enable().unwrap_err();

        assert!(matches!(err, LifecycleError::SubsystemInitFailure(_)));
        assert_eq!(
            *fixture.journal.lock().unwrap(),
            vec!["init:map-manager", "init:map-init-event"]
        );
        assert_eq!(plugin.subsystems().get_state("map-init-event").unwrap(), SubsystemState::Error);
        assert!(plugin.commands().group("maptool").is_none());
        assert_eq!(host.disable_requests.load(Ordering::SeqCst), 0);

        plugin.on_disable();
        assert_eq!(fixture.total_exits(), 3);
    }

    #[test]
    fn test_duplicate_subsystem_id_is_a_registration_error() {
        let mut fixture = Fixture::new();
        let host = Arc::new(TestHost::new(&fixture.base));
        let mut subsystems = fixture.subsystems(None);
        subsystems.map_item_manager = Box::new(MockSubsystem::new("map-manager"));

        let result = ImageOnMap::new(host as Arc<dyn PluginHost>, subsystems);

        assert!(matches!(
            result,
            Err(LifecycleError::SubsystemRegistration(SubsystemRegistryError::AlreadyExists(ref id)))
                if id == "map-manager"
        ));
        assert_eq!(fixture.total_inits(), 0);
        assert!(!fixture.base.exists());
    }

    #[test]
    fn test_handler_publishing_during_enable_does_not_block() {
        let mut fixture = Fixture::new();
        let host = Arc::new(TestHost::new(&fixture.base));
        let mut subsystems = fixture.subsystems(None);
        subsystems.map_manager = Box::new(ReadyAnnouncer);
        let mut plugin = ImageOnMap::new(Arc::clone(&host) as Arc<dyn PluginHost>, subsystems).unwrap();

        let sources = Arc::new(Mutex::new(Vec::new()));
        let sources_clone = Arc::clone(&sources);
        plugin.event_bus().subscribe("map:ready", move |payload| {
            sources_clone.lock().unwrap().push(payload.source);
            Ok(())
        }).unwrap();

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = plugin.on_enable().map_err(|e| e.to_string());
            let _ = tx.send((result, plugin));
        });
        let (result, mut plugin) = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("on_enable did not return");

        result.unwrap();
        assert_eq!(plugin.state(), LifecycleState::SubsystemsRunning);
        assert_eq!(*sources.lock().unwrap(), vec![Some("map-manager".to_string())]);
        assert_eq!(
            *fixture.journal.lock().unwrap(),
            vec!["init:map-init-event", "init:map-item-manager"]
        );

        plugin.on_disable();
        assert_eq!(plugin.state(), LifecycleState::Disabled);
    }

    #[test]
    fn test_disable_tears_down_and_allows_reenable() {
        let mut fixture = Fixture::new();
        let (_host, mut plugin) = fixture.plugin(TestHost::new(&fixture.base), None);
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = Arc::clone(&events);
        for event_type in ["plugin:enabled", "plugin:disabled"] {
            let events_clone = Arc::clone(&events_clone);
            plugin.event_bus().subscribe(event_type, move |payload| {
                events_clone.lock().unwrap().push(payload.event_type);
                Ok(())
            }).unwrap();
        }

        plugin.on_enable().unwrap();
        assert!(matches!(
            plugin.on_enable(),
            Err(LifecycleError::InvalidState { state: LifecycleState::SubsystemsRunning, .. })
        ));
        plugin.context().open_guis().open("alice", "MapListGui");

        plugin.on_disable();

        assert_eq!(plugin.state(), LifecycleState::Disabled);
        assert_eq!(plugin.open_guis().open_count(), 0);
        assert!(plugin.commands().is_empty());
        assert_eq!(
            *fixture.journal.lock().unwrap(),
            vec![
                "init:map-manager",
                "init:map-init-event",
                "init:map-item-manager",
                "exit:map-manager",
                "exit:map-init-event",
                "exit:map-item-manager",
            ]
        );
        // ディレクトリは削除しない
        assert!(fixture.base.join("maps").is_dir());

        plugin.on_enable().unwrap();
        assert_eq!(plugin.state(), LifecycleState::SubsystemsRunning);
        assert_eq!(fixture.total_inits(), 6);
        assert_eq!(
            *events.lock().unwrap(),
            vec!["plugin:enabled", "plugin:disabled", "plugin:enabled"]
        );
    }
}
