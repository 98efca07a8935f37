use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use image_on_map_lib::core::PluginContext;
use image_on_map_lib::{ImageOnMap, PluginHost, Subsystem, SubsystemResult, Subsystems};

/// 単体実行用のホスト
struct StandaloneHost {
    data_folder: PathBuf,
    package_file: PathBuf,
    disabled: AtomicBool,
}

impl PluginHost for StandaloneHost {
    fn data_folder(&self) -> PathBuf {
        self.data_folder.clone()
    }

    fn package_file(&self) -> PathBuf {
        self.package_file.clone()
    }

    fn disable_plugin(&self, plugin_name: &str) {
        log::warn!("Disabling {}", plugin_name);
        self.disabled.store(true, Ordering::SeqCst);
    }
}

/// ログを出すだけのサブシステム
struct LoggingSubsystem {
    id: &'static str,
    context: Option<Arc<PluginContext>>,
}

impl LoggingSubsystem {
    fn boxed(id: &'static str) -> Box<dyn Subsystem> {
        Box::new(Self { id, context: None })
    }
}

impl Subsystem for LoggingSubsystem {
    fn get_id(&self) -> String {
        self.id.to_string()
    }

    fn init(&mut self, context: Arc<PluginContext>) -> SubsystemResult<()> {
        log::info!("{}: images are stored like {}", self.id, context.image_path_for(0).display());
        self.context = Some(context);
        Ok(())
    }

    fn exit(&mut self) -> SubsystemResult<()> {
        if let Some(context) = self.context.take() {
            log::info!("{}: maps kept in {}", self.id, context.maps_directory().display());
        }
        Ok(())
    }
}

fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}

fn main() {
    // ロガーの初期化
    env_logger::init();

    let mut args = env::args_os().skip(1);
    let data_folder = absolute(args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("plugins/ImageOnMap")));
    let package_file = absolute(args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("resources/image-on-map.pkg.json")));

    let host = Arc::new(StandaloneHost {
        data_folder,
        package_file,
        disabled: AtomicBool::new(false),
    });

    let subsystems = Subsystems {
        map_manager: LoggingSubsystem::boxed("map-manager"),
        map_init_event: LoggingSubsystem::boxed("map-init-event"),
        map_item_manager: LoggingSubsystem::boxed("map-item-manager"),
    };

    let mut plugin = match ImageOnMap::new(Arc::clone(&host) as Arc<dyn PluginHost>, subsystems) {
        Ok(plugin) => plugin,
        Err(e) => {
            log::error!("Failed to create plugin: {}", e);
            process::exit(1);
        }
    };

    let result = plugin.on_enable();
    if let Err(e) = &result {
        log::error!("Failed to enable {}: {}", ImageOnMap::NAME, e);
    }

    if let Some(group) = plugin.commands().group(image_on_map_lib::commands::maptool::GROUP) {
        println!("/{} {}", group.name(), group.subcommand_names().join("|"));
        for (_, subcommand, alias) in image_on_map_lib::commands::maptool::SHORTCUTS {
            println!("/{} -> /{} {}", alias, group.name(), subcommand);
        }
    }

    plugin.on_disable();

    if result.is_err() || host.disabled.load(Ordering::SeqCst) {
        process::exit(1);
    }
}
