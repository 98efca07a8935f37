// commands/maptool.rs
// /maptool コマンドグループ

use crate::commands::registry::{CommandError, CommandRegistry, Subcommand};

/// コマンドグループ名
pub const GROUP: &str = "maptool";

macro_rules! subcommand {
    ($type:ident, $name:literal, $description:literal) => {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $type;

        impl $type {
            pub const NAME: &'static str = $name;
        }

        impl Subcommand for $type {
            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn description(&self) -> &'static str {
                $description
            }
        }
    };
}

subcommand!(NewCommand, "new", "Creates a new map from an image URL.");
subcommand!(ListCommand, "list", "Lists all the maps you own.");
subcommand!(GetCommand, "get", "Gives you a map again.");
subcommand!(RenameCommand, "rename", "Renames one of your maps.");
subcommand!(DeleteCommand, "delete", "Deletes one of your maps.");
subcommand!(GiveCommand, "give", "Gives a map to another player.");
subcommand!(GetRemainingCommand, "getremaining", "Gives you the parts of a poster that did not fit in your inventory.");
subcommand!(ExploreCommand, "explore", "Opens a GUI to see and manage your maps.");
subcommand!(UpdateCommand, "update", "Updates a map with a new image.");

/// (グループ, サブコマンド, 別名)
pub const SHORTCUTS: [(&str, &str, &str); 3] = [
    (GROUP, NewCommand::NAME, "tomap"),
    (GROUP, ExploreCommand::NAME, "maps"),
    (GROUP, GiveCommand::NAME, "givemap"),
];

/// 登録順のサブコマンド一覧
pub fn subcommands() -> Vec<Box<dyn Subcommand>> {
    vec![
        Box::new(NewCommand),
        Box::new(ListCommand),
        Box::new(GetCommand),
        Box::new(RenameCommand),
        Box::new(DeleteCommand),
        Box::new(GiveCommand),
        Box::new(GetRemainingCommand),
        Box::new(ExploreCommand),
        Box::new(UpdateCommand),
    ]
}

/// グループを登録してからショートカットを登録する
pub fn register(registry: &mut CommandRegistry) -> Result<(), CommandError> {
    registry.register(GROUP, subcommands())?;
    for (group, subcommand, alias) in SHORTCUTS {
        registry.register_shortcut(group, subcommand, alias)?;
    }
    Ok(())
}
