// commands/registry.rs
use std::collections::HashMap;
use thiserror::Error;

/// サブコマンドの記述（実行処理はコマンドフレームワーク側の責務）
pub trait Subcommand: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        ""
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command group '{0}' is already registered")]
    GroupAlreadyRegistered(String),

    #[error("Command group '{0}' is not registered")]
    UnknownGroup(String),

    #[error("Subcommand '{subcommand}' appears twice in group '{group}'")]
    DuplicateSubcommand { group: String, subcommand: String },

    #[error("Subcommand '{subcommand}' is not registered in group '{group}'")]
    UnknownSubcommand { group: String, subcommand: String },

    #[error("Command name '{0}' is already taken")]
    NameTaken(String),
}

/// コマンドグループ
pub struct CommandGroup {
    name: String,
    /// 登録順のサブコマンド
    subcommands: Vec<Box<dyn Subcommand>>,
}

impl CommandGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subcommand(&self, name: &str) -> Option<&dyn Subcommand> {
        self.subcommands
            .iter()
            .find(|subcommand| subcommand.name() == name)
            .map(|subcommand| &**subcommand)
    }

    pub fn subcommand_names(&self) -> Vec<&'static str> {
        self.subcommands.iter().map(|subcommand| subcommand.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.subcommands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subcommands.is_empty()
    }
}

/// 別名で呼び出せるサブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub alias: String,
    pub group: String,
    pub subcommand: String,
}

/// コマンドグループとショートカットの登録先
#[derive(Default)]
pub struct CommandRegistry {
    groups: HashMap<String, CommandGroup>,
    shortcuts: HashMap<String, Shortcut>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// コマンドグループを登録
    pub fn register(&mut self, group: &str, subcommands: Vec<Box<dyn Subcommand>>) -> Result<(), CommandError> {
        if self.groups.contains_key(group) {
            return Err(CommandError::GroupAlreadyRegistered(group.to_string()));
        }
        if self.shortcuts.contains_key(group) {
            return Err(CommandError::NameTaken(group.to_string()));
        }

        let mut seen = Vec::with_capacity(subcommands.len());
        for subcommand in &subcommands {
            if seen.contains(&subcommand.name()) {
                return Err(CommandError::DuplicateSubcommand {
                    group: group.to_string(),
                    subcommand: subcommand.name().to_string(),
                });
            }
            seen.push(subcommand.name());
        }

        self.groups.insert(group.to_string(), CommandGroup {
            name: group.to_string(),
            subcommands,
        });
        log::info!("Registered command /{} with {} subcommand(s)", group, seen.len());
        Ok(())
    }

    /// ショートカットを登録。対象のサブコマンドは登録済みである必要がある
    pub fn register_shortcut(&mut self, group: &str, subcommand: &str, alias: &str) -> Result<(), CommandError> {
        let target = self
            .groups
            .get(group)
            .ok_or_else(|| CommandError::UnknownGroup(group.to_string()))?;

        if target.subcommand(subcommand).is_none() {
            return Err(CommandError::UnknownSubcommand {
                group: group.to_string(),
                subcommand: subcommand.to_string(),
            });
        }
        if self.groups.contains_key(alias) || self.shortcuts.contains_key(alias) {
            return Err(CommandError::NameTaken(alias.to_string()));
        }

        self.shortcuts.insert(alias.to_string(), Shortcut {
            alias: alias.to_string(),
            group: group.to_string(),
            subcommand: subcommand.to_string(),
        });
        log::debug!("Registered shortcut /{} -> /{} {}", alias, group, subcommand);
        Ok(())
    }

    pub fn group(&self, name: &str) -> Option<&CommandGroup> {
        self.groups.get(name)
    }

    pub fn shortcut(&self, alias: &str) -> Option<&Shortcut> {
        self.shortcuts.get(alias)
    }

    /// ショートカットを対象のサブコマンドに解決する
    pub fn resolve(&self, alias: &str) -> Option<&dyn Subcommand> {
        let shortcut = self.shortcuts.get(alias)?;
        self.groups.get(&shortcut.group)?.subcommand(&shortcut.subcommand)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.shortcuts.is_empty()
    }

    /// 全ての登録を解除
    pub fn clear(&mut self) {
        self.groups.clear();
        self.shortcuts.clear();
    }
}
