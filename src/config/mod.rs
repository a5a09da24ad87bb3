mod manager;

pub use manager::{
    ChatboxConfig, ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config,
};
