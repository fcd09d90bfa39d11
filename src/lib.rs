pub mod config;
pub mod logging;
pub mod utils;

pub use config::error::KeyMapError;
pub use config::key_map::{Binding, KeyMap};
pub use config::keys_manager::KeysManager;
pub use utils::app_paths::{AppPaths, PathResolver};
pub use utils::platform::{HostPlatform, Platform, PlatformDetector};
