//! Configuration schema types for North Light.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod backend;
mod deployment;
mod system;

pub use backend::*;
pub use deployment::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for North Light.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct NorthlightConfig {
    pub backend: BackendConfig,
    pub widget: WidgetConfig,
    pub playground: PlaygroundConfig,
    pub notifications: NotificationsConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
