mod load;
mod merge;
mod model;

pub use load::load_config;
pub use merge::resolve;
pub use model::{
    AuthKind, ContactConfig, GlobalConfig, LicenseConfig, OpenApiConfig, ServerConfig, SpecInfo,
    TagConfig, UiConfig,
};
