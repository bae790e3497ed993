//! This module is responsible for preparing the resources needed by the application, such as directories, configurations, logs, etc.
//!

pub mod resource {
    use super::FieldcamProperty;

    /// Initialize the application resources and return a FieldcamProperty instance containing paths and configurations.
    ///
    pub fn init() -> FieldcamProperty {
        // Prepare the picture and log directories
        let paths = crate::module::util::path::dir::create_app_sub_dir();

        // Load the app configuration file from the base directory
        let conf = crate::module::util::conf::toml::load(&paths.dir.base);

        FieldcamProperty { path: paths, conf }
    }
}

/// This struct represents the properties of the app, such as paths and configurations.
///
#[derive(Debug, Clone)]
pub struct FieldcamProperty {
    pub path: crate::module::util::path::FieldcamPath,
    pub conf: crate::module::util::conf::Config,
}
