//! This module defines the main functionality of fieldcam, an unattended camera appliance.

pub mod module;
use crate::module::define;
use crate::module::device::beeper::Beeper;
use crate::module::device::Teardown;
use crate::module::util::init::resource::init;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

// The main function of fieldcam
pub fn main() {
    // Prepare the directories and the configuration
    let property = init();

    // Initialize the logging system in the log directory
    init_log(
        property.path.dir.log.as_str(),
        define::system::NAME,
        &property.conf.system.log_level,
    );
    log::info!("Starting fieldcam...");

    // Shared beeper handle and the guard releasing it exactly once
    let beeper = Beeper::new(property.conf.pin.beeper_pin);
    let teardown = Teardown::new(beeper.clone());

    // Termination flag, dropped by SIGINT/SIGTERM
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        let teardown = teardown.clone();
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
            teardown.run();
        })
        .expect("Can't register termination handler.");
    }

    // Capture hand-off queue: the panel loop produces, post-processing consumes
    let (tx, rx) = mpsc::channel();

    // Start the consumer first so no capture waits on it
    let postprocess_handler = module::postprocess::run(property.clone(), rx, beeper.clone());
    let control_handler = module::control::run(property, tx, beeper, teardown, running);

    // Wait for both threads before exiting the main function
    let _ = control_handler.join();
    let _ = postprocess_handler.join();
}

/// This function initializes the logger system using the log4rs crate.
///
/// # Arguments
/// * `dir` - A string slice that holds the log directory
/// * `name` - A string slice that holds the name of the logger and the log file
/// * `level` - Root log level name from the configuration
///
/// # Log Example
/// ```
/// log::info!("Info Message"); // Log an info message
/// log::warn!("Warning Message"); // Log a warning message
/// ```
fn init_log(dir: &str, name: &str, level: &str) {
    use crate::module::util::path::join;
    use log::LevelFilter;
    use log4rs::append::file::FileAppender;
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{h({d} - {l}: {m}{n})}")))
        .build(join(&[dir, &format!("{}.log", name)]))
        .unwrap();

    let level = match level {
        "DEBUG" => LevelFilter::Debug,
        _ => LevelFilter::Info,
    };

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level))
        .unwrap();
    log4rs::init_config(config).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{debug, error, info, warn};
    use std::fs;
    use std::path::Path;

    // A simple test case for the init_log function
    #[test]
    fn test_log() {
        let dir = "/tmp/fieldcamtest/log";
        let name = "test_log";

        init_log(dir, name, "INFO");

        // Perform some logging
        debug!("Debug Message");
        info!("Info Message");
        warn!("Warning Message");
        error!("Error Message");

        // Read the contents of the log file
        let log_file_path_str = "/tmp/fieldcamtest/log/test_log.log";
        let log_file_path = Path::new(log_file_path_str);
        let log_contents = fs::read_to_string(log_file_path).expect("Failed to read log file");

        // Assert that log messages are present in the file
        assert!(!log_contents.contains("Debug Message"));
        assert!(log_contents.contains("Info Message"));
        assert!(log_contents.contains("Warning Message"));
        assert!(log_contents.contains("Error Message"));
    }
}
