//! Logging bootstrap using `log` + `log4rs`.
//!
//! Filtering is whitelist-style: external crates are silent unless opted in,
//! our own crate logs at the requested level.

mod consts;

pub use consts::*;

use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            policy::compound::{roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger, CompoundPolicy},
            RollingFileAppender,
        },
    },
    config::{Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use std::io::IsTerminal;
use std::path::PathBuf;

const CONSOLE_APPENDER: &str = "stderr";
const LOG_FILE_APPENDER: &str = "log_file";

/// Parsed form of a filter expression such as
/// `"info,figment=debug,root=warn"`.
///
/// - A bare level sets the app level for whitelisted crates (default INFO).
/// - `root=<level>` opts in all third-party logs at that level (default OFF).
/// - `<module>=<level>` opts in one module and overrides the whitelist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSpec {
    pub app_level: LevelFilter,
    pub root_level: LevelFilter,
    pub module_levels: Vec<(String, LevelFilter)>,
}

impl FilterSpec {
    pub fn parse(filters: &str) -> Self {
        let mut spec = Self { app_level: LevelFilter::Info, root_level: LevelFilter::Off, module_levels: Vec::new() };
        for part in filters.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match part.split_once('=') {
                None => {
                    if let Ok(level) = part.parse() {
                        spec.app_level = level;
                    }
                }
                Some((module, level_str)) => {
                    let module = module.trim();
                    let Ok(level) = level_str.trim().parse() else {
                        continue;
                    };
                    if module == "root" {
                        spec.root_level = level;
                    } else if !module.is_empty() {
                        spec.module_levels.push((module.to_string(), level));
                    }
                }
            }
        }
        spec
    }
}

/// Initialize the global logger with optional rolling file output.
///
/// Console output goes to stderr. The logger is global; repeated calls are
/// ignored. This is the caller's one-time opt-in; nothing inside the core
/// initializes logging on its own.
pub fn init_logger(log_dir: Option<&str>, filters: &str) {
    let spec = FilterSpec::parse(filters);

    let use_ansi = std::io::stderr().is_terminal();
    let console_pattern = if use_ansi { LOG_LINE_PATTERN_COLORED } else { LOG_LINE_PATTERN };

    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(console_pattern)))
        .build();

    let mut config_builder = Config::builder().appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)));
    let mut root_appenders: Vec<&str> = vec![CONSOLE_APPENDER];

    if let Some(dir) = log_dir.map(str::trim).filter(|s| !s.is_empty()) {
        let log_path = PathBuf::from(dir).join(LOG_FILE_NAME);
        let archive_pattern = PathBuf::from(dir).join(format!("{LOG_FILE_NAME}.{{}}.gz"));

        let roller = FixedWindowRoller::builder()
            .base(1)
            .build(archive_pattern.to_str().unwrap_or("weft.log.{}.gz"), LOG_FILE_MAX_ROLLS)
            .unwrap();
        let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(LOG_FILE_MAX_SIZE)), Box::new(roller));

        let file_appender = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_LINE_PATTERN)))
            .build(log_path, Box::new(policy))
            .unwrap();

        config_builder = config_builder.appender(Appender::builder().build(LOG_FILE_APPENDER, Box::new(file_appender)));
        root_appenders.push(LOG_FILE_APPENDER);
    }

    let appender_names: Vec<String> = root_appenders.iter().map(|name| (*name).to_string()).collect();

    for crate_name in WHITELISTED_CRATES {
        if !spec.module_levels.iter().any(|(m, _)| m == *crate_name) {
            config_builder = config_builder.logger(
                Logger::builder()
                    .appenders(appender_names.clone())
                    .additive(false)
                    .build(*crate_name, spec.app_level),
            );
        }
    }

    for (module, level) in &spec.module_levels {
        config_builder = config_builder.logger(
            Logger::builder()
                .appenders(appender_names.clone())
                .additive(false)
                .build(module, *level),
        );
    }

    let config = config_builder.build(Root::builder().appenders(root_appenders).build(spec.root_level)).unwrap();
    let _ = log4rs::init_config(config);
}
