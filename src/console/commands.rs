//! Command handlers

use core::fmt::Write;

use super::parser::ParsedCommand;
use super::ConsoleError;
use crate::config::{ConfigHost, Language, LoadOutcome};
use crate::logging::{timestamp_us, LogLevel};
use crate::{dev_info, LOG_STREAM};

/// Firmware version string stamped by the build script
pub const VERSION: &str = env!("VERSION_STRING");

/// Command handler: parsed line, settings handle, output sink
pub type CommandHandler =
    fn(&ParsedCommand<'_>, &mut dyn ConfigHost, &mut dyn Write) -> Result<(), ConsoleError>;

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub usage: &'static str,
    pub brief: &'static str,
    pub handler: CommandHandler,
}

/// All available commands
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "help", usage: "help [command]", brief: "List commands", handler: cmd_help },
    CommandDescriptor { name: "show", usage: "show [setting]", brief: "Show settings", handler: cmd_show },
    CommandDescriptor { name: "set", usage: "set <setting> <value>", brief: "Change a setting", handler: cmd_set },
    CommandDescriptor { name: "save", usage: "save", brief: "Persist settings", handler: cmd_save },
    CommandDescriptor { name: "load", usage: "load", brief: "Reload saved settings", handler: cmd_load },
    CommandDescriptor { name: "debug", usage: "debug [level]", brief: "Show or set log level", handler: cmd_debug },
    CommandDescriptor { name: "version", usage: "version", brief: "Firmware version", handler: cmd_version },
];

/// Names accepted by `show` and `set`
pub const SETTINGS: &[&str] = &["beep", "capitalize", "language"];

/// Execute a parsed command
pub fn execute(
    cmd: &ParsedCommand<'_>,
    host: &mut dyn ConfigHost,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    if cmd.is_empty() {
        return Ok(()); // Empty line, do nothing
    }

    let descriptor = COMMANDS
        .iter()
        .find(|c| c.name == cmd.command)
        .ok_or(ConsoleError::UnknownCommand)?;

    (descriptor.handler)(cmd, host, out)
}

/// Get all command names
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}

// --- Value parsing ---

fn parse_bool(value: &str) -> Result<bool, ConsoleError> {
    match value {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(ConsoleError::InvalidValue),
    }
}

fn parse_language(value: &str) -> Result<Language, ConsoleError> {
    if value.eq_ignore_ascii_case("english") {
        return Ok(Language::English);
    }
    if value.eq_ignore_ascii_case("russian") {
        return Ok(Language::Russian);
    }

    value
        .parse::<u8>()
        .map(Language::from_u8)
        .map_err(|_| ConsoleError::InvalidValue)
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn write_setting(host: &dyn ConfigHost, name: &str, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let config = host.config();
    match name {
        "beep" => {
            let _ = writeln!(out, "beep={}", on_off(config.beep));
        }
        "capitalize" => {
            let _ = writeln!(out, "capitalize={}", on_off(config.capitalize));
        }
        "language" => {
            let _ = writeln!(
                out,
                "language={} {}",
                config.language.as_u8(),
                config.language.name()
            );
        }
        _ => return Err(ConsoleError::UnknownSetting),
    }
    Ok(())
}

// --- Command Implementations ---

fn cmd_help(
    cmd: &ParsedCommand<'_>,
    _host: &mut dyn ConfigHost,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    if let Some(name) = cmd.arg(0) {
        let c = COMMANDS
            .iter()
            .find(|c| c.name == name)
            .ok_or(ConsoleError::UnknownCommand)?;
        let _ = writeln!(out, "{}: {}", c.usage, c.brief);
    } else {
        for c in COMMANDS {
            let _ = writeln!(out, "  {:<22} {}", c.usage, c.brief);
        }
    }
    Ok(())
}

fn cmd_show(
    cmd: &ParsedCommand<'_>,
    host: &mut dyn ConfigHost,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    match cmd.arg(0) {
        Some(name) => write_setting(host, name, out),
        None => {
            let _ = write!(out, "{}", host.config());
            Ok(())
        }
    }
}

fn cmd_set(
    cmd: &ParsedCommand<'_>,
    host: &mut dyn ConfigHost,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let name = cmd.arg(0).ok_or(ConsoleError::MissingArg)?;
    if !SETTINGS.contains(&name) {
        return Err(ConsoleError::UnknownSetting);
    }
    let value = cmd.arg(1).ok_or(ConsoleError::MissingArg)?;

    let config = host.config_mut();
    match name {
        "beep" => config.beep = parse_bool(value)?,
        "capitalize" => config.capitalize = parse_bool(value)?,
        _ => config.language = parse_language(value)?,
    }

    dev_info!(LOG_STREAM, Console, timestamp_us(), "set {}={}", name, value);
    write_setting(host, name, out)
}

fn cmd_save(
    _cmd: &ParsedCommand<'_>,
    host: &mut dyn ConfigHost,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    host.save()?;
    let _ = writeln!(out, "Config has been saved");
    let _ = write!(out, "{}", host.config());
    Ok(())
}

fn cmd_load(
    _cmd: &ParsedCommand<'_>,
    host: &mut dyn ConfigHost,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    match host.load()? {
        LoadOutcome::Loaded => {
            let _ = writeln!(out, "loaded");
        }
        LoadOutcome::Defaults => {
            let _ = writeln!(out, "no saved settings, unchanged");
        }
    }
    let _ = write!(out, "{}", host.config());
    Ok(())
}

fn cmd_debug(
    cmd: &ParsedCommand<'_>,
    _host: &mut dyn ConfigHost,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    if let Some(name) = cmd.arg(0) {
        let level = LogLevel::parse(name).ok_or(ConsoleError::UnknownLevel)?;
        LOG_STREAM.set_max_level(level);
    }

    let _ = writeln!(out, "log level: {}", LOG_STREAM.max_level().as_str());
    Ok(())
}

fn cmd_version(
    _cmd: &ParsedCommand<'_>,
    _host: &mut dyn ConfigHost,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let _ = writeln!(out, "{}", VERSION);
    Ok(())
}
