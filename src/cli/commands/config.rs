use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;

const CONFIG_USAGE: &str = "config [show|set <currency|precision|color|data_file> <value>]";
const MAX_PRECISION: u8 = 6;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change shell preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show_config(context);
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: {}",
                    CONFIG_USAGE
                )));
            }
            let value = args[2..].join(" ");
            set_config_value(context, args[1], value.trim())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}`",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let config = &context.config;
    output_section("Configuration");
    io::print_info(format!("  currency  : {}", config.currency_label));
    io::print_info(format!("  precision : {}", config.precision));
    io::print_info(format!(
        "  color     : {}",
        if config.ui_color_enabled { "on" } else { "off" }
    ));
    io::print_info(format!(
        "  data_file : {}",
        context.config_manager.data_file(config).display()
    ));
    io::print_info(format!(
        "  stored at : {}",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    match key.to_lowercase().as_str() {
        "currency" => {
            context.config.currency_label = value.to_string();
        }
        "precision" => {
            let precision = value
                .parse::<u8>()
                .ok()
                .filter(|digits| *digits <= MAX_PRECISION)
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!(
                        "precision must be a whole number from 0 to {}",
                        MAX_PRECISION
                    ))
                })?;
            context.config.precision = precision;
        }
        "color" => {
            context.config.ui_color_enabled = match value.to_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "expected `on` or `off`, got `{}`",
                        other
                    )))
                }
            };
        }
        "data_file" => {
            context.config.data_file = Some(value.into());
            io::print_info("The new ledger location is used from the next start.");
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown config key `{}`",
                other
            )))
        }
    }
    context.persist_config()?;
    io::print_success(format!("Config `{}` updated.", key));
    Ok(())
}
