pub mod budget;
pub mod config;
pub mod goal;
pub mod summary;
pub mod system;
pub mod transaction;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    let groups = [
        transaction::definitions(),
        budget::definitions(),
        goal::definitions(),
        summary::definitions(),
        config::definitions(),
        system::definitions(),
    ];
    for entry in groups.into_iter().flatten() {
        registry.register(entry);
    }
}

/// Splits `<label> <amount>` arguments, rejecting anything else with the usage line.
pub(crate) fn label_and_amount<'a>(
    args: &[&'a str],
    usage: &str,
) -> Result<(&'a str, &'a str), CommandError> {
    match args {
        &[label, amount] => Ok((label, amount)),
        _ => Err(CommandError::InvalidArguments(format!("usage: {}", usage))),
    }
}
