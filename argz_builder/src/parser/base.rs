use thiserror::Error;

use crate::api::{find, resolve_alias, Arg, ConversionError};
use crate::constant::*;
use crate::model::About;
use crate::parser::interface::UserInterface;
use crate::parser::printer::{print_help, print_version};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The reasons a parse may fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A flag did not begin with `-`.
    #[error("Expected '-' to begin flag '{token}'.")]
    Syntax {
        /// The offending token.
        token: String,
    },

    /// A single character flag did not match any alias.
    #[error("Invalid alias flag '-{alias}'.")]
    UnknownAlias {
        /// The unmatched alias.
        alias: char,
    },

    /// A flag that takes a value was the final token.
    #[error("Missing required value for flag '{name}'.")]
    MissingValue {
        /// The long name of the flag.
        name: String,
    },

    /// A value could not be converted to its variable's type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Walk the tokens, writing each flag's value through to its variable.
///
/// The program name must not be included in `tokens`.
/// On failure, the index of the offending token is returned alongside the error.
pub(crate) fn dispatch(
    about: &mut About,
    options: &mut [Arg<'_>],
    tokens: &[&str],
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<(), (usize, ParseError)> {
    if tokens.is_empty() {
        if about.wants_help_when_no_options() {
            print_help(about, options, user_interface);
        }

        return Ok(());
    }

    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index];
        let flag = match token.strip_prefix('-') {
            Some(flag) => flag.strip_prefix('-').unwrap_or(flag),
            None => {
                return Err((
                    index,
                    ParseError::Syntax {
                        token: token.to_string(),
                    },
                ));
            }
        };

        if flag == HELP_NAME || is_short(flag, HELP_SHORT) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Flag '{token}' requests help.");
            }

            print_help(about, options, user_interface);
            index += 1;
            continue;
        }

        if flag == VERSION_NAME || is_short(flag, VERSION_SHORT) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Flag '{token}' requests the version.");
            }

            print_version(about, user_interface);
            index += 1;
            continue;
        }

        let mut chars = flag.chars();
        let id = match (chars.next(), chars.next()) {
            (Some(alias), None) => match resolve_alias(options, alias) {
                Some(id) => id.to_string(),
                None => return Err((index, ParseError::UnknownAlias { alias })),
            },
            _ => flag.to_string(),
        };

        if id.is_empty() {
            // A bare '-' or '--' ends the flags.
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Flag '{token}' is empty, stopping.");
            }

            break;
        }

        match find(options, &id) {
            Some(arg) if arg.var().is_switch() => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Switch '{id}' matched by '{token}'.");
                }

                arg.var_mut().flip();
            }
            Some(arg) => {
                let value = match tokens.get(index + 1) {
                    Some(value) => *value,
                    None => return Err((index, ParseError::MissingValue { name: id })),
                };

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Flag '{id}' matched by '{token}', capturing '{value}'.");
                }

                // The value is taken as-is, even if it looks like a flag.
                index += 1;
                arg.var_mut()
                    .capture(Some(value))
                    .map_err(|error| (index, ParseError::from(error)))?;
            }
            None => {
                // Unknown long names are skipped, unlike unknown aliases.
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Flag '{token}' does not match any option, ignoring.");
                }
            }
        }

        index += 1;
    }

    Ok(())
}

fn is_short(flag: &str, short: char) -> bool {
    let mut chars = flag.chars();
    chars.next() == Some(short) && chars.next().is_none()
}
