use std::env;

use crate::api::Arg;
use crate::model::About;
use crate::parser::base::{dispatch, ParseError};
use crate::parser::interface::{ConsoleInterface, UserInterface};
use crate::parser::printer::ErrorContext;

/// Run the command line parser against the input tokens, writing to the console.
///
/// The tokens must not include the program name.
/// Each matched flag writes its value directly into the variable bound by its [`Arg`].
/// Help (`-h`, `--help`) and version (`-v`, `--version`) are printed when encountered, without stopping the parse;
/// check [`About::printed_help`] and [`About::printed_version`] afterwards to decide whether to exit.
///
/// ### Example
/// ```
/// # use argz_builder as argz;
/// use argz::{parse_tokens, About, Arg, Ids};
///
/// let mut about = About::new("My program.", "1.0.0");
/// let mut count: i32 = 0;
/// let mut verbose: bool = false;
/// let mut options = vec![
///     Arg::new(Ids::new("count").alias('c'), &mut count, "how many"),
///     Arg::new(Ids::new("verbose"), &mut verbose, "be loud"),
/// ];
///
/// parse_tokens(&mut about, &mut options, &["-c", "5", "--verbose"]).unwrap();
/// drop(options);
///
/// assert_eq!(count, 5);
/// assert!(verbose);
/// ```
pub fn parse_tokens(
    about: &mut About,
    options: &mut [Arg<'_>],
    tokens: &[&str],
) -> Result<(), ParseError> {
    parse_tokens_with(about, options, tokens, &ConsoleInterface::default())
}

/// Run the command line parser against the input tokens, writing to `user_interface`.
///
/// Behaves like [`parse_tokens`], but help and version output go to the supplied interface.
/// Errors are returned, not written.
pub fn parse_tokens_with(
    about: &mut About,
    options: &mut [Arg<'_>],
    tokens: &[&str],
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<(), ParseError> {
    dispatch(about, options, tokens, user_interface).map_err(|(_, error)| error)
}

/// Run the command line parser against the Cli [`env::args`].
///
/// If at any point the parser encounters an error (ex: a missing `-`, an unknown alias, an un-convertible value),
/// it writes the error with its context to stderr and exits with error code `1` (via [`std::process::exit`]).
pub fn parse(about: &mut About, options: &mut [Arg<'_>]) {
    let command_input: Vec<String> = env::args().skip(1).collect();
    let tokens: Vec<&str> = command_input.iter().map(AsRef::as_ref).collect();

    if let Err(exit_code) = parse_or_exit_code(
        about,
        options,
        tokens.as_slice(),
        &ConsoleInterface::default(),
    ) {
        std::process::exit(exit_code);
    }
}

fn parse_or_exit_code(
    about: &mut About,
    options: &mut [Arg<'_>],
    tokens: &[&str],
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<(), i32> {
    match dispatch(about, options, tokens, user_interface) {
        Ok(()) => Ok(()),
        Err((index, error)) => {
            user_interface.print_error(error);
            user_interface.print_error_context(ErrorContext::new(index, tokens));
            Err(1)
        }
    }
}
