use crate::api::Arg;
use crate::constant::*;
use crate::model::About;
use crate::parser::interface::UserInterface;

// The built-in flags are padded so their messages line up.
const BUILT_IN_WIDTH: usize = 17;
const PADDING: &str = "    ";

/// Write the help message and mark it as printed.
///
/// Defaults are rendered from the variables' current values.
pub(crate) fn print_help(
    about: &mut About,
    options: &[Arg<'_>],
    user_interface: &(impl UserInterface + ?Sized),
) {
    about.mark_help();
    user_interface.print(about.description().to_string());
    user_interface.print(format!("Version: {}", about.version()));
    user_interface.print("".to_string());

    let help_flags = format!("-{HELP_SHORT}, --{HELP_NAME}");
    let version_flags = format!("-{VERSION_SHORT}, --{VERSION_NAME}");
    user_interface.print(format!("{help_flags:BUILT_IN_WIDTH$}{HELP_MESSAGE}"));
    user_interface.print(format!("{version_flags:BUILT_IN_WIDTH$}{VERSION_MESSAGE}"));

    for arg in options {
        let id = arg.ids().id();
        let flags = match arg.ids().short() {
            Some(s) => format!("-{s}, --{id}"),
            None if id.chars().count() == 1 => format!("-{id}"),
            None => format!("--{id}"),
        };
        let default = arg.var().render();

        if default.is_empty() {
            user_interface.print(format!("{flags}{PADDING}{}", arg.help()));
        } else {
            user_interface.print(format!(
                "{flags}{PADDING}{}, default: {default}",
                arg.help()
            ));
        }
    }

    user_interface.print("".to_string());
}

/// Write the version line and mark it as printed.
pub(crate) fn print_version(about: &mut About, user_interface: &(impl UserInterface + ?Sized)) {
    about.mark_version();
    user_interface.print(format!("Version: {}", about.version()));
}

/// The tokens of a failed parse, with a caret under the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    index: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(index: usize, tokens: &[&str]) -> Self {
        Self {
            index,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        // Each preceding token is followed by a single space.
        let width: usize = self
            .tokens
            .iter()
            .take(self.index)
            .map(|token| token.chars().count() + 1)
            .sum();

        write!(f, "{projection}\n{:width$}^", "")
    }
}
