use crate::parser::{ErrorContext, ParseError};

/// Where the parser writes help, version, and error output.
///
/// The default is [`ConsoleInterface`].
/// Supply another implementation to [`parse_tokens_with`](crate::parse_tokens_with) to capture or redirect the output.
pub trait UserInterface {
    /// Write one line of regular output.
    fn print(&self, message: String);

    /// Write a parse error.
    fn print_error(&self, error: ParseError);

    /// Write the token context of a parse error.
    fn print_error_context(&self, error_context: ErrorContext);
}

/// Writes regular output to stdout and errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("Parse error: {error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

#[cfg(any(test, feature = "unit_test"))]
pub use self::memory::MemoryInterface;

#[cfg(any(test, feature = "unit_test"))]
mod memory {
    use crate::parser::{ErrorContext, ParseError, UserInterface};
    use std::cell::RefCell;

    /// Collects everything written to it, for inspection in tests.
    ///
    /// *Available using 'unit_test' crate feature only.*
    #[derive(Debug, Default)]
    pub struct MemoryInterface {
        message: RefCell<Option<Vec<String>>>,
        error: RefCell<Option<String>>,
        error_context: RefCell<Option<String>>,
    }

    impl UserInterface for MemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            self.message
                .borrow_mut()
                .get_or_insert_with(Vec::default)
                .push(message);
        }

        fn print_error(&self, error: ParseError) {
            // Assumes print_error() is only ever called once.
            self.error.borrow_mut().replace(error.to_string());
        }

        fn print_error_context(&self, error_context: ErrorContext) {
            // Assumes print_error_context() is only ever called once.
            self.error_context
                .borrow_mut()
                .replace(error_context.to_string());
        }
    }

    impl MemoryInterface {
        /// Take the (message, error, error context) written so far.
        /// Messages are joined with newlines.
        pub fn consume(self) -> (Option<String>, Option<String>, Option<String>) {
            let MemoryInterface {
                message,
                error,
                error_context,
            } = self;

            (
                message.take().map(|messages| messages.join("\n")),
                error.take(),
                error_context.take(),
            )
        }

        /// Take the message written so far, asserting no error was written.
        pub fn consume_message(self) -> String {
            let (message, error, error_context) = self.consume();
            assert_eq!(error, None);
            assert_eq!(error_context, None);
            message.unwrap_or_default()
        }
    }
}
