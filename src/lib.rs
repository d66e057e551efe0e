//! `argz` is a command line parser for Rust that writes each flag straight into your own variables.
//!
//! Most command line parsers produce a parsed-results object which the program then queries.
//! `argz` does not.
//! Instead, each flag is declared against a mutable borrow of a program variable, and parsing writes through that borrow.
//! Specifically, `argz` prioritizes the following design concerns:
//! * *Direct binding*:
//! The program declares `let mut count: i32 = 0;` and binds it; after parsing, `count` holds the value.
//! There is no intermediate structure to query, and no `&str -> T` conversion for the user to call.
//! * *Small and predictable*:
//! Flags are `--name VALUE` or `-a VALUE` (via a single character alias), with booleans being present/absent switches.
//! There are no sub-commands, no repeated flags, no combined short flags (`-abc`), and no environment fallback.
//! * *Testable*:
//! All output (help, version, errors) goes through an injectable [`UserInterface`].
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/counter.rs")]
//! ```
//!
//! ```console
//! $ counter -h
//! Count things, out loud if asked.
//! Version: 0.3.0
//!
//! -h, --help       write help to console
//! -v, --version    write the version to console
//! -c, --count    how many to count, default: 3
//! --verbose    print every step, default: 0
//! -l, --label    what to call each step
//! -o, --output    where to write the tally
//!
//! $ counter -c 2 --label sheep
//! sheep 1
//! sheep 2
//!
//! $ counter -c two
//! Parse error: cannot convert 'two' to i32.
//! -c two
//!    ^
//! ```
//!
//! # Types
//! A flag is an [`Arg`]: its [`Ids`] (long name and optional alias), the bound variable as a [`Var`], and a help message.
//! The supported variable types are:
//! * `bool`: a switch, set to `true` when the flag is present (no value is consumed).
//! * `i32`, `u32`, `i64`, `u64`, `f64`: parsed as decimal literals.
//! A value that does not fit the type (ex: `-1` into a `u32`) is an error; there is no silent truncation.
//! * `String` and [`std::path::PathBuf`]: stored verbatim.
//! * `Option<T>` for each of the above except `bool`: set to `Some(..)` when the flag is present, and left untouched otherwise.
//!
//! ### Defaults
//! `argz` has nothing to do with setting defaults.
//! The default of a flag is whatever the variable held before parsing, and the help message shows it.
//! An empty `String` or a `None` shows no default at all.
//!
//! # Cli Semantics
//! `argz` parses the Cli tokens according to the following rules.
//!
//! * Every token in flag position must begin with `-`; otherwise the parse fails.
//! * `-name` and `--name` are equivalent.
//! A flag of exactly one character (`-c` or `--c`) is an alias, and must match the alias of a declared flag.
//! * `-h`/`--help` and `-v`/`--version` print help and version respectively, and then parsing continues.
//! These take precedence over any flag aliased `h` or `v`.
//! * A flag that takes a value always consumes the next token, even if it begins with `-`.
//! If there is no next token, the parse fails.
//! * Unknown long names are ignored, whereas unknown aliases fail the parse.
//! * A bare `-` or `--` ends parsing; anything after it is left untouched.
//! * With no tokens at all, help is printed (see [`About::print_help_when_no_options`]).
//!
//! # Features
//! * `unit_test`: Exposes `MemoryInterface`, a [`UserInterface`] which collects output in memory.
//! * `tracing_debug`: Emits `tracing` debug events as flags are resolved.
pub use argz_builder::*;
