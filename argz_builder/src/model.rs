/// The identifiers of a flag: its long name and an optional single character alias.
///
/// Long names are matched exactly (`--count`), never by prefix.
/// Neither long names nor aliases are checked for uniqueness; on lookup the first declared flag wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ids {
    id: String,
    alias: Option<char>,
}

impl Ids {
    /// Create identifiers with a long name and no alias.
    ///
    /// ### Example
    /// ```
    /// # use argz_builder as argz;
    /// use argz::Ids;
    ///
    /// let ids = Ids::new("count").alias('c');
    /// assert_eq!(ids.id(), "count");
    /// assert_eq!(ids.short(), Some('c'));
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            alias: None,
        }
    }

    /// Set the single character alias (`-c`).
    /// If repeated, only the final alias will apply.
    pub fn alias(mut self, alias: char) -> Self {
        self.alias.replace(alias);
        self
    }

    /// The long name.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The alias, if any.
    pub fn short(&self) -> Option<char> {
        self.alias
    }
}

/// Metadata for a single parse run.
///
/// The description and version are shown by `--help` and `--version`.
/// After parsing, [`About::printed_help`] and [`About::printed_version`] tell the program whether it should exit early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct About {
    description: String,
    version: String,
    print_help_when_no_options: bool,
    printed_help: bool,
    printed_version: bool,
}

impl About {
    /// Create the run metadata.
    /// By default, help is printed when the program is invoked without any flags.
    pub fn new(description: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            version: version.into(),
            print_help_when_no_options: true,
            printed_help: false,
            printed_version: false,
        }
    }

    /// Configure whether help is printed when the program is invoked without any flags.
    ///
    /// ### Example
    /// ```
    /// # use argz_builder as argz;
    /// use argz::{parse_tokens, About};
    ///
    /// let mut about = About::new("quiet program", "1.0").print_help_when_no_options(false);
    /// parse_tokens(&mut about, &mut [], &[]).unwrap();
    /// assert!(!about.printed_help());
    /// ```
    pub fn print_help_when_no_options(mut self, enabled: bool) -> Self {
        self.print_help_when_no_options = enabled;
        self
    }

    /// The program description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The program version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the help message was written during the last parse.
    pub fn printed_help(&self) -> bool {
        self.printed_help
    }

    /// Whether the version line was written during the last parse.
    pub fn printed_version(&self) -> bool {
        self.printed_version
    }

    pub(crate) fn wants_help_when_no_options(&self) -> bool {
        self.print_help_when_no_options
    }

    pub(crate) fn mark_help(&mut self) {
        self.printed_help = true;
    }

    pub(crate) fn mark_version(&mut self) {
        self.printed_version = true;
    }
}
