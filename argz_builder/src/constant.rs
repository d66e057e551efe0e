pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "write help to console";
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const VERSION_SHORT: char = 'v';
pub(crate) const VERSION_MESSAGE: &str = "write the version to console";
