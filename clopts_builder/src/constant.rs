pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const VALUE_SEPARATOR: char = '=';
// The standard 'stop parsing options here' marker.
pub(crate) const END_OF_OPTIONS: &str = "--";
pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: &str = "h";
// When set (and not "0"), options after the first non-option token are left unprocessed.
pub(crate) const POSIXLY_CORRECT: &str = "POSIXLY_CORRECT";
