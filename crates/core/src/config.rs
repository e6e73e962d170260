//! Configuration constants for font pairing state.

/// Font assigned to every role at startup and after a font reset.
pub const DEFAULT_FONT: &str = "Inter";

/// Delimiter between role tokens in the combined font reference.
pub const REFERENCE_DELIMITER: char = '|';

/// Replacement for spaces inside a family name within the combined reference.
pub const NAME_SPACE_SEPARATOR: char = '+';

/// Stylesheet endpoint the presentation layer loads the combined reference from.
pub const STYLESHEET_BASE_URL: &str = "https://fonts.googleapis.com/css?family=";
