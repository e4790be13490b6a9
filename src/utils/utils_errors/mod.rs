use std::fmt;

/// A common error type returned by functions throughout the crate.
#[derive(Clone, Debug, PartialEq)]
pub enum RobotDescriptionError {
    GenericError(String),
    MissingResourceError(String),
    UrdfParseError(String),
    ConfigError(String)
}
impl RobotDescriptionError {
    pub fn new_generic_error_str(s: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: {} -- File: {}, Line: {}", s, file, line);
        return Self::GenericError(s);
    }
    pub fn new_missing_resource_error(description: &str, path: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: {} at {} -- File: {}, Line: {}", description, path, file, line);
        return Self::MissingResourceError(s);
    }
    pub fn new_urdf_parse_error(s: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Could not parse urdf.  {} -- File: {}, Line: {}", s, file, line);
        return Self::UrdfParseError(s);
    }
    pub fn new_config_error(s: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Invalid configuration.  {} -- File: {}, Line: {}", s, file, line);
        return Self::ConfigError(s);
    }
    pub fn message(&self) -> &str {
        match self {
            RobotDescriptionError::GenericError(s) => { s.as_str() }
            RobotDescriptionError::MissingResourceError(s) => { s.as_str() }
            RobotDescriptionError::UrdfParseError(s) => { s.as_str() }
            RobotDescriptionError::ConfigError(s) => { s.as_str() }
        }
    }
}
impl fmt::Display for RobotDescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
impl std::error::Error for RobotDescriptionError { }
