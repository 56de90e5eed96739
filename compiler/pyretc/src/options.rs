//! Command-line flags shared by every command.

use pyret_diagnostic::emitter::ColorMode;

use crate::CliError;

/// Parsed flags and positional arguments of one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// `--color=auto|always|never`
    pub color: ColorMode,
    /// Whether the diagnostic stream is a terminal; consulted by
    /// `ColorMode::Auto`.
    pub diagnostics_tty: bool,
    /// `--tokens`: `parse` prints the token stream before the tree.
    pub tokens: bool,
    /// Cleared by `--no-parallel`.
    pub parallel: bool,
    pub paths: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            color: ColorMode::Auto,
            diagnostics_tty: false,
            tokens: false,
            parallel: true,
            paths: Vec::new(),
        }
    }
}

impl Options {
    /// Parse the arguments that follow the command name.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = Options::default();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--color=") {
                options.color = ColorMode::from_flag(value)
                    .ok_or_else(|| CliError::InvalidColor(value.to_string()))?;
            } else if arg == "--tokens" {
                options.tokens = true;
            } else if arg == "--no-parallel" {
                options.parallel = false;
            } else if arg.starts_with("--") {
                return Err(CliError::UnknownFlag(arg.clone()));
            } else {
                options.paths.push(arg.clone());
            }
        }
        Ok(options)
    }

    /// The only positional argument, for commands that take exactly one.
    pub fn single_path(&self, usage: &str) -> Result<&str, CliError> {
        match self.paths.as_slice() {
            [path] => Ok(path),
            _ => Err(CliError::Usage(usage.to_string())),
        }
    }
}

/// How a command finished, when the driver itself did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// The input had lex or syntax errors, and they were reported.
    HasErrors,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::HasErrors => 1,
        }
    }

    /// `HasErrors` if either is.
    #[must_use]
    pub fn and(self, other: Outcome) -> Outcome {
        if self == Outcome::Clean {
            other
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_flags_and_paths() {
        let options =
            Options::parse(&args(&["a.arr", "--color=never", "--no-parallel", "b.arr"])).unwrap();
        assert_eq!(options.color, ColorMode::Never);
        assert!(!options.parallel);
        assert!(!options.tokens);
        assert_eq!(options.paths, args(&["a.arr", "b.arr"]));
    }

    #[test]
    fn test_bad_flags() {
        assert!(matches!(
            Options::parse(&args(&["--color=sometimes"])),
            Err(CliError::InvalidColor(mode)) if mode == "sometimes"
        ));
        assert!(matches!(
            Options::parse(&args(&["--fast"])),
            Err(CliError::UnknownFlag(_))
        ));
    }

    #[test]
    fn test_single_path() {
        let options = Options::parse(&args(&["--tokens", "a.arr"])).unwrap();
        assert_eq!(options.single_path("parse").unwrap(), "a.arr");
        let none = Options::default();
        assert!(matches!(none.single_path("parse"), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_outcome_combination() {
        assert_eq!(Outcome::Clean.and(Outcome::Clean), Outcome::Clean);
        assert_eq!(Outcome::Clean.and(Outcome::HasErrors), Outcome::HasErrors);
        assert_eq!(Outcome::HasErrors.and(Outcome::Clean).exit_code(), 1);
    }
}
