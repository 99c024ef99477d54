use crate::error::LakescanError;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the analyzer command line.
pub const ANALYZER_ENV_VAR: &str = "LAKESCAN_ANALYZER";

const DEFAULT_ANALYZER: &str = "databricks labs lakebridge";

/// How to reach the external analyzer: the program plus any arguments that
/// come before the `analyze` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    pub program: String,
    pub leading_args: Vec<String>,
}

impl ToolConfig {
    /// Parses a space-separated command line such as
    /// `"databricks labs lakebridge"`. The first token is the program.
    pub fn from_command_line(command_line: &str) -> Result<Self, LakescanError> {
        let mut tokens = command_line.split_whitespace().map(str::to_string);
        let program = tokens.next().ok_or_else(|| {
            LakescanError::InvalidArguments("Analyzer command cannot be empty".to_string())
        })?;
        Ok(Self {
            program,
            leading_args: tokens.collect(),
        })
    }

    /// Resolution order: explicit CLI value, then the `LAKESCAN_ANALYZER`
    /// environment variable, then the built-in default.
    pub fn resolve(cli_value: Option<&str>) -> Result<Self, LakescanError> {
        if let Some(value) = cli_value {
            return Self::from_command_line(value);
        }
        if let Ok(value) = std::env::var(ANALYZER_ENV_VAR) {
            return Self::from_command_line(&value);
        }
        Self::from_command_line(DEFAULT_ANALYZER)
    }

    /// Renders program + args as a display string, quoting arguments that
    /// contain spaces.
    pub fn render(&self, args: &[String]) -> String {
        let mut cmd = self.program.clone();
        for arg in args {
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push_str(&format!("\"{}\"", arg));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: "databricks".to_string(),
            leading_args: vec!["labs".to_string(), "lakebridge".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_builtin_command_line() {
        let parsed = ToolConfig::from_command_line(DEFAULT_ANALYZER).unwrap();
        assert_eq!(parsed, ToolConfig::default());
    }

    #[test]
    fn test_from_command_line_single_program() {
        let config = ToolConfig::from_command_line("lakebridge-cli").unwrap();
        assert_eq!(config.program, "lakebridge-cli");
        assert!(config.leading_args.is_empty());
    }

    #[test]
    fn test_from_command_line_rejects_empty() {
        assert!(matches!(
            ToolConfig::from_command_line("   "),
            Err(LakescanError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_render_quotes_spaced_args() {
        // render() takes the full argument vector; leading args are part of
        // the slice, not implied by the config
        let config = ToolConfig::default();
        let args: Vec<String> = ["labs", "lakebridge", "analyze", "a b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            config.render(&args),
            "databricks labs lakebridge analyze \"a b\""
        );

        let rendered = config.render(&["analyze".to_string(), "a b".to_string()]);
        assert_eq!(rendered, "databricks analyze \"a b\"");
    }
}
