use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Tree,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "tree" => Ok(OutputFormat::Tree),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'tree'",
                s
            )),
        }
    }
}

/// Aggregate dependency graphs from multi-target build evaluation streams
#[derive(Parser, Debug)]
#[command(name = "crossdeps")]
#[command(version)]
#[command(
    about = "Aggregate dependency graphs from multi-target build evaluation streams",
    long_about = None
)]
pub struct Args {
    /// Path to the scenario JSON file (project + evaluation updates)
    #[arg(short, long)]
    pub input: String,

    /// Output format: json or tree
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a crossdeps.config.yml (defaults to auto-discovery in the
    /// current directory)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_json() {
        let format = OutputFormat::from_str("json").unwrap();
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn test_output_format_from_str_json_case_insensitive() {
        let format = OutputFormat::from_str("JSON").unwrap();
        assert!(matches!(format, OutputFormat::Json));

        let format = OutputFormat::from_str("Json").unwrap();
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn test_output_format_from_str_tree() {
        let format = OutputFormat::from_str("tree").unwrap();
        assert!(matches!(format, OutputFormat::Tree));

        let format = OutputFormat::from_str("TREE").unwrap();
        assert!(matches!(format, OutputFormat::Tree));
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let result = OutputFormat::from_str("xml");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid format"));
    }

    #[test]
    fn test_args_parse_minimal() {
        let args = Args::parse_from(["crossdeps", "--input", "scenario.json"]);
        assert_eq!(args.input, "scenario.json");
        assert!(matches!(args.format, OutputFormat::Json));
        assert!(args.output.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_parse_full() {
        let args = Args::parse_from([
            "crossdeps",
            "-i",
            "scenario.json",
            "-f",
            "tree",
            "-o",
            "out.txt",
            "-c",
            "custom.yml",
        ]);
        assert!(matches!(args.format, OutputFormat::Tree));
        assert_eq!(args.output.as_deref(), Some("out.txt"));
        assert_eq!(args.config.as_deref(), Some("custom.yml"));
    }
}
