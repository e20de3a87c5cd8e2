//! CLI argument parsing

#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Mandatory regex matched against relative file paths.
    pub pattern: String,
    /// Directory to scan; defaults to the current directory.
    pub directory: String,
    pub exclude_extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub sort_by_tokens: bool,
    pub show_skipped: bool,
    pub json: bool,
    pub output_file: Option<String>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            directory: ".".to_string(),
            exclude_extensions: Vec::new(),
            exclude_dirs: Vec::new(),
            sort_by_tokens: false,
            show_skipped: false,
            json: false,
            output_file: None,
        }
    }
}

/// Parse command line arguments (excluding the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli_args = CliArgs::default();
    let mut positionals = 0usize;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--exclude-extensions" => {
                i += 1;
                if i >= args.len() {
                    return Err("--exclude-extensions requires a value".to_string());
                }
                cli_args.exclude_extensions.extend(split_list(&args[i]));
            }
            "--exclude-dirs" => {
                i += 1;
                if i >= args.len() {
                    return Err("--exclude-dirs requires a value".to_string());
                }
                cli_args.exclude_dirs.extend(split_list(&args[i]));
            }
            "--output-file" | "-o" => {
                i += 1;
                if i >= args.len() {
                    return Err("--output-file requires a file path".to_string());
                }
                cli_args.output_file = Some(args[i].clone());
            }
            "--sort-by-tokens" => {
                cli_args.sort_by_tokens = true;
            }
            "--show-skipped" => {
                cli_args.show_skipped = true;
            }
            "--json" => {
                cli_args.json = true;
            }
            arg if !arg.starts_with("--") => {
                match positionals {
                    0 => cli_args.pattern = arg.to_string(),
                    1 => cli_args.directory = arg.to_string(),
                    _ => return Err(format!("Unexpected argument: {arg}")),
                }
                positionals += 1;
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if cli_args.pattern.is_empty() {
        return Err("Missing required argument: PATTERN".to_string());
    }

    Ok(cli_args)
}

/// Split a comma-separated option value, dropping empty items.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
