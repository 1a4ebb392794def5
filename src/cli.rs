use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bionic-path")]
#[command(about = "Browse bionic prototypes by function, prototype and fabrication method", long_about = None)]
pub struct Cli {
    /// Dataset to load at startup (.xlsx, .xls, .ods, .csv or .json)
    #[arg(default_value = "data/table.xlsx")]
    pub data: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_path_defaults_to_table_xlsx() {
        let cli = Cli::parse_from(["bionic-path"]);
        assert_eq!(cli.data, PathBuf::from("data/table.xlsx"));
    }

    #[test]
    fn data_path_is_positional() {
        let cli = Cli::parse_from(["bionic-path", "other.csv"]);
        assert_eq!(cli.data, PathBuf::from("other.csv"));
    }
}
