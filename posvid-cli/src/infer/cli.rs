use clap::{Arg, ArgAction, Command};

use crate::table_args::table_input_args;

pub const INFER_CMD: &str = "infer";

pub fn create_infer_cli() -> Command {
    Command::new(INFER_CMD)
        .about("Report which column would be used as the video path column, and why.")
        .args(table_input_args())
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the report as JSON"),
        )
}
