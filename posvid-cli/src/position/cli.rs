use clap::{Arg, ArgAction, Command};

use posvid_core::consts::{DEFAULT_SIBLING_NAME, DEFAULT_TARGET_COLUMN};

use crate::table_args::table_input_args;

pub const POSITION_CMD: &str = "position";

pub fn create_position_cli() -> Command {
    Command::new(POSITION_CMD)
        .about("Add a column pointing each video at the position.mp4 in its directory.")
        .args(table_input_args())
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .help("Where to write the result. Defaults to overwriting the input"),
        )
        .arg(
            Arg::new("video-col")
                .long("video-col")
                .short('c')
                .help("Column holding the video paths. Inferred from names and contents when omitted"),
        )
        .arg(
            Arg::new("target-col")
                .long("target-col")
                .default_value(DEFAULT_TARGET_COLUMN)
                .help("Name of the derived column"),
        )
        .arg(
            Arg::new("sibling")
                .long("sibling")
                .default_value(DEFAULT_SIBLING_NAME)
                .help("File name that replaces each video's file name"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Derive the column but do not write anything"),
        )
}
