//! CLI 境界（引数解析・補完スクリプト）

mod args;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
