use crate::domain::Command;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;

/// CLI から受け取った生の設定（command は文字列のまま保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    pub home_dir: Option<String>,
    /// 削除確認を省略する（-y/--yes）
    pub assume_yes: bool,
    /// コマンド名（None の場合は list）
    pub command_name: Option<String>,
    pub command_args: Vec<String>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("home-dir")
                .short('d')
                .long("home-dir")
                .value_name("directory")
                .help("Specify a home directory (sets QUIZBOX_HOME for this process)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Do not ask for confirmation before deleting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new("quizbox")
            .about("Local quiz history: list, show, save and delete generated quizzes")
            .subcommand_required(false)
            .subcommand(clap::Command::new("help").about("Display this help message"))
            .subcommand(
                clap::Command::new("list")
                    .visible_alias("ls")
                    .about("List quizzes, newest first (default)")
                    .arg(
                        clap::Arg::new("long")
                            .short('l')
                            .long("long")
                            .help("Show a content preview for each quiz")
                            .action(ArgAction::SetTrue),
                    ),
            )
            .subcommand(
                clap::Command::new("show")
                    .about("Show one quiz")
                    .arg(clap::Arg::new("id").required(true).value_name("id")),
            )
            .subcommand(
                clap::Command::new("save")
                    .about("Store generated quiz content from a file or stdin")
                    .arg(clap::Arg::new("id").required(true).value_name("id"))
                    .arg(clap::Arg::new("file").value_name("file")),
            )
            .subcommand(
                clap::Command::new("rm")
                    .visible_alias("remove")
                    .about("Delete quiz(zes) by id")
                    .arg(
                        clap::Arg::new("ids")
                            .num_args(1..)
                            .required(true)
                            .value_name("id"),
                    ),
            )
            .subcommand(clap::Command::new("clear").about("Delete every quiz in the history")),
    )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help") || matches.subcommand_matches("help").is_some();
    let home_dir = matches.get_one::<String>("home-dir").cloned();
    let assume_yes = matches.get_flag("yes");

    let strings = |m: &clap::ArgMatches, name: &str| -> Vec<String> {
        m.get_many::<String>(name)
            .map(|i| i.cloned().collect())
            .unwrap_or_default()
    };

    let (command_name, command_args) = match matches.subcommand() {
        None | Some(("help", _)) => (None, Vec::new()),
        Some(("list", m)) => {
            let args = if m.get_flag("long") {
                vec!["--long".to_string()]
            } else {
                vec![]
            };
            (Some("list".to_string()), args)
        }
        Some(("show", m)) => (Some("show".to_string()), strings(m, "id")),
        Some(("save", m)) => {
            let mut args = strings(m, "id");
            args.extend(strings(m, "file"));
            (Some("save".to_string()), args)
        }
        Some(("rm", m)) => (Some("rm".to_string()), strings(m, "ids")),
        Some((name, _)) => (Some(name.to_string()), vec![]),
    };

    Config {
        help,
        home_dir,
        assume_yes,
        command_name,
        command_args,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "quizbox", &mut std::io::stdout());
}

/// Config を Command に変換する（コマンド省略時は list）
pub fn config_to_command(config: &Config) -> Command {
    if config.help {
        return Command::Help;
    }
    match &config.command_name {
        Some(name) => Command::parse_with_args(name, &config.command_args),
        None => Command::List { long: false },
    }
}
