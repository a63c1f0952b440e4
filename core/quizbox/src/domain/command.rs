//! quizbox コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、match でディスパッチする。

use std::path::PathBuf;

/// quizbox のサブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示
    Help,

    /// カタログ一覧（list [--long]）
    List { long: bool },

    /// 1 件表示（show <id>）
    Show { id: String },

    /// 生成結果の保存（save <id> [file]）。file 省略時は stdin。
    Save { id: String, file: Option<PathBuf> },

    /// 削除（rm <id> [id...]）
    Remove { ids: Vec<String> },

    /// 一覧に表示される全件の削除
    Clear,

    /// 未知のコマンド（エラー用）
    Unknown(String),
}

impl Command {
    /// コマンド名と引数から Command に解析する
    pub fn parse_with_args(name: &str, args: &[String]) -> Self {
        match name {
            "help" => Command::Help,
            "list" | "ls" => Command::List {
                long: args.iter().any(|a| a == "--long" || a == "-l"),
            },
            "show" => match args.first() {
                Some(id) => Command::Show { id: id.clone() },
                None => Command::Unknown("show (missing <id>)".to_string()),
            },
            "save" => match args.first() {
                Some(id) => Command::Save {
                    id: id.clone(),
                    file: args.get(1).map(PathBuf::from),
                },
                None => Command::Unknown("save (missing <id>)".to_string()),
            },
            "rm" | "remove" => Command::Remove {
                ids: args.to_vec(),
            },
            "clear" => Command::Clear,
            other => Command::Unknown(other.to_string()),
        }
    }
}
