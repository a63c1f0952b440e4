mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::process;

use chrono::{DateTime, Local};
use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};
use domain::title::{excerpt, preview, reading_minutes};
use domain::{CatalogRecord, Command, DeleteReport, QuizId};
use ports::inbound::UseCaseRunner;
use wiring::{wire_quizbox, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, command: Command) -> Result<i32, Error> {
        match command {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::List { long } => {
                let records = self.app.catalog_use_case.build_catalog();
                print_catalog(&records, long);
                Ok(0)
            }
            Command::Show { id } => {
                let id = QuizId::new(id);
                let record = self.app.catalog_use_case.require(&id)?;
                print_record(&record);
                Ok(0)
            }
            Command::Save { id, file } => {
                let content = read_content(&self.app, file.as_deref())?;
                let id = QuizId::new(id);
                let meta = self.app.save_use_case.save(&id, &content)?;
                println!("Saved {} (created {})", id, format_date(&meta.created_at));
                Ok(0)
            }
            Command::Remove { ids } => {
                let ids: Vec<QuizId> = ids.into_iter().map(QuizId::new).collect();
                if let [id] = ids.as_slice() {
                    self.app.remove_use_case.remove_one(id)?;
                    println!("Deleted {}", id);
                    return Ok(0);
                }
                let report = self.app.remove_use_case.remove_many(&ids)?;
                Ok(print_report(&report))
            }
            Command::Clear => {
                let report = self.app.remove_use_case.clear()?;
                Ok(print_report(&report))
            }
            Command::Unknown(name) => Err(Error::invalid_argument(format!(
                "Command '{}' is not implemented.",
                name
            ))),
        }
    }
}

fn read_content(app: &App, file: Option<&Path>) -> Result<String, Error> {
    match file {
        Some(path) => app.fs.read_to_string(path),
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
            Ok(s)
        }
    }
}

/// 表示用の日時（ローカル時刻）。解釈できなければそのまま返す。
fn format_date(created_at: &str) -> String {
    DateTime::parse_from_rfc3339(created_at)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

fn print_catalog(records: &[CatalogRecord], long: bool) {
    if records.is_empty() {
        println!("(no quizzes yet) create one with: quizbox save <id> [file]");
        return;
    }
    println!("{:<24} {:<16} {}", "ID", "CREATED", "TITLE");
    for r in records {
        println!("{:<24} {:<16} {}", r.id, format_date(&r.created_at), r.title);
        if long {
            for line in preview(&r.content).lines() {
                println!("    {}", line);
            }
            println!();
        }
    }
}

fn print_record(r: &CatalogRecord) {
    println!("id:       {}", r.id);
    println!("title:    {}", r.title);
    println!("created:  {}", format_date(&r.created_at));
    println!("excerpt:  {}...", excerpt(&r.content));
    println!("length:   ~{} min", reading_minutes(&r.content));
    println!();
    println!("{}", r.content);
}

/// 削除結果を表示し、終了コードを返す（失敗があれば 1）
fn print_report(report: &DeleteReport) -> i32 {
    println!("Deleted {} quiz(zes)", report.deleted.len());
    for (id, e) in &report.failed {
        eprintln!("quizbox: failed to delete {}: {}", id, e);
    }
    if report.is_complete() {
        0
    } else {
        1
    }
}

fn print_help() {
    println!("Usage: quizbox [-h] [-d|--home-dir directory] [-y|--yes] [<command> [args...]]");
    println!("  -h, --help            Display this help message.");
    println!("  -d, --home-dir        Specify a home directory (sets QUIZBOX_HOME for this process).");
    println!("  -y, --yes             Do not ask for confirmation before deleting.");
    println!("  --generate <shell>    Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  QUIZBOX_HOME        Home directory (data/ and state/). Default: XDG data/state dirs.");
    println!("  QUIZBOX_ASSUME_YES  Set to 1 to skip delete confirmations.");
    println!();
    println!("Commands:");
    println!("  list [--long]          List quizzes, newest first (default).");
    println!("  show <id>              Show one quiz.");
    println!("  save <id> [file]       Store generated quiz content from file or stdin.");
    println!("  rm <id> [id...]        Delete quiz(zes) after confirmation.");
    println!("  clear                  Delete every quiz after confirmation.");
}

fn print_usage() {
    eprintln!("Usage: quizbox [-h] [-d|--home-dir directory] [-y|--yes] [<command> [args...]]");
}

fn log_lifecycle(app: &App, command: &Command, result: &Result<i32, Error>) {
    let mut fields = BTreeMap::new();
    fields.insert("command".to_string(), serde_json::json!(format!("{:?}", command)));
    let level = match result {
        Ok(code) => {
            fields.insert("exit_code".to_string(), serde_json::json!(code));
            LogLevel::Info
        }
        Err(e) => {
            fields.insert("exit_code".to_string(), serde_json::json!(e.exit_code()));
            fields.insert("error".to_string(), serde_json::json!(e.to_string()));
            LogLevel::Error
        }
    };
    let _ = app.logger.log(&LogRecord {
        ts: now_iso8601(),
        level,
        message: "command finished".to_string(),
        layer: Some("cli".to_string()),
        kind: Some("lifecycle".to_string()),
        fields: Some(fields),
    });
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    // -d/--home-dir 指定時は QUIZBOX_HOME を設定し、resolve_dirs() がその配下を使うようにする
    if let Some(ref h) = config.home_dir {
        std::env::set_var("QUIZBOX_HOME", h);
    }
    let command = config_to_command(&config);
    if command == Command::Help {
        print_help();
        return Ok(0);
    }
    let runner = Runner {
        app: wire_quizbox(config.assume_yes)?,
    };
    let result = runner.run(command.clone());
    log_lifecycle(&runner.app, &command, &result);
    result
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("quizbox: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}
