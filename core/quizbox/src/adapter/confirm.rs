//! 対話による削除確認の実装（CLI 境界）
//!
//! stdin/stderr を用いた対話は adapter 層の責務。

use crate::ports::outbound::{Confirmation, DestructiveConfirm};
use common::error::Error;
use std::io::{self, BufRead, Write};

/// CLI 対話による確認実装
///
/// `y` / `yes` のみ承認とし、それ以外（空入力・EOF を含む）は拒否。
#[derive(Debug, Clone, Default)]
pub struct CliConfirm;

impl DestructiveConfirm for CliConfirm {
    fn confirm(&self, question: &str) -> Result<Confirmation, Error> {
        eprint!("{} [y/N]: ", question);
        let _ = io::stderr().flush();
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read confirmation: {}", e)))?;
        Ok(parse_answer(&line))
    }
}

/// 非対話用: 常に承認する（`--yes` / QUIZBOX_ASSUME_YES）
#[derive(Debug, Clone, Default)]
pub struct AssumeYesConfirm;

impl DestructiveConfirm for AssumeYesConfirm {
    fn confirm(&self, _question: &str) -> Result<Confirmation, Error> {
        Ok(Confirmation::Approved)
    }
}

fn parse_answer(line: &str) -> Confirmation {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Confirmation::Approved,
        _ => Confirmation::Declined,
    }
}
