//! 本文（markdown）から表示用の文字列を導出するルール
//!
//! 長さはすべて文字（char）単位で数える。

const TITLE_MAX_CHARS: usize = 50;
const PREVIEW_MAX_CHARS: usize = 150;
const EXCERPT_MAX_CHARS: usize = 80;
const CHARS_PER_MINUTE: usize = 100;
const HEADING_MARKER: &str = "# ";
const ELLIPSIS: &str = "...";

/// タイトルを導出する
///
/// `# ` で始まる最初の行があれば、マーカーを除いて trim したもの。
/// 無ければ先頭 50 文字（超える場合は `...` を付ける）。
pub fn derive_title(content: &str) -> String {
    let heading = content
        .split('\n')
        .find_map(|line| line.strip_prefix(HEADING_MARKER));
    match heading {
        Some(rest) => rest.trim().to_string(),
        None => truncate_with_ellipsis(content, TITLE_MAX_CHARS),
    }
}

/// 一覧用プレビュー（先頭 150 文字、超える場合は `...`）
pub fn preview(content: &str) -> String {
    truncate_with_ellipsis(content, PREVIEW_MAX_CHARS)
}

/// 抜粋: 空行と見出し行を除いた最初の行を 80 文字まで
///
/// 該当行が無ければ本文の先頭 80 文字。
pub fn excerpt(content: &str) -> String {
    let line = content
        .split('\n')
        .find(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .unwrap_or(content);
    take_chars(line, EXCERPT_MAX_CHARS).to_string()
}

/// 分量の目安（100 文字 = 1 分、切り上げ）
pub fn reading_minutes(content: &str) -> usize {
    content.chars().count().div_ceil(CHARS_PER_MINUTE)
}

fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    let head = take_chars(s, max_chars);
    if head.len() < s.len() {
        format!("{}{}", head, ELLIPSIS)
    } else {
        head.to_string()
    }
}

/// 先頭 n 文字の部分文字列（char 境界で切る）
fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
