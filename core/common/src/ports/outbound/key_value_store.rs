//! キー値ストレージ Outbound ポート
//!
//! ブラウザの localStorage 相当の、同期・文字列専用・順序なしのストレージ基盤。
//! 列挙順は実装依存で、呼び出し側は順序を仮定してはならない。
//! 失敗（容量超過・アクセス不可・実体の破損）は `Error::StoreUnavailable` で返す。

use crate::error::Error;

/// 文字列キー・文字列値のストレージ抽象（Outbound ポート）
///
/// 実装は `common::adapter::FileKeyValueStore`（JSON ファイル）や
/// `common::adapter::MemoryKeyValueStore`（テスト用）など。
pub trait KeyValueStore: Send + Sync {
    /// 保存されているキーの数
    fn len(&self) -> Result<usize, Error>;

    /// index 番目のキー（範囲外は None）
    fn key(&self, index: usize) -> Result<Option<String>, Error>;

    /// キーの値（存在しなければ None）
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;

    /// 値を書き込む（既存は上書き）
    fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;

    /// キーを削除する。存在しなくてもエラーにしない。
    fn remove_item(&self, key: &str) -> Result<(), Error>;

    /// 全キーのスナップショット
    ///
    /// 既定実装は `len` / `key` による走査。走査中に消えた index は読み飛ばす。
    fn keys(&self) -> Result<Vec<String>, Error> {
        let n = self.len()?;
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            if let Some(k) = self.key(i)? {
                out.push(k);
            }
        }
        Ok(out)
    }
}
