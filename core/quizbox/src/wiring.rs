//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    FileJsonLog, FileKeyValueStore, NoopLog, StdClock, StdEnvResolver, StdFileSystem,
};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, KeyValueStore, Log};

use crate::adapter::{AssumeYesConfirm, CliConfirm, KvArtifactStore, LoggingArtifactStore};
use crate::ports::outbound::{ArtifactStore, DestructiveConfirm};
use crate::usecase::{CatalogUseCase, RemoveUseCase, SaveQuizUseCase};

/// 配線で組み立てたユースケース群（main の Command ディスパッチで利用）
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub catalog_use_case: Arc<CatalogUseCase>,
    pub save_use_case: SaveQuizUseCase,
    pub remove_use_case: RemoveUseCase,
    /// 構造化ログ（ファイルへ JSONL）。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで App を組み立てる
///
/// assume_yes が true、または QUIZBOX_ASSUME_YES が真なら削除確認を省略する。
pub fn wire_quizbox(assume_yes: bool) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger: Arc<dyn Log> = env_resolver
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(&fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog));
    let kv: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(
        Arc::clone(&fs),
        env_resolver.resolve_store_path()?,
    ));
    let confirm: Arc<dyn DestructiveConfirm> = if assume_yes || env_resolver.assume_yes() {
        Arc::new(AssumeYesConfirm)
    } else {
        Arc::new(CliConfirm)
    };
    Ok(wire_with(fs, kv, Arc::new(StdClock), logger, confirm))
}

/// 任意のアダプタで App を組み立てる（テストではメモリストア・固定時刻を渡す）
pub fn wire_with(
    fs: Arc<dyn FileSystem>,
    kv: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn Log>,
    confirm: Arc<dyn DestructiveConfirm>,
) -> App {
    let store: Arc<dyn ArtifactStore> = Arc::new(LoggingArtifactStore::new(
        Arc::new(KvArtifactStore::new(kv, clock)),
        Arc::clone(&logger),
    ));
    let catalog_use_case = Arc::new(CatalogUseCase::new(Arc::clone(&store), Arc::clone(&logger)));
    let save_use_case = SaveQuizUseCase::new(Arc::clone(&store), Arc::clone(&logger));
    let remove_use_case = RemoveUseCase::new(Arc::clone(&catalog_use_case), confirm);
    App {
        fs,
        catalog_use_case,
        save_use_case,
        remove_use_case,
        logger,
    }
}
