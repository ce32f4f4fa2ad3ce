/// 挨拶ハンドラー
///
/// Lambdaが呼び出された際に固定の挨拶をログへ出力し、
/// 固定の挨拶レスポンスを返す。
use lambda_runtime::Context;
use serde_json::Value;
use tracing::info;

use crate::domain::{GREETING, GreetingResponse};
use crate::infrastructure::GREETING_LOG_TARGET;

/// 挨拶リクエストを処理するハンドラー
///
/// 状態を持たないため、複数の呼び出しで共有・並行利用してよい。
#[derive(Debug, Clone, Copy, Default)]
pub struct GreetingHandler;

impl GreetingHandler {
    /// 新しいGreetingHandlerを作成
    pub fn new() -> Self {
        Self
    }

    /// 呼び出しを処理
    ///
    /// イベントとコンテキストは参照しない。どのような入力
    /// （空オブジェクト、null、巨大なペイロード）でも結果は同じ。
    ///
    /// # 引数
    /// * `_event` - 呼び出しイベント（未使用）
    /// * `_context` - 実行コンテキスト（未使用）
    ///
    /// # 戻り値
    /// 常に`{statusCode: 200, body: "Hello, World!"}`
    pub fn handle(&self, _event: &Value, _context: &Context) -> GreetingResponse {
        info!(target: GREETING_LOG_TARGET, "{}", GREETING);

        GreetingResponse::hello()
    }
}
