// 挨拶レスポンス
//
// Lambda関数が呼び出し元に返すHTTP風のレスポンスエンベロープを定義する。
// 内容は常に固定で、呼び出しごとに新しく生成される。

use serde::Serialize;

/// 挨拶メッセージ（レスポンスボディとログ出力の両方で使用）
pub const GREETING: &str = "Hello, World!";

/// 成功時のステータスコード
pub const STATUS_OK: u16 = 200;

/// 挨拶レスポンス
///
/// JSONシリアライズ時は`statusCode`と`body`の2キーのみを出力する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetingResponse {
    /// HTTPステータスコード（常に200）
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// レスポンスボディ（常に"Hello, World!"）
    pub body: String,
}

impl GreetingResponse {
    /// 固定の挨拶レスポンスを作成
    pub fn hello() -> Self {
        Self {
            status_code: STATUS_OK,
            body: GREETING.to_string(),
        }
    }
}
