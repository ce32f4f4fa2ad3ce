/// Hello World Lambdaエントリポイント
///
/// 呼び出しごとに"Hello, World!"をログに出力し、
/// `{statusCode: 200, body: "Hello, World!"}`を返却する。
use hello_world::handler;
use hello_world::infrastructure::init_logging;
use lambda_runtime::{Error, service_fn};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging()?;

    debug!("Hello World Lambda関数を初期化");

    // Lambda関数を初期化して実行
    lambda_runtime::run(service_fn(handler)).await
}
