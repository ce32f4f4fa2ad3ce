use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

// Domain layer modules
pub mod domain;

// Application layer modules
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;

use application::GreetingHandler;
use domain::GreetingResponse;

/// Lambdaランタイムから呼び出されるハンドラー
///
/// ペイロードとコンテキストを分解して`GreetingHandler`に渡す。
/// 自身のロジックで失敗することはなく、常に`Ok`を返す。
pub async fn handler(event: LambdaEvent<Value>) -> Result<GreetingResponse, Error> {
    let (payload, context) = event.into_parts();

    Ok(GreetingHandler::new().handle(&payload, &context))
}
