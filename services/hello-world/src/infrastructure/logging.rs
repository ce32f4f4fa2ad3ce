/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// tracingクレートを使用し、JSON形式での出力をサポートする。
use thiserror::Error;
use tracing::{Subscriber, warn};
use tracing_subscriber::{
    EnvFilter, Layer, fmt::MakeWriter, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt,
};

/// ログレベル指定に使う環境変数名
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// 環境変数が未設定または解釈できない場合のログレベル
pub const DEFAULT_LOG_FILTER: &str = "info";

/// 挨拶ログのターゲット
///
/// `RUST_LOG`の内容に関わらずinfoレベルで必ず出力する。
pub const GREETING_LOG_TARGET: &str = "hello_world::greeting";

/// 挨拶ログを常に通すためのディレクティブ
const GREETING_DIRECTIVE: &str = "hello_world::greeting=info";

/// ログ初期化のエラー型
#[derive(Debug, Error)]
pub enum LoggingError {
    /// RUST_LOGの内容をフィルターとして解釈できない（デフォルトにフォールバック済み）
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    /// グローバルサブスクライバーが既に設定されている
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// ログフィルターを構築する
///
/// `directives`が`None`や空の場合はデフォルトのログレベル（info）を使う。
/// 解釈できない場合もデフォルトにフォールバックし、原因のエラーを併せて返す。
/// どの場合でも挨拶ログ（`GREETING_LOG_TARGET`）はinfoレベルで通す。
pub fn build_env_filter(directives: Option<&str>) -> (EnvFilter, Option<LoggingError>) {
    let directives = directives
        .map(|s| s.trim().trim_matches(','))
        .filter(|s| !s.is_empty());

    match directives {
        Some(directives) => {
            match EnvFilter::try_new(format!("{directives},{GREETING_DIRECTIVE}")) {
                Ok(filter) => (filter, None),
                Err(err) => (default_filter(), Some(LoggingError::InvalidFilter(err))),
            }
        }
        None => (default_filter(), None),
    }
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(format!("{DEFAULT_LOG_FILTER},{GREETING_DIRECTIVE}"))
}

/// JSON形式のログレイヤー（Lambda/CloudWatch向け）を構築する
///
/// 1イベントにつき1行のJSONを`make_writer`へ書き出す。
pub fn json_layer<S, W>(make_writer: W) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .flatten_event(true)
        .with_current_span(false)
        .with_writer(make_writer)
}

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// JSON形式での構造化ログ出力を設定し、環境変数`RUST_LOG`または
/// デフォルトのログレベル（info）でフィルタリングを行う。
/// `RUST_LOG`が不正な場合は警告を出してデフォルトで続行する。
///
/// 2回目以降の呼び出しは`LoggingError::AlreadyInitialized`を返す。
///
/// # 使用例
/// ```ignore
/// use hello_world::infrastructure::init_logging;
///
/// init_logging()?;
/// tracing::info!("Lambda function started");
/// ```
pub fn init_logging() -> Result<(), LoggingError> {
    let directives = std::env::var(LOG_FILTER_ENV).ok();
    let (env_filter, rejected) = build_env_filter(directives.as_deref());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer(std::io::stdout))
        .try_init()?;

    if let Some(err) = rejected {
        warn!(
            directives = directives.as_deref().unwrap_or_default(),
            error = %err,
            "RUST_LOGを解釈できないためデフォルトのログレベルを使用"
        );
    }

    Ok(())
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
///
/// # 注意
/// この関数はテスト専用であり、本番環境では`init_logging`を使用すること。
#[cfg(test)]
pub fn init_test_logging() {
    use std::sync::Once;
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
