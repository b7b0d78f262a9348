pub fn init() {
    tracing_subscriber::fmt().with_env_filter("info").init();
}

/// Like [`init`], but does not panic if a subscriber is already installed.
/// Intended for tests and embedders that manage their own subscriber.
pub fn try_init() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
}
