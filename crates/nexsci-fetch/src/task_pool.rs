use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

// Blocking callers drive the async client through this runtime.
pub static POOL: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to start the fetch runtime")
});
