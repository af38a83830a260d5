// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod notify;
pub mod storage;

pub use http::HttpCatalog;
pub use notify::{ConsoleNotifier, MemoryNotifier, TracingNotifier};
pub use storage::{LocalStorage, MemoryStorage};
