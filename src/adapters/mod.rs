// Adapters layer: concrete implementations for external systems (http, terminal, report files).

pub mod console;
pub mod http;
pub mod report;
