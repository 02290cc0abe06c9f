use crate::domain::ports::Console;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// 直接寫到 stdout。stdout 已關閉（例如接到 `head`）時略過輸出
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{}", text);
    }
}

/// 把輸出留在記憶體中，供測試檢查
#[derive(Debug, Clone, Default)]
pub struct BufferConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl Console for BufferConsole {
    fn line(&self, text: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(text.to_string());
        }
    }
}
