// ============================================================================
// LangSync - Spinner 加载动画组件
// ============================================================================
//
// 文件: src/utils/spinner.rs
// 职责: 等待翻译服务时的终端加载动画
// 边界:
//   - ✅ 加载动画显示和控制
//   - ✅ 多线程安全的状态管理
//   - ✅ 启动和停止机制
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含网络请求
//
// ============================================================================

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::utils::constants::spinner_chars;

/// Spinner 加载动画组件
pub struct Spinner {
    /// 是否正在运行
    running: Arc<AtomicBool>,
    /// 当前消息
    message: String,
    /// 线程句柄
    handle: Option<thread::JoinHandle<()>>,
}

impl Spinner {
    /// 创建新的 Spinner
    pub fn new(message: String) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            message,
            handle: None,
        }
    }

    /// 启动 Spinner
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::Relaxed) {
            return;
        }

        let running = Arc::clone(&self.running);
        let message = self.message.clone();

        let handle = thread::spawn(move || {
            let mut frame = 0;
            let mut width = 0;

            while running.load(Ordering::Relaxed) {
                let spinner_char = spinner_chars::BASE[frame % spinner_chars::BASE.len()];
                let line = format!("{} {}", spinner_char, message);
                width = width.max(line.chars().count());

                // 清除当前行并打印新内容
                print!("\r{}", line);
                let _ = io::stdout().flush();

                frame += 1;
                thread::sleep(Duration::from_millis(100));
            }

            // 清除 spinner 行
            print!("\r{}\r", " ".repeat(width));
            let _ = io::stdout().flush();
        });

        self.handle = Some(handle);
    }

    /// 停止 Spinner
    pub fn stop(&mut self) {
        if !self.running.swap(false, Ordering::Relaxed) {
            return;
        }

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut spinner = Spinner::new("working".to_string());
        spinner.stop();
        spinner.start();
        spinner.start();
        spinner.stop();
        spinner.stop();
        assert!(spinner.handle.is_none());
    }
}
