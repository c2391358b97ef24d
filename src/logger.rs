// src/logger.rs
//! `log` クレートのマクロ (info! とか) の出力先だよ。
//! ブラウザ (wasm32) なら console.log、それ以外は標準エラー出力へ。

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());

        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&line));
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", line);
    }

    fn flush(&self) {}
}

/// ロガーを登録する。2回目以降はエラーが返るだけで、最初の設定がそのまま使われるよ。
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_installs_only_once() {
        let _ = init(LevelFilter::Debug);
        assert!(init(LevelFilter::Info).is_err(), "2回目の登録はエラーになるはず");
        log::debug!("logger test message");
    }
}
