// ============================================================================
// LangSync - 翻译服务
// ============================================================================
//
// 文件: src/core/translator.rs
// 职责: 翻译能力接口与 Google 翻译 HTTP 客户端
// 边界:
//   - ✅ 翻译能力 trait 定义
//   - ✅ HTTP 请求、超时与重试
//   - ✅ 响应解析
//   - ❌ 不应包含分块与对齐逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::models::config::TranslatorConfig;
use crate::models::error::{SyncError, SyncResult};

/// 翻译调用返回的 future
pub type TranslateFuture<'a> = Pin<Box<dyn Future<Output = SyncResult<Vec<String>>> + Send + 'a>>;

/// 翻译能力：按顺序翻译一组文本，返回同样数量、同样顺序的译文
pub trait Translator: Send + Sync {
    fn translate<'a>(&'a self, texts: &'a [String], target: &'a str) -> TranslateFuture<'a>;
}

/// Google 翻译客户端（免密钥的 gtx 接口）
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
    retry_count: u32,
}

impl GoogleTranslator {
    pub fn new(config: &TranslatorConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            retry_count: config.retry_count,
        })
    }

    /// 翻译单条文本，保留首尾空白；纯空白文本不发请求
    async fn translate_one(&self, text: &str, target: &str) -> SyncResult<String> {
        let (lead, core, trail) = split_whitespace_edges(text);
        if core.is_empty() {
            return Ok(text.to_string());
        }

        let mut attempt = 0;
        loop {
            match self.request(core, target).await {
                Ok(translated) => return Ok(format!("{}{}{}", lead, translated, trail)),
                Err(reason) if attempt < self.retry_count => {
                    attempt += 1;
                    tracing::warn!(target_lang = target, attempt, %reason, "translation request failed, retrying");
                    tokio::time::sleep(Duration::from_millis(500 * u64::from(attempt))).await;
                }
                Err(reason) => return Err(SyncError::translation(target, reason)),
            }
        }
    }

    async fn request(&self, text: &str, target: &str) -> Result<String, String> {
        tracing::debug!(target_lang = target, chars = text.len(), "sending translation request");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
        parse_response(&body).ok_or_else(|| "malformed translation response".to_string())
    }
}

impl Translator for GoogleTranslator {
    fn translate<'a>(&'a self, texts: &'a [String], target: &'a str) -> TranslateFuture<'a> {
        Box::pin(async move {
            let mut out = Vec::with_capacity(texts.len());
            for text in texts {
                out.push(self.translate_one(text, target).await?);
            }
            Ok(out)
        })
    }
}

/// 拼接响应中各句段的译文：`[[["译文", "原文", ...], ...], ...]`
fn parse_response(body: &serde_json::Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let mut out = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|t| t.as_str()) {
            out.push_str(text);
        }
    }
    if out.is_empty() && !segments.is_empty() {
        return None;
    }
    Some(out)
}

/// 拆出首尾空白：(前导, 主体, 尾随)
fn split_whitespace_edges(text: &str) -> (&str, &str, &str) {
    let without_lead = text.trim_start();
    let lead = &text[..text.len() - without_lead.len()];
    let core = without_lead.trim_end();
    let trail = &without_lead[core.len()..];
    (lead, core, trail)
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy)]
    pub enum MockMode {
        /// 转为大写
        Uppercase,
        /// 所有调用失败
        Fail,
        /// 指定目标语言失败，其余转为大写
        FailFor(&'static str),
        /// 少返回一条
        DropLast,
    }

    /// 测试用翻译器，记录每次调用
    pub struct MockTranslator {
        mode: MockMode,
        pub calls: Mutex<Vec<(Vec<String>, String)>>,
    }

    impl MockTranslator {
        pub fn new(mode: MockMode) -> Self {
            Self {
                mode,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl Translator for MockTranslator {
        fn translate<'a>(&'a self, texts: &'a [String], target: &'a str) -> TranslateFuture<'a> {
            self.calls
                .lock()
                .unwrap()
                .push((texts.to_vec(), target.to_string()));
            let result = match self.mode {
                MockMode::Fail => Err(SyncError::translation(target, "service unavailable")),
                MockMode::FailFor(lang) if lang == target => {
                    Err(SyncError::translation(target, "quota exceeded"))
                }
                MockMode::DropLast => {
                    let mut out: Vec<String> = texts.iter().map(|t| t.to_uppercase()).collect();
                    out.pop();
                    Ok(out)
                }
                _ => Ok(texts.iter().map(|t| t.to_uppercase()).collect()),
            };
            Box::pin(async move { result })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_response_segments() {
        let body = json!([[["Hola. ", "Hello. ", null], ["Adiós", "Bye", null]], null, "en"]);
        assert_eq!(parse_response(&body).as_deref(), Some("Hola. Adiós"));
    }

    #[test]
    fn rejects_unexpected_response_shape() {
        assert_eq!(parse_response(&json!({"error": "quota"})), None);
        assert_eq!(parse_response(&json!([[[null]]])), None);
    }

    #[test]
    fn splits_whitespace_edges() {
        assert_eq!(split_whitespace_edges("  Red "), ("  ", "Red", " "));
        assert_eq!(split_whitespace_edges("Red"), ("", "Red", ""));
        assert_eq!(split_whitespace_edges("   "), ("   ", "", ""));
    }

    #[tokio::test]
    async fn whitespace_only_texts_skip_the_network() {
        let translator = GoogleTranslator::new(&TranslatorConfig {
            endpoint: "http://127.0.0.1:9/unreachable".to_string(),
            timeout: 1,
            retry_count: 0,
        })
        .unwrap();
        let texts = vec![" ".to_string(), "\t".to_string()];
        let out = translator.translate(&texts, "es").await.unwrap();
        assert_eq!(out, texts);
    }
}
