// ============================================================================
// LangSync - 自动翻译驱动
// ============================================================================
//
// 文件: src/core/driver.rs
// 职责: 单个语言的批量机器翻译与重新组装
// 边界:
//   - ✅ 署名注入
//   - ✅ 全文件文本片段批量收集
//   - ✅ 单次翻译调用
//   - ✅ 按偏移量切片对齐并重新组装
//   - ❌ 不应包含文件读写
//   - ❌ 不应包含 HTTP 细节
//
// ============================================================================

use crate::core::chunker::{reassemble, split, text_count, texts};
use crate::core::credit::insert_or_update_credit;
use crate::core::translator::Translator;
use crate::models::config::CreditConfig;
use crate::models::error::{SyncError, SyncResult};
use crate::models::language::Language;
use crate::models::line::{Chunk, LineRecord};

/// 待翻译批次：扁平文本列表 + 每个条目的分块结构
#[derive(Debug, Default)]
pub struct TranslationBatch {
    /// 所有条目的文本片段，按条目顺序展开
    pub texts: Vec<String>,
    /// (记录下标, 分块) —— 仅条目记录
    pub layouts: Vec<(usize, Vec<Chunk>)>,
}

impl TranslationBatch {
    /// 收集所有条目的文本片段
    pub fn collect(records: &[LineRecord]) -> Self {
        let mut batch = Self::default();
        for (index, record) in records.iter().enumerate() {
            if let Some(entry) = record.as_entry() {
                let chunks = split(&entry.value);
                batch.texts.extend(texts(&chunks));
                batch.layouts.push((index, chunks));
            }
        }
        batch
    }

    /// 用译文替换每个条目的值
    ///
    /// `translated` 必须与 `texts` 一一对应；调用方负责校验长度。
    pub fn apply(&self, records: &mut [LineRecord], translated: &[String]) {
        let mut offset = 0;
        for (index, chunks) in &self.layouts {
            let count = text_count(chunks);
            let value = reassemble(chunks, &translated[offset..offset + count]);
            offset += count;
            if let Some(entry) = records[*index].as_entry_mut() {
                entry.value = value;
            }
        }
    }
}

/// 单个语言的翻译结果
#[derive(Debug, Clone)]
pub struct TranslatedFile {
    pub records: Vec<LineRecord>,
    /// 发送给翻译服务的文本片段数
    pub text_count: usize,
}

/// 将源文件翻译为目标语言
pub async fn translate_records<T: Translator + ?Sized>(
    source: &[LineRecord],
    language: &Language,
    credit: Option<&CreditConfig>,
    translator: &T,
) -> SyncResult<TranslatedFile> {
    let mut records = insert_or_update_credit(source.to_vec(), credit, &language.name);
    let batch = TranslationBatch::collect(&records);

    if batch.texts.is_empty() {
        tracing::debug!(lang = %language.code, "nothing to translate");
        return Ok(TranslatedFile {
            records,
            text_count: 0,
        });
    }

    tracing::debug!(
        lang = %language.code,
        entries = batch.layouts.len(),
        texts = batch.texts.len(),
        "translating batch"
    );
    // 翻译服务只知道服务端代码，错误归属到配置中的语言
    let translated = translator
        .translate(&batch.texts, &language.service_code)
        .await
        .map_err(|err| match err {
            SyncError::Translation { reason, .. } => SyncError::translation(&language.code, reason),
            other => other,
        })?;

    if translated.len() != batch.texts.len() {
        return Err(SyncError::TranslationCountMismatch {
            lang: language.code.clone(),
            expected: batch.texts.len(),
            actual: translated.len(),
        });
    }

    batch.apply(&mut records, &translated);
    Ok(TranslatedFile {
        records,
        text_count: batch.texts.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::{parse_str, serialize};
    use crate::core::translator::mock::{MockMode, MockTranslator};

    fn spanish() -> Language {
        Language::parse("es_ES").unwrap()
    }

    #[tokio::test]
    async fn batch_translation_keeps_format_tokens() {
        let translator = MockTranslator::new(MockMode::Uppercase);
        let source = parse_str("A=Hi\nB=Bye %s\n");

        let out = translate_records(&source, &spanish(), None, &translator)
            .await
            .unwrap();

        assert_eq!(serialize(&out.records), "A=HI\nB=BYE %s\n");
        assert_eq!(out.text_count, 2);
        let calls = translator.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (vec!["Hi".to_string(), "Bye ".to_string()], "es".to_string()));
    }

    #[tokio::test]
    async fn realigns_uneven_entries() {
        let translator = MockTranslator::new(MockMode::Uppercase);
        let source = parse_str(
            "## colours\n\
             a=§1red§r and %s blue\\nline\n\
             b=%s\n\
             \n\
             c=plain##note\n\
             d=\n",
        );

        let out = translate_records(&source, &spanish(), None, &translator)
            .await
            .unwrap();

        assert_eq!(
            serialize(&out.records),
            "## colours\n\
             a=§1RED§r AND %s BLUE\\nLINE\n\
             b=%s\n\
             \n\
             c=PLAIN##note\n\
             d=\n"
        );
        assert_eq!(out.text_count, 5);
    }

    #[tokio::test]
    async fn empty_batch_skips_the_service() {
        let translator = MockTranslator::new(MockMode::Fail);
        let source = parse_str("## only comments\na=%s\nb=\n");

        let out = translate_records(&source, &spanish(), None, &translator)
            .await
            .unwrap();

        assert_eq!(serialize(&out.records), "## only comments\na=%s\nb=\n");
        assert_eq!(translator.call_count(), 0);
    }

    #[tokio::test]
    async fn credit_entry_is_injected_and_translated() {
        let translator = MockTranslator::new(MockMode::Uppercase);
        let credit = CreditConfig {
            key: "credits".to_string(),
            template: "By {lang}".to_string(),
        };
        let source = parse_str("a=Hi\n");

        let out = translate_records(&source, &spanish(), Some(&credit), &translator)
            .await
            .unwrap();

        assert_eq!(
            serialize(&out.records),
            "a=HI\ncredits=BY SPANISH   ##Auto-generated translator credit\n"
        );
        // 源记录不受影响
        assert_eq!(source.len(), 1);
    }

    #[tokio::test]
    async fn service_failure_propagates() {
        let translator = MockTranslator::new(MockMode::Fail);
        let source = parse_str("a=Hi\n");
        let err = translate_records(&source, &spanish(), None, &translator)
            .await
            .unwrap_err();
        match err {
            SyncError::Translation { lang, .. } => assert_eq!(lang, "es_ES"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn short_response_is_rejected_before_reassembly() {
        let translator = MockTranslator::new(MockMode::DropLast);
        let source = parse_str("a=Hi\nb=There\n");
        let err = translate_records(&source, &spanish(), None, &translator)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SyncError::TranslationCountMismatch { expected: 2, actual: 1, .. }
        ));
    }
}
