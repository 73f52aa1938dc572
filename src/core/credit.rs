// ============================================================================
// LangSync - 译者署名
// ============================================================================
//
// 文件: src/core/credit.rs
// 职责: 插入或更新译者署名条目
// 边界:
//   - ✅ 署名条目查找与更新
//   - ✅ 缺失时在末尾追加
//   - ❌ 不应包含语言名称解析
//   - ❌ 不应包含翻译逻辑
//
// ============================================================================

use crate::models::config::CreditConfig;
use crate::models::line::{Entry, LineRecord};

/// 自动生成的署名条目注释
pub const CREDIT_COMMENT: &str = "Auto-generated translator credit";

/// 追加条目时值后面补的空格，使行尾注释与值分开
const CREDIT_PADDING: &str = "   ";

/// 插入或更新译者署名，未配置署名时原样返回
pub fn insert_or_update_credit(
    mut records: Vec<LineRecord>,
    credit: Option<&CreditConfig>,
    language_name: &str,
) -> Vec<LineRecord> {
    let Some(credit) = credit else {
        return records;
    };
    let value = credit.format(language_name);

    if let Some(entry) = records
        .iter_mut()
        .filter_map(LineRecord::as_entry_mut)
        .find(|entry| entry.key == credit.key)
    {
        entry.value = value;
        return records;
    }

    records.push(LineRecord::Entry(Entry::new(
        credit.key.clone(),
        format!("{}{}", value, CREDIT_PADDING),
        CREDIT_COMMENT,
    )));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::{parse_str, serialize};

    fn credit() -> CreditConfig {
        CreditConfig {
            key: "credits".to_string(),
            template: "Translated to {lang} by a machine".to_string(),
        }
    }

    #[test]
    fn appends_credit_when_missing() {
        let records = insert_or_update_credit(parse_str("a=A\n"), Some(&credit()), "Spanish");
        assert_eq!(
            serialize(&records),
            "a=A\ncredits=Translated to Spanish by a machine   ##Auto-generated translator credit\n"
        );
    }

    #[test]
    fn updates_first_existing_credit_in_place() {
        let records = insert_or_update_credit(
            parse_str("credits=old##keep me\na=A\ncredits=dup\n"),
            Some(&credit()),
            "French",
        );
        assert_eq!(
            serialize(&records),
            "credits=Translated to French by a machine##keep me\na=A\ncredits=dup\n"
        );
    }

    #[test]
    fn no_credit_config_is_a_noop() {
        let records = parse_str("a=A\n");
        assert_eq!(insert_or_update_credit(records.clone(), None, "German"), records);
    }
}
