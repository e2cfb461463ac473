use once_cell::sync::Lazy;
use regex::Regex;

// 与原数据模型一致的宽松邮箱校验：local@domain.tld
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("Invalid email regex"));

/// 缺失/空白字段的统一提示文案
pub fn missing_fields_message(missing: &[&str]) -> String {
    format!(
        "Please fill in all required fields: {}.",
        missing.join(", ")
    )
}

/// 必填字段检查
///
/// trim 后为空视为缺失，缺失字段汇总成一条提示：
/// "Please fill in all required fields: a, b."
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<(), String> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(|s| s.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    Err(missing_fields_message(&missing))
}

/// 更新请求的检查：没提供的字段放行，重新提供的必填字段不允许是空白
pub fn reject_blank_fields(fields: &[(&str, Option<&str>)]) -> Result<(), String> {
    let blank: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_some_and(|s| s.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if blank.is_empty() {
        return Ok(());
    }
    Err(missing_fields_message(&blank))
}

/// 取出已通过 require_fields 的字段并 trim（缺失时返回空串，不会发生）
pub fn trimmed(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

/// 成绩范围校验：0 <= marks <= 100
pub fn validate_marks(marks: i32) -> Result<(), &'static str> {
    if marks < 0 {
        return Err("Marks cannot be less than 0");
    }
    if marks > 100 {
        return Err("Marks cannot exceed 100");
    }
    Ok(())
}

/// 金额非负校验，message 形如 "Fees paid cannot be negative"
pub fn validate_non_negative(value: f64, message: &'static str) -> Result<(), &'static str> {
    if value < 0.0 {
        return Err(message);
    }
    Ok(())
}
