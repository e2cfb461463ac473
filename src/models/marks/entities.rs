use serde::{Deserialize, Serialize};

// 考试类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ExamType {
    Internal,   // 校内考试
    External,   // 统一考试
    Practical,  // 实践考核
    Assignment, // 平时作业
}

impl ExamType {
    pub const INTERNAL: &'static str = "Internal";
    pub const EXTERNAL: &'static str = "External";
    pub const PRACTICAL: &'static str = "Practical";
    pub const ASSIGNMENT: &'static str = "Assignment";
}

impl Default for ExamType {
    // 未提供时落库为 External
    fn default() -> Self {
        ExamType::External
    }
}

impl<'de> Deserialize<'de> for ExamType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ExamType>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExamType::Internal => write!(f, "{}", ExamType::INTERNAL),
            ExamType::External => write!(f, "{}", ExamType::EXTERNAL),
            ExamType::Practical => write!(f, "{}", ExamType::PRACTICAL),
            ExamType::Assignment => write!(f, "{}", ExamType::ASSIGNMENT),
        }
    }
}

impl std::str::FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ExamType::INTERNAL => Ok(ExamType::Internal),
            ExamType::EXTERNAL => Ok(ExamType::External),
            ExamType::PRACTICAL => Ok(ExamType::Practical),
            ExamType::ASSIGNMENT => Ok(ExamType::Assignment),
            _ => Err(format!(
                "'{s}' is not a valid exam type. Supported types: Internal, External, Practical, Assignment"
            )),
        }
    }
}

// 成绩记录实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkRecord {
    pub id: i64,
    pub student_id: i64,
    pub subject: String,
    pub marks: i32,
    pub exam_type: ExamType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_type_roundtrip() {
        for (s, t) in [
            ("Internal", ExamType::Internal),
            ("External", ExamType::External),
            ("Practical", ExamType::Practical),
            ("Assignment", ExamType::Assignment),
        ] {
            assert_eq!(s.parse::<ExamType>().unwrap(), t);
            assert_eq!(t.to_string(), s);
        }
    }

    #[test]
    fn test_exam_type_rejects_unknown() {
        assert!("Midterm".parse::<ExamType>().is_err());
        // 大小写敏感，与原枚举取值保持一致
        assert!("internal".parse::<ExamType>().is_err());
    }

    #[test]
    fn test_exam_type_default_is_external() {
        assert_eq!(ExamType::default(), ExamType::External);
    }
}
