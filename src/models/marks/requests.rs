use serde::Deserialize;

use super::entities::ExamType;

// 成绩创建请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMarksRequest {
    pub student_id: Option<i64>,
    pub subject: Option<String>,
    pub marks: Option<i32>,
    pub exam_type: Option<ExamType>,
    pub semester: Option<String>,
}

// 成绩更新请求，只更新提供的字段。studentId 可改，且不复查学生存在性
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMarksRequest {
    pub student_id: Option<i64>,
    pub subject: Option<String>,
    pub marks: Option<i32>,
    pub exam_type: Option<ExamType>,
    pub semester: Option<String>,
}

// 校验后的新成绩（用于存储层）
#[derive(Debug, Clone)]
pub struct NewMarkRecord {
    pub student_id: i64,
    pub subject: String,
    pub marks: i32,
    pub exam_type: ExamType,
    pub semester: Option<String>,
}
