use serde::Deserialize;

// 课程创建请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub department: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

// 课程更新请求，只更新提供的字段
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub department: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

// 校验后的新课程（用于存储层），course_code 已转大写
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub course_name: String,
    pub course_code: String,
    pub department: String,
    pub duration: String,
    pub description: Option<String>,
}
