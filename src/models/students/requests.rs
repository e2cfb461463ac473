use serde::Deserialize;

// 学生创建请求（来自HTTP请求）
//
// 必填字段用 Option 接住，缺失时由校验统一汇总成
// "Please fill in all required fields: ..."，而不是反序列化错误。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub course: Option<String>,
    pub phone: Option<String>,
    pub enrollment_year: Option<i32>,
}

// 学生更新请求，只更新提供的字段
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub course: Option<String>,
    pub phone: Option<String>,
    pub enrollment_year: Option<i32>,
}

// 学生搜索参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct StudentSearchParams {
    pub q: Option<String>,
}

// 校验后的新学生（用于存储层）
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub department: String,
    pub course: String,
    pub phone: Option<String>,
    pub enrollment_year: i32,
}
