pub mod auth;

pub mod students;

pub mod courses;

pub mod marks;

pub mod fees;

pub mod system;

pub use auth::configure_auth_routes;
pub use courses::configure_courses_routes;
pub use fees::configure_fees_routes;
pub use marks::configure_marks_routes;
pub use students::configure_students_routes;
pub use system::configure_system_routes;
pub use system::route_not_found;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{Method, StatusCode};
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use super::*;
    use crate::config::{AppConfig, JwtConfig};
    use crate::services::{AuthService, CourseService, FeeService, MarkService, StudentService};
    use crate::storage::{Storage, create_storage};
    use crate::utils::jwt::Jwt;
    use crate::utils::{json_error_handler, path_error_handler, query_error_handler};

    async fn memory_storage() -> Arc<dyn Storage> {
        let mut config = AppConfig::default();
        config.database.url = ":memory:".to_string();
        // 内存库必须单连接，多个连接会各自看到独立的空库
        config.database.pool_size = 1;
        create_storage(&config).await.unwrap()
    }

    fn test_jwt() -> Jwt {
        Jwt::new(&JwtConfig {
            secret: "routes-test-secret".to_string(),
            token_expiry_days: 7,
        })
    }

    fn authed(request: test::TestRequest, token: &str) -> test::TestRequest {
        request.insert_header(("Authorization", format!("Bearer {token}")))
    }

    // App 的具体类型写不出来，应用骨架用宏展开，与 main 的装配保持一致
    macro_rules! test_app {
        ($storage:expr, $jwt:expr) => {{
            let storage = $storage;
            let jwt = $jwt;
            test::init_service(
                App::new()
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                    .app_data(web::PathConfig::default().error_handler(path_error_handler))
                    .app_data(web::Data::new(storage.clone()))
                    .app_data(web::Data::new(AuthService::new(storage.clone(), jwt.clone())))
                    .app_data(web::Data::new(StudentService::new(storage.clone())))
                    .app_data(web::Data::new(CourseService::new(storage.clone())))
                    .app_data(web::Data::new(MarkService::new(storage.clone())))
                    .app_data(web::Data::new(FeeService::new(storage.clone())))
                    .configure(|cfg| configure_auth_routes(cfg, &jwt))
                    .configure(|cfg| configure_students_routes(cfg, &jwt))
                    .configure(|cfg| configure_courses_routes(cfg, &jwt))
                    .configure(|cfg| configure_marks_routes(cfg, &jwt))
                    .configure(|cfg| configure_fees_routes(cfg, &jwt))
                    .configure(configure_system_routes)
                    .default_service(web::route().to(route_not_found)),
            )
            .await
        }};
    }

    // 通过注册接口拿到一个可用令牌
    macro_rules! register_token {
        ($app:expr, $email:expr) => {{
            let resp = test::call_service(
                $app,
                test::TestRequest::post()
                    .uri("/api/v1/auth/register")
                    .set_json(json!({ "email": $email, "password": "hunter2" }))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            let body: Value = test::read_body_json(resp).await;
            body["data"]["token"].as_str().unwrap().to_string()
        }};
    }

    #[tokio::test]
    async fn test_health_check_is_open_and_unenveloped() {
        let app = test_app!(memory_storage().await, test_jwt());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "CMIS API is running");
        assert_eq!(body["version"], "v1");
        assert_eq!(body["status"], "OK");
        assert!(body.get("success").is_none());
    }

    #[tokio::test]
    async fn test_unmatched_route_returns_404() {
        let app = test_app!(memory_storage().await, test_jwt());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/nothing").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Route not found: /api/v1/nothing");
    }

    #[tokio::test]
    async fn test_register_login_me_roundtrip() {
        let app = test_app!(memory_storage().await, test_jwt());

        // 注册时邮箱统一转小写
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/register")
                .set_json(json!({ "email": "  Tester@CMIS.edu ", "password": "hunter2" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Registration successful! You can now login.");
        assert_eq!(body["data"]["user"]["email"], "tester@cmis.edu");
        assert!(body["data"]["token"].is_string());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(json!({ "email": "tester@cmis.edu", "password": "hunter2" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Login successful!");
        let token = body["data"]["token"].as_str().unwrap().to_string();

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::get().uri("/api/v1/auth/me"), &token).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["email"], "tester@cmis.edu");
    }

    #[tokio::test]
    async fn test_register_rejects_missing_and_duplicate() {
        let app = test_app!(memory_storage().await, test_jwt());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/register")
                .set_json(json!({ "email": "lonely@cmis.edu" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Please provide email and password.");

        let _ = register_token!(&app, "taken@cmis.edu");
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/register")
                .set_json(json!({ "email": "taken@cmis.edu", "password": "other" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "User is already registered. Please login to the application."
        );
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let app = test_app!(memory_storage().await, test_jwt());
        let _ = register_token!(&app, "known@cmis.edu");

        // 未注册邮箱与错误密码必须返回完全相同的响应体
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(json!({ "email": "ghost@cmis.edu", "password": "hunter2" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let unknown_email = test::read_body(resp).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(json!({ "email": "known@cmis.edu", "password": "wrong" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let wrong_password = test::read_body(resp).await;

        assert_eq!(unknown_email, wrong_password);
        let body: Value = serde_json::from_slice(&unknown_email).unwrap();
        assert_eq!(body["message"], "Invalid email or password.");
    }

    #[tokio::test]
    async fn test_token_gate_distinguishes_failure_modes() {
        let storage = memory_storage().await;
        let jwt = test_jwt();
        let app = test_app!(storage.clone(), jwt.clone());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/students").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "No token provided. Please login to access this resource."
        );

        let token = register_token!(&app, "gate@cmis.edu");
        let user_id = storage
            .get_user_by_email("gate@cmis.edu")
            .await
            .unwrap()
            .unwrap()
            .id;

        let expired = jwt
            .issue_with_expiry(user_id, chrono::Duration::days(-1))
            .unwrap();
        let resp = test::call_service(
            &app,
            authed(test::TestRequest::get().uri("/api/v1/students"), &expired).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Your session has expired. Please login again.");

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::get().uri("/api/v1/students"), "not.a.jwt").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid token. Please login again.");

        // 令牌指向的用户已不存在
        let vanished = jwt.issue(user_id + 1000).unwrap();
        let resp = test::call_service(
            &app,
            authed(test::TestRequest::get().uri("/api/v1/students"), &vanished).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User not found. Please login again.");

        // CORS 预检不要求令牌
        let resp = test::call_service(
            &app,
            test::TestRequest::default()
                .method(Method::OPTIONS)
                .uri("/api/v1/students")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        // 正常令牌放行
        let resp = test::call_service(
            &app,
            authed(test::TestRequest::get().uri("/api/v1/students"), &token).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_path_id_is_bad_request() {
        let app = test_app!(memory_storage().await, test_jwt());
        let token = register_token!(&app, "paths@cmis.edu");

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::get().uri("/api/v1/students/abc"), &token).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid ID format.");
    }

    #[tokio::test]
    async fn test_student_crud_flow() {
        let app = test_app!(memory_storage().await, test_jwt());
        let token = register_token!(&app, "registrar@cmis.edu");

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/students"), &token)
                .set_json(json!({}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Please fill in all required fields: name, email, department, course."
        );

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/students"), &token)
                .set_json(json!({
                    "name": "  Asha Rao  ",
                    "email": "Asha.Rao@CMIS.edu",
                    "department": "Physics",
                    "course": "B.Sc",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Student added successfully.");
        assert_eq!(body["data"]["name"], "Asha Rao");
        assert_eq!(body["data"]["email"], "asha.rao@cmis.edu");
        let id = body["data"]["id"].as_i64().unwrap();

        // 邮箱重复，大小写不同也算重复
        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/students"), &token)
                .set_json(json!({
                    "name": "Imposter",
                    "email": "ASHA.RAO@cmis.edu",
                    "department": "Physics",
                    "course": "B.Sc",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "A student with this email already exists.");

        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::put().uri(&format!("/api/v1/students/{id}")),
                &token,
            )
            .set_json(json!({ "department": "Applied Physics" }))
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Student updated successfully.");
        assert_eq!(body["data"]["department"], "Applied Physics");
        assert_eq!(body["data"]["name"], "Asha Rao");

        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::delete().uri(&format!("/api/v1/students/{id}")),
                &token,
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Student deleted successfully.");
        assert!(body.get("data").is_none());

        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::get().uri(&format!("/api/v1/students/{id}")),
                &token,
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Student not found.");
    }

    #[tokio::test]
    async fn test_student_search_route_and_missing_query() {
        let app = test_app!(memory_storage().await, test_jwt());
        let token = register_token!(&app, "finder@cmis.edu");

        // /search 在 /{id} 之前注册，不能被当成 ID 解析
        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::get().uri("/api/v1/students/search?q=zzz"),
                &token,
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], 0);

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::get().uri("/api/v1/students/search"), &token).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Please provide a search query.");
    }

    #[tokio::test]
    async fn test_course_code_is_uppercased_and_unique() {
        let app = test_app!(memory_storage().await, test_jwt());
        let token = register_token!(&app, "dean@cmis.edu");

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/courses"), &token)
                .set_json(json!({
                    "courseName": "Data Structures",
                    "courseCode": "cs201",
                    "department": "CS",
                    "duration": "1 semester",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Course added successfully.");
        assert_eq!(body["data"]["courseCode"], "CS201");
        let id = body["data"]["id"].as_i64().unwrap();

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/courses"), &token)
                .set_json(json!({
                    "courseName": "Data Structures Again",
                    "courseCode": "CS201",
                    "department": "CS",
                    "duration": "1 semester",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "A course with this course code already exists."
        );

        // 更新时代码同样统一大写
        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::put().uri(&format!("/api/v1/courses/{id}")),
                &token,
            )
            .set_json(json!({ "courseCode": "cs201a" }))
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["courseCode"], "CS201A");
    }

    #[tokio::test]
    async fn test_marks_validation_and_student_gate() {
        let app = test_app!(memory_storage().await, test_jwt());
        let token = register_token!(&app, "examiner@cmis.edu");

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/marks"), &token)
                .set_json(json!({}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Please fill in all required fields: studentId, subject, marks."
        );

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/students"), &token)
                .set_json(json!({
                    "name": "Ben Okafor",
                    "email": "ben.okafor@cmis.edu",
                    "department": "Math",
                    "course": "B.Sc",
                }))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        let student_id = body["data"]["id"].as_i64().unwrap();

        for (marks, message) in [
            (150, "Marks cannot exceed 100"),
            (-1, "Marks cannot be less than 0"),
        ] {
            let resp = test::call_service(
                &app,
                authed(test::TestRequest::post().uri("/api/v1/marks"), &token)
                    .set_json(json!({
                        "studentId": student_id,
                        "subject": "Algebra",
                        "marks": marks,
                    }))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], message);
        }

        // 未知 examType 在反序列化阶段就被拒绝
        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/marks"), &token)
                .set_json(json!({
                    "studentId": student_id,
                    "subject": "Algebra",
                    "marks": 50,
                    "examType": "Midterm",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/marks"), &token)
                .set_json(json!({
                    "studentId": student_id + 999,
                    "subject": "Algebra",
                    "marks": 50,
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Student not found.");

        // 0 分是合法成绩，examType 缺省为 External
        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/marks"), &token)
                .set_json(json!({
                    "studentId": student_id,
                    "subject": "Algebra",
                    "marks": 0,
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Marks added successfully.");
        assert_eq!(body["data"]["examType"], "External");
        let mark_id = body["data"]["id"].as_i64().unwrap();

        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::get()
                    .uri(&format!("/api/v1/marks/student/{student_id}")),
                &token,
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], 1);

        // 满分 100 在上界内
        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::put().uri(&format!("/api/v1/marks/{mark_id}")),
                &token,
            )
            .set_json(json!({ "marks": 100, "examType": "Practical" }))
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Marks updated successfully.");
        assert_eq!(body["data"]["marks"], 100);
        assert_eq!(body["data"]["examType"], "Practical");

        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::delete().uri(&format!("/api/v1/marks/{mark_id}")),
                &token,
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Marks deleted successfully.");

        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::delete().uri(&format!("/api/v1/marks/{mark_id}")),
                &token,
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Marks record not found.");
    }

    #[tokio::test]
    async fn test_marks_update_merges_student_and_clears_semester() {
        let app = test_app!(memory_storage().await, test_jwt());
        let token = register_token!(&app, "registrar2@cmis.edu");

        let mut student_ids = Vec::new();
        for email in ["mark.one@cmis.edu", "mark.two@cmis.edu"] {
            let resp = test::call_service(
                &app,
                authed(test::TestRequest::post().uri("/api/v1/students"), &token)
                    .set_json(json!({
                        "name": "Mark Holder",
                        "email": email,
                        "department": "Physics",
                        "course": "B.Sc",
                    }))
                    .to_request(),
            )
            .await;
            let body: Value = test::read_body_json(resp).await;
            student_ids.push(body["data"]["id"].as_i64().unwrap());
        }

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/marks"), &token)
                .set_json(json!({
                    "studentId": student_ids[0],
                    "subject": "Optics",
                    "marks": 75,
                    "semester": "Spring 2026",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let mark_id = body["data"]["id"].as_i64().unwrap();

        // studentId 也参与合并：换绑到另一个学生
        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::put().uri(&format!("/api/v1/marks/{mark_id}")),
                &token,
            )
            .set_json(json!({ "studentId": student_ids[1], "marks": 80 }))
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["studentId"], student_ids[1]);
        assert_eq!(body["data"]["marks"], 80);

        // 按学生查询随之迁移
        for (student_id, expected) in [(student_ids[1], 1), (student_ids[0], 0)] {
            let resp = test::call_service(
                &app,
                authed(
                    test::TestRequest::get()
                        .uri(&format!("/api/v1/marks/student/{student_id}")),
                    &token,
                )
                .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["count"], expected);
        }

        // 提交空串就是清空 semester，跟其他资源的可选字段一致
        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::put().uri(&format!("/api/v1/marks/{mark_id}")),
                &token,
            )
            .set_json(json!({ "semester": "" }))
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["semester"], "");
        // 其余字段保持原值
        assert_eq!(body["data"]["marks"], 80);
        assert_eq!(body["data"]["subject"], "Optics");
    }

    #[tokio::test]
    async fn test_fees_create_and_upsert_flow() {
        let app = test_app!(memory_storage().await, test_jwt());
        let token = register_token!(&app, "bursar@cmis.edu");

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/fees"), &token)
                .set_json(json!({}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Please fill in all required fields: studentId.");

        let mut student_ids = Vec::new();
        for email in ["fee.one@cmis.edu", "fee.two@cmis.edu"] {
            let resp = test::call_service(
                &app,
                authed(test::TestRequest::post().uri("/api/v1/students"), &token)
                    .set_json(json!({
                        "name": "Fee Payer",
                        "email": email,
                        "department": "Commerce",
                        "course": "B.Com",
                    }))
                    .to_request(),
            )
            .await;
            let body: Value = test::read_body_json(resp).await;
            student_ids.push(body["data"]["id"].as_i64().unwrap());
        }

        // POST 创建不盖章 lastPaymentDate
        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/fees"), &token)
                .set_json(json!({
                    "studentId": student_ids[0],
                    "feesPending": 5000.0,
                    "totalFees": 5000.0,
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Fee record created successfully.");
        assert_eq!(body["data"]["status"], "Pending");
        assert!(body["data"].get("lastPaymentDate").is_none());

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/fees"), &token)
                .set_json(json!({ "studentId": student_ids[0] }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Fee record already exists for this student. Use update instead."
        );

        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/fees"), &token)
                .set_json(json!({ "studentId": student_ids[1], "feesPaid": -5.0 }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Fees paid cannot be negative");

        // PUT 对还没有记录的学生是 upsert，且盖章 lastPaymentDate
        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::put().uri(&format!("/api/v1/fees/{}", student_ids[1])),
                &token,
            )
            .set_json(json!({ "feesPaid": 3000.0 }))
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Fee record updated successfully.");
        assert_eq!(body["data"]["feesPaid"], 3000.0);
        assert_eq!(body["data"]["status"], "Paid");
        assert!(body["data"]["lastPaymentDate"].is_string());

        // 缴清后状态翻转
        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::put().uri(&format!("/api/v1/fees/{}", student_ids[0])),
                &token,
            )
            .set_json(json!({ "feesPaid": 5000.0, "feesPending": 0.0 }))
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "Paid");
        assert!(body["data"]["lastPaymentDate"].is_string());

        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::get().uri(&format!("/api/v1/fees/{}", student_ids[0])),
                &token,
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["feesPaid"], 5000.0);

        // 学生存在但没有费用记录
        let resp = test::call_service(
            &app,
            authed(test::TestRequest::post().uri("/api/v1/students"), &token)
                .set_json(json!({
                    "name": "No Fees Yet",
                    "email": "fee.three@cmis.edu",
                    "department": "Commerce",
                    "course": "B.Com",
                }))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        let third = body["data"]["id"].as_i64().unwrap();

        let resp = test::call_service(
            &app,
            authed(
                test::TestRequest::get().uri(&format!("/api/v1/fees/{third}")),
                &token,
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "No fee record found for this student.");

        // 学生不存在
        let resp = test::call_service(
            &app,
            authed(test::TestRequest::get().uri("/api/v1/fees/99999"), &token).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Student not found.");
    }

    #[tokio::test]
    async fn test_list_endpoints_return_counted_envelopes() {
        let app = test_app!(memory_storage().await, test_jwt());
        let token = register_token!(&app, "lists@cmis.edu");

        for uri in [
            "/api/v1/students",
            "/api/v1/courses",
            "/api/v1/marks",
            "/api/v1/fees",
        ] {
            let resp = test::call_service(
                &app,
                authed(test::TestRequest::get().uri(uri), &token).to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], true);
            assert_eq!(body["count"], 0);
            assert_eq!(body["data"], json!([]));
        }
    }
}
