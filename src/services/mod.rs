/*!
 * 业务服务层
 *
 * 每个资源一个服务结构体，持有存储句柄，具体操作按文件拆分。
 * 服务在启动时构造一次，经 `web::Data` 注入各路由处理函数。
 */

pub mod auth;
pub mod courses;
pub mod fees;
pub mod marks;
pub mod students;

pub use auth::AuthService;
pub use courses::CourseService;
pub use fees::FeeService;
pub use marks::MarkService;
pub use students::StudentService;
