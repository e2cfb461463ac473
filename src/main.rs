use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};

// 从 lib.rs 导入模块
use rust_cmis_server::config::{AppConfig, CorsConfig};
use rust_cmis_server::routes;
use rust_cmis_server::runtime::lifetime;
use rust_cmis_server::services::{
    AuthService, CourseService, FeeService, MarkService, StudentService,
};
use rust_cmis_server::utils::{json_error_handler, path_error_handler, query_error_handler};

// CORS 策略来自静态配置。配了 "*" 就不能同时携带凭证，这两者互斥
fn build_cors(cors: &CorsConfig) -> Cors {
    let mut builder = Cors::default()
        .allowed_methods(cors.allowed_methods.iter().map(String::as_str))
        .allowed_headers(cors.allowed_headers.iter().map(String::as_str))
        .max_age(cors.max_age);

    if cors.allowed_origins.iter().any(|origin| origin == "*") {
        return builder.allow_any_origin();
    }

    for origin in &cors.allowed_origins {
        builder = builder.allowed_origin(origin);
    }
    if cors.allow_credentials {
        builder = builder.supports_credentials();
    }
    builder
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    let config = AppConfig::load().expect("Failed to initialize configuration");

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );

    let startup = lifetime::startup::prepare_server_startup(&config).await;

    let storage = startup.storage.clone();
    let jwt = startup.jwt.clone();

    // 各资源服务在启动时构造一次，通过 web::Data 注入所有 worker
    let auth_service = web::Data::new(AuthService::new(storage.clone(), jwt.clone()));
    let student_service = web::Data::new(StudentService::new(storage.clone()));
    let course_service = web::Data::new(CourseService::new(storage.clone()));
    let mark_service = web::Data::new(MarkService::new(storage.clone()));
    let fee_service = web::Data::new(FeeService::new(storage.clone()));

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    // 预处理完成 //

    warn!("Using {} CPU cores for the server", config.server.workers);

    // Start the HTTP server
    let worker_config = config.clone();
    let server = HttpServer::new(move || {
        let config = &worker_config;
        App::new()
            .wrap(build_cors(&config.cors))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Connection", "keep-alive"))
                    .add((
                        "Keep-Alive",
                        format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
                    ))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::QueryConfig::default().error_handler(query_error_handler)) // 设置查询参数错误处理器
            .app_data(web::JsonConfig::default().error_handler(json_error_handler)) // 设置JSON错误处理器
            .app_data(web::PathConfig::default().error_handler(path_error_handler)) // 路径参数错误处理器（非数字 ID）
            .app_data(web::Data::new(storage.clone()))
            .app_data(auth_service.clone())
            .app_data(student_service.clone())
            .app_data(course_service.clone())
            .app_data(mark_service.clone())
            .app_data(fee_service.clone())
            .app_data(web::PayloadConfig::new(
                config.server.limits.max_payload_size,
            )) // 设置最大请求体大小
            .configure(|cfg| routes::configure_auth_routes(cfg, &jwt)) // 配置认证相关路由
            .configure(|cfg| routes::configure_students_routes(cfg, &jwt)) // 配置学生相关路由
            .configure(|cfg| routes::configure_courses_routes(cfg, &jwt)) // 配置课程相关路由
            .configure(|cfg| routes::configure_marks_routes(cfg, &jwt)) // 配置成绩相关路由
            .configure(|cfg| routes::configure_fees_routes(cfg, &jwt)) // 配置费用相关路由
            .configure(routes::configure_system_routes) // 健康检查
            .default_service(web::route().to(routes::route_not_found)) // 未匹配路由统一 404
    })
    .keep_alive(std::time::Duration::from_secs(
        config.server.timeouts.keep_alive,
    )) // 启用长连接
    .client_request_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_request,
    )) // 客户端超时
    .client_disconnect_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_disconnect,
    )) // 断连超时
    .workers(config.server.workers);

    let server = {
        #[cfg(unix)]
        {
            if let Some(socket_path) = config.unix_socket_path() {
                warn!("Starting server on Unix socket: {}", socket_path);
                if std::path::Path::new(socket_path).exists() {
                    std::fs::remove_file(socket_path)?;
                }
                Some(server.bind_uds(socket_path)?)
            } else {
                let bind_address = config.server_bind_address();
                warn!("Starting server at http://{}", bind_address);
                Some(server.bind(bind_address)?)
            }
        }

        #[cfg(not(unix))]
        {
            let bind_address = config.server_bind_address();
            warn!("Starting server at http://{}", bind_address);
            Some(server.bind(bind_address)?)
        }
    }
    .expect("Server binding failed")
    .run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
