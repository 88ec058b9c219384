// 日志初始化

/// 为宿主程序安装默认的 tracing 订阅器
///
/// 已安装过订阅器时静默跳过
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().try_init();
}
