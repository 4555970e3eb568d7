/// Current Unix time in milliseconds.
///
/// 全栈统一使用 i64 Unix millis 作为时间戳。
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
