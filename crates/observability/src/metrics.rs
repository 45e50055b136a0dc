//! Stream 分发指标
//!
//! 通过 `metrics` facade 记录；未安装 recorder 时所有调用都是空操作。

use metrics::counter;

/// 记录一次已路由的消息分发
pub fn record_message_dispatched(stream: &str, success: bool) {
    let status = if success { "success" } else { "failure" };
    counter!(
        "streamlog_messages_dispatched_total",
        "stream" => stream.to_string(),
        "status" => status
    )
    .increment(1);
}

/// 记录一次发往未绑定 stream 的消息
///
/// 不带 stream 标签：未绑定的名称由调用方任意给出，标签基数不可控。
pub fn record_message_unrouted() {
    counter!("streamlog_messages_unrouted_total").increment(1);
}

/// 记录一次 stream 绑定
pub fn record_stream_bound(stream: &str, replaced: bool) {
    counter!(
        "streamlog_stream_bindings_total",
        "stream" => stream.to_string(),
        "replaced" => if replaced { "true" } else { "false" }
    )
    .increment(1);
}
