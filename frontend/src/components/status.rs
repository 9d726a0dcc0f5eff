/// CSS class for a leave status badge. Anything the client does not
/// recognize renders with the pending style.
pub fn status_class(status: &str) -> &'static str {
    match status {
        "approved" => "status-approved",
        "rejected" => "status-rejected",
        _ => "status-pending",
    }
}
