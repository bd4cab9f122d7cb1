//! Route labels for spans and metrics.

use uuid::Uuid;

/// Replace UUID path segments with `{uuid}` so per-record paths share one
/// label.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}
