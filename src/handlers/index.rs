use axum::response::Html;

/// GET / - landing page with the entry URL pattern.
pub async fn index() -> Html<String> {
    let version = env!("CARGO_PKG_VERSION");

    let mut html = String::with_capacity(1024);
    html.push_str("<!DOCTYPE html>\n<html>\n<head><title>loagen</title></head>\n<body>\n");
    html.push_str("<h1>LOA generator</h1>\n");
    html.push_str(
        "<p>Issues Letter of Authorization documents for cross-connect requests. \
         Open <code>/api/v1/devices/{deviceID}</code> with a NetBox device id to pick \
         one of its rear ports.</p>\n",
    );
    html.push_str(&format!("<p><small>loagen {version}</small></p>\n"));
    html.push_str("</body>\n</html>\n");

    Html(html)
}
