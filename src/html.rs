//! HTML rendering helpers shared by both screens.

/// Product name shown in titles and headers.
pub const BRAND: &str = "EcommercePro";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f8fafc;color:#0f172a}\
header,main,footer{padding:1rem 2rem}\
header{display:flex;justify-content:space-between;align-items:center;background:#fff;border-bottom:1px solid #e2e8f0}\
footer{background:#0f172a;color:#cbd5e1;margin-top:3rem}\
footer a{color:#cbd5e1}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:1rem}\
.card{background:#fff;border:1px solid #e2e8f0;border-radius:.5rem;padding:1rem}\
.card img{width:100%;aspect-ratio:1;object-fit:cover;border-radius:.5rem}\
.badge{display:inline-block;padding:0 .5rem;border-radius:9999px;font-size:.75rem;background:#e2e8f0}\
.bg-yellow{background:#fef9c3;color:#854d0e}.bg-green{background:#dcfce7;color:#166534}\
.bg-blue{background:#dbeafe;color:#1e40af}.bg-purple{background:#f3e8ff;color:#6b21a8}\
.bg-red{background:#fee2e2;color:#991b1b}.bg-gray{background:#f3f4f6;color:#1f2937}\
.muted{color:#64748b}.danger{color:#dc2626}\
.bar{width:5rem;height:.5rem;background:#e2e8f0;border-radius:9999px;display:inline-block}\
.bar>span{display:block;height:100%;background:#0f172a;border-radius:9999px}\
table{width:100%;border-collapse:collapse}td,th{padding:.5rem;border-bottom:1px solid #e2e8f0;text-align:left}\
form.inline{display:inline}\
nav.tabs a{margin-right:1rem}";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}

/// Formats an amount as dollars with two decimals.
pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Wraps a rendered body into a full document.
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

/// A single-button form posting to `action`.
pub fn post_button(action: &str, label: &str, class: &str) -> String {
    format!(
        "<form class=\"inline\" method=\"post\" action=\"{}\"><button class=\"{}\">{}</button></form>",
        escape(action),
        escape(class),
        escape(label)
    )
}
