//! HTML pages

use actix_web::HttpResponse;
use birth_year::ValidationResult;

/// Wraps page body into the common layout
fn layout(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="vi">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#
        ))
}

/// Escapes text to be embedded in HTML content or quoted attribute
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn error_paragraph(error: &str) -> String {
    format!("<p class=\"error\">{}</p>\n", escape(error))
}

/// Login form, optionally with the failure message
pub fn login(error: Option<&str>) -> HttpResponse {
    let mut body = String::from("<h1>Đăng nhập</h1>\n");
    if let Some(error) = error {
        body.push_str(&error_paragraph(error));
    }

    body.push_str(
        r#"<form method="post" action="/">
<label>Tài khoản <input type="text" name="username"></label>
<label>Mật khẩu <input type="password" name="password"></label>
<button type="submit">Đăng nhập</button>
</form>"#,
    );

    layout("Đăng nhập", &body)
}

/// Age calculator form
///
/// `outcome` is `None` until the form is submitted; the submitted `birth_year` is kept in the
/// input field.
pub fn age(birth_year: &str, outcome: Option<&ValidationResult>) -> HttpResponse {
    let result = match outcome {
        Some(Ok(age)) => format!("<p class=\"age\">Tuổi của bạn: {age}</p>\n"),
        Some(Err(err)) => error_paragraph(&err.to_string()),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>Tính tuổi</h1>
{result}<form method="post" action="/age">
<label>Năm sinh <input type="text" name="birth_year" value="{}"></label>
<button type="submit">Tính tuổi</button>
</form>
<a href="/logout">Đăng xuất</a>"#,
        escape(birth_year)
    );

    layout("Tính tuổi", &body)
}
