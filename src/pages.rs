use axum::response::Html;

use crate::flash::{Flash, Kind};

#[macro_export]
macro_rules! include_res {
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

pub fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn flash_html(flashes: &[Flash]) -> String {
    let mut out = String::new();
    for flash in flashes {
        let class = match flash.kind {
            Kind::Success => "flash flash-success",
            Kind::Error => "flash flash-error",
        };
        out += &format!("<div class=\"{class}\">{}</div>\n", esc(&flash.text));
    }
    out
}

pub fn with_flash(body: &str, flashes: &[Flash]) -> Html<String> {
    Html(body.replace("{flash}", &flash_html(flashes)))
}

pub fn error_page(message: &str) -> Html<String> {
    Html(include_res!(str, "/pages/error.html").replace("{message}", &esc(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn esc_neutralizes_markup() {
        assert_eq!(
            esc("<b>\"R&B\"</b>"),
            "&lt;b&gt;&quot;R&amp;B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn flash_html_keeps_queue_order() {
        let flashes = vec![
            Flash {
                kind: Kind::Success,
                text: "one".into(),
            },
            Flash {
                kind: Kind::Error,
                text: "two".into(),
            },
        ];
        let html = flash_html(&flashes);
        let success = html.find("flash-success").unwrap();
        let error = html.find("flash-error").unwrap();
        assert!(success < error);
    }
}
