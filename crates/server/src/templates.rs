//! Server-rendered pages for the product catalog.
//!
//! No template engine: the three pages are small enough to assemble from
//! plain string builders. User-supplied values go through `html-escape`
//! before they reach the page.

use axum::http::StatusCode;
use axum::response::Html;
use html_escape::{encode_double_quoted_attribute, encode_text};
use service::file::product_db::Product;

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}</body>\n</html>\n",
        encode_text(title),
        body
    ))
}

/// The product list with per-row edit/remove links.
pub fn products_page(products: &[Product]) -> Html<String> {
    let mut body = String::from("<h1>Products</h1>\n<table>\n<tr><th>ID</th><th>Name</th><th></th></tr>\n");
    for p in products {
        body.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td><a href=\"/{id}/edit\">edit</a> <a href=\"/{id}/remove\">remove</a></td></tr>\n",
            id = encode_text(&p.id),
            name = encode_text(&p.name),
        ));
    }
    body.push_str("</table>\n<p><a href=\"/add\">Add product</a></p>\n");
    layout("Products", &body)
}

/// The add/edit form. With a product, the form posts to that product's edit
/// route and pre-fills the name; without one, it posts to `/add` empty.
pub fn product_form_page(product: Option<&Product>) -> Html<String> {
    let (title, action, name) = match product {
        Some(p) => ("Edit product", format!("/{}/edit", p.id), p.name.as_str()),
        None => ("Add product", "/add".to_string(), ""),
    };
    let body = format!(
        "<h1>{title}</h1>\n<form action=\"{action}\" method=\"post\">\n<label>Name <input type=\"text\" name=\"name\" value=\"{value}\"></label>\n<button type=\"submit\">Save</button>\n</form>\n<p><a href=\"/\">Back</a></p>\n",
        title = encode_text(title),
        action = encode_double_quoted_attribute(&action),
        value = encode_double_quoted_attribute(name),
    );
    layout(title, &body)
}

/// The remove confirmation page; the actual delete is the form post.
pub fn confirm_remove_page(id: &str) -> Html<String> {
    let body = format!(
        "<h1>Remove product</h1>\n<p>Remove product {id}?</p>\n<form action=\"/{action}/remove\" method=\"post\">\n<button type=\"submit\">Remove</button>\n</form>\n<p><a href=\"/\">Back</a></p>\n",
        id = encode_text(id),
        action = encode_double_quoted_attribute(id),
    );
    layout("Remove product", &body)
}

/// Minimal error page used by `PageError`.
pub fn error_page(status: StatusCode, title: &str) -> Html<String> {
    let body = format!(
        "<h1>{} {}</h1>\n<p><a href=\"/\">Back to products</a></p>\n",
        status.as_u16(),
        encode_text(title),
    );
    layout(title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_rows_escape_user_input() {
        let products = vec![Product { id: "1".into(), name: "<script>alert(1)</script>".into() }];
        let Html(page) = products_page(&products);
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("/1/edit"));
    }

    #[test]
    fn form_targets_edit_route_for_existing_product() {
        let p = Product { id: "7".into(), name: "Fig \"fancy\"".into() };
        let Html(page) = product_form_page(Some(&p));
        assert!(page.contains("action=\"/7/edit\""));
        assert!(page.contains("&quot;fancy&quot;"));
    }

    #[test]
    fn empty_form_targets_add_route() {
        let Html(page) = product_form_page(None);
        assert!(page.contains("action=\"/add\""));
        assert!(page.contains("value=\"\""));
    }

    #[test]
    fn confirm_page_posts_to_remove_route() {
        let Html(page) = confirm_remove_page("3");
        assert!(page.contains("action=\"/3/remove\""));
    }
}
