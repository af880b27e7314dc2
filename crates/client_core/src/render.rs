//! HTML templating for the three result regions.
//!
//! The markup (class names, headers, notes) is the page's observable
//! contract, so it is kept verbatim. Titles and bodies are free text from
//! the server or the user and are escaped; numeric ids are interpolated
//! directly.

use shared::{domain::Post, error::ClientError};

const MOCK_NOTE: &str =
    r#"<p class="info"><em>Nota: Dados mock, não persistidos no servidor</em></p>"#;

/// Replaces the five markup-significant characters with their entities.
/// Text without any of them passes through unchanged.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

fn post_card(post: &Post) -> String {
    format!(
        concat!(
            r#"<div class="post-card">"#,
            r#"<div class="post-header"><h3>Usuário #{user_id} - Post #{id}</h3></div>"#,
            r#"<h4 class="post-title">{title}</h4>"#,
            r#"<p class="post-body">{body}</p>"#,
            "</div>"
        ),
        user_id = post.user_id.0,
        id = post.id.0,
        title = escape_html(&post.title),
        body = escape_html(&post.body),
    )
}

/// One card per post in server order, or a single informational line when
/// the page came back empty.
pub fn post_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return r#"<p class="info">Nenhum post encontrado.</p>"#.to_string();
    }

    let mut html = String::from(r#"<div class="posts-list">"#);
    for post in posts {
        html.push_str(&post_card(post));
    }
    html.push_str("</div>");
    html
}

pub fn post_created(post: &Post) -> String {
    format!(
        r#"<div class="success-message"><h3>Post Criado com Sucesso!</h3>{card}{note}</div>"#,
        card = post_card(post),
        note = MOCK_NOTE,
    )
}

pub fn post_deleted(post_id: i64) -> String {
    format!(
        concat!(
            r#"<div class="success-message"><h3>Post Deletado com Sucesso!</h3>"#,
            r#"<p>O post com ID <strong>#{id}</strong> foi removido da API.</p>"#,
            "{note}</div>"
        ),
        id = post_id,
        note = MOCK_NOTE,
    )
}

/// Labeled error block; `label` names the HTTP action (GET/POST/DELETE).
/// The message is injected as-is, matching the original page.
pub fn action_error(label: &str, err: &ClientError) -> String {
    format!("<strong>Erro na requisição {label}:</strong><br>{err}")
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
