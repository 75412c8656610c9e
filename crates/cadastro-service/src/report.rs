//! Plain-text user report.

use cadastro_core::models::user::User;

pub const REPORT_HEADER: &str = "--- Relatório de Usuários ---";
pub const EMPTY_REPORT_LINE: &str = "Nenhum usuário cadastrado.";

/// Render the report for `users`, one line per user in the given order.
///
/// Lines are joined with `\n` and there is no trailing newline.
pub fn render(users: &[User]) -> String {
    if users.is_empty() {
        return format!("{REPORT_HEADER}\n{EMPTY_REPORT_LINE}");
    }

    let mut lines = Vec::with_capacity(users.len() + 1);
    lines.push(REPORT_HEADER.to_string());
    lines.extend(users.iter().map(render_line));
    lines.join("\n")
}

fn render_line(user: &User) -> String {
    format!(
        "ID: {} | Nome: {} | Email: {} | Idade: {} | Status: {}",
        user.id, user.name, user.email, user.age, user.status
    )
}
