//! Plain-text rendering of the list state and form errors.

use roster_core::{Entity, ValidationErrors};

const HEADERS: [&str; 4] = ["Name", "Email", "Username", "ID"];

/// Render the users table, or "No users" for an empty list.
pub fn render_table(entities: &[Entity]) -> String {
    if entities.is_empty() {
        return "No users\n".to_string();
    }

    let rows: Vec<[&str; 4]> = entities
        .iter()
        .map(|e| [e.name.as_str(), e.email.as_str(), e.username.as_str(), e.id.as_str()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS, &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[&str; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One line per invalid field, in form order
pub fn render_field_errors(errors: &ValidationErrors) -> Vec<String> {
    errors
        .iter()
        .map(|(field, violation)| format!("{field}: {violation}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{validate_draft, Draft, EntityId};

    #[test]
    fn empty_list_placeholder() {
        assert_eq!(render_table(&[]), "No users\n");
    }

    #[test]
    fn columns_are_aligned() {
        let users = vec![
            Draft::new("Alice", "a@b.com", "alice").with_id(EntityId::new("1")),
            Draft::new("Bo", "bob@example.com", "bob").with_id(EntityId::new("2")),
        ];

        let table = render_table(&users);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name   Email            Username  ID");
        assert_eq!(lines[1], "Alice  a@b.com          alice     1");
        assert_eq!(lines[2], "Bo     bob@example.com  bob       2");
    }

    #[test]
    fn field_errors_one_per_line() {
        let errors = validate_draft(&Draft::new("", "foo@bar", "")).unwrap_err();
        assert_eq!(
            render_field_errors(&errors),
            vec![
                "name: required".to_string(),
                "email: invalid format".to_string(),
                "username: required".to_string(),
            ]
        );
    }
}
