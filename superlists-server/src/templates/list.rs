//! List page: the items of one list plus the add-item form

use std::fmt::Write;

use superlists_core::{Item, TodoList};

use super::{escape_html, item_form, layout};

/// View model for `/lists/{id}/`
#[derive(Debug, Clone, Copy)]
pub struct ListPage<'a> {
    pub list: &'a TodoList,
    pub items: &'a [Item],
}

impl<'a> ListPage<'a> {
    pub fn new(list: &'a TodoList, items: &'a [Item]) -> Self {
        Self { list, items }
    }

    pub fn render(&self) -> String {
        let mut rows = String::new();
        for (n, item) in self.items.iter().enumerate() {
            // Writing to a String cannot fail
            let _ = writeln!(
                rows,
                "        <tr><td>{}: {}</td></tr>",
                n + 1,
                escape_html(&item.text)
            );
        }

        let body = format!(
            r#"    <h1>Your To-Do list</h1>
{form}
    <table id="id_list_table">
{rows}    </table>"#,
            form = item_form(&self.list.id.add_item_path()),
            rows = rows,
        );
        layout("To-Do lists", &body)
    }
}
