use chrono::Local;
use std::fmt::Write;

use crate::client::state::{ClientState, FormMode};

pub const TITLE: &str = "Home Inventory";

/// Draws the whole screen, form first.
pub fn render(state: &ClientState) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_view(&mut out, state);
    out
}

fn write_view(out: &mut String, state: &ClientState) -> std::fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(TITLE.len()))?;
    writeln!(out)?;

    let editing = matches!(state.mode(), FormMode::Editing(_));
    writeln!(out, "{}", if editing { "Edit Item" } else { "Add New Item" })?;
    writeln!(out, "  Item Name: {}", placeholder(&state.form.name, "Enter item name"))?;
    writeln!(out, "  Quantity:  {}", placeholder(&state.form.quantity, "Enter quantity"))?;
    write!(out, "  [submit] {}", if editing { "Update Item" } else { "Add Item" })?;
    if editing {
        write!(out, "   [cancel] Cancel")?;
    }
    writeln!(out)?;
    writeln!(out)?;

    writeln!(out, "Box Status ({} items)", state.items.len())?;
    if let Some(error) = &state.error {
        writeln!(out, "  ! {error}")?;
    }

    if state.loading {
        writeln!(out, "  Loading inventory...")?;
    } else if state.items.is_empty() {
        writeln!(out, "  Box is empty")?;
        writeln!(out, "  Add some items to get started")?;
    } else {
        for (idx, item) in state.items.iter().enumerate() {
            let n = idx + 1;
            writeln!(out, "  {n}. {}", item.name)?;
            writeln!(out, "     Quantity: {}", item.quantity)?;
            writeln!(
                out,
                "     Last updated: {}",
                item.last_updated.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
            )?;
            writeln!(out, "     [edit {n}] Edit   [delete {n}] Delete")?;
        }
    }
    Ok(())
}

fn placeholder(value: &str, hint: &str) -> String {
    if value.is_empty() {
        format!("<{hint}>")
    } else {
        value.to_string()
    }
}
