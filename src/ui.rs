use crate::entry::Entry;

pub const NOTHING_INCLUDED: &str = "No games are included. Check some boxes first.";

fn digit_count(val: usize) -> usize {
    if val == 0 {
        1
    } else {
        val.ilog10() as usize + 1
    }
}

/// One line per entry: 1-based position, inclusion mark, name and path.
pub fn entries_to_str<'a>(entries: impl IntoIterator<Item = (usize, &'a Entry)>) -> String {
    let rows: Vec<(usize, &Entry)> = entries.into_iter().collect();
    let max_pos = rows.iter().map(|(i, _)| i + 1).max();
    let max_name = rows.iter().map(|(_, e)| e.name.chars().count()).max();
    match (max_pos, max_name) {
        (Some(max_pos), Some(name_col_len)) => {
            let pos_col_len = digit_count(max_pos);
            rows.iter()
                .map(|(i, e)| {
                    let mark = if e.included { "x" } else { " " };
                    format!(
                        "{:>pos_col_len$} [{mark}] {:<name_col_len$}  {}",
                        i + 1,
                        e.name,
                        e.path.display()
                    )
                })
                .collect::<Vec<String>>()
                .join("\n")
        }
        _ => String::from(""),
    }
}

pub fn rescan_status(added: usize) -> String {
    if added > 0 {
        format!("Added {added} new item(s).")
    } else {
        String::from("No new shortcuts found on Desktop.")
    }
}

pub fn add_status(added: usize, dropped: bool) -> String {
    match (added > 0, dropped) {
        (true, false) => format!("Added {added} item(s)."),
        (true, true) => format!("Added {added} item(s) via drag & drop."),
        (false, false) => String::from("Nothing added."),
        (false, true) => String::from("No new items from drop."),
    }
}

pub fn remove_missing_status(removed: usize) -> String {
    if removed > 0 {
        format!("Removed {removed} missing item(s).")
    } else {
        String::from("No missing items.")
    }
}

pub fn rolled_status(entry: &Entry) -> String {
    format!("\x1b[32mRolled: {}\x1b[0m", entry.name)
}

pub fn launching_status(entry: &Entry) -> String {
    format!("Launching: {}", entry.name)
}
