use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;

struct LogEntry {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

/// Maximum visible width of the "operation (target)" column.
const OP_MAX_WIDTH: usize = 60;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI color for an operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "toggle" | "set" | "block" => Colour::Green,
        "auto" => Colour::Cyan,
        "clear" => Colour::Red,
        "nav" => Colour::Yellow,
        "import" | "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn load_entries(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        let raw_date: String = row.get(1)?;
        let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or(raw_date);

        Ok(LogEntry {
            id: row.get(0)?,
            date,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    Ok(entries)
}

pub struct LogLogic;

impl LogLogic {
    /// Render the internal log table; only the operation word is colored.
    pub fn render_log(pool: &DbPool, colors: bool) -> AppResult<String> {
        let entries = load_entries(pool)?;
        if entries.is_empty() {
            return Ok("📜 Internal log is empty.\n".to_string());
        }

        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex");

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let mut out = String::from("📜 Internal log:\n\n");

        for e in &entries {
            let plain = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };

            let visible = if plain.chars().count() > OP_MAX_WIDTH {
                let mut s: String = plain.chars().take(OP_MAX_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                plain
            };

            let rendered = match visible.split_once(' ') {
                Some((op, rest)) if colors => {
                    format!("{} {}", color_for_operation(&e.operation).paint(op), rest)
                }
                None if colors => color_for_operation(&e.operation)
                    .paint(visible.as_str())
                    .to_string(),
                _ => visible.clone(),
            };

            let padding = " ".repeat(OP_MAX_WIDTH.saturating_sub(
                strip_ansi(&ansi, &rendered).chars().count(),
            ));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                e.id,
                e.date,
                rendered,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(out)
    }

    pub fn print_log(pool: &DbPool, colors: bool) -> AppResult<()> {
        print!("{}", Self::render_log(pool, colors)?);
        Ok(())
    }
}
