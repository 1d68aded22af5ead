//! CLI output for the route inspection commands

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use querydash_core::{Resolution, Route, RouteTable};

/// Format the route table (human or JSON), in match order
pub fn format_route_table(table: &RouteTable, json: bool, no_color: bool) -> String {
    if json {
        let rows: Vec<_> = table
            .entries()
            .iter()
            .map(|e| serde_json::json!({ "pattern": e.pattern(), "target": e.target() }))
            .collect();
        return serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string());
    }

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        out.set_header(vec!["#", "Pattern", "Resolves to"]);
    } else {
        out.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Pattern").fg(Color::Cyan),
            Cell::new("Resolves to").fg(Color::Cyan),
        ]);
    }

    for (i, entry) in table.entries().iter().enumerate() {
        let position = (i + 1).to_string();
        let target = entry.target().to_string();
        out.add_row(Row::from(vec![position.as_str(), entry.pattern(), &target]));
    }

    out.to_string()
}

/// Format the outcome of dispatching one path (human or JSON)
pub fn format_resolution(path: &str, resolution: &Resolution, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(resolution).unwrap_or_else(|_| "{}".to_string());
    }

    match resolution {
        Resolution::Mount(Route::Shell) => {
            format!("{} -> tabbed shell", path)
        }
        Resolution::Mount(Route::QueryDetails(p)) => format!(
            "{} -> query details\n  ruleId:         {}\n  recommendation: {}\n  ruleTitle:      {}",
            path, p.rule_id, p.recommendation, p.rule_title
        ),
        Resolution::Redirect { to, replace } => format!(
            "{} -> redirect to {} ({})",
            path,
            to,
            if *replace { "replace" } else { "push" }
        ),
    }
}
