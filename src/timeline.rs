//! src/timeline.rs

use crate::record::Record;
use std::fmt::Write;

const HTML_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <style>
    body {
      background-color: #121212;
      color: #f5f5f5;
      font-family: 'Segoe UI', sans-serif;
      margin: 2rem;
    }
    h1 {
      text-align: center;
    }
    input[type="text"] {
      width: 100%;
      padding: 0.5rem;
      margin: 1rem 0;
      font-size: 1rem;
      background: #1e1e1e;
      color: white;
      border: 1px solid #333;
    }
    table {
      width: 100%;
      border-collapse: collapse;
      margin-top: 1rem;
    }
    th, td {
      border: 1px solid #333;
      padding: 0.75rem;
      text-align: left;
    }
    th {
      background-color: #1f1f1f;
      cursor: pointer;
    }
    tr:nth-child(even) {
      background-color: #1a1a1a;
    }
  </style>
</head>
<body>
  <h1>{title}</h1>
  <input type="text" id="search" placeholder="Search logs by any field...">

  <table id="logTable">
    <thead>
      <tr>
        <th onclick="sortTable()">Date ▲</th>
        <th>Commit</th>
        <th>Message</th>
        <th>Why</th>
        <th>Notes</th>
      </tr>
    </thead>
    <tbody>
{rows}    </tbody>
  </table>

  <script>
    const searchInput = document.getElementById('search');
    searchInput.addEventListener('input', () => {
      const filter = searchInput.value.toLowerCase();
      const rows = document.querySelectorAll('#logTable tbody tr');
      rows.forEach(row => {
        const text = row.innerText.toLowerCase();
        row.style.display = text.includes(filter) ? '' : 'none';
      });
    });

    let sortAsc = true;
    function sortTable() {
      const table = document.getElementById('logTable').tBodies[0];
      const rows = Array.from(table.rows);

      rows.sort((a, b) => {
        const dateA = new Date(a.cells[0].textContent.trim());
        const dateB = new Date(b.cells[0].textContent.trim());
        return sortAsc ? dateA - dateB : dateB - dateA;
      });

      rows.forEach(row => table.appendChild(row));
      sortAsc = !sortAsc;

      const header = document.querySelector('th');
      header.innerText = 'Date ' + (sortAsc ? '▲' : '▼');
    }
  </script>
</body>
</html>
"##;

/// Escapes the five HTML-special characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders `records` in the given order as a Markdown document.
pub fn render_markdown(records: &[Record], title: &str) -> String {
    let mut md = format!("# {title}\n\n");

    for record in records {
        let _ = write!(md, "## {} ({})\n\n", record.commit, record.date());
        let _ = write!(md, "**Message:** {}\n\n", record.message);
        if !record.why_text().is_empty() {
            let _ = write!(md, "**Why:** {}\n\n", record.why_text());
        }
        if !record.notes_text().is_empty() {
            let _ = write!(md, "**Notes:** {}\n\n", record.notes_text());
        }
        md.push_str("---\n\n");
    }

    md
}

/// Renders `records` in the given order as a standalone HTML page with inline
/// filtering and date sorting.
pub fn render_html(records: &[Record], title: &str) -> String {
    let mut rows = String::new();
    for record in records {
        let date = record.date();
        rows.push_str("      <tr>\n");
        for cell in [
            date.as_str(),
            record.commit.as_str(),
            record.message.as_str(),
            record.why_text(),
            record.notes_text(),
        ] {
            let _ = writeln!(rows, "        <td>{}</td>", escape_html(cell));
        }
        rows.push_str("      </tr>\n");
    }

    // each placeholder is filled once; inserted text is never rescanned
    let title = escape_html(title);
    let (head, tail) = HTML_TEMPLATE
        .split_once("{rows}")
        .unwrap_or((HTML_TEMPLATE, ""));
    let mut html = head.replace("{title}", &title);
    html.push_str(&rows);
    html.push_str(&tail.replace("{title}", &title));
    html
}
