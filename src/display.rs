//! The hosting document: a label region and a table-body region.
//!
//! Every write replaces both regions together, so a reader never sees a new
//! label next to a stale row.

use std::sync::Mutex;

use crate::{
    constants,
    model::{DisplayResult, QuoteRow},
};

/// Where render results end up.
pub trait DisplaySurface {
    fn write(&self, result: &DisplayResult);
}

/// Contents of the two display regions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Regions {
    /// Plain text for the label region.
    pub label: String,
    /// Row markup for the table-body region.
    pub body: String,
}

/// In-process surface. The mutex makes each write a single replacement.
#[derive(Debug, Default)]
pub struct MemorySurface {
    regions: Mutex<Regions>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Regions {
        match self.regions.lock() {
            Ok(regions) => regions.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DisplaySurface for MemorySurface {
    fn write(&self, result: &DisplayResult) {
        let regions = Regions {
            label: result.label.clone(),
            body: result.row.as_ref().map(QuoteRow::to_html).unwrap_or_default(),
        };
        match self.regions.lock() {
            Ok(mut current) => *current = regions,
            Err(poisoned) => *poisoned.into_inner() = regions,
        }
    }
}

impl QuoteRow {
    /// `<tr>` with six cells: date, open, high, low, close, volume.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<tr>");
        html.push_str(&format!("<td>{}</td>", escape(&self.date)));
        for cell in self.cells() {
            html.push_str(&format!("<td>{}</td>", format_cell(cell)));
        }
        html.push_str("</tr>");
        html
    }
}

// 55500.0 prints as "55500", the way a browser shows a JSON number.
fn format_cell(cell: Option<f64>) -> String {
    cell.map(|v| v.to_string()).unwrap_or_default()
}

/// Minimal HTML escaping for text placed inside elements.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Full HTML document hosting both regions.
pub fn render_page(regions: &Regions) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Stock Quote</title>
</head>
<body>
<h2 id="{label_id}">{label}</h2>
<table>
<thead>
<tr><th>Date</th><th>Open</th><th>High</th><th>Low</th><th>Close</th><th>Volume</th></tr>
</thead>
<tbody id="{body_id}">{body}</tbody>
</table>
</body>
</html>
"#,
        label_id = constants::LABEL_REGION_ID,
        label = escape(&regions.label),
        body_id = constants::BODY_REGION_ID,
        body = regions.body,
    )
}
