//! Page scraper: pure extraction over server-rendered HTML.
//!
//! Every function here maps a parsed document to plain values. No network
//! I/O, no mutation of the document, and no failures: absent nodes yield
//! empty or missing values and the calling workflow decides whether that
//! is fatal. Extraction rules (selector + pattern) are kept as module
//! constants so a markup change on the server side is a one-line edit.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Rows of the attendance report table.
const SEL_REPORT_ROWS: &str = ".note tbody tr";
/// Header cells of the attendance report table.
const SEL_REPORT_HEAD: &str = ".note tbody tr:first-child th";
/// Footer cells (the summary row) of the attendance report table.
const SEL_REPORT_FOOT: &str = ".note tbody tr:last-child th, .note tbody tr:last-child td";
/// "Enter edit mode" button inside the action column of the day view.
const SEL_EDIT_BUTTON: &str = "a.btn-info";
/// CSRF token hidden input on the employee landing page.
const SEL_PUNCH_TOKEN: &str = "input[name='token']";
/// Group select on the employee landing page.
const SEL_PUNCH_GROUP: &str = "select#adit_groupID option:first-child";
/// Group select on the per-day modification page.
const SEL_FIX_GROUP: &str = "select[name=group_id] option:first-child";
/// Menu entry on the admin landing page carrying the impersonation link.
const SEL_ADMIN_MENU: &str = "#rollover-menu > li:nth-child(2)";

/// Pattern over the edit button's inline handler: captures the punch
/// handle and its display time.
const RE_EDIT_HANDLER: &str = r"intoModifyMode\(([0-9]+), '([0-9]{2}:[0-9]{2})'";
/// Pattern over the admin menu handler: captures the impersonation code.
const RE_EMPLOYEE_CODE: &str = "code=([0-9a-f]+)";

/// Number of columns shown from the per-day table.
const DAY_MAX_COLUMNS: usize = 4;
/// Index of the column holding the edit button in the per-day table.
const DAY_ACTION_COLUMN: usize = 5;

fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Strip newlines, tabs and spaces from scraped cell text.
pub fn trim_meta(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '\n' | '\t' | ' ')).collect()
}

fn cell_text(el: ElementRef<'_>) -> String {
    trim_meta(&el.text().collect::<String>())
}

fn attr_value(doc: &Html, css: &str, attr: &str) -> String {
    doc.select(&sel(css))
        .next()
        .and_then(|el| el.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}

/// Hidden form fields required by the correction submit.
///
/// Values are read as-is; a field missing from the page comes back empty.
/// The server, not this client, decides whether an empty token is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FixTimeFields {
    pub token: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub client_id: String,
    pub employee_id: String,
    pub group_id: String,
}

/// Read the correction form's hidden fields and group select.
pub fn fix_time_fields(doc: &Html) -> FixTimeFields {
    FixTimeFields {
        token: attr_value(doc, "input[name=token]", "value"),
        year: attr_value(doc, "input[name=year]", "value"),
        month: attr_value(doc, "input[name=month]", "value"),
        day: attr_value(doc, "input[name=day]", "value"),
        client_id: attr_value(doc, "input[name=client_id]", "value"),
        employee_id: attr_value(doc, "input[name=employee_id]", "value"),
        group_id: attr_value(doc, SEL_FIX_GROUP, "value"),
    }
}

/// Read the punch form's CSRF token and default group id from the
/// employee landing page.
pub fn punch_form(doc: &Html) -> (String, String) {
    let token = attr_value(doc, SEL_PUNCH_TOKEN, "value");
    let group_id = attr_value(doc, SEL_PUNCH_GROUP, "value");
    (token, group_id)
}

/// Extract the employee impersonation code from the admin landing page.
///
/// The code sits inside an inline event handler on a specific menu entry;
/// it is short-lived and read exactly once per login.
pub fn employee_code(doc: &Html) -> Option<String> {
    let onclick = attr_value(doc, SEL_ADMIN_MENU, "onclick");
    let re = Regex::new(RE_EMPLOYEE_CODE).unwrap();
    re.captures(&onclick).map(|c| c[1].to_string())
}

/// The attendance report table: header, body rows, summary footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub footer: Vec<String>,
}

/// Scrape the monthly attendance report.
///
/// The last row of the table is a totals row and is returned as the
/// footer; every other row belongs to the body.
pub fn attendance_table(doc: &Html) -> AttendanceTable {
    let header = doc
        .select(&sel(SEL_REPORT_HEAD))
        .map(cell_text)
        .collect::<Vec<_>>();

    let tr: Vec<ElementRef<'_>> = doc.select(&sel(SEL_REPORT_ROWS)).collect();
    let body_len = tr.len().saturating_sub(1);
    let cells = sel("td,th");

    let rows = tr
        .iter()
        .take(body_len)
        .map(|row| row.select(&cells).map(cell_text).collect())
        .collect();

    let footer = doc
        .select(&sel(SEL_REPORT_FOOT))
        .map(cell_text)
        .collect::<Vec<_>>();

    AttendanceTable {
        header,
        rows,
        footer,
    }
}

/// Ordered mapping from a displayed punch time to the server-side handle
/// needed to delete it.
///
/// Handles are not stable across page loads, so the mapping is rebuilt
/// from each fetched document. The first entry is always the `"cancel"`
/// sentinel so a selection prompt can offer a way out even on a day with
/// no editable punches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchCandidates {
    entries: Vec<(String, String)>,
}

pub const CANCEL_LABEL: &str = "cancel";

impl PunchCandidates {
    fn new() -> Self {
        Self {
            entries: vec![(CANCEL_LABEL.to_string(), "0".to_string())],
        }
    }

    fn push(&mut self, label: String, handle: String) {
        self.entries.push((label, handle));
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(l, _)| l.clone()).collect()
    }

    pub fn handle_for(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, h)| h.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The per-day modification table plus the editable-punch candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub candidates: PunchCandidates,
}

/// Scrape the per-day modification page.
///
/// The first row is the header; the rest are punch rows. Only the first
/// [`DAY_MAX_COLUMNS`] cells are kept for display. Rows whose action
/// column carries an edit button contribute a [`PunchCandidates`] entry;
/// read-only rows contribute none.
pub fn day_table(doc: &Html) -> DayTable {
    let header = doc
        .select(&sel(SEL_REPORT_HEAD))
        .take(DAY_MAX_COLUMNS)
        .map(cell_text)
        .collect::<Vec<_>>();

    let mut candidates = PunchCandidates::new();
    let mut rows = Vec::new();

    let cells = sel("td");
    let button = sel(SEL_EDIT_BUTTON);
    let re = Regex::new(RE_EDIT_HANDLER).unwrap();

    for row in doc.select(&sel(SEL_REPORT_ROWS)).skip(1) {
        let mut data = Vec::new();
        for (i, td) in row.select(&cells).enumerate() {
            if i < DAY_MAX_COLUMNS {
                data.push(cell_text(td));
            } else if i == DAY_ACTION_COLUMN {
                let onclick = td
                    .select(&button)
                    .next()
                    .and_then(|a| a.value().attr("onclick"))
                    .unwrap_or_default();
                if let Some(cap) = re.captures(onclick) {
                    candidates.push(cap[2].to_string(), cap[1].to_string());
                }
            }
        }
        rows.push(data);
    }

    DayTable {
        header,
        rows,
        candidates,
    }
}
