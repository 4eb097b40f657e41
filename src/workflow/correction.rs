//! Correction workflow: review a day's punches and replace one of them.
//!
//! The transaction is token-threaded: the per-day page carries a CSRF
//! token plus the relational ids the submit endpoint wants back, and the
//! punch handles it lists are only valid for that page load. The steps
//! run strictly in order — fetch, review, choose, substitute, commit —
//! with the interaction boundary consulted between scrape and commit.
//! A failed commit is not retried; the token may have rotated, so the
//! caller must start a fresh cycle.

use regex::Regex;
use scraper::Html;

use crate::errors::{AppError, AppResult};
use crate::net::{INSERT_PATH, MODIFY_PATH, Transport};
use crate::scrape::{self, CANCEL_LABEL, FixTimeFields};
use crate::ui::{Interaction, RenderSink};

/// A validated year/month/day argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl Day {
    /// Accepts `YYYYMMDD` or `YYYY-MM-DD`. Anything else fails before a
    /// single request goes out.
    pub fn parse(s: &str) -> AppResult<Self> {
        let re = Regex::new(r"([0-9]{4})-?([0-9]{2})-?([0-9]{2})").unwrap();
        let cap = re
            .captures(s)
            .ok_or_else(|| AppError::InvalidDay(s.to_string()))?;
        Ok(Day {
            year: cap[1].to_string(),
            month: cap[2].to_string(),
            day: cap[3].to_string(),
        })
    }
}

/// Terminal states of the correction workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Caller backed out; nothing was submitted.
    Aborted,
    /// The correction was accepted by the server.
    Committed,
}

/// Show the recorded punches for `day_arg` and optionally substitute one.
///
/// One GET happens up front; whether a POST follows depends on the
/// answers from the interaction boundary. The correction token is read
/// from the document already fetched, never re-fetched.
pub fn correct_day<T: Transport>(
    t: &mut T,
    ui: &mut dyn Interaction,
    sink: &mut dyn RenderSink,
    day_arg: &str,
) -> AppResult<Outcome> {
    let day = Day::parse(day_arg)?;

    let path = format!(
        "{}?year={}&month={}&day={}",
        MODIFY_PATH, day.year, day.month, day.day
    );
    let page = t.get(&path)?;
    if !page.ok() {
        return Err(AppError::Fetch {
            path,
            status: page.status,
        });
    }

    let doc = Html::parse_document(&page.body);
    let table = scrape::day_table(&doc);

    sink.render_table(&table.header, &table.rows, None);

    if !ui.confirm("Fix it?") {
        return Ok(Outcome::Aborted);
    }

    let label = ui.select_one("Choose a time:", &table.candidates.labels());
    if label == CANCEL_LABEL {
        return Ok(Outcome::Aborted);
    }
    // the label came from the candidate list, so the lookup cannot miss
    let handle = table
        .candidates
        .handle_for(&label)
        .unwrap_or("0")
        .to_string();

    let time = ui.prompt_text("Input a time (HHMM)");

    let fields = scrape::fix_time_fields(&doc);
    submit_fix(t, &fields, &handle, &time)?;

    Ok(Outcome::Committed)
}

/// Commit the correction. The token is consumed by this single attempt.
fn submit_fix<T: Transport>(
    t: &mut T,
    fields: &FixTimeFields,
    delete_minutes: &str,
    time: &str,
) -> AppResult<()> {
    let form = [
        ("token", fields.token.clone()),
        ("delete_minutes", delete_minutes.to_string()),
        ("time", time.to_string()),
        ("group_id", fields.group_id.clone()),
        ("notice", "fix".to_string()),
        ("year", fields.year.clone()),
        ("month", fields.month.clone()),
        ("day", fields.day.clone()),
        ("client_id", fields.client_id.clone()),
        ("employee_id", fields.employee_id.clone()),
    ];
    let res = t.post_form(INSERT_PATH, &form)?;
    if !res.ok() {
        return Err(AppError::Post {
            path: INSERT_PATH.to_string(),
            status: res.status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::testing::{Call, MockTransport};
    use crate::ui::prompt::testing::ScriptedPrompter;

    /// Sink that records what was rendered.
    #[derive(Default)]
    struct RecordingSink {
        tables: usize,
    }

    impl RenderSink for RecordingSink {
        fn render_table(
            &mut self,
            _header: &[String],
            _rows: &[Vec<String>],
            _footer: Option<&[String]>,
        ) {
            self.tables += 1;
        }
    }

    const DAY_PAGE: &str = r#"
        <form>
          <input name="token" value="a1b2c3">
          <input name="year" value="2026">
          <input name="month" value="08">
          <input name="day" value="21">
          <input name="client_id" value="acme">
          <input name="employee_id" value="4711">
          <select name="group_id"><option value="9">Eng</option></select>
        </form>
        <table class="note"><tbody>
          <tr><th>No</th><th>Time</th><th>Kind</th><th>Group</th><th></th><th>Action</th></tr>
          <tr><td>1</td><td>09:00</td><td>IN</td><td>Eng</td><td></td>
              <td><a class="btn-info" onclick="intoModifyMode(101, '09:00')">e</a></td></tr>
          <tr><td>2</td><td>18:00</td><td>OUT</td><td>Eng</td><td></td>
              <td><a class="btn-info" onclick="intoModifyMode(102, '18:00')">e</a></td></tr>
        </tbody></table>"#;

    #[test]
    fn malformed_day_fails_before_any_request() {
        for bad in ["today", "2026-8-1", "202608", "26-08-21", ""] {
            let mut t = MockTransport::new();
            let mut ui = ScriptedPrompter::new();
            let mut sink = RecordingSink::default();

            let err = correct_day(&mut t, &mut ui, &mut sink, bad).unwrap_err();
            assert!(matches!(err, AppError::InvalidDay(_)), "input: {bad}");
            assert_eq!(t.calls.len(), 0, "input: {bad}");
        }
    }

    #[test]
    fn day_parse_accepts_both_forms() {
        let d = Day::parse("20260821").unwrap();
        assert_eq!(d, Day::parse("2026-08-21").unwrap());
        assert_eq!((d.year.as_str(), d.month.as_str(), d.day.as_str()), ("2026", "08", "21"));
    }

    #[test]
    fn declined_confirm_aborts_after_one_get() {
        let mut t = MockTransport::new().respond(200, DAY_PAGE);
        let mut ui = ScriptedPrompter::new().confirm_with(false);
        let mut sink = RecordingSink::default();

        let out = correct_day(&mut t, &mut ui, &mut sink, "2026-08-21").unwrap();
        assert_eq!(out, Outcome::Aborted);
        assert_eq!(sink.tables, 1);
        assert_eq!(t.get_count(), 1);
        assert_eq!(t.post_count(), 0);
    }

    #[test]
    fn cancel_selection_aborts_without_post() {
        let mut t = MockTransport::new().respond(200, DAY_PAGE);
        let mut ui = ScriptedPrompter::new().confirm_with(true).select("cancel");
        let mut sink = RecordingSink::default();

        let out = correct_day(&mut t, &mut ui, &mut sink, "2026-08-21").unwrap();
        assert_eq!(out, Outcome::Aborted);
        assert_eq!(t.post_count(), 0);
    }

    #[test]
    fn chosen_punch_is_deleted_and_replaced() {
        let mut t = MockTransport::new().respond(200, DAY_PAGE).respond(200, "");
        let mut ui = ScriptedPrompter::new()
            .confirm_with(true)
            .select("09:00")
            .text("0930");
        let mut sink = RecordingSink::default();

        let out = correct_day(&mut t, &mut ui, &mut sink, "20260821").unwrap();
        assert_eq!(out, Outcome::Committed);

        assert!(matches!(&t.calls[0], Call::Get(p)
            if p == "/employee/adit/modify?year=2026&month=08&day=21"));

        let form = t.last_post_form().unwrap();
        let expect = [
            ("token", "a1b2c3"),
            ("delete_minutes", "101"),
            ("time", "0930"),
            ("group_id", "9"),
            ("notice", "fix"),
            ("year", "2026"),
            ("month", "08"),
            ("day", "21"),
            ("client_id", "acme"),
            ("employee_id", "4711"),
        ];
        for (k, v) in expect {
            assert!(
                form.contains(&(k.to_string(), v.to_string())),
                "missing {k}={v}"
            );
        }
    }

    #[test]
    fn rejected_commit_is_fatal_and_not_retried() {
        let mut t = MockTransport::new().respond(200, DAY_PAGE).respond(500, "");
        let mut ui = ScriptedPrompter::new()
            .confirm_with(true)
            .select("18:00")
            .text("1805");
        let mut sink = RecordingSink::default();

        let err = correct_day(&mut t, &mut ui, &mut sink, "2026-08-21").unwrap_err();
        assert!(matches!(err, AppError::Post { status: 500, .. }));
        // one GET, one POST, nothing after the rejection
        assert_eq!(t.calls.len(), 2);
    }

    #[test]
    fn rejected_fetch_surfaces_before_any_prompt() {
        let mut t = MockTransport::new().respond(404, "");
        let mut ui = ScriptedPrompter::new();
        let mut sink = RecordingSink::default();

        let err = correct_day(&mut t, &mut ui, &mut sink, "2026-08-21").unwrap_err();
        assert!(matches!(err, AppError::Fetch { status: 404, .. }));
        assert_eq!(sink.tables, 0);
    }
}
