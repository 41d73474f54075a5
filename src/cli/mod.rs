//! Line-oriented console front end. Parses commands and renders dashboard state;
//! every decision is left to [`Dashboard`].

use std::fmt::Write;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};

use crate::dashboard::Dashboard;
use crate::models::ApplicantRecord;
use crate::utils::time::format_stamp;
use crate::workflow::{CloseOutcome, EditPhase, SubmitOutcome};

pub const HELP: &str = "\
commands:
  list                 list applicants
  show [id]            show the current (or given) applicant
  next | prev          move through applicants
  edit <id>            start editing an applicant
  set <field> <value>  change a field of the draft (lists are comma-separated)
  save                 validate and save the draft
  close                close the editor
  discard | keep       answer the discard prompt
  help                 this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show(Option<i64>),
    Next,
    Previous,
    Edit(i64),
    Set { field: String, value: String },
    Save,
    Close,
    Discard,
    Keep,
    Help,
    Quit,
}

fn parse_id(raw: &str) -> anyhow::Result<i64> {
    raw.trim()
        .parse()
        .with_context(|| format!("'{}' is not an applicant id", raw.trim()))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(v, r)| (v, r.trim()))
            .unwrap_or((line, ""));

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "show" if rest.is_empty() => Command::Show(None),
            "show" => Command::Show(Some(parse_id(rest)?)),
            "next" => Command::Next,
            "prev" | "previous" => Command::Previous,
            "edit" => Command::Edit(parse_id(rest)?),
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                if field.is_empty() {
                    bail!("usage: set <field> <value>");
                }
                Command::Set {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                }
            }
            "save" | "submit" => Command::Save,
            "close" | "cancel" => Command::Close,
            "discard" => Command::Discard,
            "keep" => Command::Keep,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => bail!("empty command"),
            other => return Err(anyhow!("unknown command '{}', try 'help'", other)),
        };
        Ok(command)
    }
}

/// Runs one command and returns the text to print.
pub async fn execute(dashboard: &mut Dashboard, command: Command) -> anyhow::Result<String> {
    let output = match command {
        Command::List => render_list(dashboard),
        Command::Show(None) => render_current(dashboard),
        Command::Show(Some(id)) => {
            if !dashboard.show(id) {
                bail!("no applicant with id {}", id);
            }
            render_current(dashboard)
        }
        Command::Next => {
            if !dashboard.next() {
                bail!("already at the last applicant");
            }
            render_current(dashboard)
        }
        Command::Previous => {
            if !dashboard.previous() {
                bail!("already at the first applicant");
            }
            render_current(dashboard)
        }
        Command::Edit(id) => {
            dashboard.select_for_edit(id)?;
            format!("editing applicant {}", id)
        }
        Command::Set { field, value } => {
            dashboard.change_field(&field, &value)?;
            format!("{} updated (unsaved)", field)
        }
        Command::Save => match dashboard.submit().await {
            SubmitOutcome::Ignored => "nothing to save".to_string(),
            SubmitOutcome::Invalid(errors) => {
                let mut out = String::from("not saved:");
                for (field, message) in errors {
                    let _ = write!(out, "\n  {}: {}", field, message);
                }
                out
            }
            SubmitOutcome::Saved(applicant) => format!(
                "saved applicant {} at {}",
                applicant.id,
                format_stamp(applicant.last_modified)
            ),
            SubmitOutcome::Failed(message) => format!("save failed, draft kept: {}", message),
        },
        Command::Close => match dashboard.request_close() {
            CloseOutcome::Closed => "editor closed".to_string(),
            CloseOutcome::ConfirmationRequired => {
                "you have unsaved changes, 'discard' them or 'keep' editing".to_string()
            }
            CloseOutcome::Ignored => "editor is not open".to_string(),
        },
        Command::Discard => {
            if !dashboard.confirm_discard() {
                bail!("nothing to discard");
            }
            "changes discarded".to_string()
        }
        Command::Keep => {
            if !dashboard.cancel_discard() {
                bail!("nothing to keep");
            }
            "still editing".to_string()
        }
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    };
    Ok(output)
}

fn render_list(dashboard: &Dashboard) -> String {
    let current = dashboard.current().map(|a| a.id);
    let editing = dashboard.editing_id();
    let mut out = String::new();
    for applicant in dashboard.applicants() {
        let marker = match (Some(applicant.id) == current, Some(applicant.id) == editing) {
            (_, true) => '*',
            (true, false) => '>',
            _ => ' ',
        };
        let _ = writeln!(
            out,
            "{} {:>4}  {:<16} {:<20}",
            marker, applicant.id, applicant.name, applicant.status
        );
    }
    let summary: Vec<String> = dashboard
        .status_counts()
        .into_iter()
        .map(|(status, n)| format!("{}: {}", status, n))
        .collect();
    out.push_str(&summary.join(" | "));
    out
}

fn render_current(dashboard: &Dashboard) -> String {
    match dashboard.current() {
        Some(applicant) => render_applicant(applicant, &dashboard.cursor().label()),
        None => "no applicants loaded".to_string(),
    }
}

fn render_applicant(applicant: &ApplicantRecord, counter: &str) -> String {
    let rows = [
        ("Email", applicant.email.clone()),
        ("Phone", applicant.phone.clone()),
        ("Current Organization", applicant.current_organization.clone()),
        ("Skills", applicant.skills_display()),
        ("Available From", applicant.available_from.clone()),
        ("Current Salary", applicant.current_salary.clone()),
        ("Notice Period", applicant.notice_period.clone()),
        ("Full Address", applicant.full_address.clone()),
        ("Resume", applicant.resume.clone()),
        ("Summary", applicant.summary.clone()),
        ("Employment Status", applicant.current_employment_status.clone()),
        ("Date of Birth", applicant.date_of_birth.clone()),
        ("Relevant Experience", applicant.relevant_experience.clone()),
        ("Salary Expectation", applicant.salary_expectation.clone()),
        ("Salary Type", applicant.salary_type.to_string()),
        ("Status", applicant.status.to_string()),
        ("Language Skills", applicant.language_skills_display()),
        ("Last Modified", format_stamp(applicant.last_modified)),
    ];

    let mut out = format!(
        "Candidates > {} - ID {}  [{}]\n{} of Experience | {}\n",
        applicant.name,
        applicant.id,
        counter,
        applicant.total_experience,
        applicant.location_summary()
    );
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<21} {}", label, value);
    }
    out.truncate(out.trim_end().len());
    out
}

/// Prompt prefix reflecting the edit state.
pub fn prompt(dashboard: &Dashboard) -> String {
    match (dashboard.phase(), dashboard.editing_id()) {
        (EditPhase::ConfirmingDiscard, _) => "discard changes? > ".to_string(),
        (_, Some(id)) if dashboard.is_dirty() => format!("edit {}* > ", id),
        (_, Some(id)) => format!("edit {} > ", id),
        _ => "> ".to_string(),
    }
}
