//! Result line formatting

use crate::error::Result;
use crate::types::{Member, OutputFormat, Team};
use std::io::Write;

/// Replace characters that would split a result across lines or fields
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .collect()
}

/// Text form of a team: `name<TAB>description<TAB>id<TAB>members_count`
pub fn format_team_line(team: &Team) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        single_line(&team.name),
        single_line(team.description.as_deref().unwrap_or_default()),
        team.id,
        team.members_count
    )
}

/// Write one member as a single line
pub fn write_member(out: &mut impl Write, member: &Member, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", single_line(&member.login))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(member)?)?,
    }
    Ok(())
}

/// Write one team as a single line
pub fn write_team(out: &mut impl Write, team: &Team, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", format_team_line(team))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(team)?)?,
    }
    Ok(())
}
