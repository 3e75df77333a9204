//! CSV rendering of round results.
//!
//! One header row, one row per result, `\n` line endings and no
//! trailing empty row. Prompts and outputs are free text, so fields
//! containing commas, quotes, or newlines get RFC 4180 quoting.

use crate::core::RoundResult;

const HEADER: &str = "round,player,prompt,output,target,match_score,token_penalty,final_score";

/// Render results as a UTF-8 CSV table.
#[must_use]
pub fn render_csv<'a, I>(results: I) -> String
where
    I: IntoIterator<Item = &'a RoundResult>,
{
    let mut out = String::from(HEADER);
    for result in results {
        out.push('\n');
        let fields = [
            result.round.to_string(),
            escape_field(&result.player),
            escape_field(&result.prompt),
            escape_field(&result.output),
            escape_field(&result.target),
            result.match_score.to_string(),
            result.token_penalty.to_string(),
            result.final_score.to_string(),
        ];
        out.push_str(&fields.join(","));
    }
    out
}

/// Quote a field when it contains a delimiter, quote, or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
