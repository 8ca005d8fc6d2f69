//! Parse pest pairs into script records

use miette::SourceSpan;
use pest::Parser;
use pest::iterators::Pair;

use crate::ast::*;
use crate::{Rule, ScriptParser};

/// Split one line into a command word and coerced arguments.
pub fn parse_record(line: &str) -> Result<Record, miette::Report> {
    let pairs = ScriptParser::parse(Rule::record, line)
        .map_err(|e| miette::miette!("Parse error: {}", e))?;

    let mut record = Record {
        command: None,
        args: Vec::new(),
    };
    for pair in pairs.flatten() {
        match pair.as_rule() {
            Rule::command => record.command = Some(parse_word(pair)),
            Rule::argument => record.args.push(parse_argument(pair)?),
            _ => {}
        }
    }
    Ok(record)
}

fn span_of(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start(), span.end() - span.start()).into()
}

fn parse_word(pair: Pair<Rule>) -> Word {
    Word {
        text: pair.as_str().to_string(),
        span: span_of(&pair),
    }
}

fn parse_argument(pair: Pair<Rule>) -> Result<Arg, miette::Report> {
    let span = span_of(&pair);
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| miette::miette!("Empty argument"))?;
    let value = match inner.as_rule() {
        Rule::integer => ArgValue::Int(parse_integer(inner.as_str())),
        Rule::word => ArgValue::Text(inner.as_str().to_string()),
        other => return Err(miette::miette!("Unexpected rule in argument: {:?}", other)),
    };
    Ok(Arg { value, span })
}

/// Digit strings too long for `u32` saturate; every such value is out of
/// bounds anyway.
fn parse_integer(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}
