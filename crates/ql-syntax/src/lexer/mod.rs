use crate::{
    lexer::clause::Clause,
    parser::{FilterParser, Rule},
};
use pest::{
    Parser,
    iterators::{Pair, Pairs},
};
use tracing::{trace, warn};

pub mod clause;


/// Scans `input` for clauses, left to right.
///
/// Text that is not part of a well-formed clause is skipped without error.
pub fn tokenize(input: &str) -> Clauses<'_> {
    let pairs = match FilterParser::parse(Rule::filter, input) {
        Ok(mut pairs) => pairs.next().map(Pair::into_inner),
        Err(err) => {
            // `filter` accepts any input; reaching this means the grammar is broken
            warn!("filter tokenizer rejected input: {err}");
            None
        }
    };

    Clauses { pairs }
}

/// Lazy iterator over the clauses of one input.
pub struct Clauses<'i> {
    pairs: Option<Pairs<'i, Rule>>,
}

impl Iterator for Clauses<'_> {
    type Item = Clause;

    fn next(&mut self) -> Option<Self::Item> {
        let pairs = self.pairs.as_mut()?;
        for pair in pairs {
            if pair.as_rule() == Rule::clause {
                let clause = build_clause(pair);
                trace!(clause = %clause.raw, "tokenized clause");
                return Some(clause);
            }
        }
        None
    }
}

fn build_clause(pair: Pair<Rule>) -> Clause {
    let span = pair.as_span();
    let mut clause = Clause {
        raw: span.as_str().to_string(),
        key: String::new(),
        operator: String::new(),
        value: String::new(),
        span: (span.start(), span.end()),
    };

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::field => clause.key = inner.as_str().to_string(),
            Rule::operator => clause.operator = inner.as_str().to_string(),
            Rule::value => clause.value = inner.as_str().to_string(),
            _ => {}
        }
    }

    clause
}
