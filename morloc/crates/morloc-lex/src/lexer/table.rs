//! The per-mode rule table.
//!
//! Built once per process from the rule fragments of the sibling modules.
//! Fragments shared by several modes (literals, expressions) are composed
//! here, so every mode that accepts an expression accepts the same one.

use lazy_static::lazy_static;

use super::rule::Rule;
use super::{comment, identifier, number, operator, pattern, string};
use crate::mode::Mode;
use crate::token::TokenKind;

lazy_static! {
    static ref RULES: RuleTable = RuleTable::build();
}

/// Ordered rule lists for every [`Mode`].
pub struct RuleTable {
    modes: Vec<Vec<Rule>>,
}

impl RuleTable {
    /// Returns the process-wide table.
    pub fn global() -> &'static RuleTable {
        &RULES
    }

    /// Returns the rules of `mode` in match order.
    #[inline]
    pub fn rules(&self, mode: Mode) -> &[Rule] {
        self.modes
            .get(mode.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn build() -> Self {
        let modes = Mode::ALL.iter().map(|&mode| mode_rules(mode)).collect();
        Self { modes }
    }
}

fn mode_rules(mode: Mode) -> Vec<Rule> {
    match mode {
        Mode::Root => root(),
        Mode::Comment => comment::comment_mode(),
        Mode::Module => identifier::module_mode(),
        Mode::String => string::string_mode(),
        Mode::MultilineString => string::multiline_string_mode(),
        Mode::Escape => string::escape_mode(),
        Mode::Interpolation => closed_by("}", TokenKind::StringInterpol),
        Mode::SourceList => source_list(),
        Mode::ImportList => import_list(),
        Mode::Pattern => pattern::pattern_mode(),
        Mode::PatternGroup => pattern::pattern_group_mode(),
        Mode::PatternValue => {
            let mut rules = pattern::pattern_value_prefix();
            rules.extend(expression());
            rules
        },
        Mode::Parens => closed_by(")", TokenKind::Punctuation),
        Mode::Braces => closed_by("}", TokenKind::Punctuation),
        Mode::Brackets => closed_by("]", TokenKind::Punctuation),
    }
}

fn whitespace() -> Rule {
    Rule::scan(identifier::scan_whitespace, TokenKind::Whitespace)
}

fn root() -> Vec<Rule> {
    let mut rules = vec![
        whitespace(),
        comment::line_comment(),
        comment::block_comment_open(),
        identifier::module_rule(),
    ];
    rules.extend(identifier::declaration_rules());
    rules.extend(identifier::keyword_rules());
    rules.push(identifier::promoted_type_rule());
    rules.extend(literal());
    rules.push(operator::punctuation_rule());
    rules
}

/// Identifiers, numbers, pattern access, strings, unit literals and
/// operators. Numbers precede the pattern dot so `3.0` stays one float.
fn literal() -> Vec<Rule> {
    let mut rules = identifier::identifier_rules();
    rules.extend(number::number_rules());
    rules.push(pattern::pattern_entry_rule());
    rules.extend(string::string_open_rules());
    rules.extend(operator::unit_rules());
    rules.push(operator::operator_rule());
    rules
}

/// Expression rules shared by interpolations, pattern values and nested
/// brackets. A bare `#{` opens another interpolation.
fn expression() -> Vec<Rule> {
    let mut rules = vec![
        whitespace(),
        comment::block_comment_open(),
        string::interpolation_open_rule(),
    ];
    rules.extend(literal());
    rules.extend(operator::bracket_open_rules());
    rules.push(operator::punctuation_rule());
    rules
}

/// An expression mode that pops on `close`.
fn closed_by(close: &'static str, kind: TokenKind) -> Vec<Rule> {
    let mut rules = vec![Rule::literal(close, kind).pop()];
    rules.extend(expression());
    rules
}

fn list_common(mode: Mode) -> Vec<Rule> {
    vec![
        whitespace(),
        comment::line_comment(),
        Rule::literal("(", TokenKind::Text).push(mode),
        Rule::literal(")", TokenKind::Text).pop(),
    ]
}

fn source_list() -> Vec<Rule> {
    let mut rules = list_common(Mode::SourceList);
    rules.push(Rule::groups(
        identifier::scan_aliased_source,
        &[
            TokenKind::String,
            TokenKind::Whitespace,
            TokenKind::Keyword,
            TokenKind::Whitespace,
            TokenKind::Name,
        ],
    ));
    rules.push(Rule::scan(identifier::scan_plain_string, TokenKind::String));
    rules.push(Rule::literal(",", TokenKind::Punctuation));
    rules
}

fn import_list() -> Vec<Rule> {
    let mut rules = list_common(Mode::ImportList);
    rules.push(Rule::scan(identifier::scan_import_item, TokenKind::Name));
    rules.push(Rule::literal(",", TokenKind::Punctuation));
    rules
}
