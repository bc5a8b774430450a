//! Lenient USS reader built on cssparser.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, StyleSheetParser,
};

use crate::style::StyleProperty;

/// A rule read back from stylesheet text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    /// Selector text as written, trimmed.
    pub selector: String,
    /// Declarations in source order, values trimmed.
    pub properties: Vec<StyleProperty>,
}

/// Parse USS text into its rules.
///
/// At-rules and rules that fail to parse are skipped. Selector and value
/// text is kept as written rather than interpreted.
pub fn parse_uss(text: &str) -> Vec<ParsedRule> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut rules = Vec::new();

    let mut rule_parser = TopLevelRuleParser { rules: &mut rules };
    let stylesheet_parser = StyleSheetParser::new(&mut parser, &mut rule_parser);

    for result in stylesheet_parser {
        // Ignore errors - lenient parsing
        let _ = result;
    }

    rules
}

/// Consume the rest of the input, returning its source text.
fn remaining_text(input: &mut Parser<'_, '_>) -> String {
    let start = input.position();
    while input.next().is_ok() {}
    input.slice_from(start).trim().to_string()
}

struct TopLevelRuleParser<'a> {
    rules: &'a mut Vec<ParsedRule>,
}

impl<'i> AtRuleParser<'i> for TopLevelRuleParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Err(input.new_custom_error(()))
    }
}

impl<'i> QualifiedRuleParser<'i> for TopLevelRuleParser<'_> {
    type Prelude = String;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Ok(remaining_text(input))
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut properties = Vec::new();
        let mut decl_parser = DeclarationListParser {
            properties: &mut properties,
        };

        for result in RuleBodyParser::new(input, &mut decl_parser) {
            // Ignore errors - lenient parsing
            let _ = result;
        }

        self.rules.push(ParsedRule {
            selector: prelude,
            properties,
        });
        Ok(())
    }
}

struct DeclarationListParser<'a> {
    properties: &'a mut Vec<StyleProperty>,
}

impl<'i> AtRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Err(input.new_custom_error(()))
    }
}

impl<'i> QualifiedRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Err(input.new_custom_error(()))
    }
}

impl<'i> DeclarationParser<'i> for DeclarationListParser<'_> {
    type Declaration = ();
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let value = remaining_text(input);
        self.properties
            .push(StyleProperty::new(name.to_string(), value));
        Ok(())
    }
}

impl<'i> RuleBodyItemParser<'i, (), ()> for DeclarationListParser<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
