use nom::branch::alt;
use nom::character::complete::{anychar, char};
use nom::combinator::{all_consuming, map, value, verify};
use nom::multi::many1;
use nom::IResult;

/// One position of an underscore pattern: a literal byte, or a wildcard
/// matching any single character at that position.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Element {
    Literal(u8),
    Wildcard,
}

impl Element {
    pub(crate) fn matches(self, label: u8) -> bool {
        match self {
            Element::Wildcard => true,
            Element::Literal(b) => b == label,
        }
    }

    pub(crate) fn admits_lesser(self, label: u8) -> bool {
        match self {
            Element::Wildcard => true,
            Element::Literal(b) => b < label,
        }
    }

    pub(crate) fn admits_greater(self, label: u8) -> bool {
        match self {
            Element::Wildcard => true,
            Element::Literal(b) => b > label,
        }
    }
}

/// Parses a whole pattern; `None` for empty input or anything outside the
/// single-byte character set.
pub(crate) fn parse(input: &str) -> Option<Vec<Element>> {
    all_consuming(pattern)(input)
        .ok()
        .map(|(_, elements)| elements)
}

fn pattern(input: &str) -> IResult<&str, Vec<Element>> {
    many1(element)(input)
}

fn element(input: &str) -> IResult<&str, Element> {
    alt((wildcard, literal))(input)
}

fn wildcard(input: &str) -> IResult<&str, Element> {
    value(Element::Wildcard, char('_'))(input)
}

fn literal(input: &str) -> IResult<&str, Element> {
    map(verify(anychar, char::is_ascii), |c| Element::Literal(c as u8))(input)
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::pattern::{parse, Element};

    #[test]
    fn parses_literals_and_wildcards() {
        assert_eq!(
            parse("b_j"),
            Some(vec![
                Element::Literal(b'b'),
                Element::Wildcard,
                Element::Literal(b'j'),
            ])
        );
        assert_eq!(parse("__"), Some(vec![Element::Wildcard, Element::Wildcard]));
    }

    #[test]
    fn rejects_empty_pattern() {
        assert_eq!(parse(""), None);
    }

    #[test]
    fn rejects_multibyte_characters() {
        assert_eq!(parse("b\u{e9}j"), None);
    }

    #[test]
    fn literal_routing() {
        let m = Element::Literal(b'm');
        assert!(m.matches(b'm'));
        assert!(!m.matches(b'n'));
        assert!(m.admits_lesser(b'n'));
        assert!(!m.admits_lesser(b'm'));
        assert!(m.admits_greater(b'a'));
        assert!(!m.admits_greater(b'z'));

        assert!(Element::Wildcard.matches(b'q'));
        assert!(Element::Wildcard.admits_lesser(b'q'));
        assert!(Element::Wildcard.admits_greater(b'q'));
    }
}
