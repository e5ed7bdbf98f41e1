use std::collections::{HashMap, HashSet};

use tal_core::lang::data_types;
use tal_core::lang::delimiters;
use tal_core::lang::directives;
use tal_core::lang::indirection;
use tal_core::lang::keywords::{self, KeywordCategory};
use tal_core::lang::numeric::{self, NumericBase};
use tal_core::lang::operators;
use tal_core::lang::std_functions;
use tal_core::lang::symbols::{self, SymbolClass};

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::from_str(&info.canonical.to_ascii_lowercase()),
            Some(info.id),
            "keyword lookup should ignore case: {}",
            info.canonical
        );
        assert_eq!(keywords::as_str(info.id), info.canonical, "keyword as_str mismatch for {:?}", info.id);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate keyword spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn data_types_are_keywords_of_the_data_type_category() {
    for info in data_types::DATA_TYPES {
        assert_eq!(data_types::from_str(info.canonical), Some(info.id));
        assert_eq!(data_types::from_keyword(info.keyword), Some(info.id));
        assert_eq!(
            keywords::as_str(info.keyword),
            info.canonical,
            "data type {:?} spelled differently from its keyword",
            info.id
        );
        assert_eq!(keywords::category(info.keyword), KeywordCategory::DataType);
    }

    let keyword_count = keywords::KEYWORDS
        .iter()
        .filter(|k| k.category == KeywordCategory::DataType)
        .count();
    assert_eq!(keyword_count, data_types::DATA_TYPES.len(), "every data-type keyword needs a data type entry");
}

#[test]
fn word_operators_are_keywords_of_the_operator_category() {
    for info in operators::OPERATORS.iter().filter(|o| o.is_keyword_spelling) {
        assert_eq!(operators::from_word(info.spelling), Some(info.id));
        let kw = keywords::from_str(info.spelling)
            .unwrap_or_else(|| panic!("word operator {} is not a keyword", info.spelling));
        assert_eq!(keywords::category(kw), KeywordCategory::Operator);
        assert_eq!(operators::from_keyword(kw), Some(info.id));
    }
}

#[test]
fn symbolic_operators_unique_and_resolvable() {
    let mut seen = HashSet::new();
    for info in operators::symbolic() {
        assert_eq!(operators::from_str(info.spelling), Some(info.id), "operator not resolvable: {}", info.spelling);
        assert!(seen.insert(info.spelling), "duplicate operator spelling {:?}", info.spelling);
    }
}

#[test]
fn delimiters_and_indirections_unique_and_resolvable() {
    let mut seen = HashSet::new();
    for info in delimiters::DELIMITERS {
        assert_eq!(delimiters::from_str(info.spelling), Some(info.id));
        assert_eq!(delimiters::as_str(info.id), info.spelling);
        assert!(seen.insert(info.spelling), "duplicate delimiter spelling {:?}", info.spelling);
    }
    for info in indirection::INDIRECTIONS {
        assert_eq!(indirection::from_str(info.spelling), Some(info.id));
        assert_eq!(indirection::as_str(info.id), info.spelling);
        assert!(seen.insert(info.spelling), "indirection spelling {:?} collides", info.spelling);
    }
}

#[test]
fn directives_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, directives::DirectiveId> = HashMap::new();
    for info in directives::DIRECTIVES {
        assert_eq!(directives::from_str(info.canonical), Some(info.id));
        assert_eq!(directives::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate directive spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn special_directives_take_arguments() {
    use directives::{DirectiveForm, DirectiveId};

    for id in [
        DirectiveId::Source,
        DirectiveId::Target,
        DirectiveId::Assertion,
        DirectiveId::Columns,
        DirectiveId::CrossRef,
        DirectiveId::NoCrossRef,
    ] {
        assert_eq!(directives::form(id), DirectiveForm::Complex, "{id:?}");
    }
}

#[test]
fn std_functions_start_with_dollar_and_are_unique() {
    let mut seen = HashSet::new();
    for info in std_functions::STD_FUNCTIONS {
        assert!(info.name.starts_with('$'), "{} must start with $", info.name);
        assert!(seen.insert(info.name), "duplicate standard function {}", info.name);
        assert!(std_functions::is_std_function(&info.name.to_ascii_lowercase()));
    }
}

#[test]
fn every_symbol_spelling_matches_itself_in_full() {
    for spelling in symbols::all_spellings() {
        let m = symbols::longest_match(spelling).unwrap_or_else(|| panic!("{spelling:?} did not match"));
        assert_eq!(m.len, spelling.len(), "{spelling:?} was shadowed by a shorter spelling");
    }
}

#[test]
fn longest_match_prefers_longer_spellings() {
    use delimiters::DelimiterId;
    use indirection::IndirectionId;
    use operators::OperatorId;

    let cases: &[(&str, SymbolClass, usize)] = &[
        ("<=x", SymbolClass::Operator(OperatorId::LessEq), 2),
        ("<<2", SymbolClass::Operator(OperatorId::ShiftLeft), 2),
        ("':=' b", SymbolClass::Operator(OperatorId::MoveLeft), 4),
        ("(*);", SymbolClass::Delimiter(DelimiterId::TemplateStar), 3),
        ("(a)", SymbolClass::Delimiter(DelimiterId::LParen), 1),
        (".<0:3>", SymbolClass::Delimiter(DelimiterId::BitFieldOpen), 2),
        (".EXT p", SymbolClass::Indirection(IndirectionId::Extended), 4),
        (".sgx p", SymbolClass::Indirection(IndirectionId::SystemGlobalExtended), 4),
        (".EXTRA", SymbolClass::Delimiter(DelimiterId::Dot), 1),
        ("'SG' + 3", SymbolClass::Indirection(IndirectionId::BaseSystemGlobal), 4),
        ("\r\nX", SymbolClass::LineTerminator, 2),
        ("\nX", SymbolClass::LineTerminator, 1),
        ("= 1", SymbolClass::Delimiter(DelimiterId::Equal), 1),
        (":= 1", SymbolClass::Operator(OperatorId::Assign), 2),
    ];

    for (input, class, len) in cases {
        let m = symbols::longest_match(input).unwrap_or_else(|| panic!("{input:?} did not match"));
        assert_eq!((m.class, m.len), (*class, *len), "input {input:?}");
    }

    assert_eq!(symbols::longest_match("~"), None);
    assert_eq!(symbols::longest_match(""), None);
}

#[test]
fn numeric_markers_need_a_valid_digit() {
    assert_eq!(numeric::match_base_prefix("%377"), Some((NumericBase::Octal, 1)));
    assert_eq!(numeric::match_base_prefix("%B101"), Some((NumericBase::Binary, 2)));
    assert_eq!(numeric::match_base_prefix("%h1f"), Some((NumericBase::Hex, 2)));
    assert_eq!(numeric::match_base_prefix("%D42"), Some((NumericBase::Decimal, 2)));
    assert_eq!(numeric::match_base_prefix("%B2"), None);
    assert_eq!(numeric::match_base_prefix("%8"), None);
    assert_eq!(numeric::match_base_prefix("42"), None);

    assert_eq!(
        numeric::match_suffix("%F)", NumericBase::Hex),
        Some((numeric::NumericSuffix::Fixed, 2))
    );
    assert_eq!(numeric::match_suffix("F)", NumericBase::Hex), None);
    assert_eq!(numeric::match_suffix("DAYS", NumericBase::Decimal), None);
}
