// Pattern Shape Contract Tests
//
// These tests verify INVARIANTS that MUST NEVER BREAK regardless of
// implementation. The downstream query assembly discovers each criterion's
// anchor triple positionally and assumes OPTIONAL blocks are siblings of
// basic patterns; both assumptions are protected here.

use vqb_core::{
    ClassEntry, ClassPatternBuilder, ClassSelection, OntologyLibrary, Pattern, PropertyEntry,
    QuerySettings, VariableCounter,
};

const PERSON: &str = "http://ex.org#Person";
const NAME: &str = "http://ex.org#name";

fn library(with_label: bool, multilingual: bool, optional_enabled: bool) -> OntologyLibrary {
    let mut library = OntologyLibrary::new();
    library.insert_class(
        PERSON,
        ClassEntry {
            default_label_property: with_label.then(|| NAME.to_string()),
            tooltip: None,
        },
    );
    if with_label {
        library.insert_property(
            NAME,
            PropertyEntry {
                multilingual,
                optional_enabled,
                ..Default::default()
            },
        );
    }
    library
}

fn resolved_selection(library: &OntologyLibrary) -> ClassSelection {
    let counter = VariableCounter::new();
    let mut selection = ClassSelection::new();
    selection.select_type(PERSON, &counter, library).unwrap();
    selection
}

fn compile(
    selection: &ClassSelection,
    library: &OntologyLibrary,
    settings: &QuerySettings,
) -> Vec<Pattern> {
    let mut builder = ClassPatternBuilder::new(selection, library, settings);
    builder.build().unwrap();
    builder.into_patterns()
}

/// WHY: An incomplete criterion is a normal editor state, not an error
/// REASON: The user sees live query updates while still filling in widgets
/// BREAKS: The whole editing flow if incomplete rows raise errors
#[test]
fn blocking_states_compile_to_silent_empty() {
    let library = library(true, true, true);
    let settings = QuerySettings::default();

    // no class chosen yet
    let untouched = ClassSelection::new();
    assert!(compile(&untouched, &library, &settings).is_empty());

    // class chosen but a widget still blocks
    let mut blocked = resolved_selection(&library);
    blocked.set_widget_blocking(true);
    assert!(compile(&blocked, &library, &settings).is_empty());
}

/// WHY: The type-assertion triple is the anchor of every criterion
/// REASON: Later assembly stages locate each node's anchor positionally
/// BREAKS: Query assembly if anything is emitted before the anchor
#[test]
fn anchor_is_first_in_every_nonempty_result() {
    let settings = QuerySettings::default();
    for (with_label, multilingual, optional_enabled) in [
        (false, false, false),
        (true, false, false),
        (true, true, false),
        (true, false, true),
        (true, true, true),
    ] {
        let library = library(with_label, multilingual, optional_enabled);
        let selection = resolved_selection(&library);
        let patterns = compile(&selection, &library, &settings);

        assert!(!patterns.is_empty());
        let anchor = patterns[0]
            .as_bgp()
            .expect("first pattern must be the type-assertion BGP");
        assert_eq!(anchor.len(), 1, "the anchor BGP holds exactly one triple");
    }
}

/// WHY: A label group is emitted whole: plain members XOR one OPTIONAL
/// REASON: Splitting the group would separate a language filter from its
///         triple; nesting OPTIONAL in a BGP is ill-formed algebra
#[test]
fn label_group_exclusivity() {
    let settings = QuerySettings::default();

    // optional-enabled: exactly one OPTIONAL, no bare label triple on top
    {
        let library = library(true, true, true);
        let selection = resolved_selection(&library);
        let patterns = compile(&selection, &library, &settings);

        let optionals = patterns.iter().filter(|p| p.is_optional()).count();
        assert_eq!(optionals, 1);
        let top_level_label_triples = patterns
            .iter()
            .skip(1)
            .filter_map(|p| p.as_bgp())
            .count();
        assert_eq!(top_level_label_triples, 0);
    }

    // not optional-enabled: zero OPTIONAL, label as direct members
    {
        let library = library(true, true, false);
        let selection = resolved_selection(&library);
        let patterns = compile(&selection, &library, &settings);

        assert_eq!(patterns.iter().filter(|p| p.is_optional()).count(), 0);
        assert!(patterns.len() > 1, "label triple appears as a direct member");
    }
}

/// WHY: Compilation is a pure function of its inputs
/// REASON: The editor recompiles on every interaction and diffs nothing;
///         unstable output would flicker the generated query
#[test]
fn compile_is_deterministic() {
    let library = library(true, true, true);
    let selection = resolved_selection(&library);
    let settings = QuerySettings::default();

    let first = compile(&selection, &library, &settings);
    for _ in 0..5 {
        assert_eq!(first, compile(&selection, &library, &settings));
    }
}

/// A bare class with no label configuration compiles to the single
/// rdf:type triple.
#[test]
fn scenario_bare_class() {
    let library = library(false, false, false);
    let selection = resolved_selection(&library);
    let patterns = compile(&selection, &library, &QuerySettings::default());

    assert_eq!(patterns.len(), 1);
    let triples = patterns[0].as_bgp().unwrap();
    let serialized = format!("{:?}", triples[0]);
    assert!(serialized.contains("Person_1"));
    assert!(serialized.contains("22-rdf-syntax-ns#type"));
}

/// Scenario: multilingual + optional-enabled label yields
/// `OPTIONAL { triple . FILTER(lang(...) = "en") }` after the anchor.
#[test]
fn scenario_multilingual_optional_label() {
    let library = library(true, true, true);
    let selection = resolved_selection(&library);
    let patterns = compile(&selection, &library, &QuerySettings::default());

    assert_eq!(patterns.len(), 2);
    let Pattern::Optional { patterns: inner } = &patterns[1] else {
        panic!("label group must sit inside one OPTIONAL");
    };
    assert_eq!(inner.len(), 2);
    assert!(inner[0].as_bgp().is_some());
    assert!(inner[1].is_filter());
}

/// Scenario: a configured two-hop type predicate puts the parsed path in
/// the predicate position instead of a single named node.
#[test]
fn scenario_two_hop_type_predicate() {
    let library = library(false, false, false);
    let selection = resolved_selection(&library);
    let settings = QuerySettings {
        type_predicate: Some("<http://ex.org/p1>/<http://ex.org/p2>".to_string()),
        ..Default::default()
    };
    let patterns = compile(&selection, &library, &settings);

    assert_eq!(patterns.len(), 1);
    assert!(
        matches!(patterns[0], Pattern::Path { .. }),
        "multi-hop type predicate must compile to a path pattern"
    );
}
