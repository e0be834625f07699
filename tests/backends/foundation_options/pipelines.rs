//! End-to-end use of `Optional` as it appears in request handling code:
//! parsing inputs, combining them with lifts and extracting at the edge.

use foundation_options::{option_unsafe, AccessError, Erased, Optional, Unit};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
enum RequestError {
    #[display("missing parameter: {name}")]
    Missing { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Page {
    offset: u32,
    limit: u32,
}

fn param(query: &HashMap<&str, &str>, name: &str) -> Optional<u32> {
    Optional::of_nullable(query.get(name))
        .flat_map(|raw| Optional::try_as_option(|| raw.parse::<u32>()))
}

fn page(query: &HashMap<&str, &str>) -> Optional<Page> {
    param(query, "offset")
        .lift(param(query, "limit").filter(|l| *l > 0), |offset, limit| Page {
            offset,
            limit,
        })
}

#[test]
fn test_page_from_complete_query() {
    let query = HashMap::from([("offset", "20"), ("limit", "10")]);
    assert_eq!(page(&query), Optional::Some(Page { offset: 20, limit: 10 }));
}

#[test]
fn test_page_rejects_bad_or_missing_parts() {
    let cases = [
        HashMap::from([("offset", "20")]),
        HashMap::from([("offset", "x"), ("limit", "10")]),
        HashMap::from([("offset", "20"), ("limit", "0")]),
    ];
    for query in cases {
        assert!(page(&query).is_none(), "{query:?}");
    }
}

#[test]
fn test_edge_extraction_maps_none_to_domain_error() {
    let query = HashMap::from([("offset", "5")]);

    let limit = option_unsafe::or_throw_unsafe(
        param(&query, "limit"),
        RequestError::Missing { name: "limit" },
    );
    assert_eq!(limit.unwrap_err().to_string(), "missing parameter: limit");

    let offset = option_unsafe::try_get_unsafe(param(&query, "offset"));
    assert_eq!(offset, Ok(5));
    assert_eq!(
        option_unsafe::try_get_unsafe(param(&query, "cursor")),
        Err(AccessError::IllegalState)
    );
}

#[test]
fn test_lift_all_over_parsed_columns() {
    let row = ["3", "4", "5", "6"];
    let parsed: Vec<Optional<u32>> = row
        .iter()
        .map(|raw| Optional::try_as_option(|| raw.parse::<u32>()))
        .collect();

    let mut columns = parsed.into_iter();
    let first = columns.next().unwrap_or_default();
    let total = first.lift_all(columns, |values| values.iter().sum::<u32>());
    assert_eq!(total, Optional::Some(18));
}

#[test]
fn test_erased_settings_recovered_by_type() {
    let mut settings: HashMap<&str, Erased> = HashMap::from([
        ("retries", Box::new(3_u8) as Erased),
        ("host", Box::new(String::from("localhost")) as Erased),
    ]);

    let retries = Optional::of_nullable(settings.remove("retries")).of_type::<u8>();
    assert_eq!(retries, Optional::Some(3));

    let wrong_type = Optional::of_nullable(settings.remove("host")).of_type::<u8>();
    assert!(wrong_type.is_none());

    let missing = Optional::of_nullable(settings.remove("port")).of_type::<u16>();
    assert!(missing.is_none());
}

#[test]
fn test_side_effects_return_unit() {
    let mut audit = Vec::new();
    let unit = Optional::some("login").match_action(|event| audit.push(event), || {});
    assert_eq!(unit, Unit::DEFAULT);

    let unit = Optional::<&str>::none().match_action(|event| audit.push(event), || {});
    assert_eq!(unit, Unit::DEFAULT);
    assert_eq!(audit, vec!["login"]);

    let untouched = Optional::<&str>::none().if_some(|event| audit.push(event));
    assert!(untouched.is_none());
    assert_eq!(Unit::from_action(|| audit.clear()), Unit::DEFAULT);
    assert!(audit.is_empty());
}

#[test]
#[tracing_test::traced_test]
fn test_traced_pipeline_logs_each_stage() {
    let result = Optional::some(21)
        .traced("input")
        .map(|v| v * 2)
        .traced("doubled")
        .filter(|v| *v > 100)
        .traced("filtered");

    assert!(result.is_none());
    assert!(logs_contain("input: 21"));
    assert!(logs_contain("doubled: 42"));
    assert!(logs_contain("filtered: None"));
}
