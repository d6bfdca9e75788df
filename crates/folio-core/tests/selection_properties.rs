//! Properties of the filter/sort step checked over every selection the
//! built-in catalog and a multi-record fixture offer, plus an unmatched
//! category.

use folio_core::{Catalog, CategoryFilter, Publication, Selection, SortOrder, select};

/// Every filter a control could carry: all, each category, and one that
/// matches nothing.
fn all_selections(catalog: &Catalog) -> Vec<Selection> {
    let mut filters = vec![CategoryFilter::All];
    filters.extend(
        catalog
            .categories()
            .into_iter()
            .map(|c| CategoryFilter::Category(c.tag)),
    );
    filters.push(CategoryFilter::parse("nonexistent-category"));

    filters
        .into_iter()
        .flat_map(|f| SortOrder::ALL.map(|s| Selection::new(f.clone(), s)))
        .collect()
}

/// Records as (id, year, category). Two categories with several records
/// each, interleaved in source order, with repeated years inside each.
const FIXTURE: &[(&str, u16, &str)] = &[
    ("v1", 2023, "vision"),
    ("n1", 2022, "nlp"),
    ("v2", 2024, "vision"),
    ("v3", 2023, "vision"),
    ("n2", 2022, "nlp"),
    ("v4", 2024, "vision"),
    ("v5", 2022, "vision"),
    ("n3", 2023, "nlp"),
];

fn fixture() -> Catalog {
    let mut toml_str = String::new();
    for (id, year, category) in FIXTURE {
        toml_str.push_str(&format!(
            "[[publications]]\nid = \"{id}\"\nyear = {year}\ncategory = \"{category}\"\n\
             category_label = \"{category}\"\nstyle = \"royal\"\ntitle = \"Paper {id}\"\n\
             authors = \"X\"\nstatus = \"Published\"\n\n"
        ));
    }
    Catalog::from_toml_str(&toml_str).unwrap()
}

/// Every (catalog, selection) pair the properties are checked against.
fn cases() -> Vec<(Catalog, Selection)> {
    [Catalog::builtin(), fixture()]
        .into_iter()
        .flat_map(|c| {
            all_selections(&c)
                .into_iter()
                .map(move |s| (c.clone(), s))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn ids<'a>(records: &[&'a Publication]) -> Vec<&'a str> {
    records.iter().map(|p| p.id.as_str()).collect()
}

fn position(records: &[Publication], p: &Publication) -> usize {
    records.iter().position(|r| r.id == p.id).unwrap()
}

#[test]
fn selection_contains_exactly_the_matching_records() {
    for (catalog, sel) in cases() {
        let out = select(&catalog.publications, &sel);
        let expected = catalog
            .publications
            .iter()
            .filter(|p| sel.filter.matches(p))
            .count();
        assert_eq!(out.len(), expected, "{sel:?}");
        assert!(out.iter().all(|p| sel.filter.matches(p)), "{sel:?}");

        let mut unique = ids(&out);
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), out.len(), "duplicates in {sel:?}");
    }
}

#[test]
fn years_follow_the_sort_order() {
    for (catalog, sel) in cases() {
        let out = select(&catalog.publications, &sel);
        for pair in out.windows(2) {
            match sel.sort {
                SortOrder::Newest => assert!(pair[0].year >= pair[1].year, "{sel:?}"),
                SortOrder::Oldest => assert!(pair[0].year <= pair[1].year, "{sel:?}"),
            }
        }
    }
}

#[test]
fn equal_years_keep_source_order() {
    for (catalog, sel) in cases() {
        let out = select(&catalog.publications, &sel);
        for pair in out.windows(2) {
            if pair[0].year == pair[1].year {
                assert!(
                    position(&catalog.publications, pair[0])
                        < position(&catalog.publications, pair[1]),
                    "{sel:?}"
                );
            }
        }
    }
}

#[test]
fn applying_twice_is_idempotent() {
    for (catalog, sel) in cases() {
        let first = catalog.view(&sel);
        let second = catalog.view(&sel);
        assert_eq!(first, second);
    }
}

#[test]
fn switching_sort_keeps_the_filtered_set() {
    for (catalog, sel) in cases() {
        let flipped = Selection::new(sel.filter.clone(), sel.sort.toggle());
        let mut a = ids(&select(&catalog.publications, &sel));
        let mut b = ids(&select(&catalog.publications, &flipped));
        a.sort();
        b.sort();
        assert_eq!(a, b, "{sel:?}");
    }
}

#[test]
fn source_list_is_untouched() {
    for catalog in [Catalog::builtin(), fixture()] {
        let before = catalog.publications.clone();
        for sel in all_selections(&catalog) {
            let _ = catalog.view(&sel);
        }
        assert_eq!(catalog.publications, before);
    }
}

#[test]
fn multi_record_category_orders_with_stable_ties() {
    let catalog = fixture();
    let vision = CategoryFilter::parse("vision");

    let newest = select(
        &catalog.publications,
        &Selection::new(vision.clone(), SortOrder::Newest),
    );
    assert_eq!(ids(&newest), vec!["v2", "v4", "v1", "v3", "v5"]);

    let oldest = select(
        &catalog.publications,
        &Selection::new(vision, SortOrder::Oldest),
    );
    assert_eq!(ids(&oldest), vec!["v5", "v1", "v3", "v2", "v4"]);
}

#[test]
fn second_category_is_disjoint_and_complete() {
    let catalog = fixture();
    let nlp = CategoryFilter::parse("nlp");

    let newest = select(
        &catalog.publications,
        &Selection::new(nlp.clone(), SortOrder::Newest),
    );
    assert_eq!(ids(&newest), vec!["n3", "n1", "n2"]);

    let oldest = select(&catalog.publications, &Selection::new(nlp, SortOrder::Oldest));
    assert_eq!(ids(&oldest), vec!["n1", "n2", "n3"]);

    let all = select(&catalog.publications, &Selection::default());
    assert_eq!(all.len(), FIXTURE.len());
}
